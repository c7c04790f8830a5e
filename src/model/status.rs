//! Application status: where an application stands in the hiring pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where an application stands.
///
/// Serialized with the human-facing labels (`"OA Submitted"`, not
/// `"OaSubmitted"`), which is also the on-disk format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Application sent, nothing heard back yet.
    #[default]
    Applied,

    /// Online assessment received. The only status that carries a deadline.
    #[serde(rename = "OA")]
    Oa,

    /// Online assessment completed and submitted.
    #[serde(rename = "OA Submitted")]
    OaSubmitted,

    /// In the interview loop.
    Interviewing,

    /// Offer received.
    Offer,

    /// Turned down.
    Rejected,

    /// No response for long enough to stop waiting.
    Ghosted,
}

impl Status {
    /// Every status, in form display order.
    pub const ALL: [Self; 7] = [
        Self::Applied,
        Self::Oa,
        Self::OaSubmitted,
        Self::Interviewing,
        Self::Offer,
        Self::Rejected,
        Self::Ghosted,
    ];

    /// Rank used by the status sort. Higher ranks sort first.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::Offer => 6,
            Self::Interviewing => 5,
            Self::OaSubmitted => 4,
            Self::Oa => 3,
            Self::Applied => 2,
            Self::Ghosted => 1,
            Self::Rejected => 0,
        }
    }

    /// Whether a record in this status may carry a deadline.
    #[must_use]
    pub fn takes_deadline(self) -> bool {
        matches!(self, Self::Oa)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Oa => "OA",
            Self::OaSubmitted => "OA Submitted",
            Self::Interviewing => "Interviewing",
            Self::Offer => "Offer",
            Self::Rejected => "Rejected",
            Self::Ghosted => "Ghosted",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
