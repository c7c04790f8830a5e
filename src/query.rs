//! The visible list: filtering and sorting the collection for display.
//!
//! [`visible`] is pure. It borrows the collection, never mutates it, and
//! returns the same order for the same inputs.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::model::{Application, Status};

/// Which statuses to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    /// Every selectable filter: `All`, then each status.
    #[must_use]
    pub fn options() -> impl Iterator<Item = Self> {
        std::iter::once(Self::All).chain(Status::ALL.into_iter().map(Self::Only))
    }

    fn keeps(self, status: Status) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(status) => write!(f, "{status}"),
        }
    }
}

/// How the visible list is ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Most recently created first.
    Newest,
    /// Least recently created first.
    Oldest,
    /// Company name, A to Z.
    Company,
    /// Furthest along first: offers at the top, rejections at the bottom.
    #[default]
    Status,
}

impl SortMode {
    pub const ALL: [Self; 4] = [Self::Newest, Self::Oldest, Self::Company, Self::Status];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::Oldest => "Oldest",
            Self::Company => "Company",
            Self::Status => "Status",
        }
    }

    fn compare(self, a: &Application, b: &Application) -> Ordering {
        match self {
            Self::Newest => b.created_at.cmp(&a.created_at),
            Self::Oldest => a.created_at.cmp(&b.created_at),
            Self::Company => locale_cmp(&a.company, &b.company),
            Self::Status => b.status.rank().cmp(&a.status.rank()),
        }
    }
}

/// View parameters for [`visible`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Free text matched against role and company, case-insensitively.
    pub search: String,
    pub filter: StatusFilter,
    pub sort: SortMode,
}

/// Filters by status, then by search text, then sorts.
///
/// The sort is stable: records that compare equal keep their collection
/// order.
#[must_use]
pub fn visible<'a>(applications: &'a [Application], query: &Query) -> Vec<&'a Application> {
    let needle = query.search.trim().to_lowercase();

    let mut rows: Vec<&Application> = applications
        .iter()
        .filter(|a| query.filter.keeps(a.status))
        .filter(|a| {
            needle.is_empty()
                || a.role.to_lowercase().contains(&needle)
                || a.company.to_lowercase().contains(&needle)
        })
        .collect();

    rows.sort_by(|a, b| query.sort.compare(a, b));
    rows
}

/// Collation-style ordering. Base letters decide first; ties put unaccented
/// before accented and lowercase before uppercase.
fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Lowercased `s` with accents removed via NFD decomposition.
fn base_letters(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
