//! CLI interface for wagmi.
//!
//! Each invocation is one session: hydrate the tracker from disk, apply at
//! most one form submission, and print the resulting view.
//!
//! - `wagmi add|edit`: fill the form and submit it.
//! - `wagmi list|show|options`: read-only views.
//!
//! Records are addressed by full UUID or unambiguous prefix (e.g. `a3b`).

mod format;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use jiff::{civil::Date, tz::TimeZone};
use uuid::Uuid;

use wagmi::form::Form;
use wagmi::model::{Application, Status};
use wagmi::query::{self, Query, SortMode, StatusFilter};
use wagmi::storage::{FileStore, KeyValueStore};
use wagmi::tracker::{Outcome, Tracker};

use crate::config::Config;

use format::{format_details, format_list, format_options};

/// wagmi: track internship applications. We're all gonna make it.
#[derive(Debug, Parser)]
#[command(name = "wagmi", version, after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    /// Directory holding application data.
    /// Overrides `data-dir` from `~/.wagmi/config.toml`.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r#"Workflow:
  1. wagmi add --role "SWE Intern" --company Acme
     → prints the new application's short id (e.g. 3f2b8f0d)
  2. wagmi edit 3f2 --status oa --deadline 2025-06-01
  3. wagmi list --sort company --search acme

Statuses: applied, oa, oa-submitted, interviewing, offer, rejected, ghosted"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record a new application. Prints its short id.
    Add {
        /// Internship role, e.g. "SWE Intern".
        #[arg(long)]
        role: String,

        /// Company name.
        #[arg(long)]
        company: String,

        #[arg(long, value_enum, default_value_t = StatusArg::Applied)]
        status: StatusArg,

        /// OA due date (`YYYY-MM-DD`). Only kept when the status is `oa`.
        #[arg(long)]
        deadline: Option<Date>,
    },

    /// Change an existing application.
    ///
    /// Unspecified fields keep their current value. Moving away from `oa`
    /// clears the deadline.
    Edit {
        /// Application id: full UUID or unambiguous prefix.
        id: String,

        #[arg(long)]
        role: Option<String>,

        #[arg(long)]
        company: Option<String>,

        #[arg(long, value_enum)]
        status: Option<StatusArg>,

        /// OA due date (`YYYY-MM-DD`). Only kept when the status is `oa`.
        #[arg(long, conflicts_with = "clear_deadline")]
        deadline: Option<Date>,

        /// Remove the OA due date.
        #[arg(long)]
        clear_deadline: bool,
    },

    /// Show applications as a table.
    List {
        /// Only show applications whose role or company contains this text.
        #[arg(long)]
        search: Option<String>,

        /// Only show applications with this status.
        #[arg(long, value_enum, default_value_t = FilterArg::All)]
        status: FilterArg,

        /// Ordering. Defaults to `default-sort` from the config, else `status`.
        #[arg(long, value_enum)]
        sort: Option<SortArg>,

        /// Print the visible applications as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Show every field of one application.
    Show {
        /// Application id: full UUID or unambiguous prefix.
        id: String,
    },

    /// List the status filters and sort modes `list` accepts.
    Options,
}

/// CLI-facing status, mapped to the domain `Status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Applied,
    /// Online assessment pending. Takes a deadline.
    Oa,
    OaSubmitted,
    Interviewing,
    Offer,
    Rejected,
    Ghosted,
}

impl StatusArg {
    fn to_domain(self) -> Status {
        match self {
            Self::Applied => Status::Applied,
            Self::Oa => Status::Oa,
            Self::OaSubmitted => Status::OaSubmitted,
            Self::Interviewing => Status::Interviewing,
            Self::Offer => Status::Offer,
            Self::Rejected => Status::Rejected,
            Self::Ghosted => Status::Ghosted,
        }
    }
}

/// CLI-facing status filter, mapped to the domain `StatusFilter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    All,
    Applied,
    Oa,
    OaSubmitted,
    Interviewing,
    Offer,
    Rejected,
    Ghosted,
}

impl FilterArg {
    fn to_domain(self) -> StatusFilter {
        let status = match self {
            Self::All => return StatusFilter::All,
            Self::Applied => StatusArg::Applied,
            Self::Oa => StatusArg::Oa,
            Self::OaSubmitted => StatusArg::OaSubmitted,
            Self::Interviewing => StatusArg::Interviewing,
            Self::Offer => StatusArg::Offer,
            Self::Rejected => StatusArg::Rejected,
            Self::Ghosted => StatusArg::Ghosted,
        };
        StatusFilter::Only(status.to_domain())
    }
}

/// CLI-facing sort mode, mapped to the domain `SortMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Most recently added first.
    Newest,
    /// Least recently added first.
    Oldest,
    /// Company name, A to Z.
    Company,
    /// Offers first, rejections last.
    Status,
}

impl SortArg {
    fn to_domain(self) -> SortMode {
        match self {
            Self::Newest => SortMode::Newest,
            Self::Oldest => SortMode::Oldest,
            Self::Company => SortMode::Company,
            Self::Status => SortMode::Status,
        }
    }
}

/// Run the CLI, returning an error message on failure.
pub fn run(cli: Cli, config: &Config) -> Result<(), String> {
    let tz = TimeZone::system();

    match cli.command {
        Command::Add {
            role,
            company,
            status,
            deadline,
        } => {
            let mut tracker = open_tracker(cli.data_dir, config)?;
            cmd_add(&mut tracker, tz, role, company, status, deadline)
        }
        Command::Edit {
            id,
            role,
            company,
            status,
            deadline,
            clear_deadline,
        } => {
            let mut tracker = open_tracker(cli.data_dir, config)?;
            let changes = Changes {
                role,
                company,
                status: status.map(StatusArg::to_domain),
                deadline,
                clear_deadline,
            };
            cmd_edit(&mut tracker, tz, &id, changes)
        }
        Command::List {
            search,
            status,
            sort,
            json,
        } => {
            let tracker = open_tracker(cli.data_dir, config)?;
            let query = Query {
                search: search.unwrap_or_default(),
                filter: status.to_domain(),
                sort: sort.map_or(config.default_sort, SortArg::to_domain),
            };
            cmd_list(&tracker, &query, json, &tz)
        }
        Command::Show { id } => {
            let tracker = open_tracker(cli.data_dir, config)?;
            let application = resolve(&tracker, &id)?;
            print!("{}", format_details(application, &tz));
            Ok(())
        }
        Command::Options => {
            print!("{}", format_options());
            Ok(())
        }
    }
}

/// Hydrate the tracker from the data directory: `--data-dir`, then the
/// config's `data-dir`, then `~/.wagmi/data/`.
fn open_tracker(data_dir: Option<PathBuf>, config: &Config) -> Result<Tracker<FileStore>, String> {
    let root = data_dir
        .or_else(|| config.data_dir.clone())
        .or_else(FileStore::default_root)
        .ok_or("could not determine home directory")?;
    let store = FileStore::new(&root)
        .map_err(|e| format!("failed to open data directory {}: {e}", root.display()))?;
    Ok(Tracker::open(store))
}

/// Field overrides for `edit`. `None` keeps the current value.
#[derive(Debug, Default)]
struct Changes {
    role: Option<String>,
    company: Option<String>,
    status: Option<Status>,
    deadline: Option<Date>,
    clear_deadline: bool,
}

impl Changes {
    fn is_empty(&self) -> bool {
        self.role.is_none()
            && self.company.is_none()
            && self.status.is_none()
            && self.deadline.is_none()
            && !self.clear_deadline
    }
}

fn cmd_add<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    tz: TimeZone,
    role: String,
    company: String,
    status: StatusArg,
    deadline: Option<Date>,
) -> Result<(), String> {
    let mut form = Form::new(tz);
    form.set_role(role);
    form.set_company(company);
    form.set_status(status.to_domain());
    apply_deadline(&mut form, deadline);

    submit(&mut form, tracker)
}

fn cmd_edit<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    tz: TimeZone,
    reference: &str,
    changes: Changes,
) -> Result<(), String> {
    let mut form = Form::new(tz);
    form.start_edit(resolve(tracker, reference)?);

    if changes.is_empty() {
        form.cancel_edit();
        eprintln!("Nothing to change");
        return Ok(());
    }

    if let Some(role) = changes.role {
        form.set_role(role);
    }
    if let Some(company) = changes.company {
        form.set_company(company);
    }
    if let Some(status) = changes.status {
        form.set_status(status);
    }
    if changes.clear_deadline {
        form.set_deadline(None);
    }
    apply_deadline(&mut form, changes.deadline);

    submit(&mut form, tracker)
}

/// Sets the form deadline, warning when the status doesn't take one.
fn apply_deadline(form: &mut Form, deadline: Option<Date>) {
    if deadline.is_some() && !form.set_deadline(deadline) {
        eprintln!(
            "Ignoring --deadline: only OA applications have a deadline (status is {})",
            form.status()
        );
    }
}

fn submit<S: KeyValueStore>(form: &mut Form, tracker: &mut Tracker<S>) -> Result<(), String> {
    let editing = form.is_editing();
    match form.submit(tracker) {
        Outcome::Created(id) => {
            let short = tracker.get(id).map_or_else(|| id.to_string(), Application::short_id);
            println!("{short}");
            eprintln!("Added application ({} tracked)", tracker.len());
            Ok(())
        }
        Outcome::Updated(id) => {
            let short = tracker.get(id).map_or_else(|| id.to_string(), Application::short_id);
            eprintln!("Updated {short}");
            Ok(())
        }
        Outcome::Invalid if editing => Err("role and company cannot be blank".to_string()),
        Outcome::Invalid => Err("role and company are required".to_string()),
        Outcome::UnknownId(id) => Err(format!("no application with id {id}")),
    }
}

fn cmd_list<S: KeyValueStore>(
    tracker: &Tracker<S>,
    query: &Query,
    json: bool,
    tz: &TimeZone,
) -> Result<(), String> {
    let rows = query::visible(tracker.applications(), query);

    if json {
        let json = serde_json::to_string_pretty(&rows)
            .map_err(|e| format!("failed to serialize applications: {e}"))?;
        println!("{json}");
        return Ok(());
    }

    print!("{}", format_list(&rows, tz));
    Ok(())
}

/// Resolve an application reference (full UUID or unambiguous prefix).
fn resolve<'a, S: KeyValueStore>(
    tracker: &'a Tracker<S>,
    reference: &str,
) -> Result<&'a Application, String> {
    // Try full UUID first.
    if let Ok(id) = reference.parse::<Uuid>() {
        return tracker
            .get(id)
            .ok_or_else(|| format!("no application with id {id}"));
    }

    let reference = reference.to_ascii_lowercase();
    if reference.is_empty() {
        return Err("application id cannot be empty".to_string());
    }

    let matches: Vec<&Application> = tracker
        .applications()
        .iter()
        .filter(|a| a.id.to_string().starts_with(&reference))
        .collect();

    match matches.as_slice() {
        [] => Err(format!("no application matching '{reference}'")),
        [one] => Ok(*one),
        many => {
            let ids: Vec<String> = many.iter().map(|a| a.short_id()).collect();
            Err(format!(
                "'{reference}' is ambiguous: matches {} applications: {}",
                many.len(),
                ids.join(", ")
            ))
        }
    }
}
