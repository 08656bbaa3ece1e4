//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use poligrade_domain::{
    AlignmentLabel, FilterSortSpec, Office, OfficeholderDraft, SortDirection, SortField, StateCode,
    Status,
};
use std::path::PathBuf;

/// Output format for listings and results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored console tables
    Table,
    /// JSON output
    Json,
}

impl From<OutputFormat> for poligrade_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => poligrade_domain::OutputFormat::Table,
            OutputFormat::Json => poligrade_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for poligrade
#[derive(Parser, Debug)]
#[command(name = "poligrade")]
#[command(author, version, about = "Political alignment quiz and officeholder grades")]
#[command(long_about = r#"
PoliGrade scores a short yes/no questionnaire onto a six-point alignment
scale (Progressive, Liberal, Centrist, Moderate, Conservative, Nationalist)
and lists elected officials and candidates graded on the same scale.

Configuration files are loaded from (in priority order):
1. POLIGRADE_* environment variables (e.g. POLIGRADE_ROSTER__PAGE_SIZE=25)
2. --config <path>     Explicit config file
3. ./poligrade.toml    Project-level config
4. ~/.config/poligrade/config.toml   Global config

Example:
  poligrade quiz
  poligrade quiz --answers yynnyny
  poligrade grades --office senator --sort name --desc
  poligrade grades --grade progressive --state CA
  poligrade admin --password hunter2 add --name "Jane Doe" --state OR --office house --district 3 --grade liberal
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators and banners
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Take the alignment quiz
    Quiz(QuizArgs),

    /// Browse graded officeholders
    Grades(RosterFilterArgs),

    /// Manage the roster (requires the site password when one is set)
    Admin(AdminArgs),

    /// List state codes and names
    States,
}

#[derive(Args, Debug, Default)]
pub struct QuizArgs {
    /// Answer non-interactively, one character per question (y/n, 1/0)
    #[arg(long, value_name = "ANSWERS")]
    pub answers: Option<String>,
}

/// Filter, sort and page flags shared by `grades` and `admin list`
#[derive(Args, Debug, Default, Clone)]
pub struct RosterFilterArgs {
    /// Case-insensitive substring of the name
    #[arg(long)]
    pub name: Option<String>,

    /// Two-letter state code
    #[arg(long)]
    pub state: Option<StateCode>,

    /// Case-insensitive substring of the district
    #[arg(long)]
    pub district: Option<String>,

    /// governor, senator or house (omit for all offices)
    #[arg(long)]
    pub office: Option<Office>,

    /// incumbent, candidate or none
    #[arg(long)]
    pub status: Option<Status>,

    /// Alignment grade
    #[arg(long)]
    pub grade: Option<AlignmentLabel>,

    /// Sort by name, state, district, office or grade
    #[arg(long, value_name = "FIELD")]
    pub sort: Option<SortField>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (defaults to roster.page_size)
    #[arg(long)]
    pub page_size: Option<usize>,
}

impl RosterFilterArgs {
    /// Build the query spec, using `default_page_size` when `--page-size` is absent.
    pub fn to_spec(&self, default_page_size: usize) -> FilterSortSpec {
        let mut spec = FilterSortSpec::default()
            .page(self.page)
            .with_page_size(self.page_size.unwrap_or(default_page_size));

        if let Some(name) = &self.name {
            spec = spec.with_name(name.clone());
        }
        if let Some(state) = &self.state {
            spec = spec.with_state(state.clone());
        }
        if let Some(district) = &self.district {
            spec = spec.with_district(district.clone());
        }
        if let Some(office) = self.office {
            spec = spec.with_office(office);
        }
        if let Some(status) = self.status {
            spec = spec.with_status(status);
        }
        if let Some(grade) = self.grade {
            spec = spec.with_grade(grade);
        }
        if let Some(field) = self.sort {
            let direction = if self.desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            spec = spec.sorted_by(field, direction);
        }
        spec
    }
}

#[derive(Args, Debug)]
pub struct AdminArgs {
    /// Site password
    #[arg(long)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub action: AdminAction,
}

#[derive(Subcommand, Debug)]
pub enum AdminAction {
    /// List records with their ids
    List(RosterFilterArgs),

    /// Show a single record
    Show { id: String },

    /// Add a record
    Add(DraftArgs),

    /// Replace the given fields of a record
    Update {
        id: String,
        #[command(flatten)]
        fields: UpdateArgs,
    },

    /// Delete a record
    Delete { id: String },
}

/// Fields for a new record
#[derive(Args, Debug, Clone)]
pub struct DraftArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub state: StateCode,

    #[arg(long)]
    pub office: Office,

    /// Only kept for House Representatives
    #[arg(long)]
    pub district: Option<String>,

    /// Defaults to none
    #[arg(long)]
    pub status: Option<Status>,

    #[arg(long)]
    pub grade: AlignmentLabel,
}

impl From<DraftArgs> for OfficeholderDraft {
    fn from(args: DraftArgs) -> Self {
        OfficeholderDraft {
            name: args.name,
            state: args.state,
            district: args.district,
            office: args.office,
            status: args.status,
            grade: args.grade,
        }
    }
}

/// Fields to change on an existing record; omitted fields keep their value
#[derive(Args, Debug, Clone, Default)]
pub struct UpdateArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub state: Option<StateCode>,

    #[arg(long)]
    pub office: Option<Office>,

    /// Pass an empty string to clear
    #[arg(long)]
    pub district: Option<String>,

    #[arg(long)]
    pub status: Option<Status>,

    #[arg(long)]
    pub grade: Option<AlignmentLabel>,
}

impl UpdateArgs {
    pub fn apply(self, mut draft: OfficeholderDraft) -> OfficeholderDraft {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(state) = self.state {
            draft.state = state;
        }
        if let Some(office) = self.office {
            draft.office = office;
        }
        if let Some(district) = self.district {
            draft.district = Some(district);
        }
        if let Some(status) = self.status {
            draft.status = Some(status);
        }
        if let Some(grade) = self.grade {
            draft.grade = grade;
        }
        draft
    }
}
