use crate::config::Backend;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rHabitlog
#[derive(Parser)]
#[command(
    name = "rhabitlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A habit, expense and workout tracker: log point-valued actions, follow streaks and badges toward a goal",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or a second profile)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Override the storage backend
    #[arg(global = true, long = "backend", value_enum)]
    pub backend: Option<Backend>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CategoryArg {
    Positive,
    Negative,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
    System,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the data store
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Inspect or maintain the SQLite database
    Db {
        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,
    },

    /// Manage action types
    Types {
        #[command(subcommand)]
        action: TypesAction,
    },

    /// Log an action (by id or name) for a date
    Log {
        /// Action type id or name
        action: String,

        #[arg(long, short, help = "Date (YYYY-MM-DD, today, yesterday); default today")]
        date: Option<String>,

        #[arg(long, short, help = "Optional note")]
        note: Option<String>,
    },

    /// Delete a logged action by id
    Del {
        id: u64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List logged actions
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's actions")]
        now: bool,

        #[arg(long, short, help = "Number of recent actions to show")]
        limit: Option<usize>,

        #[arg(long = "daily", help = "Show per-day totals instead of single actions")]
        daily: bool,
    },

    /// Show balance, progress and streak
    Status,

    /// Show badges
    Badges {
        #[arg(long = "earned", help = "Show only earned badges")]
        earned: bool,
    },

    /// Manage and use quick actions
    Quick {
        #[command(subcommand)]
        action: QuickAction,
    },

    /// Show or change user settings
    Settings {
        #[arg(long, help = "Points goal to reach")]
        goal: Option<i64>,

        #[arg(long, help = "Daily reminder time (HH:MM)")]
        reminder: Option<String>,

        #[arg(long, value_enum)]
        theme: Option<ThemeArg>,
    },

    /// Weekly workout routines
    Workout {
        #[command(subcommand)]
        action: WorkoutAction,
    },

    /// Export data
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter CSV export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import a JSON export, replacing all current data
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Create a backup copy of the data file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum TypesAction {
    /// List action types
    List {
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,
    },

    /// Create a custom action type
    Add {
        name: String,

        /// Points (sign is taken from the category)
        value: i64,

        #[arg(long, value_enum, default_value = "positive")]
        category: CategoryArg,
    },

    /// Rename or revalue an action type
    Edit {
        id: u32,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        value: Option<i64>,
    },

    /// Delete a custom action type
    Del { id: u32 },
}

#[derive(Subcommand)]
pub enum QuickAction {
    /// Show the quick-access list
    List,

    /// Add an action type to the quick-access list
    Add { id: u32 },

    /// Remove an action type from the quick-access list
    Remove { id: u32 },

    /// Log a quick action for today (by id or list position, e.g. @1)
    Log {
        action: String,

        #[arg(long, short)]
        note: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum WorkoutAction {
    /// Show a day's routine (default today) or the whole week with --week
    Show {
        day: Option<String>,

        #[arg(long)]
        week: bool,
    },

    /// Toggle completion of an exercise (1-based index)
    Toggle { day: String, index: usize },

    /// Set a custom routine for a weekday
    Set {
        day: String,

        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Exercise as NAME:SETS:REPS[:BENEFIT]; repeat for each exercise
        #[arg(long = "exercise", short = 'e', required = true)]
        exercises: Vec<String>,
    },

    /// Remove the custom routine of a weekday
    Clear { day: String },

    /// Clear completion flags of a weekday
    Reset { day: String },
}
