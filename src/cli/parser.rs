use crate::export::{ExportFormat, SheetFormat};
use clap::{Parser, Subcommand};

/// Command-line interface definition for eldlogger
/// CLI application to track trips and duty hours with SQLite
#[derive(Parser)]
#[command(
    name = "eldlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track trips and duty-status hours and render driver daily log sheets",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print rows from the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Open a new trip (or complete an existing one)
    Trip {
        /// Trip date (YYYY-MM-DD); required unless --complete is used
        date: Option<String>,

        /// Origin, free text or "lat,lng"
        #[arg(long = "from", help = "Origin location (address or \"lat,lng\")")]
        from: Option<String>,

        /// Destination, free text or "lat,lng"
        #[arg(long = "to", help = "Destination location (address or \"lat,lng\")")]
        to: Option<String>,

        #[arg(long = "carrier", help = "Name of carrier or carriers")]
        carrier: Option<String>,

        #[arg(long = "office", help = "Main office address")]
        office: Option<String>,

        #[arg(long = "truck", help = "Truck/tractor number")]
        truck: Option<String>,

        #[arg(long = "trailer", help = "Trailer number")]
        trailer: Option<String>,

        #[arg(long = "terminal", help = "Home terminal address")]
        terminal: Option<String>,

        /// Cycle rule: 70/8 (default) or 60/7
        #[arg(long = "cycle", help = "Hours-of-service cycle: 70/8 or 60/7")]
        cycle: Option<String>,

        #[arg(long = "document", help = "DVIR or manifest number")]
        document: Option<String>,

        #[arg(long = "shipper", help = "Shipper name")]
        shipper: Option<String>,

        #[arg(long = "commodity", help = "Commodity description")]
        commodity: Option<String>,

        #[arg(long = "remarks", help = "Free-form remarks for the daily log")]
        remarks: Option<String>,

        /// Complete a trip instead of creating one
        #[arg(long = "complete", value_name = "TRIP_ID", help = "Mark a trip completed")]
        complete: Option<i64>,
    },

    /// Record a duty-status change on a trip
    Duty {
        /// Duty status: off, sb, d, on (or the full names)
        status: String,

        #[arg(long = "trip", help = "Trip id the entry belongs to")]
        trip: i64,

        /// Log date (YYYY-MM-DD); defaults to the trip date
        #[arg(long = "date", help = "Log date (defaults to the trip date)")]
        date: Option<String>,

        /// Start of the interval (HH:MM)
        #[arg(long = "start", help = "Start time (HH:MM)")]
        start: String,

        /// End of the interval (HH:MM); omit to leave the status open
        #[arg(long = "end", help = "End time (HH:MM), omit to leave open")]
        end: Option<String>,

        #[arg(long = "miles", help = "Miles driven within this interval")]
        miles: Option<f64>,

        #[arg(long = "remarks", help = "Remark attached to this entry")]
        remarks: Option<String>,

        #[arg(long = "automated", help = "Mark the entry as automatically recorded")]
        automated: bool,
    },

    /// List trips, or one day's duty entries
    List {
        #[arg(long = "trip", help = "Trip id (required with --entries)")]
        trip: Option<i64>,

        #[arg(long = "date", help = "Filter by log date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "entries", help = "Show the day's duty entries")]
        entries: bool,
    },

    /// Delete a trip (with its entries) or a single entry
    Del {
        #[arg(long = "trip", help = "Trip id to delete")]
        trip: Option<i64>,

        #[arg(long = "entry", help = "Log entry id to delete")]
        entry: Option<i64>,
    },

    /// Render a driver daily log sheet
    Sheet {
        #[arg(long = "trip", help = "Trip id to render")]
        trip: i64,

        /// Log date (YYYY-MM-DD); defaults to the trip date
        #[arg(long = "date", help = "Log date (defaults to the trip date)")]
        date: Option<String>,

        #[arg(long, value_enum, default_value = "pdf")]
        format: SheetFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },

    /// Export raw log-entry data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
