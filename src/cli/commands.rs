//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "babytracker")]
#[command(about = "Log feeds, sleep, growth and diaper changes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory to use instead of the configured one
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a data directory and make it the default
    Init {
        /// Directory to use (default: the configured data directory)
        path: Option<PathBuf>,
    },

    /// Log a feeding session
    Feed(FeedArgs),

    /// Log a nap or night of sleep
    Sleep(SleepArgs),

    /// Log a growth measurement
    Growth(GrowthArgs),

    /// Log a diaper change
    Diaper(DiaperArgs),

    /// Show every entry of a category
    List {
        /// feed, sleep, growth or diaper
        category: String,

        /// Print the entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single entry as JSON
    Show {
        category: String,
        id: u64,
    },

    /// Print the active data directory
    Where,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct FeedArgs {
    /// bottle, breast-left, breast-right, breast-both or solid
    #[arg(long = "type")]
    pub feed_type: String,

    /// Amount given, in ml (or grams for solids)
    #[arg(short, long, default_value_t = 0.0)]
    pub quantity: f64,

    /// Length of the feed in minutes
    #[arg(long, default_value_t = 0)]
    pub duration: i64,

    /// today, yesterday, monday, last friday, or YYYY-MM-DD
    #[arg(short, long)]
    pub date: Option<String>,

    /// HH:MM (default: now)
    #[arg(short, long)]
    pub time: Option<String>,

    #[arg(short, long, default_value = "")]
    pub notes: String,
}

#[derive(Args, Debug, Default)]
pub struct SleepArgs {
    /// nap or night
    #[arg(long = "type")]
    pub sleep_type: String,

    /// HH:MM the sleep started
    #[arg(long)]
    pub start: Option<String>,

    /// HH:MM the sleep ended; earlier than --start means the next day
    #[arg(long)]
    pub end: Option<String>,

    /// good, fair or poor
    #[arg(long)]
    pub quality: Option<String>,

    #[arg(short, long)]
    pub date: Option<String>,

    #[arg(short, long, default_value = "")]
    pub notes: String,
}

#[derive(Args, Debug, Default)]
pub struct GrowthArgs {
    /// Weight in kg
    #[arg(short, long, default_value_t = 0.0)]
    pub weight: f64,

    /// Height in cm
    #[arg(long, default_value_t = 0.0)]
    pub height: f64,

    /// Head circumference in cm
    #[arg(long, default_value_t = 0.0)]
    pub head: f64,

    #[arg(short, long)]
    pub date: Option<String>,

    #[arg(short, long, default_value = "")]
    pub notes: String,
}

#[derive(Args, Debug, Default)]
pub struct DiaperArgs {
    /// wet, dirty or mixed
    #[arg(long = "type")]
    pub diaper_type: String,

    #[arg(short, long)]
    pub date: Option<String>,

    /// HH:MM (default: now)
    #[arg(short, long)]
    pub time: Option<String>,

    #[arg(short, long, default_value = "")]
    pub notes: String,
}
