//! CLI layer - Command-line interface

pub mod commands;
pub mod forms;
pub mod output;

pub use commands::{Cli, Commands, DiaperArgs, FeedArgs, GrowthArgs, SleepArgs};
pub use output::{format_entries, Listing};
