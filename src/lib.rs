//! babytracker - Baby care log kept in plain JSON files
//!
//! Feeds, sleep, growth measurements and diaper changes are appended to one
//! JSON file per category under a data directory. [`infrastructure::StoreHandle`]
//! owns the active directory; [`infrastructure::RecordStore`] does the file work.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TrackerError;
