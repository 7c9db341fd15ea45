//! Domain layer - Record types and input parsing

pub mod category;
pub mod diaper;
pub mod feed;
pub mod growth;
pub mod sleep;
pub mod time_ref;
pub mod wire;

pub use category::{Category, Record};
pub use diaper::{DiaperEntry, DiaperType};
pub use feed::{FeedEntry, FeedType};
pub use growth::GrowthEntry;
pub use sleep::{SleepEntry, SleepQuality, SleepType};
pub use time_ref::DateReference;
