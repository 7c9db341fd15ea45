//! Record categories and the trait every stored entry implements

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The four independent collections kept by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Feed,
    Sleep,
    Growth,
    Diaper,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Feed,
        Category::Sleep,
        Category::Growth,
        Category::Diaper,
    ];

    /// File holding this category's collection, relative to the store root
    pub fn file_name(&self) -> &'static str {
        match self {
            Category::Feed => "feeds.json",
            Category::Sleep => "sleep.json",
            Category::Growth => "growth.json",
            Category::Diaper => "diapers.json",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Feed => "feed",
            Category::Sleep => "sleep",
            Category::Growth => "growth",
            Category::Diaper => "diaper",
        }
    }

    /// Position in [`Category::ALL`], used to index per-category resources
    pub fn index(&self) -> usize {
        match self {
            Category::Feed => 0,
            Category::Sleep => 1,
            Category::Growth => 2,
            Category::Diaper => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "feed" | "feeds" => Ok(Category::Feed),
            "sleep" | "sleeps" => Ok(Category::Sleep),
            "growth" => Ok(Category::Growth),
            "diaper" | "diapers" => Ok(Category::Diaper),
            _ => Err(format!(
                "Invalid category: '{}'. Valid categories are: feed, sleep, growth, diaper",
                s
            )),
        }
    }
}

/// An entry that lives in one category file.
///
/// The id is owned by the store: it is zero until the entry is saved and is
/// overwritten on save.
pub trait Record: Serialize + DeserializeOwned + Clone {
    const CATEGORY: Category;

    fn id(&self) -> u64;

    fn assign_id(&mut self, id: u64);

    /// Numeric fields as `(name, value)`; JSON has no encoding for NaN or
    /// infinity, so the store refuses entries where any of these is not finite
    fn measurements(&self) -> Vec<(&'static str, f64)> {
        Vec::new()
    }
}
