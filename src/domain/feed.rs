//! Feeding sessions

use super::category::{Category, Record};
use super::time_ref::validate_date;
use super::wire::{blank_as_none, timestamp};
use crate::error::{Result, TrackerError};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedType {
    #[serde(rename = "Bottle")]
    Bottle,
    #[serde(rename = "Breast (Left)", alias = "BreastLeft")]
    BreastLeft,
    #[serde(rename = "Breast (Right)", alias = "BreastRight")]
    BreastRight,
    #[serde(rename = "Breast (Both)", alias = "BreastBoth")]
    BreastBoth,
    #[serde(rename = "Solid Food", alias = "Solid")]
    Solid,
}

impl FeedType {
    pub fn label(&self) -> &'static str {
        match self {
            FeedType::Bottle => "Bottle",
            FeedType::BreastLeft => "Breast (Left)",
            FeedType::BreastRight => "Breast (Right)",
            FeedType::BreastBoth => "Breast (Both)",
            FeedType::Solid => "Solid Food",
        }
    }
}

impl fmt::Display for FeedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FeedType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let squashed: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        match squashed.as_str() {
            "bottle" => Ok(FeedType::Bottle),
            "breastleft" | "left" => Ok(FeedType::BreastLeft),
            "breastright" | "right" => Ok(FeedType::BreastRight),
            "breastboth" | "both" => Ok(FeedType::BreastBoth),
            "solid" | "solidfood" => Ok(FeedType::Solid),
            _ => Err(format!(
                "Invalid feed type: '{}'. Valid types are: bottle, breast-left, breast-right, breast-both, solid",
                s
            )),
        }
    }
}

/// A single feeding session
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedEntry {
    pub id: u64,
    pub date: String,
    #[serde(with = "timestamp")]
    pub time: Option<DateTime<FixedOffset>>,
    #[serde(rename = "type", with = "blank_as_none")]
    pub feed_type: Option<FeedType>,
    /// Amount in ml (or grams for solids); 0 when not measured
    pub quantity: f64,
    pub notes: String,
    /// Minutes, mostly meaningful for breastfeeding
    pub duration: i64,
}

impl FeedEntry {
    pub fn is_bottle_feed(&self) -> bool {
        self.feed_type == Some(FeedType::Bottle)
    }

    pub fn is_breast_feed(&self) -> bool {
        matches!(
            self.feed_type,
            Some(FeedType::BreastLeft | FeedType::BreastRight | FeedType::BreastBoth)
        )
    }

    /// Whether this kind of feed usually has a measurable quantity
    pub fn has_quantity(&self) -> bool {
        self.is_bottle_feed() || self.feed_type == Some(FeedType::Solid)
    }

    /// Required-field checks applied before an entry is saved
    pub fn validate(&self) -> Result<()> {
        validate_date(&self.date)?;
        if self.feed_type.is_none() {
            return Err(TrackerError::InvalidEntry("feed type is required".to_string()));
        }
        if !self.quantity.is_finite() || self.quantity < 0.0 {
            return Err(TrackerError::InvalidEntry(format!(
                "quantity must be zero or positive, got {}",
                self.quantity
            )));
        }
        if self.duration < 0 {
            return Err(TrackerError::InvalidEntry(format!(
                "duration must be zero or positive, got {}",
                self.duration
            )));
        }
        Ok(())
    }
}

impl Record for FeedEntry {
    const CATEGORY: Category = Category::Feed;

    fn id(&self) -> u64 {
        self.id
    }

    fn assign_id(&mut self, id: u64) {
        self.id = id;
    }

    fn measurements(&self) -> Vec<(&'static str, f64)> {
        vec![("quantity", self.quantity)]
    }
}
