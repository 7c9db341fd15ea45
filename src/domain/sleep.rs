//! Sleep sessions

use super::category::{Category, Record};
use super::time_ref::validate_date;
use super::wire::{blank_as_none, timestamp};
use crate::error::{Result, TrackerError};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SleepType {
    Nap,
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SleepQuality {
    Good,
    Fair,
    Poor,
}

impl fmt::Display for SleepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SleepType::Nap => f.write_str("Nap"),
            SleepType::Night => f.write_str("Night"),
        }
    }
}

impl fmt::Display for SleepQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SleepQuality::Good => f.write_str("Good"),
            SleepQuality::Fair => f.write_str("Fair"),
            SleepQuality::Poor => f.write_str("Poor"),
        }
    }
}

impl FromStr for SleepType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nap" => Ok(SleepType::Nap),
            "night" => Ok(SleepType::Night),
            _ => Err(format!(
                "Invalid sleep type: '{}'. Valid types are: nap, night",
                s
            )),
        }
    }
}

impl FromStr for SleepQuality {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "good" => Ok(SleepQuality::Good),
            "fair" => Ok(SleepQuality::Fair),
            "poor" => Ok(SleepQuality::Poor),
            _ => Err(format!(
                "Invalid sleep quality: '{}'. Valid values are: good, fair, poor",
                s
            )),
        }
    }
}

/// A nap or a night of sleep
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SleepEntry {
    pub id: u64,
    pub date: String,
    #[serde(with = "timestamp")]
    pub start_time: Option<DateTime<FixedOffset>>,
    /// `None` while the baby is still asleep
    #[serde(with = "timestamp")]
    pub end_time: Option<DateTime<FixedOffset>>,
    /// Minutes
    pub duration: i64,
    #[serde(rename = "type", with = "blank_as_none")]
    pub sleep_type: Option<SleepType>,
    #[serde(with = "blank_as_none")]
    pub quality: Option<SleepQuality>,
    pub notes: String,
}

impl SleepEntry {
    pub fn is_nap(&self) -> bool {
        self.sleep_type == Some(SleepType::Nap)
    }

    pub fn is_night_sleep(&self) -> bool {
        self.sleep_type == Some(SleepType::Night)
    }

    pub fn is_ongoing(&self) -> bool {
        self.end_time.is_none()
    }

    /// Whole minutes between start and end, when both are known
    pub fn derived_duration(&self) -> Option<i64> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some((end - start).num_minutes().max(0)),
            _ => None,
        }
    }

    /// Required-field checks applied before an entry is saved
    pub fn validate(&self) -> Result<()> {
        validate_date(&self.date)?;
        if self.sleep_type.is_none() {
            return Err(TrackerError::InvalidEntry("sleep type is required".to_string()));
        }
        if let (Some(start), Some(end)) = (self.start_time, self.end_time) {
            if end < start {
                return Err(TrackerError::InvalidEntry(format!(
                    "sleep ends ({}) before it starts ({})",
                    end.to_rfc3339(),
                    start.to_rfc3339()
                )));
            }
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

impl Record for SleepEntry {
    const CATEGORY: Category = Category::Sleep;

    fn id(&self) -> u64 {
        self.id
    }

    fn assign_id(&mut self, id: u64) {
        self.id = id;
    }
}
