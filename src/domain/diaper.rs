//! Diaper changes

use super::category::{Category, Record};
use super::time_ref::validate_date;
use super::wire::{blank_as_none, timestamp};
use crate::error::{Result, TrackerError};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiaperType {
    Wet,
    Dirty,
    Mixed,
}

impl fmt::Display for DiaperType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiaperType::Wet => f.write_str("Wet"),
            DiaperType::Dirty => f.write_str("Dirty"),
            DiaperType::Mixed => f.write_str("Mixed"),
        }
    }
}

impl FromStr for DiaperType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wet" => Ok(DiaperType::Wet),
            "dirty" => Ok(DiaperType::Dirty),
            "mixed" | "both" => Ok(DiaperType::Mixed),
            _ => Err(format!(
                "Invalid diaper type: '{}'. Valid types are: wet, dirty, mixed",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiaperEntry {
    pub id: u64,
    pub date: String,
    #[serde(with = "timestamp")]
    pub time: Option<DateTime<FixedOffset>>,
    #[serde(rename = "type", with = "blank_as_none")]
    pub diaper_type: Option<DiaperType>,
    pub notes: String,
}

impl DiaperEntry {
    pub fn is_wet(&self) -> bool {
        matches!(self.diaper_type, Some(DiaperType::Wet | DiaperType::Mixed))
    }

    pub fn is_dirty(&self) -> bool {
        matches!(self.diaper_type, Some(DiaperType::Dirty | DiaperType::Mixed))
    }

    pub fn validate(&self) -> Result<()> {
        validate_date(&self.date)?;
        if self.diaper_type.is_none() {
            return Err(TrackerError::InvalidEntry("diaper type is required".to_string()));
        }
        Ok(())
    }
}

impl Record for DiaperEntry {
    const CATEGORY: Category = Category::Diaper;

    fn id(&self) -> u64 {
        self.id
    }

    fn assign_id(&mut self, id: u64) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(diaper_type: DiaperType) -> DiaperEntry {
        DiaperEntry {
            date: "2025-06-22".to_string(),
            diaper_type: Some(diaper_type),
            ..Default::default()
        }
    }

    #[test]
    fn test_is_wet() {
        assert!(change(DiaperType::Wet).is_wet());
        assert!(change(DiaperType::Mixed).is_wet());
        assert!(!change(DiaperType::Dirty).is_wet());
    }

    #[test]
    fn test_is_dirty() {
        assert!(change(DiaperType::Dirty).is_dirty());
        assert!(change(DiaperType::Mixed).is_dirty());
        assert!(!change(DiaperType::Wet).is_dirty());
    }

    #[test]
    fn test_validate_requires_type() {
        assert!(change(DiaperType::Wet).validate().is_ok());
        let untyped = DiaperEntry {
            diaper_type: None,
            ..change(DiaperType::Wet)
        };
        assert!(untyped.validate().is_err());
    }

    #[test]
    fn test_parse_type() {
        assert_eq!("Mixed".parse::<DiaperType>().unwrap(), DiaperType::Mixed);
        assert_eq!("both".parse::<DiaperType>().unwrap(), DiaperType::Mixed);
        assert!("soggy".parse::<DiaperType>().is_err());
    }
}
