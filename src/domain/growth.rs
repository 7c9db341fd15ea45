//! Growth measurements

use super::category::{Category, Record};
use super::time_ref::validate_date;
use crate::error::{Result, TrackerError};
use serde::{Deserialize, Serialize};

/// Weight, height and head circumference taken on one day; 0 means "not measured"
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthEntry {
    pub id: u64,
    pub date: String,
    /// kg
    pub weight: f64,
    /// cm
    pub height: f64,
    /// cm
    #[serde(alias = "head_circ")]
    pub head_circumference: f64,
    pub notes: String,
}

impl GrowthEntry {
    pub fn has_weight(&self) -> bool {
        self.weight > 0.0
    }

    pub fn has_height(&self) -> bool {
        self.height > 0.0
    }

    pub fn has_head_circumference(&self) -> bool {
        self.head_circumference > 0.0
    }

    pub fn validate(&self) -> Result<()> {
        validate_date(&self.date)?;
        for (name, value) in [
            ("weight", self.weight),
            ("height", self.height),
            ("head circumference", self.head_circumference),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TrackerError::InvalidEntry(format!(
                    "{} must be zero or positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl Record for GrowthEntry {
    const CATEGORY: Category = Category::Growth;

    fn id(&self) -> u64 {
        self.id
    }

    fn assign_id(&mut self, id: u64) {
        self.id = id;
    }

    fn measurements(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("weight", self.weight),
            ("height", self.height),
            ("head circumference", self.head_circumference),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_measurements() {
        let mut entry = GrowthEntry {
            weight: 3.5,
            height: 50.0,
            head_circumference: 35.0,
            ..Default::default()
        };
        assert!(entry.has_weight());
        assert!(entry.has_height());
        assert!(entry.has_head_circumference());

        entry.weight = 0.0;
        entry.height = 0.0;
        entry.head_circumference = 0.0;
        assert!(!entry.has_weight());
        assert!(!entry.has_height());
        assert!(!entry.has_head_circumference());
    }

    #[test]
    fn test_legacy_head_circ_field() {
        let entry: GrowthEntry =
            serde_json::from_str(r#"{"id":2,"date":"2025-06-22","head_circ":36.5}"#).unwrap();
        assert_eq!(entry.head_circumference, 36.5);

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["head_circumference"], 36.5);
        assert!(json.get("head_circ").is_none());
    }

    #[test]
    fn test_validate() {
        let entry = GrowthEntry {
            date: "2025-06-22".to_string(),
            weight: 4.5,
            ..Default::default()
        };
        assert!(entry.validate().is_ok());

        let negative = GrowthEntry {
            height: -1.0,
            ..entry.clone()
        };
        assert!(matches!(
            negative.validate(),
            Err(TrackerError::InvalidEntry(msg)) if msg.contains("height")
        ));

        let undated = GrowthEntry {
            date: String::new(),
            ..entry
        };
        assert!(undated.validate().is_err());
    }
}
