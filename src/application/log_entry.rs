//! Log new entries

use crate::domain::{DiaperEntry, FeedEntry, GrowthEntry, SleepEntry};
use crate::error::Result;
use crate::infrastructure::StoreHandle;
use log::info;

/// Validates entries and appends them to their category
pub struct LogService<'a> {
    handle: &'a StoreHandle,
}

impl<'a> LogService<'a> {
    pub fn new(handle: &'a StoreHandle) -> Self {
        LogService { handle }
    }

    pub fn log_feed(&self, entry: FeedEntry) -> Result<FeedEntry> {
        entry.validate()?;
        let saved = self.handle.save(entry)?;
        info!(
            "Logged feed {} on {} ({})",
            saved.id,
            saved.date,
            saved.feed_type.map(|t| t.label()).unwrap_or_default()
        );
        Ok(saved)
    }

    pub fn log_sleep(&self, mut entry: SleepEntry) -> Result<SleepEntry> {
        entry.validate()?;
        if let Some(minutes) = entry.derived_duration() {
            entry.duration = minutes;
        }
        let saved = self.handle.save(entry)?;
        info!(
            "Logged sleep {} on {} ({} min)",
            saved.id, saved.date, saved.duration
        );
        Ok(saved)
    }

    pub fn log_growth(&self, entry: GrowthEntry) -> Result<GrowthEntry> {
        entry.validate()?;
        let saved = self.handle.save(entry)?;
        info!("Logged growth measurement {} on {}", saved.id, saved.date);
        Ok(saved)
    }

    pub fn log_diaper(&self, entry: DiaperEntry) -> Result<DiaperEntry> {
        entry.validate()?;
        let saved = self.handle.save(entry)?;
        info!("Logged diaper change {} on {}", saved.id, saved.date);
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FeedType, Record, SleepType};
    use crate::error::TrackerError;
    use chrono::DateTime;
    use tempfile::TempDir;

    fn handle() -> (StoreHandle, TempDir) {
        let temp = TempDir::new().unwrap();
        let handle = StoreHandle::new();
        handle.initialize(temp.path()).unwrap();
        (handle, temp)
    }

    #[test]
    fn test_log_feed_assigns_id() {
        let (handle, _temp) = handle();
        let service = LogService::new(&handle);

        let saved = service
            .log_feed(FeedEntry {
                date: "2025-06-22".to_string(),
                feed_type: Some(FeedType::BreastLeft),
                duration: 15,
                ..Default::default()
            })
            .unwrap();

        assert_eq!(saved.id(), 1);
        assert_eq!(handle.load_all::<FeedEntry>().unwrap(), vec![saved]);
    }

    #[test]
    fn test_invalid_entry_is_not_saved() {
        let (handle, temp) = handle();
        let service = LogService::new(&handle);

        let result = service.log_diaper(DiaperEntry {
            date: "2025-06-22".to_string(),
            ..Default::default()
        });

        assert!(matches!(result, Err(TrackerError::InvalidEntry(_))));
        assert!(!temp.path().join("diapers.json").exists());
    }

    #[test]
    fn test_log_sleep_derives_duration() {
        let (handle, _temp) = handle();
        let service = LogService::new(&handle);

        let saved = service
            .log_sleep(SleepEntry {
                date: "2025-06-22".to_string(),
                sleep_type: Some(SleepType::Nap),
                start_time: Some(DateTime::parse_from_rfc3339("2025-06-22T13:00:00+02:00").unwrap()),
                end_time: Some(DateTime::parse_from_rfc3339("2025-06-22T14:25:00+02:00").unwrap()),
                duration: 5,
                ..Default::default()
            })
            .unwrap();

        assert_eq!(saved.duration, 85);
    }

    #[test]
    fn test_log_growth_rejects_negative_weight() {
        let (handle, _temp) = handle();
        let service = LogService::new(&handle);

        let result = service.log_growth(GrowthEntry {
            date: "2025-06-22".to_string(),
            weight: -1.0,
            ..Default::default()
        });

        assert!(result.is_err());
    }
}
