//! Turn command-line arguments into entries

use super::commands::{DiaperArgs, FeedArgs, GrowthArgs, SleepArgs};
use crate::domain::time_ref::{local_instant, resolve_date, DATE_FORMAT};
use crate::domain::{
    DiaperEntry, DiaperType, FeedEntry, FeedType, GrowthEntry, SleepEntry, SleepQuality,
    SleepType,
};
use crate::error::{Result, TrackerError};
use chrono::{DateTime, Duration, FixedOffset, NaiveDate};

impl FeedArgs {
    pub fn to_entry(&self, today: NaiveDate, now: DateTime<FixedOffset>) -> Result<FeedEntry> {
        let date = resolve_date(self.date.as_deref(), today)?;
        let feed_type = self
            .feed_type
            .parse::<FeedType>()
            .map_err(TrackerError::InvalidValue)?;
        let time = local_instant(date, self.time.as_deref().unwrap_or("now"), now)?;

        Ok(FeedEntry {
            id: 0,
            date: date.format(DATE_FORMAT).to_string(),
            time: Some(time),
            feed_type: Some(feed_type),
            quantity: self.quantity,
            notes: self.notes.clone(),
            duration: self.duration,
        })
    }
}

impl SleepArgs {
    /// An end clock time earlier than the start is taken to be on the next day
    pub fn to_entry(&self, today: NaiveDate, now: DateTime<FixedOffset>) -> Result<SleepEntry> {
        let date = resolve_date(self.date.as_deref(), today)?;
        let sleep_type = self
            .sleep_type
            .parse::<SleepType>()
            .map_err(TrackerError::InvalidValue)?;
        let quality = self
            .quality
            .as_deref()
            .map(str::parse::<SleepQuality>)
            .transpose()
            .map_err(TrackerError::InvalidValue)?;

        let start_time = self
            .start
            .as_deref()
            .map(|clock| local_instant(date, clock, now))
            .transpose()?;

        let mut end_time = self
            .end
            .as_deref()
            .map(|clock| local_instant(date, clock, now))
            .transpose()?;
        if let (Some(start), Some(end), Some(clock)) = (start_time, end_time, self.end.as_deref()) {
            if end < start {
                end_time = Some(local_instant(date + Duration::days(1), clock, now)?);
            }
        }

        let mut entry = SleepEntry {
            id: 0,
            date: date.format(DATE_FORMAT).to_string(),
            start_time,
            end_time,
            duration: 0,
            sleep_type: Some(sleep_type),
            quality,
            notes: self.notes.clone(),
        };
        entry.duration = entry.derived_duration().unwrap_or(0);
        Ok(entry)
    }
}

impl GrowthArgs {
    pub fn to_entry(&self, today: NaiveDate) -> Result<GrowthEntry> {
        let date = resolve_date(self.date.as_deref(), today)?;

        Ok(GrowthEntry {
            id: 0,
            date: date.format(DATE_FORMAT).to_string(),
            weight: self.weight,
            height: self.height,
            head_circumference: self.head,
            notes: self.notes.clone(),
        })
    }
}

impl DiaperArgs {
    pub fn to_entry(&self, today: NaiveDate, now: DateTime<FixedOffset>) -> Result<DiaperEntry> {
        let date = resolve_date(self.date.as_deref(), today)?;
        let diaper_type = self
            .diaper_type
            .parse::<DiaperType>()
            .map_err(TrackerError::InvalidValue)?;
        let time = local_instant(date, self.time.as_deref().unwrap_or("now"), now)?;

        Ok(DiaperEntry {
            id: 0,
            date: date.format(DATE_FORMAT).to_string(),
            time: Some(time),
            diaper_type: Some(diaper_type),
            notes: self.notes.clone(),
        })
    }
}
