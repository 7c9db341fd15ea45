//! Output formatting utilities

use crate::domain::{DiaperEntry, FeedEntry, GrowthEntry, Record, SleepEntry};
use chrono::{DateTime, FixedOffset};

/// One-line summary of an entry for `list`
pub trait Listing: Record {
    fn summary(&self) -> String;
}

/// Format entries one per line, oldest first
pub fn format_entries<R: Listing>(entries: &[R]) -> String {
    if entries.is_empty() {
        return format!("No {} entries found", R::CATEGORY);
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!("{:>4}  {}\n", entry.id(), entry.summary()));
    }
    output
}

/// Clock time in the offset it was recorded with
fn clock(time: Option<DateTime<FixedOffset>>) -> String {
    time.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

fn with_notes(mut line: String, notes: &str) -> String {
    if !notes.is_empty() {
        line.push_str(&format!("  ({})", notes));
    }
    line
}

fn label<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "?".to_string())
}

impl Listing for FeedEntry {
    fn summary(&self) -> String {
        let mut line = format!(
            "{} {}  {}",
            self.date,
            clock(self.time),
            label(self.feed_type)
        );
        if self.has_quantity() {
            line.push_str(&format!("  {}", self.quantity));
        }
        if self.duration > 0 {
            line.push_str(&format!("  {} min", self.duration));
        }
        with_notes(line, &self.notes)
    }
}

impl Listing for SleepEntry {
    fn summary(&self) -> String {
        let end = if self.is_ongoing() {
            "ongoing".to_string()
        } else {
            clock(self.end_time)
        };
        let mut line = format!(
            "{} {}-{}  {}  {} min",
            self.date,
            clock(self.start_time),
            end,
            label(self.sleep_type),
            self.duration
        );
        if let Some(quality) = self.quality {
            line.push_str(&format!("  {}", quality));
        }
        with_notes(line, &self.notes)
    }
}

impl Listing for GrowthEntry {
    fn summary(&self) -> String {
        let mut parts = vec![self.date.clone()];
        if self.has_weight() {
            parts.push(format!("weight {} kg", self.weight));
        }
        if self.has_height() {
            parts.push(format!("height {} cm", self.height));
        }
        if self.has_head_circumference() {
            parts.push(format!("head {} cm", self.head_circumference));
        }
        with_notes(parts.join("  "), &self.notes)
    }
}

impl Listing for DiaperEntry {
    fn summary(&self) -> String {
        let line = format!(
            "{} {}  {}",
            self.date,
            clock(self.time),
            label(self.diaper_type)
        );
        with_notes(line, &self.notes)
    }
}
