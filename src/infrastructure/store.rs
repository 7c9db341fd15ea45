//! File-backed record store
//!
//! Each category lives in one JSON file under the store root holding the full
//! ordered collection. Saves are a read-modify-write of that file, serialized
//! per category, and land through a temp file + rename so a failed write
//! leaves the previous contents in place.

use crate::domain::{Category, DiaperEntry, FeedEntry, GrowthEntry, Record, SleepEntry};
use crate::error::{Result, TrackerError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Next id for a collection: one past the largest id present, 1 when empty.
///
/// `None` once the largest id is `u64::MAX`.
pub fn next_id(ids: impl IntoIterator<Item = u64>) -> Option<u64> {
    ids.into_iter().max().unwrap_or(0).checked_add(1)
}

/// Distinguishes temp files of stores sharing a root within one process
static WRITE_SEQ: AtomicU64 = AtomicU64::new(0);

#[derive(Debug)]
pub struct RecordStore {
    root: PathBuf,
    /// One lock per category, indexed by [`Category::index`].
    ///
    /// The locks belong to this store only. Two stores opened on the same
    /// root do not exclude each other, so concurrent saves through both can
    /// lose records; share one store (through a [`StoreHandle`]) instead.
    ///
    /// [`StoreHandle`]: super::handle::StoreHandle
    locks: [Mutex<()>; 4],
}

impl RecordStore {
    /// Open a store rooted at `root`, creating the directory (and parents) if needed
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| TrackerError::Directory {
            path: root.clone(),
            source,
        })?;

        Ok(RecordStore {
            root,
            locks: Default::default(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, category: Category) -> PathBuf {
        self.root.join(category.file_name())
    }

    /// Read every record of `R`'s category in save order.
    ///
    /// A missing file is an empty collection.
    pub fn load_all<R: Record>(&self) -> Result<Vec<R>> {
        let category = R::CATEGORY;
        let contents = match fs::read_to_string(self.path_for(category)) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(TrackerError::Storage { category, source }),
        };

        serde_json::from_str(&contents).map_err(|source| TrackerError::Parse { category, source })
    }

    /// Assign the next id to `record`, append it and rewrite the category file.
    ///
    /// Any id already on `record` is replaced. The save is refused, leaving
    /// the file untouched, if the existing file cannot be read or parsed, if
    /// a numeric field is NaN or infinite, or if the id space is exhausted.
    pub fn save<R: Record>(&self, mut record: R) -> Result<R> {
        let category = R::CATEGORY;
        if let Some((name, value)) = record
            .measurements()
            .into_iter()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(TrackerError::InvalidEntry(format!(
                "{} must be a finite number, got {}",
                name, value
            )));
        }

        let _guard = self.lock(category);

        let mut records = self.load_all::<R>()?;
        let id = next_id(records.iter().map(Record::id)).ok_or_else(|| TrackerError::Storage {
            category,
            source: io::Error::new(
                io::ErrorKind::InvalidData,
                "largest id is already u64::MAX, no id left to assign",
            ),
        })?;
        record.assign_id(id);
        records.push(record.clone());

        self.write_all(category, &records)?;
        Ok(record)
    }

    fn lock(&self, category: Category) -> MutexGuard<'_, ()> {
        // The guarded value is (), so a poisoned lock carries no broken state
        self.locks[category.index()]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_all<R: Record>(&self, category: Category, records: &[R]) -> Result<()> {
        let storage_error = |source: io::Error| TrackerError::Storage { category, source };

        let json = serde_json::to_string_pretty(records)
            .map_err(|e| storage_error(io::Error::new(io::ErrorKind::InvalidData, e)))?;

        let path = self.path_for(category);
        let tmp_path = path.with_file_name(format!(
            "{}.tmp-{}-{}",
            category.file_name(),
            std::process::id(),
            WRITE_SEQ.fetch_add(1, Ordering::Relaxed)
        ));

        if let Err(source) = fs::write(&tmp_path, json).and_then(|_| fs::rename(&tmp_path, &path)) {
            let _ = fs::remove_file(&tmp_path);
            return Err(storage_error(source));
        }

        Ok(())
    }
}

// Per-category entry points
impl RecordStore {
    pub fn save_feed(&self, entry: FeedEntry) -> Result<FeedEntry> {
        self.save(entry)
    }

    pub fn load_feeds(&self) -> Result<Vec<FeedEntry>> {
        self.load_all()
    }

    pub fn save_sleep(&self, entry: SleepEntry) -> Result<SleepEntry> {
        self.save(entry)
    }

    pub fn load_sleep(&self) -> Result<Vec<SleepEntry>> {
        self.load_all()
    }

    pub fn save_growth(&self, entry: GrowthEntry) -> Result<GrowthEntry> {
        self.save(entry)
    }

    pub fn load_growth(&self) -> Result<Vec<GrowthEntry>> {
        self.load_all()
    }

    pub fn save_diaper(&self, entry: DiaperEntry) -> Result<DiaperEntry> {
        self.save(entry)
    }

    pub fn load_diapers(&self) -> Result<Vec<DiaperEntry>> {
        self.load_all()
    }
}
