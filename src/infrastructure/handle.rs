//! Active-store handle shared by every caller in the process

use super::config::default_data_dir;
use super::store::RecordStore;
use crate::domain::Record;
use crate::error::Result;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Holds the store that save/load calls go to.
///
/// Starts uninitialized. [`StoreHandle::initialize`] installs a store at a
/// given root (a later call replaces it); otherwise the first access opens
/// one at the default root.
#[derive(Debug, Default)]
pub struct StoreHandle {
    /// Root used on first access when `initialize` was never called;
    /// `None` means `<home>/.babytracker`
    default_root: Option<PathBuf>,
    active: RwLock<Option<Arc<RecordStore>>>,
}

impl StoreHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle whose lazy default is `root` instead of the home directory
    pub fn with_default_root(root: impl Into<PathBuf>) -> Self {
        StoreHandle {
            default_root: Some(root.into()),
            active: RwLock::new(None),
        }
    }

    /// Create `root` if needed and make it the active store.
    ///
    /// Re-initializing with the directory already active keeps the current
    /// store, so saves in flight stay serialized by the same locks.
    pub fn initialize(&self, root: impl Into<PathBuf>) -> Result<()> {
        let store = RecordStore::open(root)?;

        let mut active = self.write_active();
        if active
            .as_ref()
            .is_some_and(|current| same_dir(current.root(), store.root()))
        {
            return Ok(());
        }
        *active = Some(Arc::new(store));
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.read_active().is_some()
    }

    /// The active store, opening the default one on first use
    pub fn store(&self) -> Result<Arc<RecordStore>> {
        let current = self.read_active().clone();
        if let Some(store) = current {
            return Ok(store);
        }

        let mut active = self.write_active();
        // Another caller may have won the race while we waited for the write lock
        if let Some(store) = active.as_ref() {
            return Ok(Arc::clone(store));
        }

        let root = match &self.default_root {
            Some(root) => root.clone(),
            None => default_data_dir()?,
        };
        let store = Arc::new(RecordStore::open(root)?);
        *active = Some(Arc::clone(&store));
        Ok(store)
    }

    pub fn current_root(&self) -> Result<PathBuf> {
        Ok(self.store()?.root().to_path_buf())
    }

    pub fn save<R: Record>(&self, record: R) -> Result<R> {
        self.store()?.save(record)
    }

    pub fn load_all<R: Record>(&self) -> Result<Vec<R>> {
        self.store()?.load_all()
    }

    fn read_active(&self) -> RwLockReadGuard<'_, Option<Arc<RecordStore>>> {
        self.active.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_active(&self) -> RwLockWriteGuard<'_, Option<Arc<RecordStore>>> {
        self.active.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FeedEntry, FeedType};
    use crate::error::TrackerError;
    use tempfile::TempDir;

    fn feed() -> FeedEntry {
        FeedEntry {
            date: "2025-06-22".to_string(),
            feed_type: Some(FeedType::Bottle),
            ..Default::default()
        }
    }

    #[test]
    fn test_starts_uninitialized() {
        let temp = TempDir::new().unwrap();
        let handle = StoreHandle::with_default_root(temp.path().join("default"));

        assert!(!handle.is_initialized());
        assert!(!temp.path().join("default").exists());
    }

    #[test]
    fn test_first_access_opens_default_root() {
        let temp = TempDir::new().unwrap();
        let default_root = temp.path().join("default");
        let handle = StoreHandle::with_default_root(&default_root);

        let loaded: Vec<FeedEntry> = handle.load_all().unwrap();

        assert!(loaded.is_empty());
        assert!(handle.is_initialized());
        assert!(default_root.is_dir());
        assert_eq!(handle.current_root().unwrap(), default_root);
    }

    #[test]
    fn test_current_root_initializes_lazily() {
        let temp = TempDir::new().unwrap();
        let handle = StoreHandle::with_default_root(temp.path().join("lazy"));

        let root = handle.current_root().unwrap();

        assert_eq!(root, temp.path().join("lazy"));
        assert!(root.is_dir());
    }

    #[test]
    fn test_initialize_creates_directory() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("nested").join("data");
        let handle = StoreHandle::with_default_root(temp.path().join("unused"));

        handle.initialize(&root).unwrap();

        assert!(root.is_dir());
        assert_eq!(handle.current_root().unwrap(), root);
        assert!(!temp.path().join("unused").exists());
    }

    #[test]
    fn test_last_initialize_wins() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a");
        let b = temp.path().join("b");
        let handle = StoreHandle::with_default_root(temp.path().join("unused"));

        handle.initialize(&a).unwrap();
        let saved = handle.save(feed()).unwrap();
        assert_eq!(saved.id, 1);
        assert!(a.join("feeds.json").exists());

        handle.initialize(&b).unwrap();
        let loaded: Vec<FeedEntry> = handle.load_all().unwrap();

        assert!(loaded.is_empty());
        assert_eq!(handle.current_root().unwrap(), b);
    }

    #[test]
    fn test_initialize_same_root_keeps_store() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("data");
        let handle = StoreHandle::with_default_root(temp.path().join("unused"));

        handle.initialize(&root).unwrap();
        let before = handle.store().unwrap();
        handle.initialize(root.join("..").join("data")).unwrap();

        assert!(Arc::ptr_eq(&before, &handle.store().unwrap()));

        handle.initialize(temp.path().join("other")).unwrap();
        assert!(!Arc::ptr_eq(&before, &handle.store().unwrap()));
    }

    #[test]
    fn test_initialize_failure_keeps_previous_store() {
        let temp = TempDir::new().unwrap();
        let good = temp.path().join("good");
        let blocker = temp.path().join("file");
        std::fs::write(&blocker, "x").unwrap();
        let handle = StoreHandle::with_default_root(temp.path().join("unused"));

        handle.initialize(&good).unwrap();
        let result = handle.initialize(blocker.join("data"));

        assert!(matches!(result, Err(TrackerError::Directory { .. })));
        assert_eq!(handle.current_root().unwrap(), good);
    }
}
