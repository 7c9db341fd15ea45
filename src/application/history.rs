//! Read back logged entries

use crate::domain::Record;
use crate::error::{Result, TrackerError};
use crate::infrastructure::StoreHandle;

pub struct HistoryService<'a> {
    handle: &'a StoreHandle,
}

impl<'a> HistoryService<'a> {
    pub fn new(handle: &'a StoreHandle) -> Self {
        HistoryService { handle }
    }

    /// Every entry of a category in the order it was saved
    pub fn list<R: Record>(&self) -> Result<Vec<R>> {
        self.handle.load_all()
    }

    pub fn find<R: Record>(&self, id: u64) -> Result<R> {
        self.list::<R>()?
            .into_iter()
            .find(|record| record.id() == id)
            .ok_or(TrackerError::NotFound {
                category: R::CATEGORY,
                id,
            })
    }
}
