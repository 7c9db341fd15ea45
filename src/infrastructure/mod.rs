//! Infrastructure layer - Configuration and persistence

pub mod config;
pub mod handle;
pub mod store;

pub use config::{default_data_dir, Config, ConfigFile};
pub use handle::StoreHandle;
pub use store::{next_id, RecordStore};
