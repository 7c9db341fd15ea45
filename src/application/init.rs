//! Initialize data directory use case

use crate::error::Result;
use crate::infrastructure::{ConfigFile, StoreHandle};
use log::info;
use std::path::{Path, PathBuf};

/// Make `path` the active data directory and remember it in the config file.
///
/// Returns the canonical location of the directory.
pub fn init(handle: &StoreHandle, path: &Path, config_path: &Path) -> Result<PathBuf> {
    handle.initialize(path)?;
    let root = handle.current_root()?.canonicalize()?;

    let mut file = ConfigFile::load(config_path)?;
    file.data_dir = Some(root.clone());
    file.save(config_path)?;

    info!("Initialized data directory at {}", root.display());
    Ok(root)
}
