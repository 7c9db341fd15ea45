#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Command isolated to `home`: config at `home/config.toml`, data at `home/data`
pub fn babytracker_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("babytracker").unwrap();
    cmd.env_remove("APP_TITLE");
    cmd.env_remove("RUST_LOG");
    cmd.env("HOME", home);
    cmd.env("BABYTRACKER_CONFIG", config_path(home));
    cmd.env("DATA_DIR", data_dir(home));
    cmd
}

pub fn config_path(home: &Path) -> PathBuf {
    home.join("config.toml")
}

pub fn data_dir(home: &Path) -> PathBuf {
    home.join("data")
}
