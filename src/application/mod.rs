//! Application layer - Use cases and orchestration

pub mod history;
pub mod init;
pub mod log_entry;
pub mod manage_config;

pub use history::HistoryService;
pub use init::init;
pub use log_entry::LogService;
pub use manage_config::ConfigService;
