//! Monitor loop, command entry points and status view.

pub mod commands;
mod logging;
pub mod report;
mod state;
mod status;
mod watcher;

pub use logging::setup_logging;
pub use state::{MonitorState, SharedState};
pub use status::{read_status_file, snapshot, write_status_file, StatusSnapshot};
pub use watcher::{CycleReport, Watcher, WatcherConfig};
