//! System-wide constants and default paths.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Base URL of the shipments backend when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Collection path of the shipments resource, relative to the API URL.
pub const SHIPMENTS_PATH: &str = "shipments";

/// Key of the shipments array inside a json-server database file.
pub const SHIPMENTS_KEY: &str = "shipments";

/// Number of rows shown per page of the shipment list.
pub const ROWS_PER_PAGE: usize = 20;

/// Largest accepted page size.
pub const MAX_ROWS_PER_PAGE: usize = 1000;

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// File name of the optional configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// File name of the console log inside the data directory.
pub const LOG_FILE_NAME: &str = "shipdesk.log";

/// Application name used in CLI output and paths.
pub const APP_NAME: &str = "shipdesk";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "shipdesk";

/// Returns the data directory, preferring `$HOME/.shipdesk` and falling
/// back to `.shipdesk` in the working directory.
fn resolve_data_dir() -> PathBuf {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_or_else(
            |_| PathBuf::from(format!(".{APP_NAME}")),
            |home| PathBuf::from(home).join(format!(".{APP_NAME}")),
        )
}

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Returns the resolved data directory for this session.
///
/// The directory is not created here; writers create it on demand.
pub fn data_dir() -> &'static PathBuf {
    DATA_DIR.get_or_init(resolve_data_dir)
}

/// Returns the default configuration file path.
pub fn default_config_file() -> PathBuf {
    data_dir().join(CONFIG_FILE_NAME)
}

/// Returns the default console log path.
pub fn default_log_file() -> PathBuf {
    data_dir().join(LOG_FILE_NAME)
}
