//! Startup configuration and logging.
//!
//! [`AppConfig`] collects everything the TUI needs before the first frame:
//! the API base URL (flag, then `GAMEDECK_API_URL`, then the default) and
//! the location file path. Logging goes to a file under the state dir so
//! tracing output never corrupts the terminal UI.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::catalog::CATALOG_BASE_URL;

/// Configuration for the startup process.
///
/// Use the builder pattern to customize behavior:
///
/// ```
/// use gamedeck::startup::AppConfig;
///
/// let config = AppConfig::default().with_api_base_url("http://localhost:8080");
/// assert_eq!(config.api_base_url, "http://localhost:8080");
/// ```
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the catalog API
    pub api_base_url: String,
    /// Path of the persisted location file; `None` uses the default
    pub location_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: CATALOG_BASE_URL.to_string(),
            location_path: None,
        }
    }
}

impl AppConfig {
    /// Create a config from the environment, with an optional CLI
    /// override for the API base URL taking precedence.
    pub fn from_env(api_url_override: Option<String>) -> Self {
        let api_base_url = api_url_override
            .or_else(|| std::env::var("GAMEDECK_API_URL").ok())
            .unwrap_or_else(|| CATALOG_BASE_URL.to_string());
        Self {
            api_base_url,
            location_path: None,
        }
    }

    /// Set the API base URL.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the location file path.
    pub fn with_location_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.location_path = Some(path.into());
        self
    }
}

/// Initialize file-based logging under `~/.gamedeck/gamedeck.log`.
///
/// Honors `RUST_LOG`, defaulting to `info`. Returns an error only for
/// filesystem problems; callers may treat that as non-fatal since the app
/// works fine without a log file.
pub fn init_logging() -> Result<(), std::io::Error> {
    let home = dirs::home_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Home directory not found")
    })?;
    let log_dir = home.join(".gamedeck");
    fs::create_dir_all(&log_dir)?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("gamedeck.log"))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
