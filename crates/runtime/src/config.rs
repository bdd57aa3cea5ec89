//! Registry configuration and platform directories.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use registry_core::DEFAULT_FEATURED_COUNT;

use crate::query::DEFAULT_DEBOUNCE;

const APP_NAME: &str = "community-events";

/// Settings for opening a [`Registry`](crate::Registry).
#[derive(Clone)]
pub struct RegistryConfig {
    pub data_dir: PathBuf,
    pub search_debounce: Duration,
    pub featured_count: usize,
    /// Write the sample events when the events collection is empty.
    pub seed_sample_events: bool,
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            data_dir: data_dir(),
            search_debounce: DEFAULT_DEBOUNCE,
            featured_count: DEFAULT_FEATURED_COUNT,
            seed_sample_events: true,
            admin_email: None,
            admin_password: None,
        }
    }
}

impl RegistryConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `REGISTRY_DATA_DIR` - Collection directory (default: platform data dir)
    /// - `SEARCH_DEBOUNCE_MS` - Search debounce interval (default: 300)
    /// - `FEATURED_COUNT` - Events on the featured strip (default: 3)
    /// - `SEED_SAMPLE_EVENTS` - Seed an empty registry (default: true)
    /// - `REGISTRY_ADMIN_EMAIL` / `REGISTRY_ADMIN_PASSWORD` - Admin login
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("REGISTRY_DATA_DIR") {
            config.data_dir = dir;
        }
        if let Some(millis) = read_env::<u64>("SEARCH_DEBOUNCE_MS") {
            config.search_debounce = Duration::from_millis(millis);
        }
        if let Some(count) = read_env::<usize>("FEATURED_COUNT") {
            config.featured_count = count.max(1);
        }
        if let Some(seed) = read_env_bool("SEED_SAMPLE_EVENTS") {
            config.seed_sample_events = seed;
        }
        config.admin_email = read_env::<String>("REGISTRY_ADMIN_EMAIL").filter(|v| !v.is_empty());
        config.admin_password =
            read_env::<String>("REGISTRY_ADMIN_PASSWORD").filter(|v| !v.is_empty());

        config
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_admin(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.admin_email = Some(email.into());
        self.admin_password = Some(password.into());
        self
    }
}

impl std::fmt::Debug for RegistryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryConfig")
            .field("data_dir", &self.data_dir)
            .field("search_debounce", &self.search_debounce)
            .field("featured_count", &self.featured_count)
            .field("seed_sample_events", &self.seed_sample_events)
            .field("admin_email", &self.admin_email)
            .field(
                "admin_password",
                &self.admin_password.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Platform data directory for the registry collections.
///
/// - Linux: `~/.local/share/community-events`
/// - macOS: `~/Library/Application Support/community-events`
/// - Fallback: `./registry_data`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./registry_data"))
}

/// Platform log directory.
///
/// - Linux: `~/.cache/community-events/logs`
/// - macOS: `~/Library/Caches/community-events/logs`
/// - Fallback: `/tmp/community-events/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp").join(APP_NAME))
        .join("logs")
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
