//! Runtime configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Where content is read from and where records are stored.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub content_dir: PathBuf,
    pub data_dir: PathBuf,
    pub persist: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("crates/race/content/data"),
            data_dir: default_data_dir(),
            persist: false,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `RACEBOOK_CONTENT_DIR` - Directory with `races.ron`, `currencies.toml`, `config.toml`
    /// - `RACEBOOK_DATA_DIR` - Directory for stored records (default: platform-specific)
    /// - `RACEBOOK_PERSIST` - Store treasures created by commands (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("RACEBOOK_CONTENT_DIR") {
            config.content_dir = PathBuf::from(dir);
        }

        if let Ok(dir) = env::var("RACEBOOK_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(enable) = read_env::<bool>("RACEBOOK_PERSIST") {
            config.persist = enable;
        } else if env::var("RACEBOOK_PERSIST").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.persist = true;
        }

        config
    }
}

/// Platform data directory, e.g. `~/.local/share/racebook` on Linux.
fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "racebook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./racebook_data"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
