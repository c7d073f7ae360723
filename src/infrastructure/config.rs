use std::env;
use std::path::{Path, PathBuf};

const DEFAULT_DATABASE_URL: &str = "sqlite://wiki.db?mode=rwc";
const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Directory holding `view.html` and `edit.html`; built-in templates when unset
    pub template_dir: Option<PathBuf>,
    pub seed_front_page: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = non_empty("DATABASE_URL")
            .or_else(|| non_empty("ELEPHANTSQL_URL"))
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        Self {
            database_url,
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            template_dir: non_empty("TEMPLATE_DIR").map(PathBuf::from),
            seed_front_page: lookup("SEED_FRONT_PAGE")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(false),
        }
    }
}

/// Load `.env` from the working directory or one of its parents.
///
/// Returns the path that was loaded, or `None` when there is no such file.
/// A file that exists but cannot be read or parsed is an error.
pub fn load_env_file() -> Result<Option<PathBuf>, dotenvy::Error> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Load a specific env file; `Ok(false)` when it does not exist
pub fn load_env_file_from(path: &Path) -> Result<bool, dotenvy::Error> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(e),
    }
}
