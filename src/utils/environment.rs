use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};

/// Environment variable naming the results file
pub const RESULTS_PATH_ENV: &str = "ROSTER_RESULTS";

/// File name the scraper writes its latest results to
pub const RESULTS_FILE_NAME: &str = "latest_results.json";

/// Resolve which results file to load
///
/// Order: the explicit `--results` path, then `$ROSTER_RESULTS`, then
/// `./latest_results.json` if it exists, then `latest_results.json` in the per-user data
/// directory (`~/.local/share/roster-view` on Linux).
pub fn resolve_results_path(explicit: Option<&Path>) -> Result<PathBuf> {
    let from_env = env::var_os(RESULTS_PATH_ENV).filter(|v| !v.is_empty()).map(PathBuf::from);
    let cwd = env::current_dir().ok();
    resolve_results_path_internal(explicit, from_env, cwd.as_deref(), dirs::data_dir())
}

pub(crate) fn resolve_results_path_internal(
    explicit: Option<&Path>,
    from_env: Option<PathBuf>,
    cwd: Option<&Path>,
    data_dir: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = from_env {
        tracing::debug!("Using results path from {}", RESULTS_PATH_ENV);
        return Ok(path);
    }
    if let Some(local) = cwd.map(|dir| dir.join(RESULTS_FILE_NAME))
        && local.is_file()
    {
        return Ok(local);
    }

    data_dir.map(|dir| dir.join("roster-view").join(RESULTS_FILE_NAME)).ok_or_else(|| {
        anyhow!("No results file found: pass --results or set {}", RESULTS_PATH_ENV)
    })
}
