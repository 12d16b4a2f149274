use std::borrow::Cow;
use std::env;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

// Maximum size for a results file: 10MB
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Opens a results file and checks its size on the open handle
///
/// # Errors
///
/// Returns an error if the file cannot be opened, is not a regular file, or is larger
/// than 10MB.
pub fn open_results_file(path: &Path) -> Result<File> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open results file: {}", path.display()))?;
    validate_file_size(&file, path)?;
    Ok(file)
}

/// Validates that a file's size is within acceptable limits (10MB)
///
/// Takes an open file handle so the file can't be swapped between the size check and the
/// read that follows.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The path is not a regular file
/// - The file is larger than 10MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    if !metadata.is_file() {
        bail!("Not a regular file: {}", path.display());
    }

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use roster_view::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/.local/share/roster-view/latest_results.json");
/// // Returns "~/.local/share/roster-view/latest_results.json" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && !home.is_empty()
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use tempfile::{NamedTempFile, TempDir};

    use super::*;

    #[test]
    fn test_open_results_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{}").unwrap();
        assert!(open_results_file(file.path()).is_ok());
    }

    #[test]
    fn test_open_missing_file() {
        let err = open_results_file(Path::new("/nonexistent/results.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to open results file"));
    }

    #[test]
    fn test_open_directory_is_rejected() {
        let dir = TempDir::new().unwrap();
        // Opening a directory succeeds on unix; the metadata check must catch it
        if let Ok(file) = File::open(dir.path()) {
            let err = validate_file_size(&file, dir.path()).unwrap_err();
            assert!(err.to_string().contains("Not a regular file"));
        }
    }

    #[test]
    fn test_oversized_file_is_rejected() {
        let file = NamedTempFile::new().unwrap();
        file.as_file().set_len(MAX_FILE_SIZE_BYTES + 1).unwrap();
        let err = open_results_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("File too large"));
    }

    #[test]
    fn test_format_path_with_tilde() {
        let path = PathBuf::from("/Users/testuser/.local/share/roster-view/latest_results.json");
        let formatted = format_path_with_tilde_internal(&path, Some("/Users/testuser"));
        assert_eq!(formatted, "~/.local/share/roster-view/latest_results.json");

        // Path not under home
        let path2 = PathBuf::from("/srv/roster/latest_results.json");
        let formatted2 = format_path_with_tilde_internal(&path2, Some("/Users/testuser"));
        assert_eq!(formatted2, "/srv/roster/latest_results.json");

        // Empty home never matches
        let formatted3 = format_path_with_tilde_internal(&path2, Some(""));
        assert_eq!(formatted3, "/srv/roster/latest_results.json");
    }
}
