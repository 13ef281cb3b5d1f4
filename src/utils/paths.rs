use std::borrow::Cow;
use std::env;
use std::fs::{File, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result, bail};

// Maximum chat-log size: 50MB
const MAX_FILE_SIZE_BYTES: u64 = 50 * 1024 * 1024;

/// Opens a chat-log file for reading
///
/// Symlinks are refused on unix (`O_NOFOLLOW`), the target must be a regular file, and the size
/// limit is checked on the open handle so the file can't be swapped between check and read.
///
/// # Errors
///
/// Returns an error if the file can't be opened, is a symlink or not a regular file, or is
/// larger than 50MB.
pub fn safe_open_file(path: &Path) -> Result<File> {
    let mut options = OpenOptions::new();
    options.read(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.custom_flags(libc::O_NOFOLLOW);
    }

    let file = options
        .open(path)
        .with_context(|| format!("Failed to open chat log: {}", path.display()))?;

    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;
    if !metadata.is_file() {
        bail!("Not a regular file: {}", path.display());
    }

    validate_file_size(&file, path)?;
    Ok(file)
}

/// Validates that a file's size is within acceptable limits (50MB)
///
/// Takes an open file handle to avoid TOCTOU (time-of-check-time-of-use) races.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 50MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

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
/// use care_journey_timeline::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/exports/analysis.json");
/// // Returns "~/exports/analysis.json" if HOME=/Users/alice
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
