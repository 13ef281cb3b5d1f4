use std::env;
use std::path::PathBuf;

/// Environment variable naming an analysis config file
pub const CONFIG_ENV_VAR: &str = "CARE_TIMELINE_CONFIG";

const CONFIG_DIR_NAME: &str = "care-journey-timeline";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Locate the analysis config file when none is passed on the command line
///
/// `$CARE_TIMELINE_CONFIG` wins when set and non-empty; otherwise the platform config
/// directory is used (`~/.config/care-journey-timeline/config.toml` on Linux). The file is not
/// required to exist.
pub fn default_config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV_VAR)
        && !path.trim().is_empty()
    {
        return Some(PathBuf::from(path));
    }

    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
