use std::fs;
use std::path::{Path, PathBuf};

use super::{ProjectConfig, CONFIG_FILE_NAME};
use crate::core::{Error, Result};

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub fn parse_config(contents: &str) -> std::result::Result<ProjectConfig, String> {
    toml::from_str::<ProjectConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))
}

/// Load a config file the user named explicitly; any failure is an error.
pub fn load_config_file(path: &Path) -> Result<ProjectConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        Error::Configuration(format!("cannot read {}: {e}", path.display()))
    })?;
    let config = parse_config(&contents)
        .map_err(|e| Error::Configuration(format!("{}: {e}", path.display())))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Directory ancestors of `start`, nearest first, at most `max_depth` of them.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

fn try_load_config_from_path(config_path: &Path) -> Option<ProjectConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read config file {}: {}", config_path.display(), e);
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{} ({}). Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Search `start` and its ancestors for a config file.
///
/// A file root starts the search at its parent directory.
pub fn discover_config(start: &Path) -> ProjectConfig {
    let start = if start.is_file() {
        start.parent().map(Path::to_path_buf).unwrap_or_default()
    } else {
        start.to_path_buf()
    };
    let start = start.canonicalize().unwrap_or(start);

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No {} found after checking {} directories. Using default config.",
                CONFIG_FILE_NAME,
                MAX_TRAVERSAL_DEPTH
            );
            ProjectConfig::default()
        })
}
