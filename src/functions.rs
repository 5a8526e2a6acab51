//! User function files (Rhai scripts) loaded next to the formula.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::user_config_dir;
use crate::error::{CliError, Result};

const MAX_FUNCTIONS_FILE_BYTES: u64 = 4_194_304; // 4 MiB

pub(crate) fn default_functions_path() -> Option<PathBuf> {
    let mut path = user_config_dir()?;
    path.push("default.rhai");
    Some(path)
}

/// Put `<config dir>/default.rhai` in front of the user's files when it exists.
pub(crate) fn prepend_default_functions_if_present(
    functions: &mut Vec<PathBuf>,
    no_default_functions: bool,
) {
    if no_default_functions {
        return;
    }
    let Some(path) = default_functions_path() else {
        return;
    };
    if path.is_file() {
        functions.insert(0, path);
    } else {
        debug!(path = %path.display(), "no default functions file");
    }
}

/// Read and concatenate function files in order. `None` when there are none.
pub(crate) fn read_functions(paths: &[PathBuf]) -> Result<Option<String>> {
    let mut combined: Option<String> = None;
    for path in paths {
        let content = read_limited(path)?;
        debug!(path = %path.display(), bytes = content.len(), "loaded functions file");
        match &mut combined {
            Some(existing) => {
                existing.push_str("\n\n");
                existing.push_str(&content);
            }
            None => combined = Some(content),
        }
    }
    Ok(combined)
}

/// Read a text file, refusing anything over the functions file size cap.
pub(crate) fn read_limited(path: &Path) -> Result<String> {
    let io_err = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let size = std::fs::metadata(path).map_err(io_err)?.len();
    if size > MAX_FUNCTIONS_FILE_BYTES {
        return Err(CliError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max: MAX_FUNCTIONS_FILE_BYTES,
        });
    }
    std::fs::read_to_string(path).map_err(io_err)
}
