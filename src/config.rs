//! User configuration (`config.toml`).
//!
//! Problems with the file never stop a formula from running: they are
//! collected as warnings and the defaults are used instead.

use cellfn_engine::AlignLimits;
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub(crate) const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub limits: AlignLimits,
    pub log: LogConfig,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Filter directive such as `warn` or `cellfn_engine=debug`.
    pub level: Option<String>,
}

pub fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}

/// Load the config from `config_file`, or from the user config dir when no
/// file is given. Returns the config and any warnings.
pub fn load_config(config_file: Option<&PathBuf>) -> (Config, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let Some(path) = config_file.cloned().or_else(user_config_path) else {
        return (Config::default(), warnings);
    };

    if !path.exists() {
        if config_file.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (Config::default(), warnings);
    }

    let config = match read_config(&path) {
        Ok(config) => config,
        Err(warning) => {
            warnings.push(warning);
            Config::default()
        }
    };
    (config, warnings)
}

fn read_config(path: &Path) -> Result<Config, String> {
    let meta = std::fs::metadata(path)
        .map_err(|err| format!("Failed to read metadata for {}: {}", path.display(), err))?;
    if meta.len() > MAX_CONFIG_FILE_BYTES {
        return Err(format!(
            "Refusing to read {}: file too large ({} bytes, max {})",
            path.display(),
            meta.len(),
            MAX_CONFIG_FILE_BYTES
        ));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|err| format!("Failed to read {}: {}", path.display(), err))?;
    parse_config(&content).map_err(|err| format!("Failed to parse {}: {}", path.display(), err))
}

pub(crate) fn user_config_dir() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "cellfn")?;
    Some(proj.config_dir().to_path_buf())
}

fn user_config_path() -> Option<PathBuf> {
    let mut path = user_config_dir()?;
    path.push("config.toml");
    Some(path)
}
