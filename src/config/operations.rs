//! Config discovery, loading, and key normalization.

use super::model::Config;
use super::types::DEFAULT_CONFIGFILE;
use crate::error::{PeaclockError, Result};
use crate::paths::resolve_from;
use crate::style;
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};

/// A loaded config together with where it came from.
///
/// `path_to_config` is the directory later used to resolve relative paths
/// referenced inside the config file (read path, barcodes csv).
#[derive(Debug, Clone)]
pub struct ConfigSource {
    pub config: Config,
    /// The config file that was read, if any.
    pub configfile: Option<PathBuf>,
    /// Directory containing the config file (the working directory when no
    /// file was found).
    pub path_to_config: PathBuf,
}

/// Locate and load the config file.
///
/// An explicitly given path is resolved against the working directory and
/// must exist. Without one, `config.yaml` in the working directory is used
/// when present; when absent, resolution proceeds on defaults alone.
pub fn discover(configfile_arg: Option<&Path>, cwd: &Path) -> Result<ConfigSource> {
    if let Some(arg) = configfile_arg {
        let configfile = resolve_from(cwd, arg);
        if !configfile.is_file() {
            return Err(PeaclockError::MissingResource(format!(
                "cannot find configfile at {}",
                configfile.display()
            )));
        }
        let path_to_config = configfile
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.to_path_buf());
        let config = Config::load(&configfile)?;
        return Ok(ConfigSource {
            config,
            configfile: Some(configfile),
            path_to_config,
        });
    }

    let configfile = cwd.join(DEFAULT_CONFIGFILE);
    if configfile.is_file() {
        let config = Config::load(&configfile)?;
        Ok(ConfigSource {
            config,
            configfile: Some(configfile),
            path_to_config: cwd.to_path_buf(),
        })
    } else {
        println!(
            "{}",
            style::cyan(&format!(
                "Note: no {DEFAULT_CONFIGFILE} found in the working directory, using defaults"
            ))
        );
        Ok(ConfigSource {
            config: Config::default(),
            configfile: None,
            path_to_config: cwd.to_path_buf(),
        })
    }
}

impl Config {
    /// Load config from a YAML file known to exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PeaclockError::Parse(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Keys are normalized before deserialization: leading hyphens are
    /// stripped and remaining hyphens become underscores, so `--no-temp`,
    /// `no-temp`, and `no_temp` all land on the same field. Unknown keys
    /// are ignored.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(yaml)
            .map_err(|e| PeaclockError::Parse(format!("failed to parse config YAML: {e}")))?;

        let mapping = match value {
            Value::Mapping(mapping) => mapping,
            Value::Null => Mapping::new(),
            _ => {
                return Err(PeaclockError::Parse(
                    "config file must be a mapping of option names to values".to_string(),
                ));
            }
        };

        let normalized: Mapping = mapping
            .into_iter()
            .map(|(key, value)| match key {
                Value::String(key) => (Value::String(normalize_key(&key)), value),
                other => (other, value),
            })
            .collect();

        serde_yaml::from_value(Value::Mapping(normalized))
            .map_err(|e| PeaclockError::Parse(format!("failed to parse config YAML: {e}")))
    }
}

/// Strip leading hyphens and replace the rest with underscores.
fn normalize_key(key: &str) -> String {
    key.trim_start_matches('-').replace('-', "_")
}
