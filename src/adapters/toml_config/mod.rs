// TOML config adapter - Configuration file loading

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{SuperVideoError, SuperVideoResult};
use crate::output::ReportFormat;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "supervideo.toml";

/// Contents of `supervideo.toml`; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub engine: EngineSection,
    pub defaults: DefaultsSection,
    pub logging: LoggingSection,
    /// File the values were read from; `None` when no file was loaded
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// `[engine]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineSection {
    /// ffmpeg executable, absolute or looked up on PATH
    pub path: Option<PathBuf>,
    /// Wall-clock limit per invocation
    pub timeout_secs: Option<u64>,
}

/// `[defaults]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsSection {
    pub speed: Option<f64>,
    pub render: Option<bool>,
    pub format: Option<ReportFormat>,
}

/// `[logging]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub json: Option<bool>,
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Load the explicit config file, or `supervideo.toml` from the working
    /// directory if present. An explicit path must exist.
    pub fn discover(explicit: Option<&Path>) -> SuperVideoResult<FileConfig> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    Ok(FileConfig::default())
                }
            }
        }
    }

    /// Load configuration from file
    pub fn load(path: &Path) -> SuperVideoResult<FileConfig> {
        let content = std::fs::read_to_string(path).map_err(|e| SuperVideoError::ConfigFile {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let mut config = Self::parse(&content).map_err(|message| SuperVideoError::ConfigFile {
            path: path.display().to_string(),
            message,
        })?;

        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Deserialize config from TOML string
    pub fn parse(content: &str) -> Result<FileConfig, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }
}
