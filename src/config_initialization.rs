//! Configuration initialization and hierarchy management
//!
//! Precedence: CLI > Env > File > Defaults. Environment variables reach the
//! CLI struct through clap, so merging only has to layer the CLI over the file.

use std::path::PathBuf;
use std::time::Duration;

use crate::adapters::{FileConfig, TomlConfigAdapter};
use crate::cli::Cli;
use crate::domain::model::{Operation, OperationKind, DEFAULT_SPEED};
use crate::error::SuperVideoResult;
use crate::output::ReportFormat;
use crate::utils::logging::DEFAULT_LOG_LEVEL;

/// Resolved runtime settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Config file the settings were layered over
    pub config_source: Option<PathBuf>,
    pub engine_path: Option<PathBuf>,
    pub timeout: Option<Duration>,
    pub log_level: String,
    pub log_json: bool,
    pub format: ReportFormat,
    pub no_color: bool,
    /// Render default applied when `--render` is absent
    pub render: bool,
    /// Speed applied when `--speed` is absent
    pub speed: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_source: None,
            engine_path: None,
            timeout: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: false,
            format: ReportFormat::Text,
            no_color: false,
            render: false,
            speed: DEFAULT_SPEED,
        }
    }
}

impl Settings {
    /// Layer CLI values (with env already applied) over the config file
    pub fn resolve(cli: &Cli, file: &FileConfig) -> Self {
        let defaults = Settings::default();
        let timeout_secs = cli.timeout.or(file.engine.timeout_secs).unwrap_or(0);

        Self {
            config_source: file.source.clone(),
            engine_path: cli.ffmpeg.clone().or_else(|| file.engine.path.clone()),
            timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
            log_level: cli
                .log_level
                .clone()
                .or_else(|| file.logging.level.clone())
                .unwrap_or(defaults.log_level),
            log_json: cli.log_json || file.logging.json.unwrap_or(defaults.log_json),
            format: cli.format.or(file.defaults.format).unwrap_or(defaults.format),
            no_color: cli.no_color,
            render: cli.render || file.defaults.render.unwrap_or(defaults.render),
            speed: cli.speed.or(file.defaults.speed).unwrap_or(defaults.speed),
        }
    }
}

/// Load the config file and resolve settings for this run
pub fn initialize_configuration_hierarchy(cli: &Cli) -> SuperVideoResult<Settings> {
    let file = TomlConfigAdapter::discover(cli.config.as_deref())?;
    Ok(Settings::resolve(cli, &file))
}

/// Build the operation for `kind` from the command line and resolved settings
pub fn build_operation(kind: OperationKind, cli: &Cli, settings: &Settings) -> Operation {
    let mut operation = Operation::new(kind, cli.inputs.clone())
        .with_render(settings.render)
        .with_speed(settings.speed);
    operation.output = cli.output.clone();
    operation
}
