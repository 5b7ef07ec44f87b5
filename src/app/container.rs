use std::path::PathBuf;
use std::sync::Arc;

use crate::adapters::FFmpegAdapter;
use crate::app::{ConcatInteractor, InfoInteractor, SplitInteractor, TimelapseInteractor};
use crate::config_initialization::Settings;
use crate::engine::{ArgumentBuilder, ProcessExecutor};
use crate::error::SuperVideoResult;
use crate::ports::EnginePort;

/// Wires the engine port into the interactors
pub struct AppContainer {
    split_interactor: Arc<SplitInteractor>,
    concat_interactor: Arc<ConcatInteractor>,
    timelapse_interactor: Arc<TimelapseInteractor>,
    info_interactor: Arc<InfoInteractor>,
}

impl AppContainer {
    /// Resolve the ffmpeg executable and build the production container
    pub fn new(settings: &Settings) -> SuperVideoResult<Self> {
        let executable = FFmpegAdapter::locate(settings.engine_path.as_deref())?;
        let engine = Arc::new(FFmpegAdapter::new(settings.timeout));
        let workdir = std::env::current_dir()?;

        Ok(Self::with_engine(executable, engine, workdir))
    }

    /// Build a container around any engine implementation.
    ///
    /// `workdir` receives transient concat manifests.
    pub fn with_engine(
        executable: impl Into<PathBuf>,
        engine: Arc<dyn EnginePort>,
        workdir: PathBuf,
    ) -> Self {
        let builder = ArgumentBuilder::new(executable);
        let executor = ProcessExecutor::new(engine);

        Self {
            split_interactor: Arc::new(SplitInteractor::new(builder.clone(), executor.clone())),
            concat_interactor: Arc::new(ConcatInteractor::new(
                builder.clone(),
                executor.clone(),
                workdir,
            )),
            timelapse_interactor: Arc::new(TimelapseInteractor::new(
                builder.clone(),
                executor.clone(),
            )),
            info_interactor: Arc::new(InfoInteractor::new(builder, executor)),
        }
    }

    pub fn split_interactor(&self) -> Arc<SplitInteractor> {
        Arc::clone(&self.split_interactor)
    }

    pub fn concat_interactor(&self) -> Arc<ConcatInteractor> {
        Arc::clone(&self.concat_interactor)
    }

    pub fn timelapse_interactor(&self) -> Arc<TimelapseInteractor> {
        Arc::clone(&self.timelapse_interactor)
    }

    pub fn info_interactor(&self) -> Arc<InfoInteractor> {
        Arc::clone(&self.info_interactor)
    }
}
