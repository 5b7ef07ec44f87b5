//! Concat manifest
//!
//! The concat demuxer reads its inputs from a list file. The list only lives
//! for the duration of one invocation and is removed on every exit path.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::SuperVideoResult;

/// Transient list file consumed by the engine's concat demuxer.
///
/// The file is deleted when the manifest is dropped or closed.
#[derive(Debug)]
pub struct ConcatManifest {
    file: NamedTempFile,
}

impl ConcatManifest {
    /// Write a manifest for `inputs` into `dir`.
    ///
    /// Relative entries are resolved by the engine against the manifest's own
    /// directory, so `dir` should be the directory relative inputs were given in.
    pub fn create_in(dir: &Path, inputs: &[PathBuf]) -> SuperVideoResult<Self> {
        let mut file = tempfile::Builder::new()
            .prefix(".supervideo-concat-")
            .suffix(".txt")
            .tempfile_in(dir)?;

        file.write_all(Self::render(inputs).as_bytes())?;
        file.flush()?;

        debug!(
            "Wrote concat manifest {} ({} inputs)",
            file.path().display(),
            inputs.len()
        );
        Ok(Self { file })
    }

    /// Manifest text: one `file '<path>'` line per input, in order
    pub fn render(inputs: &[PathBuf]) -> String {
        inputs
            .iter()
            .map(|input| format!("file '{}'\n", escape(&input.to_string_lossy())))
            .collect()
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Delete the manifest now, surfacing any error the drop would swallow
    pub fn close(self) -> SuperVideoResult<()> {
        let path = self.file.path().to_path_buf();
        self.file.close()?;
        debug!("Removed concat manifest {}", path.display());
        Ok(())
    }
}

/// Quote escaping understood by the concat demuxer: `'` becomes `'\''`
fn escape(path: &str) -> String {
    path.replace('\'', r"'\''")
}
