//! Engine invocation module: argument building, concat manifests and execution

pub mod args;
pub mod executor;
pub mod manifest;

pub use args::{setpts_filter, ArgumentBuilder};
pub use executor::{classify, ProcessExecutor, DIAGNOSTIC_TAIL_LINES};
pub use manifest::ConcatManifest;
