//! SuperVideo Library
//!
//! Drives the ffmpeg binary to split a video into ranges, concatenate videos,
//! apply a timelapse or slow-motion factor, and report media metadata.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod engine;
pub mod error;
pub mod output;
pub mod planner;
pub mod ports;
pub mod probe;
pub mod utils;

// Re-export commonly used types
pub use domain::model::{
    ExecutionResult, MediaReport, MediaType, Operation, OperationKind, SplitOutcome, StreamInfo,
    TimeRangeEntry, TranscodeCommand,
};
pub use error::{SuperVideoError, SuperVideoResult};
