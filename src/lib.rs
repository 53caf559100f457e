//! fftrim library
//!
//! Trims a fixed number of seconds from the start and end of every video in
//! a file or directory tree by delegating stream-copy cuts to ffmpeg.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use app::{TrimInteractor, Worklist};
pub use domain::model::{RunReport, Timecode, TrimConfig, TrimOutcome, Whitelist};
pub use error::{FfTrimError, FfTrimResult};
