//! Stemtrace Core — shared configuration and error types.

pub mod config;
pub mod error;

pub use config::StemtraceConfig;
pub use error::{Error, Result};
