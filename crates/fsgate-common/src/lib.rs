//! Common types and utilities shared across FsGate components.

pub mod error;
pub mod types;

pub use error::{Error, Result};

/// Re-export commonly used external types
pub use bytes::Bytes;
pub use chrono::{DateTime, Utc};
