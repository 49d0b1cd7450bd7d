//! Kernel wire protocol implementation for FsGate.
//!
//! This crate marshals filesystem metadata answers into the binary record
//! layouts the kernel file-I/O subsystem expects:
//! - Fixed-size information records (basic, standard, position, internal,
//!   attribute-tag, network-open, EA)
//! - Name-bearing and combined records with sized-retry truncation
//! - Named-stream lists driven over the filesystem's enumerator
//! - Request decoding, response framing and status mapping

pub mod all_info;
pub mod attribute_tag_info;
pub mod basic_info;
pub mod cursor;
pub mod ea_info;
pub mod frame;
pub mod handler;
pub mod host;
pub mod internal_info;
pub mod name_info;
pub mod network_open_info;
pub mod position_info;
pub mod request;
pub mod response;
pub mod standard_info;
pub mod status;
pub mod stream_info;
pub mod wire;

// Re-export main types
pub use cursor::OutputCursor;
pub use frame::BridgeFrameCodec;
pub use handler::QueryHandler;
pub use host::{
    BridgeOptions, FilesystemHost, IterEnumerator, StreamEnumerator, BRIDGE_VERSION,
    STREAM_ENUMERATION_MIN_VERSION,
};
pub use request::{InfoClass, QueryRequest};
pub use response::ResponseEnvelope;
