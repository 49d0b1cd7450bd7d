//! Filesystem-side collaborators of the query marshaler.
//!
//! The bridge core never touches the filesystem directly; it asks the host
//! for one metadata snapshot per request and, for stream listings, drives the
//! host's enumerator until it runs dry or the output buffer fills up.

use fsgate_common::types::{MetadataSnapshot, StreamDescriptor};
use fsgate_common::{Error, Result};

/// Protocol version of this bridge build.
pub const BRIDGE_VERSION: u16 = 650;

/// Minimum negotiated version with named-stream enumeration support.
pub const STREAM_ENUMERATION_MIN_VERSION: u16 = 610;

/// Default volume allocation granularity in bytes.
pub const DEFAULT_ALLOCATION_GRANULARITY: u64 = 512;

/// Bridge-level options negotiated at mount time.
#[derive(Debug, Clone)]
pub struct BridgeOptions {
    /// Negotiated user/kernel protocol version
    pub version: u16,
    /// Volume allocation granularity in bytes
    pub allocation_granularity: u64,
}

impl Default for BridgeOptions {
    fn default() -> Self {
        Self {
            version: BRIDGE_VERSION,
            allocation_granularity: DEFAULT_ALLOCATION_GRANULARITY,
        }
    }
}

/// Stateful named-stream listing over one file.
///
/// Lazy and finite: each call yields the next descriptor, `None` once the
/// listing is exhausted. Not restartable. An error from the first call is
/// surfaced to the kernel verbatim; after at least one entry has been
/// marshaled the list built so far stands as the result.
pub trait StreamEnumerator {
    /// Advance the listing by one entry.
    fn next_entry(&mut self) -> Result<Option<StreamDescriptor>>;
}

/// Adapter exposing any descriptor iterator as a stream enumerator.
pub struct IterEnumerator<I>(pub I);

impl<I: Iterator<Item = Result<StreamDescriptor>>> StreamEnumerator for IterEnumerator<I> {
    fn next_entry(&mut self) -> Result<Option<StreamDescriptor>> {
        self.0.next().transpose()
    }
}

/// The filesystem side of the bridge, as seen by the query marshaler.
///
/// Both calls are synchronous and may block on the underlying filesystem;
/// the core imposes no ordering across concurrent requests.
pub trait FilesystemHost: Send + Sync {
    /// Produce one metadata snapshot for `path`, plus the per-file context
    /// value handed back to open-file bookkeeping. The default signals that
    /// the filesystem does not implement metadata queries.
    fn query_metadata(&self, path: &str) -> Result<(MetadataSnapshot, u64)> {
        let _ = path;
        Err(Error::NotImplemented("metadata query".into()))
    }

    /// Open a named-stream listing over `path`. The default signals that the
    /// filesystem does not implement stream enumeration.
    fn enumerate_streams(&self, path: &str) -> Result<Box<dyn StreamEnumerator + '_>> {
        let _ = path;
        Err(Error::NotImplemented("stream enumeration".into()))
    }
}
