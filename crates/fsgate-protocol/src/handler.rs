//! Metadata query dispatcher.
//!
//! Top-level orchestrator of one query: acquire the metadata snapshot from
//! the filesystem host, select the record encoder for the requested kind,
//! account the bytes committed into the output region, and assemble the
//! response envelope handed back to the transport.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, warn};

use fsgate_common::{Error, Result};

use crate::cursor::OutputCursor;
use crate::host::{BridgeOptions, FilesystemHost};
use crate::request::{check_file_name, InfoClass, QueryRequest};
use crate::response::ResponseEnvelope;
use crate::status::{self, status_for};
use crate::{
    all_info, attribute_tag_info, basic_info, ea_info, internal_info, name_info,
    network_open_info, position_info, standard_info, stream_info,
};

/// Upper bound on a caller-declared output length, guarding allocation
/// against a corrupt request.
pub const MAX_OUTPUT_LEN: u32 = 1024 * 1024;

/// Handles metadata query requests for one mounted bridge.
pub struct QueryHandler {
    host: Arc<dyn FilesystemHost>,
    options: BridgeOptions,
}

impl QueryHandler {
    /// Create a handler with default bridge options.
    pub fn new(host: Arc<dyn FilesystemHost>) -> Self {
        Self {
            host,
            options: BridgeOptions::default(),
        }
    }

    /// Create a handler with explicit bridge options.
    pub fn with_options(host: Arc<dyn FilesystemHost>, options: BridgeOptions) -> Self {
        Self { host, options }
    }

    /// The options this handler was mounted with.
    pub fn options(&self) -> &BridgeOptions {
        &self.options
    }

    /// Handle one decoded metadata query and produce the response envelope.
    ///
    /// The envelope always carries a status and the count of payload bytes
    /// committed; the count is trustworthy only for success and the
    /// partial-write buffer-overflow paths.
    pub fn handle_query(&self, request: &QueryRequest) -> ResponseEnvelope {
        let path = match check_file_name(&request.path) {
            Ok(path) => path,
            Err(e) => {
                warn!("rejecting metadata query: {}", e);
                return ResponseEnvelope::error(status_for(&e));
            }
        };

        if request.buffer_len > MAX_OUTPUT_LEN {
            warn!(
                "declared output length {} exceeds maximum {}",
                request.buffer_len, MAX_OUTPUT_LEN
            );
            return ResponseEnvelope::error(status::STATUS_INVALID_PARAMETER);
        }

        let (snapshot, context) = match self.host.query_metadata(path) {
            Ok(answer) => answer,
            Err(e) => {
                // Provider absence and provider failure surface uniformly as
                // an invalid request with an empty payload.
                debug!("metadata provider failed for {}: {}", path, e);
                return ResponseEnvelope::error(status::STATUS_INVALID_PARAMETER);
            }
        };

        let mut cursor = OutputCursor::new(request.buffer_len as usize);
        let granularity = self.options.allocation_granularity;

        let result = match request.kind() {
            Some(InfoClass::Basic) => basic_info::encode(&mut cursor, &snapshot),
            Some(InfoClass::Standard) => standard_info::encode(&mut cursor, &snapshot, granularity),
            Some(InfoClass::Internal) => internal_info::encode(&mut cursor, &snapshot),
            Some(InfoClass::Ea) => ea_info::encode(&mut cursor),
            Some(InfoClass::Name) => name_info::encode(&mut cursor, path),
            Some(InfoClass::Position) => position_info::encode(&mut cursor),
            Some(InfoClass::All) => all_info::encode(&mut cursor, &snapshot, granularity, path),
            Some(InfoClass::Stream) => {
                stream_info::encode(&mut cursor, self.host.as_ref(), &self.options, path)
            }
            Some(InfoClass::NetworkOpen) => {
                network_open_info::encode(&mut cursor, &snapshot, granularity)
            }
            Some(InfoClass::AttributeTag) => attribute_tag_info::encode(&mut cursor, &snapshot),
            Some(InfoClass::AlternateName) => {
                Err(Error::NotImplemented("alternate name query".into()))
            }
            Some(InfoClass::Compression) => {
                Err(Error::NotImplemented("compression query".into()))
            }
            None => {
                warn!("unknown information class: {}", request.info_class);
                Err(Error::InvalidParameter(format!(
                    "information class {}",
                    request.info_class
                )))
            }
        };

        let status = match &result {
            Ok(()) => status::STATUS_SUCCESS,
            Err(e) => status_for(e),
        };
        debug!(
            "marshaled class {} for {}: status {:#010x}, {} of {} bytes",
            request.info_class,
            path,
            status,
            cursor.written(),
            request.buffer_len
        );

        ResponseEnvelope {
            status,
            context,
            buffer: cursor.freeze(),
        }
    }

    /// Handle one raw transport frame and produce the encoded response.
    ///
    /// A frame too short to carry a request descriptor is a transport error,
    /// not a response; an unrecognized record kind inside a well-formed
    /// frame still yields a response envelope.
    pub fn handle_frame(&self, frame: &[u8]) -> Result<Bytes> {
        let mut buf = Bytes::copy_from_slice(frame);
        let request = QueryRequest::decode(&mut buf)?;
        Ok(self.handle_query(&request).encode())
    }
}
