//! Response envelope returned to the bridge transport.

use bytes::{Buf, Bytes, BytesMut};

use fsgate_common::{Error, Result};

use crate::wire::{Decoder, Encoder};

/// Marshaled result of one metadata query.
///
/// Immutable once built. The byte count is meaningful to callers only when
/// the status is success or a partial-write buffer overflow; for every other
/// status the payload is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseEnvelope {
    /// Status code from [`crate::status`]
    pub status: u32,
    /// Per-file context value attached by the provider, zero when absent
    pub context: u64,
    /// The filled output region
    pub buffer: Bytes,
}

impl ResponseEnvelope {
    /// An error response carrying no payload.
    pub fn error(status: u32) -> Self {
        Self {
            status,
            context: 0,
            buffer: Bytes::new(),
        }
    }

    /// Number of payload bytes actually written.
    pub fn bytes_written(&self) -> u32 {
        self.buffer.len() as u32
    }

    /// Encode as status, context, byte count, payload.
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(16 + self.buffer.len());
        let mut encoder = Encoder::new(&mut buf);
        encoder.write_u32(self.status);
        encoder.write_u64(self.context);
        encoder.write_u32(self.buffer.len() as u32);
        buf.extend_from_slice(&self.buffer);
        buf.freeze()
    }

    /// Decode the wire form produced by [`ResponseEnvelope::encode`].
    pub fn decode(buf: &mut dyn Buf) -> Result<Self> {
        let mut decoder = Decoder::new(buf);
        let status = decoder.read_u32()?;
        let context = decoder.read_u64()?;
        let len = decoder.read_u32()? as usize;
        if buf.remaining() < len {
            return Err(Error::Protocol(format!(
                "response payload truncated: declared {} bytes, {} available",
                len,
                buf.remaining()
            )));
        }
        let buffer = buf.copy_to_bytes(len);
        Ok(Self {
            status,
            context,
            buffer,
        })
    }
}
