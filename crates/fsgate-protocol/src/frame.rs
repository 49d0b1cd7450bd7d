//! Frame handling for bridge request/response exchange.
//!
//! The transport carries length-prefixed messages:
//! - Request: [Length: u32 LE][QueryRequest]
//! - Response: [Length: u32 LE][ResponseEnvelope]

use bytes::{Buf, Bytes, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::{debug, trace};

use fsgate_common::{Error, Result};

/// Maximum frame size (16MB) to bound allocation on a bad length prefix
const MAX_FRAME_SIZE: usize = 16 * 1024 * 1024;

/// Minimum frame size - the smallest query frame carries a kind tag, a
/// buffer length and an empty path prefix
const MIN_FRAME_SIZE: usize = 12;

/// Bridge transport frame decoder/encoder
pub struct BridgeFrameCodec {
    /// Maximum allowed frame size
    max_frame_size: usize,
}

impl BridgeFrameCodec {
    /// Create a new frame codec with default settings
    pub fn new() -> Self {
        Self {
            max_frame_size: MAX_FRAME_SIZE,
        }
    }

    /// Create a new frame codec with custom max frame size
    pub fn with_max_frame_size(max_frame_size: usize) -> Self {
        Self { max_frame_size }
    }
}

impl Default for BridgeFrameCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for BridgeFrameCodec {
    type Item = Bytes;
    type Error = Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>> {
        // Need at least 4 bytes for the length prefix
        if src.len() < 4 {
            trace!("not enough data for length prefix, have {} bytes", src.len());
            return Ok(None);
        }

        // Peek at the length without consuming
        let mut length_bytes = [0u8; 4];
        length_bytes.copy_from_slice(&src[..4]);
        let length = u32::from_le_bytes(length_bytes) as usize;

        // Validate frame size
        if length < MIN_FRAME_SIZE {
            return Err(Error::Protocol(format!(
                "frame size {} is below minimum {}",
                length, MIN_FRAME_SIZE
            )));
        }

        if length > self.max_frame_size {
            return Err(Error::Protocol(format!(
                "frame size {} exceeds maximum {}",
                length, self.max_frame_size
            )));
        }

        // Check if we have the complete frame
        if src.len() < 4 + length {
            trace!(
                "waiting for complete frame, have {} bytes, need {}",
                src.len(),
                4 + length
            );
            src.reserve(4 + length - src.len());
            return Ok(None);
        }

        debug!("decoding frame of {} bytes", length);

        // Skip the length prefix
        src.advance(4);

        let frame = src.split_to(length).freeze();

        Ok(Some(frame))
    }
}

impl Encoder<Bytes> for BridgeFrameCodec {
    type Error = Error;

    fn encode(&mut self, item: Bytes, dst: &mut BytesMut) -> Result<()> {
        let length = item.len();

        if length < MIN_FRAME_SIZE {
            return Err(Error::Protocol(format!(
                "frame size {} is below minimum {}",
                length, MIN_FRAME_SIZE
            )));
        }

        if length > self.max_frame_size {
            return Err(Error::Protocol(format!(
                "frame size {} exceeds maximum {}",
                length, self.max_frame_size
            )));
        }

        debug!("encoding frame of {} bytes", length);

        dst.reserve(4 + length);
        dst.extend_from_slice(&(length as u32).to_le_bytes());
        dst.extend_from_slice(&item);

        Ok(())
    }
}
