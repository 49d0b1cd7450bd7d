//! Bounds-checked writer over the caller-supplied output region.
//!
//! The kernel hands the bridge a maximum output length per query; every
//! record encoder writes through this cursor, which refuses any write that
//! would pass that limit. A refused write leaves the cursor untouched, so
//! encoders that reserve their full record size up front get all-or-nothing
//! behavior for free.

use bytes::{BufMut, Bytes, BytesMut};
use fsgate_common::{Error, Result};

use crate::wire;

/// Writer over one query's output region, tracking remaining capacity.
#[derive(Debug)]
pub struct OutputCursor {
    buf: BytesMut,
    limit: usize,
}

impl OutputCursor {
    /// Create a cursor over `limit` writable bytes.
    pub fn new(limit: usize) -> Self {
        Self {
            buf: BytesMut::new(),
            limit,
        }
    }

    /// Bytes still available before the output limit.
    pub fn remaining(&self) -> usize {
        self.limit - self.buf.len()
    }

    /// Bytes committed so far.
    pub fn written(&self) -> usize {
        self.buf.len()
    }

    /// The caller-declared output limit.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Verify that `len` more bytes fit.
    pub fn ensure(&self, len: usize) -> Result<()> {
        if self.remaining() < len {
            Err(Error::BufferTooSmall)
        } else {
            Ok(())
        }
    }

    /// Commit a u8.
    pub fn put_u8(&mut self, value: u8) -> Result<()> {
        self.ensure(1)?;
        self.buf.put_u8(value);
        Ok(())
    }

    /// Commit a little-endian u16.
    pub fn put_u16(&mut self, value: u16) -> Result<()> {
        self.ensure(2)?;
        self.buf.put_u16_le(value);
        Ok(())
    }

    /// Commit a little-endian u32.
    pub fn put_u32(&mut self, value: u32) -> Result<()> {
        self.ensure(4)?;
        self.buf.put_u32_le(value);
        Ok(())
    }

    /// Commit a little-endian u64.
    pub fn put_u64(&mut self, value: u64) -> Result<()> {
        self.ensure(8)?;
        self.buf.put_u64_le(value);
        Ok(())
    }

    /// Commit `len` zero bytes.
    pub fn put_zeros(&mut self, len: usize) -> Result<()> {
        self.ensure(len)?;
        self.buf.put_bytes(0, len);
        Ok(())
    }

    /// Commit a string as UTF-16LE, without a terminator.
    pub fn put_wide(&mut self, value: &str) -> Result<()> {
        self.ensure(wire::wide_len(value))?;
        wire::put_wide(&mut self.buf, value);
        Ok(())
    }

    /// Overwrite a previously committed little-endian u32 in place.
    ///
    /// Used to link list entries backwards; never changes the amount of
    /// committed data.
    pub fn patch_u32(&mut self, offset: usize, value: u32) -> Result<()> {
        let end = offset
            .checked_add(4)
            .ok_or_else(|| Error::Internal("patch offset overflow".into()))?;
        if end > self.buf.len() {
            return Err(Error::Internal(format!(
                "patch at {} outside committed region of {} bytes",
                offset,
                self.buf.len()
            )));
        }
        self.buf[offset..end].copy_from_slice(&value.to_le_bytes());
        Ok(())
    }

    /// Freeze into the response payload.
    pub fn freeze(self) -> Bytes {
        self.buf.freeze()
    }
}
