//! Little-endian wire primitives shared by request decoding and record
//! encoding.
//!
//! The kernel side of the bridge speaks little-endian records with wide
//! (UTF-16LE) text; lengths of wide strings are byte counts, and the text is
//! not null-terminated.

use bytes::{Buf, BufMut, BytesMut};
use fsgate_common::{Error, Result};

/// Byte length of `s` once encoded as UTF-16LE.
pub fn wide_len(s: &str) -> usize {
    s.encode_utf16().count() * 2
}

/// Append `s` to `buf` as UTF-16LE, without a terminator.
pub fn put_wide(buf: &mut BytesMut, s: &str) {
    for unit in s.encode_utf16() {
        buf.put_u16_le(unit);
    }
}

/// Decode UTF-16LE bytes into a string.
pub fn wide_to_string(bytes: &[u8]) -> Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(Error::Protocol(format!(
            "wide string length {} is not a multiple of 2",
            bytes.len()
        )));
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|e| Error::Protocol(format!("invalid wide string: {}", e)))
}

/// Decoder for reading bridge protocol primitives
pub struct Decoder<'a> {
    buf: &'a mut dyn Buf,
}

impl<'a> Decoder<'a> {
    /// Create a new decoder
    pub fn new(buf: &'a mut dyn Buf) -> Self {
        Self { buf }
    }

    /// Read a u8
    pub fn read_u8(&mut self) -> Result<u8> {
        if self.buf.remaining() < 1 {
            return Err(Error::Protocol("not enough bytes for u8".into()));
        }
        Ok(self.buf.get_u8())
    }

    /// Read a little-endian u16
    pub fn read_u16(&mut self) -> Result<u16> {
        if self.buf.remaining() < 2 {
            return Err(Error::Protocol("not enough bytes for u16".into()));
        }
        Ok(self.buf.get_u16_le())
    }

    /// Read a little-endian u32
    pub fn read_u32(&mut self) -> Result<u32> {
        if self.buf.remaining() < 4 {
            return Err(Error::Protocol("not enough bytes for u32".into()));
        }
        Ok(self.buf.get_u32_le())
    }

    /// Read a little-endian u64
    pub fn read_u64(&mut self) -> Result<u64> {
        if self.buf.remaining() < 8 {
            return Err(Error::Protocol("not enough bytes for u64".into()));
        }
        Ok(self.buf.get_u64_le())
    }

    /// Read `len` bytes of UTF-16LE text.
    pub fn read_wide(&mut self, len: usize) -> Result<String> {
        if self.buf.remaining() < len {
            return Err(Error::Protocol(format!(
                "not enough bytes for wide string of length {}",
                len
            )));
        }
        let mut bytes = vec![0u8; len];
        self.buf.copy_to_slice(&mut bytes);
        wide_to_string(&bytes)
    }
}

/// Encoder for writing bridge protocol primitives
pub struct Encoder<'a> {
    buf: &'a mut BytesMut,
}

impl<'a> Encoder<'a> {
    /// Create a new encoder
    pub fn new(buf: &'a mut BytesMut) -> Self {
        Self { buf }
    }

    /// Write a u8
    pub fn write_u8(&mut self, value: u8) {
        self.buf.put_u8(value);
    }

    /// Write a little-endian u16
    pub fn write_u16(&mut self, value: u16) {
        self.buf.put_u16_le(value);
    }

    /// Write a little-endian u32
    pub fn write_u32(&mut self, value: u32) {
        self.buf.put_u32_le(value);
    }

    /// Write a little-endian u64
    pub fn write_u64(&mut self, value: u64) {
        self.buf.put_u64_le(value);
    }

    /// Write a wide string, length-prefixed with its byte count.
    pub fn write_wide(&mut self, value: &str) {
        self.write_u32(wide_len(value) as u32);
        put_wide(self.buf, value);
    }
}
