//! Metadata query requests as delivered by the bridge transport.

use bytes::{Buf, Bytes, BytesMut};
use serde::{Deserialize, Serialize};

use fsgate_common::{Error, Result};

use crate::wire::{self, Decoder, Encoder};

/// Record kinds a metadata query may request.
///
/// Values match the kernel's information-class tags; each selects exactly one
/// record layout in the response buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum InfoClass {
    Basic = 4,
    Standard = 5,
    Internal = 6,
    Ea = 7,
    Name = 9,
    Position = 14,
    All = 18,
    AlternateName = 21,
    Stream = 22,
    Compression = 28,
    NetworkOpen = 34,
    AttributeTag = 35,
}

impl InfoClass {
    /// Try to create an InfoClass from a raw kind tag
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            4 => Some(InfoClass::Basic),
            5 => Some(InfoClass::Standard),
            6 => Some(InfoClass::Internal),
            7 => Some(InfoClass::Ea),
            9 => Some(InfoClass::Name),
            14 => Some(InfoClass::Position),
            18 => Some(InfoClass::All),
            21 => Some(InfoClass::AlternateName),
            22 => Some(InfoClass::Stream),
            28 => Some(InfoClass::Compression),
            34 => Some(InfoClass::NetworkOpen),
            35 => Some(InfoClass::AttributeTag),
            _ => None,
        }
    }
}

/// A metadata query as delivered by the transport.
///
/// The raw kind tag is preserved so unrecognized values can be reported back
/// instead of failing at decode time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Raw record-kind tag from the wire
    pub info_class: u32,
    /// Target path of the query
    pub path: String,
    /// Caller-declared maximum output length in bytes
    pub buffer_len: u32,
}

impl QueryRequest {
    /// Create a request for a known record kind.
    pub fn new(kind: InfoClass, path: impl Into<String>, buffer_len: u32) -> Self {
        Self {
            info_class: kind as u32,
            path: path.into(),
            buffer_len,
        }
    }

    /// The typed record kind, if the raw tag is recognized.
    pub fn kind(&self) -> Option<InfoClass> {
        InfoClass::from_u32(self.info_class)
    }

    /// Decode a query frame: kind tag, declared buffer length, then the
    /// length-prefixed UTF-16LE target path.
    pub fn decode(buf: &mut dyn Buf) -> Result<Self> {
        let mut decoder = Decoder::new(buf);
        let info_class = decoder.read_u32()?;
        let buffer_len = decoder.read_u32()?;
        let path_len = decoder.read_u32()? as usize;
        let path = decoder.read_wide(path_len)?;
        Ok(Self {
            info_class,
            path,
            buffer_len,
        })
    }

    /// Encode to the wire form consumed by [`QueryRequest::decode`].
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(12 + wire::wide_len(&self.path));
        let mut encoder = Encoder::new(&mut buf);
        encoder.write_u32(self.info_class);
        encoder.write_u32(self.buffer_len);
        encoder.write_wide(&self.path);
        buf.freeze()
    }
}

/// Validate and normalize a query path before it reaches the provider.
///
/// Empty names are rejected; a single trailing separator is dropped, except
/// on the root itself.
pub fn check_file_name(path: &str) -> Result<&str> {
    if path.is_empty() {
        return Err(Error::InvalidParameter("empty file name".into()));
    }
    if path.len() > 1 && (path.ends_with('\\') || path.ends_with('/')) {
        Ok(&path[..path.len() - 1])
    } else {
        Ok(path)
    }
}
