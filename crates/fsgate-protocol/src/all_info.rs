//! Combined all-information record: basic, standard and position sections
//! plus a trailing name section.
//!
//! The record's interior sections the bridge does not populate (internal,
//! EA, access, mode, alignment) are committed as zeros so the layout stays
//! bit-for-bit compatible with the kernel's definition.

use fsgate_common::types::MetadataSnapshot;
use fsgate_common::{Error, Result};

use crate::cursor::OutputCursor;
use crate::{basic_info, name_info, position_info, standard_info, wire};

/// Wire size of the fixed portion, the empty name section included.
pub const ALL_INFO_FIXED_SIZE: usize = 104;

/// Byte offset of the name-length field within the record.
pub const NAME_LENGTH_OFFSET: usize = 96;

/// Encode an all-information record.
///
/// The fixed portion must fit outright. When the trailing name does not fit
/// in full, the fixed sub-records are still written, the name-length field
/// carries the true untruncated length and exactly one character of the name
/// follows it; the fixed portion alone is charged against capacity and the
/// call reports `BufferTooSmall` so the caller can size a retry. When the
/// whole name fits, the charge is the fixed sections plus the name section's
/// own header and text.
pub fn encode(
    cursor: &mut OutputCursor,
    snapshot: &MetadataSnapshot,
    granularity: u64,
    name: &str,
) -> Result<()> {
    let name_len = wire::wide_len(name);
    cursor.ensure(ALL_INFO_FIXED_SIZE)?;

    basic_info::write_fields(cursor, snapshot)?;
    standard_info::write_fields(cursor, snapshot, granularity)?;
    cursor.put_zeros(16)?; // internal, EA and access sections
    position_info::write_fields(cursor)?;
    cursor.put_zeros(8)?; // mode and alignment sections

    if cursor.remaining() < name_info::NAME_INFO_SIZE + name_len {
        // The full name cannot follow. Report its true length and the first
        // character so the caller can retry with a correctly sized buffer.
        cursor.put_u32(name_len as u32)?;
        let first = name.encode_utf16().next().unwrap_or(0);
        cursor.put_u16(first)?;
        cursor.put_zeros(2)?;
        return Err(Error::BufferTooSmall);
    }

    cursor.put_u32(name_len as u32)?;
    cursor.put_wide(name)
}
