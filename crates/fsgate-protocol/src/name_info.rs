//! Name information record: the file name preceded by its byte length.

use fsgate_common::Result;

use crate::cursor::OutputCursor;
use crate::wire;

/// Wire size of an empty name record: the length field plus one padded
/// wide-character slot.
pub const NAME_INFO_SIZE: usize = 8;

/// Byte offset of the name text within the record.
pub const NAME_OFFSET: usize = 4;

/// Encode a name record for `name`.
///
/// Requires room for the empty record plus the full name; on success the
/// committed bytes are the length field followed by the name text. Writes
/// nothing when the buffer is too small.
pub fn encode(cursor: &mut OutputCursor, name: &str) -> Result<()> {
    let name_len = wire::wide_len(name);
    cursor.ensure(NAME_INFO_SIZE + name_len)?;
    cursor.put_u32(name_len as u32)?;
    cursor.put_wide(name)
}
