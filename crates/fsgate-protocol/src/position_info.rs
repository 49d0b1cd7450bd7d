//! Position information record.

use fsgate_common::Result;

use crate::cursor::OutputCursor;

/// Wire size of the position record.
pub const POSITION_INFO_SIZE: usize = 8;

/// Encode a position record.
///
/// The current byte offset is owned and filled by the driver layer; this
/// record always reports zero.
pub fn encode(cursor: &mut OutputCursor) -> Result<()> {
    cursor.ensure(POSITION_INFO_SIZE)?;
    write_fields(cursor)
}

pub(crate) fn write_fields(cursor: &mut OutputCursor) -> Result<()> {
    cursor.put_u64(0)
}
