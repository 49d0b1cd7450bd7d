//! Extended-attribute information record.

use fsgate_common::Result;

use crate::cursor::OutputCursor;

/// Wire size of the EA record.
pub const EA_INFO_SIZE: usize = 4;

/// Encode an EA record.
///
/// Extended attributes are not supported by the bridge; the record is a
/// compatibility placeholder reserving its fixed size with a zero EA size,
/// reported as success.
pub fn encode(cursor: &mut OutputCursor) -> Result<()> {
    cursor.ensure(EA_INFO_SIZE)?;
    cursor.put_u32(0)
}
