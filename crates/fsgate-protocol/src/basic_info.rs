//! Basic information record: timestamps and attributes.

use fsgate_common::types::MetadataSnapshot;
use fsgate_common::Result;

use crate::cursor::OutputCursor;

/// Wire size of the basic record, trailing pad included.
pub const BASIC_INFO_SIZE: usize = 40;

/// Encode a basic record: creation, access and write timestamps copied from
/// the snapshot, change time set equal to last-write time, attributes copied
/// verbatim.
///
/// Fails with `BufferTooSmall` and leaves the cursor untouched when the
/// record does not fit.
pub fn encode(cursor: &mut OutputCursor, snapshot: &MetadataSnapshot) -> Result<()> {
    cursor.ensure(BASIC_INFO_SIZE)?;
    write_fields(cursor, snapshot)
}

/// Write the record body. Callers have already reserved the full size.
pub(crate) fn write_fields(cursor: &mut OutputCursor, snapshot: &MetadataSnapshot) -> Result<()> {
    cursor.put_u32(snapshot.creation_time.low)?;
    cursor.put_u32(snapshot.creation_time.high)?;
    cursor.put_u32(snapshot.last_access_time.low)?;
    cursor.put_u32(snapshot.last_access_time.high)?;
    cursor.put_u32(snapshot.last_write_time.low)?;
    cursor.put_u32(snapshot.last_write_time.high)?;
    // The snapshot carries no distinct change time.
    cursor.put_u32(snapshot.last_write_time.low)?;
    cursor.put_u32(snapshot.last_write_time.high)?;
    cursor.put_u32(snapshot.attributes)?;
    cursor.put_zeros(4)
}
