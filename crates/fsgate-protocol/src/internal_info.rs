//! Internal information record: the volume-unique file index.

use fsgate_common::types::MetadataSnapshot;
use fsgate_common::Result;

use crate::cursor::OutputCursor;

/// Wire size of the internal record.
pub const INTERNAL_INFO_SIZE: usize = 8;

/// Encode an internal record: the 64-bit file index assembled from the
/// snapshot's split high/low words.
pub fn encode(cursor: &mut OutputCursor, snapshot: &MetadataSnapshot) -> Result<()> {
    cursor.ensure(INTERNAL_INFO_SIZE)?;
    cursor.put_u32(snapshot.file_index_low)?;
    cursor.put_u32(snapshot.file_index_high)
}
