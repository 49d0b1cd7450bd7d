//! Standard information record: sizes, link count, directory flag.

use fsgate_common::types::{allocation_size, MetadataSnapshot};
use fsgate_common::Result;

use crate::cursor::OutputCursor;

/// Wire size of the standard record, trailing pad included.
pub const STANDARD_INFO_SIZE: usize = 24;

/// Encode a standard record.
///
/// Allocation size is the file size rounded up to the volume allocation
/// granularity; end-of-file is the exact file size. Delete-pending is never
/// reported from this layer.
pub fn encode(
    cursor: &mut OutputCursor,
    snapshot: &MetadataSnapshot,
    granularity: u64,
) -> Result<()> {
    cursor.ensure(STANDARD_INFO_SIZE)?;
    write_fields(cursor, snapshot, granularity)
}

/// Write the record body. Callers have already reserved the full size.
pub(crate) fn write_fields(
    cursor: &mut OutputCursor,
    snapshot: &MetadataSnapshot,
    granularity: u64,
) -> Result<()> {
    cursor.put_u64(allocation_size(snapshot.file_size(), granularity))?;
    cursor.put_u64(snapshot.file_size())?;
    cursor.put_u32(snapshot.link_count)?;
    cursor.put_u8(0)?; // delete pending
    cursor.put_u8(snapshot.is_directory() as u8)?;
    cursor.put_zeros(2)
}
