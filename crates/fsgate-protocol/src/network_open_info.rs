//! Network-open information record: the union of basic timestamp fields and
//! standard size fields.

use fsgate_common::types::{allocation_size, MetadataSnapshot};
use fsgate_common::Result;

use crate::cursor::OutputCursor;

/// Wire size of the network-open record, trailing pad included.
pub const NETWORK_OPEN_INFO_SIZE: usize = 56;

/// Encode a network-open record.
pub fn encode(
    cursor: &mut OutputCursor,
    snapshot: &MetadataSnapshot,
    granularity: u64,
) -> Result<()> {
    cursor.ensure(NETWORK_OPEN_INFO_SIZE)?;
    cursor.put_u32(snapshot.creation_time.low)?;
    cursor.put_u32(snapshot.creation_time.high)?;
    cursor.put_u32(snapshot.last_access_time.low)?;
    cursor.put_u32(snapshot.last_access_time.high)?;
    cursor.put_u32(snapshot.last_write_time.low)?;
    cursor.put_u32(snapshot.last_write_time.high)?;
    // The snapshot carries no distinct change time.
    cursor.put_u32(snapshot.last_write_time.low)?;
    cursor.put_u32(snapshot.last_write_time.high)?;
    cursor.put_u64(allocation_size(snapshot.file_size(), granularity))?;
    cursor.put_u64(snapshot.file_size())?;
    cursor.put_u32(snapshot.attributes)?;
    cursor.put_zeros(4)
}
