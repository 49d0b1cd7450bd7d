//! Attribute-tag information record.

use fsgate_common::types::MetadataSnapshot;
use fsgate_common::Result;

use crate::cursor::OutputCursor;

/// Wire size of the attribute-tag record.
pub const ATTRIBUTE_TAG_INFO_SIZE: usize = 8;

/// Encode an attribute-tag record: attributes copied verbatim, reparse tag
/// always zero since this layer does no reparse-point tagging.
pub fn encode(cursor: &mut OutputCursor, snapshot: &MetadataSnapshot) -> Result<()> {
    cursor.ensure(ATTRIBUTE_TAG_INFO_SIZE)?;
    cursor.put_u32(snapshot.attributes)?;
    cursor.put_u32(0)
}
