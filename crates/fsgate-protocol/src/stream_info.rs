//! Named-stream information: a singly linked list of variably sized,
//! 8-byte-aligned entries built by driving the filesystem's enumerator.
//!
//! Entry layout: next-entry offset, name byte length, stream size, stream
//! allocation size, then the wide name text. The next-entry offset is the
//! byte distance to the following entry's start, zero on the last entry.

use tracing::trace;

use fsgate_common::types::allocation_size;
use fsgate_common::{Error, Result};

use crate::cursor::OutputCursor;
use crate::host::{BridgeOptions, FilesystemHost, STREAM_ENUMERATION_MIN_VERSION};
use crate::wire;

/// Wire size of an empty stream entry: the fixed fields plus one padded
/// wide-character slot.
pub const STREAM_ENTRY_SIZE: usize = 32;

/// Byte offset of the name text within an entry.
pub const STREAM_NAME_OFFSET: usize = 24;

/// Round an entry size up to the 8-byte boundary the kernel requires.
fn quad_align(len: usize) -> usize {
    (len + 7) & !7
}

/// Marshal the named-stream list for `path` into the cursor.
///
/// Fails with `NotImplemented` when the negotiated bridge version predates
/// stream support or the filesystem does not provide an enumerator, and with
/// `BufferTooSmall` when the buffer cannot hold even one minimal entry. An
/// overflow partway through leaves the already written entries correctly
/// chained and terminated; the last committed entry keeps a zero next-entry
/// offset.
pub fn encode(
    cursor: &mut OutputCursor,
    host: &dyn FilesystemHost,
    options: &BridgeOptions,
    path: &str,
) -> Result<()> {
    if options.version < STREAM_ENUMERATION_MIN_VERSION {
        return Err(Error::NotImplemented(format!(
            "stream enumeration requires bridge version {}",
            STREAM_ENUMERATION_MIN_VERSION
        )));
    }

    // Absence of the enumerator outranks a short buffer; opening the listing
    // does not advance it.
    let mut enumerator = host.enumerate_streams(path)?;
    cursor.ensure(STREAM_ENTRY_SIZE)?;

    let mut previous_start: Option<usize> = None;

    loop {
        let stream = match enumerator.next_entry() {
            Ok(Some(stream)) => stream,
            // Terminal outcome. Once at least one entry is in place the list
            // built so far stands as a successful result; otherwise the
            // first call's outcome is the caller's answer, verbatim.
            Ok(None) => return Ok(()),
            Err(e) => {
                return if previous_start.is_some() {
                    trace!("stream enumeration ended after entries: {}", e);
                    Ok(())
                } else {
                    Err(e)
                }
            }
        };

        let name_len = wire::wide_len(&stream.name);
        let entry_size = quad_align(STREAM_ENTRY_SIZE + name_len);
        // Checked before linking, so an overflow never leaves the chain
        // pointing past the last committed entry.
        cursor.ensure(entry_size)?;

        let start = cursor.written();
        if let Some(prev) = previous_start {
            cursor.patch_u32(prev, (start - prev) as u32)?;
        }

        cursor.put_u32(0)?; // currently the last entry
        cursor.put_u32(name_len as u32)?;
        cursor.put_u64(stream.size)?;
        cursor.put_u64(allocation_size(stream.size, options.allocation_granularity))?;
        cursor.put_wide(&stream.name)?;
        cursor.put_zeros(entry_size - STREAM_NAME_OFFSET - name_len)?;

        previous_start = Some(start);
    }
}
