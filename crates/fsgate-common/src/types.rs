//! Filesystem metadata types shared by the bridge core and filesystem hosts.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// File attribute bits, matching the kernel's attribute mask.
pub mod attributes {
    /// The file is read-only
    pub const READONLY: u32 = 0x0000_0001;
    /// The file is hidden from ordinary directory listings
    pub const HIDDEN: u32 = 0x0000_0002;
    /// The file belongs to the operating system
    pub const SYSTEM: u32 = 0x0000_0004;
    /// The entry is a directory
    pub const DIRECTORY: u32 = 0x0000_0010;
    /// The file is marked for archival
    pub const ARCHIVE: u32 = 0x0000_0020;
    /// The file has no other attributes set
    pub const NORMAL: u32 = 0x0000_0080;
    /// The file is used for temporary storage
    pub const TEMPORARY: u32 = 0x0000_0100;
    /// The file carries a reparse point
    pub const REPARSE_POINT: u32 = 0x0000_0400;
}

/// 100ns intervals between the bridge epoch (1601-01-01) and the Unix epoch.
const UNIX_EPOCH_TICKS: i64 = 116_444_736_000_000_000;

/// Absolute time with 100ns resolution, carried as two adjacent 32-bit words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTime {
    pub low: u32,
    pub high: u32,
}

impl FileTime {
    /// Create from a raw 64-bit tick count.
    pub fn from_ticks(ticks: u64) -> Self {
        Self {
            low: ticks as u32,
            high: (ticks >> 32) as u32,
        }
    }

    /// The raw 64-bit tick count.
    pub fn ticks(&self) -> u64 {
        ((self.high as u64) << 32) | self.low as u64
    }

    /// Convert a wall-clock time to the two-word tick encoding. Times before
    /// the bridge epoch clamp to zero.
    pub fn from_datetime(t: DateTime<Utc>) -> Self {
        let ticks =
            t.timestamp() * 10_000_000 + (t.timestamp_subsec_nanos() as i64) / 100 + UNIX_EPOCH_TICKS;
        Self::from_ticks(ticks.max(0) as u64)
    }

    /// Convert back to a wall-clock time, if representable.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let unix_ticks = self.ticks() as i64 - UNIX_EPOCH_TICKS;
        let secs = unix_ticks.div_euclid(10_000_000);
        let nanos = (unix_ticks.rem_euclid(10_000_000) * 100) as u32;
        Utc.timestamp_opt(secs, nanos).single()
    }
}

/// One consistent set of file metadata captured at query time.
///
/// Produced fresh per request by the filesystem's metadata provider, owned by
/// the dispatcher for the duration of that request, never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataSnapshot {
    /// Attribute bitmask, see [`attributes`]
    pub attributes: u32,
    /// Creation time
    pub creation_time: FileTime,
    /// Last access time
    pub last_access_time: FileTime,
    /// Last write time. The snapshot carries no distinct change time.
    pub last_write_time: FileTime,
    /// High word of the file size
    pub file_size_high: u32,
    /// Low word of the file size
    pub file_size_low: u32,
    /// Number of hard links to the file
    pub link_count: u32,
    /// High word of the volume-unique file index
    pub file_index_high: u32,
    /// Low word of the volume-unique file index
    pub file_index_low: u32,
}

impl MetadataSnapshot {
    /// The file size as a single 64-bit quantity.
    pub fn file_size(&self) -> u64 {
        ((self.file_size_high as u64) << 32) | self.file_size_low as u64
    }

    /// Store a 64-bit file size into the split high/low words.
    pub fn set_file_size(&mut self, size: u64) {
        self.file_size_low = size as u32;
        self.file_size_high = (size >> 32) as u32;
    }

    /// The volume-unique file index as a single 64-bit quantity.
    pub fn file_index(&self) -> u64 {
        ((self.file_index_high as u64) << 32) | self.file_index_low as u64
    }

    /// Store a 64-bit file index into the split high/low words.
    pub fn set_file_index(&mut self, index: u64) {
        self.file_index_low = index as u32;
        self.file_index_high = (index >> 32) as u32;
    }

    /// Whether the directory attribute bit is set.
    pub fn is_directory(&self) -> bool {
        self.attributes & attributes::DIRECTORY != 0
    }
}

/// One named stream of a file, as yielded by the filesystem's enumerator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamDescriptor {
    /// Stream name, wide text on the wire
    pub name: String,
    /// Stream size in bytes
    pub size: u64,
}

impl StreamDescriptor {
    /// Create a new stream descriptor.
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Round `size` up to the volume allocation granularity.
///
/// On-disk allocation is always reported as a whole number of allocation
/// units, so the result is never smaller than `size`.
pub fn allocation_size(size: u64, granularity: u64) -> u64 {
    debug_assert!(granularity > 0);
    ((size + granularity - 1) / granularity) * granularity
}
