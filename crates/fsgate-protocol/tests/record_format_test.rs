//! Wire format verification for metadata information records.
//!
//! These tests pin the byte-for-byte layouts the kernel expects, including
//! interior padding and the split high/low encoding of 64-bit quantities.

use fsgate_common::types::{attributes, FileTime, MetadataSnapshot};
use fsgate_common::{Error, Result};
use fsgate_protocol::cursor::OutputCursor;
use fsgate_protocol::{
    all_info, attribute_tag_info, basic_info, ea_info, internal_info, name_info,
    network_open_info, position_info, standard_info,
};

fn sample_snapshot() -> MetadataSnapshot {
    let mut snapshot = MetadataSnapshot {
        attributes: attributes::ARCHIVE,
        creation_time: FileTime { low: 1, high: 2 },
        last_access_time: FileTime { low: 3, high: 4 },
        last_write_time: FileTime { low: 5, high: 6 },
        link_count: 2,
        ..Default::default()
    };
    snapshot.set_file_size(5000);
    snapshot.set_file_index(0x0000_0066_0000_0055);
    snapshot
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
}

fn read_u64(bytes: &[u8], offset: usize) -> u64 {
    u64::from_le_bytes(bytes[offset..offset + 8].try_into().unwrap())
}

#[test]
fn test_basic_record_wire_format() {
    let mut cursor = OutputCursor::new(64);
    basic_info::encode(&mut cursor, &sample_snapshot()).unwrap();
    let bytes = cursor.freeze();

    let expected = vec![
        1, 0, 0, 0, 2, 0, 0, 0, // creation time
        3, 0, 0, 0, 4, 0, 0, 0, // last access time
        5, 0, 0, 0, 6, 0, 0, 0, // last write time
        5, 0, 0, 0, 6, 0, 0, 0, // change time mirrors last write
        0x20, 0, 0, 0, // attributes
        0, 0, 0, 0, // pad
    ];
    assert_eq!(bytes.to_vec(), expected);
    assert_eq!(bytes.len(), basic_info::BASIC_INFO_SIZE);
}

#[test]
fn test_standard_record_rounds_allocation_size() {
    let mut cursor = OutputCursor::new(standard_info::STANDARD_INFO_SIZE);
    standard_info::encode(&mut cursor, &sample_snapshot(), 4096).unwrap();
    let bytes = cursor.freeze();

    assert_eq!(bytes.len(), 24);
    assert_eq!(read_u64(&bytes, 0), 8192); // allocation size, rounded up
    assert_eq!(read_u64(&bytes, 8), 5000); // end of file, exact
    assert_eq!(read_u32(&bytes, 16), 2); // link count
    assert_eq!(bytes[20], 0); // delete pending is never reported
    assert_eq!(bytes[21], 0); // not a directory
}

#[test]
fn test_standard_record_directory_and_empty_file() {
    let mut snapshot = sample_snapshot();
    snapshot.attributes = attributes::DIRECTORY;
    snapshot.set_file_size(0);

    let mut cursor = OutputCursor::new(64);
    standard_info::encode(&mut cursor, &snapshot, 4096).unwrap();
    let bytes = cursor.freeze();

    assert_eq!(read_u64(&bytes, 0), 0); // zero size stays zero allocation
    assert_eq!(bytes[21], 1); // directory bit computed from attributes
}

#[test]
fn test_position_record_always_reports_zero() {
    let mut cursor = OutputCursor::new(16);
    position_info::encode(&mut cursor).unwrap();
    let bytes = cursor.freeze();
    assert_eq!(bytes.to_vec(), vec![0u8; 8]);
}

#[test]
fn test_attribute_tag_record_zeroes_reparse_tag() {
    let mut cursor = OutputCursor::new(8);
    attribute_tag_info::encode(&mut cursor, &sample_snapshot()).unwrap();
    let bytes = cursor.freeze();
    assert_eq!(read_u32(&bytes, 0), attributes::ARCHIVE);
    assert_eq!(read_u32(&bytes, 4), 0);
}

#[test]
fn test_network_open_record_wire_format() {
    let mut cursor = OutputCursor::new(64);
    network_open_info::encode(&mut cursor, &sample_snapshot(), 4096).unwrap();
    let bytes = cursor.freeze();

    assert_eq!(bytes.len(), network_open_info::NETWORK_OPEN_INFO_SIZE);
    assert_eq!(read_u32(&bytes, 0), 1); // creation low
    assert_eq!(read_u32(&bytes, 4), 2); // creation high
    assert_eq!(read_u32(&bytes, 16), 5); // last write low
    assert_eq!(read_u32(&bytes, 24), 5); // change time mirrors last write
    assert_eq!(read_u64(&bytes, 32), 8192); // allocation size
    assert_eq!(read_u64(&bytes, 40), 5000); // end of file
    assert_eq!(read_u32(&bytes, 48), attributes::ARCHIVE);
    assert_eq!(read_u32(&bytes, 52), 0); // pad
}

#[test]
fn test_internal_record_assembles_split_index() {
    let mut cursor = OutputCursor::new(8);
    internal_info::encode(&mut cursor, &sample_snapshot()).unwrap();
    let bytes = cursor.freeze();
    assert_eq!(bytes.to_vec(), vec![0x55, 0, 0, 0, 0x66, 0, 0, 0]);
}

#[test]
fn test_ea_record_is_a_zero_placeholder() {
    let mut cursor = OutputCursor::new(4);
    ea_info::encode(&mut cursor).unwrap();
    let bytes = cursor.freeze();
    assert_eq!(bytes.to_vec(), vec![0u8; 4]);
}

fn assert_too_small<F>(size: usize, encode: F)
where
    F: FnOnce(&mut OutputCursor) -> Result<()>,
{
    let mut cursor = OutputCursor::new(size - 1);
    assert!(matches!(encode(&mut cursor), Err(Error::BufferTooSmall)));
    assert_eq!(cursor.written(), 0);
    assert_eq!(cursor.remaining(), size - 1);
}

#[test]
fn test_fixed_records_fail_one_byte_short() {
    let snapshot = sample_snapshot();
    assert_too_small(basic_info::BASIC_INFO_SIZE, |c| {
        basic_info::encode(c, &snapshot)
    });
    assert_too_small(standard_info::STANDARD_INFO_SIZE, |c| {
        standard_info::encode(c, &snapshot, 512)
    });
    assert_too_small(position_info::POSITION_INFO_SIZE, |c| {
        position_info::encode(c)
    });
    assert_too_small(internal_info::INTERNAL_INFO_SIZE, |c| {
        internal_info::encode(c, &snapshot)
    });
    assert_too_small(ea_info::EA_INFO_SIZE, |c| ea_info::encode(c));
    assert_too_small(attribute_tag_info::ATTRIBUTE_TAG_INFO_SIZE, |c| {
        attribute_tag_info::encode(c, &snapshot)
    });
    assert_too_small(network_open_info::NETWORK_OPEN_INFO_SIZE, |c| {
        network_open_info::encode(c, &snapshot, 512)
    });
}

#[test]
fn test_name_record_wire_format() {
    let name = "\\f.txt";
    let name_len = name.len() * 2; // ASCII path, one unit per char

    let mut cursor = OutputCursor::new(name_info::NAME_INFO_SIZE + name_len);
    name_info::encode(&mut cursor, name).unwrap();
    let bytes = cursor.freeze();

    // Committed bytes are the length field plus the text.
    assert_eq!(bytes.len(), 4 + name_len);
    assert_eq!(read_u32(&bytes, 0), name_len as u32);
    assert_eq!(&bytes[4..6], &[b'\\', 0]);
    assert_eq!(&bytes[6..8], &[b'f', 0]);
}

#[test]
fn test_name_record_requires_header_slot_and_full_name() {
    let name = "\\f.txt";
    let mut cursor = OutputCursor::new(name_info::NAME_INFO_SIZE + name.len() * 2 - 1);
    assert!(matches!(
        name_info::encode(&mut cursor, name),
        Err(Error::BufferTooSmall)
    ));
    assert_eq!(cursor.written(), 0);
}

#[test]
fn test_all_record_full_wire_format() {
    let name = "\\ab";
    let mut cursor = OutputCursor::new(200);
    all_info::encode(&mut cursor, &sample_snapshot(), 4096, name).unwrap();
    let bytes = cursor.freeze();

    // Fixed sections plus the name header and text.
    assert_eq!(bytes.len(), 100 + name.len() * 2);
    assert_eq!(read_u32(&bytes, 0), 1); // basic section starts the record
    assert_eq!(read_u64(&bytes, 40), 8192); // standard section allocation size
    assert_eq!(&bytes[64..80], &[0u8; 16]); // interior sections stay zero
    assert_eq!(read_u64(&bytes, 80), 0); // position section
    assert_eq!(&bytes[88..96], &[0u8; 8]); // mode and alignment sections
    assert_eq!(read_u32(&bytes, all_info::NAME_LENGTH_OFFSET), 6);
    assert_eq!(&bytes[100..102], &[b'\\', 0]);
}

#[test]
fn test_all_record_truncation_reports_true_name_length() {
    let name = "\\hello";
    let name_len = name.len() * 2;

    // Fits the fixed portion but not the full name.
    let mut cursor = OutputCursor::new(all_info::ALL_INFO_FIXED_SIZE + name_len - 1);
    let result = all_info::encode(&mut cursor, &sample_snapshot(), 4096, name);

    assert!(matches!(result, Err(Error::BufferTooSmall)));
    // Only the fixed portion is charged against capacity.
    assert_eq!(cursor.written(), all_info::ALL_INFO_FIXED_SIZE);
    let bytes = cursor.freeze();
    // The reported length is the true length, not the truncated amount.
    assert_eq!(read_u32(&bytes, all_info::NAME_LENGTH_OFFSET), name_len as u32);
    // Exactly one character of the name follows.
    assert_eq!(&bytes[100..102], &[b'\\', 0]);
    assert_eq!(&bytes[102..104], &[0, 0]);
}

#[test]
fn test_all_record_fails_outright_below_fixed_size() {
    let mut cursor = OutputCursor::new(all_info::ALL_INFO_FIXED_SIZE - 1);
    let result = all_info::encode(&mut cursor, &sample_snapshot(), 4096, "\\x");
    assert!(matches!(result, Err(Error::BufferTooSmall)));
    assert_eq!(cursor.written(), 0);
}
