//! Tests for the record store layer
//!
//! These tests verify:
//! - Record framing (magic, version, CRC validation)
//! - DiskStore file-per-record behavior
//! - MemoryStore fake behavior
//! - Both backends through the RecordStore trait

use std::path::PathBuf;

use fatkv::store::codec;
use fatkv::{DiskStore, FatError, MemoryStore, RecordStore, Segment, SyncPolicy};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_disk_store() -> (TempDir, DiskStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = DiskStore::open(temp_dir.path(), SyncPolicy::EveryWrite).unwrap();
    (temp_dir, store)
}

fn sample_segment() -> Segment {
    Segment {
        data: "hello".to_string(),
        next: None,
        is_last: true,
    }
}

// =============================================================================
// Codec Tests
// =============================================================================

#[test]
fn test_codec_round_trip() {
    let segment = sample_segment();

    let frame = codec::encode_record(&segment).unwrap();
    let decoded: Segment = codec::decode_record("key", &frame).unwrap();

    assert_eq!(decoded, segment);
}

#[test]
fn test_codec_rejects_bad_magic() {
    let result: fatkv::Result<Segment> = codec::decode_record("key", b"GARBAGE_DATA_NOT_A_RECORD");

    assert!(matches!(result, Err(FatError::CorruptRecord { .. })));
}

#[test]
fn test_codec_rejects_truncated_frame() {
    let frame = codec::encode_record(&sample_segment()).unwrap();
    let truncated = &frame[..frame.len() - 3];

    let result: fatkv::Result<Segment> = codec::decode_record("key", truncated);
    assert!(matches!(result, Err(FatError::CorruptRecord { .. })));
}

#[test]
fn test_codec_rejects_flipped_payload_byte() {
    let frame = codec::encode_record(&sample_segment()).unwrap();

    let mut corrupted = frame.to_vec();
    let last = corrupted.len() - 1;
    corrupted[last] ^= 0xFF;

    let result: fatkv::Result<Segment> = codec::decode_record("key", &corrupted);
    assert!(matches!(result, Err(FatError::CorruptRecord { .. })));
}

#[test]
fn test_codec_error_names_the_key() {
    let result: fatkv::Result<Segment> = codec::decode_record("notes_segment3", b"short");

    match result {
        Err(FatError::CorruptRecord { key, .. }) => assert_eq!(key, "notes_segment3"),
        other => panic!("expected CorruptRecord, got {:?}", other),
    }
}

// =============================================================================
// DiskStore Tests
// =============================================================================

#[test]
fn test_disk_store_creates_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested: PathBuf = temp_dir.path().join("a").join("b");

    DiskStore::open(&nested, SyncPolicy::OsManaged).unwrap();

    assert!(nested.is_dir());
}

#[test]
fn test_disk_store_put_get_round_trip() {
    let (_temp, store) = setup_disk_store();

    store.put("key1", b"value1").unwrap();
    let value = store.get("key1").unwrap();

    assert_eq!(value.as_deref(), Some(b"value1".as_slice()));
}

#[test]
fn test_disk_store_get_missing_key() {
    let (_temp, store) = setup_disk_store();

    assert_eq!(store.get("missing").unwrap(), None);
}

#[test]
fn test_disk_store_put_overwrites() {
    let (_temp, store) = setup_disk_store();

    store.put("key1", b"old").unwrap();
    store.put("key1", b"new").unwrap();

    assert_eq!(store.get("key1").unwrap().as_deref(), Some(b"new".as_slice()));
}

#[test]
fn test_disk_store_delete() {
    let (_temp, store) = setup_disk_store();

    store.put("key1", b"value1").unwrap();

    assert!(store.delete("key1").unwrap());
    assert_eq!(store.get("key1").unwrap(), None);

    // Deleting an absent key is not an error
    assert!(!store.delete("key1").unwrap());
}

#[test]
fn test_disk_store_list() {
    let (_temp, store) = setup_disk_store();

    store.put("b", b"2").unwrap();
    store.put("a", b"1").unwrap();
    store.put("c", b"3").unwrap();

    let mut keys = store.list().unwrap();
    keys.sort();

    assert_eq!(keys, vec!["a", "b", "c"]);
}

#[test]
fn test_disk_store_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();

    {
        let store = DiskStore::open(temp_dir.path(), SyncPolicy::EveryWrite).unwrap();
        store.put("persistent", b"data").unwrap();
    }

    let store = DiskStore::open(temp_dir.path(), SyncPolicy::EveryWrite).unwrap();
    assert_eq!(
        store.get("persistent").unwrap().as_deref(),
        Some(b"data".as_slice())
    );
}

// =============================================================================
// MemoryStore Tests
// =============================================================================

#[test]
fn test_memory_store_round_trip() {
    let store = MemoryStore::new();

    store.put("key1", b"value1").unwrap();

    assert_eq!(store.get("key1").unwrap().as_deref(), Some(b"value1".as_slice()));
    assert_eq!(store.get("missing").unwrap(), None);
    assert_eq!(store.record_count(), 1);
}

#[test]
fn test_memory_store_delete_and_list() {
    let store = MemoryStore::new();

    store.put("a", b"1").unwrap();
    store.put("b", b"2").unwrap();

    assert!(store.delete("a").unwrap());
    assert!(!store.delete("a").unwrap());

    assert_eq!(store.list().unwrap(), vec!["b"]);
}
