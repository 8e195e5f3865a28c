//! Tests for serde serialization/deserialization.
//!
//! A set serializes as its compressed wire words, so the serde form and the
//! wire format can never drift apart.

#![cfg(feature = "serde")]

use compactly::{CompressedBitSet, Mode};

#[test]
fn test_empty_set() {
    let set = CompressedBitSet::new();
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, "[]");

    let restored: CompressedBitSet = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.len(), 0);
    assert_eq!(restored.count_ones(), 0);
}

#[test]
fn test_sparse_set() {
    let mut set = CompressedBitSet::new();
    set.set(2, true);
    set.set(5, true);
    set.set(31, true);

    let json = serde_json::to_string(&set).unwrap();
    let restored: CompressedBitSet = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.mode(), Mode::Compressed);
    assert_eq!(restored.count_ones(), 3);
    for i in 0..64u32 {
        assert_eq!(restored.get(i), set.get(i), "get({}) mismatch", i);
    }
}

#[test]
fn test_dense_set() {
    let set = CompressedBitSet::from_dense(vec![0xDEAD_BEEF, 0, 0, 0xFFFF_FFFF, 0x0000_0001]);

    let json = serde_json::to_string(&set).unwrap();
    let restored: CompressedBitSet = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.to_dense(), set.to_dense());
    assert_eq!(restored.len(), set.len());
    assert_eq!(restored.count_ones(), set.count_ones());
}

#[test]
fn test_compressed_set_serializes_stored_stream() {
    let mut set = CompressedBitSet::from_dense(vec![0, 0, 0x0F0F_0F0F, 0]);
    set.compact();

    let json = serde_json::to_string(&set).unwrap();
    let wire: Vec<u32> = serde_json::from_str(&json).unwrap();
    assert_eq!(wire, set.to_compressed());

    let restored: CompressedBitSet = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, set);
}

#[test]
fn test_rejects_overflowing_stream() {
    // Ones runs adding up past the u32 position space fail validation.
    let json = serde_json::to_string(&vec![0xC000_0000u32 | 0x3FFF_FFFF; 5]).unwrap();
    let result: Result<CompressedBitSet, _> = serde_json::from_str(&json);
    assert!(result.is_err());
}
