//! Row codec tests: PackBits, run-length and row fitting.

use hpgl_core::codec::{Compression, decode_row, run_length_decode, unpack_bits};
use hpgl_core::error::PlotError;

fn bytes(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}

// === packbits ===

#[test]
fn test_packbits_literal_then_repeat() {
    assert_eq!(unpack_bits(&bytes("02aabbccfe11")), bytes("aabbcc111111"));
}

#[test]
fn test_packbits_noop_marker() {
    assert_eq!(unpack_bits(&bytes("800041800042")), bytes("4142"));
}

#[test]
fn test_packbits_longest_runs() {
    // 0x81 repeats 128 times, 0x7f copies 128 literals
    let mut data = bytes("8155");
    data.push(0x7f);
    data.extend(0..128u8);
    let out = unpack_bits(&data);
    assert_eq!(out.len(), 256);
    assert!(out[..128].iter().all(|&b| b == 0x55));
    assert_eq!(out[128..], (0..128u8).collect::<Vec<_>>()[..]);
}

#[test]
fn test_packbits_tiff_example() {
    // sample from the TIFF PackBits technote
    let packed = bytes("feaa0280002afdaa0380002a22f7aa");
    let expected = bytes("aaaaaa80002aaaaaaaaa80002a22aaaaaaaaaaaaaaaaaaaa");
    assert_eq!(unpack_bits(&packed), expected);
}

// === run-length ===

#[test]
fn test_rle_pairs() {
    assert_eq!(run_length_decode(&bytes("03410242")), bytes("4141414242"));
}

#[test]
fn test_rle_zero_count_emits_nothing() {
    assert_eq!(run_length_decode(&bytes("00ff0133")), bytes("33"));
}

// === row fitting ===

#[test]
fn test_zero_length_payloads() {
    for id in 0..=2 {
        assert!(decode_row(id, &[], 0).unwrap().is_empty());
    }
    assert!(Compression::PackBits.decode(&[]).is_empty());
}

#[test]
fn test_rows_padded_to_byte_width() {
    assert_eq!(decode_row(2, &bytes("fd00"), 6).unwrap(), bytes("000000000000"));
    assert_eq!(decode_row(1, &bytes("01ff"), 3).unwrap(), bytes("ff0000"));
}

#[test]
fn test_unknown_compression_fails_on_decode() {
    assert!(matches!(
        decode_row(9, &bytes("00"), 1),
        Err(PlotError::UnsupportedCompression { mode: 9 })
    ));
}
