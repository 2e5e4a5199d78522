#![allow(missing_docs)]
#![allow(unsafe_code)]
#![cfg(not(feature = "block"))]

use piicrypt_wasm::{allocate, decrypt, encrypt, last_length};
use std::ptr;
use std::slice;

fn read_output(ptr: *mut u8) -> Vec<u8> {
    assert!(!ptr.is_null());
    unsafe { slice::from_raw_parts(ptr, last_length() as usize) }.to_vec()
}

#[test]
fn allocate_returns_a_writable_region() {
    let region = allocate(8);
    assert!(!region.is_null());
    unsafe {
        for i in 0..8 {
            *region.add(i) = i as u8;
        }
        assert_eq!(slice::from_raw_parts(region, 8), [0, 1, 2, 3, 4, 5, 6, 7]);
    }
}

#[test]
fn round_trip_through_staged_regions() {
    // Drive the boundary the way a host would: stage inputs via allocate,
    // pass addresses, read last_length, copy the output back out.
    let key = b"AB";
    let plain = b"Hello";

    let key_region = allocate(key.len() as u32);
    let plain_region = allocate(plain.len() as u32);
    unsafe {
        ptr::copy_nonoverlapping(key.as_ptr(), key_region, key.len());
        ptr::copy_nonoverlapping(plain.as_ptr(), plain_region, plain.len());
    }

    let frame_ptr = encrypt(
        0x01,
        key_region,
        key.len() as u32,
        plain_region,
        plain.len() as u32,
    );
    let frame = read_output(frame_ptr);
    assert_eq!(
        frame,
        vec![0x01, 0x00, 0x00, 0x00, 0x05, 0x09, 0x27, 0x2d, 0x2e, 0x2e]
    );

    let plain_ptr = decrypt(
        key.as_ptr(),
        key.len() as u32,
        frame_ptr.cast_const(),
        frame.len() as u32,
    );
    assert_eq!(read_output(plain_ptr), b"Hello");
}

#[test]
fn last_length_tracks_each_successful_call() {
    let key = b"\xff";
    let plain = [0x00u8, 0x01, 0x02, 0x03];
    let frame_ptr = encrypt(0x7f, key.as_ptr(), 1, plain.as_ptr(), 4);
    assert!(!frame_ptr.is_null());
    assert_eq!(last_length(), 9);
    // Reading is idempotent.
    assert_eq!(last_length(), 9);

    let plain_ptr = decrypt(key.as_ptr(), 1, frame_ptr.cast_const(), 9);
    assert!(!plain_ptr.is_null());
    assert_eq!(last_length(), 4);
}

#[test]
fn failed_call_returns_null_and_preserves_last_length() {
    let key = b"k";
    let plain = b"seed output";
    let ok = encrypt(0x01, key.as_ptr(), 1, plain.as_ptr(), plain.len() as u32);
    assert!(!ok.is_null());
    let before = last_length();

    // Empty plaintext is rejected by the stream codec.
    let failed = encrypt(0x01, key.as_ptr(), 1, ptr::null(), 0);
    assert!(failed.is_null());
    assert_eq!(last_length(), before);

    // Truncated frame on the decrypt side.
    let short = [0x01u8, 0x00, 0x00];
    let failed = decrypt(key.as_ptr(), 1, short.as_ptr(), 3);
    assert!(failed.is_null());
    assert_eq!(last_length(), before);
}

#[test]
fn malformed_declared_length_returns_null() {
    let key = [0xaau8];
    let frame = [0x01u8, 0x00, 0x00, 0x00, 0x08, 0xaa, 0xaa, 0xaa];
    let out = decrypt(key.as_ptr(), 1, frame.as_ptr(), frame.len() as u32);
    assert!(out.is_null());
}
