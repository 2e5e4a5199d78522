#![allow(missing_docs)]
#![allow(unsafe_code)]
#![cfg(feature = "block")]

use piicrypt_wasm::{decrypt, encrypt, last_length};
use std::slice;

fn read_output(ptr: *mut u8) -> Vec<u8> {
    assert!(!ptr.is_null());
    unsafe { slice::from_raw_parts(ptr, last_length() as usize) }.to_vec()
}

#[test]
fn partial_block_round_trip() {
    let key = [0u8; 32];
    let plain = [1u8, 2, 3, 4, 5];

    let frame_ptr = encrypt(0x02, key.as_ptr(), 32, plain.as_ptr(), 5);
    let frame = read_output(frame_ptr);
    assert_eq!(frame.len(), 33);
    assert_eq!(frame[0], 0x02);

    let out_ptr = decrypt(key.as_ptr(), 32, frame_ptr.cast_const(), 33);
    let out = read_output(out_ptr);
    // The decoder returns the whole padded body; only the prefix is plaintext.
    assert_eq!(out.len(), 16);
    assert_eq!(&out[..5], &plain);
}

#[test]
fn wrong_key_length_returns_null() {
    let key = [0u8; 16];
    let plain = [0xabu8; 4];
    assert!(encrypt(0x02, key.as_ptr(), 16, plain.as_ptr(), 4).is_null());

    let frame = [0u8; 33];
    assert!(decrypt(key.as_ptr(), 16, frame.as_ptr(), 33).is_null());
}

#[test]
fn short_frame_returns_null_and_preserves_last_length() {
    let key = [0x33u8; 32];
    let plain = [0x44u8; 7];
    assert!(!encrypt(0x02, key.as_ptr(), 32, plain.as_ptr(), 7).is_null());
    let before = last_length();

    let short = [0u8; 32];
    assert!(decrypt(key.as_ptr(), 32, short.as_ptr(), 32).is_null());
    assert_eq!(last_length(), before);
}
