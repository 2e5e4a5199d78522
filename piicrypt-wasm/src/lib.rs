// File:    lib.rs
// Author:  apezoo
// Date:    2025-08-20
//
// Description: The exported module boundary: raw-pointer entry points that exchange byte buffers with a foreign host over a shared linear memory.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # piicrypt module boundary
//!
//! Exports the four-entry ABI a foreign host drives over a shared linear
//! memory: [`allocate`], [`last_length`], `Encrypt`, and `Decrypt`. The host
//! writes key and payload bytes into regions obtained from [`allocate`],
//! invokes an entry point with address-plus-length pairs, then reads
//! [`last_length`] and copies the output bytes back out.
//!
//! The active codec is a compile-time selection: the default `stream` feature
//! builds the framed stream-XOR variant, the `block` feature the
//! block-scramble variant. All entry points are synchronous and assume a
//! single cooperative caller.
//!
//! Failure is signalled by a null return; a failed call leaves the value
//! reported by [`last_length`] untouched.

// The ABI hands buffers across the boundary as raw pointer + length pairs.
#![allow(unsafe_code)]

mod staging;
mod trace;

use log::{error, info};
use std::ptr;

#[cfg(feature = "block")]
use piicrypt_core::block as codec;
#[cfg(not(feature = "block"))]
use piicrypt_core::stream as codec;

/// Returns the starting address of a fresh zeroed region of `size` writable
/// bytes for the host to stage inputs in.
///
/// No free operation is exposed; every region lives until module teardown.
#[unsafe(no_mangle)]
pub extern "C" fn allocate(size: u32) -> *mut u8 {
    staging::reserve(size as usize)
}

/// Length in bytes of the most recently produced output buffer.
///
/// Idempotent: reading does not clear the value. Failed calls do not change
/// it.
#[unsafe(no_mangle)]
pub extern "C" fn last_length() -> u32 {
    staging::last_len()
}

/// Encrypts `plain_len` bytes at `plain_ptr` under the key at `key_ptr`,
/// stamping `version` into byte 0 of the frame.
///
/// Returns the address of the ciphertext, whose length is then readable via
/// [`last_length`], or null if the codec rejected the inputs. Both input
/// ranges are copied before any codec work and must stay valid and unchanged
/// for the duration of the call.
#[unsafe(export_name = "Encrypt")]
pub extern "C" fn encrypt(
    version: u8,
    key_ptr: *const u8,
    key_len: u32,
    plain_ptr: *const u8,
    plain_len: u32,
) -> *mut u8 {
    trace::init();
    let key = staging::copy_in(key_ptr, key_len);
    let plain = staging::copy_in(plain_ptr, plain_len);
    info!(
        "encrypt: key {} bytes, plaintext {} bytes",
        key.len(),
        plain.len()
    );

    match codec::encrypt(version, &key, &plain) {
        Ok(frame) => {
            info!("encrypt: produced {} bytes", frame.len());
            staging::publish(frame)
        }
        Err(e) => {
            error!("encrypt failed: {e}");
            ptr::null_mut()
        }
    }
}

/// Decrypts `cipher_len` bytes at `cipher_ptr` under the key at `key_ptr`.
///
/// Returns the address of the plaintext, whose length is then readable via
/// [`last_length`], or null if the frame or key was rejected. The same
/// copy-in contract as `Encrypt` applies.
#[unsafe(export_name = "Decrypt")]
pub extern "C" fn decrypt(
    key_ptr: *const u8,
    key_len: u32,
    cipher_ptr: *const u8,
    cipher_len: u32,
) -> *mut u8 {
    trace::init();
    let key = staging::copy_in(key_ptr, key_len);
    let cipher = staging::copy_in(cipher_ptr, cipher_len);
    info!(
        "decrypt: key {} bytes, ciphertext {} bytes",
        key.len(),
        cipher.len()
    );

    match codec::decrypt(&key, &cipher) {
        Ok(plain) => {
            info!("decrypt: produced {} bytes", plain.len());
            staging::publish(plain)
        }
        Err(e) => {
            error!("decrypt failed: {e}");
            ptr::null_mut()
        }
    }
}
