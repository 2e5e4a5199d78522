// File:    block.rs
// Author:  apezoo
// Date:    2025-08-20
//
// Description: The block-scramble codec variant: key-derived IV, per-position XOR mixing, 8-bit rotation, and block padding.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Block-scramble codec.
//!
//! Frame layout: one version octet, a 16-byte IV derived from the key, the
//! per-byte transformed payload, then 1..=16 filler bytes so that the body is
//! a positive multiple of 16. The IV is purely a function of the key and adds
//! no entropy. Decoding inverts the transform over the whole body and does
//! **not** strip the filler; the frame records neither the pad length nor the
//! original plaintext length, so recognizing the trailing filler is the
//! caller's job.

use crate::error::CodecError;
use log::debug;

/// Exact key length the block variant requires.
pub const KEY_LEN: usize = 32;
/// Length of the key-derived IV embedded in every frame.
pub const IV_LEN: usize = 16;
/// Alignment of the encrypted body; padding always rounds up to this.
pub const BLOCK_LEN: usize = 16;
/// Smallest valid frame: version + IV + one full block.
pub const MIN_FRAME_LEN: usize = 1 + IV_LEN + BLOCK_LEN;

const ROTATE: u32 = 3;

fn check_key(key: &[u8]) -> Result<(), CodecError> {
    if key.len() == KEY_LEN {
        Ok(())
    } else {
        Err(CodecError::BadKeyLen {
            expected: KEY_LEN,
            got: key.len(),
        })
    }
}

/// Derives the 16-byte IV from a 32-byte key: `iv[i] = key[i] ^ i`.
///
/// # Errors
///
/// Returns [`CodecError::BadKeyLen`] unless `key` is exactly 32 bytes.
pub fn derive_iv(key: &[u8]) -> Result<[u8; IV_LEN], CodecError> {
    check_key(key)?;
    let mut iv = [0u8; IV_LEN];
    for (i, b) in iv.iter_mut().enumerate() {
        *b = key[i % KEY_LEN] ^ (i as u8);
    }
    Ok(iv)
}

/// Body length after padding: the smallest positive multiple of 16 that is
/// strictly greater than `plain_len`, i.e. pad is always in `1..=16`.
#[must_use]
pub fn padded_len(plain_len: usize) -> usize {
    let rem = plain_len % BLOCK_LEN;
    plain_len + if rem == 0 { BLOCK_LEN } else { BLOCK_LEN - rem }
}

fn mix(byte: u8, key: &[u8], iv: &[u8; IV_LEN], i: usize) -> u8 {
    byte ^ key[i % KEY_LEN] ^ iv[i % IV_LEN] ^ ((i % 256) as u8)
}

/// Encrypts `plain` into a block frame of `1 + 16 + padded_len(plain.len())`
/// bytes starting with the supplied `version` octet.
///
/// Each payload byte is XOR-mixed with the key, the IV, and its own position,
/// then rotated left by three bits. The filler after the payload is the
/// deterministic junk `(j as u8) ^ key[j % 32]` for each padded position `j`.
///
/// # Errors
///
/// Returns [`CodecError::BadKeyLen`] unless `key` is exactly 32 bytes.
pub fn encrypt(version: u8, key: &[u8], plain: &[u8]) -> Result<Vec<u8>, CodecError> {
    let iv = derive_iv(key)?;
    let total = padded_len(plain.len());

    let mut frame = Vec::with_capacity(1 + IV_LEN + total);
    frame.push(version);
    frame.extend_from_slice(&iv);
    for (i, &p) in plain.iter().enumerate() {
        frame.push(mix(p, key, &iv, i).rotate_left(ROTATE));
    }
    for j in plain.len()..total {
        frame.push((j as u8) ^ key[j % KEY_LEN]);
    }

    debug!(
        "block encrypt: {} plaintext bytes -> {} frame bytes ({} filler)",
        plain.len(),
        frame.len(),
        total - plain.len()
    );
    Ok(frame)
}

/// Decrypts a block frame, returning the entire inverted body.
///
/// The output is `frame.len() - 17` bytes; the last 1..=16 of them are the
/// decoded remains of the encrypt-time filler, which this function never
/// strips. The IV is taken from the frame itself, not re-derived.
///
/// # Errors
///
/// Returns [`CodecError::BadKeyLen`] unless `key` is exactly 32 bytes, and
/// [`CodecError::ShortCiphertext`] if the frame is under 33 bytes.
pub fn decrypt(key: &[u8], frame: &[u8]) -> Result<Vec<u8>, CodecError> {
    check_key(key)?;
    if frame.len() < MIN_FRAME_LEN {
        return Err(CodecError::ShortCiphertext {
            need: MIN_FRAME_LEN,
            got: frame.len(),
        });
    }

    let version = frame[0];
    let mut iv = [0u8; IV_LEN];
    iv.copy_from_slice(&frame[1..1 + IV_LEN]);

    let plain: Vec<u8> = frame[1 + IV_LEN..]
        .iter()
        .enumerate()
        .map(|(i, &b)| mix(b.rotate_right(ROTATE), key, &iv, i))
        .collect();

    debug!(
        "block decrypt: version {version}, {} body bytes (filler retained)",
        plain.len()
    );
    Ok(plain)
}
