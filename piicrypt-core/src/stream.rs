// File:    stream.rs
// Author:  apezoo
// Date:    2025-08-20
//
// Description: The stream-XOR codec variant: a 5-byte version-and-length header followed by a cyclic-key XOR of the payload.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Stream-XOR codec.
//!
//! Frame layout: one version octet, the plaintext length as a big-endian
//! `u32`, then `plain[i] ^ key[i % key.len()]` for every payload byte.
//! Decoding trusts the declared length and ignores any trailing bytes.

use crate::error::CodecError;
use log::debug;

/// Number of framing bytes preceding the payload: version (1) + length (4).
pub const HEADER_LEN: usize = 5;

/// Encrypts `plain` under a cyclic XOR of `key` and frames the result.
///
/// The returned frame is exactly `HEADER_LEN + plain.len()` bytes and starts
/// with the supplied `version` octet.
///
/// # Errors
///
/// Returns [`CodecError::EmptyInput`] if `key` or `plain` is empty.
pub fn encrypt(version: u8, key: &[u8], plain: &[u8]) -> Result<Vec<u8>, CodecError> {
    if key.is_empty() || plain.is_empty() {
        return Err(CodecError::EmptyInput {
            key_len: key.len(),
            payload_len: plain.len(),
        });
    }

    let mut frame = Vec::with_capacity(HEADER_LEN + plain.len());
    frame.push(version);
    frame.extend_from_slice(&(plain.len() as u32).to_be_bytes());
    frame.extend(plain.iter().zip(key.iter().cycle()).map(|(p, k)| p ^ k));

    debug!(
        "stream encrypt: {} plaintext bytes -> {} frame bytes",
        plain.len(),
        frame.len()
    );
    Ok(frame)
}

/// Decrypts a stream frame, returning exactly the declared plaintext.
///
/// Trailing bytes beyond the declared length are ignored; a declared length
/// of zero yields an empty plaintext.
///
/// # Errors
///
/// Returns [`CodecError::EmptyInput`] for an empty key,
/// [`CodecError::ShortCiphertext`] if the frame cannot hold a header, and
/// [`CodecError::Malformed`] if the declared length exceeds the payload.
pub fn decrypt(key: &[u8], frame: &[u8]) -> Result<Vec<u8>, CodecError> {
    if key.is_empty() {
        return Err(CodecError::EmptyInput {
            key_len: 0,
            payload_len: frame.len(),
        });
    }
    if frame.len() < HEADER_LEN {
        return Err(CodecError::ShortCiphertext {
            need: HEADER_LEN,
            got: frame.len(),
        });
    }

    let version = frame[0];
    let declared = u32::from_be_bytes([frame[1], frame[2], frame[3], frame[4]]) as usize;
    let body = &frame[HEADER_LEN..];
    if body.len() < declared {
        return Err(CodecError::Malformed {
            declared,
            available: body.len(),
        });
    }

    let plain: Vec<u8> = body[..declared]
        .iter()
        .zip(key.iter().cycle())
        .map(|(c, k)| c ^ k)
        .collect();

    debug!(
        "stream decrypt: version {version}, {} plaintext bytes",
        plain.len()
    );
    Ok(plain)
}
