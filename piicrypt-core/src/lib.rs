// File:    lib.rs
// Author:  apezoo
// Date:    2025-08-20
//
// Description: The main library crate for piicrypt-core, providing the stream and block codec variants and their shared error type.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # piicrypt Core Library
//!
//! This library implements the two demonstration byte codecs used by the
//! piicrypt module: a framed stream-XOR transform and a 16-byte-aligned
//! block-scramble transform with a key-derived IV. Both are deterministic,
//! symmetric, and **not secure** — they exist as a byte-compatibility
//! contract for hosts that already hold ciphertexts in these formats.

/// Block-scramble codec: 32-byte key, key-derived IV, bit rotation, padding.
pub mod block;
/// The error taxonomy shared by both codec variants.
pub mod error;
/// Stream-XOR codec with a 5-byte version-and-length header.
pub mod stream;

pub use error::CodecError;
