use thiserror::Error;

/// Errors produced by the codec core.
///
/// Every failure is detected locally from the supplied byte lengths; there is
/// no I/O and nothing is retried. Callers at the module boundary map any of
/// these to a null address return.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// The stream variant was handed an empty key or an empty payload.
    #[error("empty input: key length {key_len}, payload length {payload_len}")]
    EmptyInput {
        /// Length of the key supplied by the caller.
        key_len: usize,
        /// Length of the payload (plaintext or ciphertext) supplied.
        payload_len: usize,
    },

    /// The block variant was handed a key of the wrong size.
    #[error("bad key length: expected {expected} bytes, got {got}")]
    BadKeyLen {
        /// The exact key length the block variant requires.
        expected: usize,
        /// The key length the caller supplied.
        got: usize,
    },

    /// The ciphertext is shorter than the smallest valid frame.
    #[error("ciphertext too short: need at least {need} bytes, got {got}")]
    ShortCiphertext {
        /// Minimum frame length for the variant.
        need: usize,
        /// Actual frame length supplied.
        got: usize,
    },

    /// The header's declared plaintext length exceeds the bytes present.
    #[error("malformed frame: declared length {declared} exceeds available payload {available}")]
    Malformed {
        /// Plaintext length declared in the frame header.
        declared: usize,
        /// Payload bytes actually present after the header.
        available: usize,
    },
}
