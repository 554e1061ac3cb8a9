//! Error types for container decoding.

use thiserror::Error;

/// Error variants for decoding a packed container.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The header or body is malformed or shorter than its declared layout.
    #[error("malformed container: {0}")]
    Format(&'static str),

    /// Tree traversal reached an absent child.
    #[error("corrupt tree: dead end at bit {bit_pos} after {symbols_decoded} symbols")]
    CorruptTree {
        /// Bit position at which the dead end was hit.
        bit_pos: usize,
        /// Number of symbols fully decoded before the failure.
        symbols_decoded: usize,
    },

    /// The declared bit length ran out in the middle of a code word.
    #[error("truncated stream: bit length {bit_len} ends inside a code word at bit {bit_pos}")]
    TruncatedStream {
        /// Bit position where the descent was cut off.
        bit_pos: usize,
        /// Declared meaningful bit length of the body.
        bit_len: usize,
    },

    /// A decoded symbol count differs from the frequency declared in the header.
    #[error(
        "incorrect frequency for {:?}: header={declared} decoded={observed}",
        char::from(*.symbol)
    )]
    StatsMismatch {
        /// Symbol whose tally disagrees.
        symbol: u8,
        /// Count declared by the header frequency table.
        declared: u32,
        /// Count observed in the decoded output.
        observed: u32,
    },
}

/// A specialized Result type for container decoding.
pub type Result<T> = std::result::Result<T, Error>;
