//! Decoder for a compact binary Huffman container.
//!
//! The container carries a fixed little-endian header enumerating per-symbol
//! frequencies, followed by a bit-packed body of concatenated variable-length
//! codes. Decoding rebuilds the Huffman tree deterministically from the
//! frequency table (a min-heap merge, identical mechanics to the encoder's)
//! and walks it bit by bit to recover the original symbol sequence.
//!
//! This crate is decode-only. Feeding it bytes from a file or socket is the
//! caller's job; it consumes an in-memory buffer and is freely usable from
//! multiple threads as long as each call owns its input.
//!
//! ```
//! use huffman_unpack::unpack;
//!
//! // declared_len=32, reserved=0, one symbol 'x' with count 4,
//! // 0 packed bits in 0 bytes, 4 unpacked symbols
//! let raw = [
//!     32, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 4, 0, 0, 0, b'x', 0, 0, 0, 0, 0,
//!     0, 0, 0, 0, 0, 0, 4, 0, 0, 0,
//! ];
//! assert_eq!(unpack(&raw).unwrap(), b"xxxx");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod decode;
pub mod error;
pub mod header;
pub mod heap;
pub mod tree;

use log::warn;

pub use decode::{decode, decode_observed, verify_stats};
pub use error::{Error, Result};
pub use header::{Container, FreqEntry};
pub use tree::{Node, build_tree};

fn unpack_inner(bytes: &[u8], check_stats: bool) -> Result<Vec<u8>> {
    let container = Container::parse(bytes)?;
    let root = build_tree(&container.freqs).ok_or(Error::Format("empty frequency table"))?;

    let decoded = decode::decode(&root, &container)?;
    if check_stats {
        decode::verify_stats(&decoded, &container.freqs)?;
    }

    if decoded.len() != container.unpacked_len as usize {
        warn!(
            "decoded length {} differs from declared unpacked length {}",
            decoded.len(),
            container.unpacked_len
        );
    }
    Ok(decoded)
}

/// Decode a complete container into its original symbol sequence.
///
/// Parses the header, rebuilds the tree, and walks the packed body. Fails
/// with a [`Error::Format`] on a malformed or truncated layout, and with
/// [`Error::CorruptTree`] or [`Error::TruncatedStream`] when the body does
/// not agree with the tree.
pub fn unpack(bytes: &[u8]) -> Result<Vec<u8>> {
    unpack_inner(bytes, false)
}

/// Like [`unpack`], additionally cross-checking decoded symbol tallies
/// against the header's declared frequencies.
///
/// Fails with [`Error::StatsMismatch`] on the first disagreeing symbol.
pub fn unpack_checked(bytes: &[u8]) -> Result<Vec<u8>> {
    unpack_inner(bytes, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_a_format_error() {
        assert!(matches!(unpack(&[]), Err(Error::Format(_))));
    }

    #[test]
    fn empty_frequency_table_is_a_format_error() {
        // Valid layout with symbol_count = 0 and an empty body.
        let mut raw = Vec::new();
        for field in [24u32, 0, 0, 0, 0, 0] {
            raw.extend_from_slice(&field.to_le_bytes());
        }
        assert_eq!(unpack(&raw), Err(Error::Format("empty frequency table")));
    }
}
