//! Bit-level tree traversal over the packed body.

use std::time::Instant;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::header::{Container, FreqEntry};
use crate::tree::Node;

/// Decode the packed body against a tree root.
///
/// See [`decode_observed`]; this installs a no-op bit observer.
pub fn decode(root: &Node, container: &Container) -> Result<Vec<u8>> {
    decode_observed(root, container, |_| {})
}

/// Decode the packed body, reporting every consumed bit to `observe`.
///
/// The observer hook replaces unconditional bit tracing; pass a closure
/// that collects or prints bits when that level of visibility is wanted.
///
/// A leaf root (single-symbol alphabet) is special-cased: its code is zero
/// bits wide, so emission is driven by the header's declared unpacked
/// length and no body bit is ever consumed. The generic walk below would
/// otherwise never advance.
///
/// On any failure the partial output is discarded, never returned.
pub fn decode_observed<F>(root: &Node, container: &Container, mut observe: F) -> Result<Vec<u8>>
where
    F: FnMut(u8),
{
    let start = Instant::now();
    let bit_len = container.packed_bits as usize;

    if let Node::Leaf { symbol, .. } = root {
        debug!(
            "single-symbol alphabet, emitting {:?} x {}",
            *symbol as char, container.unpacked_len
        );
        return Ok(vec![*symbol; container.unpacked_len as usize]);
    }

    // The declared unpacked length is a hint; never trust it for more than
    // one symbol per meaningful bit.
    let mut out = Vec::with_capacity((container.unpacked_len as usize).min(bit_len));
    let mut pos = 0usize;
    while pos < bit_len {
        let mut node = root;
        while let Node::Internal { left, right, .. } = node {
            if pos >= bit_len {
                return Err(Error::TruncatedStream {
                    bit_pos: pos,
                    bit_len,
                });
            }
            let bit = container.bit(pos);
            observe(bit);
            pos += 1;

            let next = if bit == 1 { right } else { left };
            node = match next {
                Some(child) => child.as_ref(),
                None => {
                    return Err(Error::CorruptTree {
                        bit_pos: pos,
                        symbols_decoded: out.len(),
                    });
                }
            };
        }
        if let Node::Leaf { symbol, .. } = node {
            trace!("decoded {:?} at bit {}", *symbol as char, pos);
            out.push(*symbol);
        }
    }

    debug!(
        "decoded {} symbols from {} bits in {:.2?}",
        out.len(),
        bit_len,
        start.elapsed()
    );
    Ok(out)
}

/// Compare decoded symbol tallies against the declared frequency table.
///
/// Fails with [`Error::StatsMismatch`] on the first entry whose decoded
/// count differs from its header count.
pub fn verify_stats(decoded: &[u8], freqs: &[FreqEntry]) -> Result<()> {
    let mut observed = [0u32; 256];
    for &byte in decoded {
        observed[byte as usize] += 1;
    }

    for entry in freqs {
        let seen = observed[entry.symbol as usize];
        if seen != entry.count {
            return Err(Error::StatsMismatch {
                symbol: entry.symbol,
                declared: entry.count,
                observed: seen,
            });
        }
    }
    Ok(())
}
