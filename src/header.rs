//! Parser for the fixed binary container layout.
//!
//! All integers are little-endian `u32`. The layout is:
//!
//! ```text
//! declared_len   u32      total container length, informational
//! reserved       u32      expected zero, tolerated if not
//! symbol_count   u32
//! entries        symbol_count x { count: u32, symbol: u8, pad: [u8; 3] }
//! packed_bits    u32      meaningful bits in the body
//! packed_bytes   u32      raw body bytes, >= ceil(packed_bits / 8)
//! unpacked_len   u32      declared symbol count after decode
//! body           packed_bytes raw bytes
//! ```

use log::{debug, trace, warn};

use crate::error::{Error, Result};

/// One frequency table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreqEntry {
    /// The symbol byte.
    pub symbol: u8,
    /// Declared occurrence count.
    pub count: u32,
}

/// A parsed container header borrowing the packed body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container<'a> {
    /// Declared total container length. Informational only.
    pub declared_len: u32,
    /// Reserved field. Expected zero but deliberately not enforced.
    pub reserved: u32,
    /// Frequency table in header order. Order is semantic: it fixes the
    /// leaf insertion sequence and thereby the rebuilt tree.
    pub freqs: Vec<FreqEntry>,
    /// Number of meaningful bits in `body`.
    pub packed_bits: u32,
    /// Declared symbol count of the decoded output. Informational.
    pub unpacked_len: u32,
    /// The raw packed body.
    pub body: &'a [u8],
}

/// Bounds-checked cursor over the raw container bytes.
struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn take(&mut self, n: usize, what: &'static str) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.buf.len())
            .ok_or(Error::Format(what))?;
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn u32(&mut self, what: &'static str) -> Result<u32> {
        let bytes = self.take(4, what)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}

impl<'a> Container<'a> {
    /// Parse a container from raw bytes.
    ///
    /// Fails with [`Error::Format`] when the input is shorter than the
    /// declared layout or when the declared bit length does not fit in the
    /// declared byte length. Bytes past the body are ignored.
    pub fn parse(bytes: &'a [u8]) -> Result<Container<'a>> {
        let mut r = Reader::new(bytes);

        let declared_len = r.u32("truncated header")?;
        let reserved = r.u32("truncated header")?;
        if reserved != 0 {
            warn!("reserved header field is {reserved:#010x}, expected zero");
        }

        let symbol_count = r.u32("truncated header")?;
        debug!("container: declared_len={declared_len} symbols={symbol_count}");

        // Symbols are bytes, so a sane table never exceeds 256 entries; the
        // count itself is attacker-controlled and must not size allocations.
        let mut freqs = Vec::with_capacity(symbol_count.min(256) as usize);
        for _ in 0..symbol_count {
            let count = r.u32("truncated frequency table")?;
            let entry = r.take(4, "truncated frequency table")?;
            trace!(
                "frequency entry: byte {:#04x} ({:?}) count {}",
                entry[0], entry[0] as char, count
            );
            freqs.push(FreqEntry {
                symbol: entry[0],
                count,
            });
        }

        let packed_bits = r.u32("truncated body header")?;
        let packed_bytes = r.u32("truncated body header")?;
        let unpacked_len = r.u32("truncated body header")?;

        if u64::from(packed_bytes) * 8 < u64::from(packed_bits) {
            return Err(Error::Format("bit length exceeds body size"));
        }

        let body = r.take(packed_bytes as usize, "truncated body")?;
        debug!(
            "body: {} bits in {} bytes, declared unpacked length {}",
            packed_bits, packed_bytes, unpacked_len
        );

        Ok(Container {
            declared_len,
            reserved,
            freqs,
            packed_bits,
            unpacked_len,
            body,
        })
    }

    /// Read body bit `pos`, most-significant bit of each byte first.
    ///
    /// Callers keep `pos` below `packed_bits`; bits past that are padding
    /// and must never be interpreted.
    pub fn bit(&self, pos: usize) -> u8 {
        (self.body[pos / 8] >> (7 - pos % 8)) & 1
    }
}
