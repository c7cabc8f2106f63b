//! MSB-first bit sequences shared by the mnemonic and babel converters

use std::fmt;

/// Ordered bit sequence, most significant bit first
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    bits: Vec<bool>,
}

impl BitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: Vec::with_capacity(bits),
        }
    }

    /// Unpack bytes, high bit of each byte first
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut buf = Self::with_capacity(bytes.len() * 8);
        for &byte in bytes {
            buf.push_bits(byte as u32, 8);
        }
        buf
    }

    /// Append the low `width` bits of `value`, most significant first
    pub fn push_bits(&mut self, value: u32, width: usize) {
        debug_assert!(width <= 32);
        for shift in (0..width).rev() {
            self.bits.push((value >> shift) & 1 == 1);
        }
    }

    /// Append every bit of `other`
    pub fn extend(&mut self, other: &BitBuffer) {
        self.bits.extend_from_slice(&other.bits);
    }

    /// Read `width` bits starting at `offset` as an unsigned integer.
    ///
    /// Bits past the end of the buffer read as zero.
    pub fn read_bits(&self, offset: usize, width: usize) -> u32 {
        debug_assert!(width <= 32);
        (offset..offset + width).fold(0u32, |acc, i| {
            (acc << 1) | u32::from(self.bits.get(i).copied().unwrap_or(false))
        })
    }

    /// Iterate over consecutive `width`-bit groups.
    ///
    /// A trailing partial group is filled with zero bits.
    pub fn chunks(&self, width: usize) -> impl Iterator<Item = u32> + '_ {
        (0..self.bits.len())
            .step_by(width.max(1))
            .map(move |offset| self.read_bits(offset, width))
    }

    /// Split into the first `at` bits and the remainder
    pub fn split_at(&self, at: usize) -> (BitBuffer, BitBuffer) {
        let at = at.min(self.bits.len());
        let (head, tail) = self.bits.split_at(at);
        (
            BitBuffer {
                bits: head.to_vec(),
            },
            BitBuffer {
                bits: tail.to_vec(),
            },
        )
    }

    pub fn truncate(&mut self, len: usize) {
        self.bits.truncate(len);
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Pack into bytes, zero-filling a trailing partial byte
    pub fn to_bytes(&self) -> Vec<u8> {
        self.chunks(8).map(|byte| byte as u8).collect()
    }
}

impl fmt::Display for BitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitBuffer")
            .field("len", &self.bits.len())
            .finish()
    }
}

impl Drop for BitBuffer {
    fn drop(&mut self) {
        zeroize::Zeroize::zeroize(&mut self.bits);
    }
}
