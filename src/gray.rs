//! Single-bit-change encoding of position counters.
//!
//! Incrementing a counter changes exactly one bit of its encoded form, including the step that wraps
//! the counter back to zero (as long as the counter width is a whole number of bits).
//! Encoded values are compared directly, they never have to be decoded to decide whether the buffer is full or empty.

use core::fmt;

/// Encodes binary counter value.
#[inline]
pub const fn encode(value: usize) -> usize {
    value ^ (value >> 1)
}

/// Inverse of [`encode`].
#[inline]
pub const fn decode(code: usize) -> usize {
    let mut value = code;
    let mut shift = 1;
    while shift < usize::BITS {
        value ^= value >> shift;
        shift <<= 1;
    }
    value
}

/// Encoded position counter.
///
/// Equality of two codes implies equality of the counters they were made from.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Gray(usize);

impl Gray {
    /// Code of the zero counter.
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn encode(value: usize) -> Self {
        Self(encode(value))
    }

    /// Wraps raw code bits.
    #[inline]
    pub const fn from_bits(bits: usize) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> usize {
        self.0
    }

    /// Counter value this code was made from.
    #[inline]
    pub const fn decode(self) -> usize {
        decode(self.0)
    }

    /// Complements bits selected by `mask`.
    #[inline]
    pub const fn flip(self, mask: usize) -> Self {
        Self(self.0 ^ mask)
    }
}

impl fmt::Debug for Gray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gray({:#b})", self.0)
    }
}
