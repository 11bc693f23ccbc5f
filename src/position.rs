use crate::{error::ConfigError, gray::Gray};
use core::num::NonZeroUsize;

/// Smallest capacity allowed.
///
/// Full detection complements the two most significant bits of a code, so a counter needs at least three bits.
pub const MIN_CAPACITY: usize = 4;

/// Geometry of position counters of a ring buffer with specific capacity.
///
/// Counters are `width` bits wide: low `width - 1` bits address the storage, the highest one is a *wrap bit*
/// which toggles every time the address part passes through zero.
/// So counters are taken modulo `2 * capacity`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    capacity: NonZeroUsize,
    width: u32,
}

impl Layout {
    /// Validates `capacity` and computes counter geometry for it.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity < MIN_CAPACITY {
            return Err(ConfigError::TooSmall(capacity));
        }
        if !capacity.is_power_of_two() {
            return Err(ConfigError::NotPowerOfTwo(capacity));
        }
        if capacity.checked_mul(2).is_none() {
            return Err(ConfigError::TooLarge(capacity));
        }
        let width = capacity.trailing_zeros() + 1;
        match NonZeroUsize::new(capacity) {
            Some(capacity) => Ok(Self { capacity, width }),
            None => Err(ConfigError::TooSmall(0)),
        }
    }

    #[inline]
    pub const fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    /// Number of bits in position counter.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Modulus of position counters.
    ///
    /// Equals to `2 * capacity`.
    #[inline]
    pub const fn modulus(&self) -> usize {
        self.capacity.get() << 1
    }

    #[inline]
    pub const fn counter_mask(&self) -> usize {
        self.modulus() - 1
    }

    #[inline]
    pub const fn index_mask(&self) -> usize {
        self.capacity.get() - 1
    }

    /// Two most significant bits of position code.
    ///
    /// Write position code which is one lap ahead of read position code differs from it exactly in these bits.
    #[inline]
    pub const fn full_mask(&self) -> usize {
        0b11 << (self.width - 2)
    }
}

/// Position counter of one end of the ring buffer.
///
/// Only goes forward, wrapping modulo `2 * capacity`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    value: usize,
    layout: Layout,
}

impl Position {
    pub const fn new(layout: Layout) -> Self {
        Self { value: 0, layout }
    }

    /// Position with specific counter value (taken modulo `2 * capacity`).
    pub const fn with_value(layout: Layout, value: usize) -> Self {
        Self {
            value: value & layout.counter_mask(),
            layout,
        }
    }

    #[inline]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Counter value in range `0..(2 * capacity)`.
    #[inline]
    pub const fn value(&self) -> usize {
        self.value
    }

    /// Storage slot the counter points to.
    #[inline]
    pub const fn index(&self) -> usize {
        self.value & self.layout.index_mask()
    }

    #[inline]
    pub const fn wrap_bit(&self) -> bool {
        (self.value & self.layout.capacity.get()) != 0
    }

    /// Counter value after one more step.
    #[inline]
    pub const fn next_value(&self) -> usize {
        (self.value + 1) & self.layout.counter_mask()
    }

    #[inline]
    pub fn advance(&mut self) {
        self.value = self.next_value();
    }

    #[inline]
    pub const fn gray(&self) -> Gray {
        Gray::encode(self.value)
    }

    #[inline]
    pub fn reset(&mut self) {
        self.value = 0;
    }
}
