use core::fmt;

/// Ring buffer construction error.
///
/// Returned instead of the ring buffer, so a buffer with invalid geometry never exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Capacity is less than [`MIN_CAPACITY`](`crate::position::MIN_CAPACITY`).
    TooSmall(usize),
    /// Capacity is not a power of two.
    NotPowerOfTwo(usize),
    /// Capacity is so large that `2 * capacity` does not fit into `usize`.
    TooLarge(usize),
    /// Item type is zero-sized, so items have no width.
    ZeroWidth,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall(cap) => write!(f, "capacity {} is less than {}", cap, crate::position::MIN_CAPACITY),
            Self::NotPowerOfTwo(cap) => write!(f, "capacity {} is not a power of two", cap),
            Self::TooLarge(cap) => write!(f, "capacity {} is too large for position counters", cap),
            Self::ZeroWidth => f.write_str("item type is zero-sized"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
