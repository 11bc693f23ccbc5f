//! Full and empty detection on encoded positions.
//!
//! Each end compares the code of its own counter (always exact) with the code it has taken from the opposite end
//! (possibly stale). Staleness only makes the flags conservative: the producer may see the buffer full
//! while the consumer has already freed a slot, and the consumer may see it empty while the producer
//! has already put an item, but never the other way round.

use crate::{gray::Gray, position::Layout};

/// Whether write position `write` is exactly one lap ahead of read position `read`.
///
/// One lap ahead means equal address bits and opposite wrap bits. In encoded form that is the same code
/// with two most significant bits complemented.
#[inline]
pub fn is_full(layout: &Layout, write: Gray, read: Gray) -> bool {
    write == read.flip(layout.full_mask())
}

/// Whether read position `read` has reached write position `write`.
#[inline]
pub fn is_empty(read: Gray, write: Gray) -> bool {
    read == write
}

/// Number of items between `read` and `write` counter values.
#[inline]
pub fn occupied(layout: &Layout, read: usize, write: usize) -> usize {
    write.wrapping_sub(read) & layout.counter_mask()
}

/// Number of vacant places between `read` and `write` counter values.
#[inline]
pub fn vacant(layout: &Layout, read: usize, write: usize) -> usize {
    layout.capacity().get().saturating_sub(occupied(layout, read, write))
}

/// Whether counter values can belong to a valid ring buffer state.
///
/// The write counter must never be more than one lap ahead of the read counter.
#[inline]
pub fn is_consistent(layout: &Layout, read: usize, write: usize) -> bool {
    occupied(layout, read, write) <= layout.capacity().get()
}
