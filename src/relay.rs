//! Hand-off of encoded position counters between the ring buffer ends.
//!
//! Each direction has a [`Relay`], a single shared word written only by its owning end,
//! and a [`Stage`] held by the opposite end, which keeps the last value taken from the relay.
//!
//! The owning end publishes the code of its counter only after the counter is fully updated,
//! and the whole code is stored with one atomic store. So the opposite end can only ever see some code
//! that was really published, never a mix of bits from two different updates.
//! The value it sees may lag behind, but never runs ahead of the owning end.

use crate::{alias::AtomicUsize, gray::Gray};
use core::{cell::Cell, sync::atomic::Ordering};
use crossbeam_utils::CachePadded;

/// Shared cell carrying encoded position from one end to another.
pub struct Relay {
    visible: CachePadded<AtomicUsize>,
}

impl Relay {
    pub const fn new() -> Self {
        Self {
            visible: CachePadded::new(AtomicUsize::new(0)),
        }
    }

    /// Makes `code` visible for the opposite end.
    ///
    /// All memory writes made before this call become visible to the end that observes `code`.
    #[inline]
    pub fn publish(&self, code: Gray) {
        self.visible.store(code.bits(), Ordering::Release);
    }

    /// The most recent published code.
    #[inline]
    pub fn observe(&self) -> Gray {
        Gray::from_bits(self.visible.load(Ordering::Acquire))
    }
}

impl Default for Relay {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving stage of a relay.
///
/// Opposite end state is only ever taken from here, so it changes only when [`Self::fetch`] is called.
pub struct Stage {
    seen: Cell<Gray>,
}

impl Stage {
    pub const fn new(code: Gray) -> Self {
        Self { seen: Cell::new(code) }
    }

    /// Last code taken from the relay.
    #[inline]
    pub fn seen(&self) -> Gray {
        self.seen.get()
    }

    /// Takes the most recent code from `relay`.
    ///
    /// Returns `true` if the code has changed.
    #[inline]
    pub fn fetch(&self, relay: &Relay) -> bool {
        let code = relay.observe();
        self.seen.replace(code) != code
    }

    pub fn reset(&self) {
        self.seen.set(Gray::ZERO);
    }
}
