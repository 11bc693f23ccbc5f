use crate::{
    alias::{Arc, AtomicBool},
    error::ConfigError,
    occupancy,
    position::Layout,
    relay::Relay,
    storage::Storage,
    traits::{Split, SplitRef},
    wrap::{self, Cons, Prod},
};
use core::{fmt, mem, sync::atomic::Ordering};
use crossbeam_utils::CachePadded;
use tracing::debug;

/// Ring buffer that can be shared between threads.
///
/// Positions of the producer and the consumer are never shared directly. Each end keeps its own counter
/// and publishes only its Gray-coded form through a [`Relay`], one relay per direction.
///
/// Note that there is no explicit requirement of `T: Send`. Instead ring buffer will work just fine even with `T: !Send`
/// until you try to send its producer or consumer to another thread.
#[cfg_attr(
    feature = "std",
    doc = r##"
```
use std::thread;
use grayring::{GrayRb, traits::*};

let rb = GrayRb::<i32>::new(256).unwrap();
let (mut prod, mut cons) = rb.split();
thread::spawn(move || {
    prod.try_push(123).unwrap();
})
.join();
thread::spawn(move || {
    assert_eq!(cons.try_pop().unwrap(), 123);
})
.join();
```
"##
)]
pub struct GrayRb<T> {
    layout: Layout,
    storage: Storage<T>,
    /// Producer to consumer.
    write_relay: Relay,
    /// Consumer to producer.
    read_relay: Relay,
    read_held: CachePadded<AtomicBool>,
    write_held: CachePadded<AtomicBool>,
}

impl<T> GrayRb<T> {
    /// Creates a new empty ring buffer.
    ///
    /// `capacity` must be a power of two not less than [`MIN_CAPACITY`](`crate::position::MIN_CAPACITY`),
    /// and `T` must not be zero-sized.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if Self::item_width() == 0 {
            debug!(target: "grayring", capacity, "zero-sized item type rejected");
            return Err(ConfigError::ZeroWidth);
        }
        let layout = Layout::new(capacity).map_err(|err| {
            debug!(target: "grayring", capacity, %err, "invalid capacity rejected");
            err
        })?;
        debug!(
            target: "grayring",
            capacity,
            counter_width = layout.width(),
            item_width = Self::item_width(),
            "ring buffer created"
        );
        Ok(Self {
            layout,
            storage: Storage::new(capacity),
            write_relay: Relay::new(),
            read_relay: Relay::new(),
            read_held: CachePadded::new(AtomicBool::new(false)),
            write_held: CachePadded::new(AtomicBool::new(false)),
        })
    }

    /// Width of item in bits.
    pub const fn item_width() -> usize {
        8 * mem::size_of::<T>()
    }

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[inline]
    pub(crate) fn storage(&self) -> &Storage<T> {
        &self.storage
    }

    #[inline]
    pub(crate) fn write_relay(&self) -> &Relay {
        &self.write_relay
    }
    #[inline]
    pub(crate) fn read_relay(&self) -> &Relay {
        &self.read_relay
    }

    /// Whether read end is held by consumer.
    #[inline]
    pub fn read_is_held(&self) -> bool {
        self.read_held.load(Ordering::Relaxed)
    }
    /// Whether write end is held by producer.
    #[inline]
    pub fn write_is_held(&self) -> bool {
        self.write_held.load(Ordering::Relaxed)
    }

    /// Tell whether read end of the ring buffer is held by consumer or not.
    ///
    /// Returns old value.
    ///
    /// # Safety
    ///
    /// Must not be set to `false` while consumer exists.
    #[inline]
    pub(crate) unsafe fn hold_read(&self, flag: bool) -> bool {
        self.read_held.swap(flag, Ordering::Relaxed)
    }
    /// Tell whether write end of the ring buffer is held by producer or not.
    ///
    /// Returns old value.
    ///
    /// # Safety
    ///
    /// Must not be set to `false` while producer exists.
    #[inline]
    pub(crate) unsafe fn hold_write(&self, flag: bool) -> bool {
        self.write_held.swap(flag, Ordering::Relaxed)
    }

    /// Drops all stored items and brings both ends to the initial empty state.
    pub fn reset(&mut self) {
        let (mut prod, mut cons) = self.split_ref();
        wrap::reset(&mut prod, &mut cons);
    }
}

impl<T> Drop for GrayRb<T> {
    fn drop(&mut self) {
        // Both ends are gone, so relays hold their final positions.
        let read = self.read_relay.observe().decode();
        let write = self.write_relay.observe().decode();
        if !occupancy::is_consistent(&self.layout, read, write) {
            // Corrupted positions do not tell which slots hold items, so they are leaked.
            return;
        }
        let mask = self.layout.counter_mask();
        let mut index = read;
        while index != write {
            unsafe { self.storage.drop_in_place(index & self.layout.index_mask()) };
            index = (index + 1) & mask;
        }
    }
}

impl<T> fmt::Debug for GrayRb<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrayRb")
            .field("capacity", &self.layout.capacity())
            .field("read", &self.read_relay.observe())
            .field("write", &self.write_relay.observe())
            .field("read_held", &self.read_is_held())
            .field("write_held", &self.write_is_held())
            .finish()
    }
}

impl<T> Split for GrayRb<T> {
    type Prod = wrap::Prod<Arc<Self>>;
    type Cons = wrap::Cons<Arc<Self>>;

    fn split(self) -> (Self::Prod, Self::Cons) {
        let rc = Arc::new(self);
        (Prod::new(rc.clone()), Cons::new(rc))
    }
}

impl<T> SplitRef for GrayRb<T> {
    type RefProd<'a> = Prod<&'a Self> where Self: 'a;
    type RefCons<'a> = Cons<&'a Self> where Self: 'a;

    fn split_ref(&mut self) -> (Self::RefProd<'_>, Self::RefCons<'_>) {
        (Prod::new(&*self), Cons::new(&*self))
    }
}
