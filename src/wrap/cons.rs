use super::traits::Wrap;
use crate::{
    gray::Gray,
    occupancy,
    position::{Layout, Position},
    rb::RbRef,
    relay::Stage,
    traits::{Consumer, Observer},
};
use core::{cell::Cell, fmt, mem::ManuallyDrop, ptr};
use tracing::{debug, trace};

/// Read end of the ring buffer.
///
/// Owns the read position counter and the sending half of the consumer-to-producer relay,
/// and takes the producer position from the receiving stage of the opposite relay.
pub struct Cons<R: RbRef> {
    rb: R,
    read: Position,
    write: Stage,
    empty: Cell<bool>,
}

impl<R: RbRef> Cons<R> {
    /// Creates consumer of the ring buffer continuing from the last published read position.
    ///
    /// Panics if consumer of this ring buffer already exists.
    pub fn new(rb: R) -> Self {
        assert!(!unsafe { rb.rb().hold_read(true) }, "ring buffer consumer already exists");
        let layout = *rb.rb().layout();
        let read = Position::with_value(layout, rb.rb().read_relay().observe().decode());
        let write = Stage::new(rb.rb().write_relay().observe());
        let this = Self {
            rb,
            read,
            write,
            empty: Cell::new(true),
        };
        this.evaluate();
        this
    }

    fn evaluate(&self) {
        let empty = occupancy::is_empty(self.read.gray(), self.write.seen());
        if self.empty.replace(empty) != empty {
            trace!(
                target: "grayring",
                read = self.read.value(),
                write = ?self.write.seen(),
                blocked = empty,
                "consumer guard changed"
            );
        }
    }

    /// Takes the latest position published by the producer and re-evaluates the empty flag.
    pub fn sync(&self) {
        if self.write.fetch(self.rb().write_relay()) {
            debug_assert!(
                occupancy::is_consistent(self.layout(), self.read.value(), self.write.seen().decode()),
                "producer position {:?} is inconsistent with consumer position {}",
                self.write.seen(),
                self.read.value(),
            );
            self.evaluate();
        }
    }

    /// Whether the producer of the ring buffer still exists.
    pub fn is_producer_alive(&self) -> bool {
        self.rb().write_is_held()
    }

    /// Brings the consumer to the initial state without coordination with the producer.
    ///
    /// Publishes zero read position. Items still stored in the buffer are forgotten, not dropped.
    ///
    /// # Safety
    ///
    /// The producer must also be reset before any of the ends pushes or pops again.
    /// Otherwise the producer may overwrite slots which were never read.
    ///
    /// Use [`reset`](`crate::reset`) to reset both ends safely.
    pub unsafe fn reset(&mut self) {
        self.read.reset();
        self.write.reset();
        self.empty.set(true);
        self.rb().read_relay().publish(Gray::ZERO);
        debug!(target: "grayring", "consumer reset");
    }

    unsafe fn close(&mut self) {
        self.rb().hold_read(false);
    }
}

impl<R: RbRef> Wrap for Cons<R> {
    type RbRef = R;

    fn rb_ref(&self) -> &R {
        &self.rb
    }
    fn into_rb_ref(mut self) -> R {
        unsafe {
            self.close();
            let this = ManuallyDrop::new(self);
            ptr::read(&this.rb)
        }
    }
}

impl<R: RbRef> Observer for Cons<R> {
    type Item = R::Item;

    #[inline]
    fn layout(&self) -> &Layout {
        self.read.layout()
    }

    #[inline]
    fn read_index(&self) -> usize {
        self.read.value()
    }
    fn write_index(&self) -> usize {
        self.sync();
        self.write.seen().decode()
    }
}

impl<R: RbRef> Consumer for Cons<R> {
    #[inline]
    fn is_empty(&self) -> bool {
        if self.empty.get() {
            self.sync();
        }
        self.empty.get()
    }

    unsafe fn pop_unchecked(&mut self) -> R::Item {
        debug_assert!(!self.empty.get());
        let elem = self.rb().storage().read(self.read.index());
        self.read.advance();
        self.evaluate();
        self.rb().read_relay().publish(self.read.gray());
        elem
    }
}

impl<R: RbRef> Drop for Cons<R> {
    fn drop(&mut self) {
        unsafe { self.close() };
    }
}

impl<R: RbRef> IntoIterator for Cons<R> {
    type Item = R::Item;
    type IntoIter = IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// An iterator that moves items out of the ring buffer through its consumer.
pub struct IntoIter<R: RbRef>(Cons<R>);

impl<R: RbRef> IntoIter<R> {
    pub fn into_inner(self) -> Cons<R> {
        self.0
    }
}

impl<R: RbRef> Iterator for IntoIter<R> {
    type Item = R::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.try_pop()
    }
}

impl<R: RbRef> fmt::Debug for Cons<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cons")
            .field("read", &self.read.value())
            .field("write", &self.write.seen())
            .field("empty", &self.empty.get())
            .finish()
    }
}
