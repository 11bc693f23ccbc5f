use super::traits::Wrap;
use crate::{
    gray::Gray,
    occupancy,
    position::{Layout, Position},
    rb::RbRef,
    relay::Stage,
    traits::{Observer, Producer},
};
use core::{cell::Cell, fmt, mem::ManuallyDrop, ptr};
use tracing::{debug, trace};

/// Write end of the ring buffer.
///
/// Owns the write position counter and the sending half of the producer-to-consumer relay,
/// and takes the consumer position from the receiving stage of the opposite relay.
pub struct Prod<R: RbRef> {
    rb: R,
    write: Position,
    read: Stage,
    full: Cell<bool>,
}

impl<R: RbRef> Prod<R> {
    /// Creates producer of the ring buffer continuing from the last published write position.
    ///
    /// Panics if producer of this ring buffer already exists.
    pub fn new(rb: R) -> Self {
        assert!(!unsafe { rb.rb().hold_write(true) }, "ring buffer producer already exists");
        let layout = *rb.rb().layout();
        // Only producer publishes write position, so the value is exact.
        let write = Position::with_value(layout, rb.rb().write_relay().observe().decode());
        let read = Stage::new(rb.rb().read_relay().observe());
        let this = Self {
            rb,
            write,
            read,
            full: Cell::new(false),
        };
        this.evaluate();
        this
    }

    fn evaluate(&self) {
        let full = occupancy::is_full(self.layout(), self.write.gray(), self.read.seen());
        if self.full.replace(full) != full {
            trace!(
                target: "grayring",
                write = self.write.value(),
                read = ?self.read.seen(),
                blocked = full,
                "producer guard changed"
            );
        }
    }

    /// Takes the latest position published by the consumer and re-evaluates the full flag.
    pub fn sync(&self) {
        if self.read.fetch(self.rb().read_relay()) {
            debug_assert!(
                occupancy::is_consistent(self.layout(), self.read.seen().decode(), self.write.value()),
                "consumer position {:?} is inconsistent with producer position {}",
                self.read.seen(),
                self.write.value(),
            );
            self.evaluate();
        }
    }

    /// Whether the consumer of the ring buffer still exists.
    pub fn is_consumer_alive(&self) -> bool {
        self.rb().read_is_held()
    }

    /// Brings the producer to the initial state without coordination with the consumer.
    ///
    /// Publishes zero write position. Items still stored in the buffer are forgotten, not dropped.
    ///
    /// # Safety
    ///
    /// The consumer must also be reset before any of the ends pushes or pops again.
    /// Otherwise the consumer may read slots which were never written.
    ///
    /// Use [`reset`](`crate::reset`) to reset both ends safely.
    pub unsafe fn reset(&mut self) {
        self.write.reset();
        self.read.reset();
        self.full.set(false);
        self.rb().write_relay().publish(Gray::ZERO);
        debug!(target: "grayring", "producer reset");
    }

    unsafe fn close(&mut self) {
        self.rb().hold_write(false);
    }
}

impl<R: RbRef> Wrap for Prod<R> {
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

impl<R: RbRef> Observer for Prod<R> {
    type Item = R::Item;

    #[inline]
    fn layout(&self) -> &Layout {
        self.write.layout()
    }

    fn read_index(&self) -> usize {
        self.sync();
        self.read.seen().decode()
    }
    #[inline]
    fn write_index(&self) -> usize {
        self.write.value()
    }
}

impl<R: RbRef> Producer for Prod<R> {
    #[inline]
    fn is_full(&self) -> bool {
        // Only consumer activity can clear the flag, so the relay is looked at only while blocked.
        if self.full.get() {
            self.sync();
        }
        self.full.get()
    }

    unsafe fn push_unchecked(&mut self, elem: R::Item) {
        debug_assert!(!self.full.get());
        self.rb().storage().write(self.write.index(), elem);
        self.write.advance();
        self.evaluate();
        self.rb().write_relay().publish(self.write.gray());
    }
}

impl<R: RbRef> Drop for Prod<R> {
    fn drop(&mut self) {
        unsafe { self.close() };
    }
}

impl<R: RbRef> fmt::Debug for Prod<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prod")
            .field("write", &self.write.value())
            .field("read", &self.read.seen())
            .field("full", &self.full.get())
            .finish()
    }
}
