use crate::{occupancy, position::Layout};
use core::num::NonZeroUsize;

/// Ring buffer end observer.
///
/// Each end sees its own position exactly and the opposite one only through the relay,
/// so values returned here may become irrelevant at any time because of concurring activity of the opposite end.
pub trait Observer {
    type Item: Sized;

    /// Geometry of position counters.
    fn layout(&self) -> &Layout;

    /// Capacity of the ring buffer.
    ///
    /// It is constant during the whole ring buffer lifetime.
    #[inline]
    fn capacity(&self) -> NonZeroUsize {
        self.layout().capacity()
    }

    /// Read position counter as seen by this end.
    ///
    /// Value is in range `0..(2 * capacity)`.
    fn read_index(&self) -> usize;
    /// Write position counter as seen by this end.
    ///
    /// Value is in range `0..(2 * capacity)`.
    fn write_index(&self) -> usize;

    /// The number of items stored in the buffer.
    ///
    /// *Producer may see more items than actually stored, consumer may see less.*
    fn occupied_len(&self) -> usize {
        occupancy::occupied(self.layout(), self.read_index(), self.write_index())
    }

    /// The number of remaining free places in the buffer.
    ///
    /// *Producer may see less free places than actually exist, consumer may see more.*
    fn vacant_len(&self) -> usize {
        occupancy::vacant(self.layout(), self.read_index(), self.write_index())
    }
}
