use super::Observer;

/// Consumer part of ring buffer.
pub trait Consumer: Observer {
    /// Checks if the ring buffer is empty.
    ///
    /// The flag is re-evaluated against the latest position published by the producer before returning.
    /// `true` may be reported while the producer has already put some items, but never `false` while the buffer is empty.
    fn is_empty(&self) -> bool;

    /// Removes the oldest item without checking for its presence.
    ///
    /// # Safety
    ///
    /// [`Self::is_empty`] must have returned `false` and no items must have been popped since then.
    unsafe fn pop_unchecked(&mut self) -> Self::Item;

    /// Removes the oldest item from the ring buffer and returns it.
    ///
    /// Returns `None` if the ring buffer is empty.
    fn try_pop(&mut self) -> Option<Self::Item> {
        if self.is_empty() {
            None
        } else {
            Some(unsafe { self.pop_unchecked() })
        }
    }

    /// Returns an iterator that removes items one by one from the ring buffer.
    ///
    /// Iterator ends when the buffer becomes empty from the consumer's point of view,
    /// so it may stop before items concurrently pushed by the producer.
    fn pop_iter(&mut self) -> PopIter<'_, Self> {
        PopIter::new(self)
    }

    /// Removes items from the ring buffer and writes them into a slice.
    ///
    /// Returns count of items been removed.
    fn pop_slice(&mut self, elems: &mut [Self::Item]) -> usize
    where
        Self::Item: Copy,
    {
        let mut count = 0;
        for (place, elem) in elems.iter_mut().zip(self.pop_iter()) {
            *place = elem;
            count += 1;
        }
        count
    }

    /// Removes all items from the buffer and drops them.
    ///
    /// *If there is concurring producer activity then the buffer may be not empty after this call.*
    ///
    /// Returns the number of removed items.
    fn clear(&mut self) -> usize {
        self.pop_iter().count()
    }
}

/// An iterator that removes items from the ring buffer.
pub struct PopIter<'a, C: Consumer + ?Sized> {
    target: &'a mut C,
}

impl<'a, C: Consumer + ?Sized> PopIter<'a, C> {
    pub fn new(target: &'a mut C) -> Self {
        Self { target }
    }
}

impl<'a, C: Consumer + ?Sized> Iterator for PopIter<'a, C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.target.try_pop()
    }
}
