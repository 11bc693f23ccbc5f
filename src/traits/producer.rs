use super::Observer;

/// Producer part of ring buffer.
pub trait Producer: Observer {
    /// Checks if the ring buffer is full.
    ///
    /// The flag is re-evaluated against the latest position published by the consumer before returning.
    /// `true` may be reported while the consumer has already freed some space, but never `false` while the buffer is full.
    fn is_full(&self) -> bool;

    /// Appends an item without checking for free space.
    ///
    /// # Safety
    ///
    /// [`Self::is_full`] must have returned `false` and no items must have been pushed since then.
    unsafe fn push_unchecked(&mut self, elem: Self::Item);

    /// Appends an item to the ring buffer.
    ///
    /// If buffer is full returns an `Err` containing the item that hasn't been appended.
    fn try_push(&mut self, elem: Self::Item) -> Result<(), Self::Item> {
        if self.is_full() {
            Err(elem)
        } else {
            unsafe { self.push_unchecked(elem) };
            Ok(())
        }
    }

    /// Appends an item to the ring buffer.
    ///
    /// Returns `false` if the buffer is full. In that case the item is dropped.
    fn push(&mut self, elem: Self::Item) -> bool {
        self.try_push(elem).is_ok()
    }

    /// Appends items from an iterator to the ring buffer.
    /// Elements that haven't been added to the ring buffer remain in the iterator.
    ///
    /// Returns count of items been appended to the ring buffer.
    ///
    /// *Each item is committed to the consumer as soon as it is appended.*
    fn push_iter<I: Iterator<Item = Self::Item>>(&mut self, mut iter: I) -> usize {
        let mut count = 0;
        while !self.is_full() {
            match iter.next() {
                Some(elem) => unsafe { self.push_unchecked(elem) },
                None => break,
            }
            count += 1;
        }
        count
    }

    /// Appends items from slice to the ring buffer.
    ///
    /// Returns count of items been appended to the ring buffer.
    fn push_slice(&mut self, elems: &[Self::Item]) -> usize
    where
        Self::Item: Copy,
    {
        self.push_iter(elems.iter().copied())
    }
}
