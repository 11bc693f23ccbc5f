use alloc::boxed::Box;
use core::{cell::UnsafeCell, mem::MaybeUninit, ptr};

/// Fixed-size array of item slots shared between producer and consumer.
///
/// The storage itself does not know which slots are initialized, this is tracked by position counters.
pub struct Storage<T> {
    slots: Box<[UnsafeCell<MaybeUninit<T>>]>,
}

unsafe impl<T: Send> Sync for Storage<T> {}

impl<T> Storage<T> {
    /// Allocates `len` uninitialized slots.
    pub fn new(len: usize) -> Self {
        Self {
            slots: (0..len).map(|_| UnsafeCell::new(MaybeUninit::uninit())).collect(),
        }
    }

    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn slot(&self, index: usize) -> *mut MaybeUninit<T> {
        debug_assert!(index < self.len());
        unsafe { self.slots.get_unchecked(index) }.get()
    }

    /// Puts an item into the slot.
    ///
    /// # Safety
    ///
    /// Slot must be uninitialized and must not be accessed by anyone else at the same time.
    #[inline]
    pub unsafe fn write(&self, index: usize, elem: T) {
        (*self.slot(index)).write(elem);
    }

    /// Moves an item out of the slot leaving the slot uninitialized.
    ///
    /// # Safety
    ///
    /// Slot must be initialized and must not be accessed by anyone else at the same time.
    #[inline]
    pub unsafe fn read(&self, index: usize) -> T {
        (*self.slot(index)).assume_init_read()
    }

    /// Drops an item in the slot.
    ///
    /// # Safety
    ///
    /// Same as for [`Self::read`].
    pub unsafe fn drop_in_place(&self, index: usize) {
        ptr::drop_in_place((*self.slot(index)).as_mut_ptr());
    }
}
