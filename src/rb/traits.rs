use super::GrayRb;
use crate::alias::Arc;

/// Reference to the ring buffer held by its producer or consumer.
///
/// # Safety
///
/// [`Self::rb`] must return the same ring buffer during the whole lifetime of the reference.
pub unsafe trait RbRef {
    type Item;

    fn rb(&self) -> &GrayRb<Self::Item>;
}

unsafe impl<'a, T> RbRef for &'a GrayRb<T> {
    type Item = T;

    #[inline]
    fn rb(&self) -> &GrayRb<T> {
        self
    }
}

unsafe impl<T> RbRef for Arc<GrayRb<T>> {
    type Item = T;

    #[inline]
    fn rb(&self) -> &GrayRb<T> {
        self
    }
}
