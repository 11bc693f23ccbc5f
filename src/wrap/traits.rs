use crate::rb::{GrayRb, RbRef};

/// Ring buffer end that contains reference to the ring buffer inside.
pub trait Wrap {
    /// Ring buffer reference type.
    type RbRef: RbRef;

    /// Underlying ring buffer.
    fn rb(&self) -> &GrayRb<<Self::RbRef as RbRef>::Item> {
        self.rb_ref().rb()
    }
    /// Underlying ring buffer reference.
    fn rb_ref(&self) -> &Self::RbRef;
    /// Release the end and return underlying ring buffer reference.
    fn into_rb_ref(self) -> Self::RbRef;
}
