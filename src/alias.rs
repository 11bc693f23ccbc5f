use crate::{
    rb::GrayRb,
    wrap::{Cons, Prod},
};

#[cfg(not(feature = "portable-atomic"))]
pub use alloc::sync::Arc;
#[cfg(feature = "portable-atomic")]
pub use portable_atomic_util::Arc;

#[cfg(not(feature = "portable-atomic"))]
pub(crate) use core::sync::atomic::{AtomicBool, AtomicUsize};
#[cfg(feature = "portable-atomic")]
pub(crate) use portable_atomic::{AtomicBool, AtomicUsize};

/// Producer of heap-allocated ring buffer shared via [`Arc`].
pub type HeapProd<T> = Prod<Arc<GrayRb<T>>>;

/// Consumer of heap-allocated ring buffer shared via [`Arc`].
pub type HeapCons<T> = Cons<Arc<GrayRb<T>>>;

/// Producer borrowing the ring buffer.
pub type RefProd<'a, T> = Prod<&'a GrayRb<T>>;

/// Consumer borrowing the ring buffer.
pub type RefCons<'a, T> = Cons<&'a GrayRb<T>>;
