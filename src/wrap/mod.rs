mod cons;
mod prod;
mod traits;

pub use cons::{Cons, IntoIter};
pub use prod::Prod;
pub use traits::Wrap;

use crate::{rb::RbRef, traits::Consumer};
use core::ptr;
use tracing::debug;

/// Brings both ends of the ring buffer to the initial empty state.
///
/// Items still stored in the buffer are dropped, then both positions and both relays are set to zero.
/// Exclusive access to both ends guarantees that none of them is in the middle of an operation,
/// so neither end can observe a position of the other end made before the reset.
///
/// Panics if `prod` and `cons` belong to different ring buffers.
pub fn reset<P: RbRef, C: RbRef<Item = P::Item>>(prod: &mut Prod<P>, cons: &mut Cons<C>) {
    assert!(ptr::eq(prod.rb(), cons.rb()), "producer and consumer belong to different ring buffers");
    let dropped = cons.clear();
    unsafe {
        prod.reset();
        cons.reset();
    }
    debug!(target: "grayring", dropped, "ring buffer reset");
}
