mod shared;
mod traits;

pub use shared::GrayRb;
pub use traits::RbRef;
