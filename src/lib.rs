//! Lock-free SPSC FIFO ring buffer for two independently running contexts.
//!
//! The producer and the consumer never read each other's position counters directly.
//! Each end keeps its own counter and publishes it in Gray-coded form through a [`relay::Relay`],
//! so the opposite end sees either an old committed position or the new one, never a mix of them.
//! Full and empty flags are computed on encoded positions only.
//!
//! Push and pop never block: `try_push` gives the item back when the buffer is full,
//! `try_pop` returns `None` when it is empty.
#![no_std]
#![allow(clippy::type_complexity)]

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

mod alias;
pub mod error;
pub mod gray;
pub mod occupancy;
pub mod position;
pub mod rb;
pub mod relay;
pub mod storage;
pub mod traits;
pub mod wrap;

pub use alias::*;
pub use error::ConfigError;
pub use rb::GrayRb;
pub use wrap::{reset, Cons, Prod};

#[cfg(test)]
mod tests;
