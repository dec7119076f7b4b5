//! Stopwatch display logic
//!
//! Everything here is pixel-agnostic; panels plug in through
//! [`DigitDisplay`](crate::traits::DigitDisplay).

pub mod cache;
pub mod digits;
pub mod engine;

pub use cache::DigitCache;
pub use digits::{DigitSlot, Digits};
pub use engine::{Frame, RefreshEngine, RenderReport};
