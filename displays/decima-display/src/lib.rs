//! Stopwatch face rendering for Decima
//!
//! This crate provides:
//! - `DigitPanel`: a row of seven-segment digit cells
//! - `StopwatchFace`: the `mm:ss.d` arrangement of three panels and the
//!   colon, implementing `decima_core::traits::DigitDisplay`
//! - `Ili9341`: a direct SPI driver implementing `embedded_graphics::DrawTarget`
//!
//! # Architecture
//!
//! ```text
//! RefreshEngine (decima-core)
//!     │ DigitDisplay
//!     ▼
//! StopwatchFace ──► DigitPanel ──► DrawTarget<Color = Rgb565>
//!                                      │
//!                                      ▼
//!                                   Ili9341 (SPI)
//! ```
//!
//! Everything above the driver is generic over the draw target, so the same
//! face renders into a mock target on the host.

#![no_std]

pub mod face;
pub mod ili9341;
pub mod layout;
pub mod panel;
pub mod segments;

pub use face::{FaceTarget, StopwatchFace};
pub use ili9341::Ili9341;
pub use layout::{FaceLayout, LAYOUT};
pub use panel::{DigitPanel, DrawError, PanelColors, PanelError};
