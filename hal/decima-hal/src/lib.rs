//! Decima Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the stopwatch logic
//! is written against. Chip-specific crates implement them, and host tests
//! implement them with plain mock pins.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  decima-core / decima-firmware          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  decima-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ decima-hal-   │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - raw level reads for the buttons
//! - [`gpio::OutputPin`] - the status LEDs

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

pub use gpio::{InputPin, OutputPin, PinConfig, PinMode, Pull};
