//! Board-agnostic core logic for the Decima stopwatch firmware
//!
//! This crate contains everything that does not touch real hardware:
//!
//! - Shared stopwatch state and its locking discipline
//! - Button debouncing and the input coordinator
//! - Tick bookkeeping
//! - Status LED state machine
//! - Incremental display refresh (digit decomposition and diffing)
//! - Compile-time configuration
//!
//! All of it builds on the host, so `cargo test` exercises the same code the
//! firmware runs.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod debounce;
pub mod display;
pub mod input;
pub mod led;
pub mod state;
pub mod tick;
pub mod traits;
