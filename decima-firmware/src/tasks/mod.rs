//! Embassy async tasks
//!
//! Each task runs independently and coordinates only through the locks in
//! [`crate::resources`].

pub mod display;
pub mod input;
pub mod led;
pub mod tick;

pub use display::display_task;
pub use input::input_task;
pub use led::led_task;
pub use tick::tick_task;
