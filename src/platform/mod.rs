//! Platform abstraction layer
//!
//! Handles the outside world for the frame loop:
//! - Time/ticks (`clock`)
//! - Input events and drawing (`terminal`, rasterizing through `canvas`)

pub mod canvas;
pub mod clock;
pub mod terminal;

pub use canvas::{Canvas, Viewport};
pub use clock::{FixedRateClock, FrameClock};
pub use terminal::{Terminal, TerminalGuard};
