//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, velocities in pixels per frame
//! - Seeded RNG only
//! - Wall-clock time enters only as the tick's `now`, for the spawn pause
//! - No rendering or platform dependencies

pub mod ai;
pub mod physics;
pub mod rect;
pub mod round;
pub mod state;
pub mod tick;

pub use ai::{AiProfile, Difficulty};
pub use physics::Contacts;
pub use rect::Rect;
pub use round::RoundState;
pub use state::{Ball, GameEvent, GameRng, Mode, Paddle, Session, Side};
pub use tick::{PaddleCommand, TickInput, tick};
