//! Paddle Pong - classic two-paddle Pong with a reactive AI opponent
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, scoring, AI)
//! - `app`: Menu/Playing state machine driving the simulation
//! - `input`: Per-frame input snapshot and click tracking
//! - `ui`: Button layout and hover/pressed state
//! - `render`: Pure state -> draw command translation
//! - `platform`: Frame clock and terminal backend
//! - `tuning`: Data-driven game balance

pub mod app;
pub mod input;
pub mod platform;
pub mod render;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use app::{App, Flow, Screen};
pub use input::{FrameInput, HeldKeys, InputEvent, Key, PointerButton};
pub use render::{DrawCommand, DrawList, render};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Play field dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle size and horizontal inset from the field edge
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_INSET: f32 = 50.0;
    /// Human paddle speed (pixels per frame)
    pub const PADDLE_SPEED: f32 = 7.0;

    /// Ball edge length (the ball is a square drawn as an ellipse)
    pub const BALL_SIZE: f32 = 15.0;
    /// Launch speed per axis (pixels per frame)
    pub const BALL_SPEED: f32 = 4.0;
    /// Seconds a freshly spawned ball waits before launching
    pub const BALL_PAUSE_SECS: f64 = 1.5;
    /// Added to each velocity component per hit once the threshold is reached
    pub const SPEED_INCREMENT: f32 = 0.5;
    /// Paddle hits since the last point before speed escalation kicks in
    pub const SPEEDUP_HITS: u32 = 10;

    /// AI tracking tolerance around the ball centre
    pub const AI_DEAD_ZONE: f32 = 10.0;
    /// Size of a random AI twitch
    pub const AI_NUDGE: f32 = 10.0;

    /// Fixed frame rate; all velocities are per frame
    pub const FRAME_RATE: u32 = 60;
}
