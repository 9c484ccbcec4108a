//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads goes through `Tuning`, so a
//! session can be replayed with different numbers without touching code. The
//! field size is fixed and deliberately absent here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Difficulty;

/// Errors produced when loading tuning overrides
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("tuning value `{field}` must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("tuning value `{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("{difficulty:?} AI would move at {speed} px/frame; raise `paddle_speed`")]
    AiTooSlow { difficulty: Difficulty, speed: f32 },
}

/// Gameplay constants; velocities are in pixels per frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Human paddle speed, also the base for AI difficulty speeds
    pub paddle_speed: f32,
    /// Per-axis launch speed of a new ball
    pub ball_speed: f32,
    /// Seconds a spawned ball stays paused
    pub pause_secs: f64,
    /// Magnitude added to each velocity component per hit past the threshold
    pub speed_increment: f32,
    /// Hit count at which escalation starts
    pub speedup_hits: u32,
    /// AI tracking dead-zone half-width
    pub ai_dead_zone: f32,
    /// AI mistake displacement
    pub ai_nudge: f32,
    /// Ticks per second of the frame loop
    pub frame_rate: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            paddle_speed: PADDLE_SPEED,
            ball_speed: BALL_SPEED,
            pause_secs: BALL_PAUSE_SECS,
            speed_increment: SPEED_INCREMENT,
            speedup_hits: SPEEDUP_HITS,
            ai_dead_zone: AI_DEAD_ZONE,
            ai_nudge: AI_NUDGE,
            frame_rate: FRAME_RATE,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override; missing fields keep defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would freeze or invert the game, including
    /// difficulty speeds that would stop the AI or push it away from the ball
    pub fn validate(&self) -> Result<(), TuningError> {
        let checks: [(&'static str, f64); 4] = [
            ("paddle_speed", self.paddle_speed as f64),
            ("ball_speed", self.ball_speed as f64),
            ("speedup_hits", self.speedup_hits as f64),
            ("frame_rate", self.frame_rate as f64),
        ];
        for (field, value) in checks {
            if value <= 0.0 {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        // A shrinking ball would eventually read as paused mid-rally
        let non_negative: [(&'static str, f64); 4] = [
            ("speed_increment", self.speed_increment as f64),
            ("pause_secs", self.pause_secs),
            ("ai_dead_zone", self.ai_dead_zone as f64),
            ("ai_nudge", self.ai_nudge as f64),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(TuningError::Negative { field, value });
            }
        }

        for difficulty in Difficulty::ALL {
            let speed = difficulty.profile(self).speed;
            if speed <= 0.0 {
                return Err(TuningError::AiTooSlow { difficulty, speed });
            }
        }
        Ok(())
    }

    /// Duration of one frame in seconds
    pub fn frame_secs(&self) -> f64 {
        1.0 / self.frame_rate as f64
    }
}
