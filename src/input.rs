//! Per-frame input snapshot
//!
//! The platform layer fills a `FrameInput` each tick; the core never polls a
//! device itself.

use glam::Vec2;

/// Keys the game reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    W,
    S,
}

/// Pointer buttons; only `Primary` drives clicks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Discrete events gathered since the previous frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The environment asked the process to exit
    Quit,
    PointerDown(PointerButton, Vec2),
    PointerUp(PointerButton, Vec2),
}

/// Which game keys are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub w: bool,
    pub s: bool,
}

impl HeldKeys {
    pub fn is_held(&self, key: Key) -> bool {
        match key {
            Key::Up => self.up,
            Key::Down => self.down,
            Key::W => self.w,
            Key::S => self.s,
        }
    }

    pub fn set(&mut self, key: Key, held: bool) {
        match key {
            Key::Up => self.up = held,
            Key::Down => self.down = held,
            Key::W => self.w = held,
            Key::S => self.s = held,
        }
    }
}

/// Everything the core needs to know about the outside world for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Seconds since the clock started
    pub now: f64,
    pub keys: HeldKeys,
    /// Last known pointer position in field coordinates
    pub pointer: Vec2,
    pub events: Vec<InputEvent>,
}

impl FrameInput {
    pub fn at(now: f64) -> Self {
        Self {
            now,
            ..Default::default()
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.events.contains(&InputEvent::Quit)
    }
}

/// Turns pointer press/release pairs into clicks
///
/// A release only counts as a click when the matching press was seen first,
/// possibly in an earlier frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickTracker {
    primary_down: bool,
}

impl ClickTracker {
    /// Whether the primary button is currently held
    pub fn is_down(&self) -> bool {
        self.primary_down
    }

    /// Feed one event; returns the click position for a completed click
    pub fn feed(&mut self, event: &InputEvent) -> Option<Vec2> {
        match *event {
            InputEvent::PointerDown(PointerButton::Primary, _) => {
                self.primary_down = true;
                None
            }
            InputEvent::PointerUp(PointerButton::Primary, pos) => {
                let was_down = self.primary_down;
                self.primary_down = false;
                was_down.then_some(pos)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_then_release_is_click() {
        let mut clicks = ClickTracker::default();
        let pos = Vec2::new(10.0, 20.0);
        assert_eq!(
            clicks.feed(&InputEvent::PointerDown(PointerButton::Primary, pos)),
            None
        );
        assert!(clicks.is_down());
        assert_eq!(
            clicks.feed(&InputEvent::PointerUp(PointerButton::Primary, pos)),
            Some(pos)
        );
        assert!(!clicks.is_down());
    }

    #[test]
    fn test_bare_release_is_not_click() {
        let mut clicks = ClickTracker::default();
        let up = InputEvent::PointerUp(PointerButton::Primary, Vec2::ZERO);
        assert_eq!(clicks.feed(&up), None);
    }

    #[test]
    fn test_secondary_button_ignored() {
        let mut clicks = ClickTracker::default();
        clicks.feed(&InputEvent::PointerDown(PointerButton::Secondary, Vec2::ZERO));
        assert!(!clicks.is_down());
        assert_eq!(
            clicks.feed(&InputEvent::PointerUp(PointerButton::Secondary, Vec2::ZERO)),
            None
        );
    }

    #[test]
    fn test_held_keys_roundtrip_each_key() {
        let mut keys = HeldKeys::default();
        for key in [Key::Up, Key::Down, Key::W, Key::S] {
            assert!(!keys.is_held(key));
            keys.set(key, true);
            assert!(keys.is_held(key));
        }
    }

    #[test]
    fn test_quit_requested() {
        let mut input = FrameInput::at(0.0);
        assert!(!input.quit_requested());
        input.events.push(InputEvent::Quit);
        assert!(input.quit_requested());
    }
}
