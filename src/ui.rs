//! Menu and in-game buttons
//!
//! Layout is fixed to the 800x600 field. The core decides which button is
//! hovered or pressed; the backend only paints.

use glam::Vec2;

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::sim::{Difficulty, Mode, Rect};

/// What a button does when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Start(Mode),
    BackToMenu,
}

/// Colour family of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Large grey mode buttons
    Primary,
    /// Darker difficulty and navigation buttons
    Secondary,
}

/// Interaction state used to pick the fill colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVisual {
    Idle,
    Hover,
    Pressed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: &'static str,
    pub style: ButtonStyle,
    pub action: ButtonAction,
}

impl Button {
    /// Visual state for the given pointer position and primary-button state
    pub fn visual(&self, pointer: Vec2, pointer_down: bool) -> ButtonVisual {
        match (self.rect.contains(pointer), pointer_down) {
            (true, true) => ButtonVisual::Pressed,
            (true, false) => ButtonVisual::Hover,
            (false, _) => ButtonVisual::Idle,
        }
    }
}

/// Buttons on the main menu, top to bottom
pub fn menu_buttons() -> Vec<Button> {
    let cx = FIELD_WIDTH / 2.0;
    let top = (FIELD_HEIGHT / 3.0).floor();
    let mut buttons = vec![
        Button {
            rect: Rect::new(cx - 100.0, top, 200.0, 50.0),
            label: "AI Mode",
            style: ButtonStyle::Primary,
            action: ButtonAction::Start(Mode::Ai(Difficulty::Medium)),
        },
        Button {
            rect: Rect::new(cx - 100.0, top + 80.0, 200.0, 50.0),
            label: "Human Mode",
            style: ButtonStyle::Primary,
            action: ButtonAction::Start(Mode::Human),
        },
    ];
    let offsets = [-220.0, -60.0, 100.0];
    for (difficulty, dx) in Difficulty::ALL.into_iter().zip(offsets) {
        buttons.push(Button {
            rect: Rect::new(cx + dx, top + 160.0, 120.0, 40.0),
            label: difficulty.label(),
            style: ButtonStyle::Secondary,
            action: ButtonAction::Start(Mode::Ai(difficulty)),
        });
    }
    buttons
}

/// The in-game "Back to Menu" button
pub fn back_button() -> Button {
    Button {
        rect: Rect::new(10.0, 10.0, 150.0, 40.0),
        label: "Back to Menu",
        style: ButtonStyle::Secondary,
        action: ButtonAction::BackToMenu,
    }
}

/// First button under `pos`, if any
pub fn hit_test(buttons: &[Button], pos: Vec2) -> Option<ButtonAction> {
    buttons
        .iter()
        .find(|b| b.rect.contains(pos))
        .map(|b| b.action)
}

/// Title pulse, one beat every three seconds
pub fn title_scale(elapsed_secs: f64) -> f32 {
    1.0 + 0.05 * (elapsed_secs / 3.0 * std::f64::consts::TAU).sin() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center_of(label: &str) -> Vec2 {
        menu_buttons()
            .into_iter()
            .find(|b| b.label == label)
            .map(|b| b.rect.center())
            .unwrap()
    }

    #[test]
    fn test_menu_layout() {
        let buttons = menu_buttons();
        assert_eq!(buttons.len(), 5);
        assert_eq!(buttons[0].rect, Rect::new(300.0, 200.0, 200.0, 50.0));
        assert_eq!(buttons[2].rect, Rect::new(180.0, 360.0, 120.0, 40.0));
        assert_eq!(buttons[4].rect, Rect::new(500.0, 360.0, 120.0, 40.0));
    }

    #[test]
    fn test_hit_test_maps_buttons_to_modes() {
        let buttons = menu_buttons();
        assert_eq!(
            hit_test(&buttons, center_of("Easy")),
            Some(ButtonAction::Start(Mode::Ai(Difficulty::Easy)))
        );
        assert_eq!(
            hit_test(&buttons, center_of("AI Mode")),
            Some(ButtonAction::Start(Mode::Ai(Difficulty::Medium)))
        );
        assert_eq!(
            hit_test(&buttons, center_of("Human Mode")),
            Some(ButtonAction::Start(Mode::Human))
        );
        assert_eq!(hit_test(&buttons, Vec2::new(5.0, 5.0)), None);
    }

    #[test]
    fn test_visual_states() {
        let back = back_button();
        let inside = back.rect.center();
        let outside = Vec2::new(400.0, 400.0);
        assert_eq!(back.visual(inside, false), ButtonVisual::Hover);
        assert_eq!(back.visual(inside, true), ButtonVisual::Pressed);
        assert_eq!(back.visual(outside, true), ButtonVisual::Idle);
        assert_eq!(back.visual(outside, false), ButtonVisual::Idle);
    }

    #[test]
    fn test_title_scale_bounds() {
        assert!((title_scale(0.0) - 1.0).abs() < 1e-6);
        assert!((title_scale(0.75) - 1.05).abs() < 1e-4);
        for i in 0..100 {
            let s = title_scale(i as f64 * 0.1);
            assert!((0.949..=1.051).contains(&s));
        }
    }
}
