//! State -> draw command translation
//!
//! `render` is pure: it reads the app and produces a `DrawList` in field
//! coordinates. Backends turn the list into pixels or terminal cells.

use glam::Vec2;

use crate::app::{App, Screen};
use crate::consts::*;
use crate::sim::{Rect, Session};
use crate::ui::{self, Button, ButtonStyle, ButtonVisual};

/// Font size of the score digits
pub const SCORE_TEXT_SIZE: f32 = 50.0;
/// Base font size of the pulsing title
pub const TITLE_TEXT_SIZE: f32 = 50.0;
/// Font size of button labels
pub const LABEL_TEXT_SIZE: f32 = 36.0;

/// How a text position relates to the rendered string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    TopLeft,
    Center,
}

/// One drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled rectangle
    Rect(Rect),
    /// Filled ellipse inscribed in the rectangle
    Ellipse(Rect),
    Line { from: Vec2, to: Vec2 },
    Text {
        pos: Vec2,
        text: String,
        size: f32,
        anchor: TextAnchor,
    },
    Button {
        rect: Rect,
        label: &'static str,
        style: ButtonStyle,
        visual: ButtonVisual,
    },
}

/// Everything to draw for one frame, back to front
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }
}

/// Build the draw list for the current screen
///
/// `now` only drives the menu title pulse.
pub fn render(app: &App, now: f64) -> DrawList {
    let mut list = DrawList::default();
    match app.screen() {
        Screen::Menu => draw_menu(&mut list, app, now),
        Screen::Playing(session) => draw_session(&mut list, app, session),
    }
    list
}

fn draw_menu(list: &mut DrawList, app: &App, now: f64) {
    let size = (TITLE_TEXT_SIZE * ui::title_scale(now)).floor();
    list.push(DrawCommand::Text {
        pos: Vec2::new(FIELD_WIDTH / 2.0, (FIELD_HEIGHT / 6.0).floor() + (size / 4.0).floor()),
        text: "PONG".to_string(),
        size,
        anchor: TextAnchor::Center,
    });
    for button in ui::menu_buttons() {
        push_button(list, &button, app);
    }
}

fn draw_session(list: &mut DrawList, app: &App, session: &Session) {
    list.push(DrawCommand::Rect(session.left.rect));
    list.push(DrawCommand::Rect(session.right.rect));
    list.push(DrawCommand::Ellipse(session.ball.rect));
    list.push(DrawCommand::Line {
        from: Vec2::new(FIELD_WIDTH / 2.0, 0.0),
        to: Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT),
    });
    list.push(DrawCommand::Text {
        pos: Vec2::new(FIELD_WIDTH / 4.0, 20.0),
        text: session.round.left_score.to_string(),
        size: SCORE_TEXT_SIZE,
        anchor: TextAnchor::TopLeft,
    });
    list.push(DrawCommand::Text {
        pos: Vec2::new(FIELD_WIDTH * 3.0 / 4.0, 20.0),
        text: session.round.right_score.to_string(),
        size: SCORE_TEXT_SIZE,
        anchor: TextAnchor::TopLeft,
    });
    push_button(list, &ui::back_button(), app);
}

fn push_button(list: &mut DrawList, button: &Button, app: &App) {
    list.push(DrawCommand::Button {
        rect: button.rect,
        label: button.label,
        style: button.style,
        visual: button.visual(app.pointer(), app.pointer_down()),
    });
}
