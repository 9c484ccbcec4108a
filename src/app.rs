//! Menu / Playing state machine
//!
//! `App` owns the only long-lived state. A `Session` exists exactly while the
//! screen is `Playing`; leaving to the menu drops it, so every new game starts
//! from 0-0.

use glam::Vec2;

use crate::input::{ClickTracker, FrameInput, HeldKeys, Key};
use crate::sim::{GameEvent, GameRng, Mode, PaddleCommand, Session, TickInput, tick};
use crate::tuning::Tuning;
use crate::ui::{self, ButtonAction};

/// Top-level screen
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Menu,
    Playing(Session),
}

/// Whether the frame loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The whole game: screen, click tracking, RNG and tuning
pub struct App {
    screen: Screen,
    clicks: ClickTracker,
    pointer: Vec2,
    rng: GameRng,
    tuning: Tuning,
    /// Events produced by the last Playing tick
    last_events: Vec<GameEvent>,
}

impl App {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        log::info!("Game initialized with seed: {}", seed);
        Self {
            screen: Screen::Menu,
            clicks: ClickTracker::default(),
            pointer: Vec2::ZERO,
            rng: GameRng::new(seed),
            tuning,
            last_events: Vec::new(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.screen {
            Screen::Playing(session) => Some(session),
            Screen::Menu => None,
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Last known pointer position
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Whether the primary pointer button is held
    pub fn pointer_down(&self) -> bool {
        self.clicks.is_down()
    }

    pub fn last_events(&self) -> &[GameEvent] {
        &self.last_events
    }

    /// Process one frame of input
    ///
    /// Clicks are resolved first: a click that changes screen takes effect
    /// before the simulation runs, so a new session's first tick is this one.
    pub fn update(&mut self, input: &FrameInput) -> Flow {
        self.last_events.clear();
        self.pointer = input.pointer;

        if input.quit_requested() {
            log::info!("Quit requested");
            return Flow::Quit;
        }

        let mut click = None;
        for event in &input.events {
            if let Some(pos) = self.clicks.feed(event) {
                click = Some(pos);
            }
        }

        if let Some(pos) = click {
            self.handle_click(pos, input.now);
        }

        if let Screen::Playing(session) = &mut self.screen {
            let tick_input = tick_input(input.now, &input.keys);
            self.last_events = tick(session, &tick_input, &self.tuning, &mut self.rng);
        }

        Flow::Continue
    }

    fn handle_click(&mut self, pos: Vec2, now: f64) {
        let action = match &self.screen {
            Screen::Menu => ui::hit_test(&ui::menu_buttons(), pos),
            Screen::Playing(_) => ui::hit_test(&[ui::back_button()], pos),
        };
        match action {
            Some(ButtonAction::Start(mode)) => self.start(mode, now),
            Some(ButtonAction::BackToMenu) => self.back_to_menu(),
            None => {}
        }
    }

    /// Menu -> Playing with a fresh session
    fn start(&mut self, mode: Mode, now: f64) {
        if matches!(self.screen, Screen::Playing(_)) {
            return;
        }
        log::info!("Starting game: {:?}", mode);
        self.screen = Screen::Playing(Session::new(mode, now));
    }

    /// Playing -> Menu, discarding the session
    fn back_to_menu(&mut self) {
        if let Screen::Playing(session) = &self.screen {
            log::info!(
                "Back to menu (final score {} - {})",
                session.round.left_score,
                session.round.right_score
            );
        }
        self.screen = Screen::Menu;
    }
}

/// W/S drive the left paddle, Up/Down the right
fn tick_input(now: f64, keys: &HeldKeys) -> TickInput {
    TickInput {
        now,
        left: PaddleCommand {
            up: keys.is_held(Key::W),
            down: keys.is_held(Key::S),
        },
        right: PaddleCommand {
            up: keys.is_held(Key::Up),
            down: keys.is_held(Key::Down),
        },
    }
}
