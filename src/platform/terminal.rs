//! Terminal backend built on crossterm
//!
//! Owns raw mode, the alternate screen and mouse capture for its lifetime,
//! translates terminal events into `FrameInput`, and paints `DrawList`s.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    self, DisableLineWrap, EnableLineWrap, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use glam::Vec2;

use super::canvas::{Canvas, Viewport};
use crate::input::{FrameInput, HeldKeys, InputEvent, Key, PointerButton};
use crate::render::DrawList;

/// How long a key counts as held after its first press when the terminal
/// cannot report releases; covers the gap before auto-repeat starts
const HOLD_WINDOW: Duration = Duration::from_millis(550);
/// Hold window once a key is auto-repeating; a few repeat intervals
const REPEAT_WINDOW: Duration = Duration::from_millis(80);

/// Restores the terminal when dropped, including on early returns and panics
pub struct TerminalGuard {
    enhanced_keys: bool,
}

impl TerminalGuard {
    pub fn enter(out: &mut Stdout) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            out,
            EnterAlternateScreen,
            Hide,
            DisableLineWrap,
            EnableMouseCapture
        )?;
        let enhanced_keys = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if enhanced_keys {
            execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        log::info!("Terminal ready (key release events: {})", enhanced_keys);
        Ok(Self { enhanced_keys })
    }

    /// Whether the terminal reports key releases
    pub fn enhanced_keys(&self) -> bool {
        self.enhanced_keys
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        if self.enhanced_keys {
            let _ = execute!(out, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(
            out,
            DisableMouseCapture,
            EnableLineWrap,
            Show,
            ResetColor,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Keeps held-key state across frames
///
/// Without release events a key is held until its window runs out. The first
/// press gets the initial window; once the key auto-repeats the window drops
/// to `REPEAT_WINDOW`, and the observed repeat delay shortens the initial
/// window for later taps.
#[derive(Debug)]
pub struct KeyState {
    enhanced: bool,
    held: HeldKeys,
    expires: [Option<Instant>; 4],
    pressed_at: [Option<Instant>; 4],
    repeating: [bool; 4],
    initial_window: Duration,
}

impl KeyState {
    pub fn new(enhanced: bool) -> Self {
        Self {
            enhanced,
            held: HeldKeys::default(),
            expires: [None; 4],
            pressed_at: [None; 4],
            repeating: [false; 4],
            initial_window: HOLD_WINDOW,
        }
    }

    fn slot(key: Key) -> usize {
        match key {
            Key::Up => 0,
            Key::Down => 1,
            Key::W => 2,
            Key::S => 3,
        }
    }

    /// Press or auto-repeat of `key` at `at`
    pub fn press(&mut self, key: Key, at: Instant) {
        let slot = Self::slot(key);
        if self.enhanced {
            self.held.set(key, true);
            return;
        }

        let live = self.expires[slot].is_some_and(|expiry| at < expiry);
        if live {
            if !self.repeating[slot] {
                self.repeating[slot] = true;
                if let Some(first) = self.pressed_at[slot] {
                    let delay = at.saturating_duration_since(first);
                    self.initial_window = (delay + REPEAT_WINDOW).min(HOLD_WINDOW);
                    log::debug!("Key repeat delay {:?}", delay);
                }
            }
            self.expires[slot] = Some(at + REPEAT_WINDOW);
        } else {
            self.held.set(key, true);
            self.pressed_at[slot] = Some(at);
            self.repeating[slot] = false;
            self.expires[slot] = Some(at + self.initial_window);
        }
    }

    pub fn release(&mut self, key: Key) {
        let slot = Self::slot(key);
        self.held.set(key, false);
        self.expires[slot] = None;
        self.pressed_at[slot] = None;
        self.repeating[slot] = false;
    }

    /// Snapshot at `at`, dropping keys whose hold window has run out
    pub fn snapshot(&mut self, at: Instant) -> HeldKeys {
        for key in [Key::Up, Key::Down, Key::W, Key::S] {
            if self.expires[Self::slot(key)].is_some_and(|expiry| at >= expiry) {
                self.release(key);
            }
        }
        self.held
    }
}

fn game_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::W),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::S),
        _ => None,
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
    }
}

/// The terminal as the game's display and input device
pub struct Terminal {
    out: Stdout,
    canvas: Canvas,
    keys: KeyState,
    pointer: Vec2,
}

impl Terminal {
    pub fn new(out: Stdout, guard: &TerminalGuard) -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Self {
            out,
            canvas: Canvas::new(Viewport::new(cols, rows)),
            keys: KeyState::new(guard.enhanced_keys()),
            pointer: Vec2::ZERO,
        })
    }

    /// Drain pending terminal events into a frame snapshot
    pub fn poll(&mut self, now: f64) -> io::Result<FrameInput> {
        let mut input = FrameInput::at(now);
        while event::poll(Duration::ZERO)? {
            let at = Instant::now();
            match event::read()? {
                Event::Key(key) => self.on_key(key, at, &mut input.events),
                Event::Mouse(mouse) => self.on_mouse(mouse, &mut input.events),
                Event::Resize(cols, rows) => {
                    log::debug!("Resized to {}x{}", cols, rows);
                    self.canvas.resize(Viewport::new(cols, rows));
                }
                _ => {}
            }
        }
        input.keys = self.keys.snapshot(Instant::now());
        input.pointer = self.pointer;
        Ok(input)
    }

    fn on_key(&mut self, key: KeyEvent, at: Instant, events: &mut Vec<InputEvent>) {
        if key.kind != KeyEventKind::Release && is_quit_key(&key) {
            events.push(InputEvent::Quit);
            return;
        }
        if let Some(game_key) = game_key(key.code) {
            match key.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => self.keys.press(game_key, at),
                KeyEventKind::Release => self.keys.release(game_key),
            }
        }
    }

    fn on_mouse(&mut self, mouse: MouseEvent, events: &mut Vec<InputEvent>) {
        let pos = self.canvas.viewport().cell_to_field(mouse.column, mouse.row);
        self.pointer = pos;
        match mouse.kind {
            MouseEventKind::Down(button) => {
                events.push(InputEvent::PointerDown(pointer_button(button), pos))
            }
            MouseEventKind::Up(button) => {
                events.push(InputEvent::PointerUp(pointer_button(button), pos))
            }
            _ => {}
        }
    }

    /// Rasterize and flush one frame
    pub fn present(&mut self, list: &DrawList) -> io::Result<()> {
        self.canvas.draw(list);
        for (row, cells) in self.canvas.rows().enumerate() {
            queue!(self.out, MoveTo(0, row as u16))?;
            let mut colors = None;
            for cell in cells {
                if colors != Some((cell.fg, cell.bg)) {
                    queue!(
                        self.out,
                        SetForegroundColor(cell.fg),
                        SetBackgroundColor(cell.bg)
                    )?;
                    colors = Some((cell.fg, cell.bg));
                }
                queue!(self.out, Print(cell.ch))?;
            }
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }
}
