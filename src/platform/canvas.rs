//! Rasterizes a `DrawList` onto a grid of terminal cells
//!
//! The field is scaled to whatever grid size the terminal offers. Shapes that
//! are thinner than a cell still cover at least one cell, so the paddles and
//! the ball never vanish on small terminals.

use crossterm::style::Color;
use glam::Vec2;

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::render::{DrawCommand, DrawList, TextAnchor};
use crate::sim::Rect;
use crate::ui::{ButtonStyle, ButtonVisual};

const WHITE: Color = Color::Rgb {
    r: 255,
    g: 255,
    b: 255,
};
const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };

/// Fill colour for a button in a given state
pub fn button_color(style: ButtonStyle, visual: ButtonVisual) -> Color {
    let level = match (style, visual) {
        (ButtonStyle::Primary, ButtonVisual::Idle) => 100,
        (ButtonStyle::Primary, ButtonVisual::Hover) => 150,
        (ButtonStyle::Primary, ButtonVisual::Pressed) => 200,
        (ButtonStyle::Secondary, ButtonVisual::Idle) => 50,
        (ButtonStyle::Secondary, ButtonVisual::Hover) => 70,
        (ButtonStyle::Secondary, ButtonVisual::Pressed) => 120,
    };
    Color::Rgb {
        r: level,
        g: level,
        b: level,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: WHITE,
            bg: BLACK,
        }
    }
}

/// Mapping between field pixels and terminal cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    /// Field pixels per cell, horizontally and vertically
    pub fn cell_size(&self) -> Vec2 {
        Vec2::new(
            FIELD_WIDTH / self.cols as f32,
            FIELD_HEIGHT / self.rows as f32,
        )
    }

    /// Field position at the centre of a cell
    pub fn cell_to_field(&self, col: u16, row: u16) -> Vec2 {
        let cell = self.cell_size();
        Vec2::new(
            (col as f32 + 0.5) * cell.x,
            (row as f32 + 0.5) * cell.y,
        )
    }

    fn col_of(&self, x: f32) -> i32 {
        (x / self.cell_size().x).floor() as i32
    }

    fn row_of(&self, y: f32) -> i32 {
        (y / self.cell_size().y).floor() as i32
    }

    /// Inclusive cell span covered by a rect; at least one cell per axis
    fn span(&self, rect: &Rect) -> (i32, i32, i32, i32) {
        let c0 = self.col_of(rect.left());
        let r0 = self.row_of(rect.top());
        let cell = self.cell_size();
        let c1 = ((rect.right() / cell.x).ceil() as i32 - 1).max(c0);
        let r1 = ((rect.bottom() / cell.y).ceil() as i32 - 1).max(r0);
        (c0, r0, c1, r1)
    }
}

/// A cell grid sized to the viewport
#[derive(Debug, Clone)]
pub struct Canvas {
    viewport: Viewport,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(viewport: Viewport) -> Self {
        let len = viewport.cols as usize * viewport.rows as usize;
        Self {
            viewport,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn resize(&mut self, viewport: Viewport) {
        *self = Self::new(viewport);
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn get(&self, col: u16, row: u16) -> Option<&Cell> {
        if col >= self.viewport.cols || row >= self.viewport.rows {
            return None;
        }
        self.cells
            .get(row as usize * self.viewport.cols as usize + col as usize)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.viewport.cols as usize)
    }

    fn set(&mut self, col: i32, row: i32, cell: Cell) {
        if col < 0 || row < 0 || col >= self.viewport.cols as i32 || row >= self.viewport.rows as i32
        {
            return;
        }
        let idx = row as usize * self.viewport.cols as usize + col as usize;
        self.cells[idx] = cell;
    }

    fn fill(&mut self, rect: &Rect, cell: Cell) {
        let (c0, r0, c1, r1) = self.viewport.span(rect);
        for row in r0..=r1 {
            for col in c0..=c1 {
                self.set(col, row, cell);
            }
        }
    }

    fn text(&mut self, col: i32, row: i32, text: &str, fg: Color, bg: Option<Color>) {
        for (i, ch) in text.chars().enumerate() {
            let c = col + i as i32;
            let bg = match bg {
                Some(bg) => bg,
                None => self.cell_bg(c, row),
            };
            self.set(c, row, Cell { ch, fg, bg });
        }
    }

    fn cell_bg(&self, col: i32, row: i32) -> Color {
        if col < 0 || row < 0 {
            return BLACK;
        }
        self.get(col as u16, row as u16)
            .map(|c| c.bg)
            .unwrap_or(BLACK)
    }

    /// Paint every command in order
    pub fn draw(&mut self, list: &DrawList) {
        self.clear();
        for command in list.iter() {
            self.draw_command(command);
        }
    }

    fn draw_command(&mut self, command: &DrawCommand) {
        let vp = self.viewport;
        match command {
            DrawCommand::Rect(rect) => self.fill(
                rect,
                Cell {
                    ch: '█',
                    fg: WHITE,
                    bg: BLACK,
                },
            ),
            DrawCommand::Ellipse(rect) => self.fill(
                rect,
                Cell {
                    ch: '●',
                    fg: WHITE,
                    bg: BLACK,
                },
            ),
            DrawCommand::Line { from, to } => {
                let col = vp.col_of(from.x);
                let (r0, r1) = (vp.row_of(from.y.min(to.y)), vp.row_of(from.y.max(to.y)));
                for row in r0..=r1.min(vp.rows as i32 - 1) {
                    // Shapes drawn earlier stay on top of the net
                    if self.cell_is_blank(col, row) {
                        self.set(
                            col,
                            row,
                            Cell {
                                ch: '│',
                                fg: WHITE,
                                bg: BLACK,
                            },
                        );
                    }
                }
            }
            DrawCommand::Text {
                pos, text, anchor, ..
            } => {
                let len = text.chars().count() as i32;
                let row = vp.row_of(pos.y);
                let col = match anchor {
                    TextAnchor::TopLeft => vp.col_of(pos.x),
                    TextAnchor::Center => vp.col_of(pos.x) - len / 2,
                };
                self.text(col, row, text, WHITE, None);
            }
            DrawCommand::Button {
                rect,
                label,
                style,
                visual,
            } => {
                let bg = button_color(*style, *visual);
                self.fill(
                    rect,
                    Cell {
                        ch: ' ',
                        fg: WHITE,
                        bg,
                    },
                );
                let center = rect.center();
                let len = label.chars().count() as i32;
                let col = vp.col_of(center.x) - len / 2;
                self.text(col, vp.row_of(center.y), label, WHITE, Some(bg));
            }
        }
    }

    fn cell_is_blank(&self, col: i32, row: i32) -> bool {
        if col < 0 || row < 0 {
            return false;
        }
        self.get(col as u16, row as u16)
            .is_some_and(|c| *c == Cell::default())
    }
}
