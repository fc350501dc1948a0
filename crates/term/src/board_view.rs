//! BoardView: maps a `core::BoardSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Framing works like a camera fitted to the board: the grid plus a margin of
//! `border_size` cells on every side must fit the viewport both horizontally
//! and vertically, so the tighter of the two fits decides the cell scale. Cells
//! are twice as wide as they are tall to compensate for terminal glyphs.

use crate::core::{BoardSnapshot, Presenter};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CellLayout, Coord, PieceColor, DEFAULT_BORDER_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Rows kept free under the board for the status line.
const STATUS_ROWS: u16 = 1;

const TILE_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// A terminal renderer for the match-3 board.
#[derive(Debug, Clone, Copy)]
pub struct BoardView {
    /// Margin around the grid, in cells.
    border_size: u16,
    /// How strongly a highlight tints the tile background, in [0, 1].
    highlight_strength: f32,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            border_size: DEFAULT_BORDER_SIZE,
            highlight_strength: 0.45,
        }
    }
}

impl BoardView {
    pub fn new(border_size: u16) -> Self {
        Self {
            border_size,
            ..Self::default()
        }
    }

    pub fn border_size(&self) -> u16 {
        self.border_size
    }

    /// Fit a `grid_width` x `grid_height` board into the viewport.
    ///
    /// The scale never drops below one row per cell; on a viewport too small
    /// for that the board is clipped rather than collapsed.
    pub fn layout(&self, grid_width: i32, grid_height: i32, viewport: Viewport) -> CellLayout {
        let gw = u16::try_from(grid_width.max(0)).unwrap_or(u16::MAX);
        let gh = u16::try_from(grid_height.max(0)).unwrap_or(u16::MAX);
        let span_w = gw.saturating_add(self.border_size.saturating_mul(2)).max(1);
        let span_h = gh.saturating_add(self.border_size.saturating_mul(2)).max(1);

        let avail_h = viewport.height.saturating_sub(STATUS_ROWS);
        let fit_w = viewport.width / span_w.saturating_mul(2);
        let fit_h = avail_h / span_h;
        let scale = fit_w.min(fit_h).max(1);

        let cell_w = scale * 2;
        let cell_h = scale;
        let board_w = gw.saturating_mul(cell_w);
        let board_h = gh.saturating_mul(cell_h);

        CellLayout {
            origin_x: viewport.width.saturating_sub(board_w) / 2,
            origin_y: avail_h.saturating_sub(board_h) / 2,
            cell_w,
            cell_h,
            grid_width: gw,
            grid_height: gh,
        }
    }

    /// Render a frame into an existing framebuffer and return the layout used,
    /// so the caller can hit-test pointer events against it.
    pub fn render_into(
        &self,
        snap: &BoardSnapshot,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> CellLayout {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let layout = self.layout(snap.width, snap.height, viewport);
        let board_w = layout.grid_width.saturating_mul(layout.cell_w);
        let board_h = layout.grid_height.saturating_mul(layout.cell_h);

        let tile = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: TILE_BG,
            bold: false,
        };
        fb.fill_rect(layout.origin_x, layout.origin_y, board_w, board_h, ' ', tile);
        for y in 0..snap.height {
            for x in 0..snap.width {
                if let Some((px, py)) = layout.cell_origin(Coord::new(x, y)) {
                    let (cx, cy) = glyph_pos(layout, px, py);
                    fb.put_char(cx, cy, '·', tile);
                }
            }
        }

        if layout.origin_x > 0 && layout.origin_y > 0 {
            let border = CellStyle {
                fg: Rgb::new(200, 200, 200),
                bg: SCREEN_BG,
                bold: false,
            };
            draw_border(
                fb,
                layout.origin_x - 1,
                layout.origin_y - 1,
                board_w.saturating_add(2),
                board_h.saturating_add(2),
                border,
            );
        }

        let mut painter = FramePainter {
            fb: &mut *fb,
            layout,
            strength: self.highlight_strength,
        };
        snap.present(&mut painter);

        if let Some(cell) = snap.selected {
            self.draw_marker(fb, layout, cell, Rgb::new(255, 255, 255));
        }
        if let Some(cell) = snap.target {
            self.draw_marker(fb, layout, cell, Rgb::new(150, 150, 150));
        }

        self.draw_status(fb, snap, layout, viewport);
        layout
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BoardSnapshot, viewport: Viewport) -> (FrameBuffer, CellLayout) {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let layout = self.render_into(snap, viewport, &mut fb);
        (fb, layout)
    }

    /// Bracket the cell with `[` `]` in its left and right columns.
    fn draw_marker(&self, fb: &mut FrameBuffer, layout: CellLayout, cell: Coord, fg: Rgb) {
        let Some((px, py)) = layout.cell_origin(cell) else {
            return;
        };
        let row = py.saturating_add(layout.cell_h / 2);
        let right = px.saturating_add(layout.cell_w - 1);
        for (x, ch) in [(px, '['), (right, ']')] {
            let bg = fb.get(x, row).map(|c| c.style.bg).unwrap_or(TILE_BG);
            fb.put_char(
                x,
                row,
                ch,
                CellStyle {
                    fg,
                    bg,
                    bold: true,
                },
            );
        }
    }

    fn draw_status(
        &self,
        fb: &mut FrameBuffer,
        snap: &BoardSnapshot,
        layout: CellLayout,
        viewport: Viewport,
    ) {
        let Some(y) = viewport.height.checked_sub(1) else {
            return;
        };
        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: SCREEN_BG,
            bold: true,
        };
        let value = CellStyle {
            bold: false,
            ..label
        };

        let head = format!("SWAPS {}", snap.swaps);
        fb.put_str(layout.origin_x, y, &head, label);
        if let Some(status) = snap.status.as_deref().filter(|s| !s.is_empty()) {
            let x = layout.origin_x.saturating_add(head.chars().count() as u16 + 2);
            fb.put_str(x, y, status, value);
        }
    }
}

/// Presenter backed by a framebuffer and a fixed layout for one frame.
pub struct FramePainter<'a> {
    fb: &'a mut FrameBuffer,
    layout: CellLayout,
    strength: f32,
}

impl<'a> FramePainter<'a> {
    pub fn new(fb: &'a mut FrameBuffer, layout: CellLayout) -> Self {
        Self {
            fb,
            layout,
            strength: BoardView::default().highlight_strength,
        }
    }

    /// Terminal position for a fractional grid position, rounded to the
    /// nearest character cell.
    fn project(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        let l = self.layout;
        let col = l.origin_x as f32 + x * l.cell_w as f32;
        let from_top = l.grid_height as f32 - 1.0 - y;
        let row = l.origin_y as f32 + from_top * l.cell_h as f32;
        let max_col = l.origin_x as f32 + l.grid_width as f32 * l.cell_w as f32;
        let max_row = l.origin_y as f32 + l.grid_height as f32 * l.cell_h as f32;
        if col < l.origin_x as f32 - 0.5 || row < l.origin_y as f32 - 0.5 {
            return None;
        }
        if col >= max_col || row >= max_row {
            return None;
        }
        // Float to int casts saturate, so columns past u16::MAX clip off-screen.
        Some((col.round().max(0.0) as u16, row.round().max(0.0) as u16))
    }
}

impl Presenter for FramePainter<'_> {
    fn render_piece_at(&mut self, color: PieceColor, x: f32, y: f32) {
        let Some((px, py)) = self.project(x, y) else {
            return;
        };
        let (cx, cy) = glyph_pos(self.layout, px, py);
        let bg = self.fb.get(cx, cy).map(|c| c.style.bg).unwrap_or(TILE_BG);
        let style = CellStyle {
            fg: Rgb::of_piece(color),
            bg,
            bold: true,
        };
        let glyph = if color.is_wild() { '✦' } else { '●' };
        self.fb.put_char(cx, cy, glyph, style);
    }

    fn set_cell_highlight(&mut self, cell: Coord, color: Option<PieceColor>) {
        let Some((px, py)) = self.layout.cell_origin(cell) else {
            return;
        };
        let bg = match color {
            Some(c) => TILE_BG.mix(Rgb::of_piece(c), self.strength),
            None => TILE_BG,
        };
        self.fb
            .tint_rect(px, py, self.layout.cell_w, self.layout.cell_h, bg);
    }
}

/// Where a cell's glyph sits: middle row, left of center.
fn glyph_pos(layout: CellLayout, px: u16, py: u16) -> (u16, u16) {
    (
        px.saturating_add((layout.cell_w / 2).saturating_sub(1)),
        py.saturating_add(layout.cell_h / 2),
    )
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let right = x.saturating_add(w - 1);
    let bottom = y.saturating_add(h - 1);

    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x.saturating_add(dx), y, '─', style);
        fb.put_char(x.saturating_add(dx), bottom, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y.saturating_add(dy), '│', style);
        fb.put_char(right, y.saturating_add(dy), '│', style);
    }
}
