//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! from the board engine, the input layer, and the terminal renderer alike.
//!
//! # Board Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_WIDTH` | 8 | Columns when not configured |
//! | `DEFAULT_BOARD_HEIGHT` | 8 | Rows when not configured |
//! | `DEFAULT_BORDER_SIZE` | 1 | Empty cells framed around the board |
//! | `MIN_MATCH_LEN` | 3 | Shortest straight run that counts as a match |
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `DEFAULT_MOVE_MS` | 500 | Swap animation duration |
//! | `MOVE_EPSILON` | 0.01 | Distance (in cells) at which a move snaps home |
//!
//! # Examples
//!
//! ```
//! use tui_match3_types::{Coord, Easing, PieceColor};
//!
//! let color = PieceColor::from_str("Red").unwrap();
//! assert_eq!(color, PieceColor::Red);
//! assert!(!color.is_wild());
//!
//! assert_eq!(Coord::new(0, 0).manhattan(Coord::new(1, 0)), 1);
//! assert_eq!(Easing::Linear.apply(0.25), 0.25);
//! ```

/// Board width used when nothing is configured
pub const DEFAULT_BOARD_WIDTH: i32 = 8;

/// Board height used when nothing is configured
pub const DEFAULT_BOARD_HEIGHT: i32 = 8;

/// Empty cells kept around the board when framing the viewport
pub const DEFAULT_BORDER_SIZE: u16 = 1;

/// Shortest run of same-colored pieces that counts as a match
pub const MIN_MATCH_LEN: usize = 3;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Default swap animation duration
pub const DEFAULT_MOVE_MS: u32 = 500;

/// A moving piece closer than this (in cells) to its destination snaps onto it
pub const MOVE_EPSILON: f32 = 0.01;

/// Piece colors.
///
/// Eight normal colors are produced by the random fill. `Wild` is reserved for
/// future special-match rules: it is never produced by the fill and only ever
/// matches other `Wild` pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Yellow,
    Blue,
    Magenta,
    Indigo,
    Green,
    Teal,
    Red,
    Cyan,
    Wild,
}

impl PieceColor {
    /// The colors the random fill may produce, in palette order.
    pub const NORMAL: [PieceColor; 8] = [
        PieceColor::Yellow,
        PieceColor::Blue,
        PieceColor::Magenta,
        PieceColor::Indigo,
        PieceColor::Green,
        PieceColor::Teal,
        PieceColor::Red,
        PieceColor::Cyan,
    ];

    /// Parse a color from its name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_match3_types::PieceColor;
    ///
    /// assert_eq!(PieceColor::from_str("teal"), Some(PieceColor::Teal));
    /// assert_eq!(PieceColor::from_str("WILD"), Some(PieceColor::Wild));
    /// assert_eq!(PieceColor::from_str("purple"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "yellow" => Some(PieceColor::Yellow),
            "blue" => Some(PieceColor::Blue),
            "magenta" => Some(PieceColor::Magenta),
            "indigo" => Some(PieceColor::Indigo),
            "green" => Some(PieceColor::Green),
            "teal" => Some(PieceColor::Teal),
            "red" => Some(PieceColor::Red),
            "cyan" => Some(PieceColor::Cyan),
            "wild" => Some(PieceColor::Wild),
            _ => None,
        }
    }

    /// Convert to lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceColor::Yellow => "yellow",
            PieceColor::Blue => "blue",
            PieceColor::Magenta => "magenta",
            PieceColor::Indigo => "indigo",
            PieceColor::Green => "green",
            PieceColor::Teal => "teal",
            PieceColor::Red => "red",
            PieceColor::Cyan => "cyan",
            PieceColor::Wild => "wild",
        }
    }

    pub fn is_wild(&self) -> bool {
        matches!(self, PieceColor::Wild)
    }
}

/// Interpolation curves for piece movement.
///
/// Each curve maps normalized time `t` in `[0, 1]` onto normalized progress,
/// with `apply(0) == 0` and `apply(1) == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// `sin(t·π/2)`: fast start, gentle arrival
    EaseOut,
    /// `1 − cos(t·π/2)`: gentle start, fast arrival
    EaseIn,
    /// `t²`
    Quadratic,
    /// `t²(3 − 2t)`
    SmoothStep,
    /// `t³(t(6t − 15) + 10)`
    #[default]
    SmootherStep,
}

impl Easing {
    /// Map normalized time onto normalized progress.
    ///
    /// Input is clamped to `[0, 1]` first.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => (t * std::f32::consts::FRAC_PI_2).sin(),
            Easing::EaseIn => 1.0 - (t * std::f32::consts::FRAC_PI_2).cos(),
            Easing::Quadratic => t * t,
            Easing::SmoothStep => t * t * (3.0 - 2.0 * t),
            Easing::SmootherStep => t * t * t * (t * (t * 6.0 - 15.0) + 10.0),
        }
    }

    /// Parse easing name (case-insensitive, camelCase or snake_case)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_match3_types::Easing;
    ///
    /// assert_eq!(Easing::from_str("easeOut"), Some(Easing::EaseOut));
    /// assert_eq!(Easing::from_str("smoother_step"), Some(Easing::SmootherStep));
    /// assert_eq!(Easing::from_str("bounce"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['_', '-'], "").as_str() {
            "linear" => Some(Easing::Linear),
            "easeout" => Some(Easing::EaseOut),
            "easein" => Some(Easing::EaseIn),
            "quadratic" | "exponential" => Some(Easing::Quadratic),
            "smoothstep" => Some(Easing::SmoothStep),
            "smootherstep" => Some(Easing::SmootherStep),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "easeOut",
            Easing::EaseIn => "easeIn",
            Easing::Quadratic => "quadratic",
            Easing::SmoothStep => "smoothStep",
            Easing::SmootherStep => "smootherStep",
        }
    }
}

/// A grid coordinate.
///
/// Signed so that scan steps and animation targets may point outside the grid;
/// validity is always checked against the board, never assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shifted coordinate, `None` if either component would overflow.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    /// `|dx| + |dy|`, saturating at `u32::MAX`
    pub fn manhattan(self, other: Coord) -> u32 {
        self.x
            .abs_diff(other.x)
            .saturating_add(self.y.abs_diff(other.y))
    }

    /// True when the two cells share an edge (Manhattan distance exactly 1)
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Identity of a piece in the board's piece arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u32);

impl PieceId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Where the board sits on a terminal screen.
///
/// Shared by the renderer (which computes it) and the pointer handler (which
/// hit-tests mouse positions against it). Row 0 of the grid is drawn at the
/// bottom, matching the board's y-up coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellLayout {
    /// Terminal column of the left edge of cell (0, _)
    pub origin_x: u16,
    /// Terminal row of the top edge of cell (_, height - 1)
    pub origin_y: u16,
    /// Terminal columns per cell
    pub cell_w: u16,
    /// Terminal rows per cell
    pub cell_h: u16,
    pub grid_width: u16,
    pub grid_height: u16,
}

impl CellLayout {
    /// Map a terminal position onto the grid cell drawn there, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_match3_types::{CellLayout, Coord};
    ///
    /// let layout = CellLayout {
    ///     origin_x: 10,
    ///     origin_y: 5,
    ///     cell_w: 4,
    ///     cell_h: 2,
    ///     grid_width: 3,
    ///     grid_height: 3,
    /// };
    /// // Top-left terminal cell of the board is the grid's top row.
    /// assert_eq!(layout.cell_at(10, 5), Some(Coord::new(0, 2)));
    /// assert_eq!(layout.cell_at(21, 10), Some(Coord::new(2, 0)));
    /// assert_eq!(layout.cell_at(9, 5), None);
    /// ```
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Coord> {
        if self.cell_w == 0 || self.cell_h == 0 {
            return None;
        }
        if column < self.origin_x || row < self.origin_y {
            return None;
        }
        let gx = (column - self.origin_x) / self.cell_w;
        let from_top = (row - self.origin_y) / self.cell_h;
        if gx >= self.grid_width || from_top >= self.grid_height {
            return None;
        }
        let gy = self.grid_height - 1 - from_top;
        Some(Coord::new(gx as i32, gy as i32))
    }

    /// Terminal position of the top-left corner of a cell.
    ///
    /// Positions past the terminal's coordinate range saturate at `u16::MAX`.
    pub fn cell_origin(&self, cell: Coord) -> Option<(u16, u16)> {
        if cell.x < 0
            || cell.y < 0
            || cell.x >= self.grid_width as i32
            || cell.y >= self.grid_height as i32
        {
            return None;
        }
        let from_top = self.grid_height as i32 - 1 - cell.y;
        Some((
            self.origin_x
                .saturating_add((cell.x as u16).saturating_mul(self.cell_w)),
            self.origin_y
                .saturating_add((from_top as u16).saturating_mul(self.cell_h)),
        ))
    }
}
