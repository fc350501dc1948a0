//! Palette of colors available to the random fill.

use tracing::warn;

use crate::error::BoardError;
use crate::types::PieceColor;

/// The set of colors the fill chooses from. Never contains `Wild`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<PieceColor>,
}

impl Palette {
    /// Build a palette from already-typed colors.
    ///
    /// `Wild` entries are dropped: the fill never produces them.
    pub fn new(colors: &[PieceColor]) -> Result<Self, BoardError> {
        let mut out: Vec<PieceColor> = Vec::with_capacity(colors.len());
        for &c in colors {
            if c.is_wild() || out.contains(&c) {
                continue;
            }
            out.push(c);
        }
        if out.is_empty() {
            return Err(BoardError::EmptyPalette);
        }
        Ok(Self { colors: out })
    }

    /// Resolve color names into a palette.
    ///
    /// Names that don't resolve to a fillable color (unknown names, `wild`) are
    /// skipped with a warning. In `strict` mode the first such name fails the
    /// whole palette instead.
    pub fn resolve<S: AsRef<str>>(names: &[S], strict: bool) -> Result<Self, BoardError> {
        let mut colors = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            match PieceColor::from_str(name) {
                Some(c) if !c.is_wild() => colors.push(c),
                _ if strict => return Err(BoardError::UnresolvedColor(name.to_string())),
                _ => warn!(entry = name, "skipping unresolved palette entry"),
            }
        }
        Self::new(&colors)
    }

    pub fn colors(&self) -> &[PieceColor] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: PieceColor::NORMAL.to_vec(),
        }
    }
}
