use serde::{Deserialize, Serialize};

/// Player-facing state of a single cell, independent of whether it holds a mine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Unexposed,
    Exposed,
    Sealed,
}

impl CellState {
    pub const fn is_exposed(self) -> bool {
        matches!(self, Self::Exposed)
    }

    pub const fn is_sealed(self) -> bool {
        matches!(self, Self::Sealed)
    }
}

/// What a front end should draw for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Sealed,
    /// Exposed safe cell with its adjacent-mine count, `0..=8`.
    Open(u8),
    /// Exposed mined cell, the game is lost.
    Mine,
}

impl CellView {
    // whether the cell is visually closed
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Hidden | Self::Sealed)
    }
}
