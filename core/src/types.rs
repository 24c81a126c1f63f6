use crate::{BoardError, Result};

/// Single coordinate axis, signed so that neighbor offsets can step off the board.
pub type Coord = i16;

/// Count type used for mine counts and cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, column)`.
pub type Coord2 = (Coord, Coord);

/// Row and column count of the square board.
pub const BOARD_SIZE: Coord = 10;

/// Number of placement draws made by a seeded mine placement.
pub const MINE_DRAWS: CellCount = 10;

pub(crate) const BOARD_DIM: [usize; 2] = [BOARD_SIZE as usize, BOARD_SIZE as usize];

pub const fn in_bounds((row, column): Coord2) -> bool {
    row >= 0 && row < BOARD_SIZE && column >= 0 && column < BOARD_SIZE
}

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    /// `None` when the coordinates fall outside the board.
    type Output = Option<[usize; 2]>;

    fn to_nd_index(self) -> Self::Output {
        if in_bounds(self) {
            Some([self.0.unsigned_abs().into(), self.1.unsigned_abs().into()])
        } else {
            None
        }
    }
}

/// Strict check used by every operation that must reject off-board cells.
pub fn validate_coords(coords: Coord2) -> Result<[usize; 2]> {
    coords.to_nd_index().ok_or(BoardError::OutOfRange {
        row: coords.0,
        column: coords.1,
    })
}

/// The 3x3 block in row-major order, center included.
const DISPLACEMENTS: [(Coord, Coord); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Every cell of the 3x3 block around `center`, whether or not it lies on the board.
pub fn raw_neighborhood(center: Coord2) -> impl Iterator<Item = Coord2> {
    DISPLACEMENTS.iter().map(move |&(dr, dc)| {
        (center.0.saturating_add(dr), center.1.saturating_add(dc))
    })
}

/// Iterates the on-board cells of the 3x3 block around a center, including the center.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2) -> Self {
        Self { center, index: 0 }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let &(dr, dc) = DISPLACEMENTS.get(usize::from(self.index))?;
            self.index += 1;

            let next_item = (
                self.center.0.saturating_add(dr),
                self.center.1.saturating_add(dc),
            );
            if in_bounds(next_item) {
                return Some(next_item);
            }
        }
    }
}
