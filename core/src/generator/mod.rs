use crate::*;
pub use random::*;

mod random;

/// Source of mine placement draws. Draws may repeat a cell.
pub trait MineGenerator {
    fn draws(self) -> impl Iterator<Item = Coord2>;
}

/// A fixed list of draws, used to lay out known boards.
impl MineGenerator for &[Coord2] {
    fn draws(self) -> impl Iterator<Item = Coord2> {
        self.iter().copied()
    }
}
