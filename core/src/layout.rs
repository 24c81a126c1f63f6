use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Mine placement of a board. Mines are only ever added, never removed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MineLayoutData")]
pub struct MineLayout {
    mine_mask: Array2<bool>,
}

impl MineLayout {
    pub fn new() -> Self {
        Self {
            mine_mask: Array2::default(BOARD_DIM),
        }
    }

    pub fn from_mine_coords(mine_coords: &[Coord2]) -> Result<Self> {
        let mut layout = Self::new();
        for &coords in mine_coords {
            layout.set_mine(coords)?;
        }
        Ok(layout)
    }

    /// Marks a cell as mined. Returns `false` when it already was.
    pub fn set_mine(&mut self, coords: Coord2) -> Result<bool> {
        let index = validate_coords(coords)?;
        let was_mined = core::mem::replace(&mut self.mine_mask[index], true);
        Ok(!was_mined)
    }

    /// Total predicate: off-board coordinates never hold a mine.
    pub fn contains_mine(&self, coords: Coord2) -> bool {
        coords
            .to_nd_index()
            .is_some_and(|index| self.mine_mask[index])
    }

    pub fn mine_count(&self) -> CellCount {
        count_cells(self.mine_mask.iter().filter(|&&is_mine| is_mine))
    }

    /// Mines in the 3x3 block around `coords`; a mined cell reports 0.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        if self.contains_mine(coords) {
            return 0;
        }

        // the center is known to be clear, so scanning it adds nothing
        raw_neighborhood(coords)
            .filter(|&pos| self.contains_mine(pos))
            .fold(0, |count, _| count + 1)
    }

    pub(crate) fn mask(&self) -> &Array2<bool> {
        &self.mine_mask
    }
}

#[derive(Deserialize)]
struct MineLayoutData {
    mine_mask: Array2<bool>,
}

impl TryFrom<MineLayoutData> for MineLayout {
    type Error = BoardError;

    fn try_from(data: MineLayoutData) -> Result<Self> {
        check_shape(data.mine_mask.dim())?;
        Ok(Self {
            mine_mask: data.mine_mask,
        })
    }
}

impl Default for MineLayout {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn check_shape((rows, columns): (usize, usize)) -> Result<()> {
    if [rows, columns] == BOARD_DIM {
        Ok(())
    } else {
        Err(BoardError::InvalidBoardShape)
    }
}

pub(crate) fn count_cells<I: Iterator>(iter: I) -> CellCount {
    iter.fold(0, |count: CellCount, _| count.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn fresh_layout_has_no_mines() {
        let layout = MineLayout::new();

        assert_eq!(layout.mine_count(), 0);
        for row in 0..BOARD_SIZE {
            for column in 0..BOARD_SIZE {
                assert!(!layout.contains_mine((row, column)));
            }
        }
    }

    #[test]
    fn set_mine_is_idempotent() {
        let mut layout = MineLayout::new();

        assert!(layout.set_mine((3, 2)).unwrap());
        assert!(!layout.set_mine((3, 2)).unwrap());
        assert!(layout.contains_mine((3, 2)));
        assert_eq!(layout.mine_count(), 1);
    }

    #[test]
    fn set_mine_rejects_off_board() {
        let mut layout = MineLayout::new();

        assert_eq!(
            layout.set_mine((10, 0)),
            Err(BoardError::OutOfRange { row: 10, column: 0 })
        );
        assert_eq!(
            layout.set_mine((0, -1)),
            Err(BoardError::OutOfRange { row: 0, column: -1 })
        );
    }

    #[test]
    fn contains_mine_is_false_off_board() {
        let layout = MineLayout::from_mine_coords(&[(0, 4), (9, 5), (5, 0), (7, 9)]).unwrap();

        assert!(!layout.contains_mine((-1, 4)));
        assert!(!layout.contains_mine((10, 5)));
        assert!(!layout.contains_mine((5, -1)));
        assert!(!layout.contains_mine((7, 10)));
    }

    #[test]
    fn adjacent_count_at_borders() {
        let layout = MineLayout::from_mine_coords(&[(0, 1), (9, 8)]).unwrap();

        assert_eq!(layout.adjacent_mine_count((0, 0)), 1);
        assert_eq!(layout.adjacent_mine_count((9, 9)), 1);
        assert_eq!(layout.adjacent_mine_count((0, 9)), 0);
        assert_eq!(layout.adjacent_mine_count((9, 0)), 0);
    }

    #[test]
    fn adjacent_count_maxes_at_eight() {
        let ring: [Coord2; 8] = [
            (4, 4),
            (4, 5),
            (4, 6),
            (5, 4),
            (5, 6),
            (6, 4),
            (6, 5),
            (6, 6),
        ];
        let layout = MineLayout::from_mine_coords(&ring).unwrap();

        assert_eq!(layout.adjacent_mine_count((5, 5)), 8);
    }

    #[test]
    fn misshapen_mask_is_rejected() {
        let json = r#"{"mine_mask":{"v":1,"dim":[2,2],"data":[true,false,false,false]}}"#;

        let err = serde_json::from_str::<MineLayout>(json).unwrap_err();

        assert!(err.to_string().contains("Board shape does not match"));
    }

    #[test]
    fn layout_survives_serialization() {
        let layout = MineLayout::from_mine_coords(&[(0, 0), (9, 9)]).unwrap();

        let json = serde_json::to_string(&layout).unwrap();
        let restored: MineLayout = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, layout);
    }
}
