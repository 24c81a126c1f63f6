use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Overall outcome, derived from the whole board on every query.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Outcome of sealing or unsealing a cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Sealed,
    Unsealed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Outcome of exposing a cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    /// Safe cells newly exposed, flood fill included.
    Exposed(CellCount),
    HitMine,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Fixed-size board: per-cell state plus the mine layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardData")]
pub struct Board {
    mine_layout: MineLayout,
    cells: Array2<CellState>,
}

impl Board {
    pub fn new() -> Self {
        Self::with_layout(MineLayout::new())
    }

    pub fn with_layout(mine_layout: MineLayout) -> Self {
        Self {
            mine_layout,
            cells: Array2::default(BOARD_DIM),
        }
    }

    pub fn mine_layout(&self) -> &MineLayout {
        &self.mine_layout
    }

    pub fn cell_state(&self, coords: Coord2) -> Result<CellState> {
        let index = validate_coords(coords)?;
        Ok(self.cells[index])
    }

    /// Never fails; off-board coordinates report no mine.
    pub fn is_mined(&self, coords: Coord2) -> bool {
        self.mine_layout.contains_mine(coords)
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.mine_layout.adjacent_mine_count(coords)
    }

    pub fn view_at(&self, coords: Coord2) -> Result<CellView> {
        Ok(match self.cell_state(coords)? {
            CellState::Unexposed => CellView::Hidden,
            CellState::Sealed => CellView::Sealed,
            CellState::Exposed if self.is_mined(coords) => CellView::Mine,
            CellState::Exposed => CellView::Open(self.adjacent_mine_count(coords)),
        })
    }

    /// On-board cells of the 3x3 block around `coords`, the ones a flood fill visits.
    pub fn neighborhood(&self, coords: Coord2) -> Result<NeighborIter> {
        validate_coords(coords)?;
        Ok(NeighborIter::new(coords))
    }

    pub fn set_mine(&mut self, coords: Coord2) -> Result<()> {
        log::trace!("set mine at {:?}", coords);
        self.mine_layout.set_mine(coords)?;
        Ok(())
    }

    /// Adds mines from seeded random draws. Returns how many cells became mined,
    /// which is below [`MINE_DRAWS`] when draws collide.
    pub fn place_mines(&mut self, seed: u64) -> Result<CellCount> {
        self.place_mines_with(RandomMineGenerator::new(seed))
    }

    pub fn place_mines_with<G: MineGenerator>(&mut self, generator: G) -> Result<CellCount> {
        let mut placed: CellCount = 0;
        for coords in generator.draws() {
            if self.mine_layout.set_mine(coords)? {
                placed = placed.saturating_add(1);
            } else {
                log::warn!("Mine draw at {:?} landed on an already mined cell", coords);
            }
        }
        log::debug!(
            "Placed {} mines, board now holds {}",
            placed,
            self.mine_layout.mine_count()
        );
        Ok(placed)
    }

    pub fn toggle_seal(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use CellState::*;

        let index = validate_coords(coords)?;
        let outcome = match self.cells[index] {
            Unexposed => {
                self.cells[index] = Sealed;
                MarkOutcome::Sealed
            }
            Sealed => {
                self.cells[index] = Unexposed;
                MarkOutcome::Unsealed
            }
            Exposed => MarkOutcome::NoChange,
        };
        log::trace!("toggle seal at {:?}: {:?}", coords, outcome);
        Ok(outcome)
    }

    /// Exposes an unexposed cell. A safe cell with no adjacent mines cascades into
    /// its neighbors; sealed and already exposed cells are left alone.
    pub fn expose(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let index = validate_coords(coords)?;

        if self.cells[index] != CellState::Unexposed {
            log::trace!("expose at {:?}: no change", coords);
            return Ok(RevealOutcome::NoChange);
        }

        if self.is_mined(coords) {
            self.cells[index] = CellState::Exposed;
            log::trace!("expose at {:?}: hit mine", coords);
            return Ok(RevealOutcome::HitMine);
        }

        let exposed = self.flood_expose(coords);
        log::debug!("expose at {:?}: {} cells exposed", coords, exposed);
        Ok(RevealOutcome::Exposed(exposed))
    }

    // Unexposed -> Exposed doubles as the visited mark, so no separate set is kept.
    fn flood_expose(&mut self, start: Coord2) -> CellCount {
        let mut exposed: CellCount = 0;
        let mut to_visit = Vec::from([start]);

        while let Some(visit_coords) = to_visit.pop() {
            let Some(index) = visit_coords.to_nd_index() else {
                continue;
            };
            if self.cells[index] != CellState::Unexposed {
                continue;
            }

            self.cells[index] = CellState::Exposed;
            exposed = exposed.saturating_add(1);

            if !self.is_mined(visit_coords) && self.adjacent_mine_count(visit_coords) == 0 {
                let cells = &self.cells;
                to_visit.extend(NeighborIter::new(visit_coords).filter(|&pos| {
                    pos.to_nd_index()
                        .is_some_and(|index| cells[index] == CellState::Unexposed)
                }));
            }
        }

        exposed
    }

    /// Scans the whole board: any exposed mine loses, otherwise every mine sealed
    /// and every safe cell exposed wins.
    pub fn game_status(&self) -> GameStatus {
        let mut all_resolved = true;

        for (&state, &mined) in self.cells.iter().zip(self.mine_layout.mask().iter()) {
            match (state, mined) {
                (CellState::Exposed, true) => return GameStatus::Lost,
                (CellState::Sealed, true) | (CellState::Exposed, false) => {}
                _ => all_resolved = false,
            }
        }

        if all_resolved {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    pub fn exposed_count(&self) -> CellCount {
        count_cells(self.cells.iter().filter(|state| state.is_exposed()))
    }

    pub fn sealed_count(&self) -> CellCount {
        count_cells(self.cells.iter().filter(|state| state.is_sealed()))
    }
}

#[derive(Deserialize)]
struct BoardData {
    mine_layout: MineLayout,
    cells: Array2<CellState>,
}

impl TryFrom<BoardData> for Board {
    type Error = BoardError;

    // the layout checks its own shape while deserializing
    fn try_from(data: BoardData) -> Result<Self> {
        check_shape(data.cells.dim())?;
        Ok(Self {
            mine_layout: data.mine_layout,
            cells: data.cells,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
