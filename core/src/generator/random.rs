use rand::prelude::*;

use super::*;

/// Seeded generator drawing uniformly random cells, one per attempt, without
/// rejecting cells that were already drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
    draws: CellCount,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self::with_draws(seed, MINE_DRAWS)
    }

    pub fn with_draws(seed: u64, draws: CellCount) -> Self {
        Self { seed, draws }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn draws(self) -> impl Iterator<Item = Coord2> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        (0..self.draws).map(move |_| {
            let row = rng.random_range(0..BOARD_SIZE);
            let column = rng.random_range(0..BOARD_SIZE);
            (row, column)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn draws_stay_on_board() {
        let draws: Vec<_> = RandomMineGenerator::with_draws(7, 500).draws().collect();

        assert_eq!(draws.len(), 500);
        assert!(draws.iter().all(|&pos| in_bounds(pos)));
    }

    #[test]
    fn same_seed_same_draws() {
        let a: Vec<_> = RandomMineGenerator::new(42).draws().collect();
        let b: Vec<_> = RandomMineGenerator::new(42).draws().collect();

        assert_eq!(a.len(), usize::from(MINE_DRAWS));
        assert_eq!(a, b);
    }

    #[test]
    fn fixed_draws_pass_through() {
        let fixed: &[Coord2] = &[(1, 1), (1, 1), (2, 3)];

        assert_eq!(fixed.draws().collect::<Vec<_>>(), [(1, 1), (1, 1), (2, 3)]);
    }
}
