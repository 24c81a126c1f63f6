use crate::*;

/// Owns the board of the game being played and replaces it wholesale on a new game.
/// Input is refused once the game has been won or lost.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    board: Board,
    seed: u64,
    status: GameStatus,
}

impl GameSession {
    pub fn new(seed: u64) -> Result<Self> {
        Self::with_generator(seed, RandomMineGenerator::new(seed))
    }

    /// Starts from mines drawn by `generator`; `seed` is only kept for reference.
    pub fn with_generator<G: MineGenerator>(seed: u64, generator: G) -> Result<Self> {
        let mut board = Board::new();
        board.place_mines_with(generator)?;
        log::info!("New game with seed {} and {} mines", seed, board.mine_count());
        Ok(Self {
            status: board.game_status(),
            board,
            seed,
        })
    }

    pub fn new_game(&mut self, seed: u64) -> Result<()> {
        *self = Self::new(seed)?;
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn expose(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        self.check_in_progress()?;
        let outcome = self.board.expose(coords)?;
        if outcome.has_update() {
            self.refresh_status();
        }
        Ok(outcome)
    }

    pub fn toggle_seal(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        self.check_in_progress()?;
        let outcome = self.board.toggle_seal(coords)?;
        if outcome.has_update() {
            self.refresh_status();
        }
        Ok(outcome)
    }

    fn refresh_status(&mut self) {
        self.status = self.board.game_status();
        match self.status {
            GameStatus::InProgress => {}
            GameStatus::Won => log::info!("Game {} won", self.seed),
            GameStatus::Lost => log::info!("Game {} lost", self.seed),
        }
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(BoardError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
