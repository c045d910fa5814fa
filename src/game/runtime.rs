//! The game runtime: floors, active floor, move pipeline, undo, restart.

use log::{debug, info};

use super::history::{History, Snapshot};
use super::report::GameReport;
use crate::board::{Board, Floors};
use crate::core::{CellState, CellType, Coord, FloorId, FloorMap, GameConfig, GameRng};
use crate::error::MoveRejected;
use crate::moves::{MoveOutcome, MoveResolver};
use crate::rules::{self, GameResult};

/// Fixed cells that become teleport tiles in multi-floor games.
///
/// The arm tips: every shape includes them, and each can be jumped into from
/// the start, so clearing them never leaves a floor without a move.
pub const TELEPORT_CELLS: [Coord; 4] = [Coord::new(0, 3), Coord::new(3, 0), Coord::new(3, 6), Coord::new(6, 3)];

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    /// Terminal: no further moves or undos are accepted until restart.
    Over(GameResult),
}

/// Turn every teleport cell into a `Teleport` tile on every floor.
///
/// Only applies with more than one floor. Goal and King cells and cells
/// outside the shape are left alone; any peg on a new teleport is removed.
pub fn place_teleport_tiles(floors: &mut Floors) {
    if floors.floor_count() < 2 {
        return;
    }
    for (_, board) in floors.iter_mut() {
        for at in TELEPORT_CELLS {
            if board.is_valid(at) && !board.type_at(at).is_protected() {
                board.set_type(at, CellType::Teleport);
                board.set(at, CellState::Empty);
            }
        }
    }
}

/// A running game over one or more floors.
///
/// ## Move pipeline
///
/// `try_move` rejects the request while the game is over or a previous
/// chained move is still settling, then validates the jump on the active
/// floor, snapshots every floor, resolves the chain, and checks whether the
/// game has ended.
///
/// ## Chained moves
///
/// After a move that slid or teleported, `chain_active()` stays `true` until
/// the caller calls `settle_chain()`, typically once its animation of the
/// chain has finished. Moves are refused in between.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    rng: GameRng,
    floors: Floors,
    active: FloorId,
    history: History,
    move_count: u32,
    peg_count: usize,
    phase: GamePhase,
    chain_active: bool,
}

impl Game {
    /// Start a game with a seeded RNG.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Start a game drawing board randomness from `rng`.
    ///
    /// An out-of-range floor count falls back to a single floor.
    #[must_use]
    pub fn with_rng(config: GameConfig, mut rng: GameRng) -> Self {
        let config = config.sanitized();
        let floors = Self::build_floors(&config, &mut rng);
        Self::from_parts(config, rng, floors)
    }

    /// Resume from an already built set of floors.
    ///
    /// `seed` feeds later restarts.
    ///
    /// # Panics
    ///
    /// Panics if `config.floors` is outside `1..=3` or differs from the
    /// number of floors given.
    #[must_use]
    pub fn with_floors(config: GameConfig, floors: Floors, seed: u64) -> Self {
        assert!(config.validate().is_ok(), "Floor count must be 1-3");
        assert_eq!(
            floors.floor_count(),
            config.floor_count(),
            "Floor count must match config"
        );
        Self::from_parts(config, GameRng::new(seed), floors)
    }

    fn from_parts(config: GameConfig, rng: GameRng, floors: Floors) -> Self {
        let history = History::new(Snapshot {
            floors: floors.clone(),
            active: FloorId::GROUND,
        });
        let peg_count = rules::total_pegs(&floors);
        // a position can be stuck before the first move
        let phase = match rules::evaluate(config.mode, &floors) {
            Some(result) => {
                info!("game over before the first move: {result:?} ({peg_count} pegs)");
                GamePhase::Over(result)
            }
            None => GamePhase::Playing,
        };
        Self {
            config,
            rng,
            floors,
            active: FloorId::GROUND,
            history,
            move_count: 0,
            peg_count,
            phase,
            chain_active: false,
        }
    }

    fn build_floors(config: &GameConfig, rng: &mut GameRng) -> Floors {
        let mut floors = FloorMap::new(config.floor_count(), |_| {
            let mut floor_rng = rng.floor_stream();
            Board::from_config(config, &mut floor_rng)
        });
        place_teleport_tiles(&mut floors);
        floors
    }

    /// Rebuild every floor from the stored config and start over.
    pub fn restart(&mut self) {
        let floors = Self::build_floors(&self.config, &mut self.rng);
        let rng = self.rng.clone();
        *self = Self::from_parts(self.config, rng, floors);
        debug!("restarted: {} pegs on {} floor(s)", self.peg_count, self.floors.floor_count());
    }

    /// Replace the config and restart with it.
    ///
    /// An out-of-range floor count falls back to a single floor.
    pub fn reconfigure(&mut self, config: GameConfig) {
        self.config = config.sanitized();
        self.restart();
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn floors(&self) -> &Floors {
        &self.floors
    }

    /// A floor's board, `None` if out of range.
    #[must_use]
    pub fn floor(&self, floor: FloorId) -> Option<&Board> {
        self.floors.get(floor)
    }

    #[must_use]
    pub fn active_floor(&self) -> FloorId {
        self.active
    }

    /// The board moves are played on.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.floors[self.active]
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::Over(_))
    }

    /// The result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            GamePhase::Over(result) => Some(result),
            GamePhase::Playing => None,
        }
    }

    /// Moves committed since the start. Not decremented by undo.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Pegs over all floors.
    #[must_use]
    pub fn peg_count(&self) -> usize {
        self.peg_count
    }

    #[must_use]
    pub fn kings_alive(&self) -> usize {
        rules::kings_alive(&self.floors)
    }

    #[must_use]
    pub fn pegs_on_goal(&self) -> usize {
        rules::pegs_on_goal(&self.floors)
    }

    /// Goal cells over all floors.
    #[must_use]
    pub fn goal_cells(&self) -> Vec<(FloorId, Coord)> {
        self.floors
            .iter()
            .flat_map(|(floor, board)| board.cells_of_type(CellType::Goal).map(move |at| (floor, at)))
            .collect()
    }

    /// Whether any floor still has a legal jump.
    #[must_use]
    pub fn has_any_move(&self) -> bool {
        rules::any_move(&self.floors)
    }

    /// Legal jumps on the active floor.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<(Coord, Coord)> {
        self.board().legal_jumps()
    }

    /// Snapshots stored, including the start.
    #[must_use]
    pub fn history_depth(&self) -> usize {
        self.history.depth()
    }

    #[must_use]
    pub fn chain_active(&self) -> bool {
        self.chain_active
    }

    /// Summary for scoring collaborators.
    #[must_use]
    pub fn report(&self) -> GameReport {
        GameReport {
            win: self.result().is_some_and(|result| result.is_win()),
            pegs_remaining: self.peg_count,
            move_count: self.move_count,
            mode: self.config.mode,
        }
    }

    // === Commands ===

    /// Play `from → to` on the active floor.
    pub fn try_move(&mut self, from: Coord, to: Coord) -> Result<MoveOutcome, MoveRejected> {
        if self.is_over() {
            return Err(MoveRejected::GameOver);
        }
        if self.chain_active {
            return Err(MoveRejected::ChainActive);
        }
        if !self.board().can_jump(from, to) {
            return Err(MoveRejected::IllegalJump { from, to });
        }

        let before = self.snapshot();
        let outcome = MoveResolver::resolve(&mut self.floors, self.active, from, to)
            .ok_or(MoveRejected::IllegalJump { from, to })?;
        self.history.push(before);

        self.active = outcome.final_floor();
        self.move_count += 1;
        self.peg_count = rules::total_pegs(&self.floors);
        self.chain_active = outcome.is_chained();

        if let Some(result) = rules::evaluate(self.config.mode, &self.floors) {
            info!(
                "game over after {} moves: {:?} ({} pegs left)",
                self.move_count, result, self.peg_count
            );
            self.phase = GamePhase::Over(result);
        }
        Ok(outcome)
    }

    /// Mark the previous move's chain as finished so the next move is accepted.
    pub fn settle_chain(&mut self) {
        self.chain_active = false;
    }

    /// Step back one move. Returns `false` at the start or once the game is over.
    pub fn undo(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        let Some(snapshot) = self.history.undo() else {
            return false;
        };

        self.floors = snapshot.floors;
        self.active = snapshot.active;
        self.peg_count = rules::total_pegs(&self.floors);
        self.chain_active = false;
        debug!("undo: history depth {}", self.history.depth());
        true
    }

    /// Switch the active floor. Ignored out of range or once the game is over.
    pub fn select_floor(&mut self, floor: FloorId) -> bool {
        if self.is_over() || !self.floors.contains(floor) {
            return false;
        }
        self.active = floor;
        true
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            floors: self.floors.clone(),
            active: self.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameMode, MapShape};
    use crate::rules::LossReason;

    /// Single cross floor with every valid cell emptied and markers cleared.
    fn cleared(mode: GameMode) -> Board {
        let mut board = Board::new(mode, MapShape::Cross, Default::default(), &mut GameRng::new(0));
        for at in Coord::all() {
            board.set(at, CellState::Empty);
            if board.type_at(at) == CellType::King {
                board.set_type(at, CellType::Normal);
            }
        }
        board
    }

    fn game_from(mode: GameMode, board: Board) -> Game {
        let config = GameConfig::new().with_mode(mode);
        Game::with_floors(config, FloorMap::from_vec(vec![board]), 1)
    }

    #[test]
    fn test_new_classic_game() {
        let game = Game::new(GameConfig::default(), 42);
        assert_eq!(game.peg_count(), 32);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.history_depth(), 1);
        assert_eq!(game.legal_moves().len(), 4);
        assert!(game.goal_cells().is_empty());
    }

    #[test]
    fn test_teleports_only_with_several_floors() {
        let single = Game::new(GameConfig::default(), 1);
        assert_eq!(single.board().cells_of_type(CellType::Teleport).count(), 0);

        let stacked = Game::new(GameConfig::new().with_floors(2), 1);
        for (_, board) in stacked.floors().iter() {
            for at in TELEPORT_CELLS {
                assert_eq!(board.type_at(at), CellType::Teleport);
                assert_eq!(board.at(at), CellState::Empty);
            }
        }
        assert_eq!(stacked.peg_count(), 2 * 28);
    }

    #[test]
    fn test_teleports_skip_goal_and_king() {
        let mut board = cleared(GameMode::Classic);
        board.set_type(Coord::new(0, 3), CellType::Goal);
        board.set(Coord::new(3, 0), CellState::Peg);
        board.set_type(Coord::new(3, 0), CellType::King);
        let mut floors = FloorMap::from_vec(vec![board.clone(), board]);

        place_teleport_tiles(&mut floors);
        for (_, board) in floors.iter() {
            assert_eq!(board.type_at(Coord::new(0, 3)), CellType::Goal);
            assert_eq!(board.type_at(Coord::new(3, 0)), CellType::King);
            assert_eq!(board.at(Coord::new(3, 0)), CellState::Peg);
            assert_eq!(board.type_at(Coord::new(3, 6)), CellType::Teleport);
        }
    }

    #[test]
    fn test_rejections() {
        let mut game = Game::new(GameConfig::default(), 42);
        let err = game.try_move(Coord::new(2, 3), Coord::new(3, 3)).unwrap_err();
        assert_eq!(
            err,
            MoveRejected::IllegalJump {
                from: Coord::new(2, 3),
                to: Coord::new(3, 3)
            }
        );
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.history_depth(), 1);
    }

    #[test]
    fn test_chain_blocks_next_move_until_settled() {
        let mut board = cleared(GameMode::Classic);
        for (row, col) in [(3, 1), (3, 2), (1, 3), (2, 3), (0, 2), (0, 4)] {
            board.set(Coord::new(row, col), CellState::Peg);
        }
        board.set_type(Coord::new(3, 3), CellType::Ice);
        let mut game = game_from(GameMode::Classic, board);

        let outcome = game.try_move(Coord::new(3, 1), Coord::new(3, 3)).unwrap();
        assert_eq!(outcome.slide, Some(Coord::new(3, 4)));
        assert!(game.chain_active());
        assert_eq!(
            game.try_move(Coord::new(1, 3), Coord::new(3, 3)),
            Err(MoveRejected::ChainActive)
        );

        game.settle_chain();
        assert!(game.try_move(Coord::new(1, 3), Coord::new(3, 3)).is_ok());
    }

    #[test]
    fn test_undo_restores_and_keeps_move_count() {
        let mut game = Game::new(GameConfig::default(), 42);
        let start = game.floors().clone();

        game.try_move(Coord::new(1, 3), Coord::new(3, 3)).unwrap();
        assert_eq!(game.peg_count(), 31);

        assert!(game.undo());
        assert_eq!(game.floors(), &start);
        assert_eq!(game.peg_count(), 32);
        assert_eq!(game.move_count(), 1);
        assert!(!game.undo());
    }

    #[test]
    fn test_teleport_switches_active_floor() {
        let mut game = Game::new(GameConfig::new().with_floors(2), 3);
        let mut floors = game.floors().clone();
        for (_, board) in floors.iter_mut() {
            for at in Coord::all() {
                board.set(at, CellState::Empty);
            }
        }
        for (row, col) in [(3, 4), (3, 5), (4, 0), (4, 1)] {
            floors[FloorId::GROUND].set(Coord::new(row, col), CellState::Peg);
        }
        game = Game::with_floors(*game.config(), floors, 3);

        let outcome = game.try_move(Coord::new(3, 4), Coord::new(3, 6)).unwrap();
        assert_eq!(outcome.final_floor(), FloorId::new(1));
        assert_eq!(game.active_floor(), FloorId::new(1));
        assert!(game.chain_active());
        assert_eq!(game.peg_count(), 3);

        // undo brings the active floor back with the pieces
        assert!(game.undo());
        assert_eq!(game.active_floor(), FloorId::GROUND);
        assert!(!game.chain_active());
    }

    #[test]
    fn test_select_floor() {
        let mut game = Game::new(GameConfig::new().with_floors(3), 9);
        assert!(game.select_floor(FloorId::new(2)));
        assert_eq!(game.active_floor(), FloorId::new(2));
        assert!(!game.select_floor(FloorId::new(3)));
        assert_eq!(game.active_floor(), FloorId::new(2));
    }

    #[test]
    fn test_over_is_terminal() {
        let mut board = cleared(GameMode::Classic);
        board.set(Coord::new(3, 1), CellState::Peg);
        board.set(Coord::new(3, 2), CellState::Peg);
        let mut game = game_from(GameMode::Classic, board);

        game.try_move(Coord::new(3, 1), Coord::new(3, 3)).unwrap();
        assert_eq!(game.result(), Some(GameResult::Win));
        assert_eq!(
            game.try_move(Coord::new(3, 3), Coord::new(3, 1)),
            Err(MoveRejected::GameOver)
        );
        assert!(!game.undo());
        assert!(!game.select_floor(FloorId::GROUND));

        let report = game.report();
        assert!(report.win);
        assert_eq!(report.pegs_remaining, 1);
        assert_eq!(report.move_count, 1);
    }

    #[test]
    fn test_restart_rebuilds() {
        let mut game = Game::new(GameConfig::new().with_mode(GameMode::Chess), 11);
        let (from, to) = game.legal_moves()[0];
        game.try_move(from, to).unwrap();

        game.restart();
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.history_depth(), 1);
        assert_eq!(game.active_floor(), FloorId::GROUND);
        assert_eq!(game.kings_alive(), 1);
        assert_eq!(game.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_reconfigure_changes_floor_count() {
        let mut game = Game::new(GameConfig::default(), 5);
        game.reconfigure(GameConfig::new().with_floors(3).with_mode(GameMode::Lattice));
        assert_eq!(game.floors().floor_count(), 3);
        assert_eq!(game.goal_cells().len(), 3);
        assert_eq!(game.pegs_on_goal(), 0);
    }

    #[test]
    fn test_chess_loss_reason() {
        let mut board = cleared(GameMode::Chess);
        board.set(Coord::new(3, 1), CellState::Peg);
        board.set(Coord::new(3, 2), CellState::Peg);
        board.set_type(Coord::new(3, 2), CellType::King);
        board.set(Coord::new(0, 2), CellState::Peg);
        board.set(Coord::new(1, 2), CellState::Peg);
        let mut game = game_from(GameMode::Chess, board);

        game.try_move(Coord::new(3, 1), Coord::new(3, 3)).unwrap();
        assert!(game.has_any_move());
        assert_eq!(game.result(), Some(GameResult::Loss(LossReason::KingCaptured)));
    }

    #[test]
    fn test_out_of_range_floor_count_falls_back() {
        for floors in [0, 4, 7] {
            let config = GameConfig {
                floors,
                ..GameConfig::default()
            };
            let game = Game::new(config, 1);
            assert_eq!(game.floors().floor_count(), 1);
            assert_eq!(game.config().floors, 1);
            assert_eq!(game.peg_count(), 32);
        }

        let mut game = Game::new(GameConfig::new().with_floors(2), 1);
        game.reconfigure(GameConfig {
            floors: 0,
            ..GameConfig::default()
        });
        assert_eq!(game.floors().floor_count(), 1);
    }

    #[test]
    #[should_panic(expected = "Floor count must be 1-3")]
    fn test_with_floors_rejects_bad_count() {
        let config = GameConfig {
            floors: 4,
            ..GameConfig::default()
        };
        let board = cleared(GameMode::Classic);
        let _ = Game::with_floors(config, FloorMap::from_vec(vec![board; 4]), 0);
    }

    #[test]
    fn test_stuck_start_is_over() {
        let mut board = cleared(GameMode::Classic);
        board.set(Coord::new(0, 2), CellState::Peg);
        board.set(Coord::new(6, 4), CellState::Peg);
        let mut game = game_from(GameMode::Classic, board);

        assert_eq!(game.result(), Some(GameResult::Loss(LossReason::PegsRemaining(2))));
        assert_eq!(game.move_count(), 0);
        assert_eq!(
            game.try_move(Coord::new(0, 2), Coord::new(2, 2)),
            Err(MoveRejected::GameOver)
        );
    }

    #[test]
    fn test_generated_start_is_over_only_when_stuck() {
        let config = GameConfig::new().with_ice().with_swamp().with_barrier();
        for shape in [MapShape::Cross, MapShape::BigCross, MapShape::Triangle, MapShape::Diamond] {
            for seed in 0..300 {
                let game = Game::new(config.with_shape(shape), seed);
                assert_eq!(game.is_over(), !game.has_any_move(), "{shape:?} seed {seed}");
                assert_eq!(game.move_count(), 0);
            }
        }
    }
}
