//! Move resolution - playing a jump and its follow-up effects.
//!
//! The `MoveResolver` runs one player action to its final state:
//! 1. The base jump on the active floor
//! 2. An ice slide of one more cell, if the piece landed on ice and the way is clear
//! 3. A teleport to the same cell on the next floor, if the piece came to rest
//!    on a teleport tile and the destination is empty
//!
//! Terrain is read before the piece arrives. A King piece overwrites the cell
//! type with its marker on landing, yet still slides and teleports.

use log::trace;

use super::{MoveOutcome, TeleportHop};
use crate::board::Floors;
use crate::core::{CellType, Coord, Direction, FloorId};

/// Resolves jumps across floors.
pub struct MoveResolver;

impl MoveResolver {
    /// Play `from → to` on `floor` and every effect it chains into.
    ///
    /// Returns `None`, with nothing changed, if the jump is illegal or the
    /// floor does not exist.
    pub fn resolve(floors: &mut Floors, floor: FloorId, from: Coord, to: Coord) -> Option<MoveOutcome> {
        let floor_count = floors.floor_count();
        let board = floors.get_mut(floor)?;
        if !board.can_jump(from, to) {
            return None;
        }
        let direction = Direction::of_jump(from, to)?;
        let captured = from.step(direction, 1);

        let carried_king = board.type_at(from) == CellType::King;
        let captured_king = board.type_at(captured) == CellType::King;
        let mut terrain = board.type_at(to);
        board.apply_jump(from, to);

        let mut position = to;
        let mut slide = None;
        if terrain == CellType::Ice {
            let next = to.step(direction, 1);
            let ahead = board.cell(next);
            if ahead.is_empty() && ahead.kind != CellType::Barrier {
                let king = board.lift_peg(to);
                board.drop_peg(next, king);
                trace!("slid on ice {to} -> {next}");
                terrain = ahead.kind;
                position = next;
                slide = Some(next);
            }
        }

        let teleport = if terrain == CellType::Teleport && floor_count > 1 {
            Self::teleport(floors, floor, position)
        } else {
            None
        };

        Some(MoveOutcome {
            floor,
            from,
            captured,
            landing: to,
            slide,
            teleport,
            carried_king,
            captured_king,
        })
    }

    /// Send the peg at `cell` to the same cell one floor up, if it is empty there.
    fn teleport(floors: &mut Floors, floor: FloorId, cell: Coord) -> Option<TeleportHop> {
        let dest = floor.next(floors.floor_count());
        if dest == floor || !floors.get(dest)?.cell(cell).is_empty() {
            return None;
        }

        let (source, target) = floors.pair_mut(floor, dest);
        let king = source.lift_peg(cell);
        target.drop_peg(cell, king);
        trace!("teleported {cell} from {floor} to {dest}");

        Some(TeleportHop { floor: dest, cell })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::{CellState, FloorMap, GameMode, GameRng, MapShape, SpecialConfig};

    /// `count` cross floors with every valid cell emptied.
    fn empty_floors(count: usize) -> Floors {
        let mut rng = GameRng::new(0);
        FloorMap::new(count, |_| {
            let mut board = Board::new(GameMode::Classic, MapShape::Cross, SpecialConfig::default(), &mut rng);
            for at in Coord::all() {
                board.set(at, CellState::Empty);
            }
            board
        })
    }

    fn place(floors: &mut Floors, floor: u8, row: i32, col: i32) {
        floors[FloorId::new(floor)].set(Coord::new(row, col), CellState::Peg);
    }

    fn total_pegs(floors: &Floors) -> usize {
        floors.values().map(Board::count_pegs).sum()
    }

    #[test]
    fn test_plain_jump() {
        let mut floors = empty_floors(1);
        place(&mut floors, 0, 3, 1);
        place(&mut floors, 0, 3, 2);

        let outcome = MoveResolver::resolve(&mut floors, FloorId::GROUND, Coord::new(3, 1), Coord::new(3, 3)).unwrap();
        assert!(!outcome.is_chained());
        assert_eq!(outcome.captured, Coord::new(3, 2));
        assert_eq!(floors[FloorId::GROUND].at(Coord::new(3, 3)), CellState::Peg);
        assert_eq!(total_pegs(&floors), 1);
    }

    #[test]
    fn test_illegal_jump_changes_nothing() {
        let mut floors = empty_floors(2);
        place(&mut floors, 0, 3, 1);
        let before = floors.clone();

        assert!(MoveResolver::resolve(&mut floors, FloorId::GROUND, Coord::new(3, 1), Coord::new(3, 3)).is_none());
        assert!(MoveResolver::resolve(&mut floors, FloorId::new(5), Coord::new(3, 1), Coord::new(3, 3)).is_none());
        assert_eq!(floors, before);
    }

    #[test]
    fn test_ice_slide() {
        let mut floors = empty_floors(1);
        place(&mut floors, 0, 3, 1);
        place(&mut floors, 0, 3, 2);
        floors[FloorId::GROUND].set_type(Coord::new(3, 3), CellType::Ice);

        let outcome = MoveResolver::resolve(&mut floors, FloorId::GROUND, Coord::new(3, 1), Coord::new(3, 3)).unwrap();
        assert_eq!(outcome.slide, Some(Coord::new(3, 4)));
        let board = &floors[FloorId::GROUND];
        assert_eq!(board.at(Coord::new(3, 3)), CellState::Empty);
        assert_eq!(board.at(Coord::new(3, 4)), CellState::Peg);
        assert_eq!(board.type_at(Coord::new(3, 3)), CellType::Ice);
    }

    #[test]
    fn test_ice_blocked_by_peg_barrier_or_edge() {
        // peg ahead
        let mut floors = empty_floors(1);
        place(&mut floors, 0, 3, 1);
        place(&mut floors, 0, 3, 2);
        place(&mut floors, 0, 3, 4);
        floors[FloorId::GROUND].set_type(Coord::new(3, 3), CellType::Ice);
        let outcome = MoveResolver::resolve(&mut floors, FloorId::GROUND, Coord::new(3, 1), Coord::new(3, 3)).unwrap();
        assert_eq!(outcome.slide, None);
        assert_eq!(floors[FloorId::GROUND].at(Coord::new(3, 3)), CellState::Peg);

        // barrier ahead
        let mut floors = empty_floors(1);
        place(&mut floors, 0, 3, 1);
        place(&mut floors, 0, 3, 2);
        floors[FloorId::GROUND].set_type(Coord::new(3, 3), CellType::Ice);
        floors[FloorId::GROUND].set_type(Coord::new(3, 4), CellType::Barrier);
        let outcome = MoveResolver::resolve(&mut floors, FloorId::GROUND, Coord::new(3, 1), Coord::new(3, 3)).unwrap();
        assert_eq!(outcome.slide, None);

        // grid edge
        let mut floors = empty_floors(1);
        place(&mut floors, 0, 3, 4);
        place(&mut floors, 0, 3, 5);
        floors[FloorId::GROUND].set_type(Coord::new(3, 6), CellType::Ice);
        let outcome = MoveResolver::resolve(&mut floors, FloorId::GROUND, Coord::new(3, 4), Coord::new(3, 6)).unwrap();
        assert_eq!(outcome.slide, None);
        assert_eq!(floors[FloorId::GROUND].at(Coord::new(3, 6)), CellState::Peg);
    }

    #[test]
    fn test_teleport_to_next_floor() {
        let mut floors = empty_floors(2);
        place(&mut floors, 1, 3, 1);
        place(&mut floors, 1, 3, 2);
        for (_, board) in floors.iter_mut() {
            board.set_type(Coord::new(3, 3), CellType::Teleport);
        }

        // Floor 1 wraps around to floor 0.
        let outcome = MoveResolver::resolve(&mut floors, FloorId::new(1), Coord::new(3, 1), Coord::new(3, 3)).unwrap();
        assert_eq!(
            outcome.teleport,
            Some(TeleportHop {
                floor: FloorId::GROUND,
                cell: Coord::new(3, 3)
            })
        );
        assert_eq!(floors[FloorId::new(1)].at(Coord::new(3, 3)), CellState::Empty);
        assert_eq!(floors[FloorId::GROUND].at(Coord::new(3, 3)), CellState::Peg);
        assert_eq!(total_pegs(&floors), 1);
    }

    #[test]
    fn test_teleport_blocked_by_occupied_destination() {
        let mut floors = empty_floors(2);
        place(&mut floors, 0, 3, 1);
        place(&mut floors, 0, 3, 2);
        place(&mut floors, 1, 3, 3);
        floors[FloorId::GROUND].set_type(Coord::new(3, 3), CellType::Teleport);

        let outcome = MoveResolver::resolve(&mut floors, FloorId::GROUND, Coord::new(3, 1), Coord::new(3, 3)).unwrap();
        assert_eq!(outcome.teleport, None);
        assert_eq!(floors[FloorId::GROUND].at(Coord::new(3, 3)), CellState::Peg);
    }

    #[test]
    fn test_teleport_ignored_on_single_floor() {
        let mut floors = empty_floors(1);
        place(&mut floors, 0, 3, 1);
        place(&mut floors, 0, 3, 2);
        floors[FloorId::GROUND].set_type(Coord::new(3, 3), CellType::Teleport);

        let outcome = MoveResolver::resolve(&mut floors, FloorId::GROUND, Coord::new(3, 1), Coord::new(3, 3)).unwrap();
        assert_eq!(outcome.teleport, None);
    }

    #[test]
    fn test_king_slides_then_teleports() {
        let mut floors = empty_floors(3);
        place(&mut floors, 0, 3, 1);
        place(&mut floors, 0, 3, 2);
        floors[FloorId::GROUND].set_type(Coord::new(3, 1), CellType::King);
        floors[FloorId::GROUND].set_type(Coord::new(3, 3), CellType::Ice);
        floors[FloorId::GROUND].set_type(Coord::new(3, 4), CellType::Teleport);

        let outcome = MoveResolver::resolve(&mut floors, FloorId::GROUND, Coord::new(3, 1), Coord::new(3, 3)).unwrap();
        assert!(outcome.carried_king);
        assert_eq!(outcome.slide, Some(Coord::new(3, 4)));
        assert_eq!(outcome.final_floor(), FloorId::new(1));
        assert_eq!(outcome.final_cell(), Coord::new(3, 4));

        let ground = &floors[FloorId::GROUND];
        assert_eq!(ground.kings_alive(), 0);
        assert_eq!(ground.cells_of_type(CellType::King).count(), 0);
        let upper = &floors[FloorId::new(1)];
        assert_eq!(upper.type_at(Coord::new(3, 4)), CellType::King);
        assert_eq!(upper.kings_alive(), 1);
    }

    #[test]
    fn test_captured_king_reported() {
        let mut floors = empty_floors(1);
        place(&mut floors, 0, 3, 1);
        place(&mut floors, 0, 3, 2);
        floors[FloorId::GROUND].set_type(Coord::new(3, 2), CellType::King);

        let outcome = MoveResolver::resolve(&mut floors, FloorId::GROUND, Coord::new(3, 1), Coord::new(3, 3)).unwrap();
        assert!(outcome.captured_king);
        assert!(!outcome.carried_king);
        assert_eq!(floors[FloorId::GROUND].kings_alive(), 0);
    }
}
