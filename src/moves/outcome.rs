//! Result of one resolved move.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, FloorId};

/// Where a teleport sent the moving piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeleportHop {
    pub floor: FloorId,
    pub cell: Coord,
}

/// The full chain produced by one player jump.
///
/// Presentation layers replay it step by step (jump, then slide, then
/// teleport); the board state already reflects the final position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Floor the jump was played on.
    pub floor: FloorId,
    pub from: Coord,
    /// The jumped-over cell whose peg was removed.
    pub captured: Coord,
    /// Primary landing cell of the jump.
    pub landing: Coord,
    /// Extra cell reached by sliding off ice.
    pub slide: Option<Coord>,
    /// Destination on the next floor, if the piece teleported.
    pub teleport: Option<TeleportHop>,
    /// The moving piece is the King.
    pub carried_king: bool,
    /// The captured piece was a King.
    pub captured_king: bool,
}

impl MoveOutcome {
    /// Floor the piece ended on.
    #[must_use]
    pub fn final_floor(&self) -> FloorId {
        self.teleport.map_or(self.floor, |hop| hop.floor)
    }

    /// Cell the piece ended on.
    #[must_use]
    pub fn final_cell(&self) -> Coord {
        match (self.teleport, self.slide) {
            (Some(hop), _) => hop.cell,
            (None, Some(cell)) => cell,
            (None, None) => self.landing,
        }
    }

    /// Whether the move continued past the plain jump.
    #[must_use]
    pub fn is_chained(&self) -> bool {
        self.slide.is_some() || self.teleport.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> MoveOutcome {
        MoveOutcome {
            floor: FloorId::GROUND,
            from: Coord::new(3, 1),
            captured: Coord::new(3, 2),
            landing: Coord::new(3, 3),
            slide: None,
            teleport: None,
            carried_king: false,
            captured_king: false,
        }
    }

    #[test]
    fn test_plain_outcome() {
        let outcome = plain();
        assert!(!outcome.is_chained());
        assert_eq!(outcome.final_cell(), Coord::new(3, 3));
        assert_eq!(outcome.final_floor(), FloorId::GROUND);
    }

    #[test]
    fn test_slide_then_teleport() {
        let outcome = MoveOutcome {
            slide: Some(Coord::new(3, 4)),
            teleport: Some(TeleportHop {
                floor: FloorId::new(1),
                cell: Coord::new(3, 4),
            }),
            ..plain()
        };
        assert!(outcome.is_chained());
        assert_eq!(outcome.final_cell(), Coord::new(3, 4));
        assert_eq!(outcome.final_floor(), FloorId::new(1));
    }

    #[test]
    fn test_outcome_serde() {
        let outcome = MoveOutcome {
            slide: Some(Coord::new(3, 4)),
            ..plain()
        };
        let json = serde_json::to_string(&outcome).unwrap();
        let back: MoveOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, back);
    }
}
