//! Move resolution across floors.
//!
//! A player action is a single jump, but it can chain: the piece may slide
//! off ice, then drop through a teleport onto the next floor. `MoveResolver`
//! applies the whole chain at once and reports it as a `MoveOutcome`.

mod outcome;
mod resolver;

pub use outcome::{MoveOutcome, TeleportHop};
pub use resolver::MoveResolver;
