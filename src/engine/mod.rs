//! The CardState Engine: card identity, dealing, and the round state machine.
//!
//! Everything here is synchronous and deterministic. The engine never owns a
//! timer - the controller layer inserts the display delay between the second
//! reveal and resolution.

pub mod card;
pub mod deal;
pub mod round;

pub use card::{Card, CardId, SymbolId, VisualState};
pub use deal::{DealError, DealRng};
pub use round::{InvalidMove, MatchOutcome, Round, RoundStatus};
