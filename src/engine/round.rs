//! The card state machine and round-resolution engine.
//!
//! `Round` owns the authoritative state of every card plus the current turn:
//! which cards are pending resolution, how many moves have been made, how
//! many pairs are found. It is purely synchronous and deterministic - no
//! timers, no I/O - which is what makes it trivially testable. The caller
//! inserts the display delay between the second reveal and
//! [`Round::resolve_pending`].
//!
//! ## Invariants
//!
//! - A card moves only `Hidden -> Revealed -> Matched`, or back
//!   `Revealed -> Hidden` on a mismatch revert. Never out of `Matched`.
//! - At most 2 cards are pending at any time.
//! - Status becomes `Won` exactly when every symbol is matched.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::card::{Card, CardId, SymbolId, VisualState};
use super::deal::{self, DealError, DealRng};

/// Round progression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Pairs remain to be found.
    InProgress,
    /// Every pair has been matched.
    Won,
}

/// A reveal request the engine cannot honor.
///
/// These arise from normal rapid user input (double-clicking a card, a third
/// click while two cards are already up), never from a programming error, so
/// the engine signals them without changing any state and the caller is free
/// to ignore them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidMove {
    /// No card with this ID exists in the round.
    #[error("{0} does not exist in this round")]
    UnknownCard(CardId),

    /// The card is already revealed or matched.
    #[error("{0} is not hidden")]
    CardNotHidden(CardId),

    /// Two cards are already awaiting resolution.
    #[error("two cards are already revealed")]
    PendingFull,
}

/// Result of comparing two pending cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// The cards shared a symbol and are now permanently matched.
    Matched(SymbolId),
    /// The cards differed and have reverted to hidden.
    Mismatched,
}

/// One play session: a dealt board and its turn state.
///
/// Created fresh per game via [`Round::deal`] (shuffle) or
/// [`Round::from_layout`] (fixed board, mainly for tests and restored games),
/// mutated only through [`Round::reveal`] and [`Round::resolve_pending`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    cards: Vec<Card>,

    /// Cards currently revealed and not yet matched, in reveal order.
    pending: SmallVec<[CardId; 2]>,

    move_count: u32,
    matched_pairs: u32,
    total_symbols: u32,
    status: RoundStatus,
}

impl Round {
    /// Deal a shuffled round with `symbol_count` pairs.
    ///
    /// Same seed, same board.
    pub fn deal(symbol_count: u8, seed: u64) -> Result<Self, DealError> {
        if symbol_count == 0 {
            return Err(DealError::NoSymbols);
        }
        let mut rng = DealRng::new(seed);
        let cards = deal::deal(symbol_count, &mut rng);
        Ok(Self::with_cards(cards, u32::from(symbol_count)))
    }

    /// Build a round from an explicit symbol layout.
    ///
    /// The layout is validated: non-empty, even length, every symbol exactly
    /// twice. Violations abort construction.
    pub fn from_layout(symbols: &[SymbolId]) -> Result<Self, DealError> {
        deal::validate_layout(symbols)?;
        let cards = symbols
            .iter()
            .enumerate()
            .map(|(i, &symbol)| Card::new(CardId::new(i as u16), symbol))
            .collect::<Vec<_>>();
        let total_symbols = (symbols.len() / 2) as u32;
        Ok(Self::with_cards(cards, total_symbols))
    }

    fn with_cards(cards: Vec<Card>, total_symbols: u32) -> Self {
        Self {
            cards,
            pending: SmallVec::new(),
            move_count: 0,
            matched_pairs: 0,
            total_symbols,
            status: RoundStatus::InProgress,
        }
    }

    // === Queries ===

    /// All cards in grid order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card by ID.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Card IDs currently revealed and unresolved, in reveal order.
    #[must_use]
    pub fn pending(&self) -> &[CardId] {
        &self.pending
    }

    /// Completed two-card comparisons so far.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Symbols fully resolved so far.
    #[must_use]
    pub fn matched_pairs(&self) -> u32 {
        self.matched_pairs
    }

    /// Number of symbol pairs on the board.
    #[must_use]
    pub fn total_symbols(&self) -> u32 {
        self.total_symbols
    }

    /// Current round status.
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Has every pair been found?
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == RoundStatus::Won
    }

    // === Operations ===

    /// Reveal a hidden card.
    ///
    /// Preconditions: the card exists, is `Hidden`, and fewer than two cards
    /// are pending. On failure nothing changes - the error is a recoverable
    /// signal for redundant or racing input.
    pub fn reveal(&mut self, id: CardId) -> Result<(), InvalidMove> {
        if self.pending.len() >= 2 {
            return Err(InvalidMove::PendingFull);
        }
        let card = self
            .cards
            .get_mut(id.index())
            .ok_or(InvalidMove::UnknownCard(id))?;
        if card.visual != VisualState::Hidden {
            return Err(InvalidMove::CardNotHidden(id));
        }

        card.visual = VisualState::Revealed;
        self.pending.push(id);
        Ok(())
    }

    /// Compare the two pending cards and commit the outcome.
    ///
    /// Match: both cards become `Matched` and `matched_pairs` increments;
    /// when the last pair falls, status flips to `Won`. Mismatch: both revert
    /// to `Hidden`. Either way the pending list is cleared and `move_count`
    /// increments by exactly one.
    ///
    /// With fewer than two cards pending this is a no-op returning `None`,
    /// so a controller may call it defensively.
    pub fn resolve_pending(&mut self) -> Option<MatchOutcome> {
        let &[first, second] = self.pending.as_slice() else {
            return None;
        };

        // Both IDs were validated by reveal().
        let first_symbol = self.cards[first.index()].symbol;
        let second_symbol = self.cards[second.index()].symbol;

        let outcome = if first_symbol == second_symbol {
            self.cards[first.index()].visual = VisualState::Matched;
            self.cards[second.index()].visual = VisualState::Matched;
            self.matched_pairs += 1;
            if self.matched_pairs == self.total_symbols {
                self.status = RoundStatus::Won;
            }
            MatchOutcome::Matched(first_symbol)
        } else {
            self.cards[first.index()].visual = VisualState::Hidden;
            self.cards[second.index()].visual = VisualState::Hidden;
            MatchOutcome::Mismatched
        };

        self.pending.clear();
        self.move_count += 1;
        Some(outcome)
    }
}
