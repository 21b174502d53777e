//! Card identity and visual state.
//!
//! A card is one physical tile on the board. Its `VisualState` is the single
//! source of truth for what the tile shows: `Hidden` renders the back,
//! `Revealed` and `Matched` render the symbol face. There is deliberately no
//! separate orientation/flip attribute anywhere in the model - presentation
//! derives everything from this one enum.

use serde::{Deserialize, Serialize};

/// Unique card identifier - the card's position in the dealt grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Get the grid index for this card.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Identifier of the animal pair a card belongs to.
///
/// Exactly two cards in a round share a given `SymbolId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u8);

impl SymbolId {
    /// Create a new symbol ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// What a card currently shows.
///
/// Legal transitions: `Hidden -> Revealed -> Matched`, and
/// `Revealed -> Hidden` on a mismatch revert. `Matched` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualState {
    /// Face down, back shown.
    Hidden,
    /// Face up, awaiting pair resolution.
    Revealed,
    /// Face up permanently, pair found.
    Matched,
}

/// A card in a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Position in the grid.
    pub id: CardId,

    /// Which pair this card belongs to.
    pub symbol: SymbolId,

    /// Current visual state. Governs both content and styling.
    pub visual: VisualState,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(id: CardId, symbol: SymbolId) -> Self {
        Self {
            id,
            symbol,
            visual: VisualState::Hidden,
        }
    }

    /// Is this card face down?
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.visual == VisualState::Hidden
    }

    /// Is this card revealed but not yet resolved?
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.visual == VisualState::Revealed
    }

    /// Has this card's pair been found?
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.visual == VisualState::Matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_is_hidden() {
        let card = Card::new(CardId::new(3), SymbolId::new(1));

        assert_eq!(card.id, CardId::new(3));
        assert_eq!(card.symbol, SymbolId::new(1));
        assert!(card.is_hidden());
        assert!(!card.is_revealed());
        assert!(!card.is_matched());
    }

    #[test]
    fn test_card_id_index() {
        assert_eq!(CardId::new(0).index(), 0);
        assert_eq!(CardId::new(15).index(), 15);
    }

    #[test]
    fn test_display() {
        assert_eq!(CardId::new(2).to_string(), "Card(2)");
        assert_eq!(SymbolId::new(7).to_string(), "Symbol(7)");
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(CardId::new(5), SymbolId::new(2));
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
