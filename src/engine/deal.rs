//! Deterministic dealing and layout validation.
//!
//! A deal builds two cards per symbol and shuffles them with a seeded RNG,
//! so the same seed always produces the same board. Validation rejects
//! malformed layouts (odd length, unpaired symbol) at construction time -
//! those indicate a setup bug, not a runtime condition, and must abort round
//! creation rather than be silently corrected.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashMap;
use thiserror::Error;

use super::card::{Card, CardId, SymbolId};

/// Deterministic RNG for dealing.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
/// Same seed produces an identical board layout.
#[derive(Clone, Debug)]
pub struct DealRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DealRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Get the seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

/// Fatal round-construction error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DealError {
    /// A round needs at least one symbol pair.
    #[error("round must contain at least one symbol pair")]
    NoSymbols,

    /// The layout has an odd number of cards.
    #[error("card count must be even, got {count}")]
    OddCardCount {
        /// Number of cards in the rejected layout.
        count: usize,
    },

    /// A symbol does not appear exactly twice.
    #[error("{symbol} appears {count} times, expected exactly 2")]
    UnpairedSymbol {
        /// The offending symbol.
        symbol: SymbolId,
        /// How many cards carried it.
        count: usize,
    },
}

/// Deal a shuffled board with `symbol_count` pairs.
///
/// Produces `2 * symbol_count` face-down cards, two per symbol, with card
/// IDs assigned by final grid position.
pub(crate) fn deal(symbol_count: u8, rng: &mut DealRng) -> Vec<Card> {
    let mut symbols: Vec<SymbolId> = (0..symbol_count)
        .flat_map(|s| [SymbolId::new(s), SymbolId::new(s)])
        .collect();
    rng.shuffle(&mut symbols);

    symbols
        .into_iter()
        .enumerate()
        .map(|(i, symbol)| Card::new(CardId::new(i as u16), symbol))
        .collect()
}

/// Validate that a symbol layout forms a legal board.
///
/// Every symbol must appear exactly twice and the layout must be non-empty
/// with even length.
pub(crate) fn validate_layout(symbols: &[SymbolId]) -> Result<(), DealError> {
    if symbols.is_empty() {
        return Err(DealError::NoSymbols);
    }
    if symbols.len() % 2 != 0 {
        return Err(DealError::OddCardCount {
            count: symbols.len(),
        });
    }

    let mut counts: FxHashMap<SymbolId, usize> = FxHashMap::default();
    for &symbol in symbols {
        *counts.entry(symbol).or_insert(0) += 1;
    }
    for (&symbol, &count) in &counts {
        if count != 2 {
            return Err(DealError::UnpairedSymbol { symbol, count });
        }
    }

    Ok(())
}
