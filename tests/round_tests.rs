//! Round engine tests.
//!
//! These tests exercise the full reveal/resolve lifecycle of a round,
//! including the canonical four-card walkthrough.

use pairs_engine::{
    Card, CardId, DealError, InvalidMove, MatchOutcome, Round, RoundStatus, SymbolId,
};

fn symbols(ids: &[u8]) -> Vec<SymbolId> {
    ids.iter().copied().map(SymbolId::new).collect()
}

/// Full four-card game: mismatch first, then both pairs.
///
/// Board layout [A, B, A, B].
#[test]
fn test_four_card_walkthrough() {
    let mut round = Round::from_layout(&symbols(&[0, 1, 0, 1])).unwrap();

    // Reveal A then B: a mismatch that reverts both.
    round.reveal(CardId::new(0)).unwrap();
    round.reveal(CardId::new(1)).unwrap();
    assert_eq!(round.resolve_pending(), Some(MatchOutcome::Mismatched));
    assert!(round.card(CardId::new(0)).unwrap().is_hidden());
    assert!(round.card(CardId::new(1)).unwrap().is_hidden());
    assert_eq!(round.move_count(), 1);
    assert_eq!(round.matched_pairs(), 0);

    // Reveal both A cards: a match.
    round.reveal(CardId::new(0)).unwrap();
    round.reveal(CardId::new(2)).unwrap();
    assert_eq!(
        round.resolve_pending(),
        Some(MatchOutcome::Matched(SymbolId::new(0)))
    );
    assert!(round.card(CardId::new(0)).unwrap().is_matched());
    assert!(round.card(CardId::new(2)).unwrap().is_matched());
    assert_eq!(round.move_count(), 2);
    assert_eq!(round.matched_pairs(), 1);
    assert_eq!(round.status(), RoundStatus::InProgress);

    // Reveal both B cards: final match wins the round.
    round.reveal(CardId::new(1)).unwrap();
    round.reveal(CardId::new(3)).unwrap();
    assert_eq!(
        round.resolve_pending(),
        Some(MatchOutcome::Matched(SymbolId::new(1)))
    );
    assert_eq!(round.matched_pairs(), 2);
    assert_eq!(round.status(), RoundStatus::Won);
    assert!(round.is_won());
}

/// Resolving with zero or one pending card changes nothing.
#[test]
fn test_defensive_resolve_is_noop() {
    let mut round = Round::from_layout(&symbols(&[0, 1, 0, 1])).unwrap();

    assert_eq!(round.resolve_pending(), None);
    assert_eq!(round.move_count(), 0);

    round.reveal(CardId::new(2)).unwrap();
    assert_eq!(round.resolve_pending(), None);
    assert_eq!(round.move_count(), 0);
    assert_eq!(round.pending(), &[CardId::new(2)]);
}

/// A matched card can never be revealed again.
#[test]
fn test_matched_card_reveal_rejected() {
    let mut round = Round::from_layout(&symbols(&[0, 1, 0, 1])).unwrap();

    round.reveal(CardId::new(0)).unwrap();
    round.reveal(CardId::new(2)).unwrap();
    round.resolve_pending();
    assert!(round.card(CardId::new(0)).unwrap().is_matched());

    let before: Vec<Card> = round.cards().to_vec();
    assert_eq!(
        round.reveal(CardId::new(0)),
        Err(InvalidMove::CardNotHidden(CardId::new(0)))
    );
    assert_eq!(round.cards(), before.as_slice());
    assert_eq!(round.move_count(), 1);
}

/// Once the round is won, no reveal succeeds.
#[test]
fn test_won_round_rejects_all_reveals() {
    let mut round = Round::from_layout(&symbols(&[0, 0])).unwrap();

    round.reveal(CardId::new(0)).unwrap();
    round.reveal(CardId::new(1)).unwrap();
    round.resolve_pending();
    assert!(round.is_won());

    assert!(round.reveal(CardId::new(0)).is_err());
    assert!(round.reveal(CardId::new(1)).is_err());
}

/// Malformed layouts abort construction instead of being corrected.
#[test]
fn test_malformed_layouts_are_fatal() {
    assert_eq!(Round::from_layout(&[]), Err(DealError::NoSymbols));
    assert_eq!(
        Round::from_layout(&symbols(&[0, 0, 1])),
        Err(DealError::OddCardCount { count: 3 })
    );
    assert!(matches!(
        Round::from_layout(&symbols(&[0, 0, 1, 2])),
        Err(DealError::UnpairedSymbol { .. })
    ));
}

/// A dealt board always carries every symbol exactly twice.
#[test]
fn test_dealt_board_pairs_every_symbol() {
    for seed in 0..20 {
        let round = Round::deal(10, seed).unwrap();

        assert_eq!(round.cards().len(), 20);
        for s in 0..10 {
            let count = round
                .cards()
                .iter()
                .filter(|c| c.symbol == SymbolId::new(s))
                .count();
            assert_eq!(count, 2, "seed {seed}, symbol {s}");
        }
    }
}

/// Same seed, same board; different seed, (almost surely) different board.
#[test]
fn test_deal_determinism() {
    let a = Round::deal(8, 7).unwrap();
    let b = Round::deal(8, 7).unwrap();
    let c = Round::deal(8, 8).unwrap();

    assert_eq!(a.cards(), b.cards());
    assert_ne!(a.cards(), c.cards());
}

/// Playing every pair of a dealt board to completion.
#[test]
fn test_sweep_dealt_board_to_win() {
    let mut round = Round::deal(6, 42).unwrap();
    let total = round.total_symbols();

    // Cheat by reading symbols off the board, matching each pair directly.
    for s in 0..total as u8 {
        let ids: Vec<CardId> = round
            .cards()
            .iter()
            .filter(|c| c.symbol == SymbolId::new(s))
            .map(|c| c.id)
            .collect();
        round.reveal(ids[0]).unwrap();
        round.reveal(ids[1]).unwrap();
        assert_eq!(
            round.resolve_pending(),
            Some(MatchOutcome::Matched(SymbolId::new(s)))
        );
    }

    assert!(round.is_won());
    assert_eq!(round.move_count(), total);
    assert_eq!(round.matched_pairs(), total);
}
