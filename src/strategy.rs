//! The computer opponent's card-selection heuristic.

use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Rank, Suit};

/// A card-selection function for the computer seat.
///
/// Given the hand, the table's top card (`None` when the table is empty),
/// and the game's RNG, returns the card to play. The returned card must be
/// one of the cards in the hand.
pub type Strategy = fn(&[Card], Option<Card>, &mut ChaCha8Rng) -> Card;

/// Pool sizes above this only consider same-suit groups when no capture is
/// possible; at or below it, same-rank groups are tried as a fallback.
const OFFSUIT_THRESHOLD: usize = 4;

/// Picks the card the computer plays.
///
/// If any cards in hand match the top card by suit or rank, one of those
/// candidates is played (a guaranteed capture): a lone candidate is played
/// directly, several are narrowed by the group preference below. With no
/// candidates, or an empty table, the preference is applied to the whole
/// hand instead.
///
/// Group preference over a pool: play a random card from the first suit (in
/// declaration order) holding at least two pool cards; for pools of four or
/// fewer, fall back to the first rank holding at least two, then to a random
/// card. Larger pools skip the rank fallback.
///
/// # Panics
///
/// Panics if `hand` is empty. The engine never calls the strategy with an
/// empty hand.
#[must_use]
pub fn choose_card(hand: &[Card], top: Option<Card>, rng: &mut ChaCha8Rng) -> Card {
    assert!(!hand.is_empty(), "strategy called with an empty hand");

    let Some(top) = top else {
        return prefer_grouped(hand, rng);
    };

    let candidates: Vec<Card> = hand
        .iter()
        .copied()
        .filter(|card| card.matches(top))
        .collect();

    match candidates.len() {
        0 => prefer_grouped(hand, rng),
        1 => candidates[0],
        _ => prefer_grouped(&candidates, rng),
    }
}

/// Applies the same-suit/same-rank group preference to `pool`.
fn prefer_grouped(pool: &[Card], rng: &mut ChaCha8Rng) -> Card {
    if pool.len() > OFFSUIT_THRESHOLD {
        // Five or more cards over four suits always have a suit pair, so the
        // random fallback is unreachable in practice.
        return pick_suit_group(pool, rng).unwrap_or_else(|| pick_random(pool, rng));
    }

    pick_suit_group(pool, rng)
        .or_else(|| pick_rank_group(pool, rng))
        .unwrap_or_else(|| pick_random(pool, rng))
}

/// Picks a random card from the first suit (declaration order) that holds at
/// least two cards in `pool`.
fn pick_suit_group(pool: &[Card], rng: &mut ChaCha8Rng) -> Option<Card> {
    for suit in Suit::ALL {
        let group: Vec<Card> = pool.iter().copied().filter(|c| c.suit == suit).collect();
        if group.len() >= 2 {
            return group.choose(rng).copied();
        }
    }
    None
}

/// Picks a random card from the first rank (declaration order) that holds at
/// least two cards in `pool`.
fn pick_rank_group(pool: &[Card], rng: &mut ChaCha8Rng) -> Option<Card> {
    for rank in Rank::ALL {
        let group: Vec<Card> = pool.iter().copied().filter(|c| c.rank == rank).collect();
        if group.len() >= 2 {
            return group.choose(rng).copied();
        }
    }
    None
}

/// Picks a uniformly random card from a non-empty pool.
fn pick_random(pool: &[Card], rng: &mut ChaCha8Rng) -> Card {
    *pool.choose(rng).unwrap_or(&pool[0])
}
