pub(crate) mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_groups;
pub(crate) mod tie_break;

use crate::cards::Card;
use crate::hand::{Hand, HandError, HAND_SIZE};
use core::cmp::Ordering;
use std::fmt;

pub use combinations::{binomial, Combinations};
pub use tie_break::compare_tie_break;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum HandRanking {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandRanking {
    pub const ALL: [HandRanking; 10] = [
        HandRanking::HighCard,
        HandRanking::OnePair,
        HandRanking::TwoPair,
        HandRanking::ThreeOfAKind,
        HandRanking::Straight,
        HandRanking::Flush,
        HandRanking::FullHouse,
        HandRanking::FourOfAKind,
        HandRanking::StraightFlush,
        HandRanking::RoyalFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            HandRanking::HighCard => "High Card",
            HandRanking::OnePair => "One Pair",
            HandRanking::TwoPair => "Two Pair",
            HandRanking::ThreeOfAKind => "Three of a Kind",
            HandRanking::Straight => "Straight",
            HandRanking::Flush => "Flush",
            HandRanking::FullHouse => "Full House",
            HandRanking::FourOfAKind => "Four of a Kind",
            HandRanking::StraightFlush => "Straight Flush",
            HandRanking::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Hand {
    /// Classify this hand into its category.
    pub fn ranking(&self) -> HandRanking {
        detector::classify(&hand_analysis::HandAnalysis::new(self))
    }
}

/// Classify exactly five cards.
///
/// ```
/// use poker_eval::cards::{Card, Rank, Suit};
/// use poker_eval::evaluator::{evaluate_hand, HandRanking};
///
/// let wheel = [
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Two, Suit::Diamonds),
///     Card::new(Rank::Three, Suit::Clubs),
///     Card::new(Rank::Four, Suit::Hearts),
///     Card::new(Rank::Five, Suit::Spades),
/// ];
/// assert_eq!(evaluate_hand(&wheel).unwrap(), HandRanking::Straight);
/// assert!(evaluate_hand(&wheel[..4]).is_err());
/// ```
pub fn evaluate_hand(cards: &[Card]) -> Result<HandRanking, HandError> {
    Ok(Hand::try_from(cards)?.ranking())
}

/// Total order over two hands: category first, then the category's tie-break rule.
///
/// ```
/// use poker_eval::cards::{Card, Rank::*, Suit::*};
/// use poker_eval::evaluator::compare;
/// use poker_eval::hand::Hand;
/// use std::cmp::Ordering;
///
/// let straight_flush = Hand::new([
///     Card::new(Two, Spades), Card::new(Three, Spades), Card::new(Four, Spades),
///     Card::new(Five, Spades), Card::new(Six, Spades),
/// ]);
/// let royal = Hand::new([
///     Card::new(Ten, Hearts), Card::new(Jack, Hearts), Card::new(Queen, Hearts),
///     Card::new(King, Hearts), Card::new(Ace, Hearts),
/// ]);
/// assert_eq!(compare(&straight_flush, &royal), Ordering::Less);
/// ```
pub fn compare(hand1: &Hand, hand2: &Hand) -> Ordering {
    let rank1 = hand1.ranking();
    let rank2 = hand2.ranking();

    if rank1 != rank2 {
        return rank1.cmp(&rank2);
    }
    compare_tie_break(rank1, hand1, hand2)
}

/// Return `hand1` only if it strictly beats `hand2`; an exact tie returns `hand2`.
pub fn pick_winner(hand1: Hand, hand2: Hand) -> Hand {
    if compare(&hand1, &hand2).is_gt() {
        hand1
    } else {
        hand2
    }
}

/// Best five-card hand from a larger pool.
pub fn best_hand(cards: &[Card]) -> Result<Hand, HandError> {
    best_hand_of(cards, HAND_SIZE)
}

/// Search every `k`-card subset of `cards` and return the strongest.
///
/// Subsets are visited in lexicographic index order; a later subset only
/// replaces the current best when it strictly wins, so ties keep the
/// earliest. Fails when the pool has fewer than `k` cards, or when `k` is not
/// a hand size the classifier accepts.
///
/// ```
/// use poker_eval::cards::{Card, Rank::*, Suit::*};
/// use poker_eval::evaluator::{best_hand_of, HandRanking};
///
/// let seven = [
///     Card::new(Ace, Spades), Card::new(Two, Hearts), Card::new(Ace, Hearts),
///     Card::new(Nine, Clubs), Card::new(Ace, Diamonds), Card::new(Four, Clubs),
///     Card::new(Nine, Hearts),
/// ];
/// let best = best_hand_of(&seven, 5).unwrap();
/// assert_eq!(best.ranking(), HandRanking::FullHouse);
/// ```
pub fn best_hand_of(cards: &[Card], k: usize) -> Result<Hand, HandError> {
    if cards.len() < k {
        return Err(HandError::NotEnoughCards { needed: k, got: cards.len() });
    }

    let mut best: Option<Hand> = None;
    for indices in Combinations::new(cards.len(), k) {
        let subset: Vec<Card> = indices.iter().map(|&i| cards[i]).collect();
        let candidate = Hand::try_from(subset)?;

        best = Some(match best {
            Some(current) => pick_winner(candidate, current),
            None => candidate,
        });
    }

    let best = best.ok_or(HandError::WrongSize(k))?;
    log::debug!("best of {} cards: {} ({})", cards.len(), best, best.ranking());
    Ok(best)
}
