use super::hand_analysis::HandAnalysis;
use super::straight_info::straight_high_card;
use crate::cards::Rank;
use crate::evaluator::HandRanking;
use crate::hand::Hand;
use core::cmp::Ordering;

/// Order two hands that share `category`.
///
/// Both hands must classify to `category`; otherwise the result is
/// unspecified (but this never panics). `Equal` is a genuine split.
///
/// ```
/// use poker_eval::cards::{Card, Rank::*, Suit::*};
/// use poker_eval::evaluator::{compare_tie_break, HandRanking};
/// use poker_eval::hand::Hand;
/// use std::cmp::Ordering;
///
/// let kings = Hand::new([
///     Card::new(King, Clubs), Card::new(King, Hearts),
///     Card::new(Nine, Spades), Card::new(Seven, Diamonds), Card::new(Two, Clubs),
/// ]);
/// let queens = Hand::new([
///     Card::new(Queen, Clubs), Card::new(Queen, Hearts),
///     Card::new(Ace, Spades), Card::new(Seven, Hearts), Card::new(Two, Diamonds),
/// ]);
/// assert_eq!(compare_tie_break(HandRanking::OnePair, &kings, &queens), Ordering::Greater);
/// ```
pub fn compare_tie_break(category: HandRanking, hand1: &Hand, hand2: &Hand) -> Ordering {
    let a = HandAnalysis::new(hand1);
    let b = HandAnalysis::new(hand2);

    match category {
        HandRanking::HighCard | HandRanking::Flush => compare_high_cards(&a, &b),
        HandRanking::OnePair => compare_groups(&a, &b, 2),
        HandRanking::TwoPair => compare_two_pairs(&a, &b),
        HandRanking::ThreeOfAKind => compare_groups(&a, &b, 3),
        HandRanking::Straight | HandRanking::StraightFlush => compare_straights(&a, &b),
        HandRanking::FullHouse => compare_full_houses(&a, &b),
        HandRanking::FourOfAKind => compare_groups(&a, &b, 4),
        HandRanking::RoyalFlush => Ordering::Equal,
    }
}

fn ranks_desc(analysis: &HandAnalysis) -> Vec<Rank> {
    analysis.sorted_cards.iter().rev().map(|c| c.rank()).collect()
}

/// First differing position decides; a shorter list that is a prefix ties.
fn compare_rank_lists(a: &[Rank], b: &[Rank]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| x.cmp(y))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn compare_high_cards(a: &HandAnalysis, b: &HandAnalysis) -> Ordering {
    compare_rank_lists(&ranks_desc(a), &ranks_desc(b))
}

/// Pair / trips / quads: the group of exactly `size` cards, then every other
/// group's rank as a kicker, highest first.
fn compare_groups(a: &HandAnalysis, b: &HandAnalysis, size: usize) -> Ordering {
    let group_a = a.rank_groups.rank_of_size(size);
    let group_b = b.rank_groups.rank_of_size(size);

    group_a.cmp(&group_b).then_with(|| {
        compare_rank_lists(
            &a.rank_groups.ranks_excluding_size(size),
            &b.rank_groups.ranks_excluding_size(size),
        )
    })
}

fn compare_two_pairs(a: &HandAnalysis, b: &HandAnalysis) -> Ordering {
    let pairs_a = a.rank_groups.ranks_of_size(2);
    let pairs_b = b.rank_groups.ranks_of_size(2);

    // High pair, then low pair
    pairs_a
        .first()
        .cmp(&pairs_b.first())
        .then_with(|| pairs_a.get(1).cmp(&pairs_b.get(1)))
        .then_with(|| a.rank_groups.rank_of_size(1).cmp(&b.rank_groups.rank_of_size(1)))
}

fn compare_straights(a: &HandAnalysis, b: &HandAnalysis) -> Ordering {
    let high_a = straight_high_card(a.sorted_cards.iter().map(|c| c.rank()));
    let high_b = straight_high_card(b.sorted_cards.iter().map(|c| c.rank()));
    high_a.cmp(&high_b)
}

fn compare_full_houses(a: &HandAnalysis, b: &HandAnalysis) -> Ordering {
    a.rank_groups
        .rank_of_size(3)
        .cmp(&b.rank_groups.rank_of_size(3))
        .then_with(|| a.rank_groups.rank_of_size(2).cmp(&b.rank_groups.rank_of_size(2)))
}
