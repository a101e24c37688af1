use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_groups::SuitGroups;
use crate::cards::Card;
use crate::hand::{Hand, HAND_SIZE};

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Cards sorted by rank ascending; ties keep the caller's order.
    pub sorted_cards: [Card; HAND_SIZE],
    pub rank_groups: RankGroups,
    pub is_flush: bool,
    pub is_straight: bool,
    pub is_royal: bool,
}

impl HandAnalysis {
    pub fn new(hand: &Hand) -> Self {
        let mut sorted_cards = *hand.cards();
        sorted_cards.sort_by_key(|c| c.rank());

        let rank_groups = RankGroups::from_cards(&sorted_cards);
        let suit_groups = SuitGroups::from_cards(&sorted_cards);
        let StraightInfo { is_straight } =
            StraightInfo::detect(sorted_cards.iter().map(|c| c.rank()));
        let is_flush = suit_groups.is_flush();
        let is_royal = suit_groups.is_royal();

        Self { sorted_cards, rank_groups, is_flush, is_straight, is_royal }
    }
}
