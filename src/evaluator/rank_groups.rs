use crate::cards::{Card, Rank};
use std::collections::BTreeMap;

/// Cards sharing one rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroup {
    pub rank: Rank,
    pub cards: Vec<Card>,
}

impl RankGroup {
    pub fn size(&self) -> usize {
        self.cards.len()
    }
}

/// Cards bucketed by rank, sorted by (size desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<RankGroup>,
}

impl RankGroups {
    /// Bucket `cards` by rank. Materialized once; all queries read the sorted list.
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut by_rank: BTreeMap<Rank, Vec<Card>> = BTreeMap::new();
        for &card in cards {
            by_rank.entry(card.rank()).or_default().push(card);
        }

        let mut groups: Vec<RankGroup> =
            by_rank.into_iter().map(|(rank, cards)| RankGroup { rank, cards }).collect();
        groups.sort_by(|a, b| b.size().cmp(&a.size()).then(b.rank.cmp(&a.rank)));

        Self { groups }
    }

    /// Size of the biggest group (0 for no cards).
    pub fn largest(&self) -> usize {
        self.groups.first().map_or(0, RankGroup::size)
    }

    /// Size of the second biggest group (0 if there is only one).
    pub fn second_largest(&self) -> usize {
        self.groups.get(1).map_or(0, RankGroup::size)
    }

    /// Highest rank whose group has exactly `size` cards.
    pub fn rank_of_size(&self, size: usize) -> Option<Rank> {
        self.groups.iter().find(|g| g.size() == size).map(|g| g.rank)
    }

    /// Ranks of all groups with exactly `size` cards, descending.
    pub fn ranks_of_size(&self, size: usize) -> Vec<Rank> {
        self.groups.iter().filter(|g| g.size() == size).map(|g| g.rank).collect()
    }

    /// Ranks of all groups whose size is not `size`, descending by rank.
    pub fn ranks_excluding_size(&self, size: usize) -> Vec<Rank> {
        let mut ranks: Vec<Rank> =
            self.groups.iter().filter(|g| g.size() != size).map(|g| g.rank).collect();
        ranks.sort_by(|a, b| b.cmp(a));
        ranks
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[RankGroup] {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn cards(ranks: &[Rank]) -> Vec<Card> {
        let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
        ranks.iter().enumerate().map(|(i, &r)| Card::new(r, suits[i % 4])).collect()
    }

    #[test]
    fn test_quad() {
        use Rank::*;
        let groups = RankGroups::from_cards(&cards(&[Ace, Ace, King, Ace, Ace]));
        assert_eq!(groups.largest(), 4);
        assert_eq!(groups.second_largest(), 1);
        assert_eq!(groups.rank_of_size(4), Some(Ace));
        assert_eq!(groups.rank_of_size(3), None);
        assert_eq!(groups.ranks_excluding_size(4), vec![King]);
    }

    #[test]
    fn test_full_house() {
        use Rank::*;
        let groups = RankGroups::from_cards(&cards(&[King, Ace, King, Ace, Ace]));
        assert_eq!(groups.largest(), 3);
        assert_eq!(groups.second_largest(), 2);
        assert_eq!(groups.rank_of_size(3), Some(Ace));
        assert_eq!(groups.rank_of_size(2), Some(King));
    }

    #[test]
    fn test_two_pair() {
        use Rank::*;
        let groups = RankGroups::from_cards(&cards(&[Ten, King, Ace, King, Ace]));
        assert_eq!(groups.ranks_of_size(2), vec![Ace, King]);
        assert_eq!(groups.rank_of_size(1), Some(Ten));
    }

    #[test]
    fn test_one_pair_kickers_descending() {
        use Rank::*;
        let groups = RankGroups::from_cards(&cards(&[Five, Eight, Ace, Eight, Queen]));
        assert_eq!(groups.rank_of_size(2), Some(Eight));
        assert_eq!(groups.ranks_excluding_size(2), vec![Ace, Queen, Five]);
    }

    #[test]
    fn test_sorting() {
        use Rank::*;
        let groups = RankGroups::from_cards(&cards(&[Five, Ace, Ten, Two, Two]));
        let order: Vec<(Rank, usize)> = groups.groups().iter().map(|g| (g.rank, g.size())).collect();
        assert_eq!(order, vec![(Two, 2), (Ace, 1), (Ten, 1), (Five, 1)]);
    }

    #[test]
    fn test_empty() {
        let groups = RankGroups::from_cards(&[]);
        assert_eq!(groups.largest(), 0);
        assert_eq!(groups.second_largest(), 0);
        assert!(groups.groups().is_empty());
    }
}
