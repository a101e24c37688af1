use crate::cards::{Card, Rank, Suit};
use std::collections::BTreeMap;

/// Minimum cards of one suit that make a flush.
const FLUSH_SIZE: usize = 5;

const ROYAL_RANKS: [Rank; 5] = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];

/// Cards bucketed by suit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitGroups {
    groups: BTreeMap<Suit, Vec<Card>>,
}

impl SuitGroups {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut groups: BTreeMap<Suit, Vec<Card>> = BTreeMap::new();
        for &card in cards {
            groups.entry(card.suit()).or_default().push(card);
        }
        Self { groups }
    }

    fn flush_groups(&self) -> impl Iterator<Item = (&Suit, &Vec<Card>)> {
        self.groups.iter().filter(|(_, cards)| cards.len() >= FLUSH_SIZE)
    }

    /// Some suit holds at least five cards.
    pub fn is_flush(&self) -> bool {
        self.flush_groups().next().is_some()
    }

    /// Some flush suit contains Ten through Ace.
    pub fn is_royal(&self) -> bool {
        self.flush_groups()
            .any(|(_, cards)| ROYAL_RANKS.iter().all(|r| cards.iter().any(|c| c.rank() == *r)))
    }
}
