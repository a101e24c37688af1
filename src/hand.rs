use crate::cards::Card;
use std::fmt;

/// Number of cards in an evaluated poker hand.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("hand must contain exactly 5 cards, got {0}")]
    WrongSize(usize),
    #[error("not enough cards: need at least {needed}, got {got}")]
    NotEnoughCards { needed: usize, got: usize },
}

/// Exactly five cards, in the order the caller supplied them.
///
/// Duplicate cards are not rejected; the evaluator classifies whatever
/// multiset it is given.
///
/// ```
/// use poker_eval::cards::{Card, Rank, Suit};
/// use poker_eval::hand::{Hand, HandError};
///
/// let cards = vec![
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Spades),
///     Card::new(Rank::Queen, Suit::Spades),
///     Card::new(Rank::Jack, Suit::Spades),
/// ];
/// assert_eq!(Hand::try_from(cards.as_slice()), Err(HandError::WrongSize(4)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub const fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self(cards)
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.0.iter()
    }

    /// True when both hands hold the same cards, ignoring order.
    pub fn same_cards(&self, other: &Hand) -> bool {
        let mut a = self.0;
        let mut b = other.0;
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }
}

impl From<[Card; HAND_SIZE]> for Hand {
    fn from(cards: [Card; HAND_SIZE]) -> Self {
        Self(cards)
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = HandError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        <[Card; HAND_SIZE]>::try_from(cards).map(Self).map_err(|_| HandError::WrongSize(cards.len()))
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Hand::try_from(cards.as_slice())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn five() -> Vec<Card> {
        vec![
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Three, Suit::Clubs),
            Card::new(Rank::Four, Suit::Clubs),
            Card::new(Rank::Five, Suit::Clubs),
            Card::new(Rank::Seven, Suit::Hearts),
        ]
    }

    #[test]
    fn try_from_checks_length() {
        let mut cards = five();
        assert!(Hand::try_from(cards.as_slice()).is_ok());

        cards.push(Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(Hand::try_from(cards.clone()), Err(HandError::WrongSize(6)));

        cards.truncate(4);
        assert_eq!(Hand::try_from(cards), Err(HandError::WrongSize(4)));
    }

    #[test]
    fn keeps_caller_order_and_duplicates() {
        let dup = Card::new(Rank::Ace, Suit::Spades);
        let hand = Hand::new([dup, dup, dup, dup, dup]);
        assert_eq!(hand.cards(), &[dup; 5]);

        let hand = Hand::try_from(five()).unwrap();
        assert_eq!(hand.as_slice(), five().as_slice());
    }

    #[test]
    fn same_cards_ignores_order() {
        let a = Hand::try_from(five()).unwrap();
        let mut rev = five();
        rev.reverse();
        let b = Hand::try_from(rev).unwrap();
        assert_ne!(a, b);
        assert!(a.same_cards(&b));
    }

    #[test]
    fn display_lists_short_cards() {
        let hand = Hand::try_from(five()).unwrap();
        assert_eq!(hand.to_string(), "2c 3c 4c 5c 7h");
    }
}
