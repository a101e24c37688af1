use super::hand_analysis::HandAnalysis;
use crate::evaluator::HandRanking;

/// Strategy pattern: each detector recognizes one category from a shared analysis.
pub trait CategoryDetector {
    fn category(&self) -> HandRanking;
    fn detect(&self, analysis: &HandAnalysis) -> bool;
}

// ============================================================================
// Detector Implementations (in decision order: first match wins)
// ============================================================================

/// Royal Flush: Ten through Ace, all same suit
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn category(&self) -> HandRanking {
        HandRanking::RoyalFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush && analysis.is_straight && analysis.is_royal
    }
}

/// Straight Flush: Five consecutive ranks, all same suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> HandRanking {
        HandRanking::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush && analysis.is_straight
    }
}

/// Four of a Kind: Four cards of the same rank
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> HandRanking {
        HandRanking::FourOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.largest() == 4
    }
}

/// Full House: Three of a kind plus a pair
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> HandRanking {
        HandRanking::FullHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.largest() == 3 && analysis.rank_groups.second_largest() >= 2
    }
}

/// Flush: All five cards of the same suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> HandRanking {
        HandRanking::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush
    }
}

/// Straight: Five consecutive ranks (not all same suit)
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> HandRanking {
        HandRanking::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_straight
    }
}

/// Three of a Kind: Three cards of the same rank
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> HandRanking {
        HandRanking::ThreeOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.largest() == 3
    }
}

/// Two Pair: Two pairs of cards
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> HandRanking {
        HandRanking::TwoPair
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.largest() == 2 && analysis.rank_groups.second_largest() == 2
    }
}

/// One Pair: Two cards of the same rank
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> HandRanking {
        HandRanking::OnePair
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.largest() == 2
    }
}

/// High Card: No matching ranks or sequences
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> HandRanking {
        HandRanking::HighCard
    }

    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true // Always matches as fallback
    }
}

// ============================================================================
// Static detector list (in decision order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

/// Run the detectors in order and return the first category that matches.
pub fn classify(analysis: &HandAnalysis) -> HandRanking {
    DETECTORS
        .iter()
        .find(|d| d.detect(analysis))
        .map_or(HandRanking::HighCard, |d| d.category())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};
    use crate::hand::Hand;

    fn analyze(cards: [Card; 5]) -> HandAnalysis {
        HandAnalysis::new(&Hand::new(cards))
    }

    #[test]
    fn test_royal_flush_detector() {
        let analysis = analyze([
            Card::new(Rank::Ten, Suit::Hearts),
            Card::new(Rank::Jack, Suit::Hearts),
            Card::new(Rank::Queen, Suit::Hearts),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Ace, Suit::Hearts),
        ]);
        assert!(RoyalFlushDetector.detect(&analysis));
        assert_eq!(classify(&analysis), HandRanking::RoyalFlush);
    }

    #[test]
    fn test_straight_flush_detector() {
        let analysis = analyze([
            Card::new(Rank::Nine, Suit::Hearts),
            Card::new(Rank::Eight, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Hearts),
            Card::new(Rank::Six, Suit::Hearts),
            Card::new(Rank::Five, Suit::Hearts),
        ]);
        assert!(!RoyalFlushDetector.detect(&analysis));
        assert!(StraightFlushDetector.detect(&analysis));
        assert_eq!(classify(&analysis), HandRanking::StraightFlush);
    }

    #[test]
    fn test_steel_wheel_is_straight_flush() {
        let analysis = analyze([
            Card::new(Rank::Ace, Suit::Clubs),
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Three, Suit::Clubs),
            Card::new(Rank::Four, Suit::Clubs),
            Card::new(Rank::Five, Suit::Clubs),
        ]);
        assert_eq!(classify(&analysis), HandRanking::StraightFlush);
    }

    #[test]
    fn test_full_house_needs_trips_first() {
        let analysis = analyze([
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::King, Suit::Diamonds),
            Card::new(Rank::Queen, Suit::Clubs),
            Card::new(Rank::Queen, Suit::Spades),
        ]);
        assert!(FullHouseDetector.detect(&analysis));
        assert!(ThreeOfAKindDetector.detect(&analysis));
        assert_eq!(classify(&analysis), HandRanking::FullHouse);
    }

    #[test]
    fn test_two_pair_vs_one_pair() {
        let two_pair = analyze([
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::King, Suit::Diamonds),
            Card::new(Rank::King, Suit::Clubs),
            Card::new(Rank::Queen, Suit::Spades),
        ]);
        assert!(TwoPairDetector.detect(&two_pair));
        assert!(OnePairDetector.detect(&two_pair));
        assert_eq!(classify(&two_pair), HandRanking::TwoPair);

        let one_pair = analyze([
            Card::new(Rank::Jack, Suit::Spades),
            Card::new(Rank::Jack, Suit::Hearts),
            Card::new(Rank::Nine, Suit::Diamonds),
            Card::new(Rank::Seven, Suit::Clubs),
            Card::new(Rank::Three, Suit::Spades),
        ]);
        assert!(!TwoPairDetector.detect(&one_pair));
        assert_eq!(classify(&one_pair), HandRanking::OnePair);
    }

    #[test]
    fn test_five_of_a_rank_falls_through() {
        let ace = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(classify(&analyze([ace; 5])), HandRanking::Flush);

        let mixed = analyze([
            Card::new(Rank::Two, Suit::Spades),
            Card::new(Rank::Two, Suit::Hearts),
            Card::new(Rank::Two, Suit::Spades),
            Card::new(Rank::Two, Suit::Hearts),
            Card::new(Rank::Two, Suit::Clubs),
        ]);
        assert_eq!(classify(&mixed), HandRanking::HighCard);
    }

    #[test]
    fn test_detector_categories_are_in_descending_order() {
        let categories: Vec<HandRanking> = DETECTORS.iter().map(|d| d.category()).collect();
        let mut expected = HandRanking::ALL.to_vec();
        expected.reverse();
        assert_eq!(categories, expected);
    }
}
