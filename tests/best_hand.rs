use poker_eval::cards::{Card, Rank::*, Suit::*};
use poker_eval::evaluator::{best_hand, best_hand_of, HandRanking};
use poker_eval::hand::{Hand, HandError};

#[test]
fn finds_hidden_flush_among_seven() {
    let seven = [
        Card::new(King, Hearts),
        Card::new(Two, Clubs),
        Card::new(Nine, Hearts),
        Card::new(Nine, Spades),
        Card::new(Four, Hearts),
        Card::new(Jack, Hearts),
        Card::new(Six, Hearts),
    ];
    let best = best_hand(&seven).unwrap();
    let expected = Hand::new([
        Card::new(King, Hearts),
        Card::new(Nine, Hearts),
        Card::new(Four, Hearts),
        Card::new(Jack, Hearts),
        Card::new(Six, Hearts),
    ]);
    assert_eq!(best.ranking(), HandRanking::Flush);
    assert!(best.same_cards(&expected));
}

#[test]
fn finds_wheel_over_pair() {
    let seven = [
        Card::new(Ace, Spades),
        Card::new(Ace, Hearts),
        Card::new(Two, Diamonds),
        Card::new(Three, Clubs),
        Card::new(Four, Hearts),
        Card::new(Five, Spades),
        Card::new(King, Clubs),
    ];
    let best = best_hand(&seven).unwrap();
    assert_eq!(best.ranking(), HandRanking::Straight);
    assert!(best.iter().any(|c| c.rank() == Ace));
    assert!(best.iter().any(|c| c.rank() == Five));
}

#[test]
fn picks_royal_flush_out_of_eight() {
    let eight = [
        Card::new(Nine, Diamonds),
        Card::new(Ten, Diamonds),
        Card::new(Jack, Diamonds),
        Card::new(Queen, Diamonds),
        Card::new(King, Diamonds),
        Card::new(Ace, Diamonds),
        Card::new(Ace, Clubs),
        Card::new(Ace, Hearts),
    ];
    let best = best_hand(&eight).unwrap();
    assert_eq!(best.ranking(), HandRanking::RoyalFlush);
    let royal = Hand::new([
        Card::new(Ten, Diamonds),
        Card::new(Jack, Diamonds),
        Card::new(Queen, Diamonds),
        Card::new(King, Diamonds),
        Card::new(Ace, Diamonds),
    ]);
    assert!(best.same_cards(&royal));
}

#[test]
fn best_full_house_uses_highest_trips_and_pair() {
    let seven = [
        Card::new(Three, Spades),
        Card::new(Three, Hearts),
        Card::new(Three, Diamonds),
        Card::new(Eight, Clubs),
        Card::new(Eight, Hearts),
        Card::new(Eight, Spades),
        Card::new(Two, Clubs),
    ];
    let best = best_hand(&seven).unwrap();
    assert_eq!(best.ranking(), HandRanking::FullHouse);
    assert_eq!(best.iter().filter(|c| c.rank() == Eight).count(), 3);
    assert_eq!(best.iter().filter(|c| c.rank() == Three).count(), 2);
}

#[test]
fn too_few_cards_is_an_error() {
    let four = [
        Card::new(Two, Clubs),
        Card::new(Three, Clubs),
        Card::new(Four, Clubs),
        Card::new(Five, Clubs),
    ];
    assert_eq!(best_hand(&four), Err(HandError::NotEnoughCards { needed: 5, got: 4 }));
    assert_eq!(best_hand_of(&four, 6), Err(HandError::NotEnoughCards { needed: 6, got: 4 }));
}
