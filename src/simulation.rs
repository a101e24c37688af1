//! Random-deal simulation: two players each get a handful of cards, play
//! their best five, and the results are tallied.

use crate::deck::{Deck, DECK_SIZE};
use crate::evaluator::{best_hand, compare, pick_winner, HandRanking};
use crate::hand::{Hand, HandError, HAND_SIZE};
use core::cmp::Ordering;
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

const PLAYERS: usize = 2;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SimulationError {
    #[error("cannot deal {needed} cards from a {available}-card deck")]
    DeckExhausted { needed: usize, available: usize },
    #[error(transparent)]
    Hand(#[from] HandError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of independent deals.
    pub trials: usize,
    /// Cards dealt to each player before picking the best five.
    pub cards_per_player: usize,
    /// Seed for reproducible runs; `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { trials: 20, cards_per_player: 7, seed: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// Result of a single deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialOutcome {
    pub player_one: Hand,
    pub player_two: Hand,
    /// Player one's hand compared to player two's.
    pub ordering: Ordering,
}

impl TrialOutcome {
    pub fn winner(&self) -> Option<Player> {
        match self.ordering {
            Ordering::Greater => Some(Player::One),
            Ordering::Less => Some(Player::Two),
            Ordering::Equal => None,
        }
    }
}

/// Tallies over a whole simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationReport {
    pub trials: usize,
    pub player_one_wins: usize,
    pub player_two_wins: usize,
    pub ties: usize,
    /// How often each category was a player's best hand, indexed by ordinal.
    pub category_counts: [usize; HandRanking::ALL.len()],
    /// Strongest hand seen across all trials.
    pub best_hand: Option<Hand>,
}

impl SimulationReport {
    fn new() -> Self {
        Self {
            trials: 0,
            player_one_wins: 0,
            player_two_wins: 0,
            ties: 0,
            category_counts: [0; HandRanking::ALL.len()],
            best_hand: None,
        }
    }

    fn record(&mut self, outcome: &TrialOutcome) {
        self.trials += 1;
        match outcome.winner() {
            Some(Player::One) => self.player_one_wins += 1,
            Some(Player::Two) => self.player_two_wins += 1,
            None => self.ties += 1,
        }
        for hand in [outcome.player_one, outcome.player_two] {
            self.category_counts[hand.ranking().ordinal() as usize] += 1;
        }

        let trial_best = pick_winner(outcome.player_one, outcome.player_two);
        self.best_hand = Some(match self.best_hand {
            Some(best) => pick_winner(best, trial_best),
            None => trial_best,
        });
    }

    fn percentage(count: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            count as f64 * 100.0 / total as f64
        }
    }

    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::One => self.player_one_wins,
            Player::Two => self.player_two_wins,
        }
    }

    pub fn win_percentage(&self, player: Player) -> f64 {
        Self::percentage(self.wins(player), self.trials)
    }

    pub fn tie_percentage(&self) -> f64 {
        Self::percentage(self.ties, self.trials)
    }

    /// Share of all best hands (two per trial) that landed in `category`.
    pub fn category_percentage(&self, category: HandRanking) -> f64 {
        let count = self.category_counts[category.ordinal() as usize];
        Self::percentage(count, self.trials * PLAYERS)
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trials: {}", self.trials)?;
        for player in [Player::One, Player::Two] {
            writeln!(
                f,
                "{player} wins: {} ({:.1}%)",
                self.wins(player),
                self.win_percentage(player)
            )?;
        }
        writeln!(f, "Ties: {} ({:.1}%)", self.ties, self.tie_percentage())?;

        writeln!(f, "Best hand categories:")?;
        for category in HandRanking::ALL.iter().rev() {
            let count = self.category_counts[category.ordinal() as usize];
            if count > 0 {
                writeln!(
                    f,
                    "  {:<16}{count:>6} ({:.1}%)",
                    category.name(),
                    self.category_percentage(*category)
                )?;
            }
        }

        if let Some(best) = self.best_hand {
            writeln!(f, "Best hand overall: {}", best.ranking())?;
            let names: Vec<String> = best.iter().map(|c| c.long_name()).collect();
            writeln!(f, "{}", names.join(", "))?;
        }
        Ok(())
    }
}

/// Deals heads-up trials from freshly shuffled decks.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        if config.cards_per_player < HAND_SIZE {
            return Err(HandError::NotEnoughCards {
                needed: HAND_SIZE,
                got: config.cards_per_player,
            }
            .into());
        }
        let needed = config.cards_per_player * PLAYERS;
        if needed > DECK_SIZE {
            return Err(SimulationError::DeckExhausted { needed, available: DECK_SIZE });
        }
        Ok(Self { config })
    }

    /// Run every trial, seeding from the config when a seed is set.
    pub fn run(&self) -> Result<SimulationReport, SimulationError> {
        match self.config.seed {
            Some(seed) => self.run_with(&mut ChaCha8Rng::seed_from_u64(seed)),
            None => self.run_with(&mut rand::rng()),
        }
    }

    pub fn run_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SimulationReport, SimulationError> {
        info!(
            "Running {} trials with {} cards per player",
            self.config.trials, self.config.cards_per_player
        );

        let mut report = SimulationReport::new();
        for trial in 0..self.config.trials {
            let outcome = self.run_trial(rng)?;
            debug!(
                "trial {trial}: {} ({}) vs {} ({}) -> {:?}",
                outcome.player_one,
                outcome.player_one.ranking(),
                outcome.player_two,
                outcome.player_two.ranking(),
                outcome.ordering
            );
            report.record(&outcome);
        }

        info!(
            "Finished: player 1 won {}, player 2 won {}, {} ties",
            report.player_one_wins, report.player_two_wins, report.ties
        );
        Ok(report)
    }

    /// Shuffle a fresh deck, deal both players and compare their best hands.
    pub fn run_trial<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<TrialOutcome, SimulationError> {
        let mut deck = Deck::standard();
        deck.shuffle_with(rng);

        let n = self.config.cards_per_player;
        let first = deck.draw_n(n);
        let second = deck.draw_n(n);

        let player_one = best_hand(&first)?;
        let player_two = best_hand(&second)?;
        let ordering = compare(&player_one, &player_two);

        Ok(TrialOutcome { player_one, player_two, ordering })
    }
}
