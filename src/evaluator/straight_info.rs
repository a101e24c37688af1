use crate::cards::Rank;

const STRAIGHT_LEN: usize = 5;
const WHEEL: [Rank; 5] = [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five];

/// Distinct rank values, ascending.
fn distinct_values<I>(ranks: I) -> Vec<u8>
where
    I: IntoIterator<Item = Rank>,
{
    let mut values: Vec<u8> = ranks.into_iter().map(Rank::value).collect();
    values.sort_unstable();
    values.dedup();
    values
}

/// Whether a set of ranks contains a straight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
}

impl StraightInfo {
    /// Detect a straight: any five consecutive distinct ranks, or the wheel (A-2-3-4-5).
    /// Input order does not matter.
    pub fn detect<I>(ranks: I) -> Self
    where
        I: IntoIterator<Item = Rank>,
    {
        let values = distinct_values(ranks);

        let consecutive =
            values.windows(STRAIGHT_LEN).any(|w| w[STRAIGHT_LEN - 1] - w[0] == (STRAIGHT_LEN - 1) as u8);
        let wheel = WHEEL.iter().all(|r| values.contains(&r.value()));

        StraightInfo { is_straight: consecutive || wheel }
    }
}

/// High card of a straight by value.
///
/// Normally the largest distinct rank. When both Ace and Two are present the
/// Ace plays low (value 1), so the wheel's high card is 5.
pub fn straight_high_card<I>(ranks: I) -> u8
where
    I: IntoIterator<Item = Rank>,
{
    let mut values = distinct_values(ranks);
    let ace = Rank::Ace.value();
    let two = Rank::Two.value();

    if values.contains(&ace) && values.contains(&two) {
        values.retain(|&v| v != ace);
        values.insert(0, 1);
    }

    values.last().copied().unwrap_or(0)
}
