//! Top-five rankings over stored results.
//!
//! Every criterion breaks ties by username ascending, so the order is total
//! and independent of storage order.

use std::cmp::Ordering;

use crate::models::{CalculationResult, RankingCriterion, RankingEntry, Rankings};

/// Maximum number of entries in a ranking.
pub const RANKING_SIZE: usize = 5;

/// Ranks stored results by a criterion, keeping at most [`RANKING_SIZE`] entries.
///
/// Fewer stored results simply produce a shorter list.
///
/// # Examples
///
/// ```
/// use throne_engine::calculation::rank;
/// use throne_engine::models::{CalculationResult, RankingCriterion};
///
/// let ranking = rank(std::iter::empty::<&CalculationResult>(), RankingCriterion::HigherEarnings);
/// assert!(ranking.is_empty());
/// ```
pub fn rank<'a, I>(results: I, criterion: RankingCriterion) -> Vec<RankingEntry>
where
    I: IntoIterator<Item = &'a CalculationResult>,
{
    let mut entries: Vec<RankingEntry> = results.into_iter().map(RankingEntry::from).collect();
    entries.sort_by(|a, b| compare(a, b, criterion));
    entries.truncate(RANKING_SIZE);
    entries
}

/// Builds all three rankings from the same results.
pub fn rank_all(results: &[CalculationResult]) -> Rankings {
    Rankings {
        higher_earnings: rank(results, RankingCriterion::HigherEarnings),
        higher_minutes: rank(results, RankingCriterion::HigherMinutes),
        lower_minutes: rank(results, RankingCriterion::LowerMinutes),
    }
}

fn compare(a: &RankingEntry, b: &RankingEntry, criterion: RankingCriterion) -> Ordering {
    let primary = match criterion {
        RankingCriterion::HigherEarnings => b.daily_earnings.cmp(&a.daily_earnings),
        RankingCriterion::HigherMinutes => b.daily_minutes_spent.cmp(&a.daily_minutes_spent),
        RankingCriterion::LowerMinutes => a.daily_minutes_spent.cmp(&b.daily_minutes_spent),
    };
    primary.then_with(|| a.username.cmp(&b.username))
}
