//! Kingdom-wide aggregation.
//!
//! Statistics are recomputed from whatever results are stored at read time;
//! nothing is kept between calls.

use crate::models::{CalculationResult, KingdomStatistics};

/// Folds stored results into kingdom statistics.
///
/// An empty input yields all-zero statistics, with 0 standing in for the
/// maximum daily minutes.
///
/// # Examples
///
/// ```
/// use throne_engine::calculation::aggregate;
/// use throne_engine::models::CalculationResult;
///
/// let stats = aggregate(std::iter::empty::<&CalculationResult>());
/// assert_eq!(stats.total_submissions, 0);
/// assert_eq!(stats.max_daily_minutes_spent, 0);
/// ```
pub fn aggregate<'a, I>(results: I) -> KingdomStatistics
where
    I: IntoIterator<Item = &'a CalculationResult>,
{
    results
        .into_iter()
        .fold(KingdomStatistics::default(), |mut stats, result| {
            stats.total_submissions += 1;
            stats.total_yearly_minutes_spent += u64::from(result.yearly_minutes_spent);
            stats.total_yearly_earnings += result.yearly_earnings;
            stats.max_daily_minutes_spent =
                stats.max_daily_minutes_spent.max(result.daily_minutes_spent);
            stats
        })
}
