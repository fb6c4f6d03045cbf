//! Gross, contribution and net breakdown of break-time earnings.
//!
//! The profile's wage is first expressed as a monthly salary. Social security
//! (INSS) and income tax (IRRF) are computed on that salary using an
//! effective-dated [`TaxTable`], and each monthly figure is spread evenly over
//! the minutes worked in a month. A horizon's breakdown is those per-minute
//! figures times the break minutes in the horizon.
//!
//! These figures sit alongside the break-time earnings and never replace
//! them. They are rounded half away from zero, unlike the truncated
//! per-minute rate.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::TaxTable;
use crate::models::{Horizon, HorizonTaxBreakdowns, PayType, Profile, TaxBreakdown, schedule_spec};

use super::{MINUTES_PER_HOUR, minutes_spent, minutes_worked};

/// Decimal places kept on each breakdown figure.
pub const BREAKDOWN_DECIMAL_PLACES: u32 = 2;

/// Expresses the profile's wage as a monthly salary.
///
/// Hourly wages are multiplied out over the shift length and the working
/// days in a month; yearly wages are spread over twelve months.
pub fn monthly_salary(profile: &Profile) -> Decimal {
    let spec = schedule_spec(profile.work_schedule);
    let salary = match profile.pay_type {
        PayType::Hourly => {
            profile.wage * Decimal::from(spec.minutes_per_shift) * Decimal::from(spec.days_per_month)
                / Decimal::from(MINUTES_PER_HOUR)
        }
        PayType::Daily => profile.wage * Decimal::from(spec.days_per_month),
        PayType::Monthly => profile.wage,
        PayType::Yearly => profile.wage / Decimal::from(12),
    };
    salary.max(Decimal::ZERO)
}

/// Computes the progressive social security contribution on a monthly salary.
///
/// Each bracket's rate applies only to the slice of salary between the
/// previous bracket's limit and its own. Salary above the last limit adds
/// nothing.
pub fn social_security_contribution(salary: Decimal, table: &TaxTable) -> Decimal {
    let mut previous_limit = Decimal::ZERO;
    let mut total = Decimal::ZERO;

    for bracket in &table.social_security {
        if salary <= previous_limit {
            break;
        }
        let portion = salary.min(bracket.limit) - previous_limit;
        if portion > Decimal::ZERO {
            total += portion * bracket.rate;
        }
        previous_limit = bracket.limit;
    }

    total
}

/// Computes the income tax withheld on a monthly salary.
///
/// The taxable base is the salary less the social security contribution and
/// the table's simplified deduction. The first row whose limit covers the
/// base sets the rate and deduction.
pub fn income_tax(salary: Decimal, social_security: Decimal, table: &TaxTable) -> Decimal {
    let base = (salary - social_security - table.simplified_deduction).max(Decimal::ZERO);
    if base.is_zero() {
        return Decimal::ZERO;
    }

    table
        .income_tax
        .iter()
        .find(|row| row.limit.is_none_or(|limit| base <= limit))
        .map(|row| (base * row.rate - row.deduction).max(Decimal::ZERO))
        .unwrap_or(Decimal::ZERO)
}

/// Builds the tax breakdown of the profile's break-time earnings for every horizon.
pub fn tax_breakdowns(profile: &Profile, table: &TaxTable) -> HorizonTaxBreakdowns {
    let salary = monthly_salary(profile);
    let social_security = social_security_contribution(salary, table);
    let income_tax = income_tax(salary, social_security, table);
    let net = (salary - social_security - income_tax).max(Decimal::ZERO);

    let monthly = TaxBreakdown {
        gross: salary,
        social_security,
        income_tax,
        net,
    };
    let monthly_minutes = Decimal::from(minutes_worked(profile.work_schedule, Horizon::Monthly));

    let for_horizon = |horizon: Horizon| {
        let spent = Decimal::from(minutes_spent(profile, horizon));
        let share = |figure: Decimal| round_figure(figure * spent / monthly_minutes);
        TaxBreakdown {
            gross: share(monthly.gross),
            social_security: share(monthly.social_security),
            income_tax: share(monthly.income_tax),
            net: share(monthly.net),
        }
    };

    HorizonTaxBreakdowns {
        daily: for_horizon(Horizon::Daily),
        monthly: for_horizon(Horizon::Monthly),
        yearly: for_horizon(Horizon::Yearly),
    }
}

fn round_figure(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(BREAKDOWN_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(BREAKDOWN_DECIMAL_PLACES);
    rounded
}
