//! Compound interest projection for savings plans.

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Error, Result, ValidationError};

const MAX_YEARS: u32 = 100;
const MAX_ANNUAL_RATE_PERCENT: Decimal = dec!(100);

/// How often accrued interest is credited to the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompoundingFrequency {
    #[default]
    Monthly,
    Quarterly,
    Annually,
}

impl CompoundingFrequency {
    pub const fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Annually => 1,
        }
    }

    pub const fn months_per_period(&self) -> u32 {
        12 / self.periods_per_year()
    }
}

/// Parameters of a savings projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundInterestInput {
    pub initial_amount: Decimal,
    /// Deposited at the end of every month
    #[serde(default)]
    pub monthly_contribution: Decimal,
    /// Nominal annual rate, e.g. 8.5 for 8.5%
    pub annual_rate_percent: Decimal,
    pub years: u32,
    #[serde(default)]
    pub compounding: CompoundingFrequency,
}

impl CompoundInterestInput {
    pub fn validate(&self) -> Result<()> {
        if self.initial_amount.is_sign_negative() {
            return Err(ValidationError::out_of_range("initialAmount", "must not be negative").into());
        }
        if self.monthly_contribution.is_sign_negative() {
            return Err(
                ValidationError::out_of_range("monthlyContribution", "must not be negative").into(),
            );
        }
        if self.annual_rate_percent.is_sign_negative()
            || self.annual_rate_percent > MAX_ANNUAL_RATE_PERCENT
        {
            return Err(ValidationError::out_of_range(
                "annualRatePercent",
                format!("must be between 0 and {}", MAX_ANNUAL_RATE_PERCENT),
            )
            .into());
        }
        if self.years == 0 || self.years > MAX_YEARS {
            return Err(ValidationError::out_of_range(
                "years",
                format!("must be between 1 and {}", MAX_YEARS),
            )
            .into());
        }
        Ok(())
    }
}

/// Balance at the end of one projected year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyProjection {
    pub year: u32,
    pub balance: Decimal,
    /// Initial amount plus every deposit so far
    pub total_contributions: Decimal,
    pub total_interest: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundInterestProjection {
    pub final_balance: Decimal,
    pub total_contributions: Decimal,
    pub total_interest: Decimal,
    pub yearly: Vec<YearlyProjection>,
}

/// Projects a savings balance month by month.
///
/// Interest is credited at the end of each compounding period on the
/// balance held before that month's deposit. Amounts are kept at full
/// precision and rounded to cents only in the output.
pub fn project_compound_interest(input: &CompoundInterestInput) -> Result<CompoundInterestProjection> {
    input.validate()?;

    let periods = Decimal::from(input.compounding.periods_per_year());
    let period_rate = input.annual_rate_percent / dec!(100) / periods;
    let months_per_period = input.compounding.months_per_period();

    let mut balance = input.initial_amount;
    let mut contributions = input.initial_amount;
    let mut yearly = Vec::with_capacity(input.years as usize);

    for month in 1..=input.years * 12 {
        if month % months_per_period == 0 {
            let interest = balance.checked_mul(period_rate).ok_or_else(overflow)?;
            balance = balance.checked_add(interest).ok_or_else(overflow)?;
        }
        balance = balance
            .checked_add(input.monthly_contribution)
            .ok_or_else(overflow)?;
        contributions = contributions
            .checked_add(input.monthly_contribution)
            .ok_or_else(overflow)?;

        if month % 12 == 0 {
            yearly.push(YearlyProjection {
                year: month / 12,
                balance: to_display(balance),
                total_contributions: to_display(contributions),
                total_interest: to_display(balance - contributions),
            });
        }
    }

    debug!(
        "Projected {} years at {}% ({:?}): final balance {}",
        input.years,
        input.annual_rate_percent,
        input.compounding,
        balance.round_dp(DISPLAY_DECIMAL_PRECISION)
    );

    Ok(CompoundInterestProjection {
        final_balance: to_display(balance),
        total_contributions: to_display(contributions),
        total_interest: to_display(balance - contributions),
        yearly,
    })
}

fn to_display(amount: Decimal) -> Decimal {
    amount.round_dp(DISPLAY_DECIMAL_PRECISION)
}

fn overflow() -> Error {
    Error::Calculation("projected balance exceeds the supported range".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(initial: Decimal, monthly: Decimal, rate: Decimal, years: u32) -> CompoundInterestInput {
        CompoundInterestInput {
            initial_amount: initial,
            monthly_contribution: monthly,
            annual_rate_percent: rate,
            years,
            compounding: CompoundingFrequency::Monthly,
        }
    }

    #[test]
    fn test_zero_rate_is_sum_of_contributions() {
        let projection =
            project_compound_interest(&input(dec!(1000), dec!(100), dec!(0), 2)).unwrap();

        assert_eq!(projection.final_balance, dec!(3400));
        assert_eq!(projection.total_contributions, dec!(3400));
        assert_eq!(projection.total_interest, dec!(0));
        assert_eq!(projection.yearly.len(), 2);
        assert_eq!(projection.yearly[0].balance, dec!(2200));
    }

    #[test]
    fn test_annual_compounding() {
        let mut params = input(dec!(1000), dec!(0), dec!(10), 2);
        params.compounding = CompoundingFrequency::Annually;
        let projection = project_compound_interest(&params).unwrap();

        assert_eq!(projection.yearly[0].balance, dec!(1100));
        assert_eq!(projection.final_balance, dec!(1210));
        assert_eq!(projection.total_interest, dec!(210));
    }

    #[test]
    fn test_monthly_compounding_lump_sum() {
        // 1000 * 1.01^12 = 1126.825...
        let projection = project_compound_interest(&input(dec!(1000), dec!(0), dec!(12), 1)).unwrap();
        assert_eq!(projection.final_balance, dec!(1126.83));
        assert_eq!(projection.total_interest, dec!(126.83));
    }

    #[test]
    fn test_monthly_contributions_annuity() {
        // 100 * ((1.01^12 - 1) / 0.01) = 1268.250...
        let projection = project_compound_interest(&input(dec!(0), dec!(100), dec!(12), 1)).unwrap();
        assert_eq!(projection.final_balance, dec!(1268.25));
        assert_eq!(projection.total_contributions, dec!(1200));
    }

    #[test]
    fn test_quarterly_compounding_credits_four_times() {
        let mut params = input(dec!(1000), dec!(0), dec!(8), 1);
        params.compounding = CompoundingFrequency::Quarterly;
        let projection = project_compound_interest(&params).unwrap();
        // 1000 * 1.02^4 = 1082.43216
        assert_eq!(projection.final_balance, dec!(1082.43));
    }

    #[test]
    fn test_frequency_helpers() {
        assert_eq!(CompoundingFrequency::Monthly.months_per_period(), 1);
        assert_eq!(CompoundingFrequency::Quarterly.months_per_period(), 3);
        assert_eq!(CompoundingFrequency::Annually.months_per_period(), 12);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(project_compound_interest(&input(dec!(-1), dec!(0), dec!(5), 1)).is_err());
        assert!(project_compound_interest(&input(dec!(0), dec!(-10), dec!(5), 1)).is_err());
        assert!(project_compound_interest(&input(dec!(0), dec!(10), dec!(101), 1)).is_err());
        assert!(project_compound_interest(&input(dec!(0), dec!(10), dec!(5), 0)).is_err());
        assert!(project_compound_interest(&input(dec!(0), dec!(10), dec!(5), 101)).is_err());
    }

    #[test]
    fn test_overflow_is_a_calculation_error() {
        let mut params = input(Decimal::from(u64::MAX), dec!(0), dec!(100), 100);
        params.compounding = CompoundingFrequency::Annually;

        let err = project_compound_interest(&params).unwrap_err();
        assert!(matches!(err, Error::Calculation(_)));
    }

    #[test]
    fn test_input_json_defaults() {
        let json = r#"{"initialAmount": 500, "annualRatePercent": 6, "years": 3}"#;
        let params: CompoundInterestInput = serde_json::from_str(json).unwrap();
        assert_eq!(params.monthly_contribution, Decimal::ZERO);
        assert_eq!(params.compounding, CompoundingFrequency::Monthly);
    }
}
