use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::MortgageError;
use crate::types::{Money, Percent, Rate};
use crate::MortgageResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Convert a nominal annual percentage (4.5 = 4.5%) into a monthly decimal rate.
pub fn monthly_rate(annual_rate_percent: Percent) -> Rate {
    annual_rate_percent / dec!(100) / MONTHS_PER_YEAR
}

/// Compound growth factor (1 + rate)^periods via iterative multiplication.
///
/// Iterating keeps the rounding sequence fixed, so the same inputs always
/// produce the same factor to the last digit.
pub fn growth_factor(rate: Rate, periods: u32) -> MortgageResult<Decimal> {
    let base = Decimal::ONE + rate;
    let mut result = Decimal::ONE;
    for period in 0..periods {
        result = result
            .checked_mul(base)
            .ok_or_else(|| MortgageError::Overflow {
                context: format!("growth factor at period {}", period + 1),
            })?;
    }
    Ok(result)
}

/// Level (annuity) payment that retires `principal` over `periods` at `rate`.
///
/// `P * r * (1+r)^n / ((1+r)^n - 1)`, falling back to straight-line
/// `P / n` when the rate is zero or too small to move the growth factor.
pub fn level_payment(principal: Money, rate: Rate, periods: u32) -> MortgageResult<Money> {
    if periods == 0 {
        return Err(MortgageError::InvalidInput {
            field: "periods".into(),
            reason: "Number of periods must be > 0".into(),
        });
    }

    let n = Decimal::from(periods);
    if rate.is_zero() {
        return Ok(principal / n);
    }

    let factor = growth_factor(rate, periods)?;
    let denominator = factor - Decimal::ONE;
    if denominator.is_zero() {
        return Ok(principal / n);
    }

    let overflow = || MortgageError::Overflow {
        context: "level payment".into(),
    };
    principal
        .checked_mul(rate)
        .and_then(|v| v.checked_mul(factor))
        .and_then(|v| v.checked_div(denominator))
        .ok_or_else(overflow)
}
