//! Fixed-rate, level-payment amortization.
//!
//! The monthly payment comes from the annuity formula; the schedule is then
//! a sequential fold over the balance: each month's interest is charged on
//! the balance left by the previous month, and whatever remains of the
//! payment retires principal. All math in `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, warn};

use super::params::LoanParameters;
use crate::time_value;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::MortgageResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Annual rate above which a warning is attached.
const HIGH_RATE_PERCENT: Decimal = dec!(25);

/// Term above which a warning is attached.
const LONG_TERM_YEARS: i32 = 50;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// One month of the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based month index.
    pub month: u32,
    /// Level payment, identical on every row.
    pub payment: Money,
    /// Part of the payment that reduces the balance.
    pub principal_portion: Money,
    /// Part of the payment charged as interest on the opening balance.
    pub interest_portion: Money,
    /// Balance after this month's payment.
    pub remaining_balance: Money,
}

/// Full schedule for one set of loan parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSchedule {
    pub monthly_payment: Money,
    pub rows: Vec<AmortizationRow>,
}

/// Payment figure without the row-by-row breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentQuote {
    pub monthly_payment: Money,
    pub number_of_payments: u32,
    /// Monthly decimal rate (annual percent / 100 / 12).
    pub monthly_rate: Rate,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute the amortization schedule wrapped in the standard envelope.
pub fn compute_schedule(
    params: &LoanParameters,
) -> MortgageResult<ComputationOutput<PaymentSchedule>> {
    let start = Instant::now();
    let schedule = build_schedule(params)?;
    let warnings = collect_warnings(params);

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        methodology(params),
        params,
        warnings,
        elapsed,
        schedule,
    ))
}

/// Compute only the level monthly payment.
pub fn quote_payment(params: &LoanParameters) -> MortgageResult<ComputationOutput<PaymentQuote>> {
    let start = Instant::now();
    params.validate()?;

    let number_of_payments = params.number_of_payments();
    let monthly_rate = time_value::monthly_rate(params.annual_rate_percent);
    let monthly_payment =
        time_value::level_payment(params.principal, monthly_rate, number_of_payments)?;
    let warnings = collect_warnings(params);

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        methodology(params),
        params,
        warnings,
        elapsed,
        PaymentQuote {
            monthly_payment,
            number_of_payments,
            monthly_rate,
        },
    ))
}

/// Build the bare schedule. Validation runs before the recurrence.
pub fn build_schedule(params: &LoanParameters) -> MortgageResult<PaymentSchedule> {
    params.validate()?;

    let number_of_payments = params.number_of_payments();
    let monthly_rate = time_value::monthly_rate(params.annual_rate_percent);
    let payment = time_value::level_payment(params.principal, monthly_rate, number_of_payments)?;

    debug!(
        principal = %params.principal,
        annual_rate_percent = %params.annual_rate_percent,
        term_years = params.term_years,
        %monthly_rate,
        %payment,
        "computing amortization schedule"
    );

    let mut balance = params.principal;
    let mut rows = Vec::with_capacity(number_of_payments as usize);

    for month in 1..=number_of_payments {
        let interest_portion = balance * monthly_rate;
        let principal_portion = payment - interest_portion;
        balance -= principal_portion;

        rows.push(AmortizationRow {
            month,
            payment,
            principal_portion,
            interest_portion,
            remaining_balance: balance,
        });
    }

    debug!(rows = rows.len(), residual = %balance, "schedule complete");

    Ok(PaymentSchedule {
        monthly_payment: payment,
        rows,
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn methodology(params: &LoanParameters) -> &'static str {
    if params.annual_rate_percent.is_zero() {
        "Straight-line repayment (zero interest)"
    } else {
        "Fixed-rate level-payment amortization (annuity formula)"
    }
}

fn collect_warnings(params: &LoanParameters) -> Vec<String> {
    let mut warnings = Vec::new();

    if params.annual_rate_percent.is_zero() {
        warnings.push(
            "Interest-free loan; payment is principal divided by number of payments".into(),
        );
    }
    if params.annual_rate_percent > HIGH_RATE_PERCENT {
        warnings.push(format!(
            "Annual rate of {}% is unusually high",
            params.annual_rate_percent
        ));
    }
    if params.term_years > LONG_TERM_YEARS {
        warnings.push(format!(
            "Term of {} years is unusually long",
            params.term_years
        ));
    }

    for w in &warnings {
        warn!("{w}");
    }
    warnings
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
