//! Loan-level totals derived from a computed schedule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::accumulate;
use super::yearly::{yearly_breakdown, YearlyBreakdown};
use crate::amortization::{build_schedule, LoanParameters, PaymentSchedule};
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::MortgageResult;

/// Lifetime totals of a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub monthly_payment: Money,
    pub number_of_payments: u32,
    pub total_paid: Money,
    pub total_interest: Money,
    pub total_principal: Money,
    /// Interest as a fraction of everything paid (0.35 = 35%).
    pub interest_share: Rate,
}

/// Summary plus per-year breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanReport {
    pub summary: LoanSummary,
    pub yearly: Vec<YearlyBreakdown>,
}

/// Validate, schedule and summarise a loan in one call.
pub fn analyze_loan(params: &LoanParameters) -> MortgageResult<ComputationOutput<LoanReport>> {
    let start = Instant::now();
    let schedule = build_schedule(params)?;

    let mut warnings = Vec::new();
    if let Some(last) = schedule.rows.last() {
        if last.remaining_balance.abs() >= Decimal::new(1, 2) {
            warnings.push(format!(
                "Final balance of {} did not fully amortize",
                last.remaining_balance.round_dp(2)
            ));
        }
    }

    let report = LoanReport {
        summary: summarize(&schedule)?,
        yearly: yearly_breakdown(&schedule)?,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Amortization schedule summary",
        params,
        warnings,
        elapsed,
        report,
    ))
}

/// Sum the rows of a schedule.
pub fn summarize(schedule: &PaymentSchedule) -> MortgageResult<LoanSummary> {
    let mut total_paid = Decimal::ZERO;
    let mut total_interest = Decimal::ZERO;
    let mut total_principal = Decimal::ZERO;

    for row in &schedule.rows {
        accumulate(&mut total_paid, row.payment, "total paid")?;
        accumulate(&mut total_interest, row.interest_portion, "total interest")?;
        accumulate(&mut total_principal, row.principal_portion, "total principal")?;
    }

    let interest_share = if total_paid > Decimal::ZERO {
        total_interest / total_paid
    } else {
        Decimal::ZERO
    };

    Ok(LoanSummary {
        monthly_payment: schedule.monthly_payment,
        number_of_payments: schedule.rows.len() as u32,
        total_paid,
        total_interest,
        total_principal,
        interest_share,
    })
}
