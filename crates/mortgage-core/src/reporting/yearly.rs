use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::accumulate;
use crate::amortization::PaymentSchedule;
use crate::types::Money;
use crate::MortgageResult;

const MONTHS_PER_YEAR: usize = 12;

/// Totals for one 12-month block of the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyBreakdown {
    /// 1-based loan year.
    pub year: u32,
    /// Sum of payments made in the year.
    pub payments: Money,
    pub principal_paid: Money,
    pub interest_paid: Money,
    /// Balance after the last payment of the year.
    pub closing_balance: Money,
}

/// Aggregate a schedule into loan years. A trailing partial year still gets an entry.
pub fn yearly_breakdown(schedule: &PaymentSchedule) -> MortgageResult<Vec<YearlyBreakdown>> {
    schedule
        .rows
        .chunks(MONTHS_PER_YEAR)
        .enumerate()
        .map(|(idx, months)| {
            let mut payments = Decimal::ZERO;
            let mut principal_paid = Decimal::ZERO;
            let mut interest_paid = Decimal::ZERO;
            for row in months {
                accumulate(&mut payments, row.payment, "yearly payments")?;
                accumulate(&mut principal_paid, row.principal_portion, "yearly principal")?;
                accumulate(&mut interest_paid, row.interest_portion, "yearly interest")?;
            }
            Ok(YearlyBreakdown {
                year: idx as u32 + 1,
                payments,
                principal_paid,
                interest_paid,
                closing_balance: months
                    .last()
                    .map(|r| r.remaining_balance)
                    .unwrap_or_default(),
            })
        })
        .collect()
}
