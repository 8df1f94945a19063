pub mod summary;
pub mod yearly;

pub use summary::{analyze_loan, summarize, LoanReport, LoanSummary};
pub use yearly::{yearly_breakdown, YearlyBreakdown};

use rust_decimal::Decimal;

use crate::error::MortgageError;
use crate::MortgageResult;

/// Add to a running total, reporting range exhaustion instead of panicking.
fn accumulate(total: &mut Decimal, amount: Decimal, context: &str) -> MortgageResult<()> {
    *total = total
        .checked_add(amount)
        .ok_or_else(|| MortgageError::Overflow {
            context: context.into(),
        })?;
    Ok(())
}
