//! Loan inputs and their validation.
//!
//! Every computation in the crate goes through [`LoanParameters::validate`]
//! before any arithmetic runs, so no partial or NaN-like schedule can escape.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::MortgageError;
use crate::types::{Money, Percent};
use crate::MortgageResult;

/// Longest term the engine will schedule.
pub const MAX_TERM_YEARS: i32 = 1000;

const MONTHS_PER_YEAR: u32 = 12;

/// Fixed-rate loan inputs, immutable for the life of one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Amount borrowed.
    pub principal: Money,
    /// Nominal annual rate as a percentage (4.5 = 4.5%).
    pub annual_rate_percent: Percent,
    /// Whole years to maturity.
    pub term_years: i32,
}

impl LoanParameters {
    pub fn new(principal: Money, annual_rate_percent: Percent, term_years: i32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_years,
        }
    }

    /// Build parameters from floating-point inputs, rejecting NaN and infinities.
    pub fn try_from_f64(
        principal: f64,
        annual_rate_percent: f64,
        term_years: i32,
    ) -> MortgageResult<Self> {
        Ok(Self::new(
            finite_decimal("principal", principal)?,
            finite_decimal("annual_rate_percent", annual_rate_percent)?,
            term_years,
        ))
    }

    /// Parse parameters from a JSON object with decimal strings or numbers.
    pub fn from_json(json: &str) -> MortgageResult<Self> {
        let params: Self = serde_json::from_str(json)?;
        Ok(params)
    }

    /// Check the parameters can be scheduled.
    pub fn validate(&self) -> MortgageResult<()> {
        if self.principal <= Decimal::ZERO {
            return Err(MortgageError::InvalidInput {
                field: "principal".into(),
                reason: "Principal must be positive".into(),
            });
        }
        if self.term_years <= 0 {
            return Err(MortgageError::InvalidInput {
                field: "term_years".into(),
                reason: "Term must be at least one year".into(),
            });
        }
        if self.term_years > MAX_TERM_YEARS {
            return Err(MortgageError::InvalidInput {
                field: "term_years".into(),
                reason: format!("Term cannot exceed {MAX_TERM_YEARS} years"),
            });
        }
        if self.annual_rate_percent < Decimal::ZERO {
            return Err(MortgageError::NegativeRate {
                annual_rate_percent: self.annual_rate_percent,
            });
        }
        Ok(())
    }

    /// Number of monthly payments. Only meaningful once [`validate`](Self::validate) passed.
    pub fn number_of_payments(&self) -> u32 {
        self.term_years.max(0) as u32 * MONTHS_PER_YEAR
    }
}

fn finite_decimal(field: &str, value: f64) -> MortgageResult<Decimal> {
    if !value.is_finite() {
        return Err(MortgageError::InvalidInput {
            field: field.into(),
            reason: format!("Value must be finite, got {value}"),
        });
    }
    Decimal::from_f64(value).ok_or_else(|| MortgageError::InvalidInput {
        field: field.into(),
        reason: format!("Value {value} is outside the supported decimal range"),
    })
}
