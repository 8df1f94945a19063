use napi::Result as NapiResult;
use napi_derive::napi;

use mortgage_core::amortization::{self, LoanParameters};
use mortgage_core::reporting;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_params(input_json: &str) -> NapiResult<LoanParameters> {
    LoanParameters::from_json(input_json).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Amortization
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_schedule(input_json: String) -> NapiResult<String> {
    let params = parse_params(&input_json)?;
    let output = amortization::compute_schedule(&params).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Numeric entry point for form inputs; NaN and infinities are rejected.
#[napi]
pub fn compute_schedule_from_values(
    principal: f64,
    annual_rate_percent: f64,
    term_years: i32,
) -> NapiResult<String> {
    let params = LoanParameters::try_from_f64(principal, annual_rate_percent, term_years)
        .map_err(to_napi_error)?;
    let output = amortization::compute_schedule(&params).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn monthly_payment(input_json: String) -> NapiResult<String> {
    let params = parse_params(&input_json)?;
    let output = amortization::quote_payment(&params).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Reporting
// ---------------------------------------------------------------------------

#[napi]
pub fn analyze_loan(input_json: String) -> NapiResult<String> {
    let params = parse_params(&input_json)?;
    let output = reporting::analyze_loan(&params).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
