use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;
use tracing::debug;

use mortgage_core::amortization::{self, LoanParameters};
use mortgage_core::reporting;

use crate::input;

const DEFAULT_PRINCIPAL: Decimal = dec!(600000);
const DEFAULT_RATE_PERCENT: Decimal = dec!(4.5);
const DEFAULT_TERM_YEARS: i32 = 25;

/// Loan inputs shared by every mortgage command
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct LoanArgs {
    /// Amount borrowed (default 600000)
    #[arg(long, alias = "loan-amount")]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (e.g. 4.5 for 4.5%, default 4.5)
    #[arg(long, alias = "interest-rate")]
    pub rate: Option<Decimal>,

    /// Loan term in whole years (default 25)
    #[arg(long, alias = "loan-term")]
    pub term_years: Option<i32>,

    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_schedule(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params = resolve_params(args)?;
    let result = amortization::compute_schedule(&params)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_payment(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params = resolve_params(args)?;
    let result = amortization::quote_payment(&params)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_summary(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params = resolve_params(args)?;
    let result = reporting::analyze_loan(&params)?;
    Ok(serde_json::to_value(result)?)
}

/// Input file first, then flags if any were given, then piped stdin, then defaults.
fn resolve_params(args: LoanArgs) -> Result<LoanParameters, Box<dyn std::error::Error>> {
    let params: LoanParameters = if let Some(ref path) = args.input {
        debug!(path = %path, "reading loan parameters from file");
        input::file::read_input(path)?
    } else if has_loan_flags(&args) {
        from_flags(&args)
    } else if let Some(params) = input::stdin::read_stdin()? {
        debug!("reading loan parameters from stdin");
        params
    } else {
        from_flags(&args)
    };
    Ok(params)
}

/// Stdin is never read once a loan flag is set.
fn has_loan_flags(args: &LoanArgs) -> bool {
    args.principal.is_some() || args.rate.is_some() || args.term_years.is_some()
}

fn from_flags(args: &LoanArgs) -> LoanParameters {
    LoanParameters::new(
        args.principal.unwrap_or(DEFAULT_PRINCIPAL),
        args.rate.unwrap_or(DEFAULT_RATE_PERCENT),
        args.term_years.unwrap_or(DEFAULT_TERM_YEARS),
    )
}
