pub mod params;
pub mod schedule;

pub use params::LoanParameters;
pub use schedule::{build_schedule, compute_schedule, quote_payment};
pub use schedule::{AmortizationRow, PaymentQuote, PaymentSchedule};
