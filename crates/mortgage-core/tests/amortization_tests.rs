use mortgage_core::amortization::{build_schedule, compute_schedule, LoanParameters};
use mortgage_core::MortgageError;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn standard_loan() -> LoanParameters {
    // 600k over 25 years at 4.5%
    LoanParameters::new(dec!(600000), dec!(4.5), 25)
}

fn assert_invalid_input(params: LoanParameters, expected_field: &str) {
    match build_schedule(&params) {
        Err(MortgageError::InvalidInput { field, .. }) => assert_eq!(field, expected_field),
        Err(other) => panic!("Expected InvalidInput for {expected_field}, got {other:?}"),
        Ok(s) => panic!(
            "Expected InvalidInput for {expected_field}, got schedule of {} rows",
            s.rows.len()
        ),
    }
}

// ===========================================================================
// Schedule shape
// ===========================================================================

#[test]
fn test_row_count_matches_term() {
    for term in [1, 5, 15, 25, 30, 40] {
        let params = LoanParameters::new(dec!(250000), dec!(5.25), term);
        let schedule = build_schedule(&params).unwrap();
        assert_eq!(schedule.rows.len(), term as usize * 12, "term {term}");
    }
}

#[test]
fn test_months_are_sequential_from_one() {
    let schedule = build_schedule(&standard_loan()).unwrap();
    for (idx, row) in schedule.rows.iter().enumerate() {
        assert_eq!(row.month, idx as u32 + 1);
    }
}

#[test]
fn test_payment_identical_on_every_row() {
    let schedule = build_schedule(&standard_loan()).unwrap();
    assert!(schedule
        .rows
        .iter()
        .all(|r| r.payment == schedule.monthly_payment));
}

// ===========================================================================
// Arithmetic properties
// ===========================================================================

#[test]
fn test_principal_plus_interest_equals_payment() {
    let schedule = build_schedule(&standard_loan()).unwrap();
    let eps = schedule.monthly_payment * dec!(0.000001);
    for row in &schedule.rows {
        let diff = (row.principal_portion + row.interest_portion - row.payment).abs();
        assert!(diff <= eps, "month {}: diff {}", row.month, diff);
    }
}

#[test]
fn test_balance_non_increasing() {
    for rate in [dec!(0), dec!(0.5), dec!(4.5), dec!(12)] {
        let params = LoanParameters::new(dec!(350000), rate, 30);
        let schedule = build_schedule(&params).unwrap();
        let mut previous = params.principal;
        for row in &schedule.rows {
            assert!(
                row.remaining_balance <= previous,
                "rate {rate}, month {}: {} > {}",
                row.month,
                row.remaining_balance,
                previous
            );
            previous = row.remaining_balance;
        }
    }
}

#[test]
fn test_final_balance_converges_to_zero() {
    let schedule = build_schedule(&standard_loan()).unwrap();
    let last = schedule.rows.last().unwrap();
    assert_eq!(last.month, 300);
    assert!(
        last.remaining_balance.abs() < dec!(0.01),
        "residual balance {}",
        last.remaining_balance
    );
}

#[test]
fn test_known_annuity_payment() {
    // P * r(1+r)^n / ((1+r)^n - 1) with r = 0.00375, n = 300 is 3334.9949
    let schedule = build_schedule(&standard_loan()).unwrap();
    assert!(
        (schedule.monthly_payment - dec!(3334.99)).abs() < dec!(0.01),
        "got {}",
        schedule.monthly_payment
    );
}

#[test]
fn test_payment_matches_independent_formula() {
    let r = dec!(0.00375);
    let mut factor = Decimal::ONE;
    for _ in 0..300 {
        factor *= Decimal::ONE + r;
    }
    let expected = dec!(600000) * r * factor / (factor - Decimal::ONE);

    let schedule = build_schedule(&standard_loan()).unwrap();
    assert!((schedule.monthly_payment - expected).abs() < dec!(0.000001));
}

#[test]
fn test_deterministic_output() {
    let a = build_schedule(&standard_loan()).unwrap();
    let b = build_schedule(&standard_loan()).unwrap();
    assert_eq!(a, b);
    for (x, y) in a.rows.iter().zip(&b.rows) {
        assert_eq!(x.remaining_balance.serialize(), y.remaining_balance.serialize());
    }
}

#[test]
fn test_zero_rate_schedule() {
    let params = LoanParameters::new(dec!(120000), dec!(0), 10);
    let schedule = build_schedule(&params).unwrap();
    assert_eq!(schedule.monthly_payment, dec!(1000.00));
    assert_eq!(schedule.rows.len(), 120);
    for row in &schedule.rows {
        assert_eq!(row.interest_portion, Decimal::ZERO);
        assert_eq!(row.principal_portion, dec!(1000.00));
    }
}

// ===========================================================================
// Rejection
// ===========================================================================

#[test]
fn test_rejects_zero_principal() {
    assert_invalid_input(LoanParameters::new(dec!(0), dec!(4.5), 25), "principal");
}

#[test]
fn test_rejects_negative_principal() {
    assert_invalid_input(LoanParameters::new(dec!(-100), dec!(4.5), 25), "principal");
}

#[test]
fn test_rejects_zero_term() {
    assert_invalid_input(LoanParameters::new(dec!(600000), dec!(4.5), 0), "term_years");
}

#[test]
fn test_rejects_negative_term() {
    assert_invalid_input(LoanParameters::new(dec!(600000), dec!(4.5), -5), "term_years");
}

#[test]
fn test_rejects_negative_rate() {
    let params = LoanParameters::new(dec!(600000), dec!(-0.5), 25);
    assert!(matches!(
        compute_schedule(&params),
        Err(MortgageError::NegativeRate { .. })
    ));
}

#[test]
fn test_rejects_non_finite_f64() {
    for (p, r) in [(f64::NAN, 4.5), (600000.0, f64::NAN), (f64::INFINITY, 4.5)] {
        assert!(matches!(
            LoanParameters::try_from_f64(p, r, 25),
            Err(MortgageError::InvalidInput { .. })
        ));
    }
}

#[test]
fn test_f64_inputs_match_decimal_inputs() {
    let from_f64 = LoanParameters::try_from_f64(600000.0, 4.5, 25).unwrap();
    let a = build_schedule(&from_f64).unwrap();
    let b = build_schedule(&standard_loan()).unwrap();
    assert_eq!(a.monthly_payment, b.monthly_payment);
}

// ===========================================================================
// Serialization
// ===========================================================================

#[test]
fn test_envelope_serializes_decimals_as_strings() {
    let out = compute_schedule(&LoanParameters::new(dec!(120000), dec!(0), 10)).unwrap();
    let json = serde_json::to_value(&out).unwrap();
    let payment: Decimal = json["result"]["monthly_payment"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(payment, dec!(1000));
    assert_eq!(json["result"]["rows"][0]["month"], 1);
    assert_eq!(json["assumptions"]["principal"], "120000");
    assert_eq!(json["metadata"]["precision"], "rust_decimal_128bit");
}

#[test]
fn test_parameters_round_trip_from_json() {
    let params: LoanParameters = serde_json::from_str(
        r#"{"principal": "600000", "annual_rate_percent": "4.5", "term_years": 25}"#,
    )
    .unwrap();
    assert_eq!(params, standard_loan());
}
