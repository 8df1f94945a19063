use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Deserialise piped stdin (JSON, or YAML which also covers JSON).
/// Returns None if stdin is a TTY (interactive) or empty.
pub fn read_stdin<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    parse_piped(&buffer)
}

fn parse_piped<T: DeserializeOwned>(buffer: &str) -> Result<Option<T>, Box<dyn std::error::Error>> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: T = serde_yaml::from_str(trimmed)
        .map_err(|e| format!("Failed to parse stdin: {}", e))?;
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mortgage_core::amortization::LoanParameters;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_stdin_is_none() {
        let parsed: Option<LoanParameters> = parse_piped("  \n").unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_json_and_yaml_stdin() {
        let json: LoanParameters = parse_piped(
            r#"{"principal": "250000", "annual_rate_percent": "3.5", "term_years": 30}"#,
        )
        .unwrap()
        .unwrap();
        let yaml: LoanParameters =
            parse_piped("principal: \"250000\"\nannual_rate_percent: \"3.5\"\nterm_years: 30\n")
                .unwrap()
                .unwrap();
        assert_eq!(json, yaml);
        assert_eq!(json.principal, dec!(250000));
    }

    #[test]
    fn test_malformed_stdin_is_error() {
        let parsed: Result<Option<LoanParameters>, _> = parse_piped("{not valid");
        assert!(parsed.is_err());
    }
}
