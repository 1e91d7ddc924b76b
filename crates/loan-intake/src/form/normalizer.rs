//! Input normalization applied before a payload is transmitted.

/// Remove every character outside `0-9`. Applied to phone and SSN input;
/// length enforcement is the validator's job. Idempotent.
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Failure to coerce a textual amount into a number.
///
/// Validation only checks presence for amount fields, so a non-numeric
/// value slipping past it is a caller/affordance defect rather than a
/// user-facing condition. It is still surfaced as a typed error so it
/// cannot silently corrupt a payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse {value:?} as a decimal amount")]
pub struct AmountParseError {
    pub value: String,
}

/// Parse a decimal amount string. Callers must validate presence first;
/// empty input is rejected here rather than producing an undefined number.
pub fn parse_amount(input: &str) -> Result<f64, AmountParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AmountParseError {
            value: input.to_string(),
        });
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| AmountParseError {
            value: input.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_from_phone_style_input() {
        assert_eq!(strip_non_digits("555-111-2222"), "5551112222");
        assert_eq!(strip_non_digits("(555) 111 2222"), "5551112222");
        assert_eq!(strip_non_digits("123-45-6789"), "123456789");
    }

    #[test]
    fn stripping_is_idempotent() {
        for raw in ["555-111-2222", "no digits", "", "  42  ", "123456789"] {
            let once = strip_non_digits(raw);
            assert_eq!(strip_non_digits(&once), once);
        }
    }

    #[test]
    fn parses_plain_and_fractional_amounts() {
        assert_eq!(parse_amount("25000"), Ok(25000.0));
        assert_eq!(parse_amount(" 1080.50 "), Ok(1080.5));
    }

    #[test]
    fn rejects_empty_and_non_numeric_amounts() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("   ").is_err());
        assert!(parse_amount("25,000").is_err());
        assert!(parse_amount("NaN").is_err());
    }
}
