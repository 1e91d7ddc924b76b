//! Plain-text rendering of field errors and decision outcomes.

use std::fmt::Write;

use loan_intake::{FieldErrorMap, SubmissionOutcome};

/// `$` plus thousands separators and exactly two decimal places.
pub(crate) fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.bytes().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit as char);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}

/// Fraction rendered as a percentage with one decimal place.
pub(crate) fn format_rate(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

pub(crate) fn render_field_errors(errors: &FieldErrorMap) -> String {
    let mut out = String::new();
    for (field, message) in errors.iter() {
        let _ = writeln!(out, "{}: {}", field.label(), message);
    }
    out
}

pub(crate) fn render_outcome(outcome: &SubmissionOutcome) -> String {
    let mut out = String::new();
    match outcome {
        SubmissionOutcome::Approved {
            credit_lines,
            offer,
        } => {
            let _ = writeln!(out, "Decision: APPROVED");
            let _ = writeln!(out, "Credit lines: {credit_lines}");
            if let Some(offer) = offer {
                let _ = writeln!(
                    out,
                    "Total loan amount: {}",
                    format_currency(offer.total_loan_amount)
                );
                let _ = writeln!(out, "Interest rate: {}", format_rate(offer.interest_rate));
                let _ = writeln!(out, "Term: {} months", offer.term_months);
                let _ = writeln!(
                    out,
                    "Monthly payment: {}",
                    format_currency(offer.monthly_payment)
                );
            }
        }
        SubmissionOutcome::Denied {
            credit_lines,
            reason,
        } => {
            let _ = writeln!(out, "Decision: DENIED");
            let _ = writeln!(out, "Credit lines: {credit_lines}");
            if let Some(reason) = reason {
                let _ = writeln!(out, "Reason: {reason}");
            }
        }
        SubmissionOutcome::Failed { message } => {
            let _ = writeln!(out, "Submission failed: {message}");
        }
    }
    out
}
