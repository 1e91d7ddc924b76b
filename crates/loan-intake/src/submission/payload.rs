//! Wire types exchanged with the decision service.

use serde::{Deserialize, Serialize};

use crate::form::{parse_amount, strip_non_digits, AmountParseError, ApplicationForm};

/// Request body sent to the decision endpoint. Built only from a draft
/// that already passed validation; immutable once constructed.
///
/// Phone and SSN carry digits only, amounts are numeric, everything else
/// passes through unchanged. Extended-schema fields are omitted from the
/// body entirely when the applicant left them blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPayload {
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub ssn: String,
    pub requested_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_income: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub existing_debt: Option<f64>,
}

/// Amount coercion failed while building a payload. Reaching this after a
/// clean validation pass means the input affordance let a non-numeric
/// amount through; it is a defect signal, not a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} is not numeric: {source}")]
pub struct PayloadError {
    pub field: &'static str,
    #[source]
    pub source: AmountParseError,
}

impl NormalizedPayload {
    pub fn from_form(form: &ApplicationForm) -> Result<Self, PayloadError> {
        let amount = |field: &'static str, raw: &str| {
            parse_amount(raw).map_err(|source| PayloadError { field, source })
        };

        let optional_amount = |field: &'static str, raw: &str| {
            if raw.trim().is_empty() {
                Ok(None)
            } else {
                amount(field, raw).map(Some)
            }
        };

        Ok(Self {
            name: form.name.clone(),
            address: form.address.clone(),
            email: form.email.clone(),
            phone: strip_non_digits(&form.phone),
            ssn: strip_non_digits(&form.ssn),
            requested_amount: amount("requestedAmount", &form.requested_amount)?,
            employment_status: if form.employment_status.trim().is_empty() {
                None
            } else {
                Some(form.employment_status.clone())
            },
            monthly_income: optional_amount("monthlyIncome", &form.monthly_income)?,
            existing_debt: optional_amount("existingDebt", &form.existing_debt)?,
        })
    }
}

/// Verdict returned by the decision service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Approved,
    Denied,
}

/// Loan terms attached to an approval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanOffer {
    pub total_loan_amount: f64,
    /// Fraction, e.g. 0.075 for 7.5%.
    pub interest_rate: f64,
    pub term_months: u32,
    pub monthly_payment: f64,
}

/// Response body from the decision endpoint. This layer decodes the JSON
/// structure and nothing more; interpreting the verdict is the caller's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionPayload {
    pub decision: Decision,
    pub credit_lines: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer: Option<LoanOffer>,
}
