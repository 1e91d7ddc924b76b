use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fields collected by the loan application form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Name,
    Address,
    Email,
    Phone,
    Ssn,
    RequestedAmount,
    EmploymentStatus,
    MonthlyIncome,
    ExistingDebt,
}

impl FormField {
    /// Human-readable label used when rendering field errors.
    pub const fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Address => "Address",
            FormField::Email => "Email",
            FormField::Phone => "Phone",
            FormField::Ssn => "SSN",
            FormField::RequestedAmount => "Requested amount",
            FormField::EmploymentStatus => "Employment status",
            FormField::MonthlyIncome => "Monthly income",
            FormField::ExistingDebt => "Existing debt",
        }
    }
}

/// Mutable draft of a loan application. Every field is textual at input
/// time; normalization and numeric coercion happen only when a payload is
/// built after validation passes.
///
/// The three trailing fields are the extended schema: optional at intake,
/// carried through to the decision service when provided.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationForm {
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub ssn: String,
    pub requested_amount: String,
    pub employment_status: String,
    pub monthly_income: String,
    pub existing_debt: String,
}

impl ApplicationForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Address => &self.address,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Ssn => &self.ssn,
            FormField::RequestedAmount => &self.requested_amount,
            FormField::EmploymentStatus => &self.employment_status,
            FormField::MonthlyIncome => &self.monthly_income,
            FormField::ExistingDebt => &self.existing_debt,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Address => &mut self.address,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Ssn => &mut self.ssn,
            FormField::RequestedAmount => &mut self.requested_amount,
            FormField::EmploymentStatus => &mut self.employment_status,
            FormField::MonthlyIncome => &mut self.monthly_income,
            FormField::ExistingDebt => &mut self.existing_debt,
        };
        *slot = value.into();
    }

    /// Restore the form to its freshly-mounted (all empty) state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Per-field validation errors. Absent key means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrorMap {
    entries: BTreeMap<FormField, String>,
}

impl FieldErrorMap {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    /// Optimistic clearing: drop the entry for an edited field without
    /// re-running validation.
    pub fn clear_field(&mut self, field: FormField) {
        self.entries.remove(&field);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.entries
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}
