//! Pure, side-effect-free validation of the application draft.

use super::domain::{ApplicationForm, FieldErrorMap, FormField};
use super::normalizer::strip_non_digits;

/// Validate the draft wholesale, returning only the fields that failed.
///
/// Each rule is evaluated independently, so multiple errors coexist in one
/// pass. The form itself is never mutated; phone and SSN are digit-stripped
/// into locals purely for length checks.
pub fn validate(form: &ApplicationForm) -> FieldErrorMap {
    let mut errors = FieldErrorMap::default();

    if form.name.trim().is_empty() {
        errors.insert(FormField::Name, "Name is required.");
    }

    if form.address.trim().is_empty() {
        errors.insert(FormField::Address, "Address is required.");
    }

    if form.email.trim().is_empty() {
        errors.insert(FormField::Email, "Email is required.");
    } else if !is_valid_email(form.email.trim()) {
        errors.insert(
            FormField::Email,
            "Please enter a valid email address (e.g., jane@example.com).",
        );
    }

    let phone_digits = strip_non_digits(&form.phone);
    if phone_digits.is_empty() {
        errors.insert(FormField::Phone, "Phone is required.");
    } else if phone_digits.len() != 10 {
        errors.insert(FormField::Phone, "Phone must contain exactly 10 digits.");
    }

    let ssn_digits = strip_non_digits(&form.ssn);
    if ssn_digits.is_empty() {
        errors.insert(FormField::Ssn, "SSN is required.");
    } else if !(9..=10).contains(&ssn_digits.len()) {
        errors.insert(FormField::Ssn, "SSN must contain 9–10 digits.");
    }

    if form.requested_amount.trim().is_empty() {
        errors.insert(FormField::RequestedAmount, "Requested amount is required.");
    }

    errors
}

/// Shape check for `local-part @ domain-labels . alpha-TLD (len >= 2)`.
///
/// Local part accepts alphanumerics plus `._%+-`; domain labels accept
/// alphanumerics plus `.-`; the TLD must be alphabetic and at least two
/// characters long.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'))
    {
        return false;
    }

    let Some((labels, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    if labels.is_empty()
        || !labels
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'))
    {
        return false;
    }

    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ApplicationForm {
        ApplicationForm {
            name: "Jane Doe".to_string(),
            address: "123 Main St".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-111-2222".to_string(),
            ssn: "123-45-6789".to_string(),
            requested_amount: "25000".to_string(),
            employment_status: String::new(),
            monthly_income: String::new(),
            existing_debt: String::new(),
        }
    }

    #[test]
    fn complete_form_produces_no_errors() {
        assert!(validate(&filled_form()).is_empty());
    }

    #[test]
    fn empty_form_flags_every_required_field() {
        let errors = validate(&ApplicationForm::default());
        assert_eq!(errors.get(FormField::Name), Some("Name is required."));
        assert_eq!(errors.get(FormField::Address), Some("Address is required."));
        assert_eq!(errors.get(FormField::Email), Some("Email is required."));
        assert_eq!(errors.get(FormField::Phone), Some("Phone is required."));
        assert_eq!(errors.get(FormField::Ssn), Some("SSN is required."));
        assert_eq!(
            errors.get(FormField::RequestedAmount),
            Some("Requested amount is required.")
        );
        assert_eq!(errors.len(), 6);
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut form = filled_form();
        form.name = "   ".to_string();
        form.address = "\t".to_string();
        let errors = validate(&form);
        assert_eq!(errors.get(FormField::Name), Some("Name is required."));
        assert_eq!(errors.get(FormField::Address), Some("Address is required."));
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for bad in [
            "invalidemail",
            "jane@",
            "@example.com",
            "jane@example",
            "jane@example.c",
            "jane@example.c0m",
            "jane doe@example.com",
            "jane@ex ample.com",
        ] {
            let mut form = filled_form();
            form.email = bad.to_string();
            let errors = validate(&form);
            assert_eq!(
                errors.get(FormField::Email),
                Some("Please enter a valid email address (e.g., jane@example.com)."),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn well_formed_emails_pass() {
        for good in [
            "jane@example.com",
            "jane.doe+loans@mail.example.co",
            "JANE_D%ADMIN@EXAMPLE.ORG",
            "a@b.io",
        ] {
            let mut form = filled_form();
            form.email = good.to_string();
            assert!(
                validate(&form).get(FormField::Email).is_none(),
                "expected {good:?} to be accepted"
            );
        }
    }

    #[test]
    fn phone_length_is_checked_after_digit_stripping() {
        let mut form = filled_form();
        form.phone = "(555) 111-2222".to_string();
        assert!(validate(&form).get(FormField::Phone).is_none());

        form.phone = "555-1111".to_string();
        assert_eq!(
            validate(&form).get(FormField::Phone),
            Some("Phone must contain exactly 10 digits.")
        );

        form.phone = "---".to_string();
        assert_eq!(
            validate(&form).get(FormField::Phone),
            Some("Phone is required.")
        );
    }

    #[test]
    fn ssn_accepts_nine_or_ten_digits() {
        let mut form = filled_form();
        for ok in ["123456789", "1234567890", "123-45-6789"] {
            form.ssn = ok.to_string();
            assert!(
                validate(&form).get(FormField::Ssn).is_none(),
                "expected {ok:?} to be accepted"
            );
        }
        for bad in ["12345678", "12345678901"] {
            form.ssn = bad.to_string();
            assert_eq!(
                validate(&form).get(FormField::Ssn),
                Some("SSN must contain 9–10 digits."),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn extended_schema_fields_are_optional() {
        let mut form = filled_form();
        form.employment_status = String::new();
        form.monthly_income = String::new();
        form.existing_debt = String::new();
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn validation_does_not_mutate_the_form() {
        let form = filled_form();
        let snapshot = form.clone();
        let _ = validate(&form);
        assert_eq!(form, snapshot);
    }
}
