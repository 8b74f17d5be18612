//! Field predicates for the signup form.
//!
//! Pure functions — no I/O, easily testable. Each predicate maps the
//! current value of one input to `Ok(())` or the [`ValidationError`]
//! whose message belongs in that input's error slot.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Field, FieldVerdict, SignupValues, ValidationError, ValidationReport};

/// At least 2 characters, ASCII letters and whitespace only.
static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]{2,}$").expect("Invalid name regex"));

/// `local@domain.tld`: no whitespace, a single `@`, a dot after it.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// 8+ ASCII letters or digits. Character-class requirements are checked
/// separately since the regex engine has no lookahead.
static PASSWORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{8,}$").expect("Invalid password regex"));

/// Validate the full-name input. The value is trimmed first.
pub fn validate_name(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyField { field: Field::Name });
    }
    if !NAME_REGEX.is_match(value) {
        return Err(ValidationError::InvalidFormat { field: Field::Name });
    }
    Ok(())
}

/// Validate the email input. The value is trimmed first.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyField { field: Field::Email });
    }
    if !EMAIL_REGEX.is_match(value) {
        return Err(ValidationError::InvalidFormat { field: Field::Email });
    }
    Ok(())
}

/// Validate the password input.
///
/// Blank input is reported as empty, but the format check runs on the
/// raw value: surrounding whitespace is part of a password.
pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField {
            field: Field::Password,
        });
    }
    if !is_strong_password(value) {
        return Err(ValidationError::InvalidFormat {
            field: Field::Password,
        });
    }
    Ok(())
}

/// Validate the confirmation input against the current password value.
pub fn validate_confirm_password(value: &str, password_value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField {
            field: Field::ConfirmPassword,
        });
    }
    if value != password_value {
        return Err(ValidationError::Mismatch);
    }
    Ok(())
}

/// Run the predicate belonging to `field` against the current values.
pub fn validate_field(field: Field, values: &SignupValues) -> Result<(), ValidationError> {
    match field {
        Field::Name => validate_name(&values.name),
        Field::Email => validate_email(&values.email),
        Field::Password => validate_password(&values.password),
        Field::ConfirmPassword => validate_confirm_password(&values.confirm_password, &values.password),
    }
}

/// Run every predicate, regardless of earlier failures.
pub fn validate_all(values: &SignupValues) -> ValidationReport {
    let verdicts = Field::ALL
        .iter()
        .map(|&field| FieldVerdict {
            field,
            error: validate_field(field, values).err(),
        })
        .collect();
    ValidationReport::from_verdicts(verdicts)
}

// ============================================================================
// INTERNAL
// ============================================================================

fn is_strong_password(value: &str) -> bool {
    PASSWORD_REGEX.is_match(value)
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn values(name: &str, email: &str, password: &str, confirm: &str) -> SignupValues {
        SignupValues {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    // -- Name --

    #[test]
    fn name_accepts_two_letters() {
        assert_eq!(validate_name("Jo"), Ok(()));
        assert_eq!(validate_name("  Ada Lovelace  "), Ok(()));
    }

    #[test]
    fn name_rejects_single_letter() {
        assert_eq!(
            validate_name("J"),
            Err(ValidationError::InvalidFormat { field: Field::Name })
        );
    }

    #[test]
    fn name_rejects_digits_and_punctuation() {
        assert!(matches!(validate_name("J0e"), Err(ValidationError::InvalidFormat { .. })));
        assert!(matches!(validate_name("O'Brien"), Err(ValidationError::InvalidFormat { .. })));
    }

    // -- Email --

    #[test]
    fn email_accepts_basic_shape() {
        assert_eq!(validate_email("a@b.co"), Ok(()));
        assert_eq!(validate_email(" user@mail.example.org "), Ok(()));
    }

    #[test]
    fn email_rejects_malformed() {
        for bad in ["a@b", "a.com", "a @b.com", "a@@b.com", "@b.com"] {
            assert_eq!(
                validate_email(bad),
                Err(ValidationError::InvalidFormat { field: Field::Email }),
                "{bad:?} should be rejected"
            );
        }
    }

    // -- Password --

    #[test]
    fn password_accepts_mixed_case_with_digit() {
        assert_eq!(validate_password("Abcdefg1"), Ok(()));
    }

    #[test]
    fn password_rejects_each_missing_class() {
        for bad in ["abcdefg1", "ABCDEFG1", "Abcdefgh", "Abcdefg", "Ab1"] {
            assert_eq!(
                validate_password(bad),
                Err(ValidationError::InvalidFormat {
                    field: Field::Password
                }),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn password_rejects_symbols() {
        assert!(validate_password("Abcdefg1!").is_err());
        assert!(validate_password(" Abcdefg1").is_err());
    }

    // -- Confirm --

    #[test]
    fn confirm_mismatch() {
        assert_eq!(
            validate_confirm_password("Abcdefg2", "Abcdefg1"),
            Err(ValidationError::Mismatch)
        );
    }

    #[test]
    fn confirm_empty_wins_over_mismatch() {
        assert_eq!(
            validate_confirm_password("", "Abcdefg1"),
            Err(ValidationError::EmptyField {
                field: Field::ConfirmPassword
            })
        );
    }

    // -- All --

    #[test]
    fn validate_all_passes_good_values() {
        let report = validate_all(&values("Jo", "a@b.co", "Abcdefg1", "Abcdefg1"));
        assert!(report.is_valid());
        assert_eq!(report.fields.len(), 4);
    }

    #[test]
    fn validate_all_reports_every_failure() {
        let report = validate_all(&values("", "a.com", "Abcdefg1", "nope"));
        assert!(!report.is_valid());
        let errors: Vec<_> = report.fields.iter().map(|v| v.error).collect();
        assert_eq!(
            errors,
            vec![
                Some(ValidationError::EmptyField { field: Field::Name }),
                Some(ValidationError::InvalidFormat { field: Field::Email }),
                None,
                Some(ValidationError::Mismatch),
            ]
        );
    }

    #[test]
    fn validate_all_is_idempotent() {
        let v = values("J", "a@b", "abc", "abd");
        assert_eq!(validate_all(&v), validate_all(&v));
    }

    proptest! {
        #[test]
        fn blank_input_is_empty_field(blank in "[ \t\n]{0,8}") {
            let checks = [
                validate_name(&blank),
                validate_email(&blank),
                validate_password(&blank),
                validate_confirm_password(&blank, "Abcdefg1"),
            ];
            for result in checks {
                let err = result.unwrap_err();
                prop_assert!(matches!(err, ValidationError::EmptyField { .. }), "expected EmptyField, got {:?}", err);
                prop_assert!(!err.to_string().is_empty());
            }
        }

        #[test]
        fn confirm_matches_itself(p in "[ -~]{1,24}") {
            prop_assume!(!p.trim().is_empty());
            prop_assert_eq!(validate_confirm_password(&p, &p), Ok(()));
        }

        #[test]
        fn confirm_rejects_different(a in "[a-zA-Z0-9]{1,12}", b in "[a-zA-Z0-9]{1,12}") {
            prop_assume!(a != b);
            prop_assert_eq!(validate_confirm_password(&a, &b), Err(ValidationError::Mismatch));
        }

        #[test]
        fn letters_and_spaces_are_names(name in "[a-zA-Z][a-zA-Z ]{0,16}[a-zA-Z]") {
            prop_assert_eq!(validate_name(&name), Ok(()));
        }

        #[test]
        fn validate_all_matches_individual_rules(
            name in "[a-zA-Z0-9 ]{0,6}",
            email in "[a-z@. ]{0,8}",
            password in "[a-zA-Z0-9]{0,10}",
            confirm in "[a-zA-Z0-9]{0,10}",
        ) {
            let v = values(&name, &email, &password, &confirm);
            let expected = validate_name(&name).is_ok()
                && validate_email(&email).is_ok()
                && validate_password(&password).is_ok()
                && validate_confirm_password(&confirm, &password).is_ok();
            prop_assert_eq!(validate_all(&v).is_valid(), expected);
        }
    }
}
