//! Signup form state: inputs, error slots and the submission gate.
//!
//! Owned by the caller and mutated only through the methods below.
//! Validation itself is delegated to [`crate::validate`].

use tracing::{debug, info};

use crate::types::{Field, FormField, SignupValues};
use crate::validate::{validate_all, validate_field};

/// Message shown under the form after a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMessage {
    Success,
    FixErrors,
}

impl FormMessage {
    pub fn text(self) -> &'static str {
        match self {
            FormMessage::Success => "Registration successful!",
            FormMessage::FixErrors => "Please fix the errors above.",
        }
    }
}

/// What a submission attempt produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every rule passed; inputs and slots were cleared.
    Registered,
    /// At least one rule failed; its slot now holds the message.
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupForm {
    name: FormField,
    email: FormField,
    password: FormField,
    confirm_password: FormField,
    /// Input receiving keystrokes.
    pub focused: Field,
    /// Outcome of the last submission; cleared by any edit.
    pub message: Option<FormMessage>,
}

impl Default for SignupForm {
    fn default() -> Self {
        SignupForm {
            name: FormField::default(),
            email: FormField::default(),
            password: FormField::default(),
            confirm_password: FormField::default(),
            focused: Field::Name,
            message: None,
        }
    }
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: Field) -> &FormField {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut FormField {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        }
    }

    /// Snapshot of the raw input values.
    pub fn values(&self) -> SignupValues {
        SignupValues {
            name: self.name.raw_value.clone(),
            email: self.email.raw_value.clone(),
            password: self.password.raw_value.clone(),
            confirm_password: self.confirm_password.raw_value.clone(),
        }
    }

    /// Replace the value of one input without validating it.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.field_mut(field).raw_value = value.into();
    }

    // ------------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------------

    pub fn insert_char(&mut self, c: char) {
        let focused = self.focused;
        self.field_mut(focused).raw_value.push(c);
        self.message = None;
    }

    pub fn delete_char(&mut self) {
        let focused = self.focused;
        self.field_mut(focused).raw_value.pop();
        self.message = None;
    }

    /// Move focus to the next input; the one left behind is blurred.
    pub fn focus_next(&mut self) {
        let left = self.focused;
        self.focused = left.next();
        self.blur(left);
    }

    /// Move focus to the previous input; the one left behind is blurred.
    pub fn focus_prev(&mut self) {
        let left = self.focused;
        self.focused = left.prev();
        self.blur(left);
    }

    // ------------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------------

    /// Run one field's rule and write or clear its error slot.
    ///
    /// Returns whether the field passed.
    pub fn blur(&mut self, field: Field) -> bool {
        let verdict = validate_field(field, &self.values()).err();
        debug!(?field, error = ?verdict, "field blurred");
        let slot = self.field_mut(field);
        slot.error = verdict;
        slot.is_valid()
    }

    /// Re-run every rule and write every error slot.
    pub fn validate_all(&mut self) -> bool {
        let report = validate_all(&self.values());
        for verdict in &report.fields {
            self.field_mut(verdict.field).error = verdict.error;
        }
        report.is_valid()
    }

    /// Attempt a (simulated) registration.
    ///
    /// On success every error slot is cleared and every input reset.
    /// On failure inputs are kept so the user can fix them.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.validate_all() {
            for field in Field::ALL {
                *self.field_mut(field) = FormField::default();
            }
            self.focused = Field::Name;
            self.message = Some(FormMessage::Success);
            info!("signup submitted");
            SubmitOutcome::Registered
        } else {
            self.message = Some(FormMessage::FixErrors);
            let failed = Field::ALL.iter().filter(|&&f| !self.field(f).is_valid()).count();
            info!(failed, "signup rejected");
            SubmitOutcome::Rejected
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValidationError;

    fn filled(name: &str, email: &str, password: &str, confirm: &str) -> SignupForm {
        let mut form = SignupForm::new();
        form.set_value(Field::Name, name);
        form.set_value(Field::Email, email);
        form.set_value(Field::Password, password);
        form.set_value(Field::ConfirmPassword, confirm);
        form
    }

    #[test]
    fn blur_writes_then_clears_slot() {
        let mut form = SignupForm::new();
        form.set_value(Field::Email, "a@b");
        assert!(!form.blur(Field::Email));
        assert_eq!(
            form.field(Field::Email).error_message(),
            "Please enter a valid email address."
        );

        form.set_value(Field::Email, "a@b.co");
        assert!(form.blur(Field::Email));
        assert_eq!(form.field(Field::Email).error_message(), "");
    }

    #[test]
    fn blur_touches_only_its_field() {
        let mut form = SignupForm::new();
        form.blur(Field::Name);
        assert!(!form.field(Field::Name).is_valid());
        assert!(form.field(Field::Email).is_valid());
    }

    #[test]
    fn focus_change_blurs_previous_field() {
        let mut form = SignupForm::new();
        form.insert_char('J');
        form.focus_next();
        assert_eq!(form.focused, Field::Email);
        assert_eq!(
            form.field(Field::Name).error,
            Some(ValidationError::InvalidFormat { field: Field::Name })
        );
    }

    #[test]
    fn typing_edits_focused_field_and_clears_message() {
        let mut form = SignupForm::new();
        form.message = Some(FormMessage::FixErrors);
        form.insert_char('A');
        form.insert_char('x');
        form.delete_char();
        assert_eq!(form.field(Field::Name).raw_value, "A");
        assert_eq!(form.message, None);
    }

    #[test]
    fn submit_success_resets_form() {
        let mut form = filled("Jo", "a@b.co", "Abcdefg1", "Abcdefg1");
        form.focused = Field::Password;
        assert_eq!(form.submit(), SubmitOutcome::Registered);
        assert_eq!(form.message, Some(FormMessage::Success));
        assert_eq!(form.values(), SignupValues::default());
        assert_eq!(form.focused, Field::Name);
        assert!(Field::ALL.iter().all(|&f| form.field(f).is_valid()));
    }

    #[test]
    fn submit_failure_keeps_inputs() {
        let mut form = filled("Jo", "a@b.co", "Abcdefg1", "Abcdefg2");
        assert_eq!(form.submit(), SubmitOutcome::Rejected);
        assert_eq!(form.message, Some(FormMessage::FixErrors));
        assert_eq!(form.field(Field::ConfirmPassword).raw_value, "Abcdefg2");
        assert_eq!(
            form.field(Field::ConfirmPassword).error,
            Some(ValidationError::Mismatch)
        );
    }

    #[test]
    fn submit_revalidates_regardless_of_prior_blur() {
        let mut form = filled("Jo", "a@b.co", "Abcdefg1", "Abcdefg1");
        form.blur(Field::Name);
        // Edit after the blur: the stale "valid" slot must not count.
        form.set_value(Field::Name, "J");
        assert_eq!(form.submit(), SubmitOutcome::Rejected);
    }

    #[test]
    fn validate_all_is_idempotent() {
        let mut form = filled("J", "a.com", "abc", "");
        let first = form.validate_all();
        let snapshot = form.clone();
        let second = form.validate_all();
        assert_eq!(first, second);
        assert_eq!(form, snapshot);
    }
}
