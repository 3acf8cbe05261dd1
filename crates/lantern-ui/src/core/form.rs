//! Sign-up form state: per-field status and submission gating.

use crate::core::validation::{Field, FieldStatus, validate};

/// Raw values of the four inputs at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    /// Name input.
    pub name: String,
    /// Email input.
    pub email: String,
    /// Password input.
    pub password: String,
    /// Phone input.
    pub phone: String,
}

impl FormValues {
    /// Raw value of `field`.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Phone => &self.phone,
        }
    }
}

/// Validation state of the whole form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    statuses: [FieldStatus; 4],
}

impl FormState {
    /// All fields untouched.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status of one field.
    #[must_use]
    pub const fn status(&self, field: Field) -> FieldStatus {
        self.statuses[field.index()]
    }

    /// Re-check one field after an input event.
    pub fn input(&mut self, field: Field, raw: &str) -> FieldStatus {
        let status = FieldStatus::from_valid(validate(field, raw));
        self.statuses[field.index()] = status;
        status
    }

    /// Re-check every field. Returns true when all four pass.
    ///
    /// All fields are checked even after a failure so each shows feedback.
    pub fn submit(&mut self, values: &FormValues) -> bool {
        Field::ALL
            .into_iter()
            .map(|field| self.input(field, values.value(field)))
            .fold(true, |all, status| all && status.is_valid())
    }

    /// True when every field is currently valid.
    #[must_use]
    pub fn all_valid(&self) -> bool {
        self.statuses.iter().all(|status| status.is_valid())
    }

    /// Clear success markers after a successful submission. Fields made
    /// invalid since then keep their error state.
    pub fn clear_success(&mut self) {
        for status in &mut self.statuses {
            if status.is_valid() {
                *status = FieldStatus::Untouched;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_values() -> FormValues {
        FormValues {
            name: "John Smith".to_string(),
            email: "john@example.com".to_string(),
            password: "Abcdef1!".to_string(),
            phone: "1234567890".to_string(),
        }
    }

    #[test]
    fn input_moves_between_invalid_and_valid() {
        let mut form = FormState::new();
        assert_eq!(form.status(Field::Name), FieldStatus::Untouched);
        assert_eq!(form.input(Field::Name, "J"), FieldStatus::Invalid);
        assert_eq!(form.input(Field::Name, "Jo"), FieldStatus::Valid);
        assert_eq!(form.input(Field::Name, "Jo1"), FieldStatus::Invalid);
        assert_eq!(form.status(Field::Email), FieldStatus::Untouched);
    }

    #[test]
    fn submit_checks_every_field_even_after_a_failure() {
        let mut form = FormState::new();
        let values = FormValues {
            name: "J".to_string(),
            ..valid_values()
        };
        assert!(!form.submit(&values));
        assert_eq!(form.status(Field::Name), FieldStatus::Invalid);
        assert_eq!(form.status(Field::Phone), FieldStatus::Valid);
    }

    #[test]
    fn submit_accepts_all_valid_and_clear_success_resets() {
        let mut form = FormState::new();
        assert!(form.submit(&valid_values()));
        assert!(form.all_valid());
        form.clear_success();
        for field in Field::ALL {
            assert_eq!(form.status(field), FieldStatus::Untouched);
        }
    }

    #[test]
    fn clear_success_keeps_invalid_fields() {
        let mut form = FormState::new();
        assert!(form.submit(&valid_values()));
        form.input(Field::Email, "a@");
        form.clear_success();
        assert_eq!(form.status(Field::Email), FieldStatus::Invalid);
        assert_eq!(form.status(Field::Name), FieldStatus::Untouched);
    }
}
