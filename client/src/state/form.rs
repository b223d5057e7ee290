//! Per-field form state and the submit lifecycle.
//!
//! DESIGN
//! ======
//! Each field carries `{ value, touched, error }`. A field becomes touched on
//! blur or on a submit attempt; only touched fields display errors. Once
//! touched, every edit re-validates the field so a corrected value clears its
//! message immediately.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::util::validation::{Field, FieldErrors, FormValues, validate_field, validate_form};

/// State of a single input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub touched: bool,
    /// First failing rule's message, present only once the field is touched.
    pub error: Option<&'static str>,
}

impl FieldState {
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        self.error.is_some()
    }

    fn revalidate(&mut self, field: Field) {
        self.error = validate_field(field, &self.value);
    }
}

/// Form-wide state owned by the form page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    fields: [FieldState; 5],
    /// Set while a submit attempt is being handled.
    pub is_submitting: bool,
    /// Number of submit attempts, valid or not.
    pub submit_count: u32,
}

impl FormState {
    #[must_use]
    pub fn field(&self, field: Field) -> &FieldState {
        &self.fields[field.index()]
    }

    fn field_mut(&mut self, field: Field) -> &mut FieldState {
        &mut self.fields[field.index()]
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        &self.field(field).value
    }

    /// Store a new raw value from an input event.
    pub fn input(&mut self, field: Field, value: String) {
        let state = self.field_mut(field);
        state.value = value;
        if state.touched {
            state.revalidate(field);
        }
    }

    /// Field lost focus: mark it touched and run its rules.
    pub fn blur(&mut self, field: Field) {
        let state = self.field_mut(field);
        state.touched = true;
        state.revalidate(field);
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(FieldState::is_invalid)
    }

    /// Validate every field and, when all pass, hand back the validated values.
    ///
    /// Every field is marked touched and receives its current first failure
    /// (or none). Field values are left as typed. Clears `is_submitting`.
    ///
    /// # Errors
    ///
    /// Returns the per-field failures when any rule fails.
    pub fn submit(&mut self) -> Result<FormValues, FieldErrors> {
        self.submit_count += 1;

        let outcome = validate_form(|field| self.value(field));
        let errors = outcome.as_ref().err().cloned().unwrap_or_default();
        for field in Field::ALL {
            let state = self.field_mut(field);
            state.touched = true;
            state.error = errors.get(field);
        }

        self.is_submitting = false;
        outcome
    }
}
