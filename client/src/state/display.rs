//! Read-only snapshot of the last accepted submission.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use crate::util::validation::{Field, FormValues};

/// Last successfully validated values, shown below the form.
///
/// Starts empty (blank text, no age) and is replaced wholesale on every
/// accepted submit. Only constructible from `FormValues` or `Default`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayValues {
    first_name: String,
    last_name: String,
    age: Option<f64>,
    email: String,
    password: String,
}

impl From<FormValues> for DisplayValues {
    fn from(values: FormValues) -> Self {
        Self {
            first_name: values.first_name().to_owned(),
            last_name: values.last_name().to_owned(),
            age: Some(values.age()),
            email: values.email().to_owned(),
            password: values.password().to_owned(),
        }
    }
}

impl DisplayValues {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Text shown for `field`; age uses its shortest decimal form.
    #[must_use]
    pub fn text(&self, field: Field) -> String {
        match field {
            Field::FirstName => self.first_name.clone(),
            Field::LastName => self.last_name.clone(),
            Field::Age => format_age(self.age),
            Field::Email => self.email.clone(),
            Field::Password => self.password.clone(),
        }
    }
}

#[must_use]
pub fn format_age(age: Option<f64>) -> String {
    age.map(|a| a.to_string()).unwrap_or_default()
}
