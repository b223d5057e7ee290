//! Field validation rules for the signup form.
//!
//! DESIGN
//! ======
//! Every field owns an ordered list of `(predicate, message)` rules. Rules run
//! in order and the first failing rule supplies the field's message, so the
//! `required` rule always wins over pattern, range, format, and length checks.
//! `validate_form` is the only way to obtain a `FormValues`, which keeps the
//! "display only shows validated input" invariant in the type system.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

pub const AGE_MIN: f64 = 0.0;
pub const AGE_MAX: f64 = 200.0;
/// Password bounds in UTF-16 code units, the unit browsers report as `length`.
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 20;

/// WHATWG "valid email address" grammar, the same shape browsers accept for
/// `<input type="email">`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

// =============================================================================
// FIELDS
// =============================================================================

/// The five inputs of the signup form, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Age,
    Email,
    Password,
}

impl Field {
    pub const ALL: [Self; 5] = [Self::FirstName, Self::LastName, Self::Age, Self::Email, Self::Password];

    /// Stable field name, used for element ids and log output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Age => "age",
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Age => "Age",
            Self::Email => "Email",
            Self::Password => "Password",
        }
    }

    /// HTML `type` attribute of the field's `<input>`.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::FirstName | Self::LastName => "text",
            Self::Age => "number",
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        self.label()
    }

    /// Position in `Field::ALL`.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

// =============================================================================
// RULES
// =============================================================================

/// One validation step: `check` returns `true` when the value passes.
#[derive(Clone, Copy)]
struct Rule {
    check: fn(&str) -> bool,
    message: &'static str,
}

const FIRST_NAME_RULES: &[Rule] = &[
    Rule { check: is_present, message: "First Name cannot be empty." },
    Rule { check: has_no_digits, message: "First name should not contain numbers" },
];

const LAST_NAME_RULES: &[Rule] = &[
    Rule { check: is_present, message: "Last Name cannot be empty." },
    Rule { check: has_no_digits, message: "Last name should not contain numbers" },
];

const AGE_RULES: &[Rule] = &[
    Rule { check: is_present_trimmed, message: "Age cannot be empty." },
    Rule { check: is_number, message: "age must be a `number` type" },
    Rule { check: is_at_least_age_min, message: "age must be greater than or equal to 0" },
    Rule { check: is_at_most_age_max, message: "age must be less than or equal to 200" },
];

const EMAIL_RULES: &[Rule] = &[
    Rule { check: is_present, message: "Email cannot be empty." },
    Rule { check: is_email, message: "Email should have correct format." },
];

const PASSWORD_RULES: &[Rule] = &[
    Rule { check: is_present, message: "Password cannot be empty." },
    Rule { check: is_long_enough, message: "password must be at least 8 characters" },
    Rule { check: is_short_enough, message: "password must be at most 20 characters" },
];

fn rules(field: Field) -> &'static [Rule] {
    match field {
        Field::FirstName => FIRST_NAME_RULES,
        Field::LastName => LAST_NAME_RULES,
        Field::Age => AGE_RULES,
        Field::Email => EMAIL_RULES,
        Field::Password => PASSWORD_RULES,
    }
}

fn is_present(value: &str) -> bool {
    !value.is_empty()
}

fn is_present_trimmed(value: &str) -> bool {
    !value.trim().is_empty()
}

fn has_no_digits(value: &str) -> bool {
    !value.chars().any(|c| c.is_ascii_digit())
}

fn is_number(value: &str) -> bool {
    parse_age(value).is_some()
}

fn is_at_least_age_min(value: &str) -> bool {
    parse_age(value).is_some_and(|age| age >= AGE_MIN)
}

fn is_at_most_age_max(value: &str) -> bool {
    parse_age(value).is_some_and(|age| age <= AGE_MAX)
}

fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

fn is_long_enough(value: &str) -> bool {
    value.encode_utf16().count() >= PASSWORD_MIN_LEN
}

fn is_short_enough(value: &str) -> bool {
    value.encode_utf16().count() <= PASSWORD_MAX_LEN
}

/// Parse the raw age input. Accepts surrounding whitespace and decimal or
/// exponent notation; rejects `NaN` and infinities.
#[must_use]
pub fn parse_age(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|age| age.is_finite())
        // -0 displays as "0".
        .map(|age| age + 0.0)
}

/// First failing rule's message for `value`, or `None` when it passes.
#[must_use]
pub fn validate_field(field: Field, value: &str) -> Option<&'static str> {
    rules(field)
        .iter()
        .find(|rule| !(rule.check)(value))
        .map(|rule| rule.message)
}

// =============================================================================
// WHOLE-FORM VALIDATION
// =============================================================================

/// Per-field first failures from a whole-form validation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// A complete set of input that passed every rule.
#[derive(Clone, Debug, PartialEq)]
pub struct FormValues {
    first_name: String,
    last_name: String,
    age: f64,
    email: String,
    password: String,
}

impl FormValues {
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub fn age(&self) -> f64 {
        self.age
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Run every field's rules against the raw values returned by `value_of`.
///
/// # Errors
///
/// Returns the first failure of each invalid field when any rule fails.
pub fn validate_form<'a, F>(value_of: F) -> Result<FormValues, FieldErrors>
where
    F: Fn(Field) -> &'a str,
{
    let errors = FieldErrors(
        Field::ALL
            .into_iter()
            .filter_map(|field| validate_field(field, value_of(field)).map(|message| (field, message)))
            .collect(),
    );

    match parse_age(value_of(Field::Age)) {
        Some(age) if errors.is_empty() => Ok(FormValues {
            first_name: value_of(Field::FirstName).to_owned(),
            last_name: value_of(Field::LastName).to_owned(),
            age,
            email: value_of(Field::Email).to_owned(),
            password: value_of(Field::Password).to_owned(),
        }),
        _ => Err(errors),
    }
}
