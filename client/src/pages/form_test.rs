use super::*;

const JOHN: [&str; 5] = ["John", "Doe", "45", "a@b.com", "password1"];

fn fill(form: &mut FormState, values: [&str; 5]) {
    for (field, value) in Field::ALL.into_iter().zip(values) {
        form.input(field, value.to_owned());
    }
}

/// Mirrors the page's submit handler: the snapshot is replaced only on success.
fn submit(form: &mut FormState, display: &mut DisplayValues) {
    if let Some(snapshot) = submit_form(form) {
        *display = snapshot;
    }
}

fn shown(display: &DisplayValues) -> Vec<String> {
    Field::ALL.into_iter().map(|f| display.text(f)).collect()
}

#[test]
fn submit_label_reflects_submitting_flag() {
    assert_eq!(submit_label(false), "Submit");
    assert_eq!(submit_label(true), "Submitting...");
}

#[test]
fn form_class_flags_visible_errors() {
    assert_eq!(form_class(false), "signup-form");
    assert_eq!(form_class(true), "signup-form signup-form--invalid");
}

#[test]
fn valid_submit_copies_exact_values() {
    let mut form = FormState::default();
    let mut display = DisplayValues::default();
    fill(&mut form, JOHN);

    submit(&mut form, &mut display);
    assert_eq!(shown(&display), JOHN);
}

#[test]
fn invalid_submit_leaves_initial_display_empty() {
    let mut form = FormState::default();
    let mut display = DisplayValues::default();
    fill(&mut form, ["John3", "Doe", "45", "a@b.com", "password1"]);

    submit(&mut form, &mut display);
    assert!(display.is_empty());
    assert_eq!(form.field(Field::FirstName).error, Some("First name should not contain numbers"));
}

#[test]
fn any_single_invalid_field_keeps_previous_snapshot() {
    let invalid: [(Field, &str); 6] = [
        (Field::FirstName, ""),
        (Field::LastName, "Doe2"),
        (Field::Age, "201"),
        (Field::Age, "-1"),
        (Field::Email, "not-an-email"),
        (Field::Password, "abcdefghijklmnopqrstu"),
    ];

    for (field, value) in invalid {
        let mut form = FormState::default();
        let mut display = DisplayValues::default();
        fill(&mut form, JOHN);
        submit(&mut form, &mut display);
        let before = display.clone();

        fill(&mut form, ["Jane", "Roe", "30", "jane@example.com", "12345678"]);
        form.input(field, value.to_owned());
        submit(&mut form, &mut display);

        assert_eq!(display, before, "{field:?}={value:?} should block submit");
        assert!(form.field(field).is_invalid());
    }
}

#[test]
fn later_valid_submit_replaces_snapshot_wholesale() {
    let mut form = FormState::default();
    let mut display = DisplayValues::default();
    fill(&mut form, JOHN);
    submit(&mut form, &mut display);

    let jane = ["Jane", "Roe", "30.5", "jane@example.com", "abcdefghijklmnopqrst"];
    fill(&mut form, jane);
    submit(&mut form, &mut display);
    assert_eq!(shown(&display), jane);
}

#[test]
fn repeated_valid_submit_is_idempotent() {
    let mut form = FormState::default();
    let mut display = DisplayValues::default();
    fill(&mut form, JOHN);

    submit(&mut form, &mut display);
    let first = display.clone();
    submit(&mut form, &mut display);
    assert_eq!(display, first);
    assert_eq!(shown(&display), JOHN);
    assert_eq!(form.submit_count, 2);
}

#[test]
fn submit_form_clears_submitting_flag() {
    let mut form = FormState::default();
    form.is_submitting = true;
    assert!(submit_form(&mut form).is_none());
    assert!(!form.is_submitting);
}
