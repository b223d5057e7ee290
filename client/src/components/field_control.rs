//! Labeled input bound to one form field, with its inline error message.
//!
//! SYSTEM CONTEXT
//! ==============
//! Writes every keystroke into `FormState` and reports blur so the field's
//! rules run when focus leaves it. The error line renders only while the
//! field holds a message.

#[cfg(test)]
#[path = "field_control_test.rs"]
mod field_control_test;

use leptos::prelude::*;

use crate::state::form::FormState;
use crate::util::validation::Field;

/// One labeled `<input>` for `field`.
#[component]
pub fn FieldControl(field: Field, form: RwSignal<FormState>) -> impl IntoView {
    let value = move || form.with(|f| f.value(field).to_owned());
    let error = move || form.with(|f| f.field(field).error);
    let invalid = move || error().is_some();

    view! {
        <div class=move || control_class(invalid())>
            <label class="field__label" for=field.name()>
                {field.label()}
            </label>
            <input
                class="field__input"
                id=field.name()
                name=field.name()
                type=field.input_type()
                placeholder=field.placeholder()
                aria-invalid=move || aria_invalid(invalid())
                aria-describedby=move || described_by(field, invalid())
                prop:value=value
                on:input=move |ev| form.update(|f| f.input(field, event_target_value(&ev)))
                on:blur=move |_| form.update(|f| f.blur(field))
            />
            <Show when=invalid>
                <p class="field__error" id=error_id(field)>
                    {move || error().unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}

/// CSS class of the control wrapper.
#[must_use]
pub fn control_class(invalid: bool) -> &'static str {
    if invalid { "field field--invalid" } else { "field" }
}

#[must_use]
pub fn aria_invalid(invalid: bool) -> &'static str {
    if invalid { "true" } else { "false" }
}

/// `aria-describedby` target: the error line, only while it is rendered.
#[must_use]
pub fn described_by(field: Field, invalid: bool) -> Option<String> {
    invalid.then(|| error_id(field))
}

/// Element id of the field's error line.
#[must_use]
pub fn error_id(field: Field) -> String {
    format!("{}-error", field.name())
}
