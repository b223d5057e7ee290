//! Signup form page: five validated inputs and the echo of the last accepted
//! submission.
//!
//! ARCHITECTURE
//! ============
//! The page owns two signals: the editable `FormState` and the read-only
//! `DisplayValues` snapshot. Submit runs whole-form validation synchronously
//! and replaces the snapshot only when every rule passes.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use leptos::prelude::*;

use crate::components::display_panel::DisplayPanel;
use crate::components::field_control::FieldControl;
use crate::state::display::DisplayValues;
use crate::state::form::FormState;
use crate::util::validation::Field;

#[component]
pub fn FormPage() -> impl IntoView {
    let form = RwSignal::new(FormState::default());
    let display = RwSignal::new(DisplayValues::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.update(|f| f.is_submitting = true);
        if let Some(Some(snapshot)) = form.try_update(submit_form) {
            display.set(snapshot);
        }
    };

    let is_submitting = move || form.with(|f| f.is_submitting);
    let has_errors = move || form.with(FormState::has_errors);

    view! {
        <section class="form-page">
            <form class=move || form_class(has_errors()) novalidate=true on:submit=on_submit>
                {Field::ALL
                    .into_iter()
                    .map(|field| view! { <FieldControl field=field form=form/> })
                    .collect_view()}
                <button class="signup-form__submit" type="submit" disabled=is_submitting>
                    {move || submit_label(is_submitting())}
                </button>
            </form>
            <DisplayPanel display=display/>
        </section>
    }
}

/// Run a submit attempt against `form`.
///
/// Returns the replacement snapshot when every rule passes; `None` leaves the
/// current snapshot as it is.
pub fn submit_form(form: &mut FormState) -> Option<DisplayValues> {
    match form.submit() {
        Ok(values) => {
            log::info!("submit #{} accepted", form.submit_count);
            Some(DisplayValues::from(values))
        }
        Err(errors) => {
            log::debug!(
                "submit #{} blocked on {} field(s): {}",
                form.submit_count,
                errors.len(),
                serde_json::to_string(&errors).unwrap_or_default()
            );
            None
        }
    }
}

/// CSS class of the `<form>`; flags a form with any visible field error.
#[must_use]
pub fn form_class(has_errors: bool) -> &'static str {
    if has_errors { "signup-form signup-form--invalid" } else { "signup-form" }
}

#[must_use]
pub fn submit_label(is_submitting: bool) -> &'static str {
    if is_submitting { "Submitting..." } else { "Submit" }
}
