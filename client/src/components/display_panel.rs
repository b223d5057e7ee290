//! Read-only echo of the last accepted submission.

#[cfg(test)]
#[path = "display_panel_test.rs"]
mod display_panel_test;

use leptos::prelude::*;

use crate::state::display::DisplayValues;
use crate::util::validation::Field;

/// Five labeled lines, one per field, in form order.
#[component]
pub fn DisplayPanel(display: RwSignal<DisplayValues>) -> impl IntoView {
    view! {
        <div class=move || panel_class(display.with(DisplayValues::is_empty))>
            {Field::ALL
                .into_iter()
                .map(|field| {
                    view! {
                        <p class="display-panel__line" data-field=field.name()>
                            {move || display_line(field, &display.get())}
                        </p>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// `"<Label>: <value>"` for one field of the snapshot.
#[must_use]
pub fn display_line(field: Field, values: &DisplayValues) -> String {
    format!("{}: {}", field.label(), values.text(field))
}

/// CSS class of the panel; dims it until the first accepted submit.
#[must_use]
pub fn panel_class(is_empty: bool) -> &'static str {
    if is_empty { "display-panel display-panel--empty" } else { "display-panel" }
}
