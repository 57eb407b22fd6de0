//! Generic create/edit form dialog.
//!
//! DESIGN
//! ======
//! Every CRUD dialog in the admin module follows the same shape (field
//! specs, values map, validate, submit-then-close), so one parameterized
//! component replaces the per-resource dialogs. Pages own the payload
//! building and the network call; the dialog owns rendering and inline
//! validation.

#[cfg(test)]
#[path = "form_dialog_test.rs"]
mod form_dialog_test;

use std::collections::HashMap;

use leptos::prelude::*;

/// Input widget for a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Number,
    Date,
    TextArea,
    Checkbox,
    /// `(value, label)` pairs.
    Select(&'static [(&'static str, &'static str)]),
}

/// Declarative description of one form field.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Extra shape check, run only on non-empty values.
    pub validator: Option<fn(&str) -> Result<(), String>>,
}

impl FieldSpec {
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { key, label, kind, required: false, validator: None }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn with_validator(mut self, validator: fn(&str) -> Result<(), String>) -> Self {
        self.validator = Some(validator);
        self
    }
}

/// Run every field check; an empty result means the form may be submitted.
pub fn validate(
    specs: &[FieldSpec],
    values: &HashMap<&'static str, String>,
) -> HashMap<&'static str, String> {
    let mut errors = HashMap::new();
    for spec in specs {
        let value = values.get(spec.key).map(String::as_str).unwrap_or("");
        if spec.required {
            if let Err(msg) = crate::util::form::required(value) {
                errors.insert(spec.key, msg);
                continue;
            }
        }
        if value.trim().is_empty() {
            continue;
        }
        if let Some(validator) = spec.validator {
            if let Err(msg) = validator(value) {
                errors.insert(spec.key, msg);
            }
        }
    }
    errors
}

/// Modal dialog rendering `specs` over a shared values map. Validation runs
/// on submit; `on_submit` fires only when every check passes.
#[component]
pub fn FormDialog(
    #[prop(into)] title: String,
    specs: Vec<FieldSpec>,
    values: RwSignal<HashMap<&'static str, String>>,
    busy: RwSignal<bool>,
    /// Top-level submit failure (API error), shown above the fields.
    error: RwSignal<Option<String>>,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let errors = RwSignal::new(HashMap::<&'static str, String>::new());

    let submit_specs = specs.clone();
    let submit = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        let found = validate(&submit_specs, &values.get());
        let ok = found.is_empty();
        errors.set(found);
        if ok {
            on_submit.run(());
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <form
                    class="dialog__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    {specs
                        .iter()
                        .map(|spec| field_view(*spec, values, errors))
                        .collect::<Vec<_>>()}
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn field_view(
    spec: FieldSpec,
    values: RwSignal<HashMap<&'static str, String>>,
    errors: RwSignal<HashMap<&'static str, String>>,
) -> impl IntoView {
    let key = spec.key;
    let value = move || values.get().get(key).cloned().unwrap_or_default();
    let error = move || errors.get().get(key).cloned();

    let input = match spec.kind {
        FieldKind::Checkbox => view! {
            <input
                type="checkbox"
                class="dialog__checkbox"
                prop:checked=move || value() == "true"
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    values.update(|m| {
                        m.insert(key, checked.to_string());
                    });
                }
            />
        }
        .into_any(),
        FieldKind::TextArea => view! {
            <textarea
                class="dialog__input"
                prop:value=value
                on:input=move |ev| {
                    values.update(|m| {
                        m.insert(key, event_target_value(&ev));
                    });
                }
            ></textarea>
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <select
                class="dialog__input"
                prop:value=value
                on:change=move |ev| {
                    values.update(|m| {
                        m.insert(key, event_target_value(&ev));
                    });
                }
            >
                {options
                    .iter()
                    .map(|(option_value, label)| {
                        view! { <option value=*option_value>{*label}</option> }
                    })
                    .collect::<Vec<_>>()}
            </select>
        }
        .into_any(),
        kind => {
            let input_type = match kind {
                FieldKind::Email => "email",
                FieldKind::Password => "password",
                FieldKind::Number => "number",
                FieldKind::Date => "date",
                _ => "text",
            };
            view! {
                <input
                    type=input_type
                    class="dialog__input"
                    prop:value=value
                    on:input=move |ev| {
                        values.update(|m| {
                            m.insert(key, event_target_value(&ev));
                        });
                    }
                />
            }
            .into_any()
        }
    };

    view! {
        <label class="dialog__label">
            {spec.label}
            {input}
            <Show when=move || error().is_some()>
                <span class="dialog__field-error">{move || error().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}
