//! Contact Form Fields
//!
//! Text inputs and textareas that render their validation message below
//! the control. The border turns red for an invalid value and green for a
//! valid one; untouched fields stay neutral.

use dioxus::prelude::*;
use portfolio_core::{Field, FieldValidationResult};

/// Properties for the FormField component
#[derive(Clone, PartialEq, Props)]
pub struct FormFieldProps {
    /// Which contact field this is
    pub field: Field,
    /// Current value
    pub value: String,
    /// Latest validation result, `None` while untouched
    #[props(default)]
    pub result: Option<FieldValidationResult>,
    /// Handler called on every keystroke
    pub oninput: EventHandler<String>,
    /// Render a textarea instead of a single-line input
    #[props(default = false)]
    pub multiline: bool,
    #[props(default = false)]
    pub disabled: bool,
}

/// Input class reflecting the validation state
pub fn validation_class(result: Option<&FieldValidationResult>) -> &'static str {
    match result {
        None => "form-input",
        Some(r) if r.valid => "form-input input-success",
        Some(_) => "form-input input-error",
    }
}

fn input_type(field: Field) -> &'static str {
    match field {
        Field::Email => "email",
        _ => "text",
    }
}

/// Labelled form field with inline validation message
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FormField {
///         field: Field::Email,
///         value: form.read().value(Field::Email).to_string(),
///         result: form.read().result(Field::Email).cloned(),
///         oninput: move |v| { form.write().set(Field::Email, v); },
///     }
/// }
/// ```
#[component]
pub fn FormField(props: FormFieldProps) -> Element {
    let id = props.field.label().to_lowercase();
    let class = validation_class(props.result.as_ref());
    let message = props
        .result
        .as_ref()
        .map(|r| r.message.clone())
        .unwrap_or_default();

    rsx! {
        div { class: "form-group",
            if props.multiline {
                textarea {
                    id: "{id}",
                    class: "{class}",
                    rows: "5",
                    disabled: props.disabled,
                    value: "{props.value}",
                    oninput: move |e| props.oninput.call(e.value()),
                }
            } else {
                input {
                    id: "{id}",
                    class: "{class}",
                    r#type: input_type(props.field),
                    disabled: props.disabled,
                    value: "{props.value}",
                    oninput: move |e| props.oninput.call(e.value()),
                }
            }
            label { r#for: "{id}", "{props.field.label()}" }
            span { class: "error-message", "{message}" }
        }
    }
}
