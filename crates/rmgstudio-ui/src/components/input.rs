//! Text Field Components
//!
//! Single-line and multi-line text inputs with an optional label.

use dioxus::prelude::*;

/// Properties for the TextField component
#[derive(Clone, PartialEq, Props)]
pub struct TextFieldProps {
    pub value: String,
    /// Called with the new text on every keystroke
    pub on_change: EventHandler<String>,
    #[props(default)]
    pub label: Option<String>,
    /// Hint shown after the label, e.g. "unique"
    #[props(default)]
    pub hint: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default = false)]
    pub disabled: bool,
    /// Mark the field as invalid (red border)
    #[props(default = false)]
    pub invalid: bool,
    /// Called on Enter or when focus leaves the field
    #[props(default)]
    pub on_commit: Option<EventHandler<String>>,
}

/// Labelled single-line text input
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TextField {
///         label: "template name".to_string(),
///         value: template.name.clone(),
///         on_change: move |name| on_change.call(Template { name, ..template.clone() }),
///     }
/// }
/// ```
#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let id = use_hook(|| format!("text-{}", rand_id()));
    let class = if props.invalid {
        "input-field invalid"
    } else {
        "input-field"
    };
    let on_change = props.on_change;
    let on_commit = props.on_commit;
    let value_for_blur = props.value.clone();
    let value_for_key = props.value.clone();
    let placeholder = props.placeholder.clone().unwrap_or_default();

    rsx! {
        div { class: "form-field",
            FieldLabel { for_id: id.clone(), label: props.label.clone(), hint: props.hint.clone() }
            input {
                id: "{id}",
                class: "{class}",
                r#type: "text",
                value: "{props.value}",
                placeholder: "{placeholder}",
                disabled: props.disabled,
                oninput: move |e| on_change.call(e.value()),
                onblur: move |_| {
                    if let Some(handler) = on_commit {
                        handler.call(value_for_blur.clone());
                    }
                },
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        if let Some(handler) = on_commit {
                            handler.call(value_for_key.clone());
                        }
                    }
                },
            }
        }
    }
}

/// Properties for the OptionalTextField component
#[derive(Clone, PartialEq, Props)]
pub struct OptionalTextFieldProps {
    pub value: Option<String>,
    /// Called with `None` when the field is cleared
    pub on_change: EventHandler<Option<String>>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
}

/// Text input for optional strings; an empty field means unset
#[component]
pub fn OptionalTextField(props: OptionalTextFieldProps) -> Element {
    let text = props.value.clone().unwrap_or_default();
    let on_change = props.on_change;

    rsx! {
        TextField {
            value: text,
            label: props.label.clone(),
            hint: "optional".to_string(),
            placeholder: props.placeholder.clone(),
            on_change: move |s: String| on_change.call(optional_text(&s)),
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub value: Option<String>,
    pub on_change: EventHandler<Option<String>>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default = 3)]
    pub rows: u32,
}

/// Multi-line input for optional text such as descriptions
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let id = use_hook(|| format!("textarea-{}", rand_id()));
    let text = props.value.clone().unwrap_or_default();
    let on_change = props.on_change;

    rsx! {
        div { class: "form-field",
            FieldLabel { for_id: id.clone(), label: props.label.clone(), hint: None }
            textarea {
                id: "{id}",
                class: "input-field textarea",
                rows: "{props.rows}",
                value: "{text}",
                oninput: move |e| on_change.call(optional_text(&e.value())),
            }
        }
    }
}

/// Label with optional hint, shared by all form widgets
#[component]
pub fn FieldLabel(for_id: String, label: Option<String>, hint: Option<String>) -> Element {
    rsx! {
        if let Some(text) = label {
            label {
                class: "input-label",
                r#for: "{for_id}",
                "{text}"
                if let Some(hint) = hint {
                    span { class: "input-hint", " ({hint})" }
                }
            }
        }
    }
}

/// Map blank text to `None`, keeping the text untrimmed otherwise
pub fn optional_text(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Generate a simple random ID for form elements
pub(crate) fn rand_id() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (duration.as_nanos() % 1_000_000) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rand_id_generates_number() {
        assert!(rand_id() < 1_000_000);
    }

    #[test]
    fn blank_text_is_none() {
        assert_eq!(optional_text(""), None);
        assert_eq!(optional_text("   "), None);
        assert_eq!(optional_text(" a "), Some(" a ".to_string()));
    }
}
