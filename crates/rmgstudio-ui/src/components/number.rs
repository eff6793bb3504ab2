//! Optional Number Fields
//!
//! Numeric inputs where an empty field means "unset". The text the user is
//! typing is kept as a draft so partial input like `1.` or `-` is not
//! reformatted away; the parent only hears about values that parse.

use std::fmt::Display;
use std::str::FromStr;

use dioxus::prelude::*;

use super::input::{rand_id, FieldLabel};

/// Parse optional numeric text: blank → `Ok(None)`
pub fn parse_optional<T: FromStr>(text: &str) -> Result<Option<T>, T::Err> {
    let text = text.trim();
    if text.is_empty() {
        Ok(None)
    } else {
        text.parse().map(Some)
    }
}

/// Parse optional decimal text; NaN and infinities count as invalid
pub fn parse_finite(text: &str) -> Option<Option<f64>> {
    match parse_optional::<f64>(text) {
        Ok(Some(v)) if !v.is_finite() => None,
        Ok(value) => Some(value),
        Err(_) => None,
    }
}

/// Format an optional value for an input: `None` → empty
pub fn format_optional<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Text to show: the draft while it still parses to `value`, otherwise the
/// formatted value (after undo or an external change).
pub fn display_text<T>(draft: &str, value: Option<T>) -> String
where
    T: FromStr + Display + PartialEq + Copy,
{
    match parse_optional::<T>(draft) {
        Ok(parsed) if parsed == value => draft.to_string(),
        _ => format_optional(value),
    }
}

/// Properties for the NumberField component
#[derive(Clone, PartialEq, Props)]
pub struct NumberFieldProps {
    pub value: Option<f64>,
    pub on_change: EventHandler<Option<f64>>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub hint: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
}

/// Optional decimal input, e.g. for multipliers
#[component]
pub fn NumberField(props: NumberFieldProps) -> Element {
    let id = use_hook(|| format!("number-{}", rand_id()));
    let mut draft = use_signal(|| format_optional(props.value));
    let shown = display_text(&draft.read(), props.value);
    let invalid = parse_finite(&draft.read()).is_none();
    let on_change = props.on_change;
    let placeholder = props.placeholder.clone().unwrap_or_default();

    rsx! {
        div { class: "form-field",
            FieldLabel { for_id: id.clone(), label: props.label.clone(), hint: props.hint.clone() }
            input {
                id: "{id}",
                class: if invalid { "input-field number invalid" } else { "input-field number" },
                r#type: "text",
                inputmode: "decimal",
                value: "{shown}",
                placeholder: "{placeholder}",
                oninput: move |e| {
                    let text = e.value();
                    if let Some(value) = parse_finite(&text) {
                        on_change.call(value);
                    }
                    draft.set(text);
                },
            }
        }
    }
}

/// Properties for the CountField component
#[derive(Clone, PartialEq, Props)]
pub struct CountFieldProps {
    pub value: Option<u32>,
    pub on_change: EventHandler<Option<u32>>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub hint: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
}

/// Optional non-negative integer input, e.g. for sizes and amounts
#[component]
pub fn CountField(props: CountFieldProps) -> Element {
    let id = use_hook(|| format!("count-{}", rand_id()));
    let mut draft = use_signal(|| format_optional(props.value));
    let shown = display_text(&draft.read(), props.value);
    let invalid = parse_optional::<u32>(&draft.read()).is_err();
    let on_change = props.on_change;
    let placeholder = props.placeholder.clone().unwrap_or_default();

    rsx! {
        div { class: "form-field",
            FieldLabel { for_id: id.clone(), label: props.label.clone(), hint: props.hint.clone() }
            input {
                id: "{id}",
                class: if invalid { "input-field number invalid" } else { "input-field number" },
                r#type: "text",
                inputmode: "numeric",
                value: "{shown}",
                placeholder: "{placeholder}",
                oninput: move |e| {
                    let text = e.value();
                    if let Ok(value) = parse_optional::<u32>(&text) {
                        on_change.call(value);
                    }
                    draft.set(text);
                },
            }
        }
    }
}

/// Narrow an optional `u32` to `u8`, dropping out-of-range values
pub fn to_u8(value: Option<u32>) -> Option<u8> {
    value.and_then(|v| u8::try_from(v).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_parses_to_none() {
        assert_eq!(parse_optional::<u32>(""), Ok(None));
        assert_eq!(parse_optional::<u32>("   "), Ok(None));
        assert_eq!(parse_optional::<u32>(" 42 "), Ok(Some(42)));
        assert!(parse_optional::<u32>("-3").is_err());
        assert!(parse_optional::<f64>("abc").is_err());
    }

    #[test]
    fn decimals_must_be_finite() {
        assert_eq!(parse_finite(""), Some(None));
        assert_eq!(parse_finite(" 1.25 "), Some(Some(1.25)));
        assert_eq!(parse_finite("-0.5"), Some(Some(-0.5)));
        assert_eq!(parse_finite("nan"), None);
        assert_eq!(parse_finite("inf"), None);
        assert_eq!(parse_finite("-Infinity"), None);
        assert_eq!(parse_finite("1e400"), None);
        assert_eq!(parse_finite("abc"), None);
    }

    #[test]
    fn format_none_is_empty() {
        assert_eq!(format_optional::<u32>(None), "");
        assert_eq!(format_optional(Some(1.5)), "1.5");
    }

    #[test]
    fn draft_kept_while_it_matches() {
        // "1." parses to 1.0, which matches the value, so keep the draft
        assert_eq!(display_text("1.", Some(1.0)), "1.");
        // Value changed elsewhere (undo): show the value
        assert_eq!(display_text("1.", Some(2.5)), "2.5");
        // Unparseable drafts fall back to the value
        assert_eq!(display_text("1.2.3", Some(1.0)), "1");
        assert_eq!(display_text("", None::<u32>), "");
    }

    #[test]
    fn u8_narrowing() {
        assert_eq!(to_u8(Some(8)), Some(8));
        assert_eq!(to_u8(Some(300)), None);
        assert_eq!(to_u8(None), None);
    }
}
