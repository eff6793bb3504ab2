//! Boolean Inputs
//!
//! [`Checkbox`] for plain flags, [`OptionToggle`] for `Option<bool>` fields
//! where "unset" means the game default applies.

use dioxus::prelude::*;

use super::input::rand_id;

/// Properties for the Checkbox component
#[derive(Clone, PartialEq, Props)]
pub struct CheckboxProps {
    pub checked: bool,
    pub on_change: EventHandler<bool>,
    pub label: String,
    #[props(default = false)]
    pub disabled: bool,
}

#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    let id = use_hook(|| format!("check-{}", rand_id()));
    let on_change = props.on_change;

    rsx! {
        div { class: "form-field checkbox-field",
            input {
                id: "{id}",
                r#type: "checkbox",
                checked: props.checked,
                disabled: props.disabled,
                onchange: move |e| on_change.call(e.checked()),
            }
            label { r#for: "{id}", "{props.label}" }
        }
    }
}

/// Select value for each tri-state position
const DEFAULT_KEY: &str = "default";
const ON_KEY: &str = "on";
const OFF_KEY: &str = "off";

/// Map a tri-state value to its select key
pub fn toggle_key(value: Option<bool>) -> &'static str {
    match value {
        None => DEFAULT_KEY,
        Some(true) => ON_KEY,
        Some(false) => OFF_KEY,
    }
}

/// Inverse of [`toggle_key`]; unknown keys mean "default"
pub fn toggle_from_key(key: &str) -> Option<bool> {
    match key {
        ON_KEY => Some(true),
        OFF_KEY => Some(false),
        _ => None,
    }
}

/// Properties for the OptionToggle component
#[derive(Clone, PartialEq, Props)]
pub struct OptionToggleProps {
    pub value: Option<bool>,
    pub on_change: EventHandler<Option<bool>>,
    pub label: String,
}

/// Tri-state toggle: default / on / off
#[component]
pub fn OptionToggle(props: OptionToggleProps) -> Element {
    let id = use_hook(|| format!("toggle-{}", rand_id()));
    let current = toggle_key(props.value);
    let on_change = props.on_change;

    rsx! {
        div { class: "form-field toggle-field",
            label { class: "input-label", r#for: "{id}", "{props.label}" }
            select {
                id: "{id}",
                class: "input-field select toggle-{current}",
                value: "{current}",
                onchange: move |e| on_change.call(toggle_from_key(&e.value())),
                option { value: DEFAULT_KEY, selected: current == DEFAULT_KEY, "default" }
                option { value: ON_KEY, selected: current == ON_KEY, "on" }
                option { value: OFF_KEY, selected: current == OFF_KEY, "off" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_keys_round_trip() {
        for value in [None, Some(true), Some(false)] {
            assert_eq!(toggle_from_key(toggle_key(value)), value);
        }
    }

    #[test]
    fn unknown_key_is_default() {
        assert_eq!(toggle_from_key("maybe"), None);
        assert_eq!(toggle_from_key(""), None);
    }
}
