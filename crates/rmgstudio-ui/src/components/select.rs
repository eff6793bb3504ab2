//! Dropdown Select

use dioxus::prelude::*;

use super::input::{rand_id, FieldLabel};

/// One entry in a [`Select`]
#[derive(Clone, PartialEq, Debug)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for the Select component
#[derive(Clone, PartialEq, Props)]
pub struct SelectProps {
    pub options: Vec<SelectOption>,
    /// Value of the selected option, or "" for the empty entry
    pub selected: String,
    pub on_change: EventHandler<String>,
    #[props(default)]
    pub label: Option<String>,
    /// When set, an extra first entry with value "" and this label
    #[props(default)]
    pub empty_label: Option<String>,
}

/// Dropdown over a fixed list
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Select {
///         label: "terrain".to_string(),
///         options: terrain_options(),
///         selected: zone.terrain.map(|t| t.key().to_string()).unwrap_or_default(),
///         empty_label: "any".to_string(),
///         on_change: move |key: String| set_terrain(Terrain::from_key(&key)),
///     }
/// }
/// ```
#[component]
pub fn Select(props: SelectProps) -> Element {
    let id = use_hook(|| format!("select-{}", rand_id()));
    let on_change = props.on_change;
    let selected = props.selected.clone();

    rsx! {
        div { class: "form-field",
            FieldLabel { for_id: id.clone(), label: props.label.clone(), hint: None }
            select {
                id: "{id}",
                class: "input-field select",
                value: "{selected}",
                onchange: move |e| on_change.call(e.value()),
                if let Some(empty) = &props.empty_label {
                    option { value: "", selected: selected.is_empty(), "{empty}" }
                }
                for opt in props.options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == selected,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}

/// Build options from `(key, label)` pairs
pub fn options_from<'a, I>(pairs: I) -> Vec<SelectOption>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(value, label)| SelectOption::new(value, label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_keep_order() {
        let opts = options_from([("b", "Bee"), ("a", "Ay")]);
        assert_eq!(opts.len(), 2);
        assert_eq!(opts[0], SelectOption::new("b", "Bee"));
        assert_eq!(opts[1].label, "Ay");
    }
}
