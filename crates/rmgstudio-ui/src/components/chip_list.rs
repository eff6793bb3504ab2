//! Chip List
//!
//! Editable list of short strings (mines, factions, banned items, shop
//! stock). Entries are trimmed and deduplicated by the core edit helpers.

use dioxus::prelude::*;
use rmgstudio_core::edit::{add_chip, remove_chip};

use super::input::FieldLabel;
use super::input::rand_id;

/// Properties for the ChipList component
#[derive(Clone, PartialEq, Props)]
pub struct ChipListProps {
    pub items: Vec<String>,
    pub on_change: EventHandler<Vec<String>>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default = "add…".to_string())]
    pub placeholder: String,
}

#[component]
pub fn ChipList(props: ChipListProps) -> Element {
    let id = use_hook(|| format!("chips-{}", rand_id()));
    let mut draft = use_signal(String::new);
    let on_change = props.on_change;

    let items_for_add = props.items.clone();
    let mut commit = move || {
        let text = draft.read().clone();
        let next = add_chip(&items_for_add, &text);
        if next.len() != items_for_add.len() {
            on_change.call(next);
        }
        draft.set(String::new());
    };
    let mut commit_on_key = commit.clone();

    rsx! {
        div { class: "form-field chip-field",
            FieldLabel { for_id: id.clone(), label: props.label.clone(), hint: None }
            div { class: "chip-list",
                for item in props.items.iter() {
                    span { key: "{item}", class: "chip",
                        "{item}"
                        {
                            let items = props.items.clone();
                            let value = item.clone();
                            rsx! {
                                button {
                                    r#type: "button",
                                    class: "chip-remove",
                                    "aria-label": "Remove {value}",
                                    onclick: move |_| on_change.call(remove_chip(&items, &value)),
                                    "×"
                                }
                            }
                        }
                    }
                }
            }
            div { class: "chip-input-row",
                input {
                    id: "{id}",
                    class: "input-field chip-input",
                    r#type: "text",
                    value: "{draft}",
                    placeholder: "{props.placeholder}",
                    oninput: move |e| draft.set(e.value()),
                    onkeydown: move |e: KeyboardEvent| {
                        if e.key() == Key::Enter {
                            commit_on_key();
                        }
                    },
                }
                button {
                    r#type: "button",
                    class: "btn-badge",
                    disabled: draft.read().trim().is_empty(),
                    onclick: move |_| commit(),
                    "+ add"
                }
            }
        }
    }
}
