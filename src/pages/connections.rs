use dioxus::prelude::*;
use rmgstudio_core::Connection;
use rmgstudio_ui::options::zone_options;
use rmgstudio_ui::{Button, ButtonVariant, EmptyHint, Section, Select};

use crate::components::{ConnectionRow, EditorFrame, Panel};
use crate::context::{apply_edit, apply_result, use_editor, use_status};

#[component]
pub fn Connections() -> Element {
    let editor = use_editor();
    let status = use_status();
    let template = editor.read().document.clone();
    let ids = template.zone_ids();

    let mut new_from = use_signal(String::new);
    let mut new_to = use_signal(String::new);
    // Fall back to the first zones so "add" works without touching the selects
    let from = pick_endpoint(&new_from.read(), &ids, 0);
    let to = pick_endpoint(&new_to.read(), &ids, 1);
    let can_add = !from.is_empty() && !to.is_empty();

    let t = template.clone();
    let (add_from, add_to) = (from.clone(), to.clone());
    let add_connection = move |_| apply_edit(editor, t.add_connection(&add_from, &add_to));

    rsx! {
        EditorFrame { current: Panel::Connections,
            Section { title: "New connection".to_string(),
                div { class: "card-grid",
                    Select {
                        label: "from".to_string(),
                        options: zone_options(ids.iter().map(String::as_str)),
                        selected: from.clone(),
                        on_change: move |id: String| new_from.set(id),
                    }
                    Select {
                        label: "to".to_string(),
                        options: zone_options(ids.iter().map(String::as_str)),
                        selected: to.clone(),
                        on_change: move |id: String| new_to.set(id),
                    }
                    Button {
                        variant: ButtonVariant::Badge,
                        disabled: !can_add,
                        onclick: add_connection,
                        "+ add connection"
                    }
                }
            }
            Section { title: "Connections".to_string(), subtitle: format!("{}", template.connections.len()),
                if template.connections.is_empty() {
                    EmptyHint { text: "No connections yet.".to_string() }
                }
                div { class: "row-list",
                    for (index, connection) in template.connections.iter().enumerate() {
                        {
                            let t_change = template.clone();
                            let t_remove = template.clone();
                            rsx! {
                                ConnectionRow {
                                    key: "{index}",
                                    index: index,
                                    connection: connection.clone(),
                                    zone_ids: ids.clone(),
                                    on_change: move |c: Connection| apply_edit(editor, t_change.with_connection(index, c)),
                                    on_remove: move |_| apply_result(editor, status, t_remove.remove_connection(index)),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The chosen endpoint if it still exists, else the zone at `fallback`
fn pick_endpoint(chosen: &str, ids: &[String], fallback: usize) -> String {
    if ids.iter().any(|id| id == chosen) {
        return chosen.to_string();
    }
    ids.get(fallback)
        .or_else(|| ids.first())
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn endpoint_keeps_valid_choice() {
        assert_eq!(pick_endpoint("b", &ids(&["a", "b"]), 0), "b");
    }

    #[test]
    fn endpoint_falls_back() {
        assert_eq!(pick_endpoint("gone", &ids(&["a", "b"]), 1), "b");
        assert_eq!(pick_endpoint("", &ids(&["a"]), 1), "a");
        assert_eq!(pick_endpoint("", &[], 0), "");
    }
}
