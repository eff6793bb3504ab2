use std::collections::BTreeMap;

use dioxus::prelude::*;
use rmgstudio_core::{EditorState, ScriptedFeatures, Template};
use rmgstudio_ui::{Button, ButtonVariant, Checkbox, CountField, IconButton, OptionToggle, Section, TextField};

use crate::components::{EditorFrame, Panel};
use crate::context::{apply_edit, use_editor};

#[component]
pub fn Features() -> Element {
    let editor = use_editor();
    let template = editor.read().document.clone();
    let features = template.scripted_features.clone();
    let mut new_key = use_signal(String::new);

    let (t, f) = (template.clone(), features.clone());
    let set_fog = move |fog_of_war: Option<bool>| {
        set_features(editor, &t, ScriptedFeatures { fog_of_war, ..f.clone() })
    };
    let (t, f) = (template.clone(), features.clone());
    let set_capture = move |capture_all_towns: Option<bool>| {
        set_features(editor, &t, ScriptedFeatures { capture_all_towns, ..f.clone() })
    };
    let (t, f) = (template.clone(), features.clone());
    let set_underground = move |disable_underground: Option<bool>| {
        set_features(editor, &t, ScriptedFeatures { disable_underground, ..f.clone() })
    };
    let (t, f) = (template.clone(), features.clone());
    let set_teleport = move |allow_teleport_between_zones: Option<bool>| {
        set_features(
            editor,
            &t,
            ScriptedFeatures {
                allow_teleport_between_zones,
                ..f.clone()
            },
        )
    };
    let (t, f) = (template.clone(), features.clone());
    let set_day_limit = move |day_limit: Option<u32>| {
        set_features(editor, &t, ScriptedFeatures { day_limit, ..f.clone() })
    };
    let (t, f) = (template.clone(), features.clone());
    let set_hero_limit = move |hero_limit: Option<u32>| {
        set_features(editor, &t, ScriptedFeatures { hero_limit, ..f.clone() })
    };

    let (t, f) = (template.clone(), features.clone());
    let mut add_custom = move || {
        let key = new_key.read().trim().to_string();
        if key.is_empty() || f.custom.contains_key(&key) {
            return;
        }
        let custom = with_custom(&f.custom, &key, Some(true));
        set_features(editor, &t, ScriptedFeatures { custom, ..f.clone() });
        new_key.set(String::new());
    };
    let mut add_custom_on_enter = add_custom.clone();

    rsx! {
        EditorFrame { current: Panel::Features,
            Section { title: "Scripted features".to_string(), subtitle: format!("{} on", features.enabled_count()),
                div { class: "card-grid",
                    OptionToggle { label: "fog of war".to_string(), value: features.fog_of_war, on_change: set_fog }
                    OptionToggle { label: "capture all towns".to_string(), value: features.capture_all_towns, on_change: set_capture }
                    OptionToggle { label: "disable underground".to_string(), value: features.disable_underground, on_change: set_underground }
                    OptionToggle {
                        label: "teleport between zones".to_string(),
                        value: features.allow_teleport_between_zones,
                        on_change: set_teleport,
                    }
                    CountField { label: "day limit".to_string(), value: features.day_limit, on_change: set_day_limit }
                    CountField { label: "hero limit".to_string(), value: features.hero_limit, on_change: set_hero_limit }
                }
            }
            Section { title: "Custom toggles".to_string(), subtitle: format!("{}", features.custom.len()),
                div { class: "row-list",
                    for (key, enabled) in features.custom.iter() {
                        {
                            let (t_toggle, f_toggle) = (template.clone(), features.clone());
                            let (t_remove, f_remove) = (template.clone(), features.clone());
                            let toggle_key = key.clone();
                            let remove_key = key.clone();
                            rsx! {
                                div { key: "{key}", class: "editor-row custom-toggle",
                                    Checkbox {
                                        label: key.clone(),
                                        checked: *enabled,
                                        on_change: move |on: bool| {
                                            let custom = with_custom(&f_toggle.custom, &toggle_key, Some(on));
                                            set_features(editor, &t_toggle, ScriptedFeatures { custom, ..f_toggle.clone() })
                                        },
                                    }
                                    IconButton {
                                        aria_label: format!("Remove {}", key),
                                        onclick: move |_| {
                                            let custom = with_custom(&f_remove.custom, &remove_key, None);
                                            set_features(editor, &t_remove, ScriptedFeatures { custom, ..f_remove.clone() })
                                        },
                                        "×"
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "chip-input-row",
                    TextField {
                        value: new_key.read().clone(),
                        placeholder: "toggle name".to_string(),
                        on_change: move |text: String| new_key.set(text),
                        on_commit: move |_| add_custom_on_enter(),
                    }
                    Button {
                        variant: ButtonVariant::Badge,
                        disabled: new_key.read().trim().is_empty(),
                        onclick: move |_| add_custom(),
                        "+ add toggle"
                    }
                }
            }
        }
    }
}

fn set_features(editor: Signal<EditorState>, template: &Template, scripted_features: ScriptedFeatures) {
    apply_edit(
        editor,
        Template {
            scripted_features,
            ..template.clone()
        },
    )
}

/// Set (`Some`) or remove (`None`) a custom toggle
fn with_custom(custom: &BTreeMap<String, bool>, key: &str, value: Option<bool>) -> BTreeMap<String, bool> {
    let mut out = custom.clone();
    match value {
        Some(v) => {
            out.insert(key.to_string(), v);
        }
        None => {
            out.remove(key);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_toggle_set_and_remove() {
        let map = with_custom(&BTreeMap::new(), "no_dwellings", Some(true));
        assert_eq!(map.get("no_dwellings"), Some(&true));
        let map = with_custom(&map, "no_dwellings", Some(false));
        assert_eq!(map.get("no_dwellings"), Some(&false));
        assert!(with_custom(&map, "no_dwellings", None).is_empty());
    }
}
