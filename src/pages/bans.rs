use dioxus::prelude::*;
use rmgstudio_core::{BanLists, Template};
use rmgstudio_ui::{ChipList, Section};

use crate::components::{EditorFrame, Panel};
use crate::context::{apply_edit, use_editor};

#[component]
pub fn Bans() -> Element {
    let editor = use_editor();
    let template = editor.read().document.clone();
    let bans = template.bans.clone();

    // One chip list per ban category
    let categories: [(&str, Vec<String>, fn(&BanLists, Vec<String>) -> BanLists); 5] = [
        ("artifacts", bans.artifacts.clone(), |b, artifacts| BanLists { artifacts, ..b.clone() }),
        ("spells", bans.spells.clone(), |b, spells| BanLists { spells, ..b.clone() }),
        ("creatures", bans.creatures.clone(), |b, creatures| BanLists { creatures, ..b.clone() }),
        ("heroes", bans.heroes.clone(), |b, heroes| BanLists { heroes, ..b.clone() }),
        ("skills", bans.skills.clone(), |b, skills| BanLists { skills, ..b.clone() }),
    ];

    rsx! {
        EditorFrame { current: Panel::Bans,
            Section { title: "Ban lists".to_string(), subtitle: format!("{} banned", bans.total()),
                for (name, items, set) in categories {
                    {
                        let t = template.clone();
                        let b = bans.clone();
                        rsx! {
                            ChipList {
                                key: "{name}",
                                label: name.to_string(),
                                items: items,
                                placeholder: format!("ban {}…", name),
                                on_change: move |items: Vec<String>| {
                                    apply_edit(editor, Template { bans: set(&b, items), ..t.clone() })
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
