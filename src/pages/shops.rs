use dioxus::prelude::*;
use rmgstudio_core::Shop;
use rmgstudio_ui::{Button, ButtonVariant, EmptyHint, Section};

use crate::components::{EditorFrame, Panel, ShopCard};
use crate::context::{apply_edit, apply_result, use_editor, use_status};

#[component]
pub fn Shops() -> Element {
    let editor = use_editor();
    let status = use_status();
    let template = editor.read().document.clone();
    let ids = template.zone_ids();

    let t = template.clone();
    let add_shop = move |_| apply_edit(editor, t.add_shop());

    rsx! {
        EditorFrame { current: Panel::Shops,
            Section { title: "Shops".to_string(), subtitle: format!("{}", template.shops.len()),
                div { class: "section-toolbar",
                    Button { variant: ButtonVariant::Badge, onclick: add_shop, "+ add shop" }
                }
                if template.shops.is_empty() {
                    EmptyHint { text: "No shops. The generator places its defaults.".to_string() }
                }
                div { class: "card-list",
                    for (index, shop) in template.shops.iter().enumerate() {
                        {
                            let t_change = template.clone();
                            let t_remove = template.clone();
                            rsx! {
                                ShopCard {
                                    key: "{index}",
                                    shop: shop.clone(),
                                    zone_ids: ids.clone(),
                                    on_change: move |s: Shop| apply_edit(editor, t_change.with_shop(index, s)),
                                    on_remove: move |_| apply_result(editor, status, t_remove.remove_shop(index)),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
