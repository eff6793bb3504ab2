use dioxus::prelude::*;
use rmgstudio_core::{Shop, ShopKind};
use rmgstudio_ui::options::{shop_kind_options, zone_options};
use rmgstudio_ui::{Button, ButtonVariant, ChipList, NumberField, Select, TextField};

#[derive(Props, Clone, PartialEq)]
pub struct ShopCardProps {
    pub shop: Shop,
    pub zone_ids: Vec<String>,
    pub on_change: EventHandler<Shop>,
    pub on_remove: EventHandler<()>,
}

#[component]
pub fn ShopCard(props: ShopCardProps) -> Element {
    let shop = props.shop.clone();
    let on_change = props.on_change;
    let on_remove = props.on_remove;

    let s = shop.clone();
    let set_id = move |id: String| on_change.call(Shop { id, ..s.clone() });
    let s = shop.clone();
    let set_kind = move |key: String| {
        on_change.call(Shop {
            kind: ShopKind::from_key(&key).unwrap_or_default(),
            ..s.clone()
        })
    };
    let s = shop.clone();
    let set_zone = move |zone: String| {
        let zone = if zone.is_empty() { None } else { Some(zone) };
        on_change.call(Shop { zone, ..s.clone() })
    };
    let s = shop.clone();
    let set_price = move |price_multiplier: Option<f64>| {
        on_change.call(Shop {
            price_multiplier,
            ..s.clone()
        })
    };
    let s = shop.clone();
    let set_stock = move |stock: Vec<String>| on_change.call(Shop { stock, ..s.clone() });

    let kind_label = shop.kind.label();

    rsx! {
        article { class: "editor-card shop-card",
            header { class: "card-header",
                span { class: "card-title", "{shop.id}" }
                span { class: "card-meta", "{kind_label}" }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: move |_| on_remove.call(()),
                    "Remove"
                }
            }
            div { class: "card-grid",
                TextField { label: "id".to_string(), value: shop.id.clone(), on_change: set_id }
                Select {
                    label: "kind".to_string(),
                    options: shop_kind_options(),
                    selected: shop.kind.key().to_string(),
                    on_change: set_kind,
                }
                Select {
                    label: "zone".to_string(),
                    options: zone_options(props.zone_ids.iter().map(String::as_str)),
                    selected: shop.zone.clone().unwrap_or_default(),
                    empty_label: "any zone".to_string(),
                    on_change: set_zone,
                }
                NumberField {
                    label: "price multiplier".to_string(),
                    placeholder: "1.0".to_string(),
                    value: shop.price_multiplier,
                    on_change: set_price,
                }
            }
            ChipList { label: "stock".to_string(), items: shop.stock.clone(), on_change: set_stock }
        }
    }
}
