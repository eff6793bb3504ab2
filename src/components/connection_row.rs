//! Connection Row
//!
//! Editor for one link between two zones.

use dioxus::prelude::*;
use rmgstudio_core::Connection;
use rmgstudio_ui::options::zone_options;
use rmgstudio_ui::{Button, ButtonVariant, Checkbox, CountField, OptionToggle, Select};

#[derive(Props, Clone, PartialEq)]
pub struct ConnectionRowProps {
    pub index: usize,
    pub connection: Connection,
    /// Zone ids available as endpoints
    pub zone_ids: Vec<String>,
    #[props(default = false)]
    pub highlighted: bool,
    pub on_change: EventHandler<Connection>,
    pub on_remove: EventHandler<()>,
}

#[component]
pub fn ConnectionRow(props: ConnectionRowProps) -> Element {
    let conn = props.connection.clone();
    let on_change = props.on_change;
    let on_remove = props.on_remove;
    let options = zone_options(props.zone_ids.iter().map(String::as_str));

    let c = conn.clone();
    let set_from = move |from: String| {
        if !from.is_empty() {
            on_change.call(Connection { from, ..c.clone() })
        }
    };
    let c = conn.clone();
    let set_to = move |to: String| {
        if !to.is_empty() {
            on_change.call(Connection { to, ..c.clone() })
        }
    };
    let c = conn.clone();
    let set_two_way = move |two_way: bool| on_change.call(Connection { two_way, ..c.clone() });
    let c = conn.clone();
    let set_guarded = move |guarded: bool| {
        // Guard value is meaningless without a guard
        let guard_value = if guarded { c.guard_value } else { None };
        on_change.call(Connection {
            guarded,
            guard_value,
            ..c.clone()
        })
    };
    let c = conn.clone();
    let set_guard_value = move |guard_value: Option<u32>| {
        on_change.call(Connection {
            guard_value,
            ..c.clone()
        })
    };
    let c = conn.clone();
    let set_main = move |main: bool| on_change.call(Connection { main, ..c.clone() });
    let c = conn.clone();
    let set_road = move |road: Option<bool>| on_change.call(Connection { road, ..c.clone() });

    let label = conn.label();
    let from_known = props.zone_ids.contains(&conn.from);
    let to_known = props.zone_ids.contains(&conn.to);
    let row_class = match (props.highlighted, from_known && to_known) {
        (true, _) => "editor-row connection-row highlighted",
        (false, true) => "editor-row connection-row",
        (false, false) => "editor-row connection-row broken",
    };

    rsx! {
        div { class: "{row_class}",
            span { class: "row-index", "#{props.index}" }
            span { class: "row-label", "{label}" }
            Select {
                label: "from".to_string(),
                options: options.clone(),
                selected: if from_known { conn.from.clone() } else { String::new() },
                empty_label: if from_known { None } else { Some(format!("{} (missing)", conn.from)) },
                on_change: set_from,
            }
            Select {
                label: "to".to_string(),
                options: options,
                selected: if to_known { conn.to.clone() } else { String::new() },
                empty_label: if to_known { None } else { Some(format!("{} (missing)", conn.to)) },
                on_change: set_to,
            }
            Checkbox { label: "two-way".to_string(), checked: conn.two_way, on_change: set_two_way }
            Checkbox { label: "main route".to_string(), checked: conn.main, on_change: set_main }
            Checkbox { label: "guarded".to_string(), checked: conn.guarded, on_change: set_guarded }
            if conn.guarded {
                CountField {
                    label: "guard value".to_string(),
                    value: conn.guard_value,
                    on_change: set_guard_value,
                }
            }
            OptionToggle { label: "road".to_string(), value: conn.road, on_change: set_road }
            Button {
                variant: ButtonVariant::Danger,
                onclick: move |_| on_remove.call(()),
                "Remove"
            }
        }
    }
}
