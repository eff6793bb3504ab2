//! Graph Inspector
//!
//! Side panel for whatever is selected in the zone graph. Zones and
//! connections reuse the regular editor widgets.

use dioxus::prelude::*;
use rmgstudio_core::{Connection, Selection, Template, Zone};
use rmgstudio_ui::{EmptyHint, IconButton};

use crate::components::{ConnectionRow, ZoneCard};

#[derive(Props, Clone, PartialEq)]
pub struct GraphInspectorProps {
    pub template: Template,
    pub selection: Option<Selection>,
    /// Called with the edited template
    pub on_change: EventHandler<Template>,
    /// Called with a rename `(old, new)`
    pub on_rename: EventHandler<(String, String)>,
    pub on_remove_zone: EventHandler<String>,
    pub on_remove_connection: EventHandler<usize>,
    pub on_close: EventHandler<()>,
}

#[component]
pub fn GraphInspector(props: GraphInspectorProps) -> Element {
    let template = props.template.clone();
    let on_change = props.on_change;
    let on_rename = props.on_rename;
    let on_remove_zone = props.on_remove_zone;
    let on_remove_connection = props.on_remove_connection;
    let on_close = props.on_close;

    let body = match &props.selection {
        None => rsx! {
            EmptyHint { text: "Click a zone or a connection to inspect it.".to_string() }
        },
        Some(Selection::Zone(id)) => match template.zones.iter().position(|z| z.id == *id) {
            Some(index) => {
                let zone = template.zones[index].clone();
                let other_ids: Vec<String> = template
                    .zone_ids()
                    .into_iter()
                    .filter(|other| other != id)
                    .collect();
                let degree = template.degree(id);
                let t = template.clone();
                let old_id = id.clone();
                let remove_id = id.clone();
                rsx! {
                    ZoneCard {
                        key: "{id}",
                        zone: zone,
                        other_ids: other_ids,
                        degree: degree,
                        on_change: move |zone: Zone| on_change.call(t.with_zone(index, zone)),
                        on_rename: move |new_id: String| on_rename.call((old_id.clone(), new_id)),
                        on_remove: move |_| on_remove_zone.call(remove_id.clone()),
                    }
                }
            }
            None => rsx! {
                EmptyHint { text: format!("Zone '{}' no longer exists.", id) }
            },
        },
        Some(Selection::Connection(index)) => {
            let index = *index;
            match template.connections.get(index) {
                Some(connection) => {
                    let t = template.clone();
                    rsx! {
                        ConnectionRow {
                            index: index,
                            connection: connection.clone(),
                            zone_ids: template.zone_ids(),
                            highlighted: true,
                            on_change: move |c: Connection| on_change.call(t.with_connection(index, c)),
                            on_remove: move |_| on_remove_connection.call(index),
                        }
                    }
                }
                None => rsx! {
                    EmptyHint { text: format!("Connection #{} no longer exists.", index) }
                },
            }
        }
    };

    rsx! {
        aside { class: "graph-inspector",
            header { class: "inspector-header",
                h2 { class: "section-title", "Inspector" }
                if props.selection.is_some() {
                    IconButton {
                        aria_label: "Clear selection".to_string(),
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
            }
            {body}
        }
    }
}
