use std::path::PathBuf;

use dioxus::prelude::*;
use rfd::FileDialog;
use rmgstudio_core::document::ensure_extension;
use rmgstudio_core::graph::export_png;
use rmgstudio_core::{GraphScene, Selection, Settings, StudioResult, Template};
use rmgstudio_ui::{Button, ButtonVariant, Checkbox, CountField, Section};

use crate::components::{EditorFrame, GraphInspector, Panel, ZoneGraph};
use crate::context::{
    apply_edit, apply_result, file_stem, persist_settings, use_editor, use_settings, use_status,
    StatusMessage,
};

/// Interactive zone graph with inspector and PNG export
#[component]
pub fn Graph() -> Element {
    let editor = use_editor();
    let mut settings = use_settings();
    let mut status = use_status();
    let mut selection: Signal<Option<Selection>> = use_signal(|| None);
    let mut exporting = use_signal(|| false);

    let template = editor.read().document.clone();
    let view = settings.read().graph.clone();
    let export = settings.read().export.clone();
    let scene = GraphScene::build(&template, &view, selection.read().as_ref());

    let on_export = move |_| {
        if exporting() {
            return;
        }
        exporting.set(true);
        let template = editor.read().document.clone();
        let settings_now = settings.read().clone();

        spawn(async move {
            match export_graph(template, settings_now).await {
                Ok(Some(path)) => {
                    status.set(Some(StatusMessage::info(format!("Exported {}", path.display()))));
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::error!("PNG export failed: {}", e);
                    status.set(Some(StatusMessage::error(format!("Export failed: {}", e))));
                }
            }
            exporting.set(false);
        });
    };

    let t = template.clone();
    let t_rename = template.clone();
    let t_remove = template.clone();
    let t_remove_conn = template.clone();

    rsx! {
        EditorFrame { current: Panel::Graph,
            div { class: "graph-layout",
                div { class: "graph-canvas",
                    ZoneGraph {
                        scene: scene,
                        on_select: move |hit: Option<Selection>| selection.set(hit),
                    }
                    div { class: "graph-legend",
                        span { class: "legend-item main", "main route" }
                        span { class: "legend-item secondary", "secondary" }
                        span { class: "legend-item guarded", "guarded" }
                    }
                }
                div { class: "graph-side",
                    GraphInspector {
                        template: template.clone(),
                        selection: selection(),
                        on_change: move |edited: Template| apply_edit(editor, edited),
                        on_rename: move |(old, new): (String, String)| {
                            let result = t_rename.rename_zone(&old, &new);
                            if result.is_ok() {
                                selection.set(Some(Selection::Zone(new.trim().to_string())));
                            }
                            apply_result(editor, status, result);
                        },
                        on_remove_zone: move |id: String| {
                            selection.set(None);
                            apply_result(editor, status, t_remove.remove_zone(&id));
                        },
                        on_remove_connection: move |index: usize| {
                            selection.set(None);
                            apply_result(editor, status, t_remove_conn.remove_connection(index));
                        },
                        on_close: move |_| selection.set(None),
                    }
                    Section { title: "View".to_string(),
                        Checkbox {
                            label: "arrows".to_string(),
                            checked: view.show_arrows,
                            on_change: move |on: bool| {
                                settings.write().graph.show_arrows = on;
                                persist_settings(settings);
                            },
                        }
                        Checkbox {
                            label: "labels".to_string(),
                            checked: view.show_labels,
                            on_change: move |on: bool| {
                                settings.write().graph.show_labels = on;
                                persist_settings(settings);
                            },
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| apply_edit(editor, t.add_zone()),
                            "+ add zone"
                        }
                    }
                    Section { title: "Export".to_string(), subtitle: "PNG".to_string(),
                        div { class: "card-grid compact",
                            CountField {
                                label: "width".to_string(),
                                value: Some(export.width),
                                on_change: move |w: Option<u32>| {
                                    if let Some(w) = w.filter(|w| *w > 0) {
                                        settings.write().export.width = w;
                                        persist_settings(settings);
                                    }
                                },
                            }
                            CountField {
                                label: "height".to_string(),
                                value: Some(export.height),
                                on_change: move |h: Option<u32>| {
                                    if let Some(h) = h.filter(|h| *h > 0) {
                                        settings.write().export.height = h;
                                        persist_settings(settings);
                                    }
                                },
                            }
                        }
                        Checkbox {
                            label: "arrows in export".to_string(),
                            checked: export.show_arrows,
                            on_change: move |on: bool| {
                                settings.write().export.show_arrows = on;
                                persist_settings(settings);
                            },
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: exporting(),
                            onclick: on_export,
                            if exporting() { "Exporting…" } else { "Export PNG…" }
                        }
                    }
                }
            }
        }
    }
}

/// Ask for a destination and write the PNG there.
///
/// `Ok(None)` when the dialog was cancelled.
async fn export_graph(template: Template, settings: Settings) -> StudioResult<Option<PathBuf>> {
    let file_name = format!("{}-graph.png", file_stem(&template.name));
    let picked = tokio::task::spawn_blocking(move || {
        FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_title("Export Zone Graph")
            .set_file_name(file_name)
            .save_file()
    })
    .await;

    let path = match picked {
        Ok(Some(path)) => ensure_extension(path, "png"),
        Ok(None) => return Ok(None),
        Err(e) => {
            tracing::error!("Export dialog failed: {:?}", e);
            return Ok(None);
        }
    };

    let style = settings.export.style(&settings.graph);
    let scene = GraphScene::build(&template, &style, None);
    let written = tokio::task::spawn_blocking(move || export_png(&scene, &path).map(|()| path)).await;

    match written {
        Ok(result) => result.map(Some),
        Err(e) => {
            tracing::error!("Export task failed: {:?}", e);
            Ok(None)
        }
    }
}
