//! Document Toolbar
//!
//! New / Open / Save / Save As / Undo / Redo plus a recent files picker.
//! Native dialogs run on a blocking task so the UI stays responsive.

use std::path::{Path, PathBuf};

use dioxus::prelude::*;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult};
use rmgstudio_core::document::{self, TEMPLATE_EXTENSION};
use rmgstudio_core::{EditorState, Settings, StudioError, StudioResult, Template};
use rmgstudio_ui::{Button, ButtonVariant, Select, SelectOption};

use crate::context::{file_stem, remember_file, use_editor, use_settings, use_status, StatusMessage};

#[component]
pub fn Toolbar() -> Element {
    let mut editor = use_editor();
    let settings = use_settings();
    let mut status = use_status();

    let (can_undo, can_redo, dirty) = {
        let state = editor.read();
        (
            state.history.can_undo(),
            state.history.can_redo(),
            state.dirty,
        )
    };

    let on_new = move |_| {
        spawn(async move {
            if !confirm_discard(editor).await {
                return;
            }
            editor
                .write()
                .replace(Template::starter("New Template", 4), None);
            status.set(Some(StatusMessage::info("New template")));
            tracing::info!("started a new template");
        });
    };

    let on_open = move |_| {
        spawn(async move {
            if !confirm_discard(editor).await {
                return;
            }
            if let Some(path) = pick_open_path().await {
                open_document(editor, settings, status, path).await;
            }
        });
    };

    let on_save = move |_| {
        let path = editor.read().path.clone();
        let name = suggested_file_name(&editor.read());
        spawn(async move {
            let path = match path {
                Some(path) => Some(path),
                None => pick_save_path(name).await,
            };
            if let Some(path) = path {
                save_document(editor, settings, status, path).await;
            }
        });
    };

    let on_save_as = move |_| {
        spawn(async move {
            let name = suggested_file_name(&editor.read());
            if let Some(path) = pick_save_path(name).await {
                save_document(editor, settings, status, path).await;
            }
        });
    };

    let recent: Vec<SelectOption> = settings
        .read()
        .recent_files
        .iter()
        .map(|p| SelectOption::new(p.display().to_string(), recent_label(p)))
        .collect();

    rsx! {
        div { class: "toolbar",
            div { class: "toolbar-group",
                Button { variant: ButtonVariant::Ghost, onclick: on_new, title: "Start a new template".to_string(), "New" }
                Button { variant: ButtonVariant::Ghost, onclick: on_open, "Open…" }
                Button {
                    variant: if dirty { ButtonVariant::Primary } else { ButtonVariant::Ghost },
                    onclick: on_save,
                    "Save"
                }
                Button { variant: ButtonVariant::Ghost, onclick: on_save_as, "Save As…" }
            }
            div { class: "toolbar-group",
                Button {
                    variant: ButtonVariant::Ghost,
                    disabled: !can_undo,
                    onclick: move |_| {
                        editor.write().undo();
                    },
                    "Undo"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    disabled: !can_redo,
                    onclick: move |_| {
                        editor.write().redo();
                    },
                    "Redo"
                }
            }
            if !recent.is_empty() {
                div { class: "toolbar-group toolbar-recent",
                    Select {
                        options: recent,
                        selected: String::new(),
                        empty_label: "Recent files".to_string(),
                        on_change: move |value: String| {
                            if value.is_empty() {
                                return;
                            }
                            spawn(async move {
                                if confirm_discard(editor).await {
                                    open_document(editor, settings, status, PathBuf::from(value)).await;
                                }
                            });
                        },
                    }
                }
            }
        }
    }
}

/// Ask before throwing away unsaved edits. Clean documents pass straight through.
async fn confirm_discard(editor: Signal<EditorState>) -> bool {
    if !editor.read().dirty {
        return true;
    }
    let answer = tokio::task::spawn_blocking(|| {
        MessageDialog::new()
            .set_title("Unsaved changes")
            .set_description("Discard the changes to the current template?")
            .set_buttons(MessageButtons::YesNo)
            .show()
    })
    .await;

    match answer {
        Ok(MessageDialogResult::Yes) => true,
        Ok(_) => false,
        Err(e) => {
            tracing::error!("Confirm dialog failed: {:?}", e);
            false
        }
    }
}

async fn pick_open_path() -> Option<PathBuf> {
    let picked = tokio::task::spawn_blocking(|| {
        FileDialog::new()
            .add_filter("templates", &[TEMPLATE_EXTENSION])
            .set_title("Open Template")
            .pick_file()
    })
    .await;

    picked.unwrap_or_else(|e| {
        tracing::error!("Open dialog failed: {:?}", e);
        None
    })
}

async fn pick_save_path(file_name: String) -> Option<PathBuf> {
    let picked = tokio::task::spawn_blocking(move || {
        FileDialog::new()
            .add_filter("templates", &[TEMPLATE_EXTENSION])
            .set_title("Save Template")
            .set_file_name(file_name)
            .save_file()
    })
    .await;

    picked
        .unwrap_or_else(|e| {
            tracing::error!("Save dialog failed: {:?}", e);
            None
        })
        .map(document::with_template_extension)
}

/// Read a template on the blocking pool
async fn read_document(path: PathBuf) -> StudioResult<Template> {
    tokio::task::spawn_blocking(move || document::load_template(&path))
        .await
        .map_err(|e| StudioError::Io(std::io::Error::other(e)))?
}

/// Write a template on the blocking pool
async fn write_document(path: PathBuf, template: Template) -> StudioResult<()> {
    tokio::task::spawn_blocking(move || document::save_template(&path, &template))
        .await
        .map_err(|e| StudioError::Io(std::io::Error::other(e)))?
}

async fn open_document(
    mut editor: Signal<EditorState>,
    settings: Signal<Settings>,
    mut status: Signal<Option<StatusMessage>>,
    path: PathBuf,
) {
    match read_document(path.clone()).await {
        Ok(template) => {
            editor.write().replace(template, Some(path.clone()));
            remember_file(settings, &path);
            status.set(Some(StatusMessage::info(format!("Opened {}", path.display()))));
        }
        Err(e) => {
            tracing::error!(path = %path.display(), "Failed to open template: {}", e);
            status.set(Some(StatusMessage::error(format!("Open failed: {}", e))));
        }
    }
}

async fn save_document(
    mut editor: Signal<EditorState>,
    settings: Signal<Settings>,
    mut status: Signal<Option<StatusMessage>>,
    path: PathBuf,
) {
    let template = editor.read().document.clone();
    match write_document(path.clone(), template).await {
        Ok(()) => {
            editor.write().mark_saved(&path);
            remember_file(settings, &path);
            status.set(Some(StatusMessage::info(format!("Saved {}", path.display()))));
        }
        Err(e) => {
            tracing::error!(path = %path.display(), "Failed to save template: {}", e);
            status.set(Some(StatusMessage::error(format!("Save failed: {}", e))));
        }
    }
}

/// Default file name for Save As, from the template name
fn suggested_file_name(state: &EditorState) -> String {
    if let Some(name) = state.path.as_ref().and_then(|p| p.file_name()) {
        return name.to_string_lossy().into_owned();
    }
    format!("{}.{}", file_stem(&state.document.name), TEMPLATE_EXTENSION)
}

fn recent_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_from_template_name() {
        let state = EditorState::new(Template::new("Jebus Cross"));
        assert_eq!(suggested_file_name(&state), "jebus-cross.json");

        let state = EditorState::new(Template::new("  "));
        assert_eq!(suggested_file_name(&state), "template.json");
    }

    #[tokio::test]
    async fn documents_roundtrip_on_blocking_pool() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("ring.json");
        let template = Template::starter("Ring", 5);

        write_document(path.clone(), template.clone()).await.unwrap();
        assert_eq!(read_document(path).await.unwrap(), template);
    }

    #[tokio::test]
    async fn unreadable_document_reports_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = read_document(dir.path().join("missing.json")).await.unwrap_err();
        assert!(matches!(err, StudioError::Io(_)));

        let mut template = Template::starter("Ring", 3);
        template.army_multipliers.neutral = Some(f64::NAN);
        let err = write_document(dir.path().join("nan.json"), template).await.unwrap_err();
        assert!(matches!(err, StudioError::NonFinite { .. }));
    }

    #[test]
    fn file_name_prefers_current_path() {
        let state = EditorState::opened(Template::new("x"), PathBuf::from("/tmp/ring.json"));
        assert_eq!(suggested_file_name(&state), "ring.json");
    }
}
