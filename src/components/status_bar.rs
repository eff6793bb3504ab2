//! Status Bar
//!
//! Validation counts, the last status message and an expandable issue list.

use dioxus::prelude::*;
use rmgstudio_core::validate::{tally, validate};

use crate::context::{use_editor, use_status};

#[component]
pub fn StatusBar() -> Element {
    let editor = use_editor();
    let mut status = use_status();
    let mut expanded = use_signal(|| false);

    let issues = use_memo(move || validate(&editor.read().document));
    let (errors, warnings) = tally(&issues.read());
    let undo_depth = editor.read().history.undo_len();

    let counts_class = if errors > 0 {
        "status-counts has-errors"
    } else if warnings > 0 {
        "status-counts has-warnings"
    } else {
        "status-counts clean"
    };

    rsx! {
        footer { class: "status-bar",
            div { class: "status-bar-inner",
                button {
                    r#type: "button",
                    class: "{counts_class}",
                    "aria-expanded": "{expanded()}",
                    disabled: errors + warnings == 0,
                    onclick: move |_| expanded.set(!expanded()),
                    span { class: "status-errors", "{errors} errors" }
                    span { class: "status-sep", "·" }
                    span { class: "status-warnings", "{warnings} warnings" }
                }

                if let Some(message) = status() {
                    span {
                        class: if message.error { "status-message error" } else { "status-message" },
                        "{message.text}"
                    }
                    button {
                        r#type: "button",
                        class: "icon-btn status-dismiss",
                        "aria-label": "Dismiss",
                        onclick: move |_| status.set(None),
                        "×"
                    }
                }

                span { class: "status-history", "{undo_depth} edits" }
            }

            if expanded() && errors + warnings > 0 {
                ul { class: "issue-list",
                    for (i, issue) in issues.read().iter().enumerate() {
                        li {
                            key: "{i}",
                            class: if issue.is_error() { "issue error" } else { "issue warning" },
                            span { class: "issue-severity", "{issue.severity}" }
                            code { class: "issue-path", "{issue.path}" }
                            span { class: "issue-message", "{issue.message}" }
                        }
                    }
                }
            }
        }
    }
}
