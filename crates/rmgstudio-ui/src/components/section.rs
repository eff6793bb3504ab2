//! Panel section with a heading

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct SectionProps {
    pub title: String,
    /// Small text after the title, e.g. an item count
    #[props(default)]
    pub subtitle: Option<String>,
    pub children: Element,
}

#[component]
pub fn Section(props: SectionProps) -> Element {
    rsx! {
        section { class: "panel-section",
            header { class: "section-header",
                h2 { class: "section-title", "{props.title}" }
                if let Some(sub) = &props.subtitle {
                    span { class: "section-subtitle", "{sub}" }
                }
            }
            div { class: "section-body", {props.children} }
        }
    }
}

/// Placeholder line for empty lists
#[component]
pub fn EmptyHint(text: String) -> Element {
    rsx! {
        p { class: "empty-hint", "{text}" }
    }
}
