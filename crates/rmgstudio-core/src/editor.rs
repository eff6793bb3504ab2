//! Editor session state: the current document, where it lives on disk and
//! its undo/redo history.

use std::path::{Path, PathBuf};

use crate::model::Template;

/// Maximum number of undo snapshots kept
pub const HISTORY_LIMIT: usize = 100;

/// Undo/redo snapshot stacks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    undo: Vec<Template>,
    redo: Vec<Template>,
}

impl History {
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    fn record(&mut self, previous: Template) {
        self.undo.push(previous);
        if self.undo.len() > HISTORY_LIMIT {
            self.undo.remove(0);
        }
        self.redo.clear();
    }

    fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

/// Root state holder for an editing session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    pub document: Template,
    pub path: Option<PathBuf>,
    pub dirty: bool,
    pub history: History,
}

impl EditorState {
    /// Start a session on an unsaved document
    pub fn new(document: Template) -> Self {
        Self {
            document,
            ..Self::default()
        }
    }

    /// Start a session on a document loaded from `path`
    pub fn opened(document: Template, path: PathBuf) -> Self {
        Self {
            document,
            path: Some(path),
            ..Self::default()
        }
    }

    /// Replace the document with an edited copy.
    ///
    /// Returns `false` (and records nothing) when the new value equals the
    /// current one.
    pub fn apply(&mut self, document: Template) -> bool {
        if document == self.document {
            return false;
        }
        let previous = std::mem::replace(&mut self.document, document);
        self.history.record(previous);
        self.dirty = true;
        true
    }

    /// Replace the whole session with a different document
    pub fn replace(&mut self, document: Template, path: Option<PathBuf>) {
        self.document = document;
        self.path = path;
        self.dirty = false;
        self.history.clear();
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo.pop() {
            Some(previous) => {
                let current = std::mem::replace(&mut self.document, previous);
                self.history.redo.push(current);
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo.pop() {
            Some(next) => {
                let current = std::mem::replace(&mut self.document, next);
                self.history.undo.push(current);
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Record a successful save
    pub fn mark_saved(&mut self, path: &Path) {
        self.path = Some(path.to_path_buf());
        self.dirty = false;
    }

    /// Window title, e.g. `Jebus - jebus.json *`
    pub fn title(&self) -> String {
        let name = if self.document.name.trim().is_empty() {
            "Untitled"
        } else {
            self.document.name.as_str()
        };
        let file = self
            .path
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("unsaved");
        let marker = if self.dirty { " *" } else { "" };
        format!("{} - {}{}", name, file, marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_records_history_and_marks_dirty() {
        let mut state = EditorState::new(Template::new("A"));
        assert!(state.apply(Template::new("B")));
        assert!(state.dirty);
        assert!(state.history.can_undo());
        assert!(!state.history.can_redo());
    }

    #[test]
    fn apply_same_document_is_noop() {
        let mut state = EditorState::new(Template::new("A"));
        assert!(!state.apply(Template::new("A")));
        assert!(!state.dirty);
        assert!(!state.history.can_undo());
    }

    #[test]
    fn undo_redo_walks_snapshots() {
        let mut state = EditorState::new(Template::new("A"));
        state.apply(Template::new("B"));
        state.apply(Template::new("C"));

        assert!(state.undo());
        assert_eq!(state.document.name, "B");
        assert!(state.undo());
        assert_eq!(state.document.name, "A");
        assert!(!state.undo());

        assert!(state.redo());
        assert_eq!(state.document.name, "B");

        // A fresh edit discards the redo stack
        state.apply(Template::new("D"));
        assert!(!state.redo());
    }

    #[test]
    fn history_is_bounded() {
        let mut state = EditorState::new(Template::new("0"));
        for i in 1..=(HISTORY_LIMIT + 20) {
            state.apply(Template::new(i.to_string()));
        }
        assert_eq!(state.history.undo_len(), HISTORY_LIMIT);
    }

    #[test]
    fn replace_resets_session() {
        let mut state = EditorState::new(Template::new("A"));
        state.apply(Template::new("B"));
        state.replace(Template::new("C"), Some(PathBuf::from("c.json")));
        assert!(!state.dirty);
        assert!(!state.history.can_undo());
        assert_eq!(state.path, Some(PathBuf::from("c.json")));
    }

    #[test]
    fn title_shows_file_and_dirty_marker() {
        let mut state = EditorState::new(Template::default());
        assert_eq!(state.title(), "Untitled - unsaved");
        state.apply(Template::new("Jebus"));
        state.mark_saved(Path::new("/tmp/jebus.json"));
        assert_eq!(state.title(), "Jebus - jebus.json");
        state.apply(Template::new("Jebus Cross"));
        assert_eq!(state.title(), "Jebus Cross - jebus.json *");
    }
}
