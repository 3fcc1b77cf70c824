//! Editor dialog state: open mode and the in-progress draft.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use thiserror::Error;

use crate::state::methods::{MethodId, MethodRecord};

/// Fixed tag choices offered as checkboxes in the editor form.
pub const AVAILABLE_TAGS: [&str; 8] = [
    "processo",
    "criatividade",
    "pesquisa",
    "teste",
    "design",
    "análise",
    "usuário",
    "dados",
];

/// Which record (if any) the editor dialog is operating on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorMode {
    #[default]
    Closed,
    Create,
    Edit(MethodId),
}

/// Missing required form field; the first failure wins.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("título é obrigatório")]
    EmptyTitle,
    #[error("descrição é obrigatória")]
    EmptyDescription,
    #[error("selecione pelo menos uma tag")]
    NoTags,
}

/// In-progress form values.
///
/// Trimming applies to validation only; stored values are the raw inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MethodDraft {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl MethodDraft {
    /// Pre-populate the draft from an existing record for editing.
    pub fn from_record(record: &MethodRecord) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            tags: record.tags.clone(),
        }
    }

    /// Check the required fields: non-blank title and description, at least
    /// one tag.
    ///
    /// # Errors
    ///
    /// Returns the first missing field as a [`DraftError`].
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        if self.description.trim().is_empty() {
            return Err(DraftError::EmptyDescription);
        }
        if self.tags.is_empty() {
            return Err(DraftError::NoTags);
        }
        Ok(())
    }

    /// Append or remove `tag` to mirror its checkbox state.
    ///
    /// Tags outside the checkbox grid (possible on seed records) are left
    /// untouched, so editing never silently drops them.
    pub fn toggle_tag(&mut self, tag: &str, checked: bool) {
        if checked {
            if !self.tags.iter().any(|t| t == tag) {
                self.tags.push(tag.to_owned());
            }
        } else {
            self.tags.retain(|t| t != tag);
        }
    }
}

/// Editor dialog state provided from the root component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorState {
    pub mode: EditorMode,
    pub draft: MethodDraft,
}

impl EditorState {
    /// Open the dialog for a new method with all fields reset.
    pub fn open_create(&mut self) {
        self.mode = EditorMode::Create;
        self.draft = MethodDraft::default();
    }

    /// Open the dialog for `record` with fields pre-populated.
    pub fn open_edit(&mut self, record: &MethodRecord) {
        self.mode = EditorMode::Edit(record.id);
        self.draft = MethodDraft::from_record(record);
    }

    /// Close the dialog and drop the draft.
    pub fn close(&mut self) {
        self.mode = EditorMode::Closed;
        self.draft = MethodDraft::default();
    }

    pub fn is_open(&self) -> bool {
        self.mode != EditorMode::Closed
    }
}
