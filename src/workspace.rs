//! Files edited during a session
//!
//! Accepting a suggestion replaces the stored file content wholesale; no
//! patch is applied. `EditedFiles` remembers what each file looked like before
//! its first accepted edit so the diff views can compare against it.

use crate::diff::{DiffEngine, DisplayLine, SplitRow};
use crate::suggestion::{CodeSuggestion, Source, SuggestionError};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WorkspaceError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Suggestion error: {0}")]
    Suggestion(#[from] SuggestionError),
}

/// Where file content lives. Retrieval by source and wholesale replacement.
pub trait FileStore {
    fn files(&self) -> Vec<Source>;

    fn content(&self, file: &Source) -> Option<String>;

    fn replace(&mut self, file: &Source, content: String) -> Result<(), WorkspaceError>;

    /// Look a file up by `path/file_name`
    fn find_by_path(&self, full_path: &str) -> Option<Source> {
        self.files()
            .into_iter()
            .find(|file| file.full_path() == full_path)
    }
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryFileStore {
    files: BTreeMap<String, (Source, String)>,
}

impl InMemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, file: Source, content: impl Into<String>) {
        self.files.insert(file.id.clone(), (file, content.into()));
    }
}

impl FileStore for InMemoryFileStore {
    fn files(&self) -> Vec<Source> {
        self.files.values().map(|(file, _)| file.clone()).collect()
    }

    fn content(&self, file: &Source) -> Option<String> {
        self.files.get(&file.id).map(|(_, content)| content.clone())
    }

    fn replace(&mut self, file: &Source, content: String) -> Result<(), WorkspaceError> {
        match self.files.get_mut(&file.id) {
            Some((_, stored)) => {
                *stored = content;
                Ok(())
            }
            None => Err(WorkspaceError::FileNotFound(file.id.clone())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditedFileRecord {
    pub file: Source,
    /// Content before the first accepted edit
    pub original_content: String,
    pub current_content: String,
}

impl EditedFileRecord {
    pub fn unified(&self, engine: &DiffEngine) -> Vec<DisplayLine> {
        engine.unified(&self.original_content, &self.current_content)
    }

    pub fn split(&self, engine: &DiffEngine) -> Vec<SplitRow> {
        engine.split(&self.original_content, &self.current_content)
    }
}

/// Edited files in the order they were first edited
#[derive(Debug, Default, Clone)]
pub struct EditedFiles {
    records: Vec<EditedFileRecord>,
}

impl EditedFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept a suggestion and write its content to the store.
    ///
    /// If the store rejects the write the suggestion stays pending.
    pub fn apply<S: FileStore + ?Sized>(
        &mut self,
        store: &mut S,
        suggestion: &mut CodeSuggestion,
    ) -> Result<&EditedFileRecord, WorkspaceError> {
        if !suggestion.is_pending() {
            return Err(SuggestionError::AlreadyResolved {
                id: suggestion.id,
                status: suggestion.status,
            }
            .into());
        }

        if let Err(e) = store.replace(&suggestion.file, suggestion.suggested_content.clone()) {
            warn!(
                "Failed to apply suggestion to {}: {}",
                suggestion.file.full_path(),
                e
            );
            return Err(e);
        }
        suggestion.accept()?;

        let index = match self
            .records
            .iter()
            .position(|record| record.file.id == suggestion.file.id)
        {
            Some(index) => {
                self.records[index].current_content = suggestion.suggested_content.clone();
                index
            }
            None => {
                self.records.push(EditedFileRecord {
                    file: suggestion.file.clone(),
                    original_content: suggestion.original_content.clone(),
                    current_content: suggestion.suggested_content.clone(),
                });
                self.records.len() - 1
            }
        };

        info!("Applied changes to {}", suggestion.file.full_path());
        Ok(&self.records[index])
    }

    /// Reject a suggestion. The store is left alone.
    pub fn discard(&self, suggestion: &mut CodeSuggestion) -> Result<(), WorkspaceError> {
        suggestion.reject()?;
        Ok(())
    }

    pub fn get(&self, file_id: &str) -> Option<&EditedFileRecord> {
        self.records.iter().find(|record| record.file.id == file_id)
    }

    pub fn records(&self) -> &[EditedFileRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestion::SuggestionStatus;

    fn store_with(file: &Source, content: &str) -> InMemoryFileStore {
        let mut store = InMemoryFileStore::new();
        store.insert(file.clone(), content);
        store
    }

    #[test]
    fn apply_replaces_content_wholesale() {
        let file = Source::new("f1", "notes.md", "docs");
        let mut store = store_with(&file, "a\nb");
        let mut edited = EditedFiles::new();
        let mut suggestion = CodeSuggestion::new(file.clone(), "tweak", "a\nb", "a\nc");

        let record = edited.apply(&mut store, &mut suggestion).unwrap();
        assert_eq!(record.original_content, "a\nb");
        assert_eq!(record.current_content, "a\nc");
        assert_eq!(store.content(&file).as_deref(), Some("a\nc"));
        assert_eq!(suggestion.status, SuggestionStatus::Accepted);
    }

    #[test]
    fn second_edit_keeps_first_original() {
        let file = Source::new("f1", "notes.md", "docs");
        let mut store = store_with(&file, "v1");
        let mut edited = EditedFiles::new();

        let mut first = CodeSuggestion::new(file.clone(), "one", "v1", "v2");
        edited.apply(&mut store, &mut first).unwrap();
        let mut second = CodeSuggestion::new(file.clone(), "two", "v2", "v3");
        edited.apply(&mut store, &mut second).unwrap();

        let record = edited.get("f1").unwrap();
        assert_eq!(record.original_content, "v1");
        assert_eq!(record.current_content, "v3");
        assert_eq!(edited.records().len(), 1);
    }

    #[test]
    fn unknown_file_leaves_suggestion_pending() {
        let mut store = InMemoryFileStore::new();
        let mut edited = EditedFiles::new();
        let mut suggestion =
            CodeSuggestion::new(Source::new("missing", "x.rs", "src"), "t", "a", "b");

        let err = edited.apply(&mut store, &mut suggestion).unwrap_err();
        assert_eq!(err, WorkspaceError::FileNotFound("missing".to_string()));
        assert!(suggestion.is_pending());
        assert!(edited.is_empty());
    }

    #[test]
    fn resolved_suggestion_cannot_be_applied() {
        let file = Source::new("f1", "a.txt", "");
        let mut store = store_with(&file, "a");
        let mut edited = EditedFiles::new();
        let mut suggestion = CodeSuggestion::new(file.clone(), "t", "a", "b");

        edited.discard(&mut suggestion).unwrap();
        let err = edited.apply(&mut store, &mut suggestion).unwrap_err();
        assert!(matches!(err, WorkspaceError::Suggestion(_)));
        assert_eq!(store.content(&file).as_deref(), Some("a"));
    }

    #[test]
    fn find_by_full_path() {
        let mut store = InMemoryFileStore::new();
        store.insert(Source::new("1", "lib.rs", "src"), "");
        store.insert(Source::new("2", "main.rs", "src"), "");

        assert_eq!(store.find_by_path("src/main.rs").map(|f| f.id), Some("2".to_string()));
        assert!(store.find_by_path("main.rs").is_none());
    }

    #[test]
    fn record_diffs_against_original() {
        let file = Source::new("f1", "a.txt", "");
        let mut store = store_with(&file, "a\nb");
        let mut edited = EditedFiles::new();
        let mut suggestion = CodeSuggestion::new(file, "t", "a\nb", "a\nc");
        let record = edited.apply(&mut store, &mut suggestion).unwrap().clone();

        let engine = DiffEngine::default();
        assert_eq!(record.unified(&engine).len(), 3);
        let split = record.split(&engine);
        assert!(split[1].left.is_none());
        assert!(split[2].right.is_none());
    }
}
