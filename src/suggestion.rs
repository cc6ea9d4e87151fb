//! Model-suggested file edits and their review lifecycle

use crate::diff::{DiffEngine, DisplayLine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SuggestionError {
    #[error("Suggestion {id} was already {status}")]
    AlreadyResolved { id: Uuid, status: SuggestionStatus },
}

/// A file known to the document store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Source {
    pub id: String,
    pub file_name: String,
    pub path: String,
}

impl Source {
    pub fn new(id: impl Into<String>, file_name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            file_name: file_name.into(),
            path: path.into(),
        }
    }

    /// `path/file_name`, the form the model refers to files by
    pub fn full_path(&self) -> String {
        if self.path.is_empty() {
            self.file_name.clone()
        } else {
            format!("{}/{}", self.path, self.file_name)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionStatus {
    Pending,
    Accepted,
    Rejected,
}

impl std::fmt::Display for SuggestionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SuggestionStatus::Pending => "pending",
            SuggestionStatus::Accepted => "accepted",
            SuggestionStatus::Rejected => "rejected",
        };
        f.write_str(label)
    }
}

/// A full replacement of one file's content proposed by the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeSuggestion {
    pub id: Uuid,
    pub file: Source,
    /// The model's one-line explanation of the edit
    pub thought: String,
    pub original_content: String,
    pub suggested_content: String,
    pub status: SuggestionStatus,
    pub created_at: DateTime<Utc>,
}

impl CodeSuggestion {
    pub fn new(
        file: Source,
        thought: impl Into<String>,
        original_content: impl Into<String>,
        suggested_content: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            file,
            thought: thought.into(),
            original_content: original_content.into(),
            suggested_content: suggested_content.into(),
            status: SuggestionStatus::Pending,
            created_at: Utc::now(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == SuggestionStatus::Pending
    }

    /// Collapsed diff of the proposed edit, empty when nothing changes
    pub fn diff(&self, engine: &DiffEngine) -> Vec<DisplayLine> {
        engine.suggestion(&self.original_content, &self.suggested_content)
    }

    pub fn accept(&mut self) -> Result<(), SuggestionError> {
        self.resolve(SuggestionStatus::Accepted)
    }

    pub fn reject(&mut self) -> Result<(), SuggestionError> {
        self.resolve(SuggestionStatus::Rejected)
    }

    fn resolve(&mut self, status: SuggestionStatus) -> Result<(), SuggestionError> {
        if !self.is_pending() {
            return Err(SuggestionError::AlreadyResolved {
                id: self.id,
                status: self.status,
            });
        }
        self.status = status;
        info!("Suggestion {} for {} {}", self.id, self.file.full_path(), status);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion() -> CodeSuggestion {
        CodeSuggestion::new(
            Source::new("1", "main.rs", "src"),
            "Rename the greeting",
            "fn main() {\n    hello();\n}",
            "fn main() {\n    greet();\n}",
        )
    }

    #[test]
    fn starts_pending() {
        let s = suggestion();
        assert!(s.is_pending());
        assert_eq!(s.file.full_path(), "src/main.rs");
    }

    #[test]
    fn resolves_once() {
        let mut s = suggestion();
        s.accept().unwrap();
        assert_eq!(s.status, SuggestionStatus::Accepted);

        let err = s.reject().unwrap_err();
        assert_eq!(
            err,
            SuggestionError::AlreadyResolved {
                id: s.id,
                status: SuggestionStatus::Accepted,
            }
        );
        assert_eq!(s.status, SuggestionStatus::Accepted);
        assert!(err.to_string().ends_with("was already accepted"));
    }

    #[test]
    fn diff_shows_changed_line() {
        let s = suggestion();
        let lines = s.diff(&DiffEngine::default());
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["  fn main() {", "+     greet();", "-     hello();", "  }"]
        );
    }

    #[test]
    fn no_change_suggestion_has_empty_diff() {
        let s = CodeSuggestion::new(Source::new("2", "a.txt", ""), "noop", "same", "same");
        assert!(s.diff(&DiffEngine::default()).is_empty());
        assert_eq!(s.file.full_path(), "a.txt");
    }

    #[test]
    fn status_serializes_lowercase() {
        let mut s = suggestion();
        s.reject().unwrap();
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["status"], "rejected");
        assert_eq!(json["file"]["file_name"], "main.rs");

        let back: CodeSuggestion = serde_json::from_value(json).unwrap();
        assert_eq!(back.status, SuggestionStatus::Rejected);
        assert_eq!(back.id, s.id);
    }
}
