//! Error types for recipe-comments

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Field of a comment that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    RecipeId,
    UserId,
    Text,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::RecipeId => write!(f, "recipeId"),
            Field::UserId => write!(f, "userId"),
            Field::Text => write!(f, "text"),
        }
    }
}

/// Construction-time failure: required data is missing or malformed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    field: Field,
    message: String,
}

impl ValidationError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// A required field was absent
    pub fn required(field: Field) -> Self {
        match field {
            Field::Text => Self::new(field, "Comment text is required"),
            _ => Self::new(field, format!("{} required", field)),
        }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Main error type for recipe-comments
#[derive(Debug, Error)]
pub enum CommentsError {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Comment not found
    #[error("Comment not found: {0}")]
    CommentNotFound(String),

    /// Comment id already taken in the store
    #[error("Comment already exists: {0}")]
    DuplicateComment(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<CommentsError>,
    },
}

impl CommentsError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        CommentsError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The validation failure behind this error, looking through any context
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            CommentsError::Validation(err) => Some(err),
            CommentsError::WithContext { source, .. } => source.as_validation(),
            _ => None,
        }
    }
}

/// Result type alias for recipe-comments
pub type Result<T> = std::result::Result<T, CommentsError>;
