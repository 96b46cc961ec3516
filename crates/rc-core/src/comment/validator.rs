//! Comment validation

use super::model::Comment;
use crate::config::CommentConfig;
use crate::error::{Field, ValidationError};
use crate::types::{RecipeId, UserId};

/// Field checks shared by construction and by stores enforcing write-time rules
#[derive(Debug, Clone, Default)]
pub struct CommentValidator {
    max_length: Option<usize>,
}

impl CommentValidator {
    /// Validator with no length limit, as used by construction
    pub fn new() -> Self {
        Self { max_length: None }
    }

    /// Create a new validator with custom max length
    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            max_length: Some(max_length),
        }
    }

    pub fn from_config(config: &CommentConfig) -> Self {
        Self {
            max_length: config.max_text_length,
        }
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    pub fn require_recipe_id(&self, id: Option<RecipeId>) -> Result<RecipeId, ValidationError> {
        id.filter(|id| !id.is_blank())
            .ok_or_else(|| ValidationError::required(Field::RecipeId))
    }

    pub fn require_user_id(&self, id: Option<UserId>) -> Result<UserId, ValidationError> {
        id.filter(|id| !id.is_blank())
            .ok_or_else(|| ValidationError::required(Field::UserId))
    }

    /// Check the text and return it trimmed
    pub fn require_text(&self, text: Option<String>) -> Result<String, ValidationError> {
        let text = text.ok_or_else(|| ValidationError::required(Field::Text))?;
        self.validate_text(&text)?;

        let trimmed = trim_text(&text);
        if trimmed.len() == text.len() {
            Ok(text)
        } else {
            Ok(trimmed.to_string())
        }
    }

    /// Validate comment text; surrounding whitespace does not count
    pub fn validate_text(&self, text: &str) -> Result<(), ValidationError> {
        let trimmed = trim_text(text);

        if trimmed.is_empty() {
            return Err(ValidationError::required(Field::Text));
        }

        if let Some(max) = self.max_length {
            if trimmed.chars().count() > max {
                return Err(ValidationError::new(
                    Field::Text,
                    format!("Comment text exceeds maximum length of {} characters", max),
                ));
            }
        }

        Ok(())
    }

    /// Validate a complete comment
    pub fn validate(&self, comment: &Comment) -> Result<(), ValidationError> {
        if comment.recipe_id().is_blank() {
            return Err(ValidationError::required(Field::RecipeId));
        }
        if comment.user_id().is_blank() {
            return Err(ValidationError::required(Field::UserId));
        }
        self.validate_text(comment.text())
    }
}

/// Strip surrounding whitespace the way browsers and JSON clients do:
/// the byte-order mark counts as whitespace, NEL (U+0085) does not.
fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}'))
}
