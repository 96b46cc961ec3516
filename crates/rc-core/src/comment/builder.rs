//! Comment builder for fluent API

use super::model::Comment;
use crate::error::ValidationError;
use crate::types::{CommentId, RecipeId, UserId};
use chrono::{DateTime, Utc};

/// Builder for creating comments with fluent API
#[derive(Debug, Clone, Default)]
pub struct CommentBuilder {
    recipe_id: Option<RecipeId>,
    user_id: Option<UserId>,
    text: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

impl CommentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the recipe being commented on
    pub fn recipe(mut self, recipe_id: impl Into<RecipeId>) -> Self {
        self.recipe_id = Some(recipe_id.into());
        self
    }

    /// Set the author
    pub fn user(mut self, user_id: impl Into<UserId>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Set the comment text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the creation timestamp instead of using the build time
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Build the comment
    pub fn build(self) -> Result<Comment, ValidationError> {
        Comment::assemble(
            CommentId::new(),
            self.recipe_id,
            self.user_id,
            self.text,
            self.created_at,
        )
    }
}
