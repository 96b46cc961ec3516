//! Comment manager tying construction, validation and storage together

use super::model::{Comment, NewComment};
use super::validator::CommentValidator;
use crate::config::CommentConfig;
use crate::error::Result;
use crate::store::CommentStore;
use crate::types::{CommentId, RecipeId, UserId};
use std::sync::Arc;
use tracing::{debug, info};

/// Manager for the comment lifecycle
pub struct CommentManager {
    /// Storage backend
    store: Arc<dyn CommentStore>,
    /// Write-time checks on top of construction
    validator: CommentValidator,
}

impl CommentManager {
    /// Create a new comment manager with the given storage
    pub fn new(store: impl CommentStore + 'static) -> Self {
        Self::with_store(Arc::new(store))
    }

    /// Create a new comment manager with shared storage
    pub fn with_store(store: Arc<dyn CommentStore>) -> Self {
        Self {
            store,
            validator: CommentValidator::new(),
        }
    }

    /// Apply comment settings from configuration
    pub fn with_config(mut self, config: &CommentConfig) -> Self {
        self.validator = CommentValidator::from_config(config);
        self
    }

    /// Validate a submission and persist the resulting comment
    pub fn submit(&self, input: NewComment) -> Result<Comment> {
        let comment = input.into_comment()?;
        self.validator.validate(&comment)?;
        self.store.insert(&comment)?;

        info!(
            "Added comment {} on recipe {} by user {}",
            comment.id(),
            comment.recipe_id(),
            comment.user_id()
        );
        Ok(comment)
    }

    /// Create a comment stamped with the current time
    pub fn create(
        &self,
        recipe_id: impl Into<RecipeId>,
        user_id: impl Into<UserId>,
        text: impl Into<String>,
    ) -> Result<Comment> {
        self.submit(NewComment::new(recipe_id, user_id, text))
    }

    /// Get a comment by ID
    pub fn get(&self, id: &CommentId) -> Result<Comment> {
        self.store.load(id)
    }

    /// Comments on a recipe, oldest first
    pub fn for_recipe(&self, recipe_id: &RecipeId) -> Result<Vec<Comment>> {
        self.store.for_recipe(recipe_id)
    }

    /// Comments written by a user, oldest first
    pub fn for_user(&self, user_id: &UserId) -> Result<Vec<Comment>> {
        self.store.for_user(user_id)
    }

    /// Get total comment count
    pub fn count(&self) -> Result<usize> {
        Ok(self.store.list()?.len())
    }

    /// Delete a comment, returning the removed record
    pub fn delete(&self, id: &CommentId) -> Result<Comment> {
        let comment = self.store.load(id)?;
        self.store.delete(id)?;
        debug!("Deleted comment {}", id);
        Ok(comment)
    }

    /// Delete every comment on a recipe
    ///
    /// Only runs when the caller asks; removing a recipe elsewhere leaves
    /// its comments in place.
    pub fn delete_for_recipe(&self, recipe_id: &RecipeId) -> Result<usize> {
        let ids: Vec<CommentId> = self
            .store
            .for_recipe(recipe_id)?
            .iter()
            .map(|c| c.id().clone())
            .collect();
        let deleted = self.delete_all(&ids)?;
        info!("Deleted {} comments on recipe {}", deleted, recipe_id);
        Ok(deleted)
    }

    /// Delete every comment written by a user
    pub fn delete_for_user(&self, user_id: &UserId) -> Result<usize> {
        let ids: Vec<CommentId> = self
            .store
            .for_user(user_id)?
            .iter()
            .map(|c| c.id().clone())
            .collect();
        let deleted = self.delete_all(&ids)?;
        info!("Deleted {} comments by user {}", deleted, user_id);
        Ok(deleted)
    }

    fn delete_all(&self, ids: &[CommentId]) -> Result<usize> {
        for id in ids {
            self.store.delete(id)?;
        }
        Ok(ids.len())
    }
}
