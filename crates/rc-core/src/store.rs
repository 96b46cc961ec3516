//! Comment storage trait and abstractions

use crate::comment::Comment;
use crate::error::Result;
use crate::types::{CommentId, RecipeId, UserId};

/// Trait for comment storage implementations
///
/// Stores persist whole records. Referential integrity with recipes and
/// users is not checked.
pub trait CommentStore: Send + Sync {
    /// Persist a new comment; fails if the id is already taken
    fn insert(&self, comment: &Comment) -> Result<()>;

    /// Load a comment by ID
    fn load(&self, id: &CommentId) -> Result<Comment>;

    /// List all comments
    fn list(&self) -> Result<Vec<Comment>>;

    /// Delete a comment
    fn delete(&self, id: &CommentId) -> Result<()>;

    /// Check if a comment exists
    fn exists(&self, id: &CommentId) -> bool;

    /// Comments on a recipe, oldest first
    fn for_recipe(&self, recipe_id: &RecipeId) -> Result<Vec<Comment>> {
        let mut comments: Vec<_> = self
            .list()?
            .into_iter()
            .filter(|c| c.recipe_id() == recipe_id)
            .collect();
        comments.sort_by_key(|c| c.created_at());
        Ok(comments)
    }

    /// Comments written by a user, oldest first
    fn for_user(&self, user_id: &UserId) -> Result<Vec<Comment>> {
        let mut comments: Vec<_> = self
            .list()?
            .into_iter()
            .filter(|c| c.user_id() == user_id)
            .collect();
        comments.sort_by_key(|c| c.created_at());
        Ok(comments)
    }
}

/// In-memory storage
pub mod memory {
    use super::*;
    use crate::error::CommentsError;
    use std::collections::HashMap;
    use std::sync::{PoisonError, RwLock};

    /// In-memory comment storage
    #[derive(Debug, Default)]
    pub struct MemoryStore {
        comments: RwLock<HashMap<CommentId, Comment>>,
    }

    impl MemoryStore {
        /// Create a new in-memory storage
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl CommentStore for MemoryStore {
        fn insert(&self, comment: &Comment) -> Result<()> {
            let mut comments = self.comments.write().unwrap_or_else(PoisonError::into_inner);
            if comments.contains_key(comment.id()) {
                return Err(CommentsError::DuplicateComment(comment.id().to_string()));
            }
            comments.insert(comment.id().clone(), comment.clone());
            Ok(())
        }

        fn load(&self, id: &CommentId) -> Result<Comment> {
            let comments = self.comments.read().unwrap_or_else(PoisonError::into_inner);
            comments
                .get(id)
                .cloned()
                .ok_or_else(|| CommentsError::CommentNotFound(id.to_string()))
        }

        fn list(&self) -> Result<Vec<Comment>> {
            let comments = self.comments.read().unwrap_or_else(PoisonError::into_inner);
            Ok(comments.values().cloned().collect())
        }

        fn delete(&self, id: &CommentId) -> Result<()> {
            let mut comments = self.comments.write().unwrap_or_else(PoisonError::into_inner);
            comments
                .remove(id)
                .ok_or_else(|| CommentsError::CommentNotFound(id.to_string()))?;
            Ok(())
        }

        fn exists(&self, id: &CommentId) -> bool {
            let comments = self.comments.read().unwrap_or_else(PoisonError::into_inner);
            comments.contains_key(id)
        }
    }

}
