//! rc-core - Core library for recipe-comments
//!
//! This crate provides the Comment record attached to recipes, its
//! construction-time validation, and the storage contract used to persist it.

pub mod comment;
pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub use comment::{Comment, CommentBuilder, CommentManager, CommentValidator, NewComment};
pub use error::{CommentsError, Field, Result, ValidationError};
pub use store::{memory::MemoryStore, CommentStore};
pub use types::*;
