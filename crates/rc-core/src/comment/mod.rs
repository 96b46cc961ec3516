//! Comment record module
//!
//! Handles construction, validation and lifecycle of recipe comments.

pub mod builder;
pub mod manager;
pub mod model;
pub mod validator;

pub use builder::CommentBuilder;
pub use manager::CommentManager;
pub use model::*;
pub use validator::CommentValidator;
