//! rc-storage - Storage library for recipe-comments
//!
//! This crate provides a file system implementation of the comment store.

mod comment_store;

pub use comment_store::FileSystemStore;
