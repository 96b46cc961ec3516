//! Comment data models

use super::validator::CommentValidator;
use crate::error::ValidationError;
use crate::types::{CommentId, RecipeId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment left by a user on a recipe
///
/// Fields are private: every `Comment` in existence went through the same
/// construction checks, including ones read back from a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "CommentDocument")]
pub struct Comment {
    id: CommentId,
    recipe_id: RecipeId,
    user_id: UserId,
    text: String,
    created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a comment, trimming `text` and defaulting `created_at` to now
    pub fn new(
        recipe_id: RecipeId,
        user_id: UserId,
        text: impl Into<String>,
        created_at: Option<DateTime<Utc>>,
    ) -> Result<Self, ValidationError> {
        Self::assemble(
            CommentId::new(),
            Some(recipe_id),
            Some(user_id),
            Some(text.into()),
            created_at,
        )
    }

    /// Run the construction checks in field order and build the record
    pub(crate) fn assemble(
        id: CommentId,
        recipe_id: Option<RecipeId>,
        user_id: Option<UserId>,
        text: Option<String>,
        created_at: Option<DateTime<Utc>>,
    ) -> Result<Self, ValidationError> {
        let validator = CommentValidator::new();
        let recipe_id = validator.require_recipe_id(recipe_id)?;
        let user_id = validator.require_user_id(user_id)?;
        let text = validator.require_text(text)?;

        Ok(Self {
            id,
            recipe_id,
            user_id,
            text,
            created_at: created_at.unwrap_or_else(Utc::now),
        })
    }

    pub fn id(&self) -> &CommentId {
        &self.id
    }

    /// Recipe this comment belongs to
    pub fn recipe_id(&self) -> &RecipeId {
        &self.recipe_id
    }

    /// Author of the comment
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Trimmed comment text
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Stored shape of a comment, before validation
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentDocument {
    id: CommentId,
    recipe_id: Option<RecipeId>,
    user_id: Option<UserId>,
    text: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

impl TryFrom<CommentDocument> for Comment {
    type Error = ValidationError;

    fn try_from(doc: CommentDocument) -> Result<Self, Self::Error> {
        Comment::assemble(doc.id, doc.recipe_id, doc.user_id, doc.text, doc.created_at)
    }
}

/// A comment as submitted, with every field optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<RecipeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl NewComment {
    pub fn new(
        recipe_id: impl Into<RecipeId>,
        user_id: impl Into<UserId>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            recipe_id: Some(recipe_id.into()),
            user_id: Some(user_id.into()),
            text: Some(text.into()),
            created_at: None,
        }
    }

    /// Override the creation timestamp
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Validate and turn into a record with a fresh id
    pub fn into_comment(self) -> Result<Comment, ValidationError> {
        Comment::assemble(
            CommentId::new(),
            self.recipe_id,
            self.user_id,
            self.text,
            self.created_at,
        )
    }
}

impl TryFrom<NewComment> for Comment {
    type Error = ValidationError;

    fn try_from(input: NewComment) -> Result<Self, Self::Error> {
        input.into_comment()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Field;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn create_test_comment(text: &str) -> Result<Comment, ValidationError> {
        Comment::new(RecipeId::from("r1"), UserId::from("u1"), text, None)
    }

    #[test]
    fn test_comment_creation_trims_text() {
        let before = Utc::now();
        let comment = create_test_comment("  Great recipe!  ").unwrap();
        let after = Utc::now();

        assert_eq!(comment.recipe_id().as_str(), "r1");
        assert_eq!(comment.user_id().as_str(), "u1");
        assert_eq!(comment.text(), "Great recipe!");
        assert!(comment.created_at() >= before && comment.created_at() <= after);
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        let comment = create_test_comment("\n two  words\t").unwrap();
        assert_eq!(comment.text(), "two  words");
    }

    #[test]
    fn test_empty_text_fails() {
        for text in ["", "   ", "\n\t "] {
            let err = create_test_comment(text).unwrap_err();
            assert_eq!(err.field(), Field::Text);
            assert_eq!(err.to_string(), "Comment text is required");
        }
    }

    #[test]
    fn test_byte_order_marks_are_trimmed() {
        let err = create_test_comment("\u{FEFF}  \u{FEFF}").unwrap_err();
        assert_eq!(err.to_string(), "Comment text is required");

        let comment = create_test_comment("\u{FEFF}Great recipe!\u{FEFF}").unwrap();
        assert_eq!(comment.text(), "Great recipe!");
    }

    #[test]
    fn test_next_line_is_kept() {
        let comment = create_test_comment("\u{85}hi").unwrap();
        assert_eq!(comment.text(), "\u{85}hi");
    }

    #[test]
    fn test_blank_references_fail() {
        let err = Comment::new(RecipeId::from(""), UserId::from("u1"), "hi", None).unwrap_err();
        assert_eq!(err.to_string(), "recipeId required");

        let err = Comment::new(RecipeId::from("r1"), UserId::from(" "), "hi", None).unwrap_err();
        assert_eq!(err.to_string(), "userId required");
    }

    #[test]
    fn test_supplied_created_at_is_preserved() {
        let ts = Utc.with_ymd_and_hms(2023, 5, 17, 8, 30, 0).unwrap() + Duration::milliseconds(123);
        let comment = Comment::new(RecipeId::from("r1"), UserId::from("u1"), "ok", Some(ts)).unwrap();
        assert_eq!(comment.created_at(), ts);
    }

    #[test]
    fn test_ids_are_generated() {
        let a = create_test_comment("a").unwrap();
        let b = create_test_comment("b").unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_new_comment_missing_fields() {
        let missing_recipe = NewComment {
            recipe_id: None,
            ..NewComment::new("r1", "u1", "text")
        };
        assert_eq!(
            missing_recipe.into_comment().unwrap_err().field(),
            Field::RecipeId
        );

        let missing_user = NewComment {
            user_id: None,
            ..NewComment::new("r1", "u1", "text")
        };
        assert_eq!(missing_user.into_comment().unwrap_err().field(), Field::UserId);

        let missing_text = NewComment {
            text: None,
            ..NewComment::new("r1", "u1", "text")
        };
        let err = missing_text.into_comment().unwrap_err();
        assert_eq!(err.to_string(), "Comment text is required");
    }

    #[test]
    fn test_first_failure_wins() {
        let err = NewComment::default().into_comment().unwrap_err();
        assert_eq!(err.field(), Field::RecipeId);
    }

    #[test]
    fn test_new_comment_from_json() {
        let input: NewComment =
            serde_json::from_str(r#"{"recipeId": "r1", "userId": "u1", "text": "  Great recipe!  "}"#)
                .unwrap();
        let comment = Comment::try_from(input).unwrap();
        assert_eq!(comment.text(), "Great recipe!");

        let input: NewComment = serde_json::from_str(r#"{"userId": "u1", "text": "x"}"#).unwrap();
        assert_eq!(input.into_comment().unwrap_err().to_string(), "recipeId required");
    }

    #[test]
    fn test_serialized_shape() {
        let comment = create_test_comment("Great recipe!").unwrap();
        let value = serde_json::to_value(&comment).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["createdAt", "id", "recipeId", "text", "userId"]);
        assert_eq!(object["recipeId"], "r1");
        assert_eq!(object["id"], comment.id().to_string());
    }

    #[test]
    fn test_comment_serialization() {
        let comment = create_test_comment("  Great recipe!  ").unwrap();
        let json = serde_json::to_string(&comment).unwrap();
        let comment2: Comment = serde_json::from_str(&json).unwrap();
        assert_eq!(comment, comment2);
    }

    #[test]
    fn test_deserialization_revalidates() {
        let json = r#"{
            "id": "0b6f3a52-8a5b-4a4e-9d0c-0f0f6c1f3f11",
            "recipeId": "r1",
            "userId": "u1",
            "text": "   ",
            "createdAt": "2024-12-31T12:00:00Z"
        }"#;
        let err = serde_json::from_str::<Comment>(json).unwrap_err();
        assert!(err.to_string().contains("Comment text is required"));

        let json = r#"{
            "id": "0b6f3a52-8a5b-4a4e-9d0c-0f0f6c1f3f11",
            "userId": "u1",
            "text": "hello"
        }"#;
        assert!(serde_json::from_str::<Comment>(json).is_err());
    }

    #[test]
    fn test_deserialization_defaults_created_at() {
        let json = r#"{
            "id": "0b6f3a52-8a5b-4a4e-9d0c-0f0f6c1f3f11",
            "recipeId": "r1",
            "userId": "u1",
            "text": " hello "
        }"#;
        let before = Utc::now();
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert!(comment.created_at() >= before);
        assert_eq!(comment.text(), "hello");
        assert_eq!(
            comment.id().to_string(),
            "0b6f3a52-8a5b-4a4e-9d0c-0f0f6c1f3f11"
        );
    }
}
