//! Comment domain models.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use validator::Validate;

use crate::record::Record;

/// A comment left by a user on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Comment {
    pub id: i64,
    pub comment_text: Option<String>,
    pub post_id: i64,
    pub author_id: i64,
}

impl Record for Comment {
    fn to_record(&self) -> Value {
        json!({
            "id": self.id,
            "comment_text": self.comment_text,
            "post_id": self.post_id,
            "author_id": self.author_id,
        })
    }
}

/// Input for adding a comment. The text is optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewComment {
    #[validate(length(max = 200, message = "Comment must be at most 200 characters"))]
    pub comment_text: Option<String>,
}

/// Replaces a comment's text; `None` clears it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateComment {
    #[validate(length(max = 200, message = "Comment must be at most 200 characters"))]
    pub comment_text: Option<String>,
}
