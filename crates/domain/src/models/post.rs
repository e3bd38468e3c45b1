//! Post domain models.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{Comment, Media, User};
use crate::record::{to_records, Record};

/// A post written by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Post {
    pub id: i64,
    /// Author of the post.
    pub user_id: i64,
}

impl Record for Post {
    fn to_record(&self) -> Value {
        json!({
            "id": self.id,
            "user_id": self.user_id,
        })
    }
}

/// A post together with its author and the first page of its media and comments.
///
/// `media_count` and `comments_count` are the totals stored for the post; the
/// lists are shorter when there are more items than fit on one page.
#[derive(Debug, Clone, Serialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: Post,
    pub author: User,
    pub media: Vec<Media>,
    pub media_count: i64,
    pub comments: Vec<Comment>,
    pub comments_count: i64,
}

impl PostDetail {
    /// True when either list holds fewer items than the post has.
    pub fn is_truncated(&self) -> bool {
        (self.media.len() as i64) < self.media_count
            || (self.comments.len() as i64) < self.comments_count
    }
}

impl Record for PostDetail {
    fn to_record(&self) -> Value {
        json!({
            "id": self.post.id,
            "user_id": self.post.user_id,
            "author": self.author.to_record(),
            "media": to_records(&self.media),
            "media_count": self.media_count,
            "comments": to_records(&self.comments),
            "comments_count": self.comments_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author() -> User {
        User {
            id: 3,
            email: "grace@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            username: "grace".to_string(),
            firstname: "Grace".to_string(),
            lastname: None,
        }
    }

    #[test]
    fn test_post_record_uses_author_id() {
        let post = Post { id: 11, user_id: 3 };
        let record = post.to_record();
        assert_eq!(record, json!({"id": 11, "user_id": 3}));
    }

    #[test]
    fn test_post_serialize_matches_record() {
        let post = Post { id: 1, user_id: 2 };
        assert_eq!(serde_json::to_value(&post).unwrap(), post.to_record());
    }

    #[test]
    fn test_post_detail_record_nests_children() {
        let detail = PostDetail {
            post: Post { id: 11, user_id: 3 },
            author: author(),
            media: vec![Media {
                id: 5,
                media_type: "image".to_string(),
                url: "https://cdn.example.com/a.png".to_string(),
                post_id: 11,
            }],
            media_count: 1,
            comments: vec![Comment {
                id: 9,
                comment_text: Some("nice".to_string()),
                post_id: 11,
                author_id: 4,
            }],
            comments_count: 1,
        };

        let record = detail.to_record();
        assert_eq!(record["id"], 11);
        assert_eq!(record["author"]["username"], "grace");
        assert_eq!(record["media"][0]["type"], "image");
        assert_eq!(record["comments"][0]["comment_text"], "nice");
        assert_eq!(record["media_count"], 1);
        assert_eq!(record["comments_count"], 1);
        assert!(!record.to_string().contains("argon2id"));
        assert!(!detail.is_truncated());
    }

    #[test]
    fn test_post_detail_reports_truncation() {
        let detail = PostDetail {
            post: Post { id: 1, user_id: 3 },
            author: author(),
            media: vec![],
            media_count: 0,
            comments: vec![],
            comments_count: 150,
        };
        assert!(detail.is_truncated());
        assert_eq!(detail.to_record()["comments_count"], 150);
    }

    #[test]
    fn test_post_detail_serialize_omits_author_password() {
        let detail = PostDetail {
            post: Post { id: 1, user_id: 3 },
            author: author(),
            media: vec![],
            media_count: 0,
            comments: vec![],
            comments_count: 0,
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["comments_count"], 0);
        assert!(json["author"].get("password_hash").is_none());
    }
}
