//! Media attachment domain models.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use validator::Validate;

use crate::error::DomainError;
use crate::record::Record;

/// A media item (image, video, ...) attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Media {
    pub id: i64,
    #[serde(rename = "type")]
    pub media_type: String,
    pub url: String,
    pub post_id: i64,
}

impl Record for Media {
    fn to_record(&self) -> Value {
        json!({
            "id": self.id,
            "type": self.media_type,
            "url": self.url,
            "post_id": self.post_id,
        })
    }
}

/// Input for attaching media to a post.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewMedia {
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 40, message = "Type must be between 1 and 40 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub media_type: String,

    #[validate(url(message = "Invalid URL format"))]
    #[validate(length(max = 150, message = "URL must be at most 150 characters"))]
    pub url: String,
}

/// Partial media update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMedia {
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 40, message = "Type must be between 1 and 40 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub media_type: Option<String>,

    #[validate(url(message = "Invalid URL format"))]
    #[validate(length(max = 150, message = "URL must be at most 150 characters"))]
    pub url: Option<String>,
}

impl UpdateMedia {
    pub fn check(&self) -> Result<(), DomainError> {
        if self.media_type.is_none() && self.url.is_none() {
            return Err(DomainError::Validation(
                "Update must set at least one field".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_record() {
        let media = Media {
            id: 2,
            media_type: "video".to_string(),
            url: "https://cdn.example.com/v.mp4".to_string(),
            post_id: 8,
        };
        assert_eq!(
            media.to_record(),
            json!({
                "id": 2,
                "type": "video",
                "url": "https://cdn.example.com/v.mp4",
                "post_id": 8
            })
        );
        assert_eq!(serde_json::to_value(&media).unwrap(), media.to_record());
    }

    #[test]
    fn test_new_media_deserializes_type_key() {
        let input: NewMedia =
            serde_json::from_str(r#"{"type": "image", "url": "https://example.com/a.jpg"}"#)
                .unwrap();
        assert_eq!(input.media_type, "image");
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_new_media_rejects_bad_url() {
        let input = NewMedia {
            media_type: "image".to_string(),
            url: "not a url".to_string(),
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("url"));
    }

    #[test]
    fn test_new_media_length_limits() {
        let input = NewMedia {
            media_type: "x".repeat(41),
            url: "https://example.com/a.jpg".to_string(),
        };
        assert!(input.validate().is_err());

        let input = NewMedia {
            media_type: "image".to_string(),
            url: format!("https://example.com/{}", "a".repeat(140)),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_update_media_requires_a_field() {
        assert!(UpdateMedia::default().check().is_err());
        let update = UpdateMedia {
            url: Some("https://example.com/b.png".to_string()),
            ..Default::default()
        };
        assert!(update.check().is_ok());
        assert!(update.validate().is_ok());
    }
}
