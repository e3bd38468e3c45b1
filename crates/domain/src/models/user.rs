//! User domain models.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use validator::Validate;

use crate::error::DomainError;
use crate::record::Record;

const MAX_NAME_LENGTH: u64 = 50;

/// Represents a user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)] // Never serialize the password hash
    pub password_hash: String,
    pub username: String,
    pub firstname: String,
    pub lastname: Option<String>,
}

impl Record for User {
    fn to_record(&self) -> Value {
        json!({
            "id": self.id,
            "email": self.email,
            "username": self.username,
            "firstname": self.firstname,
            "lastname": self.lastname,
        })
    }
}

/// Input for registering a new user. The password is plaintext until hashed.
#[derive(Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct NewUser {
    #[validate(email(message = "Invalid email format"))]
    #[validate(length(max = 120, message = "Email must be at most 120 characters"))]
    pub email: String,

    #[validate(custom(function = "shared::validation::validate_password"))]
    pub password: String,

    #[validate(length(
        min = 1,
        max = 40,
        message = "Username must be between 1 and 40 characters"
    ))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub username: String,

    #[validate(length(max = 50, message = "First name must be at most 50 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub firstname: String,

    #[validate(length(max = 50, message = "Last name must be at most 50 characters"))]
    pub lastname: Option<String>,
}

impl NewUser {
    /// Trims every field and lower-cases the email. An empty last name becomes `None`.
    pub fn normalized(self) -> Self {
        Self {
            email: shared::validation::normalize_email(&self.email),
            password: self.password,
            username: self.username.trim().to_string(),
            firstname: self.firstname.trim().to_string(),
            lastname: normalize_optional(self.lastname),
        }
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("username", &self.username)
            .field("firstname", &self.firstname)
            .field("lastname", &self.lastname)
            .finish()
    }
}

/// Partial profile update. `lastname: Some(None)` clears the last name.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateUser {
    #[validate(email(message = "Invalid email format"))]
    #[validate(length(max = 120, message = "Email must be at most 120 characters"))]
    pub email: Option<String>,

    #[validate(length(
        min = 1,
        max = 40,
        message = "Username must be between 1 and 40 characters"
    ))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub username: Option<String>,

    #[validate(length(max = 50, message = "First name must be at most 50 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub firstname: Option<String>,

    #[serde(default, deserialize_with = "double_option::deserialize")]
    pub lastname: Option<Option<String>>,
}

impl UpdateUser {
    pub fn normalized(self) -> Self {
        Self {
            email: self
                .email
                .map(|e| shared::validation::normalize_email(&e)),
            username: self.username.map(|u| u.trim().to_string()),
            firstname: self.firstname.map(|f| f.trim().to_string()),
            lastname: self.lastname.map(normalize_optional),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.username.is_none()
            && self.firstname.is_none()
            && self.lastname.is_none()
    }

    /// Checks field constraints and that the update changes something.
    pub fn check(&self) -> Result<(), DomainError> {
        if self.is_empty() {
            return Err(DomainError::Validation(
                "Update must set at least one field".into(),
            ));
        }
        if let Some(Some(lastname)) = &self.lastname {
            if lastname.chars().count() as u64 > MAX_NAME_LENGTH {
                return Err(DomainError::Validation(
                    "Last name must be at most 50 characters".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Input for replacing a user's password.
#[derive(Clone, Deserialize, Validate)]
pub struct ChangePassword {
    #[validate(custom(function = "shared::validation::validate_password"))]
    pub new_password: String,
}

impl fmt::Debug for ChangePassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangePassword")
            .field("new_password", &"<redacted>")
            .finish()
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Distinguishes an absent field from an explicit `null`.
mod double_option {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::{FirstName, LastName};
    use fake::Fake;

    fn sample_user() -> User {
        User {
            id: 7,
            email: "ada@example.com".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            username: "ada".to_string(),
            firstname: "Ada".to_string(),
            lastname: Some("Lovelace".to_string()),
        }
    }

    fn valid_new_user() -> NewUser {
        NewUser {
            email: SafeEmail().fake(),
            password: "correct-horse".to_string(),
            username: "ada_l".to_string(),
            firstname: FirstName().fake(),
            lastname: Some(LastName().fake()),
        }
    }

    #[test]
    fn test_user_record_fields() {
        let record = sample_user().to_record();
        let obj = record.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["email", "firstname", "id", "lastname", "username"]
        );
        assert_eq!(record["id"], 7);
        assert_eq!(record["username"], "ada");
    }

    #[test]
    fn test_user_record_omits_password() {
        let record = sample_user().to_record();
        assert!(record.get("password").is_none());
        assert!(record.get("password_hash").is_none());
        assert!(!record.to_string().contains("argon2id"));
    }

    #[test]
    fn test_user_serialize_omits_password() {
        let json = serde_json::to_value(sample_user()).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json, sample_user().to_record());
    }

    #[test]
    fn test_user_record_missing_lastname_is_null() {
        let mut user = sample_user();
        user.lastname = None;
        assert!(user.to_record()["lastname"].is_null());
    }

    #[test]
    fn test_new_user_valid() {
        assert!(valid_new_user().validate().is_ok());
    }

    #[test]
    fn test_new_user_invalid_email() {
        let mut input = valid_new_user();
        input.email = "not-an-email".to_string();
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_new_user_email_too_long() {
        let mut input = valid_new_user();
        input.email = format!("{}@example.com", "a".repeat(110));
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_new_user_username_length_and_blank() {
        let mut input = valid_new_user();
        input.username = "a".repeat(41);
        assert!(input.validate().is_err());

        input.username = "a".repeat(40);
        assert!(input.validate().is_ok());

        input.username = "   ".to_string();
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
    }

    #[test]
    fn test_new_user_username_any_characters() {
        let mut input = valid_new_user();
        for username in ["jean-luc", "josé", "has space", "Ольга"] {
            input.username = username.to_string();
            assert!(input.validate().is_ok(), "rejected {}", username);
        }
    }

    #[test]
    fn test_new_user_short_password_accepted() {
        let mut input = valid_new_user();
        input.password = "abc".to_string();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_new_user_blank_password() {
        let mut input = valid_new_user();
        input.password = "  ".to_string();
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_new_user_blank_firstname() {
        let mut input = valid_new_user();
        input.firstname = "   ".to_string();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_new_user_normalized() {
        let input = NewUser {
            email: "  Ada@Example.COM ".to_string(),
            password: " keep spaces ".to_string(),
            username: " ada ".to_string(),
            firstname: " Ada ".to_string(),
            lastname: Some("   ".to_string()),
        }
        .normalized();
        assert_eq!(input.email, "ada@example.com");
        assert_eq!(input.password, " keep spaces ");
        assert_eq!(input.username, "ada");
        assert_eq!(input.firstname, "Ada");
        assert_eq!(input.lastname, None);
    }

    #[test]
    fn test_new_user_debug_redacts_password() {
        let input = valid_new_user();
        let debug = format!("{:?}", input);
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("correct-horse"));
    }

    #[test]
    fn test_update_user_empty_rejected() {
        let update = UpdateUser::default();
        assert!(update.is_empty());
        assert!(matches!(update.check(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_update_user_lastname_null_clears() {
        let update: UpdateUser = serde_json::from_str(r#"{"lastname": null}"#).unwrap();
        assert_eq!(update.lastname, Some(None));
        assert!(update.check().is_ok());

        let update: UpdateUser = serde_json::from_str(r#"{"firstname": "Grace"}"#).unwrap();
        assert_eq!(update.lastname, None);
    }

    #[test]
    fn test_update_user_lastname_too_long() {
        let update = UpdateUser {
            lastname: Some(Some("x".repeat(51))),
            ..Default::default()
        };
        assert!(update.check().is_err());
    }

    #[test]
    fn test_change_password_validation() {
        assert!(ChangePassword {
            new_password: "abc".into()
        }
        .validate()
        .is_ok());
        assert!(ChangePassword {
            new_password: "".into()
        }
        .validate()
        .is_err());
    }
}
