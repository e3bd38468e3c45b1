use domain::DomainError;
use serde::Serialize;
use shared::password::PasswordError;
use thiserror::Error;

/// Errors returned by the service layer to whatever fronts it.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Serializable error body for callers that report errors as records.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl AppError {
    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "not_found",
            AppError::Conflict(_) => "conflict",
            AppError::Validation(_) => "validation_error",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// Error body with internal details hidden.
    pub fn body(&self) -> ErrorBody {
        let message = match self {
            AppError::NotFound(msg) | AppError::Conflict(msg) | AppError::Validation(msg) => {
                msg.clone()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".into()
            }
        };
        ErrorBody {
            error: self.code(),
            message,
        }
    }
}

/// Maps a Postgres error (SQLSTATE code and constraint name) to an AppError.
pub fn classify_database_error(
    code: Option<&str>,
    constraint: Option<&str>,
    message: &str,
) -> AppError {
    match code {
        // unique_violation
        Some("23505") => AppError::Conflict(
            match constraint {
                Some("users_email_key") => "Email already registered",
                Some("users_username_key") => "Username already taken",
                Some("followers_pair_key") => "Already following this user",
                _ => "Resource already exists",
            }
            .into(),
        ),
        // foreign_key_violation
        Some("23503") => AppError::NotFound("Referenced resource not found".into()),
        // check_violation
        Some("23514") => AppError::Validation(
            match constraint {
                Some("followers_no_self_follow") => DomainError::SelfFollow.to_string(),
                _ => "Value violates a check constraint".to_string(),
            },
        ),
        // string_data_right_truncation
        Some("22001") => AppError::Validation("Value too long for column".into()),
        _ => AppError::Internal(format!("Database error: {}", message)),
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Resource not found".into()),
            sqlx::Error::Database(db_err) => classify_database_error(
                db_err.code().as_deref(),
                db_err.constraint(),
                db_err.message(),
            ),
            _ => AppError::Internal(format!("Database error: {}", err)),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    e.message
                        .clone()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {}", field))
                })
            })
            .collect();
        messages.sort();

        let message = if messages.len() == 1 {
            messages.remove(0)
        } else {
            format!("{} validation errors: {}", messages.len(), messages.join("; "))
        };

        AppError::Validation(message)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::SelfFollow => AppError::Validation(err.to_string()),
        }
    }
}

impl From<PasswordError> for AppError {
    fn from(err: PasswordError) -> Self {
        AppError::Internal(err.to_string())
    }
}
