use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::{self, Debug, Display};
use std::io;

use crate::launch::LaunchError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        Error::env_var_error(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::storage_error(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::storage_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::reqwest_error(err)
    }
}

impl From<LaunchError> for Error {
    fn from(err: LaunchError) -> Self {
        match err {
            LaunchError::PlatformUnavailable => Error::platform_unavailable_error(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            102 => (StatusCode::CONFLICT, self.message.as_str()),
            104 => (StatusCode::NOT_FOUND, self.message.as_str()),
            200..=299 => (StatusCode::SERVICE_UNAVAILABLE, self.message.as_str()),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl Error {
    pub fn env_var_error(_: env::VarError) -> Self {
        Self {
            code: 1,
            message: "environment variable error".into(),
        }
    }

    pub fn storage_error<T: Debug>(err: T) -> Self {
        tracing::error!("session storage failure: {:?}", err);

        Self {
            code: 2,
            message: "storage error".into(),
        }
    }

    pub fn reqwest_error(err: reqwest::Error) -> Self {
        tracing::warn!("request to upstream failed: {}", err);

        Self {
            code: 3,
            message: "reqwest error".into(),
        }
    }

    pub fn upstream_error() -> Self {
        Self {
            code: 4,
            message: "upstream error".into(),
        }
    }

    pub fn unexpected_error() -> Self {
        Self {
            code: 5,
            message: "unexpected error".into(),
        }
    }

    pub fn config_error(message: &str) -> Self {
        Self {
            code: 6,
            message: message.into(),
        }
    }

    pub fn invalid_input_error() -> Self {
        Self {
            code: 100,
            message: "invalid input".into(),
        }
    }

    pub fn validation_error(message: &str) -> Self {
        Self {
            code: 101,
            message: message.into(),
        }
    }

    pub fn search_in_progress_error() -> Self {
        Self {
            code: 102,
            message: "a search is already in progress".into(),
        }
    }

    pub fn not_found_error() -> Self {
        Self {
            code: 104,
            message: "not found".into(),
        }
    }

    pub fn platform_error(message: &str) -> Self {
        Self {
            code: 200,
            message: message.into(),
        }
    }

    pub fn platform_unavailable_error() -> Self {
        Self {
            code: 201,
            message: "Unable to open the app".into(),
        }
    }

    pub fn is_validation_error(&self) -> bool {
        self.code == 101
    }

    pub fn is_search_in_progress_error(&self) -> bool {
        self.code == 102
    }

    pub fn is_platform_error(&self) -> bool {
        (200..=299).contains(&self.code)
    }

    pub fn is_platform_unavailable_error(&self) -> bool {
        self.code == 201
    }
}
