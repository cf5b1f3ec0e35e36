//! API failure taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every failed call lands in exactly one class so pages can surface a
//! message without inspecting transport details. Backend error bodies carry a
//! `detail` field; when it is a string it becomes the message verbatim,
//! otherwise (e.g. a list of field errors) a default message for the class is
//! used.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Classified failure of an API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Missing, invalid, or expired token; wrong role.
    #[error("{0}")]
    Auth(String),

    /// Missing or malformed fields, duplicate signup.
    #[error("{0}")]
    Validation(String),

    /// Unknown resource id.
    #[error("{0}")]
    NotFound(String),

    /// The request never reached the backend.
    #[error("network error: {0}")]
    Network(String),

    /// The backend failed while handling the request.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The backend answered with a body of the wrong shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success HTTP response.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = detail_message(body);
        match status {
            401 | 403 => Self::Auth(detail.unwrap_or_else(|| "Not authorized".to_owned())),
            404 => Self::NotFound(detail.unwrap_or_else(|| "Not found".to_owned())),
            400..=499 => Self::Validation(detail.unwrap_or_else(|| "Invalid request".to_owned())),
            _ => Self::Server {
                status,
                message: detail.unwrap_or_else(|| "Something went wrong".to_owned()),
            },
        }
    }

    /// Short machine-readable class name, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Auth(_) => "auth",
            Self::Validation(_) => "validation",
            Self::NotFound(_) => "not_found",
            Self::Network(_) => "network",
            Self::Server { .. } => "server",
            Self::Decode(_) => "decode",
        }
    }
}

fn detail_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let detail = value.get("detail")?.as_str()?.trim();
    if detail.is_empty() {
        return None;
    }
    Some(detail.to_owned())
}
