use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot connect to backend server. Please ensure the backend is running.")]
    ConnectionUnavailable,
    #[error("Backend error: {status}")]
    Backend { status: u16, body: String },
    #[error("Request timed out. Please try with shorter text.")]
    RequestTimedOut,
    #[error("Error: {0}")]
    Client(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Audio error: {0}")]
    Audio(String),
    #[error("{0}")]
    Message(String),
}

impl AppError {
    /// Response text attached to a backend rejection, if there was any.
    pub fn backend_body(&self) -> Option<&str> {
        match self {
            Self::Backend { body, .. } if !body.trim().is_empty() => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        // A connect timeout reports both flags; it is still a timeout.
        if err.is_timeout() {
            Self::RequestTimedOut
        } else if err.is_connect() {
            Self::ConnectionUnavailable
        } else {
            Self::Client(err.to_string())
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Message(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_what_the_form_shows() {
        assert_eq!(
            AppError::Backend {
                status: 500,
                body: "bad request".into()
            }
            .to_string(),
            "Backend error: 500"
        );
        assert_eq!(
            AppError::RequestTimedOut.to_string(),
            "Request timed out. Please try with shorter text."
        );
        assert_eq!(AppError::Client("boom".into()).to_string(), "Error: boom");
    }

    #[test]
    fn backend_body_skips_blank_text() {
        let blank = AppError::Backend {
            status: 502,
            body: "  ".into(),
        };
        assert_eq!(blank.backend_body(), None);
        let filled = AppError::Backend {
            status: 422,
            body: "voice not found".into(),
        };
        assert_eq!(filled.backend_body(), Some("voice not found"));
        assert_eq!(AppError::ConnectionUnavailable.backend_body(), None);
    }
}
