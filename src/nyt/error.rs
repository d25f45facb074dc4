use reqwest::StatusCode;
use thiserror::Error;

/// Cookie carrying the authenticated session token.
pub const SESSION_COOKIE: &str = "NYT-S";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Login endpoint rejected the credentials.
    #[error("login rejected ({status}): {body}")]
    AuthenticationFailed { status: StatusCode, body: String },

    /// Login succeeded but the session cookie was absent from the response.
    #[error("NYT-S cookie not found in login response")]
    MissingSessionCookie,

    /// Overview or detail endpoint returned a non-2xx status.
    #[error("{endpoint} request failed ({status}): {body}")]
    Remote {
        endpoint: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("http transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
