use super::error::{ApiError, SESSION_COOKIE};
use super::types::LoginResponse;
use reqwest::Client;

// The login service rejects generic clients; these match the iOS
// crosswords app it was built for.
const USER_AGENT: &str = "Crosswords/20191213190708 CFNetwork/1128.0.1 Darwin/19.6.0";
const CLIENT_ID: &str = "ios.crosswords";

/// Exchange account credentials for the NYT-S session token.
pub async fn login(
    client: &Client,
    login_url: &str,
    username: &str,
    password: &str,
) -> Result<String, ApiError> {
    let resp = client
        .post(login_url)
        .header("User-Agent", USER_AGENT)
        .header("client_id", CLIENT_ID)
        .form(&[("login", username), ("password", password)])
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::AuthenticationFailed { status, body });
    }

    let parsed: LoginResponse = resp.json().await?;
    parsed
        .data
        .cookies
        .into_iter()
        .find(|c| c.name == SESSION_COOKIE)
        .map(|c| c.ciphered_value)
        .ok_or(ApiError::MissingSessionCookie)
}
