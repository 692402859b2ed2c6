//! OAuth 2.0 authorization code flow against Google

use serde_json::Value;

use super::client::{GoogleClient, GoogleError, decode_response};
use super::config::{AUTH_URL, SCOPES};

impl GoogleClient {
    /// Build the consent screen URL the frontend redirects the user
    /// to. Asks for offline access so Google hands back a refresh
    /// token along with the access token.
    pub fn authorization_url(&self, state: Option<&str>) -> String {
        let mut url = format!(
            "{}?client_id={}&redirect_uri={}&response_type=code&scope={}&access_type=offline&prompt={}",
            AUTH_URL,
            urlencoding::encode(&self.config.client_id),
            urlencoding::encode(&self.config.redirect_uri),
            urlencoding::encode(SCOPES),
            urlencoding::encode("select_account consent"),
        );
        if let Some(state) = state {
            url.push_str(&format!("&state={}", urlencoding::encode(state)));
        }
        url
    }

    /// Exchange an authorization code for tokens. The token response
    /// is returned untouched.
    pub async fn exchange_code_for_token(&self, code: &str) -> Result<Value, GoogleError> {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("code", code),
            ("grant_type", "authorization_code"),
            ("redirect_uri", self.config.redirect_uri.as_str()),
        ];
        let res = self
            .http
            .post(&self.config.token_url)
            .form(&params[..])
            .send()
            .await?;
        let (_, token) = decode_response(res, |status| status == reqwest::StatusCode::OK).await?;
        Ok(token)
    }

    /// Fetch the profile of the user the access token belongs to
    pub async fn user_info(&self, access_token: &str) -> Result<Value, GoogleError> {
        let res = self
            .http
            .get(self.api_url("/oauth2/v2/userinfo"))
            .bearer_auth(access_token)
            .send()
            .await?;
        let (_, info) = decode_response(res, |status| status.is_success()).await?;
        Ok(info)
    }
}
