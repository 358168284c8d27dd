//! HTTP client for the AI API
//!
//! Thin wrapper around `reqwest`: holds the base URL and the bearer token
//! obtained from the login endpoint, and exposes the handful of request
//! shapes the probes need. All calls are strictly sequential; there is no
//! retry or refresh logic.

use colored::Colorize;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::common::{Error, Result};

/// Authenticated client for the AI API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

/// A completed HTTP exchange: status plus the raw body text.
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    /// Parse the body as JSON, if it is JSON.
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }

    /// Body pretty-printed when it parses as JSON, verbatim otherwise.
    pub fn pretty_body(&self) -> String {
        match self.json() {
            Some(value) => {
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| self.body.clone())
            }
            None => self.body.clone(),
        }
    }
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// The bearer token obtained by `login`, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Authenticate against `POST /auth/login` and store the bearer token.
    ///
    /// Any outcome other than HTTP 200 with a non-empty `token` field is an
    /// `Error::AuthFailed`; the caller treats that as fatal.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<()> {
        println!("Authenticating...");

        let endpoint = self.endpoint("/auth/login");
        debug!(%endpoint, "sending login request");

        let response = self
            .http
            .post(&endpoint)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| Error::transport(&endpoint, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(&endpoint, e))?;

        if status != 200 {
            return Err(Error::AuthFailed(format!(
                "server returned status {status}: {body}"
            )));
        }

        let token = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v.get("token").and_then(Value::as_str).map(str::to_string))
            .filter(|t| !t.is_empty());

        match token {
            Some(token) => {
                println!("{}", "Authentication successful".green());
                self.token = Some(token);
                Ok(())
            }
            None => Err(Error::AuthFailed("no token in response".to_string())),
        }
    }

    /// Authenticated GET.
    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        let endpoint = self.endpoint(path);
        debug!(%endpoint, "GET");

        let mut request = self
            .http
            .get(&endpoint)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::transport(&endpoint, e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(&endpoint, e))?;

        Ok(ApiResponse { status, body })
    }

    /// Authenticated POST with a JSON payload.
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<ApiResponse> {
        let endpoint = self.endpoint(path);
        debug!(%endpoint, "POST");

        let mut request = self.http.post(&endpoint).json(payload);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::transport(&endpoint, e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(&endpoint, e))?;

        Ok(ApiResponse { status, body })
    }
}
