//! vSphere REST API client with session-based authentication.
//!
//! Talks to vCenter / ESXi via `https://{host}:{port}/api/...`. Owns
//! the session token lifecycle (create / check / delete) and a typed
//! GET helper for the read-only endpoints this tool consumes.

use crate::error::{VsphereError, VsphereErrorKind, VsphereResult};
use crate::types::VsphereConfig;

use log::debug;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Header carrying the session token on authenticated calls.
const SESSION_HEADER: &str = "vmware-api-session-id";

/// vSphere REST API client.
#[derive(Debug)]
pub struct VsphereClient {
    client: Client,
    base_url: String,
    session_id: Option<String>,
    config: VsphereConfig,
}

impl VsphereClient {
    /// Build a new client from config (does NOT create a session yet).
    pub fn new(config: &VsphereConfig) -> VsphereResult<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(config.insecure)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| VsphereError::connection(format!("Failed to build HTTP client: {e}")))?;

        let base_url = format!("https://{}:{}", config.host, config.port);
        Url::parse(&base_url)
            .map_err(|e| VsphereError::connection(format!("Invalid endpoint '{base_url}': {e}")))?;

        Ok(Self {
            client,
            base_url,
            session_id: None,
            config: config.clone(),
        })
    }

    /// Base URL for API calls.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether we have an active session.
    pub fn is_connected(&self) -> bool {
        self.session_id.is_some()
    }

    /// Current session ID (if any).
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Current config.
    pub fn config(&self) -> &VsphereConfig {
        &self.config
    }

    // ── Session management ──────────────────────────────────────────

    /// Create a new API session (POST /api/session).
    pub async fn login(&mut self) -> VsphereResult<String> {
        let url = format!("{}/api/session", self.base_url);
        debug!("POST {url}");

        let resp = self
            .client
            .post(&url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .send()
            .await?;

        if resp.status() == StatusCode::UNAUTHORIZED {
            return Err(VsphereError::auth("Invalid credentials"));
        }

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(VsphereError::api(
                status.as_u16(),
                format!("Login failed: {body}"),
            ));
        }

        // Session token comes back as a quoted JSON string
        let session_id: String = resp.json().await.map_err(|e| {
            VsphereError::parse(format!("Failed to parse session response: {e}"))
        })?;

        self.session_id = Some(session_id.clone());
        Ok(session_id)
    }

    /// Delete the current session (DELETE /api/session).
    ///
    /// Transport errors are swallowed: at teardown time the session is
    /// gone either way.
    pub async fn logout(&mut self) -> VsphereResult<()> {
        if let Some(ref sid) = self.session_id {
            let url = format!("{}/api/session", self.base_url);
            debug!("DELETE {url}");
            let _ = self
                .client
                .delete(&url)
                .header(SESSION_HEADER, sid.as_str())
                .send()
                .await;
        }
        self.session_id = None;
        Ok(())
    }

    /// Check if the session is still valid (GET /api/session).
    pub async fn check_session(&self) -> VsphereResult<bool> {
        let sid = self.require_session()?;
        let url = format!("{}/api/session", self.base_url);
        let resp = self
            .client
            .get(&url)
            .header(SESSION_HEADER, sid)
            .send()
            .await?;

        Ok(resp.status().is_success())
    }

    // ── HTTP helpers ────────────────────────────────────────────────

    fn require_session(&self) -> VsphereResult<&str> {
        self.session_id
            .as_deref()
            .ok_or_else(|| VsphereError::auth("Not logged in — no active session"))
    }

    /// GET a JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> VsphereResult<T> {
        let sid = self.require_session()?;
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");
        let resp = self
            .client
            .get(&url)
            .header(SESSION_HEADER, sid)
            .send()
            .await?;
        let resp = Self::check_status(resp).await?;
        Self::parse_response(resp).await
    }

    // ── Internal helpers ────────────────────────────────────────────

    async fn check_status(resp: Response) -> VsphereResult<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let code = status.as_u16();
        let body = resp.text().await.unwrap_or_default();

        match status {
            StatusCode::UNAUTHORIZED => {
                Err(VsphereError::auth(format!("Session expired or invalid: {body}")))
            }
            StatusCode::FORBIDDEN => Err(VsphereError::new(
                VsphereErrorKind::Api(code),
                format!("Access denied: {body}"),
            )),
            StatusCode::NOT_FOUND => {
                Err(VsphereError::not_found(format!("Resource not found: {body}")))
            }
            _ => Err(VsphereError::api(code, format!("API error {code}: {body}"))),
        }
    }

    async fn parse_response<T: DeserializeOwned>(resp: Response) -> VsphereResult<T> {
        let text = resp.text().await.map_err(|e| {
            VsphereError::parse(format!("Failed to read response body: {e}"))
        })?;

        if text.is_empty() {
            // Some vSphere endpoints return empty body for success
            return serde_json::from_str("null").map_err(|e| {
                VsphereError::parse(format!("Cannot deserialise empty response: {e}"))
            });
        }

        serde_json::from_str(&text).map_err(|e| {
            VsphereError::parse(format!(
                "JSON parse error: {e} — body: {}",
                &text[..text.len().min(500)]
            ))
        })
    }
}
