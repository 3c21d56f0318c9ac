//! Error types for the vSphere license client.

use std::fmt;

/// Categorised error kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VsphereErrorKind {
    /// Endpoint unreachable, TLS or socket failure
    Connection,
    /// Authentication failed (401)
    Authentication,
    /// Resource not found (404)
    NotFound,
    /// HTTP error with status code
    Api(u16),
    /// JSON parse / deserialisation error
    Parse,
    /// Request timed out
    Timeout,
    /// Generic
    Other,
}

/// Crate error type carrying a kind + human-readable message.
///
/// The message is what ends up on the console, so `Display` renders it
/// alone; callers that care about the category match on `kind`.
#[derive(Debug, Clone)]
pub struct VsphereError {
    pub kind: VsphereErrorKind,
    pub message: String,
}

impl VsphereError {
    pub fn new(kind: VsphereErrorKind, msg: impl Into<String>) -> Self {
        Self { kind, message: msg.into() }
    }

    pub fn connection(msg: impl Into<String>) -> Self {
        Self::new(VsphereErrorKind::Connection, msg)
    }

    pub fn auth(msg: impl Into<String>) -> Self {
        Self::new(VsphereErrorKind::Authentication, msg)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(VsphereErrorKind::NotFound, msg)
    }

    pub fn api(status: u16, msg: impl Into<String>) -> Self {
        Self::new(VsphereErrorKind::Api(status), msg)
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::new(VsphereErrorKind::Parse, msg)
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::new(VsphereErrorKind::Timeout, msg)
    }
}

impl fmt::Display for VsphereError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for VsphereError {}

impl From<reqwest::Error> for VsphereError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::timeout(e.to_string())
        } else if e.is_connect() {
            Self::connection(e.to_string())
        } else {
            Self::new(VsphereErrorKind::Other, e.to_string())
        }
    }
}

impl From<serde_json::Error> for VsphereError {
    fn from(e: serde_json::Error) -> Self {
        Self::parse(e.to_string())
    }
}

/// Convenience alias.
pub type VsphereResult<T> = Result<T, VsphereError>;
