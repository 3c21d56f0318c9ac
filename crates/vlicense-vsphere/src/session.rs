//! Session facade over the REST client.
//!
//! [`VsphereSession::connect`] performs the login and hands back a
//! session that owns the client; [`VsphereSession::disconnect`] is the
//! logout counterpart and consumes it. Everything in between is a
//! read-only call against the authenticated client.

use crate::client::VsphereClient;
use crate::error::{VsphereError, VsphereResult};
use crate::license::LicenseManager;
use crate::types::{AboutInfo, VsphereConfig};

use chrono::{DateTime, Utc};
use log::debug;

/// An authenticated session against one vCenter / ESXi endpoint.
pub struct VsphereSession {
    client: VsphereClient,
    connected_at: DateTime<Utc>,
}

impl VsphereSession {
    /// Connect to a vCenter / ESXi host.
    pub async fn connect(config: VsphereConfig) -> VsphereResult<Self> {
        let mut client = VsphereClient::new(&config)?;
        client.login().await?;
        debug!("Session established with {}:{}", config.host, config.port);
        Ok(Self {
            client,
            connected_at: Utc::now(),
        })
    }

    pub fn host(&self) -> &str {
        &self.client.config().host
    }

    pub fn username(&self) -> &str {
        &self.client.config().username
    }

    pub fn session_id(&self) -> Option<&str> {
        self.client.session_id()
    }

    pub fn connected_at(&self) -> DateTime<Utc> {
        self.connected_at
    }

    /// Endpoint identity metadata.
    pub async fn about(&self) -> VsphereResult<AboutInfo> {
        self.client.get("/api/appliance/system/version").await
    }

    /// Acquire the license manager, verifying the session still answers.
    ///
    /// Reaching the manager and fetching its collection are separate
    /// failure points; callers guard each independently.
    pub async fn license_manager(&self) -> VsphereResult<LicenseManager<'_>> {
        if !self.client.check_session().await? {
            return Err(VsphereError::auth("Session no longer valid"));
        }
        Ok(LicenseManager::new(&self.client))
    }

    /// Close the session (DELETE /api/session), consuming it.
    pub async fn disconnect(mut self) -> VsphereResult<()> {
        debug!("Closing session with {}", self.client.config().host);
        self.client.logout().await
    }
}
