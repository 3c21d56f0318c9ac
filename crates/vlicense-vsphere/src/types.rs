//! Shared types for the vSphere license client.
//!
//! Wire types use the REST API's own snake_case field names so they
//! deserialise without renames.

use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Connection / Config
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Connection settings for a vCenter / ESXi endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VsphereConfig {
    /// vCenter or ESXi hostname / IP (e.g. "vcenter.lab.local")
    pub host: String,
    /// Port (default 443)
    #[serde(default = "default_port")]
    pub port: u16,
    /// Username (e.g. "administrator@vsphere.local")
    pub username: String,
    /// Password
    pub password: String,
    /// Skip TLS certificate verification (self-signed labs)
    #[serde(default)]
    pub insecure: bool,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_port() -> u16 { 443 }
fn default_timeout() -> u64 { 30 }

impl Default for VsphereConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: 443,
            username: String::new(),
            password: String::new(),
            insecure: false,
            timeout_secs: 30,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Endpoint identity
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Endpoint identity metadata (GET /api/appliance/system/version).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutInfo {
    /// Product name (e.g. "VMware vCenter Server")
    pub product: String,
    /// API type (e.g. "vCenter Server appliance")
    #[serde(rename = "type")]
    pub api_type: String,
    pub version: String,
    pub build: String,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Licenses
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One installed license entitlement.
///
/// Not every license type carries an expiration (perpetual keys don't),
/// so the field stays optional and is printed verbatim when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicenseRecord {
    /// License key (e.g. "AAAAA-BBBBB-CCCCC-DDDDD-EEEEE")
    pub license_key: String,
    /// Display name
    pub name: String,
    /// Edition identifier (e.g. "esxEnterprisePlus")
    pub edition_key: String,
    /// Total capacity
    pub total: u32,
    /// Used capacity
    pub used: u32,
    #[serde(default)]
    pub expiration_date: Option<String>,
}
