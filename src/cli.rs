//! Command-line options.

use clap::Parser;
use vlicense_vsphere::types::VsphereConfig;

/// View VMware licenses on a vCenter or standalone ESXi host.
#[derive(Debug, Parser)]
#[command(name = "vlicense", version, about)]
pub struct Cli {
    /// vCenter or ESXi hostname / IP
    #[arg(long)]
    pub host: String,

    /// Username
    #[arg(long)]
    pub user: String,

    /// Password
    #[arg(long)]
    pub password: String,

    /// Port number
    #[arg(long, default_value_t = 443)]
    pub port: u16,

    /// Validate the endpoint's TLS certificate. Off by default: lab
    /// endpoints usually present self-signed certificates.
    #[arg(long)]
    pub verify_tls: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}

impl Cli {
    pub fn into_config(self) -> VsphereConfig {
        VsphereConfig {
            host: self.host,
            port: self.port,
            username: self.user,
            password: self.password,
            insecure: !self.verify_tls,
            timeout_secs: self.timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_flags_are_enforced() {
        assert!(Cli::try_parse_from(["vlicense", "--host", "esx1"]).is_err());
        assert!(Cli::try_parse_from([
            "vlicense", "--host", "esx1", "--user", "root", "--password", "pw",
        ])
        .is_ok());
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from([
            "vlicense", "--host", "esx1", "--user", "root", "--password", "pw",
        ])
        .unwrap();
        assert_eq!(cli.port, 443);
        assert_eq!(cli.timeout, 30);
        assert!(!cli.verify_tls);
    }

    #[test]
    fn config_mapping_inverts_verify_tls() {
        let cli = Cli::try_parse_from([
            "vlicense", "--host", "esx1", "--user", "root", "--password", "pw",
            "--port", "9443", "--verify-tls",
        ])
        .unwrap();
        let config = cli.into_config();
        assert_eq!(config.port, 9443);
        assert!(!config.insecure);
    }
}
