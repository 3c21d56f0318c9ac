//! Console reporting for endpoint identity and license records.
//!
//! Failures never propagate: each guarded step prints a `[-]` line and
//! gives up, and the process still exits 0.

use vlicense_vsphere::session::VsphereSession;
use vlicense_vsphere::types::{AboutInfo, LicenseRecord};

const SEPARATOR_WIDTH: usize = 45;

pub fn print_identity(about: &AboutInfo) {
    println!("[+] Connected to: {} ({})", about.product, about.api_type);
    println!("[i] Version: {}, Build: {}", about.version, about.build);
}

fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

fn format_license_block(lic: &LicenseRecord) -> String {
    let expiration = lic.expiration_date.as_deref().unwrap_or("N/A");
    [
        format!("License Key      : {}", lic.license_key),
        format!("  Name           : {}", lic.name),
        format!("  Edition        : {}", lic.edition_key),
        format!("  Total Capacity : {}", lic.total),
        format!("  Used Capacity  : {}", lic.used),
        format!("  Expiration     : {expiration}"),
    ]
    .join("\n")
}

/// Print every installed license, one block + separator per record.
///
/// Two independently guarded failure points: reaching the license
/// manager, and fetching its collection.
pub async fn report_licenses(session: &VsphereSession) {
    let manager = match session.license_manager().await {
        Ok(m) => m,
        Err(e) => {
            log::debug!("license manager unavailable: {e}");
            println!("[-] Unable to access licenseManager.");
            return;
        }
    };

    println!("\n=== VMware License Information ===");
    match manager.list().await {
        Ok(licenses) => {
            for lic in &licenses {
                println!("{}", format_license_block(lic));
                println!("{}", separator());
            }
        }
        Err(e) => println!("[-] Error fetching licenses: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(expiration: Option<&str>) -> LicenseRecord {
        LicenseRecord {
            license_key: "AAAAA-BBBBB-CCCCC-DDDDD-EEEEE".to_string(),
            name: "vSphere 8 Enterprise Plus".to_string(),
            edition_key: "esxEnterprisePlus".to_string(),
            total: 128,
            used: 64,
            expiration_date: expiration.map(str::to_string),
        }
    }

    #[test]
    fn block_with_expiration() {
        let block = format_license_block(&record(Some("2026-01-01")));
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[0], "License Key      : AAAAA-BBBBB-CCCCC-DDDDD-EEEEE");
        assert_eq!(lines[1], "  Name           : vSphere 8 Enterprise Plus");
        assert_eq!(lines[2], "  Edition        : esxEnterprisePlus");
        assert_eq!(lines[3], "  Total Capacity : 128");
        assert_eq!(lines[4], "  Used Capacity  : 64");
        assert_eq!(lines[5], "  Expiration     : 2026-01-01");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn value_columns_align() {
        let block = format_license_block(&record(None));
        for line in block.lines() {
            assert_eq!(line.find(':'), Some(17));
        }
    }

    #[test]
    fn block_without_expiration_prints_placeholder() {
        let block = format_license_block(&record(None));
        assert!(block.ends_with("  Expiration     : N/A"));
    }

    #[test]
    fn separator_is_45_dashes() {
        let sep = separator();
        assert_eq!(sep.len(), 45);
        assert!(sep.chars().all(|c| c == '-'));
    }
}
