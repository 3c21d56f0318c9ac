//! License manager — the endpoint's installed-license collection.

use crate::client::VsphereClient;
use crate::error::VsphereResult;
use crate::types::LicenseRecord;

const LICENSES_PATH: &str = "/api/vcenter/licenses";

/// License operations, borrowed from an authenticated client.
pub struct LicenseManager<'a> {
    client: &'a VsphereClient,
}

impl<'a> LicenseManager<'a> {
    pub fn new(client: &'a VsphereClient) -> Self {
        Self { client }
    }

    /// Fetch every installed license, in whatever order the API yields.
    pub async fn list(&self) -> VsphereResult<Vec<LicenseRecord>> {
        self.client.get(LICENSES_PATH).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_deserialises() {
        let licenses: Vec<LicenseRecord> = serde_json::from_str(
            r#"[
                {"license_key":"AAAAA-BBBBB-CCCCC-DDDDD-EEEEE","name":"vSphere 8 Enterprise Plus","edition_key":"esxEnterprisePlus","total":128,"used":64},
                {"license_key":"00000-00000-00000-00000-00000","name":"Evaluation Mode","edition_key":"eval","total":0,"used":0,"expiration_date":"2026-01-01"}
            ]"#,
        )
        .unwrap();
        assert_eq!(licenses.len(), 2);
        assert_eq!(licenses[0].expiration_date, None);
        assert_eq!(licenses[1].expiration_date.as_deref(), Some("2026-01-01"));
    }

    #[test]
    fn empty_collection_deserialises() {
        let licenses: Vec<LicenseRecord> = serde_json::from_str("[]").unwrap();
        assert!(licenses.is_empty());
    }
}
