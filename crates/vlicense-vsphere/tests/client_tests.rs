use vlicense_vsphere::client::VsphereClient;
use vlicense_vsphere::error::VsphereErrorKind;
use vlicense_vsphere::types::{LicenseRecord, VsphereConfig};

fn lab_config() -> VsphereConfig {
    VsphereConfig {
        host: "esx1.lab.local".to_string(),
        username: "root".to_string(),
        password: "secret".to_string(),
        insecure: true,
        ..Default::default()
    }
}

#[test]
fn client_builds_from_insecure_config() {
    let client = VsphereClient::new(&lab_config()).unwrap();
    assert_eq!(client.base_url(), "https://esx1.lab.local:443");
    assert!(client.config().insecure);
    assert!(!client.is_connected());
}

#[tokio::test]
async fn session_check_requires_login() {
    let client = VsphereClient::new(&lab_config()).unwrap();
    let err = client.check_session().await.unwrap_err();
    assert_eq!(err.kind, VsphereErrorKind::Authentication);
}

#[test]
fn license_record_tolerates_extra_wire_fields() {
    // Newer API versions add fields; the record must keep deserialising.
    let lic: LicenseRecord = serde_json::from_str(
        r#"{"license_key":"AAAAA-BBBBB-CCCCC-DDDDD-EEEEE","name":"vSphere 8 Standard","edition_key":"esxStandard","total":32,"used":8,"cost_unit":"cpuPackage","labels":[]}"#,
    )
    .unwrap();
    assert_eq!(lic.edition_key, "esxStandard");
    assert_eq!(lic.expiration_date, None);
}
