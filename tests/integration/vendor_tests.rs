//! Cisco and Dell HTTP clients against mock vendor endpoints

#[cfg(test)]
mod tests {
    use crate::common::fixtures::config_for;
    use crate::common::{InMemoryCmdb, date};
    use crate::{assert_err, assert_ok};
    use serde_json::json;
    use std::sync::Arc;
    use warranty_sync::core::identifier::{IdentifierRules, normalize};
    use warranty_sync::core::models::{EndOfLife, NormalizedIdentifier, VendorFamily};
    use warranty_sync::core::vendors::{
        CiscoClient, CiscoWarrantySource, DellApi, DellClient, DellWarrantySource, WarrantySource,
    };
    use warranty_sync::{Config, SyncError, WarrantySync};
    use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn ids(raw: &[&str]) -> Vec<NormalizedIdentifier> {
        raw.iter()
            .map(|r| normalize(r, "", &IdentifierRules::SERIAL_NUMBER).unwrap().identifier)
            .collect()
    }

    async fn mount_token(server: &MockServer, token_path: &str, client_id: &str) {
        Mock::given(method("POST"))
            .and(path(token_path))
            .and(body_string_contains("grant_type=client_credentials"))
            .and(body_string_contains(format!("client_id={}", client_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "tok-123",
                "token_type": "Bearer",
                "expires_in": 3599
            })))
            .mount(server)
            .await;
    }

    async fn mount_rejected_token(server: &MockServer, token_path: &str) {
        Mock::given(method("POST"))
            .and(path(token_path))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"error": "invalid_client"})),
            )
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_cisco_merges_warranty_and_end_of_life() {
        let server = MockServer::start().await;
        let config = config_for(&server.uri());
        mount_token(&server, "/cisco/token", "cisco-id").await;
        Mock::given(method("GET"))
            .and(path("/sn2info/coverage/FOC1,FOC2"))
            .and(header("Authorization", "Bearer tok-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "serial_numbers": [
                    {"sr_no": "FOC1", "warranty_end_date": "2026-09-30", "is_covered": "YES"},
                    {"sr_no": "FOC2", "ErrorResponse": {"APIError": "SN not found"}}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/eox/FOC1,FOC2"))
            .and(query_param("responseencoding", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "EOXRecord": [
                    {"EOXInputValue": "FOC1", "LastDateOfSupport": {"value": "2030-07-31"}}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = assert_ok!(CiscoClient::connect(config.cisco(), config.http()).await);
        let source = CiscoWarrantySource::new(api, config.cisco().batch_size);
        let results = assert_ok!(source.lookup(&ids(&["FOC1", "FOC2"])).await);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].identifier, "FOC1");
        assert!(results[0].covered);
        assert_eq!(results[0].warranty_end, Some(date(2026, 9, 30)));
        assert_eq!(results[0].end_of_life, EndOfLife::Date(date(2030, 7, 31)));
        assert!(results[1].is_error());
    }

    #[tokio::test]
    async fn test_cisco_rejected_credentials_fail_connect() {
        let server = MockServer::start().await;
        let config = config_for(&server.uri());
        mount_rejected_token(&server, "/cisco/token").await;

        let err = assert_err!(CiscoClient::connect(config.cisco(), config.http()).await);
        assert!(matches!(err, SyncError::Auth { service: "cisco", .. }));
        assert!(err.is_fatal());
    }

    #[tokio::test]
    async fn test_cisco_unauthorized_batch_is_fatal() {
        let server = MockServer::start().await;
        let config = config_for(&server.uri());
        mount_token(&server, "/cisco/token", "cisco-id").await;
        Mock::given(method("GET"))
            .and(path("/sn2info/coverage/FOC1"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let api = assert_ok!(CiscoClient::connect(config.cisco(), config.http()).await);
        let source = CiscoWarrantySource::new(api, 20);
        let err = assert_err!(source.lookup(&ids(&["FOC1"])).await);
        assert!(err.is_fatal());
    }

    #[tokio::test]
    async fn test_dell_queries_service_tags() {
        let server = MockServer::start().await;
        let config = config_for(&server.uri());
        mount_token(&server, "/dell/token", "dell-id").await;
        Mock::given(method("GET"))
            .and(path("/asset-entitlements"))
            .and(query_param("servicetags", "7XK2Q1,AMALONE,ZZZZZ"))
            .and(header("Accept", "application/json"))
            .and(header("Authorization", "Bearer tok-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 4411, "serviceTag": "7XK2Q1", "entitlements": [
                    {"endDate": "2023-03-01T05:59:59.000Z"},
                    {"endDate": "2026-03-01T05:59:59.000Z"}
                ]},
                {"id": null, "serviceTag": "AMALONE", "entitlements": []},
                {"id": null, "serviceTag": "ZZZZZ", "entitlements": []}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let api = assert_ok!(DellClient::connect(config.dell(), config.http()).await);
        let source = DellWarrantySource::new(
            api,
            config.dell().batch_size,
            config.dell().ignored_service_tags.iter().cloned(),
        );
        let results = assert_ok!(source.lookup(&ids(&["7XK2Q1", "AMALONE", "ZZZZZ"])).await);

        assert_eq!(source.family(), VendorFamily::Dell);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].warranty_end, Some(date(2026, 3, 1)));
        assert_eq!(results[1].identifier, "ZZZZZ");
        assert!(results[1].is_error());
    }

    #[tokio::test]
    async fn test_dell_server_error_fails_batch() {
        let server = MockServer::start().await;
        let config = config_for(&server.uri());
        mount_token(&server, "/dell/token", "dell-id").await;
        Mock::given(method("GET"))
            .and(path("/asset-entitlements"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream timeout"))
            .mount(&server)
            .await;

        let api = assert_ok!(DellClient::connect(config.dell(), config.http()).await);
        let err = assert_err!(api.asset_entitlements(&ids(&["7XK2Q1"])).await);

        assert!(matches!(err, SyncError::VendorBatch { vendor: "dell", .. }));
        assert!(!err.is_fatal());
    }

    #[tokio::test]
    async fn test_dell_malformed_body_fails_batch() {
        let server = MockServer::start().await;
        let config = config_for(&server.uri());
        mount_token(&server, "/dell/token", "dell-id").await;
        Mock::given(method("GET"))
            .and(path("/asset-entitlements"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"assets": []})))
            .mount(&server)
            .await;

        let api = assert_ok!(DellClient::connect(config.dell(), config.http()).await);
        let err = assert_err!(api.asset_entitlements(&ids(&["7XK2Q1"])).await);
        assert!(matches!(err, SyncError::VendorBatch { .. }));
    }

    #[tokio::test]
    async fn test_rejected_credentials_do_not_stop_other_vendor() {
        let server = MockServer::start().await;
        mount_rejected_token(&server, "/cisco/token").await;
        mount_rejected_token(&server, "/dell/token").await;
        let cmdb = Arc::new(InMemoryCmdb::new());

        let sync = WarrantySync::with_cmdb(config_for(&server.uri()), cmdb);
        let report = sync.run().await;

        assert_eq!(report.runs.len(), 2);
        assert_eq!(report.runs[0].family, VendorFamily::Cisco);
        assert_eq!(report.runs[1].family, VendorFamily::Dell);
        assert_eq!(report.failures().count(), 2);
        assert!(!report.is_success());
    }

    #[tokio::test]
    async fn test_end_to_end_cisco_run() {
        let server = MockServer::start().await;
        let mut config: Config = config_for(&server.uri());
        config.sync.dell.enabled = false;

        mount_token(&server, "/cisco/token", "cisco-id").await;
        Mock::given(method("GET"))
            .and(path("/api/now/table/cmdb_ci"))
            .and(query_param(
                "sysparm_query",
                "manufacturerLIKECisco^ORmanufacturerLIKEMeraki^ORDERBYname^ORDERBYsys_id",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": [{
                "sys_id": "abc",
                "name": "core-sw-01",
                "serial_number": "FOC1",
                "asset_tag": "",
                "u_active_support_contract": "true",
                "warranty_expiration": "2024-01-31",
                "u_end_of_life": "",
                "u_valid_warranty_data": "true"
            }]})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/now/table/cmdb_ci"))
            .and(query_param("sysparm_query", "name=core-sw-01^serial_number=FOC1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"result": [{"sys_id": "abc"}]})),
            )
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/api/now/table/cmdb_ci/abc"))
            .and(body_json(json!({
                "warranty_expiration": "2027-01-31"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": {}})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/sn2info/coverage/FOC1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "serial_numbers": [
                    {"sr_no": "FOC1", "warranty_end_date": "2027-01-31", "is_covered": "YES"}
                ]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/eox/FOC1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"EOXRecord": []})))
            .mount(&server)
            .await;

        let sync = assert_ok!(WarrantySync::new(config));
        let report = sync.run().await;

        assert!(report.is_success());
        let summary = assert_ok!(report.runs[0].result.as_ref());
        assert_eq!(summary.fetched, 1);
        assert_eq!(summary.updated, 1);
        assert_eq!(summary.batches_ok, 1);
    }
}
