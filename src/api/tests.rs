//! API Module Tests
//!
//! Validates the request construction rules and the wire-type shapes.
//!
//! ## Test Scopes
//! - **Headers**: credential headers on authenticated calls, and their
//!   guaranteed absence on slot uploads.
//! - **Status classification**: terminal and non-terminal bundle statuses.
//! - **Serialization**: JSON shapes exchanged with the service.

#[cfg(test)]
mod tests {
    use crate::api::client::ExtractionClient;
    use crate::api::types::{
        BundleDetails, BundleStatus, CreateBundleRequest, CreateBundleResponse, DocumentRef,
        Project, UploadSlot, DOCX_CONTENT_TYPE,
    };
    use crate::config::ClientConfig;
    use std::time::Duration;

    fn test_config() -> ClientConfig {
        ClientConfig {
            company_id: "acme".to_string(),
            api_key: "secret-key".to_string(),
            base_url: "http://localhost:3000/external/v1".to_string(),
            documents_dir: "./documents".into(),
            bundle_name: None,
            poll_interval: Duration::from_secs(60),
            poll_max_checks: 60,
        }
    }

    // ============================================================
    // HEADER RULES
    // ============================================================

    #[test]
    fn test_upload_request_carries_no_credentials() {
        let client = ExtractionClient::new(&test_config());
        let slot = UploadSlot {
            url: "https://uploads.test/signed/abc".to_string(),
        };

        let request = client
            .upload_request(&slot, b"document bytes".to_vec())
            .build()
            .expect("failed to build upload request");

        // The slot URL encodes authorization. Any credential header gets
        // the upload rejected by the service.
        assert!(request.headers().get("authorization").is_none());
        assert!(request.headers().get("x-company-id").is_none());
        assert!(request.headers().get("x-api-key").is_none());

        assert_eq!(request.method(), &reqwest::Method::PUT);
        assert_eq!(request.url().as_str(), "https://uploads.test/signed/abc");
        assert_eq!(
            request.headers().get("content-type").unwrap(),
            DOCX_CONTENT_TYPE
        );
    }

    #[test]
    fn test_authed_requests_carry_credentials() {
        let client = ExtractionClient::new(&test_config());

        let request = client
            .authed_get("http://localhost:3000/external/v1/projects")
            .build()
            .expect("failed to build request");

        assert_eq!(request.headers().get("x-company-id").unwrap(), "acme");
        assert_eq!(request.headers().get("x-api-key").unwrap(), "secret-key");
        assert!(request.timeout().is_some(), "remote calls must be bounded");

        let request = client
            .authed_post("http://localhost:3000/external/v1/projects/p1")
            .build()
            .expect("failed to build request");

        assert_eq!(request.method(), &reqwest::Method::POST);
        assert_eq!(request.headers().get("x-company-id").unwrap(), "acme");
        assert_eq!(request.headers().get("x-api-key").unwrap(), "secret-key");
    }

    // ============================================================
    // STATUS CLASSIFICATION
    // ============================================================

    #[test]
    fn test_finished_is_the_only_success() {
        assert!(BundleStatus::classify("FINISHED").is_success());

        assert!(!BundleStatus::classify("ARCHIVED").is_success());
        assert!(!BundleStatus::classify("CANCELED").is_success());
        assert!(!BundleStatus::classify("PROCESSING").is_success());
    }

    #[test]
    fn test_archived_and_canceled_are_failures() {
        assert!(BundleStatus::classify("ARCHIVED").is_failure());
        assert!(BundleStatus::classify("CANCELED").is_failure());

        assert!(!BundleStatus::classify("FINISHED").is_failure());
        assert!(!BundleStatus::classify("PROCESSING").is_failure());
    }

    #[test]
    fn test_unknown_status_is_in_progress_and_keeps_its_name() {
        let status = BundleStatus::classify("REVIEWING");

        assert_eq!(status, BundleStatus::InProgress("REVIEWING".to_string()));
        assert!(!status.is_success());
        assert!(!status.is_failure());
        assert_eq!(status.to_string(), "REVIEWING");
    }

    // ============================================================
    // WIRE SHAPES
    // ============================================================

    #[test]
    fn test_project_list_uses_camel_case_id() {
        let projects: Vec<Project> =
            serde_json::from_value(serde_json::json!([{ "projectId": "p1" }, { "projectId": "p2" }]))
                .unwrap();

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].project_id, "p1");
    }

    #[test]
    fn test_upload_slots_deserialize_from_bare_strings() {
        let slots: Vec<UploadSlot> = serde_json::from_value(serde_json::json!([
            "https://uploads.test/0",
            "https://uploads.test/1"
        ]))
        .unwrap();

        assert_eq!(slots.len(), 2);
        assert_eq!(slots[1].url, "https://uploads.test/1");
    }

    #[test]
    fn test_create_bundle_request_shape() {
        let body = CreateBundleRequest {
            name: "quarterly contracts".to_string(),
            documents: vec![DocumentRef {
                name: "contract.docx".to_string(),
                url: "https://uploads.test/0".to_string(),
            }],
        };

        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "quarterly contracts",
                "documents": [
                    { "name": "contract.docx", "url": "https://uploads.test/0" }
                ]
            })
        );
    }

    #[test]
    fn test_responses_tolerate_unmodeled_fields() {
        let created: CreateBundleResponse = serde_json::from_value(serde_json::json!({
            "id": "b1",
            "createdAt": "2024-05-01T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(created.id, "b1");

        let details: BundleDetails = serde_json::from_value(serde_json::json!({
            "status": "PROCESSING",
            "name": "quarterly contracts",
            "documents": []
        }))
        .unwrap();
        assert_eq!(details.status, "PROCESSING");
    }
}
