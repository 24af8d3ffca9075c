// This file is part of the terraform-provider-backuprecovery project
//
// Copyright (C) ANEO, 2024-2024. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License")
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Client requests against a mocked API

use backup_recovery::client::{
    ApiError, BackupRecoveryClient, ClientConfig, ProtectionGroupRunOptions,
    ProtectionGroupRunsOptions, ProtectionPoliciesOptions, ReportsOptions,
};
use backup_recovery::models::ProtectionPolicy;
use serde_json::json;
use wiremock::matchers::{bearer_token, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> BackupRecoveryClient {
    BackupRecoveryClient::new(&ClientConfig {
        endpoint: format!("{}/v2/", server.uri()),
        auth_token: "test-token".to_owned(),
        tenant_id: Some("tenant-1/".to_owned()),
        user_agent: None,
    })
    .expect("client should build")
}

#[tokio::test]
async fn list_policies_sends_filters_and_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/data-protect/policies"))
        .and(bearer_token("test-token"))
        .and(header("x-ibm-tenant-id", "tenant-1/"))
        .and(query_param("ids", "a:1:2,a:1:3"))
        .and(query_param("includeStats", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "policies": [
                {"id": "a:1:2", "name": "gold"},
                {"id": "a:1:3", "name": "silver"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .get_protection_policies(&ProtectionPoliciesOptions {
            ids: Some(vec!["a:1:2".to_owned(), "a:1:3".to_owned()]),
            include_stats: Some(false),
            ..Default::default()
        })
        .await
        .expect("request should succeed");

    let names: Vec<_> = response
        .policies
        .unwrap_or_default()
        .into_iter()
        .map(|policy| policy.name)
        .collect();
    assert_eq!(names, [Some("gold".to_owned()), Some("silver".to_owned())]);
}

#[tokio::test]
async fn create_policy_posts_only_present_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/data-protect/policies"))
        .and(body_json(json!({
            "name": "gold",
            "backupPolicy": {"regular": {"incremental": {"schedule": {"unit": "Days", "daySchedule": {"frequency": 1}}}}}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "a:1:9",
            "name": "gold",
            "version": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let policy: ProtectionPolicy = serde_json::from_value(json!({
        "name": "gold",
        "backupPolicy": {"regular": {"incremental": {"schedule": {"unit": "Days", "daySchedule": {"frequency": 1}}}}}
    }))
    .unwrap();

    let created = client(&server)
        .create_protection_policy(&policy)
        .await
        .expect("request should succeed");
    assert_eq!(created.id.as_deref(), Some("a:1:9"));
    assert_eq!(created.version, Some(1));
}

#[tokio::test]
async fn delete_accepts_an_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/data-protect/policies/a:1:9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .delete_protection_policy("a:1:9")
        .await
        .expect("request should succeed");
}

#[tokio::test]
async fn runs_are_requested_under_their_group() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/data-protect/protection-groups/4:1700000000:2/runs"))
        .and(query_param("numRuns", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "runs": [{"id": "4:1700000000:55", "isReplicationRun": false}],
            "totalRuns": 12
        })))
        .mount(&server)
        .await;

    let response = client(&server)
        .get_protection_group_runs(
            "4:1700000000:2",
            &ProtectionGroupRunsOptions {
                num_runs: Some(5),
                ..Default::default()
            },
        )
        .await
        .expect("request should succeed");
    assert_eq!(response.total_runs, Some(12));
    assert_eq!(response.runs.unwrap_or_default().len(), 1);
}

#[tokio::test]
async fn single_run_is_requested_under_its_group() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/data-protect/protection-groups/4:1700000000:2/runs/4:1700000000:55"))
        .and(query_param("includeObjectDetails", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "4:1700000000:55",
            "protectionGroupId": "4:1700000000:2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let run = client(&server)
        .get_protection_group_run(
            "4:1700000000:2",
            "4:1700000000:55",
            &ProtectionGroupRunOptions {
                include_object_details: Some(true),
                ..Default::default()
            },
        )
        .await
        .expect("request should succeed");
    assert_eq!(run.protection_group_id.as_deref(), Some("4:1700000000:2"));
}

#[tokio::test]
async fn ids_cannot_escape_their_path_segment() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/reports"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reports": []})))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/data-protect/policies/..%2F..%2Freports"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "not found"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v2/data-protect/policies/a%2Fb"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client
        .get_protection_policy_by_id("../../reports")
        .await
        .expect_err("request should fail");
    assert!(err.is_not_found());
    client
        .delete_protection_policy("a/b")
        .await
        .expect("request should succeed");
}

#[tokio::test]
async fn error_status_carries_the_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/reports"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "errorCode": "KPermissionDenied",
            "message": "Access denied"
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .get_reports(&ReportsOptions::default())
        .await
        .expect_err("request should fail");
    assert!(matches!(err, ApiError::Status { .. }));
    assert_eq!(
        err.to_string(),
        "API returned 403 Forbidden: Access denied (KPermissionDenied)"
    );
}

#[tokio::test]
async fn not_found_is_recognized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/data-protect/policies/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let err = client(&server)
        .get_protection_policy_by_id("missing")
        .await
        .expect_err("request should fail");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/reports"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"reports\": ["))
        .mount(&server)
        .await;

    let err = client(&server)
        .get_reports(&ReportsOptions::default())
        .await
        .expect_err("request should fail");
    assert!(matches!(err, ApiError::Decode(_)));
}
