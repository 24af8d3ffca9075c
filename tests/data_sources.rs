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

//! Data source reads and resource operations against a mocked API

use std::borrow::Cow;

use backup_recovery::client::{BackupRecoveryClient, ClientConfig, ClientSlot};
use backup_recovery::group::{
    ProtectionGroupDataSource, ProtectionGroupRunDataSource, ProtectionGroupRunState,
    ProtectionGroupRunsDataSource, ProtectionGroupRunsState, ProtectionGroupState,
};
use backup_recovery::policy::state::{
    BackupPolicy, Frequency, ProtectionPolicy, RegularBackupPolicy, Schedule, ScheduledBackup,
};
use backup_recovery::policy::{
    ProtectionPoliciesDataSource, ProtectionPoliciesState, ProtectionPolicyResource,
};
use backup_recovery::report::{ReportsDataSource, ReportsState};
use serde_json::json;
use tf_provider::value::Value;
use tf_provider::{DataSource, Diagnostics, Resource};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn slot(server: &MockServer) -> ClientSlot {
    ClientSlot::with_client(
        BackupRecoveryClient::new(&ClientConfig {
            endpoint: server.uri(),
            auth_token: "test-token".to_owned(),
            ..Default::default()
        })
        .expect("client should build"),
    )
}

#[tokio::test]
async fn policies_read_fills_the_list_and_a_timestamp() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data-protect/policies"))
        .and(query_param("policyNames", "gold"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "policies": [{"id": "a:1:2", "name": "gold", "isCBSEnabled": true}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = ProtectionPoliciesState {
        policy_names: Value::Value(vec![Value::Value(Cow::Borrowed("gold"))]),
        ..Default::default()
    };
    let mut diags = Diagnostics::default();
    let state = ProtectionPoliciesDataSource::new(slot(&server))
        .read(&mut diags, config, Default::default())
        .await
        .expect("read should succeed");

    assert!(diags.errors.is_empty());
    assert!(state.id.is_value());
    let policies = state.policies.as_ref_option().expect("policies are set");
    assert_eq!(policies.len(), 1);
    assert_eq!(policies[0].name, Value::Value("gold".to_owned()));
    assert_eq!(policies[0].is_cbs_enabled, Value::Value(true));
    assert_eq!(policies[0].description, Value::Null);
}

#[tokio::test]
async fn failed_read_names_the_operation() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reports"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .mount(&server)
        .await;

    let mut diags = Diagnostics::default();
    let state = ReportsDataSource::new(slot(&server))
        .read(&mut diags, ReportsState::default(), Default::default())
        .await;

    assert!(state.is_none());
    assert_eq!(diags.errors.len(), 1);
    assert_eq!(diags.errors[0].summary, "GetReports failed");
}

#[tokio::test]
async fn reports_are_flattened_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reports"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "reports": [
                {"id": "r1", "title": "Protection", "componentIds": ["c1", "c2"]},
                {"id": "r2", "title": "Storage"}
            ]
        })))
        .mount(&server)
        .await;

    let mut diags = Diagnostics::default();
    let state = ReportsDataSource::new(slot(&server))
        .read(&mut diags, ReportsState::default(), Default::default())
        .await
        .expect("read should succeed");

    let reports = state.reports.as_ref_option().expect("reports are set");
    let ids: Vec<_> = reports.iter().map(|report| report.id.clone()).collect();
    assert_eq!(
        ids,
        [Value::Value("r1".to_owned()), Value::Value("r2".to_owned())]
    );
    assert_eq!(
        reports[0].component_ids,
        Value::Value(vec![
            Value::Value("c1".to_owned()),
            Value::Value("c2".to_owned())
        ])
    );
    assert_eq!(reports[1].component_ids, Value::Null);
}

#[tokio::test]
async fn group_read_uses_the_requested_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data-protect/protection-groups/4:1700000000:2"))
        .and(query_param("includeLastRunInfo", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "vms",
            "isPaused": false,
            "lastRun": {"id": "4:1700000000:55", "localBackupInfo": {"status": "Succeeded"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = ProtectionGroupState {
        protection_group_id: Value::Value(Cow::Borrowed("4:1700000000:2")),
        include_last_run_info: Value::Value(true),
        ..Default::default()
    };
    let mut diags = Diagnostics::default();
    let state = ProtectionGroupDataSource::new(slot(&server))
        .read(&mut diags, config, Default::default())
        .await
        .expect("read should succeed");

    assert_eq!(state.id, Value::Value("4:1700000000:2".to_owned()));
    assert_eq!(state.is_paused, Value::Value(false));
    let last_run = state.last_run.as_ref_option().expect("last run is set");
    assert_eq!(last_run.id, Value::Value("4:1700000000:55".to_owned()));
}

#[tokio::test]
async fn runs_read_reports_the_total() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data-protect/protection-groups/4:1700000000:2/runs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "runs": [{"id": "4:1700000000:55"}, {"id": "4:1700000000:54"}],
            "totalRuns": 40
        })))
        .mount(&server)
        .await;

    let config = ProtectionGroupRunsState {
        protection_group_id: Value::Value(Cow::Borrowed("4:1700000000:2")),
        ..Default::default()
    };
    let mut diags = Diagnostics::default();
    let state = ProtectionGroupRunsDataSource::new(slot(&server))
        .read(&mut diags, config, Default::default())
        .await
        .expect("read should succeed");

    assert_eq!(state.total_runs, Value::Value(40));
    assert_eq!(state.runs.as_ref_option().map(Vec::len), Some(2));
}

#[tokio::test]
async fn run_read_uses_the_run_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data-protect/protection-groups/4:1700000000:2/runs/4:1700000000:55"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "4:1700000000:55",
            "protectionGroupId": "4:1700000000:2",
            "protectionGroupName": "vms",
            "localBackupInfo": {"status": "Succeeded"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = ProtectionGroupRunState {
        protection_group_run_id: Value::Value(Cow::Borrowed("4:1700000000:2")),
        run_id: Value::Value(Cow::Borrowed("4:1700000000:55")),
        ..Default::default()
    };
    let mut diags = Diagnostics::default();
    let state = ProtectionGroupRunDataSource::new(slot(&server))
        .read(&mut diags, config, Default::default())
        .await
        .expect("read should succeed");

    assert!(diags.errors.is_empty());
    assert_eq!(state.id, Value::Value("4:1700000000:55".to_owned()));
    assert_eq!(state.protection_group_name, Value::Value("vms".to_owned()));
    let summary = state.local_backup_info.as_ref_option().expect("summary is set");
    assert_eq!(summary.status, Value::Value("Succeeded".to_owned()));
}

fn planned_policy() -> ProtectionPolicy {
    let schedule = Schedule {
        unit: Value::Value("Days".to_owned()),
        day_schedule: Value::Value(Frequency {
            frequency: Value::Value(1),
        }),
        ..Default::default()
    };
    ProtectionPolicy {
        name: Value::Value("gold".to_owned()),
        backup_policy: Value::Value(BackupPolicy {
            regular: Value::Value(RegularBackupPolicy {
                incremental: Value::Value(ScheduledBackup {
                    schedule: Value::Value(schedule),
                }),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[tokio::test]
async fn create_keeps_the_plan_and_takes_computed_values() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/data-protect/policies"))
        .and(body_partial_json(json!({"name": "gold"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "a:1:9",
            "name": "gold",
            "version": 1,
            "lastModificationTimeUsecs": 1700000000000000i64,
            "isUsable": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut planned = planned_policy();
    planned.mark_computed_unknown();
    let mut diags = Diagnostics::default();
    let (state, _) = ProtectionPolicyResource::new(slot(&server))
        .create(
            &mut diags,
            planned.clone(),
            planned.clone(),
            Default::default(),
            Default::default(),
        )
        .await
        .expect("create should succeed");

    assert!(diags.errors.is_empty());
    assert_eq!(state.id, Value::Value("a:1:9".to_owned()));
    assert_eq!(state.version, Value::Value(1));
    assert_eq!(state.is_usable, Value::Value(true));
    assert_eq!(state.name, planned.name);
    assert_eq!(state.backup_policy, planned.backup_policy);
}

#[tokio::test]
async fn read_of_a_deleted_policy_drops_it_from_the_state() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data-protect/policies/a:1:9"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "not found"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut prior = planned_policy();
    prior.id = Value::Value("a:1:9".to_owned());
    let mut diags = Diagnostics::default();
    let result = ProtectionPolicyResource::new(slot(&server))
        .read(&mut diags, prior, Default::default(), Default::default())
        .await;

    assert!(result.is_none());
    assert!(diags.errors.is_empty());
}

#[tokio::test]
async fn failed_read_keeps_the_prior_state() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data-protect/policies/a:1:9"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"message": "unavailable"})))
        .mount(&server)
        .await;

    let mut prior = planned_policy();
    prior.id = Value::Value("a:1:9".to_owned());
    let mut diags = Diagnostics::default();
    let (state, _) = ProtectionPolicyResource::new(slot(&server))
        .read(&mut diags, prior.clone(), Default::default(), Default::default())
        .await
        .expect("prior state is kept");

    assert_eq!(state, prior);
    assert_eq!(diags.errors.len(), 1);
    assert_eq!(diags.errors[0].summary, "GetProtectionPolicyById failed");
}

#[tokio::test]
async fn destroy_of_a_deleted_policy_succeeds() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/data-protect/policies/a:1:9"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let mut prior = planned_policy();
    prior.id = Value::Value("a:1:9".to_owned());
    let mut diags = Diagnostics::default();
    let result = ProtectionPolicyResource::new(slot(&server))
        .destroy(&mut diags, prior, Default::default(), Default::default())
        .await;

    assert!(result.is_some());
    assert!(diags.errors.is_empty());
}
