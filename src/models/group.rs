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

use serde::Deserialize;

use super::policy::TimeOfDay;
use super::run::ProtectionGroupRun;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtectionGroupsResponse {
    pub protection_groups: Option<Vec<ProtectionGroup>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtectionGroup {
    pub id: Option<String>,
    pub name: Option<String>,
    pub cluster_id: Option<String>,
    pub region_id: Option<String>,
    pub policy_id: Option<String>,
    pub priority: Option<String>,
    pub storage_domain_id: Option<i64>,
    pub description: Option<String>,
    pub start_time: Option<TimeOfDay>,
    pub end_time_usecs: Option<i64>,
    pub last_modified_timestamp_usecs: Option<i64>,
    pub alert_policy: Option<AlertingPolicy>,
    pub sla: Option<Vec<SlaRule>>,
    pub qos_policy: Option<String>,
    pub abort_in_blackouts: Option<bool>,
    pub pause_in_blackouts: Option<bool>,
    pub is_active: Option<bool>,
    pub is_deleted: Option<bool>,
    pub is_paused: Option<bool>,
    pub environment: Option<String>,
    pub last_run: Option<ProtectionGroupRun>,
    pub permissions: Option<Vec<Tenant>>,
    pub is_protect_once: Option<bool>,
    pub missing_entities: Option<Vec<MissingEntity>>,
    pub invalid_entities: Option<Vec<MissingEntity>>,
    pub num_protected_objects: Option<i64>,
    pub advanced_configs: Option<Vec<KeyValuePair>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertingPolicy {
    pub backup_run_status: Option<Vec<String>>,
    pub alert_targets: Option<Vec<AlertTarget>>,
    pub raise_object_level_failure_alert: Option<bool>,
    pub raise_object_level_failure_alert_after_last_attempt: Option<bool>,
    pub raise_object_level_failure_alert_after_each_attempt: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertTarget {
    pub email_address: Option<String>,
    pub language: Option<String>,
    pub recipient_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlaRule {
    pub backup_run_type: Option<String>,
    pub sla_minutes: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Entity referenced by a group that is missing or invalid on the cluster
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingEntity {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub parent_source_id: Option<i64>,
    pub parent_source_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValuePair {
    pub key: Option<String>,
    pub value: Option<String>,
}
