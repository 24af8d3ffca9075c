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

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tf_provider::map;
use tf_provider::schema::Attribute;
use tf_provider::value::{Value, ValueBool, ValueList, ValueNumber};

use crate::models;
use crate::policy::state::TimeOfDay;
use crate::schema::{boolean, number, object, objects, string, strings, Usage, WithAttributes};
use crate::utils::{flatten, flatten_list, flatten_strings};

use super::run::ProtectionGroupRun;

/// Protection group as exposed by the data sources
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectionGroup {
    pub id: Value<String>,
    pub name: Value<String>,
    pub cluster_id: Value<String>,
    pub region_id: Value<String>,
    pub policy_id: Value<String>,
    pub priority: Value<String>,
    pub storage_domain_id: ValueNumber,
    pub description: Value<String>,
    pub start_time: Value<TimeOfDay>,
    pub end_time_usecs: ValueNumber,
    pub last_modified_timestamp_usecs: ValueNumber,
    pub alert_policy: Value<AlertingPolicy>,
    pub sla: ValueList<SlaRule>,
    pub qos_policy: Value<String>,
    pub abort_in_blackouts: ValueBool,
    pub pause_in_blackouts: ValueBool,
    pub is_active: ValueBool,
    pub is_deleted: ValueBool,
    pub is_paused: ValueBool,
    pub environment: Value<String>,
    pub last_run: Value<ProtectionGroupRun>,
    pub permissions: ValueList<Tenant>,
    pub is_protect_once: ValueBool,
    pub missing_entities: ValueList<MissingEntity>,
    pub invalid_entities: ValueList<MissingEntity>,
    pub num_protected_objects: ValueNumber,
    pub advanced_configs: ValueList<KeyValuePair>,
}

impl ProtectionGroup {
    /// Attributes of a group, without `id` which the single data source owns
    pub(crate) fn fields(usage: Usage) -> HashMap<String, Attribute> {
        let mut attributes = Self::attributes(usage);
        attributes.remove("id");
        attributes
    }
}

impl WithAttributes for ProtectionGroup {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        let c = Usage::computed();
        map! {
            "id" => string("Specifies the ID of the Protection Group.", c.clone()),
            "name" => string("Specifies the name of the Protection Group.", c.clone()),
            "cluster_id" => string("Specifies the cluster ID.", c.clone()),
            "region_id" => string("Specifies the region ID.", c.clone()),
            "policy_id" => string(
                "Specifies the unique id of the Protection Policy associated with the Protection Group.",
                c.clone(),
            ),
            "priority" => string("Specifies the priority of the Protection Group.", c.clone()),
            "storage_domain_id" => number("Specifies the Storage Domain (View Box) ID.", c.clone()),
            "description" => string("Specifies a description of the Protection Group.", c.clone()),
            "start_time" => object::<TimeOfDay>(
                usage,
                "Specifies the time of day to start the backup.",
                c.clone(),
            ),
            "end_time_usecs" => number(
                "Specifies the end time in micro seconds for this Protection Group.",
                c.clone(),
            ),
            "last_modified_timestamp_usecs" => number(
                "Specifies the last time this protection group was updated.",
                c.clone(),
            ),
            "alert_policy" => object::<AlertingPolicy>(
                usage,
                "Specifies a policy for alerting users of the status of a Protection Group.",
                c.clone(),
            ),
            "sla" => objects::<SlaRule>(
                usage,
                "Specifies the SLA parameters for this Protection Group.",
                c.clone(),
            ),
            "qos_policy" => string(
                "Specifies whether the Protection Group will be written to HDD or SSD.",
                c.clone(),
            ),
            "abort_in_blackouts" => boolean(
                "Specifies whether currently executing jobs should abort if a blackout period starts.",
                c.clone(),
            ),
            "pause_in_blackouts" => boolean(
                "Specifies whether currently executing jobs should be paused if a blackout period starts.",
                c.clone(),
            ),
            "is_active" => boolean(
                "Specifies if the Protection Group is active or not.",
                c.clone(),
            ),
            "is_deleted" => boolean(
                "Specifies if the Protection Group has been deleted.",
                c.clone(),
            ),
            "is_paused" => boolean(
                "Specifies if the Protection Group is paused.",
                c.clone(),
            ),
            "environment" => string(
                "Specifies the environment of the Protection Group.",
                c.clone(),
            ),
            "last_run" => object::<ProtectionGroupRun>(
                usage,
                "Specifies the last run of the Protection Group.",
                c.clone(),
            ),
            "permissions" => objects::<Tenant>(
                usage,
                "Specifies the list of tenants that have permissions for this protection group.",
                c.clone(),
            ),
            "is_protect_once" => boolean(
                "Specifies if the protection group is of type 'Protect Once'.",
                c.clone(),
            ),
            "missing_entities" => objects::<MissingEntity>(
                usage,
                "Specifies the Information about missing entities.",
                c.clone(),
            ),
            "invalid_entities" => objects::<MissingEntity>(
                usage,
                "Specifies the Information about invalid entities.",
                c.clone(),
            ),
            "num_protected_objects" => number(
                "Specifies the number of protected objects of the Protection Group.",
                c.clone(),
            ),
            "advanced_configs" => objects::<KeyValuePair>(
                usage,
                "Specifies the advanced configuration for a protection job.",
                c,
            ),
        }
    }
}

impl From<&models::ProtectionGroup> for ProtectionGroup {
    fn from(model: &models::ProtectionGroup) -> Self {
        Self {
            id: model.id.clone().into(),
            name: model.name.clone().into(),
            cluster_id: model.cluster_id.clone().into(),
            region_id: model.region_id.clone().into(),
            policy_id: model.policy_id.clone().into(),
            priority: model.priority.clone().into(),
            storage_domain_id: model.storage_domain_id.into(),
            description: model.description.clone().into(),
            start_time: flatten(&model.start_time),
            end_time_usecs: model.end_time_usecs.into(),
            last_modified_timestamp_usecs: model.last_modified_timestamp_usecs.into(),
            alert_policy: flatten(&model.alert_policy),
            sla: flatten_list(&model.sla),
            qos_policy: model.qos_policy.clone().into(),
            abort_in_blackouts: model.abort_in_blackouts.into(),
            pause_in_blackouts: model.pause_in_blackouts.into(),
            is_active: model.is_active.into(),
            is_deleted: model.is_deleted.into(),
            is_paused: model.is_paused.into(),
            environment: model.environment.clone().into(),
            last_run: flatten(&model.last_run),
            permissions: flatten_list(&model.permissions),
            is_protect_once: model.is_protect_once.into(),
            missing_entities: flatten_list(&model.missing_entities),
            invalid_entities: flatten_list(&model.invalid_entities),
            num_protected_objects: model.num_protected_objects.into(),
            advanced_configs: flatten_list(&model.advanced_configs),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertingPolicy {
    pub backup_run_status: ValueList<Value<String>>,
    pub alert_targets: ValueList<AlertTarget>,
    pub raise_object_level_failure_alert: ValueBool,
    pub raise_object_level_failure_alert_after_last_attempt: ValueBool,
    pub raise_object_level_failure_alert_after_each_attempt: ValueBool,
}

impl WithAttributes for AlertingPolicy {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "backup_run_status" => strings(
                "Specifies the run status for which the user would like to receive alerts.",
                Usage::computed(),
            ),
            "alert_targets" => objects::<AlertTarget>(
                usage,
                "Specifies a list of targets to receive the alerts.",
                Usage::computed(),
            ),
            "raise_object_level_failure_alert" => boolean(
                "Specifies whether object level alerts are raised for backup failures after the backup run.",
                Usage::computed(),
            ),
            "raise_object_level_failure_alert_after_last_attempt" => boolean(
                "Specifies whether object level alerts are raised for backup failures after last backup attempt.",
                Usage::computed(),
            ),
            "raise_object_level_failure_alert_after_each_attempt" => boolean(
                "Specifies whether object level alerts are raised for backup failures after each backup attempt.",
                Usage::computed(),
            ),
        }
    }
}

impl From<&models::AlertingPolicy> for AlertingPolicy {
    fn from(model: &models::AlertingPolicy) -> Self {
        Self {
            backup_run_status: flatten_strings(&model.backup_run_status),
            alert_targets: flatten_list(&model.alert_targets),
            raise_object_level_failure_alert: model.raise_object_level_failure_alert.into(),
            raise_object_level_failure_alert_after_last_attempt: model
                .raise_object_level_failure_alert_after_last_attempt
                .into(),
            raise_object_level_failure_alert_after_each_attempt: model
                .raise_object_level_failure_alert_after_each_attempt
                .into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertTarget {
    pub email_address: Value<String>,
    pub language: Value<String>,
    pub recipient_type: Value<String>,
}

impl WithAttributes for AlertTarget {
    fn attributes(_usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "email_address" => string("Specifies an email address to receive an alert.", Usage::computed()),
            "language" => string("Specifies the language of the delivery target.", Usage::computed()),
            "recipient_type" => string("Specifies the recipient type of email recipient.", Usage::computed()),
        }
    }
}

impl From<&models::AlertTarget> for AlertTarget {
    fn from(model: &models::AlertTarget) -> Self {
        Self {
            email_address: model.email_address.clone().into(),
            language: model.language.clone().into(),
            recipient_type: model.recipient_type.clone().into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlaRule {
    pub backup_run_type: Value<String>,
    pub sla_minutes: ValueNumber,
}

impl WithAttributes for SlaRule {
    fn attributes(_usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "backup_run_type" => string("Specifies the type of run this rule should apply to.", Usage::computed()),
            "sla_minutes" => number(
                "Specifies the number of minutes allotted to a run of the specified type before SLA is considered violated.",
                Usage::computed(),
            ),
        }
    }
}

impl From<&models::SlaRule> for SlaRule {
    fn from(model: &models::SlaRule) -> Self {
        Self {
            backup_run_type: model.backup_run_type.clone().into(),
            sla_minutes: model.sla_minutes.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: Value<String>,
    pub name: Value<String>,
}

impl WithAttributes for Tenant {
    fn attributes(_usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "id" => string("The tenant id.", Usage::computed()),
            "name" => string("Name of the tenant.", Usage::computed()),
        }
    }
}

impl From<&models::Tenant> for Tenant {
    fn from(model: &models::Tenant) -> Self {
        Self {
            id: model.id.clone().into(),
            name: model.name.clone().into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingEntity {
    pub id: ValueNumber,
    pub name: Value<String>,
    pub parent_source_id: ValueNumber,
    pub parent_source_name: Value<String>,
}

impl WithAttributes for MissingEntity {
    fn attributes(_usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "id" => number("Specifies the ID of the object.", Usage::computed()),
            "name" => string("Specifies the name of the object.", Usage::computed()),
            "parent_source_id" => number(
                "Specifies the id of the parent source of the object.",
                Usage::computed(),
            ),
            "parent_source_name" => string(
                "Specifies the name of the parent source of the object.",
                Usage::computed(),
            ),
        }
    }
}

impl From<&models::MissingEntity> for MissingEntity {
    fn from(model: &models::MissingEntity) -> Self {
        Self {
            id: model.id.into(),
            name: model.name.clone().into(),
            parent_source_id: model.parent_source_id.into(),
            parent_source_name: model.parent_source_name.clone().into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValuePair {
    pub key: Value<String>,
    pub value: Value<String>,
}

impl WithAttributes for KeyValuePair {
    fn attributes(_usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "key" => string("Key name.", Usage::computed()),
            "value" => string("Value.", Usage::computed()),
        }
    }
}

impl From<&models::KeyValuePair> for KeyValuePair {
    fn from(model: &models::KeyValuePair) -> Self {
        Self {
            key: model.key.clone().into(),
            value: model.value.clone().into(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use serde_json::json;

    use super::*;
    use crate::group::run::tests::full_run;
    use crate::schema::assert_matches_attributes;

    pub(crate) fn full_group() -> models::ProtectionGroup {
        let mut group: models::ProtectionGroup = serde_json::from_value(json!({
            "id": "4:1700000000:2",
            "name": "vms",
            "clusterId": "4",
            "regionId": "us-east",
            "policyId": "4:1700000000:12",
            "priority": "kMedium",
            "storageDomainId": 5,
            "startTime": {"hour": 22, "minute": 30, "timeZone": "America/New_York"},
            "alertPolicy": {
                "backupRunStatus": ["kFailure"],
                "alertTargets": [{"emailAddress": "ops@example.com", "recipientType": "kTo"}],
                "raiseObjectLevelFailureAlert": false
            },
            "sla": [{"backupRunType": "kIncremental", "slaMinutes": 60}],
            "qosPolicy": "kBackupHDD",
            "isActive": true,
            "isDeleted": false,
            "isPaused": false,
            "environment": "kPhysical",
            "permissions": [{"id": "tenant/", "name": "tenant"}],
            "missingEntities": [{"id": 3, "name": "gone", "parentSourceId": 1}],
            "numProtectedObjects": 12,
            "advancedConfigs": [{"key": "k", "value": "v"}]
        }))
        .unwrap();
        group.last_run = Some(full_run());
        group
    }

    #[test]
    fn group_state_matches_attributes() {
        assert_matches_attributes(
            "protection_group",
            &serde_json::to_value(ProtectionGroup::from(&full_group())).unwrap(),
            &ProtectionGroup::attributes(Usage::Output),
        );
    }

    #[test]
    fn fields_exclude_id() {
        let fields = ProtectionGroup::fields(Usage::Output);
        assert!(!fields.contains_key("id"));
        assert!(fields.contains_key("last_run"));
        assert_eq!(
            fields.len() + 1,
            ProtectionGroup::attributes(Usage::Output).len()
        );
    }

    #[test]
    fn false_is_kept_and_absent_is_null() {
        let state = ProtectionGroup::from(&full_group());
        assert_eq!(state.is_deleted, Value::Value(false));
        assert_eq!(state.abort_in_blackouts, Value::Null);
        assert_eq!(state.invalid_entities, Value::Null);
        assert_eq!(state.storage_domain_id, Value::Value(5));
    }
}
