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

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use tf_provider::schema::{Block, Description, Schema};
use tf_provider::value::{Value, ValueBool, ValueEmpty, ValueList, ValueNumber, ValueString};
use tf_provider::{map, AttributePath, DataSource, Diagnostics};

use crate::client::{ClientSlot, ProtectionGroupOptions, ProtectionGroupsOptions};
use crate::policy::state::TimeOfDay;
use crate::schema::{boolean, number, objects, string, strings, Usage};
use crate::utils::{
    connected_client, filter_list, filter_string, filter_value, flatten_list, report_api_error,
    timestamp_id,
};

use super::run::ProtectionGroupRun;
use super::state::{AlertingPolicy, KeyValuePair, MissingEntity, ProtectionGroup, SlaRule, Tenant};

/// List of protection groups, filtered on the server
#[derive(Debug, Clone, Default)]
pub struct ProtectionGroupsDataSource {
    client: ClientSlot,
}

impl ProtectionGroupsDataSource {
    pub fn new(client: ClientSlot) -> Self {
        Self { client }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProtectionGroupsState<'a> {
    pub id: Value<String>,
    #[serde(borrow = "'a")]
    pub request_initiator_type: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub ids: ValueList<ValueString<'a>>,
    #[serde(borrow = "'a")]
    pub names: ValueList<ValueString<'a>>,
    #[serde(borrow = "'a")]
    pub policy_ids: ValueList<ValueString<'a>>,
    pub storage_domain_id: ValueNumber,
    pub include_groups_with_datalock_only: ValueBool,
    #[serde(borrow = "'a")]
    pub environments: ValueList<ValueString<'a>>,
    pub is_active: ValueBool,
    pub is_deleted: ValueBool,
    pub is_paused: ValueBool,
    #[serde(borrow = "'a")]
    pub last_run_local_backup_status: ValueList<ValueString<'a>>,
    #[serde(borrow = "'a")]
    pub last_run_replication_status: ValueList<ValueString<'a>>,
    #[serde(borrow = "'a")]
    pub last_run_archival_status: ValueList<ValueString<'a>>,
    #[serde(borrow = "'a")]
    pub last_run_cloud_spin_status: ValueList<ValueString<'a>>,
    #[serde(borrow = "'a")]
    pub last_run_any_status: ValueList<ValueString<'a>>,
    pub is_last_run_sla_violated: ValueBool,
    #[serde(borrow = "'a")]
    pub tenant_ids: ValueList<ValueString<'a>>,
    pub include_tenants: ValueBool,
    pub include_last_run_info: ValueBool,
    pub prune_excluded_source_ids: ValueBool,
    pub prune_source_ids: ValueBool,
    pub use_cached_data: ValueBool,
    pub protection_groups: ValueList<ProtectionGroup>,
}

impl ProtectionGroupsState<'_> {
    fn options(&self) -> ProtectionGroupsOptions {
        ProtectionGroupsOptions {
            request_initiator_type: filter_string(&self.request_initiator_type),
            ids: filter_list(&self.ids),
            names: filter_list(&self.names),
            policy_ids: filter_list(&self.policy_ids),
            storage_domain_id: filter_value(&self.storage_domain_id),
            include_groups_with_datalock_only: filter_value(
                &self.include_groups_with_datalock_only,
            ),
            environments: filter_list(&self.environments),
            is_active: filter_value(&self.is_active),
            is_deleted: filter_value(&self.is_deleted),
            is_paused: filter_value(&self.is_paused),
            last_run_local_backup_status: filter_list(&self.last_run_local_backup_status),
            last_run_replication_status: filter_list(&self.last_run_replication_status),
            last_run_archival_status: filter_list(&self.last_run_archival_status),
            last_run_cloud_spin_status: filter_list(&self.last_run_cloud_spin_status),
            last_run_any_status: filter_list(&self.last_run_any_status),
            is_last_run_sla_violated: filter_value(&self.is_last_run_sla_violated),
            tenant_ids: filter_list(&self.tenant_ids),
            include_tenants: filter_value(&self.include_tenants),
            include_last_run_info: filter_value(&self.include_last_run_info),
            prune_excluded_source_ids: filter_value(&self.prune_excluded_source_ids),
            prune_source_ids: filter_value(&self.prune_source_ids),
            use_cached_data: filter_value(&self.use_cached_data),
        }
    }
}

#[async_trait]
impl DataSource for ProtectionGroupsDataSource {
    type State<'a> = ProtectionGroupsState<'a>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        let filter = Usage::Input.optional();
        Some(Schema {
            version: 1,
            block: Block {
                version: 1,
                attributes: map! {
                    "id" => string("Timestamp of the read", Usage::computed()),
                    "request_initiator_type" => string(
                        "Specifies the type of request from UI (UIUser, UIAuto or Helios).",
                        filter.clone(),
                    ),
                    "ids" => strings("Filter by a list of protection group ids.", filter.clone()),
                    "names" => strings("Filter by a list of protection group names.", filter.clone()),
                    "policy_ids" => strings("Filter by the policies used by the groups.", filter.clone()),
                    "storage_domain_id" => number("Filter by Storage Domain id.", filter.clone()),
                    "include_groups_with_datalock_only" => boolean(
                        "Only return the groups whose policy has a data lock.",
                        filter.clone(),
                    ),
                    "environments" => strings("Filter by environment types such as kVMware.", filter.clone()),
                    "is_active" => boolean("Filter by active or inactive groups.", filter.clone()),
                    "is_deleted" => boolean("Filter by deleted or not deleted groups.", filter.clone()),
                    "is_paused" => boolean("Filter by paused or non paused groups.", filter.clone()),
                    "last_run_local_backup_status" => strings(
                        "Filter by the local backup status of the last run.",
                        filter.clone(),
                    ),
                    "last_run_replication_status" => strings(
                        "Filter by the replication status of the last run.",
                        filter.clone(),
                    ),
                    "last_run_archival_status" => strings(
                        "Filter by the archival status of the last run.",
                        filter.clone(),
                    ),
                    "last_run_cloud_spin_status" => strings(
                        "Filter by the cloud spin status of the last run.",
                        filter.clone(),
                    ),
                    "last_run_any_status" => strings(
                        "Filter by any of the statuses of the last run.",
                        filter.clone(),
                    ),
                    "is_last_run_sla_violated" => boolean(
                        "Filter by whether the last run violated its SLA.",
                        filter.clone(),
                    ),
                    "tenant_ids" => strings(
                        "Return the groups of these tenants and of the tenants they include.",
                        filter.clone(),
                    ),
                    "include_tenants" => boolean(
                        "Return the groups of all the organizations under the hierarchy of the logged in user.",
                        filter.clone(),
                    ),
                    "include_last_run_info" => boolean(
                        "Return the last run of each group.",
                        filter.clone(),
                    ),
                    "prune_excluded_source_ids" => boolean(
                        "Omit the excluded source ids from the response.",
                        filter.clone(),
                    ),
                    "prune_source_ids" => boolean(
                        "Omit the source ids from the response.",
                        filter.clone(),
                    ),
                    "use_cached_data" => boolean(
                        "Answer from the cached data of the cluster.",
                        filter,
                    ),
                    "protection_groups" => objects::<ProtectionGroup>(
                        Usage::Output,
                        "Specifies the list of Protection Groups which were returned by the request.",
                        Usage::computed(),
                    ),
                },
                description: Description::plain("List of protection groups"),
                ..Default::default()
            },
        })
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        config: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::State<'a>> {
        let client = connected_client(&self.client, diags).await?;

        let response = match client.get_protection_groups(&config.options()).await {
            Ok(response) => response,
            Err(err) => {
                report_api_error(diags, "GetProtectionGroups", &err);
                return None;
            }
        };

        let mut state = config;
        state.id = Value::Value(timestamp_id());
        state.protection_groups = flatten_list(&response.protection_groups);

        Some(state)
    }
}

/// A single protection group, looked up by id
#[derive(Debug, Clone, Default)]
pub struct ProtectionGroupDataSource {
    client: ClientSlot,
}

impl ProtectionGroupDataSource {
    pub fn new(client: ClientSlot) -> Self {
        Self { client }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProtectionGroupState<'a> {
    #[serde(borrow = "'a")]
    pub protection_group_id: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub request_initiator_type: ValueString<'a>,
    pub include_last_run_info: ValueBool,
    pub prune_excluded_source_ids: ValueBool,
    pub prune_source_ids: ValueBool,
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

impl<'a> ProtectionGroupState<'a> {
    fn options(&self) -> ProtectionGroupOptions {
        ProtectionGroupOptions {
            request_initiator_type: filter_string(&self.request_initiator_type),
            include_last_run_info: filter_value(&self.include_last_run_info),
            prune_excluded_source_ids: filter_value(&self.prune_excluded_source_ids),
            prune_source_ids: filter_value(&self.prune_source_ids),
        }
    }

    /// Fill the state with a group, its id being the requested one
    fn with_group(self, group: ProtectionGroup) -> Self {
        Self {
            id: Value::Value(self.protection_group_id.as_str().to_owned()),
            protection_group_id: self.protection_group_id,
            request_initiator_type: self.request_initiator_type,
            include_last_run_info: self.include_last_run_info,
            prune_excluded_source_ids: self.prune_excluded_source_ids,
            prune_source_ids: self.prune_source_ids,
            name: group.name,
            cluster_id: group.cluster_id,
            region_id: group.region_id,
            policy_id: group.policy_id,
            priority: group.priority,
            storage_domain_id: group.storage_domain_id,
            description: group.description,
            start_time: group.start_time,
            end_time_usecs: group.end_time_usecs,
            last_modified_timestamp_usecs: group.last_modified_timestamp_usecs,
            alert_policy: group.alert_policy,
            sla: group.sla,
            qos_policy: group.qos_policy,
            abort_in_blackouts: group.abort_in_blackouts,
            pause_in_blackouts: group.pause_in_blackouts,
            is_active: group.is_active,
            is_deleted: group.is_deleted,
            is_paused: group.is_paused,
            environment: group.environment,
            last_run: group.last_run,
            permissions: group.permissions,
            is_protect_once: group.is_protect_once,
            missing_entities: group.missing_entities,
            invalid_entities: group.invalid_entities,
            num_protected_objects: group.num_protected_objects,
            advanced_configs: group.advanced_configs,
        }
    }
}

#[async_trait]
impl DataSource for ProtectionGroupDataSource {
    type State<'a> = ProtectionGroupState<'a>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        let filter = Usage::Input.optional();
        let mut attributes = ProtectionGroup::fields(Usage::Output);
        attributes.extend([
            (
                "id".to_owned(),
                string("Specifies the ID of the Protection Group.", Usage::computed()),
            ),
            (
                "protection_group_id".to_owned(),
                string(
                    "Specifies a unique id of the Protection Group.",
                    Usage::Input.required(),
                ),
            ),
            (
                "request_initiator_type".to_owned(),
                string(
                    "Specifies the type of request from UI (UIUser, UIAuto or Helios).",
                    filter.clone(),
                ),
            ),
            (
                "include_last_run_info".to_owned(),
                boolean("Return the last run of the group.", filter.clone()),
            ),
            (
                "prune_excluded_source_ids".to_owned(),
                boolean("Omit the excluded source ids from the response.", filter.clone()),
            ),
            (
                "prune_source_ids".to_owned(),
                boolean("Omit the source ids from the response.", filter),
            ),
        ]);
        Some(Schema {
            version: 1,
            block: Block {
                version: 1,
                attributes,
                description: Description::plain("Protection group"),
                ..Default::default()
            },
        })
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        match &config.protection_group_id {
            Value::Value(id) => {
                if id.is_empty() {
                    diags.error_short(
                        "`protection_group_id` should not be empty",
                        AttributePath::new("protection_group_id"),
                    );
                }
            }
            Value::Null => {
                diags.error_short(
                    "`protection_group_id` should not be null",
                    AttributePath::new("protection_group_id"),
                );
            }
            Value::Unknown => (),
        }

        if diags.errors.len() == 0 {
            Some(())
        } else {
            None
        }
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        config: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::State<'a>> {
        let client = connected_client(&self.client, diags).await?;

        let group = match client
            .get_protection_group_by_id(config.protection_group_id.as_str(), &config.options())
            .await
        {
            Ok(group) => group,
            Err(err) => {
                report_api_error(diags, "GetProtectionGroupById", &err);
                return None;
            }
        };

        Some(config.with_group(ProtectionGroup::from(&group)))
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;
    use crate::group::state::tests::full_group;
    use crate::schema::assert_matches_attributes;

    #[test]
    fn filters_become_options() {
        let state = ProtectionGroupsState {
            names: Value::Value(vec![Value::Value(Cow::Borrowed("vms"))]),
            environments: Value::Value(vec![]),
            storage_domain_id: Value::Value(5),
            is_paused: Value::Value(false),
            include_tenants: Value::Unknown,
            ..Default::default()
        };
        assert_eq!(
            state.options(),
            ProtectionGroupsOptions {
                names: Some(vec!["vms".to_owned()]),
                storage_domain_id: Some(5),
                is_paused: Some(false),
                ..Default::default()
            }
        );
    }

    #[test]
    fn list_state_matches_schema() {
        let state = ProtectionGroupsState {
            id: Value::Value(timestamp_id()),
            protection_groups: flatten_list(&Some(vec![full_group()])),
            ..Default::default()
        };
        let schema = ProtectionGroupsDataSource::default()
            .schema(&mut Diagnostics::default())
            .unwrap();
        assert_matches_attributes(
            "protection_groups",
            &serde_json::to_value(&state).unwrap(),
            &schema.block.attributes,
        );
    }

    #[test]
    fn single_state_matches_schema() {
        let state = ProtectionGroupState {
            protection_group_id: Value::Value(Cow::Borrowed("4:1700000000:2")),
            include_last_run_info: Value::Value(true),
            ..Default::default()
        };
        assert_eq!(
            state.options(),
            ProtectionGroupOptions {
                include_last_run_info: Some(true),
                ..Default::default()
            }
        );

        let state = state.with_group(ProtectionGroup::from(&full_group()));
        assert_eq!(state.id, Value::Value("4:1700000000:2".to_owned()));
        assert_eq!(state.name, Value::Value("vms".to_owned()));
        let schema = ProtectionGroupDataSource::default()
            .schema(&mut Diagnostics::default())
            .unwrap();
        assert_matches_attributes(
            "protection_group",
            &serde_json::to_value(&state).unwrap(),
            &schema.block.attributes,
        );
    }

    #[tokio::test]
    async fn null_group_id_is_rejected() {
        let mut diags = Diagnostics::default();
        assert!(ProtectionGroupDataSource::default()
            .validate(&mut diags, ProtectionGroupState::default())
            .await
            .is_none());
        assert_eq!(diags.errors.len(), 1);
    }
}
