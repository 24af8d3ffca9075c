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

use crate::client::{ClientSlot, ProtectionGroupRunOptions, ProtectionGroupRunsOptions};
use crate::schema::{boolean, number, objects, string, strings, Usage, WithAttributes};
use crate::utils::{
    connected_client, filter_list, filter_string, filter_value, flatten_list, report_api_error,
    timestamp_id,
};

use super::run::{
    ArchivalRun, BackupRunSummary, CloudSpinRun, ClusterIdentifier, ObjectRunResult,
    ProtectionGroupRun, ReplicationRun,
};
use super::state::Tenant;

/// Runs of a protection group
#[derive(Debug, Clone, Default)]
pub struct ProtectionGroupRunsDataSource {
    client: ClientSlot,
}

impl ProtectionGroupRunsDataSource {
    pub fn new(client: ClientSlot) -> Self {
        Self { client }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProtectionGroupRunsState<'a> {
    pub id: Value<String>,
    #[serde(borrow = "'a")]
    pub protection_group_id: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub request_initiator_type: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub run_id: ValueString<'a>,
    pub start_time_usecs: ValueNumber,
    pub end_time_usecs: ValueNumber,
    #[serde(borrow = "'a")]
    pub tenant_ids: ValueList<ValueString<'a>>,
    pub include_tenants: ValueBool,
    #[serde(borrow = "'a")]
    pub run_types: ValueList<ValueString<'a>>,
    pub include_object_details: ValueBool,
    #[serde(borrow = "'a")]
    pub local_backup_run_status: ValueList<ValueString<'a>>,
    #[serde(borrow = "'a")]
    pub replication_run_status: ValueList<ValueString<'a>>,
    #[serde(borrow = "'a")]
    pub archival_run_status: ValueList<ValueString<'a>>,
    #[serde(borrow = "'a")]
    pub cloud_spin_run_status: ValueList<ValueString<'a>>,
    pub num_runs: ValueNumber,
    pub exclude_non_restorable_runs: ValueBool,
    #[serde(borrow = "'a")]
    pub run_tags: ValueList<ValueString<'a>>,
    pub use_cached_data: ValueBool,
    pub filter_by_end_time: ValueBool,
    #[serde(borrow = "'a")]
    pub snapshot_target_types: ValueList<ValueString<'a>>,
    pub only_return_successful_copy_run: ValueBool,
    pub filter_by_copy_task_end_time: ValueBool,
    pub runs: ValueList<ProtectionGroupRun>,
    pub total_runs: ValueNumber,
}

impl ProtectionGroupRunsState<'_> {
    fn options(&self) -> ProtectionGroupRunsOptions {
        ProtectionGroupRunsOptions {
            request_initiator_type: filter_string(&self.request_initiator_type),
            run_id: filter_string(&self.run_id),
            start_time_usecs: filter_value(&self.start_time_usecs),
            end_time_usecs: filter_value(&self.end_time_usecs),
            tenant_ids: filter_list(&self.tenant_ids),
            include_tenants: filter_value(&self.include_tenants),
            run_types: filter_list(&self.run_types),
            include_object_details: filter_value(&self.include_object_details),
            local_backup_run_status: filter_list(&self.local_backup_run_status),
            replication_run_status: filter_list(&self.replication_run_status),
            archival_run_status: filter_list(&self.archival_run_status),
            cloud_spin_run_status: filter_list(&self.cloud_spin_run_status),
            num_runs: filter_value(&self.num_runs),
            exclude_non_restorable_runs: filter_value(&self.exclude_non_restorable_runs),
            run_tags: filter_list(&self.run_tags),
            use_cached_data: filter_value(&self.use_cached_data),
            filter_by_end_time: filter_value(&self.filter_by_end_time),
            snapshot_target_types: filter_list(&self.snapshot_target_types),
            only_return_successful_copy_run: filter_value(&self.only_return_successful_copy_run),
            filter_by_copy_task_end_time: filter_value(&self.filter_by_copy_task_end_time),
        }
    }
}

#[async_trait]
impl DataSource for ProtectionGroupRunsDataSource {
    type State<'a> = ProtectionGroupRunsState<'a>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        let filter = Usage::Input.optional();
        Some(Schema {
            version: 1,
            block: Block {
                version: 1,
                attributes: map! {
                    "id" => string("Timestamp of the read", Usage::computed()),
                    "protection_group_id" => string(
                        "Specifies a unique id of the Protection Group.",
                        Usage::Input.required(),
                    ),
                    "request_initiator_type" => string(
                        "Specifies the type of request from UI (UIUser, UIAuto or Helios).",
                        filter.clone(),
                    ),
                    "run_id" => string("Specifies the protection run id.", filter.clone()),
                    "start_time_usecs" => number(
                        "Start time for time range filter, in Unix epoch (usecs).",
                        filter.clone(),
                    ),
                    "end_time_usecs" => number(
                        "End time for time range filter, in Unix epoch (usecs).",
                        filter.clone(),
                    ),
                    "tenant_ids" => strings(
                        "Return the runs of these tenants and of the tenants they include.",
                        filter.clone(),
                    ),
                    "include_tenants" => boolean(
                        "Return the runs of all the organizations under the hierarchy of the logged in user.",
                        filter.clone(),
                    ),
                    "run_types" => strings("Filter by run type such as kFull or kRegular.", filter.clone()),
                    "include_object_details" => boolean(
                        "Return the details of the objects protected by each run.",
                        filter.clone(),
                    ),
                    "local_backup_run_status" => strings("Filter by the local backup status.", filter.clone()),
                    "replication_run_status" => strings("Filter by the replication status.", filter.clone()),
                    "archival_run_status" => strings("Filter by the archival status.", filter.clone()),
                    "cloud_spin_run_status" => strings("Filter by the cloud spin status.", filter.clone()),
                    "num_runs" => number("Specifies the max number of runs.", filter.clone()),
                    "exclude_non_restorable_runs" => boolean(
                        "Exclude the runs which have no successful object.",
                        filter.clone(),
                    ),
                    "run_tags" => strings("Filter by the tags of the runs.", filter.clone()),
                    "use_cached_data" => boolean(
                        "Answer from the cached data of the cluster.",
                        filter.clone(),
                    ),
                    "filter_by_end_time" => boolean(
                        "Apply the time range filter on the end time of the runs.",
                        filter.clone(),
                    ),
                    "snapshot_target_types" => strings(
                        "Filter by the snapshot target types such as Local or Archival.",
                        filter.clone(),
                    ),
                    "only_return_successful_copy_run" => boolean(
                        "Only return the copy runs which succeeded.",
                        filter.clone(),
                    ),
                    "filter_by_copy_task_end_time" => boolean(
                        "Apply the time range filter on the end time of the copy tasks.",
                        filter,
                    ),
                    "runs" => objects::<ProtectionGroupRun>(
                        Usage::Output,
                        "Specifies the list of Protection Group runs.",
                        Usage::computed(),
                    ),
                    "total_runs" => number(
                        "Specifies the count of total runs exist for the given set of filters.",
                        Usage::computed(),
                    ),
                },
                description: Description::plain("Runs of a protection group"),
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
        if let (Value::Value(start), Value::Value(end)) =
            (config.start_time_usecs, config.end_time_usecs)
        {
            if start > end {
                diags.error_short(
                    "`start_time_usecs` should not be after `end_time_usecs`",
                    AttributePath::new("start_time_usecs"),
                );
            }
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

        let response = match client
            .get_protection_group_runs(config.protection_group_id.as_str(), &config.options())
            .await
        {
            Ok(response) => response,
            Err(err) => {
                report_api_error(diags, "GetProtectionGroupRuns", &err);
                return None;
            }
        };

        let mut state = config;
        state.id = Value::Value(timestamp_id());
        state.runs = flatten_list(&response.runs);
        state.total_runs = response.total_runs.into();

        Some(state)
    }
}

/// A single run of a protection group
#[derive(Debug, Clone, Default)]
pub struct ProtectionGroupRunDataSource {
    client: ClientSlot,
}

impl ProtectionGroupRunDataSource {
    pub fn new(client: ClientSlot) -> Self {
        Self { client }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProtectionGroupRunState<'a> {
    #[serde(borrow = "'a")]
    pub protection_group_run_id: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub run_id: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub request_initiator_type: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub tenant_ids: ValueList<ValueString<'a>>,
    pub include_tenants: ValueBool,
    pub include_object_details: ValueBool,
    pub use_cached_data: ValueBool,
    pub id: Value<String>,
    pub protection_group_instance_id: ValueNumber,
    pub protection_group_id: Value<String>,
    pub is_replication_run: ValueBool,
    pub origin_cluster_identifier: Value<ClusterIdentifier>,
    pub origin_protection_group_id: Value<String>,
    pub protection_group_name: Value<String>,
    pub is_local_snapshots_deleted: ValueBool,
    pub objects: ValueList<ObjectRunResult>,
    pub local_backup_info: Value<BackupRunSummary>,
    pub original_backup_info: Value<BackupRunSummary>,
    pub replication_info: Value<ReplicationRun>,
    pub archival_info: Value<ArchivalRun>,
    pub cloud_spin_info: Value<CloudSpinRun>,
    pub on_legal_hold: ValueBool,
    pub permissions: ValueList<Tenant>,
    pub is_cloud_archival_direct: ValueBool,
    pub has_local_snapshot: ValueBool,
    pub environment: Value<String>,
    pub externally_triggered_backup_tag: Value<String>,
}

impl ProtectionGroupRunState<'_> {
    fn options(&self) -> ProtectionGroupRunOptions {
        ProtectionGroupRunOptions {
            request_initiator_type: filter_string(&self.request_initiator_type),
            tenant_ids: filter_list(&self.tenant_ids),
            include_tenants: filter_value(&self.include_tenants),
            include_object_details: filter_value(&self.include_object_details),
            use_cached_data: filter_value(&self.use_cached_data),
        }
    }

    /// Fill the state with a run, falling back to the requested run id
    fn with_run(self, run: ProtectionGroupRun) -> Self {
        let id = match run.id {
            Value::Value(id) => Value::Value(id),
            _ => Value::Value(self.run_id.as_str().to_owned()),
        };
        Self {
            id,
            protection_group_run_id: self.protection_group_run_id,
            run_id: self.run_id,
            request_initiator_type: self.request_initiator_type,
            tenant_ids: self.tenant_ids,
            include_tenants: self.include_tenants,
            include_object_details: self.include_object_details,
            use_cached_data: self.use_cached_data,
            protection_group_instance_id: run.protection_group_instance_id,
            protection_group_id: run.protection_group_id,
            is_replication_run: run.is_replication_run,
            origin_cluster_identifier: run.origin_cluster_identifier,
            origin_protection_group_id: run.origin_protection_group_id,
            protection_group_name: run.protection_group_name,
            is_local_snapshots_deleted: run.is_local_snapshots_deleted,
            objects: run.objects,
            local_backup_info: run.local_backup_info,
            original_backup_info: run.original_backup_info,
            replication_info: run.replication_info,
            archival_info: run.archival_info,
            cloud_spin_info: run.cloud_spin_info,
            on_legal_hold: run.on_legal_hold,
            permissions: run.permissions,
            is_cloud_archival_direct: run.is_cloud_archival_direct,
            has_local_snapshot: run.has_local_snapshot,
            environment: run.environment,
            externally_triggered_backup_tag: run.externally_triggered_backup_tag,
        }
    }
}

fn validate_id(diags: &mut Diagnostics, name: &'static str, value: &ValueString<'_>) {
    match value {
        Value::Value(id) => {
            if id.is_empty() {
                diags.error_short(format!("`{name}` should not be empty"), AttributePath::new(name));
            }
        }
        Value::Null => {
            diags.error_short(format!("`{name}` should not be null"), AttributePath::new(name));
        }
        Value::Unknown => (),
    }
}

#[async_trait]
impl DataSource for ProtectionGroupRunDataSource {
    type State<'a> = ProtectionGroupRunState<'a>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        let filter = Usage::Input.optional();
        let mut attributes = ProtectionGroupRun::attributes(Usage::Output);
        attributes.extend([
            (
                "protection_group_run_id".to_owned(),
                string(
                    "Specifies a unique id of the Protection Group.",
                    Usage::Input.required(),
                ),
            ),
            (
                "run_id".to_owned(),
                string(
                    "Specifies a unique run id of the Protection Group run.",
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
                "tenant_ids".to_owned(),
                strings(
                    "Return the run of these tenants and of the tenants they include.",
                    filter.clone(),
                ),
            ),
            (
                "include_tenants".to_owned(),
                boolean(
                    "Return the run of all the organizations under the hierarchy of the logged in user.",
                    filter.clone(),
                ),
            ),
            (
                "include_object_details".to_owned(),
                boolean(
                    "Return the details of the objects protected by the run.",
                    filter.clone(),
                ),
            ),
            (
                "use_cached_data".to_owned(),
                boolean("Answer from the cached data of the cluster.", filter),
            ),
        ]);
        Some(Schema {
            version: 1,
            block: Block {
                version: 1,
                attributes,
                description: Description::plain("Run of a protection group"),
                ..Default::default()
            },
        })
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        validate_id(diags, "protection_group_run_id", &config.protection_group_run_id);
        validate_id(diags, "run_id", &config.run_id);

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

        let run = match client
            .get_protection_group_run(
                config.protection_group_run_id.as_str(),
                config.run_id.as_str(),
                &config.options(),
            )
            .await
        {
            Ok(run) => run,
            Err(err) => {
                report_api_error(diags, "GetProtectionGroupRun", &err);
                return None;
            }
        };

        Some(config.with_run(ProtectionGroupRun::from(&run)))
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use tf_provider::schema::AttributeConstraint;

    use super::*;
    use crate::group::run::tests::full_run;
    use crate::schema::assert_matches_attributes;

    #[test]
    fn filters_become_options() {
        let state = ProtectionGroupRunsState {
            protection_group_id: Value::Value(Cow::Borrowed("4:1700000000:2")),
            run_id: Value::Value(Cow::Borrowed("4:1700000000:55")),
            num_runs: Value::Value(10),
            run_types: Value::Value(vec![Value::Value(Cow::Borrowed("kRegular"))]),
            run_tags: Value::Value(vec![]),
            include_object_details: Value::Value(true),
            ..Default::default()
        };
        assert_eq!(
            state.options(),
            ProtectionGroupRunsOptions {
                run_id: Some("4:1700000000:55".to_owned()),
                num_runs: Some(10),
                run_types: Some(vec!["kRegular".to_owned()]),
                include_object_details: Some(true),
                ..Default::default()
            }
        );
    }

    #[test]
    fn state_matches_schema() {
        let state = ProtectionGroupRunsState {
            id: Value::Value(timestamp_id()),
            protection_group_id: Value::Value(Cow::Borrowed("4:1700000000:2")),
            runs: flatten_list(&Some(vec![full_run()])),
            total_runs: Value::Value(1),
            ..Default::default()
        };
        let schema = ProtectionGroupRunsDataSource::default()
            .schema(&mut Diagnostics::default())
            .unwrap();
        assert_eq!(
            schema.block.attributes["protection_group_id"].constraint,
            AttributeConstraint::Required
        );
        assert_matches_attributes(
            "protection_group_runs",
            &serde_json::to_value(&state).unwrap(),
            &schema.block.attributes,
        );
    }

    #[tokio::test]
    async fn inverted_time_range_is_rejected() {
        let mut diags = Diagnostics::default();
        let config = ProtectionGroupRunsState {
            protection_group_id: Value::Value(Cow::Borrowed("4:1700000000:2")),
            start_time_usecs: Value::Value(20),
            end_time_usecs: Value::Value(10),
            ..Default::default()
        };
        assert!(ProtectionGroupRunsDataSource::default()
            .validate(&mut diags, config)
            .await
            .is_none());
        assert_eq!(diags.errors.len(), 1);
    }

    #[test]
    fn run_filters_become_options() {
        let state = ProtectionGroupRunState {
            protection_group_run_id: Value::Value(Cow::Borrowed("4:1700000000:2")),
            run_id: Value::Value(Cow::Borrowed("4:1700000000:55")),
            tenant_ids: Value::Value(vec![]),
            include_object_details: Value::Value(false),
            ..Default::default()
        };
        assert_eq!(
            state.options(),
            ProtectionGroupRunOptions {
                include_object_details: Some(false),
                ..Default::default()
            }
        );
    }

    #[test]
    fn run_state_matches_schema() {
        let config = ProtectionGroupRunState {
            protection_group_run_id: Value::Value(Cow::Borrowed("4:1700000000:2")),
            run_id: Value::Value(Cow::Borrowed("4:1700000000:55")),
            ..Default::default()
        };
        let state = config.with_run(ProtectionGroupRun::from(&full_run()));
        let schema = ProtectionGroupRunDataSource::default()
            .schema(&mut Diagnostics::default())
            .unwrap();
        assert_eq!(
            schema.block.attributes["run_id"].constraint,
            AttributeConstraint::Required
        );
        assert_eq!(
            schema.block.attributes["protection_group_id"].constraint,
            AttributeConstraint::Computed
        );
        assert_matches_attributes(
            "protection_group_run",
            &serde_json::to_value(&state).unwrap(),
            &schema.block.attributes,
        );
    }

    #[test]
    fn run_id_falls_back_to_the_requested_one() {
        let config = ProtectionGroupRunState {
            run_id: Value::Value(Cow::Borrowed("4:1700000000:55")),
            ..Default::default()
        };
        let state = config.with_run(ProtectionGroupRun::default());
        assert_eq!(state.id, Value::Value("4:1700000000:55".to_owned()));
    }

    #[tokio::test]
    async fn run_ids_are_required() {
        let mut diags = Diagnostics::default();
        let config = ProtectionGroupRunState {
            protection_group_run_id: Value::Value(Cow::Borrowed("")),
            ..Default::default()
        };
        assert!(ProtectionGroupRunDataSource::default()
            .validate(&mut diags, config)
            .await
            .is_none());
        assert_eq!(diags.errors.len(), 2);
    }
}
