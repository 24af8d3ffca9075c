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

//! Typed request options for the list operations
//!
//! Every field is optional: only the fields that are set end up in the query string.

/// Query string under construction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query(Vec<(&'static str, String)>);

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scalar parameter if present
    pub fn opt<T: ToString>(mut self, key: &'static str, value: &Option<T>) -> Self {
        if let Some(value) = value {
            self.0.push((key, value.to_string()));
        }
        self
    }

    /// Add a list parameter if present, joined with commas
    pub fn list(mut self, key: &'static str, values: &Option<Vec<String>>) -> Self {
        if let Some(values) = values {
            self.0.push((key, values.join(",")));
        }
        self
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Options of `GetProtectionPolicies`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtectionPoliciesOptions {
    pub request_initiator_type: Option<String>,
    pub ids: Option<Vec<String>>,
    pub policy_names: Option<Vec<String>>,
    pub types: Option<Vec<String>>,
    pub tenant_ids: Option<Vec<String>>,
    pub include_tenants: Option<bool>,
    pub exclude_linked_policies: Option<bool>,
    pub include_replicated_policies: Option<bool>,
    pub include_stats: Option<bool>,
}

impl ProtectionPoliciesOptions {
    pub fn query(&self) -> Query {
        Query::new()
            .opt("requestInitiatorType", &self.request_initiator_type)
            .list("ids", &self.ids)
            .list("policyNames", &self.policy_names)
            .list("types", &self.types)
            .list("tenantIds", &self.tenant_ids)
            .opt("includeTenants", &self.include_tenants)
            .opt("excludeLinkedPolicies", &self.exclude_linked_policies)
            .opt("includeReplicatedPolicies", &self.include_replicated_policies)
            .opt("includeStats", &self.include_stats)
    }
}

/// Options of `GetProtectionGroups`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtectionGroupsOptions {
    pub request_initiator_type: Option<String>,
    pub ids: Option<Vec<String>>,
    pub names: Option<Vec<String>>,
    pub policy_ids: Option<Vec<String>>,
    pub storage_domain_id: Option<i64>,
    pub include_groups_with_datalock_only: Option<bool>,
    pub environments: Option<Vec<String>>,
    pub is_active: Option<bool>,
    pub is_deleted: Option<bool>,
    pub is_paused: Option<bool>,
    pub last_run_local_backup_status: Option<Vec<String>>,
    pub last_run_replication_status: Option<Vec<String>>,
    pub last_run_archival_status: Option<Vec<String>>,
    pub last_run_cloud_spin_status: Option<Vec<String>>,
    pub last_run_any_status: Option<Vec<String>>,
    pub is_last_run_sla_violated: Option<bool>,
    pub tenant_ids: Option<Vec<String>>,
    pub include_tenants: Option<bool>,
    pub include_last_run_info: Option<bool>,
    pub prune_excluded_source_ids: Option<bool>,
    pub prune_source_ids: Option<bool>,
    pub use_cached_data: Option<bool>,
}

impl ProtectionGroupsOptions {
    pub fn query(&self) -> Query {
        Query::new()
            .opt("requestInitiatorType", &self.request_initiator_type)
            .list("ids", &self.ids)
            .list("names", &self.names)
            .list("policyIds", &self.policy_ids)
            .opt("storageDomainId", &self.storage_domain_id)
            .opt(
                "includeGroupsWithDatalockOnly",
                &self.include_groups_with_datalock_only,
            )
            .list("environments", &self.environments)
            .opt("isActive", &self.is_active)
            .opt("isDeleted", &self.is_deleted)
            .opt("isPaused", &self.is_paused)
            .list("lastRunLocalBackupStatus", &self.last_run_local_backup_status)
            .list("lastRunReplicationStatus", &self.last_run_replication_status)
            .list("lastRunArchivalStatus", &self.last_run_archival_status)
            .list("lastRunCloudSpinStatus", &self.last_run_cloud_spin_status)
            .list("lastRunAnyStatus", &self.last_run_any_status)
            .opt("isLastRunSlaViolated", &self.is_last_run_sla_violated)
            .list("tenantIds", &self.tenant_ids)
            .opt("includeTenants", &self.include_tenants)
            .opt("includeLastRunInfo", &self.include_last_run_info)
            .opt("pruneExcludedSourceIds", &self.prune_excluded_source_ids)
            .opt("pruneSourceIds", &self.prune_source_ids)
            .opt("useCachedData", &self.use_cached_data)
    }
}

/// Options of `GetProtectionGroupById`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtectionGroupOptions {
    pub request_initiator_type: Option<String>,
    pub include_last_run_info: Option<bool>,
    pub prune_excluded_source_ids: Option<bool>,
    pub prune_source_ids: Option<bool>,
}

impl ProtectionGroupOptions {
    pub fn query(&self) -> Query {
        Query::new()
            .opt("requestInitiatorType", &self.request_initiator_type)
            .opt("includeLastRunInfo", &self.include_last_run_info)
            .opt("pruneExcludedSourceIds", &self.prune_excluded_source_ids)
            .opt("pruneSourceIds", &self.prune_source_ids)
    }
}

/// Options of `GetProtectionGroupRuns`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtectionGroupRunsOptions {
    pub request_initiator_type: Option<String>,
    pub run_id: Option<String>,
    pub start_time_usecs: Option<i64>,
    pub end_time_usecs: Option<i64>,
    pub tenant_ids: Option<Vec<String>>,
    pub include_tenants: Option<bool>,
    pub run_types: Option<Vec<String>>,
    pub include_object_details: Option<bool>,
    pub local_backup_run_status: Option<Vec<String>>,
    pub replication_run_status: Option<Vec<String>>,
    pub archival_run_status: Option<Vec<String>>,
    pub cloud_spin_run_status: Option<Vec<String>>,
    pub num_runs: Option<i64>,
    pub exclude_non_restorable_runs: Option<bool>,
    pub run_tags: Option<Vec<String>>,
    pub use_cached_data: Option<bool>,
    pub filter_by_end_time: Option<bool>,
    pub snapshot_target_types: Option<Vec<String>>,
    pub only_return_successful_copy_run: Option<bool>,
    pub filter_by_copy_task_end_time: Option<bool>,
}

impl ProtectionGroupRunsOptions {
    pub fn query(&self) -> Query {
        Query::new()
            .opt("requestInitiatorType", &self.request_initiator_type)
            .opt("runId", &self.run_id)
            .opt("startTimeUsecs", &self.start_time_usecs)
            .opt("endTimeUsecs", &self.end_time_usecs)
            .list("tenantIds", &self.tenant_ids)
            .opt("includeTenants", &self.include_tenants)
            .list("runTypes", &self.run_types)
            .opt("includeObjectDetails", &self.include_object_details)
            .list("localBackupRunStatus", &self.local_backup_run_status)
            .list("replicationRunStatus", &self.replication_run_status)
            .list("archivalRunStatus", &self.archival_run_status)
            .list("cloudSpinRunStatus", &self.cloud_spin_run_status)
            .opt("numRuns", &self.num_runs)
            .opt("excludeNonRestorableRuns", &self.exclude_non_restorable_runs)
            .list("runTags", &self.run_tags)
            .opt("useCachedData", &self.use_cached_data)
            .opt("filterByEndTime", &self.filter_by_end_time)
            .list("snapshotTargetTypes", &self.snapshot_target_types)
            .opt(
                "onlyReturnSuccessfulCopyRun",
                &self.only_return_successful_copy_run,
            )
            .opt("filterByCopyTaskEndTime", &self.filter_by_copy_task_end_time)
    }
}

/// Options of `GetProtectionGroupRun`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtectionGroupRunOptions {
    pub request_initiator_type: Option<String>,
    pub tenant_ids: Option<Vec<String>>,
    pub include_tenants: Option<bool>,
    pub include_object_details: Option<bool>,
    pub use_cached_data: Option<bool>,
}

impl ProtectionGroupRunOptions {
    pub fn query(&self) -> Query {
        Query::new()
            .opt("requestInitiatorType", &self.request_initiator_type)
            .list("tenantIds", &self.tenant_ids)
            .opt("includeTenants", &self.include_tenants)
            .opt("includeObjectDetails", &self.include_object_details)
            .opt("useCachedData", &self.use_cached_data)
    }
}

/// Options of `GetReports`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportsOptions {
    pub ids: Option<Vec<String>>,
}

impl ReportsOptions {
    pub fn query(&self) -> Query {
        Query::new().list("ids", &self.ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_options_produce_an_empty_query() {
        assert!(ProtectionPoliciesOptions::default().query().is_empty());
        assert!(ProtectionGroupsOptions::default().query().is_empty());
        assert!(ProtectionGroupRunsOptions::default().query().is_empty());
        assert!(ProtectionGroupRunOptions::default().query().is_empty());
        assert!(ReportsOptions::default().query().is_empty());
    }

    #[test]
    fn explicit_false_is_kept() {
        let options = ProtectionGroupsOptions {
            is_deleted: Some(false),
            storage_domain_id: Some(0),
            ..Default::default()
        };
        assert_eq!(
            options.query().pairs(),
            &[
                ("storageDomainId", "0".to_owned()),
                ("isDeleted", "false".to_owned()),
            ]
        );
    }

    #[test]
    fn lists_are_comma_joined() {
        let options = ProtectionPoliciesOptions {
            ids: Some(vec!["a:1:2".into(), "a:1:3".into()]),
            include_stats: Some(true),
            ..Default::default()
        };
        assert_eq!(
            options.query().pairs(),
            &[
                ("ids", "a:1:2,a:1:3".to_owned()),
                ("includeStats", "true".to_owned()),
            ]
        );
    }
}
