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

//! Protection group runs and their per-object and per-target results

use serde::Deserialize;

use super::group::Tenant;
use super::policy::Tiers;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtectionGroupRunsResponse {
    pub runs: Option<Vec<ProtectionGroupRun>>,
    pub total_runs: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtectionGroupRun {
    pub id: Option<String>,
    pub protection_group_instance_id: Option<i64>,
    pub protection_group_id: Option<String>,
    pub is_replication_run: Option<bool>,
    pub origin_cluster_identifier: Option<ClusterIdentifier>,
    pub origin_protection_group_id: Option<String>,
    pub protection_group_name: Option<String>,
    pub is_local_snapshots_deleted: Option<bool>,
    pub objects: Option<Vec<ObjectRunResult>>,
    pub local_backup_info: Option<BackupRunSummary>,
    pub original_backup_info: Option<BackupRunSummary>,
    pub replication_info: Option<ReplicationRun>,
    pub archival_info: Option<ArchivalRun>,
    pub cloud_spin_info: Option<CloudSpinRun>,
    pub on_legal_hold: Option<bool>,
    pub permissions: Option<Vec<Tenant>>,
    pub is_cloud_archival_direct: Option<bool>,
    pub has_local_snapshot: Option<bool>,
    pub environment: Option<String>,
    pub externally_triggered_backup_tag: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterIdentifier {
    pub cluster_id: Option<i64>,
    pub cluster_incarnation_id: Option<i64>,
    pub cluster_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRunResult {
    pub object: Option<ObjectSummary>,
    pub local_snapshot_info: Option<BackupRun>,
    pub original_backup_info: Option<BackupRun>,
    pub replication_info: Option<ReplicationRun>,
    pub archival_info: Option<ArchivalRun>,
    pub cloud_spin_info: Option<CloudSpinRun>,
    pub on_legal_hold: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSummary {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub source_id: Option<i64>,
    pub source_name: Option<String>,
    pub environment: Option<String>,
    pub object_hash: Option<String>,
    pub object_type: Option<String>,
    pub logical_size_bytes: Option<i64>,
    pub uuid: Option<String>,
    pub global_id: Option<String>,
    pub protection_type: Option<String>,
    pub os_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupRun {
    pub snapshot_info: Option<SnapshotInfo>,
    pub failed_attempts: Option<Vec<BackupAttempt>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotInfo {
    pub snapshot_id: Option<String>,
    pub status: Option<String>,
    pub status_message: Option<String>,
    pub start_time_usecs: Option<i64>,
    pub end_time_usecs: Option<i64>,
    pub admitted_time_usecs: Option<i64>,
    pub permit_grant_time_usecs: Option<i64>,
    pub queue_duration_usecs: Option<i64>,
    pub snapshot_creation_time_usecs: Option<i64>,
    pub stats: Option<BackupDataStats>,
    pub progress_task_id: Option<String>,
    pub indexing_task_id: Option<String>,
    pub stats_task_id: Option<String>,
    pub warnings: Option<Vec<String>>,
    pub is_manually_deleted: Option<bool>,
    pub expiry_time_usecs: Option<i64>,
    pub total_file_count: Option<i64>,
    pub backup_file_count: Option<i64>,
    pub data_lock_constraints: Option<DataLockConstraints>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupAttempt {
    pub start_time_usecs: Option<i64>,
    pub end_time_usecs: Option<i64>,
    pub admitted_time_usecs: Option<i64>,
    pub permit_grant_time_usecs: Option<i64>,
    pub queue_duration_usecs: Option<i64>,
    pub snapshot_creation_time_usecs: Option<i64>,
    pub status: Option<String>,
    pub stats: Option<BackupDataStats>,
    pub progress_task_id: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDataStats {
    pub logical_size_bytes: Option<i64>,
    pub bytes_written: Option<i64>,
    pub bytes_read: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataLockConstraints {
    pub mode: Option<String>,
    pub expiry_time_usecs: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationRun {
    pub replication_target_results: Option<Vec<ReplicationTargetResult>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationTargetResult {
    pub cluster_id: Option<i64>,
    pub cluster_incarnation_id: Option<i64>,
    pub cluster_name: Option<String>,
    pub start_time_usecs: Option<i64>,
    pub end_time_usecs: Option<i64>,
    pub queued_time_usecs: Option<i64>,
    pub status: Option<String>,
    pub message: Option<String>,
    pub percentage_completed: Option<i64>,
    pub stats: Option<ReplicationDataStats>,
    pub is_manually_deleted: Option<bool>,
    pub expiry_time_usecs: Option<i64>,
    pub replication_task_id: Option<String>,
    pub entries_changed: Option<i64>,
    pub is_in_bound: Option<bool>,
    pub data_lock_constraints: Option<DataLockConstraints>,
    pub on_legal_hold: Option<bool>,
    pub multi_object_replication: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationDataStats {
    pub logical_size_bytes: Option<i64>,
    pub logical_bytes_transferred: Option<i64>,
    pub physical_bytes_transferred: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivalRun {
    pub archival_target_results: Option<Vec<ArchivalTargetResult>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivalTargetResult {
    pub target_id: Option<i64>,
    pub archival_task_id: Option<String>,
    pub target_name: Option<String>,
    pub target_type: Option<String>,
    pub usage_type: Option<String>,
    pub ownership_context: Option<String>,
    pub tier_settings: Option<ArchivalTargetTierInfo>,
    pub run_type: Option<String>,
    pub is_sla_violated: Option<bool>,
    pub snapshot_id: Option<String>,
    pub start_time_usecs: Option<i64>,
    pub end_time_usecs: Option<i64>,
    pub queued_time_usecs: Option<i64>,
    pub is_incremental: Option<bool>,
    pub is_forever_incremental: Option<bool>,
    pub is_cad_archive: Option<bool>,
    pub status: Option<String>,
    pub message: Option<String>,
    pub progress_task_id: Option<String>,
    pub stats_task_id: Option<String>,
    pub indexing_task_id: Option<String>,
    pub successful_objects_count: Option<i64>,
    pub failed_objects_count: Option<i64>,
    pub cancelled_objects_count: Option<i64>,
    pub successful_app_objects_count: Option<i64>,
    pub failed_app_objects_count: Option<i64>,
    pub cancelled_app_objects_count: Option<i64>,
    pub stats: Option<ArchivalDataStats>,
    pub is_manually_deleted: Option<bool>,
    pub expiry_time_usecs: Option<i64>,
    pub data_lock_constraints: Option<DataLockConstraints>,
    pub on_legal_hold: Option<bool>,
    pub worm_properties: Option<WormProperties>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivalTargetTierInfo {
    pub cloud_platform: Option<String>,
    pub aws_tiering: Option<Tiers>,
    pub azure_tiering: Option<Tiers>,
    pub google_tiering: Option<Tiers>,
    pub oracle_tiering: Option<Tiers>,
    pub current_tier_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivalDataStats {
    pub logical_size_bytes: Option<i64>,
    pub bytes_read: Option<i64>,
    pub logical_bytes_transferred: Option<i64>,
    pub physical_bytes_transferred: Option<i64>,
    pub avg_logical_transfer_rate_bps: Option<i64>,
    pub file_walk_done: Option<bool>,
    pub total_file_count: Option<i64>,
    pub backup_file_count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WormProperties {
    pub is_archive_worm_compliant: Option<bool>,
    pub worm_non_compliance_reason: Option<String>,
    pub worm_expiry_time_usecs: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudSpinRun {
    pub cloud_spin_target_results: Option<Vec<CloudSpinTargetResult>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudSpinTargetResult {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub start_time_usecs: Option<i64>,
    pub end_time_usecs: Option<i64>,
    pub status: Option<String>,
    pub message: Option<String>,
    pub stats: Option<CloudSpinDataStats>,
    pub is_manually_deleted: Option<bool>,
    pub expiry_time_usecs: Option<i64>,
    pub cloudspin_task_id: Option<String>,
    pub progress_task_id: Option<String>,
    pub data_lock_constraints: Option<DataLockConstraints>,
    pub on_legal_hold: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudSpinDataStats {
    pub physical_bytes_transferred: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupRunSummary {
    pub run_type: Option<String>,
    pub is_sla_violated: Option<bool>,
    pub start_time_usecs: Option<i64>,
    pub end_time_usecs: Option<i64>,
    pub status: Option<String>,
    pub messages: Option<Vec<String>>,
    pub successful_objects_count: Option<i64>,
    pub skipped_objects_count: Option<i64>,
    pub failed_objects_count: Option<i64>,
    pub cancelled_objects_count: Option<i64>,
    pub successful_app_objects_count: Option<i64>,
    pub failed_app_objects_count: Option<i64>,
    pub cancelled_app_objects_count: Option<i64>,
    pub local_snapshot_stats: Option<BackupDataStats>,
    pub indexing_task_id: Option<String>,
    pub progress_task_id: Option<String>,
    pub stats_task_id: Option<String>,
    pub data_lock: Option<String>,
    pub local_task_id: Option<String>,
    pub data_lock_constraints: Option<DataLockConstraints>,
}
