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

//! Terraform state of a protection group run
//!
//! Runs are only read, so there is no conversion back to the API model.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tf_provider::map;
use tf_provider::schema::Attribute;
use tf_provider::value::{Value, ValueBool, ValueList, ValueNumber};

use crate::models;
use crate::policy::state::Tiers;
use crate::schema::{boolean, number, object, objects, string, strings, Usage, WithAttributes};
use crate::utils::{flatten, flatten_list, flatten_strings};

use super::state::Tenant;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectionGroupRun {
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

impl WithAttributes for ProtectionGroupRun {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        let c = Usage::computed();
        map! {
            "id" => string("Specifies the id of the protection group run.", c.clone()),
            "protection_group_instance_id" => number(
                "Protection group instance id. This field will be removed later.",
                c.clone(),
            ),
            "protection_group_id" => string(
                "ProtectionGroupId to which this run belongs.",
                c.clone(),
            ),
            "is_replication_run" => boolean(
                "Specifies if this protection group run is a replication run.",
                c.clone(),
            ),
            "origin_cluster_identifier" => object::<ClusterIdentifier>(
                usage,
                "Specifies the cluster where the run originated.",
                c.clone(),
            ),
            "origin_protection_group_id" => string(
                "ProtectionGroupId to which this run belongs on the origin cluster.",
                c.clone(),
            ),
            "protection_group_name" => string("Name of the protection group.", c.clone()),
            "is_local_snapshots_deleted" => boolean(
                "Specifies if the snapshots of this run have been deleted by the user.",
                c.clone(),
            ),
            "objects" => objects::<ObjectRunResult>(
                usage,
                "Snapshot, replication, archival results for each object.",
                c.clone(),
            ),
            "local_backup_info" => object::<BackupRunSummary>(
                usage,
                "Specifies summary information about the local snapshot run.",
                c.clone(),
            ),
            "original_backup_info" => object::<BackupRunSummary>(
                usage,
                "Specifies summary information about the original snapshot run.",
                c.clone(),
            ),
            "replication_info" => object::<ReplicationRun>(
                usage,
                "Specifies summary information about the replication run.",
                c.clone(),
            ),
            "archival_info" => object::<ArchivalRun>(
                usage,
                "Specifies summary information about the archival run.",
                c.clone(),
            ),
            "cloud_spin_info" => object::<CloudSpinRun>(
                usage,
                "Specifies summary information about the cloud spin run.",
                c.clone(),
            ),
            "on_legal_hold" => boolean(
                "Specifies if the protection group run is on legal hold.",
                c.clone(),
            ),
            "permissions" => objects::<Tenant>(
                usage,
                "Specifies the tenants which have access to this run.",
                c.clone(),
            ),
            "is_cloud_archival_direct" => boolean(
                "Specifies whether the run is a CAD run.",
                c.clone(),
            ),
            "has_local_snapshot" => boolean(
                "Specifies whether the run has a local snapshot.",
                c.clone(),
            ),
            "environment" => string(
                "Specifies the environment of the protection group.",
                c.clone(),
            ),
            "externally_triggered_backup_tag" => string(
                "The tag of an externally triggered backup job.",
                c,
            ),
        }
    }
}

impl From<&models::ProtectionGroupRun> for ProtectionGroupRun {
    fn from(model: &models::ProtectionGroupRun) -> Self {
        Self {
            id: model.id.clone().into(),
            protection_group_instance_id: model.protection_group_instance_id.into(),
            protection_group_id: model.protection_group_id.clone().into(),
            is_replication_run: model.is_replication_run.into(),
            origin_cluster_identifier: flatten(&model.origin_cluster_identifier),
            origin_protection_group_id: model.origin_protection_group_id.clone().into(),
            protection_group_name: model.protection_group_name.clone().into(),
            is_local_snapshots_deleted: model.is_local_snapshots_deleted.into(),
            objects: flatten_list(&model.objects),
            local_backup_info: flatten(&model.local_backup_info),
            original_backup_info: flatten(&model.original_backup_info),
            replication_info: flatten(&model.replication_info),
            archival_info: flatten(&model.archival_info),
            cloud_spin_info: flatten(&model.cloud_spin_info),
            on_legal_hold: model.on_legal_hold.into(),
            permissions: flatten_list(&model.permissions),
            is_cloud_archival_direct: model.is_cloud_archival_direct.into(),
            has_local_snapshot: model.has_local_snapshot.into(),
            environment: model.environment.clone().into(),
            externally_triggered_backup_tag: model.externally_triggered_backup_tag.clone().into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterIdentifier {
    pub cluster_id: ValueNumber,
    pub cluster_incarnation_id: ValueNumber,
    pub cluster_name: Value<String>,
}

impl WithAttributes for ClusterIdentifier {
    fn attributes(_usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "cluster_id" => number("Specifies the id of the cluster.", Usage::computed()),
            "cluster_incarnation_id" => number(
                "Specifies the incarnation id of the cluster.",
                Usage::computed(),
            ),
            "cluster_name" => string("Specifies the name of the cluster.", Usage::computed()),
        }
    }
}

impl From<&models::ClusterIdentifier> for ClusterIdentifier {
    fn from(model: &models::ClusterIdentifier) -> Self {
        Self {
            cluster_id: model.cluster_id.into(),
            cluster_incarnation_id: model.cluster_incarnation_id.into(),
            cluster_name: model.cluster_name.clone().into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRunResult {
    pub object: Value<ObjectSummary>,
    pub local_snapshot_info: Value<BackupRun>,
    pub original_backup_info: Value<BackupRun>,
    pub replication_info: Value<ReplicationRun>,
    pub archival_info: Value<ArchivalRun>,
    pub cloud_spin_info: Value<CloudSpinRun>,
    pub on_legal_hold: ValueBool,
}

impl WithAttributes for ObjectRunResult {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "object" => object::<ObjectSummary>(
                usage,
                "Specifies the object summary.",
                Usage::computed(),
            ),
            "local_snapshot_info" => object::<BackupRun>(
                usage,
                "Specifies information about the backup task of the object.",
                Usage::computed(),
            ),
            "original_backup_info" => object::<BackupRun>(
                usage,
                "Specifies information about the original backup task of the object.",
                Usage::computed(),
            ),
            "replication_info" => object::<ReplicationRun>(
                usage,
                "Specifies information about the replication of the object.",
                Usage::computed(),
            ),
            "archival_info" => object::<ArchivalRun>(
                usage,
                "Specifies information about the archival of the object.",
                Usage::computed(),
            ),
            "cloud_spin_info" => object::<CloudSpinRun>(
                usage,
                "Specifies information about the cloud spin of the object.",
                Usage::computed(),
            ),
            "on_legal_hold" => boolean(
                "Specifies if the object is on legal hold.",
                Usage::computed(),
            ),
        }
    }
}

impl From<&models::ObjectRunResult> for ObjectRunResult {
    fn from(model: &models::ObjectRunResult) -> Self {
        Self {
            object: flatten(&model.object),
            local_snapshot_info: flatten(&model.local_snapshot_info),
            original_backup_info: flatten(&model.original_backup_info),
            replication_info: flatten(&model.replication_info),
            archival_info: flatten(&model.archival_info),
            cloud_spin_info: flatten(&model.cloud_spin_info),
            on_legal_hold: model.on_legal_hold.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSummary {
    pub id: ValueNumber,
    pub name: Value<String>,
    pub source_id: ValueNumber,
    pub source_name: Value<String>,
    pub environment: Value<String>,
    pub object_hash: Value<String>,
    pub object_type: Value<String>,
    pub logical_size_bytes: ValueNumber,
    pub uuid: Value<String>,
    pub global_id: Value<String>,
    pub protection_type: Value<String>,
    pub os_type: Value<String>,
}

impl WithAttributes for ObjectSummary {
    fn attributes(_usage: Usage) -> HashMap<String, Attribute> {
        let c = Usage::computed();
        map! {
            "id" => number("Specifies object id.", c.clone()),
            "name" => string("Specifies the name of the object.", c.clone()),
            "source_id" => number("Specifies registered source id to which object belongs.", c.clone()),
            "source_name" => string("Specifies registered source name to which object belongs.", c.clone()),
            "environment" => string("Specifies the environment of the object.", c.clone()),
            "object_hash" => string("Specifies the hash identifier of the object.", c.clone()),
            "object_type" => string("Specifies the type of the object.", c.clone()),
            "logical_size_bytes" => number("Specifies the logical size of the object in bytes.", c.clone()),
            "uuid" => string("Specifies the uuid which is a unique identifier of the object.", c.clone()),
            "global_id" => string("Specifies the global id which is a unique identifier of the object.", c.clone()),
            "protection_type" => string("Specifies the protection type of the object if any.", c.clone()),
            "os_type" => string("Specifies the operating system type of the object.", c),
        }
    }
}

impl From<&models::ObjectSummary> for ObjectSummary {
    fn from(model: &models::ObjectSummary) -> Self {
        Self {
            id: model.id.into(),
            name: model.name.clone().into(),
            source_id: model.source_id.into(),
            source_name: model.source_name.clone().into(),
            environment: model.environment.clone().into(),
            object_hash: model.object_hash.clone().into(),
            object_type: model.object_type.clone().into(),
            logical_size_bytes: model.logical_size_bytes.into(),
            uuid: model.uuid.clone().into(),
            global_id: model.global_id.clone().into(),
            protection_type: model.protection_type.clone().into(),
            os_type: model.os_type.clone().into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupRun {
    pub snapshot_info: Value<SnapshotInfo>,
    pub failed_attempts: ValueList<BackupAttempt>,
}

impl WithAttributes for BackupRun {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "snapshot_info" => object::<SnapshotInfo>(
                usage,
                "Snapshot info of the object.",
                Usage::computed(),
            ),
            "failed_attempts" => objects::<BackupAttempt>(
                usage,
                "Failed backup attempts of the object.",
                Usage::computed(),
            ),
        }
    }
}

impl From<&models::BackupRun> for BackupRun {
    fn from(model: &models::BackupRun) -> Self {
        Self {
            snapshot_info: flatten(&model.snapshot_info),
            failed_attempts: flatten_list(&model.failed_attempts),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotInfo {
    pub snapshot_id: Value<String>,
    pub status: Value<String>,
    pub status_message: Value<String>,
    pub start_time_usecs: ValueNumber,
    pub end_time_usecs: ValueNumber,
    pub admitted_time_usecs: ValueNumber,
    pub permit_grant_time_usecs: ValueNumber,
    pub queue_duration_usecs: ValueNumber,
    pub snapshot_creation_time_usecs: ValueNumber,
    pub stats: Value<BackupDataStats>,
    pub progress_task_id: Value<String>,
    pub indexing_task_id: Value<String>,
    pub stats_task_id: Value<String>,
    pub warnings: ValueList<Value<String>>,
    pub is_manually_deleted: ValueBool,
    pub expiry_time_usecs: ValueNumber,
    pub total_file_count: ValueNumber,
    pub backup_file_count: ValueNumber,
    pub data_lock_constraints: Value<DataLockConstraints>,
}

impl WithAttributes for SnapshotInfo {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        let c = Usage::computed();
        map! {
            "snapshot_id" => string("Snapshot id for a successful snapshot.", c.clone()),
            "status" => string("Status of snapshot.", c.clone()),
            "status_message" => string("A message describing the status.", c.clone()),
            "start_time_usecs" => number("Specifies the start time of the attempt in Unix epoch (usecs).", c.clone()),
            "end_time_usecs" => number("Specifies the end time of the attempt in Unix epoch (usecs).", c.clone()),
            "admitted_time_usecs" => number("Specifies the time at which the backup task was admitted.", c.clone()),
            "permit_grant_time_usecs" => number("Specifies the time when the gatekeeper permit is granted.", c.clone()),
            "queue_duration_usecs" => number("Specifies the duration between startTime and when the permit was granted.", c.clone()),
            "snapshot_creation_time_usecs" => number("Specifies the time at which the source snapshot was taken.", c.clone()),
            "stats" => object::<BackupDataStats>(usage, "Specifies statistics about the data.", c.clone()),
            "progress_task_id" => string("Progress monitor task for backup of the object.", c.clone()),
            "indexing_task_id" => string("Progress monitor task for the indexing of documents.", c.clone()),
            "stats_task_id" => string("Stats task for backup of the object.", c.clone()),
            "warnings" => strings("Specifies a list of warnings that occurred during the run.", c.clone()),
            "is_manually_deleted" => boolean("Specifies whether the snapshot is deleted manually.", c.clone()),
            "expiry_time_usecs" => number("Specifies the expiry time of attempt in Unix epoch (usecs).", c.clone()),
            "total_file_count" => number("The total number of files and folders in the snapshot.", c.clone()),
            "backup_file_count" => number("The total number of files and folders backed up.", c.clone()),
            "data_lock_constraints" => object::<DataLockConstraints>(
                usage,
                "Specifies the data lock constraints for the snapshot.",
                c,
            ),
        }
    }
}

impl From<&models::SnapshotInfo> for SnapshotInfo {
    fn from(model: &models::SnapshotInfo) -> Self {
        Self {
            snapshot_id: model.snapshot_id.clone().into(),
            status: model.status.clone().into(),
            status_message: model.status_message.clone().into(),
            start_time_usecs: model.start_time_usecs.into(),
            end_time_usecs: model.end_time_usecs.into(),
            admitted_time_usecs: model.admitted_time_usecs.into(),
            permit_grant_time_usecs: model.permit_grant_time_usecs.into(),
            queue_duration_usecs: model.queue_duration_usecs.into(),
            snapshot_creation_time_usecs: model.snapshot_creation_time_usecs.into(),
            stats: flatten(&model.stats),
            progress_task_id: model.progress_task_id.clone().into(),
            indexing_task_id: model.indexing_task_id.clone().into(),
            stats_task_id: model.stats_task_id.clone().into(),
            warnings: flatten_strings(&model.warnings),
            is_manually_deleted: model.is_manually_deleted.into(),
            expiry_time_usecs: model.expiry_time_usecs.into(),
            total_file_count: model.total_file_count.into(),
            backup_file_count: model.backup_file_count.into(),
            data_lock_constraints: flatten(&model.data_lock_constraints),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupAttempt {
    pub start_time_usecs: ValueNumber,
    pub end_time_usecs: ValueNumber,
    pub admitted_time_usecs: ValueNumber,
    pub permit_grant_time_usecs: ValueNumber,
    pub queue_duration_usecs: ValueNumber,
    pub snapshot_creation_time_usecs: ValueNumber,
    pub status: Value<String>,
    pub stats: Value<BackupDataStats>,
    pub progress_task_id: Value<String>,
    pub message: Value<String>,
}

impl WithAttributes for BackupAttempt {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        let c = Usage::computed();
        map! {
            "start_time_usecs" => number("Specifies the start time of the attempt in Unix epoch (usecs).", c.clone()),
            "end_time_usecs" => number("Specifies the end time of the attempt in Unix epoch (usecs).", c.clone()),
            "admitted_time_usecs" => number("Specifies the time at which the backup task was admitted.", c.clone()),
            "permit_grant_time_usecs" => number("Specifies the time when the gatekeeper permit is granted.", c.clone()),
            "queue_duration_usecs" => number("Specifies the duration between startTime and when the permit was granted.", c.clone()),
            "snapshot_creation_time_usecs" => number("Specifies the time at which the source snapshot was taken.", c.clone()),
            "status" => string("Status of the attempt.", c.clone()),
            "stats" => object::<BackupDataStats>(usage, "Specifies statistics about the data.", c.clone()),
            "progress_task_id" => string("Progress monitor task of the attempt.", c.clone()),
            "message" => string("A message about the error if encountered while performing backup.", c),
        }
    }
}

impl From<&models::BackupAttempt> for BackupAttempt {
    fn from(model: &models::BackupAttempt) -> Self {
        Self {
            start_time_usecs: model.start_time_usecs.into(),
            end_time_usecs: model.end_time_usecs.into(),
            admitted_time_usecs: model.admitted_time_usecs.into(),
            permit_grant_time_usecs: model.permit_grant_time_usecs.into(),
            queue_duration_usecs: model.queue_duration_usecs.into(),
            snapshot_creation_time_usecs: model.snapshot_creation_time_usecs.into(),
            status: model.status.clone().into(),
            stats: flatten(&model.stats),
            progress_task_id: model.progress_task_id.clone().into(),
            message: model.message.clone().into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupDataStats {
    pub logical_size_bytes: ValueNumber,
    pub bytes_written: ValueNumber,
    pub bytes_read: ValueNumber,
}

impl WithAttributes for BackupDataStats {
    fn attributes(_usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "logical_size_bytes" => number(
                "Specifies the total logical size of the object in bytes.",
                Usage::computed(),
            ),
            "bytes_written" => number(
                "Specifies the total size of the data written to the storage domain in bytes.",
                Usage::computed(),
            ),
            "bytes_read" => number(
                "Specifies the total logical bytes read for creating the snapshot.",
                Usage::computed(),
            ),
        }
    }
}

impl From<&models::BackupDataStats> for BackupDataStats {
    fn from(model: &models::BackupDataStats) -> Self {
        Self {
            logical_size_bytes: model.logical_size_bytes.into(),
            bytes_written: model.bytes_written.into(),
            bytes_read: model.bytes_read.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataLockConstraints {
    pub mode: Value<String>,
    pub expiry_time_usecs: ValueNumber,
}

impl WithAttributes for DataLockConstraints {
    fn attributes(_usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "mode" => string(
                "Specifies the type of WORM retention type.",
                Usage::computed(),
            ),
            "expiry_time_usecs" => number(
                "Specifies the expiry time of the attempt in Unix epoch (usecs).",
                Usage::computed(),
            ),
        }
    }
}

impl From<&models::DataLockConstraints> for DataLockConstraints {
    fn from(model: &models::DataLockConstraints) -> Self {
        Self {
            mode: model.mode.clone().into(),
            expiry_time_usecs: model.expiry_time_usecs.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicationRun {
    pub replication_target_results: ValueList<ReplicationTargetResult>,
}

impl WithAttributes for ReplicationRun {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "replication_target_results" => objects::<ReplicationTargetResult>(
                usage,
                "Replication results for each replication target.",
                Usage::computed(),
            ),
        }
    }
}

impl From<&models::ReplicationRun> for ReplicationRun {
    fn from(model: &models::ReplicationRun) -> Self {
        Self {
            replication_target_results: flatten_list(&model.replication_target_results),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicationTargetResult {
    pub cluster_id: ValueNumber,
    pub cluster_incarnation_id: ValueNumber,
    pub cluster_name: Value<String>,
    pub start_time_usecs: ValueNumber,
    pub end_time_usecs: ValueNumber,
    pub queued_time_usecs: ValueNumber,
    pub status: Value<String>,
    pub message: Value<String>,
    pub percentage_completed: ValueNumber,
    pub stats: Value<ReplicationDataStats>,
    pub is_manually_deleted: ValueBool,
    pub expiry_time_usecs: ValueNumber,
    pub replication_task_id: Value<String>,
    pub entries_changed: ValueNumber,
    pub is_in_bound: ValueBool,
    pub data_lock_constraints: Value<DataLockConstraints>,
    pub on_legal_hold: ValueBool,
    pub multi_object_replication: ValueBool,
}

impl WithAttributes for ReplicationTargetResult {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        let c = Usage::computed();
        map! {
            "cluster_id" => number("Specifies the id of the cluster.", c.clone()),
            "cluster_incarnation_id" => number("Specifies the incarnation id of the cluster.", c.clone()),
            "cluster_name" => string("Specifies the name of the cluster.", c.clone()),
            "start_time_usecs" => number("Specifies the start time of replication in Unix epoch (usecs).", c.clone()),
            "end_time_usecs" => number("Specifies the end time of replication in Unix epoch (usecs).", c.clone()),
            "queued_time_usecs" => number("Specifies the time when the replication is queued for schedule.", c.clone()),
            "status" => string("Status of the replication for a target.", c.clone()),
            "message" => string("Message about the replication run.", c.clone()),
            "percentage_completed" => number("Specifies the progress in percentage.", c.clone()),
            "stats" => object::<ReplicationDataStats>(usage, "Specifies statistics about the replication data.", c.clone()),
            "is_manually_deleted" => boolean("Specifies whether the snapshot is deleted manually.", c.clone()),
            "expiry_time_usecs" => number("Specifies the expiry time of the replication in Unix epoch (usecs).", c.clone()),
            "replication_task_id" => string("Task id of the replication run.", c.clone()),
            "entries_changed" => number("Specifies the number of metadata actions completed during the protection run.", c.clone()),
            "is_in_bound" => boolean("Specifies the direction of the replication.", c.clone()),
            "data_lock_constraints" => object::<DataLockConstraints>(
                usage,
                "Specifies the data lock constraints of the replicated snapshot.",
                c.clone(),
            ),
            "on_legal_hold" => boolean("Specifies the legal hold status for a replication target.", c.clone()),
            "multi_object_replication" => boolean(
                "Specifies whether view based replication was used.",
                c,
            ),
        }
    }
}

impl From<&models::ReplicationTargetResult> for ReplicationTargetResult {
    fn from(model: &models::ReplicationTargetResult) -> Self {
        Self {
            cluster_id: model.cluster_id.into(),
            cluster_incarnation_id: model.cluster_incarnation_id.into(),
            cluster_name: model.cluster_name.clone().into(),
            start_time_usecs: model.start_time_usecs.into(),
            end_time_usecs: model.end_time_usecs.into(),
            queued_time_usecs: model.queued_time_usecs.into(),
            status: model.status.clone().into(),
            message: model.message.clone().into(),
            percentage_completed: model.percentage_completed.into(),
            stats: flatten(&model.stats),
            is_manually_deleted: model.is_manually_deleted.into(),
            expiry_time_usecs: model.expiry_time_usecs.into(),
            replication_task_id: model.replication_task_id.clone().into(),
            entries_changed: model.entries_changed.into(),
            is_in_bound: model.is_in_bound.into(),
            data_lock_constraints: flatten(&model.data_lock_constraints),
            on_legal_hold: model.on_legal_hold.into(),
            multi_object_replication: model.multi_object_replication.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicationDataStats {
    pub logical_size_bytes: ValueNumber,
    pub logical_bytes_transferred: ValueNumber,
    pub physical_bytes_transferred: ValueNumber,
}

impl WithAttributes for ReplicationDataStats {
    fn attributes(_usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "logical_size_bytes" => number(
                "Specifies the total logical size in bytes.",
                Usage::computed(),
            ),
            "logical_bytes_transferred" => number(
                "Specifies the total logical bytes transferred.",
                Usage::computed(),
            ),
            "physical_bytes_transferred" => number(
                "Specifies the total physical bytes transferred.",
                Usage::computed(),
            ),
        }
    }
}

impl From<&models::ReplicationDataStats> for ReplicationDataStats {
    fn from(model: &models::ReplicationDataStats) -> Self {
        Self {
            logical_size_bytes: model.logical_size_bytes.into(),
            logical_bytes_transferred: model.logical_bytes_transferred.into(),
            physical_bytes_transferred: model.physical_bytes_transferred.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivalRun {
    pub archival_target_results: ValueList<ArchivalTargetResult>,
}

impl WithAttributes for ArchivalRun {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "archival_target_results" => objects::<ArchivalTargetResult>(
                usage,
                "Archival results for each archival target.",
                Usage::computed(),
            ),
        }
    }
}

impl From<&models::ArchivalRun> for ArchivalRun {
    fn from(model: &models::ArchivalRun) -> Self {
        Self {
            archival_target_results: flatten_list(&model.archival_target_results),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivalTargetResult {
    pub target_id: ValueNumber,
    pub archival_task_id: Value<String>,
    pub target_name: Value<String>,
    pub target_type: Value<String>,
    pub usage_type: Value<String>,
    pub ownership_context: Value<String>,
    pub tier_settings: Value<ArchivalTargetTierInfo>,
    pub run_type: Value<String>,
    pub is_sla_violated: ValueBool,
    pub snapshot_id: Value<String>,
    pub start_time_usecs: ValueNumber,
    pub end_time_usecs: ValueNumber,
    pub queued_time_usecs: ValueNumber,
    pub is_incremental: ValueBool,
    pub is_forever_incremental: ValueBool,
    pub is_cad_archive: ValueBool,
    pub status: Value<String>,
    pub message: Value<String>,
    pub progress_task_id: Value<String>,
    pub stats_task_id: Value<String>,
    pub indexing_task_id: Value<String>,
    pub successful_objects_count: ValueNumber,
    pub failed_objects_count: ValueNumber,
    pub cancelled_objects_count: ValueNumber,
    pub successful_app_objects_count: ValueNumber,
    pub failed_app_objects_count: ValueNumber,
    pub cancelled_app_objects_count: ValueNumber,
    pub stats: Value<ArchivalDataStats>,
    pub is_manually_deleted: ValueBool,
    pub expiry_time_usecs: ValueNumber,
    pub data_lock_constraints: Value<DataLockConstraints>,
    pub on_legal_hold: ValueBool,
    pub worm_properties: Value<WormProperties>,
}

impl WithAttributes for ArchivalTargetResult {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        let c = Usage::computed();
        map! {
            "target_id" => number("Specifies the archival target id.", c.clone()),
            "archival_task_id" => string("Specifies the archival task id.", c.clone()),
            "target_name" => string("Specifies the archival target name.", c.clone()),
            "target_type" => string("Specifies the archival target type.", c.clone()),
            "usage_type" => string("Specifies the usage type for the target.", c.clone()),
            "ownership_context" => string("Specifies the ownership context for the target.", c.clone()),
            "tier_settings" => object::<ArchivalTargetTierInfo>(
                usage,
                "Specifies the tier info for archival.",
                c.clone(),
            ),
            "run_type" => string("Type of protection run created by this run.", c.clone()),
            "is_sla_violated" => boolean("Indicated if SLA has been violated for this run.", c.clone()),
            "snapshot_id" => string("Snapshot id for a successful snapshot.", c.clone()),
            "start_time_usecs" => number("Start time for the archival, in Unix epoch (usecs).", c.clone()),
            "end_time_usecs" => number("End time for the archival, in Unix epoch (usecs).", c.clone()),
            "queued_time_usecs" => number("Specifies the time when the archival is queued for schedule.", c.clone()),
            "is_incremental" => boolean("Whether the archival was an incremental archival.", c.clone()),
            "is_forever_incremental" => boolean("Whether the archival is forever incremental.", c.clone()),
            "is_cad_archive" => boolean("Whether the archival is a CAD archive.", c.clone()),
            "status" => string("Status of the archival run.", c.clone()),
            "message" => string("Message about the archival run.", c.clone()),
            "progress_task_id" => string("Progress monitor task id for archival.", c.clone()),
            "stats_task_id" => string("Run stats task id for archival.", c.clone()),
            "indexing_task_id" => string("Progress monitor task for indexing.", c.clone()),
            "successful_objects_count" => number("Specifies the count of objects for which the archival succeeded.", c.clone()),
            "failed_objects_count" => number("Specifies the count of objects for which the archival failed.", c.clone()),
            "cancelled_objects_count" => number("Specifies the count of objects for which the archival was cancelled.", c.clone()),
            "successful_app_objects_count" => number("Specifies the count of app objects for which the archival succeeded.", c.clone()),
            "failed_app_objects_count" => number("Specifies the count of app objects for which the archival failed.", c.clone()),
            "cancelled_app_objects_count" => number("Specifies the count of app objects for which the archival was cancelled.", c.clone()),
            "stats" => object::<ArchivalDataStats>(usage, "Specifies statistics about the archival data.", c.clone()),
            "is_manually_deleted" => boolean("Specifies whether the snapshot is deleted manually.", c.clone()),
            "expiry_time_usecs" => number("Specifies the expiry time of the archival in Unix epoch (usecs).", c.clone()),
            "data_lock_constraints" => object::<DataLockConstraints>(
                usage,
                "Specifies the data lock constraints of the archived snapshot.",
                c.clone(),
            ),
            "on_legal_hold" => boolean("Specifies the legal hold status for an archival target.", c.clone()),
            "worm_properties" => object::<WormProperties>(
                usage,
                "Specifies the WORM related properties for this archive.",
                c,
            ),
        }
    }
}

impl From<&models::ArchivalTargetResult> for ArchivalTargetResult {
    fn from(model: &models::ArchivalTargetResult) -> Self {
        Self {
            target_id: model.target_id.into(),
            archival_task_id: model.archival_task_id.clone().into(),
            target_name: model.target_name.clone().into(),
            target_type: model.target_type.clone().into(),
            usage_type: model.usage_type.clone().into(),
            ownership_context: model.ownership_context.clone().into(),
            tier_settings: flatten(&model.tier_settings),
            run_type: model.run_type.clone().into(),
            is_sla_violated: model.is_sla_violated.into(),
            snapshot_id: model.snapshot_id.clone().into(),
            start_time_usecs: model.start_time_usecs.into(),
            end_time_usecs: model.end_time_usecs.into(),
            queued_time_usecs: model.queued_time_usecs.into(),
            is_incremental: model.is_incremental.into(),
            is_forever_incremental: model.is_forever_incremental.into(),
            is_cad_archive: model.is_cad_archive.into(),
            status: model.status.clone().into(),
            message: model.message.clone().into(),
            progress_task_id: model.progress_task_id.clone().into(),
            stats_task_id: model.stats_task_id.clone().into(),
            indexing_task_id: model.indexing_task_id.clone().into(),
            successful_objects_count: model.successful_objects_count.into(),
            failed_objects_count: model.failed_objects_count.into(),
            cancelled_objects_count: model.cancelled_objects_count.into(),
            successful_app_objects_count: model.successful_app_objects_count.into(),
            failed_app_objects_count: model.failed_app_objects_count.into(),
            cancelled_app_objects_count: model.cancelled_app_objects_count.into(),
            stats: flatten(&model.stats),
            is_manually_deleted: model.is_manually_deleted.into(),
            expiry_time_usecs: model.expiry_time_usecs.into(),
            data_lock_constraints: flatten(&model.data_lock_constraints),
            on_legal_hold: model.on_legal_hold.into(),
            worm_properties: flatten(&model.worm_properties),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivalTargetTierInfo {
    pub cloud_platform: Value<String>,
    pub aws_tiering: Value<Tiers>,
    pub azure_tiering: Value<Tiers>,
    pub google_tiering: Value<Tiers>,
    pub oracle_tiering: Value<Tiers>,
    pub current_tier_type: Value<String>,
}

impl WithAttributes for ArchivalTargetTierInfo {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        let c = Usage::computed();
        map! {
            "cloud_platform" => string("Specifies the cloud platform to enable tiering.", c.clone()),
            "aws_tiering" => object::<Tiers>(usage, "Specifies AWS tiers.", c.clone()),
            "azure_tiering" => object::<Tiers>(usage, "Specifies Azure tiers.", c.clone()),
            "google_tiering" => object::<Tiers>(usage, "Specifies Google tiers.", c.clone()),
            "oracle_tiering" => object::<Tiers>(usage, "Specifies Oracle tiers.", c.clone()),
            "current_tier_type" => string(
                "Specifies the type of the current tier where the snapshot resides.",
                c,
            ),
        }
    }
}

impl From<&models::ArchivalTargetTierInfo> for ArchivalTargetTierInfo {
    fn from(model: &models::ArchivalTargetTierInfo) -> Self {
        Self {
            cloud_platform: model.cloud_platform.clone().into(),
            aws_tiering: flatten(&model.aws_tiering),
            azure_tiering: flatten(&model.azure_tiering),
            google_tiering: flatten(&model.google_tiering),
            oracle_tiering: flatten(&model.oracle_tiering),
            current_tier_type: model.current_tier_type.clone().into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivalDataStats {
    pub logical_size_bytes: ValueNumber,
    pub bytes_read: ValueNumber,
    pub logical_bytes_transferred: ValueNumber,
    pub physical_bytes_transferred: ValueNumber,
    pub avg_logical_transfer_rate_bps: ValueNumber,
    pub file_walk_done: ValueBool,
    pub total_file_count: ValueNumber,
    pub backup_file_count: ValueNumber,
}

impl WithAttributes for ArchivalDataStats {
    fn attributes(_usage: Usage) -> HashMap<String, Attribute> {
        let c = Usage::computed();
        map! {
            "logical_size_bytes" => number("Specifies the logical size of the archived data in bytes.", c.clone()),
            "bytes_read" => number("Specifies the total logical bytes read for the archival.", c.clone()),
            "logical_bytes_transferred" => number("Specifies the logical bytes transferred.", c.clone()),
            "physical_bytes_transferred" => number("Specifies the physical bytes transferred.", c.clone()),
            "avg_logical_transfer_rate_bps" => number(
                "Specifies the average rate of transfer in bytes per second.",
                c.clone(),
            ),
            "file_walk_done" => boolean("Specifies whether the file system walk is done.", c.clone()),
            "total_file_count" => number("The total number of files and folders to archive.", c.clone()),
            "backup_file_count" => number("The total number of files and folders archived.", c),
        }
    }
}

impl From<&models::ArchivalDataStats> for ArchivalDataStats {
    fn from(model: &models::ArchivalDataStats) -> Self {
        Self {
            logical_size_bytes: model.logical_size_bytes.into(),
            bytes_read: model.bytes_read.into(),
            logical_bytes_transferred: model.logical_bytes_transferred.into(),
            physical_bytes_transferred: model.physical_bytes_transferred.into(),
            avg_logical_transfer_rate_bps: model.avg_logical_transfer_rate_bps.into(),
            file_walk_done: model.file_walk_done.into(),
            total_file_count: model.total_file_count.into(),
            backup_file_count: model.backup_file_count.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WormProperties {
    pub is_archive_worm_compliant: ValueBool,
    pub worm_non_compliance_reason: Value<String>,
    pub worm_expiry_time_usecs: ValueNumber,
}

impl WithAttributes for WormProperties {
    fn attributes(_usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "is_archive_worm_compliant" => boolean(
                "Specifies whether this archive run is WORM compliant.",
                Usage::computed(),
            ),
            "worm_non_compliance_reason" => string(
                "Specifies reason of archive not being WORM compliant.",
                Usage::computed(),
            ),
            "worm_expiry_time_usecs" => number(
                "Specifies the time at which the WORM protection expires.",
                Usage::computed(),
            ),
        }
    }
}

impl From<&models::WormProperties> for WormProperties {
    fn from(model: &models::WormProperties) -> Self {
        Self {
            is_archive_worm_compliant: model.is_archive_worm_compliant.into(),
            worm_non_compliance_reason: model.worm_non_compliance_reason.clone().into(),
            worm_expiry_time_usecs: model.worm_expiry_time_usecs.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudSpinRun {
    pub cloud_spin_target_results: ValueList<CloudSpinTargetResult>,
}

impl WithAttributes for CloudSpinRun {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "cloud_spin_target_results" => objects::<CloudSpinTargetResult>(
                usage,
                "Cloud spin results for each cloud spin target.",
                Usage::computed(),
            ),
        }
    }
}

impl From<&models::CloudSpinRun> for CloudSpinRun {
    fn from(model: &models::CloudSpinRun) -> Self {
        Self {
            cloud_spin_target_results: flatten_list(&model.cloud_spin_target_results),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudSpinTargetResult {
    pub id: ValueNumber,
    pub name: Value<String>,
    pub start_time_usecs: ValueNumber,
    pub end_time_usecs: ValueNumber,
    pub status: Value<String>,
    pub message: Value<String>,
    pub stats: Value<CloudSpinDataStats>,
    pub is_manually_deleted: ValueBool,
    pub expiry_time_usecs: ValueNumber,
    pub cloudspin_task_id: Value<String>,
    pub progress_task_id: Value<String>,
    pub data_lock_constraints: Value<DataLockConstraints>,
    pub on_legal_hold: ValueBool,
}

impl WithAttributes for CloudSpinTargetResult {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        let c = Usage::computed();
        map! {
            "id" => number("Specifies the unique id of the cloud spin entity.", c.clone()),
            "name" => string("Specifies the name of the already added cloud spin target.", c.clone()),
            "start_time_usecs" => number("Specifies the start time of cloud spin in Unix epoch (usecs).", c.clone()),
            "end_time_usecs" => number("Specifies the end time of cloud spin in Unix epoch (usecs).", c.clone()),
            "status" => string("Status of the cloud spin for a target.", c.clone()),
            "message" => string("Message about the cloud spin run.", c.clone()),
            "stats" => object::<CloudSpinDataStats>(usage, "Specifies statistics about the cloud spin data.", c.clone()),
            "is_manually_deleted" => boolean("Specifies whether the snapshot is deleted manually.", c.clone()),
            "expiry_time_usecs" => number("Specifies the expiry time of the cloud spin in Unix epoch (usecs).", c.clone()),
            "cloudspin_task_id" => string("Task id of the cloud spin run.", c.clone()),
            "progress_task_id" => string("Progress monitor task id for cloud spin run.", c.clone()),
            "data_lock_constraints" => object::<DataLockConstraints>(
                usage,
                "Specifies the data lock constraints of the cloud spin.",
                c.clone(),
            ),
            "on_legal_hold" => boolean("Specifies the legal hold status for a cloud spin target.", c),
        }
    }
}

impl From<&models::CloudSpinTargetResult> for CloudSpinTargetResult {
    fn from(model: &models::CloudSpinTargetResult) -> Self {
        Self {
            id: model.id.into(),
            name: model.name.clone().into(),
            start_time_usecs: model.start_time_usecs.into(),
            end_time_usecs: model.end_time_usecs.into(),
            status: model.status.clone().into(),
            message: model.message.clone().into(),
            stats: flatten(&model.stats),
            is_manually_deleted: model.is_manually_deleted.into(),
            expiry_time_usecs: model.expiry_time_usecs.into(),
            cloudspin_task_id: model.cloudspin_task_id.clone().into(),
            progress_task_id: model.progress_task_id.clone().into(),
            data_lock_constraints: flatten(&model.data_lock_constraints),
            on_legal_hold: model.on_legal_hold.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudSpinDataStats {
    pub physical_bytes_transferred: ValueNumber,
}

impl WithAttributes for CloudSpinDataStats {
    fn attributes(_usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "physical_bytes_transferred" => number(
                "Specifies the physical bytes transferred.",
                Usage::computed(),
            ),
        }
    }
}

impl From<&models::CloudSpinDataStats> for CloudSpinDataStats {
    fn from(model: &models::CloudSpinDataStats) -> Self {
        Self {
            physical_bytes_transferred: model.physical_bytes_transferred.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupRunSummary {
    pub run_type: Value<String>,
    pub is_sla_violated: ValueBool,
    pub start_time_usecs: ValueNumber,
    pub end_time_usecs: ValueNumber,
    pub status: Value<String>,
    pub messages: ValueList<Value<String>>,
    pub successful_objects_count: ValueNumber,
    pub skipped_objects_count: ValueNumber,
    pub failed_objects_count: ValueNumber,
    pub cancelled_objects_count: ValueNumber,
    pub successful_app_objects_count: ValueNumber,
    pub failed_app_objects_count: ValueNumber,
    pub cancelled_app_objects_count: ValueNumber,
    pub local_snapshot_stats: Value<BackupDataStats>,
    pub indexing_task_id: Value<String>,
    pub progress_task_id: Value<String>,
    pub stats_task_id: Value<String>,
    pub data_lock: Value<String>,
    pub local_task_id: Value<String>,
    pub data_lock_constraints: Value<DataLockConstraints>,
}

impl WithAttributes for BackupRunSummary {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        let c = Usage::computed();
        map! {
            "run_type" => string("Type of protection run created by this run.", c.clone()),
            "is_sla_violated" => boolean("Indicated if SLA has been violated for this run.", c.clone()),
            "start_time_usecs" => number("Specifies the start time of backup run in Unix epoch (usecs).", c.clone()),
            "end_time_usecs" => number("Specifies the end time of backup run in Unix epoch (usecs).", c.clone()),
            "status" => string("Status of the backup run.", c.clone()),
            "messages" => strings("Message about the backup run.", c.clone()),
            "successful_objects_count" => number("Specifies the count of objects for which backup was successful.", c.clone()),
            "skipped_objects_count" => number("Specifies the count of objects for which backup was skipped.", c.clone()),
            "failed_objects_count" => number("Specifies the count of objects for which backup failed.", c.clone()),
            "cancelled_objects_count" => number("Specifies the count of objects for which backup was cancelled.", c.clone()),
            "successful_app_objects_count" => number("Specifies the count of app objects for which backup was successful.", c.clone()),
            "failed_app_objects_count" => number("Specifies the count of app objects for which backup failed.", c.clone()),
            "cancelled_app_objects_count" => number("Specifies the count of app objects for which backup was cancelled.", c.clone()),
            "local_snapshot_stats" => object::<BackupDataStats>(
                usage,
                "Specifies statistics about the local snapshot.",
                c.clone(),
            ),
            "indexing_task_id" => string("Progress monitor task for indexing.", c.clone()),
            "progress_task_id" => string("Progress monitor task id for local backup run.", c.clone()),
            "stats_task_id" => string("Stats task id for local backup run.", c.clone()),
            "data_lock" => string("This field is deprecated.", c.clone()),
            "local_task_id" => string("Task id for local backup run.", c.clone()),
            "data_lock_constraints" => object::<DataLockConstraints>(
                usage,
                "Specifies the data lock constraints of the local snapshot.",
                c,
            ),
        }
    }
}

impl From<&models::BackupRunSummary> for BackupRunSummary {
    fn from(model: &models::BackupRunSummary) -> Self {
        Self {
            run_type: model.run_type.clone().into(),
            is_sla_violated: model.is_sla_violated.into(),
            start_time_usecs: model.start_time_usecs.into(),
            end_time_usecs: model.end_time_usecs.into(),
            status: model.status.clone().into(),
            messages: flatten_strings(&model.messages),
            successful_objects_count: model.successful_objects_count.into(),
            skipped_objects_count: model.skipped_objects_count.into(),
            failed_objects_count: model.failed_objects_count.into(),
            cancelled_objects_count: model.cancelled_objects_count.into(),
            successful_app_objects_count: model.successful_app_objects_count.into(),
            failed_app_objects_count: model.failed_app_objects_count.into(),
            cancelled_app_objects_count: model.cancelled_app_objects_count.into(),
            local_snapshot_stats: flatten(&model.local_snapshot_stats),
            indexing_task_id: model.indexing_task_id.clone().into(),
            progress_task_id: model.progress_task_id.clone().into(),
            stats_task_id: model.stats_task_id.clone().into(),
            data_lock: model.data_lock.clone().into(),
            local_task_id: model.local_task_id.clone().into(),
            data_lock_constraints: flatten(&model.data_lock_constraints),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use serde_json::json;

    use super::*;
    use crate::schema::assert_matches_attributes;

    pub(crate) fn full_run() -> models::ProtectionGroupRun {
        let constraints = json!({"mode": "Compliance", "expiryTimeUsecs": 1800000000000000i64});
        serde_json::from_value(json!({
            "id": "4:1700000000:55",
            "protectionGroupInstanceId": 55,
            "protectionGroupId": "4:1700000000:2",
            "isReplicationRun": false,
            "originClusterIdentifier": {"clusterId": 4, "clusterIncarnationId": 1700000000, "clusterName": "primary"},
            "protectionGroupName": "vms",
            "objects": [{
                "object": {"id": 101, "name": "vm-1", "sourceId": 1, "environment": "kVMware", "logicalSizeBytes": 4096},
                "localSnapshotInfo": {
                    "snapshotInfo": {
                        "snapshotId": "snap-1",
                        "status": "kSuccessful",
                        "startTimeUsecs": 1,
                        "stats": {"logicalSizeBytes": 4096, "bytesWritten": 1024, "bytesRead": 2048},
                        "warnings": ["slow disk"],
                        "dataLockConstraints": constraints
                    },
                    "failedAttempts": [{"status": "kFailed", "message": "timeout", "stats": {"bytesRead": 0}}]
                },
                "replicationInfo": {"replicationTargetResults": [{
                    "clusterId": 7,
                    "status": "Succeeded",
                    "stats": {"logicalBytesTransferred": 10},
                    "dataLockConstraints": constraints
                }]},
                "archivalInfo": {"archivalTargetResults": [{
                    "targetId": 42,
                    "tierSettings": {
                        "cloudPlatform": "AWS",
                        "awsTiering": {"tiers": [{"tierType": "kAmazonS3Standard"}]},
                        "currentTierType": "kAmazonS3Standard"
                    },
                    "stats": {"fileWalkDone": true},
                    "wormProperties": {"isArchiveWormCompliant": true}
                }]},
                "cloudSpinInfo": {"cloudSpinTargetResults": [{"id": 9, "stats": {"physicalBytesTransferred": 3}}]}
            }],
            "localBackupInfo": {
                "runType": "kRegular",
                "status": "Succeeded",
                "messages": ["done"],
                "localSnapshotStats": {"logicalSizeBytes": 4096},
                "dataLockConstraints": constraints
            },
            "permissions": [{"id": "tenant/", "name": "tenant"}],
            "hasLocalSnapshot": true,
            "environment": "kVMware"
        }))
        .unwrap()
    }

    #[test]
    fn run_state_matches_attributes() {
        assert_matches_attributes(
            "run",
            &serde_json::to_value(ProtectionGroupRun::from(&full_run())).unwrap(),
            &ProtectionGroupRun::attributes(Usage::Output),
        );
    }

    #[test]
    fn required_looking_fields_may_be_absent() {
        let model: models::ArchivalTargetTierInfo =
            serde_json::from_value(json!({"currentTierType": "kAmazonS3Standard"})).unwrap();
        let state = ArchivalTargetTierInfo::from(&model);
        assert_eq!(state.cloud_platform, Value::Null);
        assert_eq!(
            state.current_tier_type,
            Value::Value("kAmazonS3Standard".to_owned())
        );
    }
}
