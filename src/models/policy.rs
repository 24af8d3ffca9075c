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

//! Protection policy payloads
//!
//! These types are both read from and written to the API, so absent fields are skipped on serialization.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtectionPoliciesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policies: Option<Vec<ProtectionPolicy>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtectionPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_policy: Option<BackupPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blackout_window: Option<Vec<BlackoutWindow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_retention: Option<Vec<ExtendedRetentionPolicy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_target_policy: Option<TargetsConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_options: Option<RetryOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_lock: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    #[serde(rename = "isCBSEnabled", skip_serializing_if = "Option::is_none")]
    pub is_cbs_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modification_time_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_usable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_replicated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_protection_groups: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_protected_objects: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular: Option<RegularBackupPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<ScheduleAndRetention>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmr: Option<ScheduleAndRetention>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdp: Option<CdpBackupPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_array_snapshot: Option<ScheduleAndRetention>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_timeouts: Option<Vec<CancellationTimeout>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegularBackupPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incremental: Option<ScheduledBackup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full: Option<ScheduledBackup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_backups: Option<Vec<ScheduleAndRetention>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention: Option<Retention>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_backup_target: Option<PrimaryBackupTarget>,
}

/// Incremental and full backups only carry a schedule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledBackup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
}

/// Log, BMR, storage array snapshot and full backup entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleAndRetention {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention: Option<Retention>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CdpBackupPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention: Option<Retention>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minute_schedule: Option<Frequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour_schedule: Option<Frequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_schedule: Option<Frequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_schedule: Option<WeekSchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month_schedule: Option<MonthSchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_schedule: Option<YearSchedule>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frequency {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSchedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSchedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_of_month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSchedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_year: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Retention {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_lock_config: Option<DataLockConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataLockConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_worm_on_external_target: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryBackupTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archival_target_settings: Option<PrimaryArchivalTarget>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryArchivalTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_settings: Option<TierLevelSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierLevelSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_tiering: Option<Tiers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azure_tiering: Option<Tiers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_tiering: Option<Tiers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oracle_tiering: Option<Tiers>,
}

/// Tiering of one cloud platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tiers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiers: Option<Vec<Tier>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_after_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_after: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancellationTimeout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_mins: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlackoutWindow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<TimeOfDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<TimeOfDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOfDay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minute: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedRetentionPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<TargetSchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention: Option<Retention>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetSchedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetsConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_targets: Option<Vec<ReplicationTarget>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archival_targets: Option<Vec<ArchivalTarget>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_spin_targets: Option<Vec<CloudSpinTargetConfiguration>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<TargetSchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention: Option<Retention>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_on_run_success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_run_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_timeouts: Option<Vec<CancellationTimeout>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_retention: Option<Retention>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_target_config: Option<RemoteTargetConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteTargetConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivalTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<TargetSchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention: Option<Retention>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_on_run_success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_run_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_timeouts: Option<Vec<CancellationTimeout>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_retention: Option<Retention>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_settings: Option<TierLevelSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_retention: Option<Vec<ExtendedRetentionPolicy>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudSpinTargetConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<TargetSchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention: Option<Retention>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_on_run_success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_run_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_timeouts: Option<Vec<CancellationTimeout>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_retention: Option<Retention>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<CloudSpinTarget>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudSpinTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retries: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_interval_mins: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn irregular_cbs_key_is_decoded() {
        let policy: ProtectionPolicy = serde_json::from_value(json!({
            "id": "5:1:3",
            "name": "gold",
            "isCBSEnabled": true,
            "numProtectionGroups": 4
        }))
        .unwrap();
        assert_eq!(policy.is_cbs_enabled, Some(true));
        assert_eq!(policy.num_protection_groups, Some(4));
        assert_eq!(policy.backup_policy, None);
    }

    #[test]
    fn absent_fields_are_not_sent() {
        let policy = ProtectionPolicy {
            name: Some("gold".into()),
            backup_policy: Some(BackupPolicy {
                regular: Some(RegularBackupPolicy {
                    retention: Some(Retention {
                        unit: Some("Days".into()),
                        duration: Some(7),
                        data_lock_config: None,
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&policy).unwrap(),
            json!({
                "name": "gold",
                "backupPolicy": {
                    "regular": {
                        "retention": {"unit": "Days", "duration": 7}
                    }
                }
            })
        );
    }
}
