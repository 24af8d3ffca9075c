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

//! Terraform state of a protection policy
//!
//! Every entity of the policy tree has a state counterpart, converted from the API model with
//! `From<&models::X>` and back with `From<&X> for models::X`.
//! Absent optional objects are `Null`, never a one-element list.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tf_provider::map;
use tf_provider::schema::Attribute;
use tf_provider::value::{Value, ValueBool, ValueList, ValueNumber};

use crate::models;
use crate::schema::{boolean, number, object, objects, string, strings, Usage, WithAttributes};
use crate::utils::{
    expand, expand_list, expand_object, expand_strings, flatten, flatten_list, flatten_strings,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectionPolicy {
    pub id: Value<String>,
    pub name: Value<String>,
    pub backup_policy: Value<BackupPolicy>,
    pub description: Value<String>,
    pub blackout_window: ValueList<BlackoutWindow>,
    pub extended_retention: ValueList<ExtendedRetentionPolicy>,
    pub remote_target_policy: Value<TargetsConfiguration>,
    pub retry_options: Value<RetryOptions>,
    pub data_lock: Value<String>,
    pub version: ValueNumber,
    pub is_cbs_enabled: ValueBool,
    pub last_modification_time_usecs: ValueNumber,
    pub template_id: Value<String>,
    pub is_usable: ValueBool,
    pub is_replicated: ValueBool,
    pub num_protection_groups: ValueNumber,
    pub num_protected_objects: ValueNumber,
}

impl ProtectionPolicy {
    /// Mark every attribute assigned by the server as unknown
    pub fn mark_computed_unknown(&mut self) {
        self.id = Value::Unknown;
        self.version = Value::Unknown;
        self.is_cbs_enabled = Value::Unknown;
        self.last_modification_time_usecs = Value::Unknown;
        self.is_usable = Value::Unknown;
        self.is_replicated = Value::Unknown;
        self.num_protection_groups = Value::Unknown;
        self.num_protected_objects = Value::Unknown;
    }

    /// Take the attributes assigned by the server from an API response
    pub fn with_computed(mut self, model: &models::ProtectionPolicy) -> Self {
        self.id = model.id.clone().into();
        self.version = model.version.into();
        self.is_cbs_enabled = model.is_cbs_enabled.into();
        self.last_modification_time_usecs = model.last_modification_time_usecs.into();
        self.is_usable = model.is_usable.into();
        self.is_replicated = model.is_replicated.into();
        self.num_protection_groups = model.num_protection_groups.into();
        self.num_protected_objects = model.num_protected_objects.into();
        self
    }

    /// Take the attributes assigned by the server from a prior state
    pub fn keep_computed(mut self, prior: &Self) -> Self {
        self.id = prior.id.clone();
        self.version = prior.version;
        self.is_cbs_enabled = prior.is_cbs_enabled;
        self.last_modification_time_usecs = prior.last_modification_time_usecs;
        self.is_usable = prior.is_usable;
        self.is_replicated = prior.is_replicated;
        self.num_protection_groups = prior.num_protection_groups;
        self.num_protected_objects = prior.num_protected_objects;
        self
    }

    /// Compare the attributes set by the practitioner
    pub fn same_user_attributes(&self, other: &Self) -> bool {
        self.name == other.name
            && self.backup_policy == other.backup_policy
            && self.description == other.description
            && self.blackout_window == other.blackout_window
            && self.extended_retention == other.extended_retention
            && self.remote_target_policy == other.remote_target_policy
            && self.retry_options == other.retry_options
            && self.data_lock == other.data_lock
            && self.template_id == other.template_id
    }
}

impl WithAttributes for ProtectionPolicy {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "id" => string("Specifies a unique policy id assigned by the cluster.", Usage::computed()),
            "name" => string("Specifies the name of the protection policy.", usage.required()),
            "backup_policy" => object::<BackupPolicy>(
                usage,
                "Specifies the backup schedule and retentions of the protection policy.",
                usage.required(),
            ),
            "description" => string("Specifies the description of the protection policy.", usage.optional()),
            "blackout_window" => objects::<BlackoutWindow>(
                usage,
                "Blackout periods when new protection group runs are not started.",
                usage.optional(),
            ),
            "extended_retention" => objects::<ExtendedRetentionPolicy>(
                usage,
                "Additional retention policies applied to the backup snapshots.",
                usage.optional(),
            ),
            "remote_target_policy" => object::<TargetsConfiguration>(
                usage,
                "Specifies the replication, archival and cloud spin targets of the policy.",
                usage.optional(),
            ),
            "retry_options" => object::<RetryOptions>(
                usage,
                "Retry options of the policy when a protection group run fails.",
                usage.optional(),
            ),
            "data_lock" => string(
                "Specifies the WORM retention type of the snapshots (Compliance or Administrative).",
                usage.optional(),
            ),
            "version" => number("Specifies the current policy version.", Usage::computed()),
            "is_cbs_enabled" => boolean(
                "Specifies true if calendar based schedules are supported by the client.",
                Usage::computed(),
            ),
            "last_modification_time_usecs" => number(
                "Specifies the last time this policy was updated.",
                Usage::computed(),
            ),
            "template_id" => string(
                "Specifies the parent policy template id to which the policy is linked.",
                usage.optional(),
            ),
            "is_usable" => boolean(
                "Specifies if the policy can be used to create a protection group.",
                Usage::computed(),
            ),
            "is_replicated" => boolean(
                "Specifies if the policy is a replicated policy.",
                Usage::computed(),
            ),
            "num_protection_groups" => number(
                "Specifies the number of protection groups using the policy.",
                Usage::computed(),
            ),
            "num_protected_objects" => number(
                "Specifies the number of protected objects using the policy.",
                Usage::computed(),
            ),
        }
    }
}

impl From<&models::ProtectionPolicy> for ProtectionPolicy {
    fn from(model: &models::ProtectionPolicy) -> Self {
        Self {
            id: model.id.clone().into(),
            name: model.name.clone().into(),
            backup_policy: flatten(&model.backup_policy),
            description: model.description.clone().into(),
            blackout_window: flatten_list(&model.blackout_window),
            extended_retention: flatten_list(&model.extended_retention),
            remote_target_policy: flatten(&model.remote_target_policy),
            retry_options: flatten(&model.retry_options),
            data_lock: model.data_lock.clone().into(),
            version: model.version.into(),
            is_cbs_enabled: model.is_cbs_enabled.into(),
            last_modification_time_usecs: model.last_modification_time_usecs.into(),
            template_id: model.template_id.clone().into(),
            is_usable: model.is_usable.into(),
            is_replicated: model.is_replicated.into(),
            num_protection_groups: model.num_protection_groups.into(),
            num_protected_objects: model.num_protected_objects.into(),
        }
    }
}

impl From<&ProtectionPolicy> for models::ProtectionPolicy {
    fn from(state: &ProtectionPolicy) -> Self {
        Self {
            id: expand(&state.id),
            name: expand(&state.name),
            backup_policy: expand_object(&state.backup_policy),
            description: expand(&state.description),
            blackout_window: expand_list(&state.blackout_window),
            extended_retention: expand_list(&state.extended_retention),
            remote_target_policy: expand_object(&state.remote_target_policy),
            retry_options: expand_object(&state.retry_options),
            data_lock: expand(&state.data_lock),
            version: expand(&state.version),
            is_cbs_enabled: expand(&state.is_cbs_enabled),
            last_modification_time_usecs: expand(&state.last_modification_time_usecs),
            template_id: expand(&state.template_id),
            is_usable: expand(&state.is_usable),
            is_replicated: expand(&state.is_replicated),
            num_protection_groups: expand(&state.num_protection_groups),
            num_protected_objects: expand(&state.num_protected_objects),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupPolicy {
    pub regular: Value<RegularBackupPolicy>,
    pub log: Value<ScheduleAndRetention>,
    pub bmr: Value<ScheduleAndRetention>,
    pub cdp: Value<CdpBackupPolicy>,
    pub storage_array_snapshot: Value<ScheduleAndRetention>,
    pub run_timeouts: ValueList<CancellationTimeout>,
}

impl WithAttributes for BackupPolicy {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "regular" => object::<RegularBackupPolicy>(
                usage,
                "Specifies the incremental and full policy settings and the common retention.",
                usage.required(),
            ),
            "log" => object::<ScheduleAndRetention>(
                usage,
                "Specifies log backup settings for a protection group.",
                usage.optional(),
            ),
            "bmr" => object::<ScheduleAndRetention>(
                usage,
                "Specifies the BMR schedule in case of physical source protection.",
                usage.optional(),
            ),
            "cdp" => object::<CdpBackupPolicy>(
                usage,
                "Specifies CDP (continuous data protection) backup settings.",
                usage.optional(),
            ),
            "storage_array_snapshot" => object::<ScheduleAndRetention>(
                usage,
                "Specifies storage snapshot management backup settings.",
                usage.optional(),
            ),
            "run_timeouts" => objects::<CancellationTimeout>(
                usage,
                "Specifies the backup timeouts for different type of runs.",
                usage.optional(),
            ),
        }
    }
}

impl From<&models::BackupPolicy> for BackupPolicy {
    fn from(model: &models::BackupPolicy) -> Self {
        Self {
            regular: flatten(&model.regular),
            log: flatten(&model.log),
            bmr: flatten(&model.bmr),
            cdp: flatten(&model.cdp),
            storage_array_snapshot: flatten(&model.storage_array_snapshot),
            run_timeouts: flatten_list(&model.run_timeouts),
        }
    }
}

impl From<&BackupPolicy> for models::BackupPolicy {
    fn from(state: &BackupPolicy) -> Self {
        Self {
            regular: expand_object(&state.regular),
            log: expand_object(&state.log),
            bmr: expand_object(&state.bmr),
            cdp: expand_object(&state.cdp),
            storage_array_snapshot: expand_object(&state.storage_array_snapshot),
            run_timeouts: expand_list(&state.run_timeouts),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegularBackupPolicy {
    pub incremental: Value<ScheduledBackup>,
    pub full: Value<ScheduledBackup>,
    pub full_backups: ValueList<ScheduleAndRetention>,
    pub retention: Value<Retention>,
    pub primary_backup_target: Value<PrimaryBackupTarget>,
}

impl WithAttributes for RegularBackupPolicy {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "incremental" => object::<ScheduledBackup>(
                usage,
                "Specifies incremental backup settings for a protection group.",
                usage.optional(),
            ),
            "full" => object::<ScheduledBackup>(
                usage,
                "Specifies full backup settings for a protection group.",
                usage.optional(),
            ),
            "full_backups" => objects::<ScheduleAndRetention>(
                usage,
                "Specifies multiple schedules and retentions for full backup.",
                usage.optional(),
            ),
            "retention" => object::<Retention>(
                usage,
                "Specifies the retention of a backup.",
                usage.optional(),
            ),
            "primary_backup_target" => object::<PrimaryBackupTarget>(
                usage,
                "Specifies the primary backup target settings for regular backups.",
                usage.optional(),
            ),
        }
    }
}

impl From<&models::RegularBackupPolicy> for RegularBackupPolicy {
    fn from(model: &models::RegularBackupPolicy) -> Self {
        Self {
            incremental: flatten(&model.incremental),
            full: flatten(&model.full),
            full_backups: flatten_list(&model.full_backups),
            retention: flatten(&model.retention),
            primary_backup_target: flatten(&model.primary_backup_target),
        }
    }
}

impl From<&RegularBackupPolicy> for models::RegularBackupPolicy {
    fn from(state: &RegularBackupPolicy) -> Self {
        Self {
            incremental: expand_object(&state.incremental),
            full: expand_object(&state.full),
            full_backups: expand_list(&state.full_backups),
            retention: expand_object(&state.retention),
            primary_backup_target: expand_object(&state.primary_backup_target),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledBackup {
    pub schedule: Value<Schedule>,
}

impl WithAttributes for ScheduledBackup {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "schedule" => object::<Schedule>(
                usage,
                "Specifies how often the backup is performed.",
                usage.optional(),
            ),
        }
    }
}

impl From<&models::ScheduledBackup> for ScheduledBackup {
    fn from(model: &models::ScheduledBackup) -> Self {
        Self {
            schedule: flatten(&model.schedule),
        }
    }
}

impl From<&ScheduledBackup> for models::ScheduledBackup {
    fn from(state: &ScheduledBackup) -> Self {
        Self {
            schedule: expand_object(&state.schedule),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleAndRetention {
    pub schedule: Value<Schedule>,
    pub retention: Value<Retention>,
}

impl WithAttributes for ScheduleAndRetention {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "schedule" => object::<Schedule>(
                usage,
                "Specifies how often the backup is performed.",
                usage.optional(),
            ),
            "retention" => object::<Retention>(
                usage,
                "Specifies the retention of the backup.",
                usage.optional(),
            ),
        }
    }
}

impl From<&models::ScheduleAndRetention> for ScheduleAndRetention {
    fn from(model: &models::ScheduleAndRetention) -> Self {
        Self {
            schedule: flatten(&model.schedule),
            retention: flatten(&model.retention),
        }
    }
}

impl From<&ScheduleAndRetention> for models::ScheduleAndRetention {
    fn from(state: &ScheduleAndRetention) -> Self {
        Self {
            schedule: expand_object(&state.schedule),
            retention: expand_object(&state.retention),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdpBackupPolicy {
    pub retention: Value<Retention>,
}

impl WithAttributes for CdpBackupPolicy {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "retention" => object::<Retention>(
                usage,
                "Specifies the retention of a CDP backup, in minutes or hours.",
                usage.optional(),
            ),
        }
    }
}

impl From<&models::CdpBackupPolicy> for CdpBackupPolicy {
    fn from(model: &models::CdpBackupPolicy) -> Self {
        Self {
            retention: flatten(&model.retention),
        }
    }
}

impl From<&CdpBackupPolicy> for models::CdpBackupPolicy {
    fn from(state: &CdpBackupPolicy) -> Self {
        Self {
            retention: expand_object(&state.retention),
        }
    }
}

/// Recurrence of a backup
///
/// Only the sub-schedule matching `unit` is expected to be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub unit: Value<String>,
    pub minute_schedule: Value<Frequency>,
    pub hour_schedule: Value<Frequency>,
    pub day_schedule: Value<Frequency>,
    pub week_schedule: Value<WeekSchedule>,
    pub month_schedule: Value<MonthSchedule>,
    pub year_schedule: Value<YearSchedule>,
}

impl WithAttributes for Schedule {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "unit" => string(
                "Specifies how often to start new runs: Minutes, Hours, Days, Weeks, Months, Years or ProtectOnce.",
                usage.optional(),
            ),
            "minute_schedule" => object::<Frequency>(
                usage,
                "Schedule starting runs after a number of minutes.",
                usage.optional(),
            ),
            "hour_schedule" => object::<Frequency>(
                usage,
                "Schedule starting runs after a number of hours.",
                usage.optional(),
            ),
            "day_schedule" => object::<Frequency>(
                usage,
                "Schedule starting runs after a number of days.",
                usage.optional(),
            ),
            "week_schedule" => object::<WeekSchedule>(
                usage,
                "Schedule starting runs on certain days of the week.",
                usage.optional(),
            ),
            "month_schedule" => object::<MonthSchedule>(
                usage,
                "Schedule starting runs on a specific week and day of the month.",
                usage.optional(),
            ),
            "year_schedule" => object::<YearSchedule>(
                usage,
                "Schedule starting runs on a specific day of the year.",
                usage.optional(),
            ),
        }
    }
}

impl From<&models::Schedule> for Schedule {
    fn from(model: &models::Schedule) -> Self {
        Self {
            unit: model.unit.clone().into(),
            minute_schedule: flatten(&model.minute_schedule),
            hour_schedule: flatten(&model.hour_schedule),
            day_schedule: flatten(&model.day_schedule),
            week_schedule: flatten(&model.week_schedule),
            month_schedule: flatten(&model.month_schedule),
            year_schedule: flatten(&model.year_schedule),
        }
    }
}

impl From<&Schedule> for models::Schedule {
    fn from(state: &Schedule) -> Self {
        Self {
            unit: expand(&state.unit),
            minute_schedule: expand_object(&state.minute_schedule),
            hour_schedule: expand_object(&state.hour_schedule),
            day_schedule: expand_object(&state.day_schedule),
            week_schedule: expand_object(&state.week_schedule),
            month_schedule: expand_object(&state.month_schedule),
            year_schedule: expand_object(&state.year_schedule),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frequency {
    pub frequency: ValueNumber,
}

impl WithAttributes for Frequency {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "frequency" => number(
                "Specifies a factor to multiply the unit by, to determine the backup schedule.",
                usage.optional(),
            ),
        }
    }
}

impl From<&models::Frequency> for Frequency {
    fn from(model: &models::Frequency) -> Self {
        Self {
            frequency: model.frequency.into(),
        }
    }
}

impl From<&Frequency> for models::Frequency {
    fn from(state: &Frequency) -> Self {
        Self {
            frequency: expand(&state.frequency),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSchedule {
    pub day_of_week: ValueList<Value<String>>,
}

impl WithAttributes for WeekSchedule {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "day_of_week" => strings(
                "Specifies a list of days of the week when to start runs.",
                usage.optional(),
            ),
        }
    }
}

impl From<&models::WeekSchedule> for WeekSchedule {
    fn from(model: &models::WeekSchedule) -> Self {
        Self {
            day_of_week: flatten_strings(&model.day_of_week),
        }
    }
}

impl From<&WeekSchedule> for models::WeekSchedule {
    fn from(state: &WeekSchedule) -> Self {
        Self {
            day_of_week: expand_strings(&state.day_of_week),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSchedule {
    pub day_of_week: ValueList<Value<String>>,
    pub week_of_month: Value<String>,
    pub day_of_month: ValueNumber,
}

impl WithAttributes for MonthSchedule {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "day_of_week" => strings(
                "Specifies a list of days of the week when to start runs.",
                usage.optional(),
            ),
            "week_of_month" => string(
                "Specifies the week of the month (such as Third) or the nth day of the month (First or Last).",
                usage.optional(),
            ),
            "day_of_month" => number(
                "Specifies the exact date of the month (such as 18).",
                usage.optional(),
            ),
        }
    }
}

impl From<&models::MonthSchedule> for MonthSchedule {
    fn from(model: &models::MonthSchedule) -> Self {
        Self {
            day_of_week: flatten_strings(&model.day_of_week),
            week_of_month: model.week_of_month.clone().into(),
            day_of_month: model.day_of_month.into(),
        }
    }
}

impl From<&MonthSchedule> for models::MonthSchedule {
    fn from(state: &MonthSchedule) -> Self {
        Self {
            day_of_week: expand_strings(&state.day_of_week),
            week_of_month: expand(&state.week_of_month),
            day_of_month: expand(&state.day_of_month),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSchedule {
    pub day_of_year: Value<String>,
}

impl WithAttributes for YearSchedule {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "day_of_year" => string(
                "Specifies the day of the year (First or Last) to start the run.",
                usage.optional(),
            ),
        }
    }
}

impl From<&models::YearSchedule> for YearSchedule {
    fn from(model: &models::YearSchedule) -> Self {
        Self {
            day_of_year: model.day_of_year.clone().into(),
        }
    }
}

impl From<&YearSchedule> for models::YearSchedule {
    fn from(state: &YearSchedule) -> Self {
        Self {
            day_of_year: expand(&state.day_of_year),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Retention {
    pub unit: Value<String>,
    pub duration: ValueNumber,
    pub data_lock_config: Value<DataLockConfig>,
}

impl WithAttributes for Retention {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "unit" => string(
                "Specifies the retention unit: Days, Weeks, Months or Years (Minutes or Hours for CDP).",
                usage.optional(),
            ),
            "duration" => number("Specifies the duration of the retention.", usage.optional()),
            "data_lock_config" => object::<DataLockConfig>(
                usage,
                "Specifies WORM retention of the snapshots.",
                usage.optional(),
            ),
        }
    }
}

impl From<&models::Retention> for Retention {
    fn from(model: &models::Retention) -> Self {
        Self {
            unit: model.unit.clone().into(),
            duration: model.duration.into(),
            data_lock_config: flatten(&model.data_lock_config),
        }
    }
}

impl From<&Retention> for models::Retention {
    fn from(state: &Retention) -> Self {
        Self {
            unit: expand(&state.unit),
            duration: expand(&state.duration),
            data_lock_config: expand_object(&state.data_lock_config),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataLockConfig {
    pub mode: Value<String>,
    pub unit: Value<String>,
    pub duration: ValueNumber,
    pub enable_worm_on_external_target: ValueBool,
}

impl WithAttributes for DataLockConfig {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "mode" => string(
                "Specifies the type of WORM retention: Compliance or Administrative.",
                usage.optional(),
            ),
            "unit" => string(
                "Specifies the data lock unit: Days, Weeks, Months or Years.",
                usage.optional(),
            ),
            "duration" => number("Specifies the duration of the data lock.", usage.optional()),
            "enable_worm_on_external_target" => boolean(
                "Specifies whether objects in the external target need to be made immutable.",
                usage.optional(),
            ),
        }
    }
}

impl From<&models::DataLockConfig> for DataLockConfig {
    fn from(model: &models::DataLockConfig) -> Self {
        Self {
            mode: model.mode.clone().into(),
            unit: model.unit.clone().into(),
            duration: model.duration.into(),
            enable_worm_on_external_target: model.enable_worm_on_external_target.into(),
        }
    }
}

impl From<&DataLockConfig> for models::DataLockConfig {
    fn from(state: &DataLockConfig) -> Self {
        Self {
            mode: expand(&state.mode),
            unit: expand(&state.unit),
            duration: expand(&state.duration),
            enable_worm_on_external_target: expand(&state.enable_worm_on_external_target),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryBackupTarget {
    pub target_type: Value<String>,
    pub archival_target_settings: Value<PrimaryArchivalTarget>,
}

impl WithAttributes for PrimaryBackupTarget {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "target_type" => string(
                "Specifies the primary backup location: Local or Archival.",
                usage.optional(),
            ),
            "archival_target_settings" => object::<PrimaryArchivalTarget>(
                usage,
                "Specifies the primary archival settings, used for cloud direct archive.",
                usage.optional(),
            ),
        }
    }
}

impl From<&models::PrimaryBackupTarget> for PrimaryBackupTarget {
    fn from(model: &models::PrimaryBackupTarget) -> Self {
        Self {
            target_type: model.target_type.clone().into(),
            archival_target_settings: flatten(&model.archival_target_settings),
        }
    }
}

impl From<&PrimaryBackupTarget> for models::PrimaryBackupTarget {
    fn from(state: &PrimaryBackupTarget) -> Self {
        Self {
            target_type: expand(&state.target_type),
            archival_target_settings: expand_object(&state.archival_target_settings),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryArchivalTarget {
    pub target_id: ValueNumber,
    pub target_name: Value<String>,
    pub tier_settings: Value<TierLevelSettings>,
}

impl WithAttributes for PrimaryArchivalTarget {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "target_id" => number(
                "Specifies the archival target id to take primary backup.",
                usage.optional(),
            ),
            "target_name" => string(
                "Specifies the archival target name where snapshots are copied.",
                usage.optional(),
            ),
            "tier_settings" => object::<TierLevelSettings>(
                usage,
                "Specifies the tier levels configured with the archival target.",
                usage.optional(),
            ),
        }
    }
}

impl From<&models::PrimaryArchivalTarget> for PrimaryArchivalTarget {
    fn from(model: &models::PrimaryArchivalTarget) -> Self {
        Self {
            target_id: model.target_id.into(),
            target_name: model.target_name.clone().into(),
            tier_settings: flatten(&model.tier_settings),
        }
    }
}

impl From<&PrimaryArchivalTarget> for models::PrimaryArchivalTarget {
    fn from(state: &PrimaryArchivalTarget) -> Self {
        Self {
            target_id: expand(&state.target_id),
            target_name: expand(&state.target_name),
            tier_settings: expand_object(&state.tier_settings),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierLevelSettings {
    pub cloud_platform: Value<String>,
    pub aws_tiering: Value<Tiers>,
    pub azure_tiering: Value<Tiers>,
    pub google_tiering: Value<Tiers>,
    pub oracle_tiering: Value<Tiers>,
}

impl WithAttributes for TierLevelSettings {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "cloud_platform" => string(
                "Specifies the cloud platform to enable tiering.",
                usage.optional(),
            ),
            "aws_tiering" => object::<Tiers>(usage, "Specifies AWS tiers.", usage.optional()),
            "azure_tiering" => object::<Tiers>(usage, "Specifies Azure tiers.", usage.optional()),
            "google_tiering" => object::<Tiers>(usage, "Specifies Google tiers.", usage.optional()),
            "oracle_tiering" => object::<Tiers>(usage, "Specifies Oracle tiers.", usage.optional()),
        }
    }
}

impl From<&models::TierLevelSettings> for TierLevelSettings {
    fn from(model: &models::TierLevelSettings) -> Self {
        Self {
            cloud_platform: model.cloud_platform.clone().into(),
            aws_tiering: flatten(&model.aws_tiering),
            azure_tiering: flatten(&model.azure_tiering),
            google_tiering: flatten(&model.google_tiering),
            oracle_tiering: flatten(&model.oracle_tiering),
        }
    }
}

impl From<&TierLevelSettings> for models::TierLevelSettings {
    fn from(state: &TierLevelSettings) -> Self {
        Self {
            cloud_platform: expand(&state.cloud_platform),
            aws_tiering: expand_object(&state.aws_tiering),
            azure_tiering: expand_object(&state.azure_tiering),
            google_tiering: expand_object(&state.google_tiering),
            oracle_tiering: expand_object(&state.oracle_tiering),
        }
    }
}

/// Ordered tiers of one cloud platform, the default tier first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tiers {
    pub tiers: ValueList<Tier>,
}

impl WithAttributes for Tiers {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "tiers" => objects::<Tier>(
                usage,
                "Specifies the tiers used to move the archived backup from the current tier to the next one.",
                usage.optional(),
            ),
        }
    }
}

impl From<&models::Tiers> for Tiers {
    fn from(model: &models::Tiers) -> Self {
        Self {
            tiers: flatten_list(&model.tiers),
        }
    }
}

impl From<&Tiers> for models::Tiers {
    fn from(state: &Tiers) -> Self {
        Self {
            tiers: expand_list(&state.tiers),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub move_after_unit: Value<String>,
    pub move_after: ValueNumber,
    pub tier_type: Value<String>,
}

impl WithAttributes for Tier {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "move_after_unit" => string(
                "Specifies the unit for moving the data to the next tier.",
                usage.optional(),
            ),
            "move_after" => number(
                "Specifies the time period after which the backup is moved to the next tier.",
                usage.optional(),
            ),
            "tier_type" => string("Specifies the tier type.", usage.optional()),
        }
    }
}

impl From<&models::Tier> for Tier {
    fn from(model: &models::Tier) -> Self {
        Self {
            move_after_unit: model.move_after_unit.clone().into(),
            move_after: model.move_after.into(),
            tier_type: model.tier_type.clone().into(),
        }
    }
}

impl From<&Tier> for models::Tier {
    fn from(state: &Tier) -> Self {
        Self {
            move_after_unit: expand(&state.move_after_unit),
            move_after: expand(&state.move_after),
            tier_type: expand(&state.tier_type),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancellationTimeout {
    pub timeout_mins: ValueNumber,
    pub backup_type: Value<String>,
}

impl WithAttributes for CancellationTimeout {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "timeout_mins" => number("Specifies the timeout in minutes.", usage.optional()),
            "backup_type" => string(
                "Specifies the type of the run the timeout applies to (kFull, kRegular, ...).",
                usage.optional(),
            ),
        }
    }
}

impl From<&models::CancellationTimeout> for CancellationTimeout {
    fn from(model: &models::CancellationTimeout) -> Self {
        Self {
            timeout_mins: model.timeout_mins.into(),
            backup_type: model.backup_type.clone().into(),
        }
    }
}

impl From<&CancellationTimeout> for models::CancellationTimeout {
    fn from(state: &CancellationTimeout) -> Self {
        Self {
            timeout_mins: expand(&state.timeout_mins),
            backup_type: expand(&state.backup_type),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlackoutWindow {
    pub day: Value<String>,
    pub start_time: Value<TimeOfDay>,
    pub end_time: Value<TimeOfDay>,
    pub config_id: Value<String>,
}

impl WithAttributes for BlackoutWindow {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "day" => string(
                "Specifies a day of the week when no new run should be started, such as Sunday.",
                usage.optional(),
            ),
            "start_time" => object::<TimeOfDay>(
                usage,
                "Specifies the start of the blackout window.",
                usage.optional(),
            ),
            "end_time" => object::<TimeOfDay>(
                usage,
                "Specifies the end of the blackout window.",
                usage.optional(),
            ),
            "config_id" => string(
                "Specifies the unique identifier of the window, only needed when the policy is updated.",
                usage.optional(),
            ),
        }
    }
}

impl From<&models::BlackoutWindow> for BlackoutWindow {
    fn from(model: &models::BlackoutWindow) -> Self {
        Self {
            day: model.day.clone().into(),
            start_time: flatten(&model.start_time),
            end_time: flatten(&model.end_time),
            config_id: model.config_id.clone().into(),
        }
    }
}

impl From<&BlackoutWindow> for models::BlackoutWindow {
    fn from(state: &BlackoutWindow) -> Self {
        Self {
            day: expand(&state.day),
            start_time: expand_object(&state.start_time),
            end_time: expand_object(&state.end_time),
            config_id: expand(&state.config_id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: ValueNumber,
    pub minute: ValueNumber,
    pub time_zone: Value<String>,
}

impl WithAttributes for TimeOfDay {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "hour" => number("Specifies the hour of the day (0-23).", usage.optional()),
            "minute" => number("Specifies the minute of the hour (0-59).", usage.optional()),
            "time_zone" => string(
                "Specifies the time zone of the user, America/Los_Angeles if not specified.",
                usage.optional(),
            ),
        }
    }
}

impl From<&models::TimeOfDay> for TimeOfDay {
    fn from(model: &models::TimeOfDay) -> Self {
        Self {
            hour: model.hour.into(),
            minute: model.minute.into(),
            time_zone: model.time_zone.clone().into(),
        }
    }
}

impl From<&TimeOfDay> for models::TimeOfDay {
    fn from(state: &TimeOfDay) -> Self {
        Self {
            hour: expand(&state.hour),
            minute: expand(&state.minute),
            time_zone: expand(&state.time_zone),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedRetentionPolicy {
    pub schedule: Value<TargetSchedule>,
    pub retention: Value<Retention>,
    pub run_type: Value<String>,
    pub config_id: Value<String>,
}

impl WithAttributes for ExtendedRetentionPolicy {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "schedule" => object::<TargetSchedule>(
                usage,
                "Specifies a schedule frequency and unit for the extended retention.",
                usage.optional(),
            ),
            "retention" => object::<Retention>(
                usage,
                "Specifies the retention of the snapshots.",
                usage.optional(),
            ),
            "run_type" => string(
                "The backup run type to which this extended retention applies.",
                usage.optional(),
            ),
            "config_id" => string(
                "Specifies the unique identifier of the retention, only needed when the policy is updated.",
                usage.optional(),
            ),
        }
    }
}

impl From<&models::ExtendedRetentionPolicy> for ExtendedRetentionPolicy {
    fn from(model: &models::ExtendedRetentionPolicy) -> Self {
        Self {
            schedule: flatten(&model.schedule),
            retention: flatten(&model.retention),
            run_type: model.run_type.clone().into(),
            config_id: model.config_id.clone().into(),
        }
    }
}

impl From<&ExtendedRetentionPolicy> for models::ExtendedRetentionPolicy {
    fn from(state: &ExtendedRetentionPolicy) -> Self {
        Self {
            schedule: expand_object(&state.schedule),
            retention: expand_object(&state.retention),
            run_type: expand(&state.run_type),
            config_id: expand(&state.config_id),
        }
    }
}

/// Copy or retention schedule of a target
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSchedule {
    pub unit: Value<String>,
    pub frequency: ValueNumber,
}

impl WithAttributes for TargetSchedule {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "unit" => string(
                "Specifies the unit of the schedule: Runs, Hours, Days, Weeks, Months or Years.",
                usage.optional(),
            ),
            "frequency" => number(
                "Specifies a factor to multiply the unit by.",
                usage.optional(),
            ),
        }
    }
}

impl From<&models::TargetSchedule> for TargetSchedule {
    fn from(model: &models::TargetSchedule) -> Self {
        Self {
            unit: model.unit.clone().into(),
            frequency: model.frequency.into(),
        }
    }
}

impl From<&TargetSchedule> for models::TargetSchedule {
    fn from(state: &TargetSchedule) -> Self {
        Self {
            unit: expand(&state.unit),
            frequency: expand(&state.frequency),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetsConfiguration {
    pub replication_targets: ValueList<ReplicationTarget>,
    pub archival_targets: ValueList<ArchivalTarget>,
    pub cloud_spin_targets: ValueList<CloudSpinTargetConfiguration>,
}

impl WithAttributes for TargetsConfiguration {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "replication_targets" => objects::<ReplicationTarget>(
                usage,
                "Specifies the replication targets.",
                usage.optional(),
            ),
            "archival_targets" => objects::<ArchivalTarget>(
                usage,
                "Specifies the archival targets.",
                usage.optional(),
            ),
            "cloud_spin_targets" => objects::<CloudSpinTargetConfiguration>(
                usage,
                "Specifies the cloud spin targets.",
                usage.optional(),
            ),
        }
    }
}

impl From<&models::TargetsConfiguration> for TargetsConfiguration {
    fn from(model: &models::TargetsConfiguration) -> Self {
        Self {
            replication_targets: flatten_list(&model.replication_targets),
            archival_targets: flatten_list(&model.archival_targets),
            cloud_spin_targets: flatten_list(&model.cloud_spin_targets),
        }
    }
}

impl From<&TargetsConfiguration> for models::TargetsConfiguration {
    fn from(state: &TargetsConfiguration) -> Self {
        Self {
            replication_targets: expand_list(&state.replication_targets),
            archival_targets: expand_list(&state.archival_targets),
            cloud_spin_targets: expand_list(&state.cloud_spin_targets),
        }
    }
}

/// Attributes shared by every kind of copy target
fn target_attributes(usage: Usage) -> HashMap<String, Attribute> {
    map! {
        "schedule" => object::<TargetSchedule>(
            usage,
            "Specifies the schedule for copying snapshots to the target.",
            usage.required(),
        ),
        "retention" => object::<Retention>(
            usage,
            "Specifies the retention of the copied snapshots.",
            usage.required(),
        ),
        "copy_on_run_success" => boolean(
            "Specifies if snapshots are copied from the first completely successful run only.",
            usage.optional(),
        ),
        "config_id" => string(
            "Specifies the unique identifier of the target, only needed when the policy is updated.",
            usage.optional(),
        ),
        "backup_run_type" => string(
            "Specifies which type of run should be copied (only Full is supported).",
            usage.optional(),
        ),
        "run_timeouts" => objects::<CancellationTimeout>(
            usage,
            "Specifies the copy timeouts for different type of runs.",
            usage.optional(),
        ),
        "log_retention" => object::<Retention>(
            usage,
            "Specifies the retention of the copied log snapshots.",
            usage.optional(),
        ),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicationTarget {
    pub schedule: Value<TargetSchedule>,
    pub retention: Value<Retention>,
    pub copy_on_run_success: ValueBool,
    pub config_id: Value<String>,
    pub backup_run_type: Value<String>,
    pub run_timeouts: ValueList<CancellationTimeout>,
    pub log_retention: Value<Retention>,
    pub target_type: Value<String>,
    pub remote_target_config: Value<RemoteTargetConfig>,
}

impl WithAttributes for ReplicationTarget {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        let mut attributes = target_attributes(usage);
        attributes.insert(
            "target_type".into(),
            string(
                "Specifies the type of the replication target.",
                usage.optional(),
            ),
        );
        attributes.insert(
            "remote_target_config".into(),
            object::<RemoteTargetConfig>(
                usage,
                "Specifies the remote cluster used as replication target.",
                usage.optional(),
            ),
        );
        attributes
    }
}

impl From<&models::ReplicationTarget> for ReplicationTarget {
    fn from(model: &models::ReplicationTarget) -> Self {
        Self {
            schedule: flatten(&model.schedule),
            retention: flatten(&model.retention),
            copy_on_run_success: model.copy_on_run_success.into(),
            config_id: model.config_id.clone().into(),
            backup_run_type: model.backup_run_type.clone().into(),
            run_timeouts: flatten_list(&model.run_timeouts),
            log_retention: flatten(&model.log_retention),
            target_type: model.target_type.clone().into(),
            remote_target_config: flatten(&model.remote_target_config),
        }
    }
}

impl From<&ReplicationTarget> for models::ReplicationTarget {
    fn from(state: &ReplicationTarget) -> Self {
        Self {
            schedule: expand_object(&state.schedule),
            retention: expand_object(&state.retention),
            copy_on_run_success: expand(&state.copy_on_run_success),
            config_id: expand(&state.config_id),
            backup_run_type: expand(&state.backup_run_type),
            run_timeouts: expand_list(&state.run_timeouts),
            log_retention: expand_object(&state.log_retention),
            target_type: expand(&state.target_type),
            remote_target_config: expand_object(&state.remote_target_config),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteTargetConfig {
    pub cluster_id: ValueNumber,
    pub cluster_name: Value<String>,
}

impl WithAttributes for RemoteTargetConfig {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "cluster_id" => number(
                "Specifies the cluster id of the target replication cluster.",
                usage.optional(),
            ),
            "cluster_name" => string(
                "Specifies the cluster name of the target replication cluster.",
                usage.optional(),
            ),
        }
    }
}

impl From<&models::RemoteTargetConfig> for RemoteTargetConfig {
    fn from(model: &models::RemoteTargetConfig) -> Self {
        Self {
            cluster_id: model.cluster_id.into(),
            cluster_name: model.cluster_name.clone().into(),
        }
    }
}

impl From<&RemoteTargetConfig> for models::RemoteTargetConfig {
    fn from(state: &RemoteTargetConfig) -> Self {
        Self {
            cluster_id: expand(&state.cluster_id),
            cluster_name: expand(&state.cluster_name),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivalTarget {
    pub schedule: Value<TargetSchedule>,
    pub retention: Value<Retention>,
    pub copy_on_run_success: ValueBool,
    pub config_id: Value<String>,
    pub backup_run_type: Value<String>,
    pub run_timeouts: ValueList<CancellationTimeout>,
    pub log_retention: Value<Retention>,
    pub target_id: ValueNumber,
    pub target_name: Value<String>,
    pub target_type: Value<String>,
    pub tier_settings: Value<TierLevelSettings>,
    pub extended_retention: ValueList<ExtendedRetentionPolicy>,
}

impl WithAttributes for ArchivalTarget {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        let archival: HashMap<String, Attribute> = map! {
            "target_id" => number(
                "Specifies the archival target to copy the snapshots to.",
                usage.required(),
            ),
            "target_name" => string(
                "Specifies the archival target name where snapshots are copied.",
                usage.optional(),
            ),
            "target_type" => string(
                "Specifies the archival target type where snapshots are copied.",
                usage.optional(),
            ),
            "tier_settings" => object::<TierLevelSettings>(
                usage,
                "Specifies the tier levels configured with the archival target.",
                usage.optional(),
            ),
            "extended_retention" => objects::<ExtendedRetentionPolicy>(
                usage,
                "Additional retention policies applied to the archived backup.",
                usage.optional(),
            ),
        };
        let mut attributes = target_attributes(usage);
        attributes.extend(archival);
        attributes
    }
}

impl From<&models::ArchivalTarget> for ArchivalTarget {
    fn from(model: &models::ArchivalTarget) -> Self {
        Self {
            schedule: flatten(&model.schedule),
            retention: flatten(&model.retention),
            copy_on_run_success: model.copy_on_run_success.into(),
            config_id: model.config_id.clone().into(),
            backup_run_type: model.backup_run_type.clone().into(),
            run_timeouts: flatten_list(&model.run_timeouts),
            log_retention: flatten(&model.log_retention),
            target_id: model.target_id.into(),
            target_name: model.target_name.clone().into(),
            target_type: model.target_type.clone().into(),
            tier_settings: flatten(&model.tier_settings),
            extended_retention: flatten_list(&model.extended_retention),
        }
    }
}

impl From<&ArchivalTarget> for models::ArchivalTarget {
    fn from(state: &ArchivalTarget) -> Self {
        Self {
            schedule: expand_object(&state.schedule),
            retention: expand_object(&state.retention),
            copy_on_run_success: expand(&state.copy_on_run_success),
            config_id: expand(&state.config_id),
            backup_run_type: expand(&state.backup_run_type),
            run_timeouts: expand_list(&state.run_timeouts),
            log_retention: expand_object(&state.log_retention),
            target_id: expand(&state.target_id),
            target_name: expand(&state.target_name),
            target_type: expand(&state.target_type),
            tier_settings: expand_object(&state.tier_settings),
            extended_retention: expand_list(&state.extended_retention),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudSpinTargetConfiguration {
    pub schedule: Value<TargetSchedule>,
    pub retention: Value<Retention>,
    pub copy_on_run_success: ValueBool,
    pub config_id: Value<String>,
    pub backup_run_type: Value<String>,
    pub run_timeouts: ValueList<CancellationTimeout>,
    pub log_retention: Value<Retention>,
    pub target: Value<CloudSpinTarget>,
}

impl WithAttributes for CloudSpinTargetConfiguration {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        let mut attributes = target_attributes(usage);
        attributes.insert(
            "target".into(),
            object::<CloudSpinTarget>(
                usage,
                "Specifies the cloud spin target where snapshots are converted and stored.",
                usage.required(),
            ),
        );
        attributes
    }
}

impl From<&models::CloudSpinTargetConfiguration> for CloudSpinTargetConfiguration {
    fn from(model: &models::CloudSpinTargetConfiguration) -> Self {
        Self {
            schedule: flatten(&model.schedule),
            retention: flatten(&model.retention),
            copy_on_run_success: model.copy_on_run_success.into(),
            config_id: model.config_id.clone().into(),
            backup_run_type: model.backup_run_type.clone().into(),
            run_timeouts: flatten_list(&model.run_timeouts),
            log_retention: flatten(&model.log_retention),
            target: flatten(&model.target),
        }
    }
}

impl From<&CloudSpinTargetConfiguration> for models::CloudSpinTargetConfiguration {
    fn from(state: &CloudSpinTargetConfiguration) -> Self {
        Self {
            schedule: expand_object(&state.schedule),
            retention: expand_object(&state.retention),
            copy_on_run_success: expand(&state.copy_on_run_success),
            config_id: expand(&state.config_id),
            backup_run_type: expand(&state.backup_run_type),
            run_timeouts: expand_list(&state.run_timeouts),
            log_retention: expand_object(&state.log_retention),
            target: expand_object(&state.target),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudSpinTarget {
    pub id: ValueNumber,
    pub name: Value<String>,
}

impl WithAttributes for CloudSpinTarget {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "id" => number(
                "Specifies the unique id of the cloud spin entity.",
                usage.optional(),
            ),
            "name" => string(
                "Specifies the name of the already added cloud spin target.",
                usage.optional(),
            ),
        }
    }
}

impl From<&models::CloudSpinTarget> for CloudSpinTarget {
    fn from(model: &models::CloudSpinTarget) -> Self {
        Self {
            id: model.id.into(),
            name: model.name.clone().into(),
        }
    }
}

impl From<&CloudSpinTarget> for models::CloudSpinTarget {
    fn from(state: &CloudSpinTarget) -> Self {
        Self {
            id: expand(&state.id),
            name: expand(&state.name),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryOptions {
    pub retries: ValueNumber,
    pub retry_interval_mins: ValueNumber,
}

impl WithAttributes for RetryOptions {
    fn attributes(usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "retries" => number(
                "Specifies the number of times to retry capturing snapshots before the run fails.",
                usage.optional(),
            ),
            "retry_interval_mins" => number(
                "Specifies the number of minutes before retrying a failed protection group.",
                usage.optional(),
            ),
        }
    }
}

impl From<&models::RetryOptions> for RetryOptions {
    fn from(model: &models::RetryOptions) -> Self {
        Self {
            retries: model.retries.into(),
            retry_interval_mins: model.retry_interval_mins.into(),
        }
    }
}

impl From<&RetryOptions> for models::RetryOptions {
    fn from(state: &RetryOptions) -> Self {
        Self {
            retries: expand(&state.retries),
            retry_interval_mins: expand(&state.retry_interval_mins),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use serde_json::json;

    use super::*;
    use crate::schema::assert_matches_attributes;

    /// Policy with every branch of the tree populated
    pub(crate) fn full_policy() -> models::ProtectionPolicy {
        serde_json::from_value(json!({
            "id": "3:1700000000:12",
            "name": "gold",
            "description": "daily backups",
            "backupPolicy": {
                "regular": {
                    "incremental": {"schedule": {"unit": "Hours", "hourSchedule": {"frequency": 6}}},
                    "full": {"schedule": {"unit": "Weeks", "weekSchedule": {"dayOfWeek": ["Sunday"]}}},
                    "fullBackups": [{
                        "schedule": {
                            "unit": "Months",
                            "monthSchedule": {"dayOfWeek": ["Monday"], "weekOfMonth": "First", "dayOfMonth": 1},
                            "yearSchedule": {"dayOfYear": "Last"}
                        },
                        "retention": {"unit": "Months", "duration": 6}
                    }],
                    "retention": {
                        "unit": "Days",
                        "duration": 30,
                        "dataLockConfig": {"mode": "Compliance", "unit": "Days", "duration": 7, "enableWormOnExternalTarget": false}
                    },
                    "primaryBackupTarget": {
                        "targetType": "Archival",
                        "archivalTargetSettings": {
                            "targetId": 42,
                            "targetName": "vault",
                            "tierSettings": {
                                "cloudPlatform": "AWS",
                                "awsTiering": {"tiers": [{"moveAfterUnit": "Days", "moveAfter": 30, "tierType": "kAmazonS3Standard"}]}
                            }
                        }
                    }
                },
                "log": {
                    "schedule": {"unit": "Minutes", "minuteSchedule": {"frequency": 15}},
                    "retention": {"unit": "Days", "duration": 7}
                },
                "bmr": {"schedule": {"unit": "Days", "daySchedule": {"frequency": 1}}},
                "cdp": {"retention": {"unit": "Hours", "duration": 4}},
                "storageArraySnapshot": {"schedule": {"unit": "Hours"}},
                "runTimeouts": [{"timeoutMins": 120, "backupType": "kRegular"}]
            },
            "blackoutWindow": [{
                "day": "Sunday",
                "startTime": {"hour": 1, "minute": 0, "timeZone": "UTC"},
                "endTime": {"hour": 5, "minute": 30},
                "configId": "bw-1"
            }],
            "extendedRetention": [{
                "schedule": {"unit": "Weeks", "frequency": 1},
                "retention": {"unit": "Years", "duration": 1},
                "runType": "Regular"
            }],
            "remoteTargetPolicy": {
                "replicationTargets": [{
                    "schedule": {"unit": "Runs", "frequency": 1},
                    "retention": {"unit": "Days", "duration": 14},
                    "targetType": "RemoteCluster",
                    "remoteTargetConfig": {"clusterId": 7, "clusterName": "dr"},
                    "runTimeouts": [{"timeoutMins": 60}]
                }],
                "archivalTargets": [{
                    "schedule": {"unit": "Days", "frequency": 1},
                    "retention": {"unit": "Years", "duration": 7},
                    "logRetention": {"unit": "Days", "duration": 1},
                    "targetId": 42,
                    "tierSettings": {"cloudPlatform": "Azure", "azureTiering": {"tiers": []}},
                    "extendedRetention": [{"runType": "Full"}]
                }],
                "cloudSpinTargets": [{
                    "schedule": {"unit": "Days"},
                    "retention": {"unit": "Days", "duration": 3},
                    "target": {"id": 9, "name": "spin"}
                }]
            },
            "retryOptions": {"retries": 3, "retryIntervalMins": 5},
            "dataLock": "Administrative",
            "version": 2,
            "isCBSEnabled": false,
            "lastModificationTimeUsecs": 1700000000000000i64,
            "templateId": "tpl",
            "isUsable": true,
            "isReplicated": false,
            "numProtectionGroups": 3,
            "numProtectedObjects": 12
        }))
        .unwrap()
    }

    #[test]
    fn policy_state_matches_attributes() {
        let state = ProtectionPolicy::from(&full_policy());
        for usage in [Usage::Input, Usage::Output] {
            assert_matches_attributes(
                "policy",
                &serde_json::to_value(&state).unwrap(),
                &ProtectionPolicy::attributes(usage),
            );
        }
    }

    #[test]
    fn data_lock_config_is_flattened() {
        let model = models::DataLockConfig {
            mode: Some("Compliance".into()),
            unit: Some("Days".into()),
            duration: Some(1),
            enable_worm_on_external_target: Some(true),
        };
        assert_eq!(
            serde_json::to_value(DataLockConfig::from(&model)).unwrap(),
            json!({
                "mode": "Compliance",
                "unit": "Days",
                "duration": 1,
                "enable_worm_on_external_target": true,
            })
        );
    }

    #[test]
    fn retention_nests_its_data_lock_config() {
        let model = models::Retention {
            unit: Some("Days".into()),
            duration: Some(1),
            data_lock_config: Some(models::DataLockConfig {
                mode: Some("Compliance".into()),
                unit: Some("Days".into()),
                duration: Some(1),
                enable_worm_on_external_target: Some(true),
            }),
        };
        assert_eq!(
            serde_json::to_value(Retention::from(&model)).unwrap(),
            json!({
                "unit": "Days",
                "duration": 1,
                "data_lock_config": {
                    "mode": "Compliance",
                    "unit": "Days",
                    "duration": 1,
                    "enable_worm_on_external_target": true,
                },
            })
        );
    }

    #[test]
    fn aws_tiers_keep_their_order() {
        let tier = |tier_type: &str, move_after: i64| models::Tier {
            move_after_unit: Some("Months".into()),
            move_after: Some(move_after),
            tier_type: Some(tier_type.into()),
        };
        let model = models::Tiers {
            tiers: Some(vec![
                tier("kAmazonS3Standard", 2),
                tier("kAmazonS3IntelligentTiering", 4),
                tier("kAmazonS3Glacier", 3),
            ]),
        };
        let state = Tiers::from(&model);
        let types: Vec<_> = state
            .tiers
            .iter()
            .flatten()
            .map(|tier| tier.tier_type.as_ref_option().cloned())
            .collect();
        assert_eq!(
            types,
            vec![
                Some("kAmazonS3Standard".to_owned()),
                Some("kAmazonS3IntelligentTiering".to_owned()),
                Some("kAmazonS3Glacier".to_owned()),
            ]
        );
        assert_eq!(
            serde_json::to_value(&state).unwrap()["tiers"][1],
            json!({"move_after_unit": "Months", "move_after": 4, "tier_type": "kAmazonS3IntelligentTiering"})
        );
    }

    #[test]
    fn absent_fields_are_null() {
        let model = models::Retention {
            unit: Some("Days".into()),
            ..Default::default()
        };
        let state = Retention::from(&model);
        assert_eq!(state.duration, Value::Null);
        assert_eq!(state.data_lock_config, Value::Null);
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({"unit": "Days", "duration": null, "data_lock_config": null})
        );
    }

    #[test]
    fn expand_reverses_flatten() {
        let model = full_policy();
        let state = ProtectionPolicy::from(&model);
        assert_eq!(models::ProtectionPolicy::from(&state), model);
    }

    #[test]
    fn unknown_values_are_not_sent() {
        let state = ProtectionPolicy {
            name: Value::Value("gold".into()),
            version: Value::Unknown,
            backup_policy: Value::Unknown,
            ..Default::default()
        };
        let model = models::ProtectionPolicy::from(&state);
        assert_eq!(model.version, None);
        assert_eq!(model.backup_policy, None);
        assert_eq!(
            serde_json::to_value(&model).unwrap(),
            json!({"name": "gold"})
        );
    }
}
