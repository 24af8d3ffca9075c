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

//! Terraform provider for the Backup & Recovery API
//!
//! Protection policies, protection groups, their runs and the report descriptors are exposed as
//! data sources. Protection policies can also be managed with the `protection_policy` resource.

pub mod client;
pub mod group;
pub mod models;
pub mod policy;
pub mod report;
pub mod schema;

mod provider;
mod utils;

pub use client::{ApiError, BackupRecoveryClient, ClientConfig, ClientError, ClientSlot};
pub use provider::{BackupRecoveryProvider, ProviderConfig};
