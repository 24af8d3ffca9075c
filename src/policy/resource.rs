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

use tf_provider::schema::{Block, Description, Schema};
use tf_provider::value::{Value, ValueEmpty};
use tf_provider::{AttributePath, Diagnostics, Resource};

use crate::client::ClientSlot;
use crate::models;
use crate::schema::{Usage, WithAttributes};
use crate::utils::{connected_client, expand, report_api_error};

use super::state::ProtectionPolicy;

/// Protection policy managed by Terraform
#[derive(Debug, Clone, Default)]
pub struct ProtectionPolicyResource {
    client: ClientSlot,
}

impl ProtectionPolicyResource {
    pub fn new(client: ClientSlot) -> Self {
        Self { client }
    }
}

fn validate_policy(diags: &mut Diagnostics, policy: &ProtectionPolicy) {
    match &policy.name {
        Value::Value(name) => {
            if name.is_empty() {
                diags.error_short("`name` should not be empty", AttributePath::new("name"));
            }
        }
        Value::Null => {
            diags.error_short("`name` should not be null", AttributePath::new("name"));
        }
        Value::Unknown => (),
    }

    match &policy.backup_policy {
        Value::Value(backup_policy) => {
            if backup_policy.regular.is_null() {
                diags.error_short(
                    "`regular` backup settings are required",
                    AttributePath::new("backup_policy").attribute("regular"),
                );
            }
        }
        Value::Null => {
            diags.error_short(
                "`backup_policy` should not be null",
                AttributePath::new("backup_policy"),
            );
        }
        Value::Unknown => (),
    }
}

#[async_trait]
impl Resource for ProtectionPolicyResource {
    type State<'a> = ProtectionPolicy;
    type PrivateState<'a> = ValueEmpty;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(Schema {
            version: 1,
            block: Block {
                version: 1,
                attributes: ProtectionPolicy::attributes(Usage::Input),
                description: Description::plain(
                    "Protection policy: backup schedules, retentions and copy targets",
                ),
                ..Default::default()
            },
        })
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        validate_policy(diags, &config);

        if diags.errors.len() == 0 {
            Some(())
        } else {
            None
        }
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        state: Self::State<'a>,
        private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let Value::Value(id) = &state.id else {
            diags.root_error_short("Protection policy has no id");
            return None;
        };
        let client = connected_client(&self.client, diags).await?;

        match client.get_protection_policy_by_id(id).await {
            Ok(policy) => {
                let mut refreshed = ProtectionPolicy::from(&policy);
                if refreshed.id.is_null() {
                    refreshed.id = state.id.clone();
                }
                Some((refreshed, private_state))
            }
            Err(err) if err.is_not_found() => {
                tracing::warn!("Protection policy {} was deleted outside of Terraform", id);
                None
            }
            Err(err) => {
                report_api_error(diags, "GetProtectionPolicyById", &err);
                Some((state, private_state))
            }
        }
    }

    async fn plan_create<'a>(
        &self,
        _diags: &mut Diagnostics,
        proposed_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let mut state = proposed_state;
        state.mark_computed_unknown();

        Some((state, Default::default()))
    }

    async fn plan_update<'a>(
        &self,
        _diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        proposed_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        prior_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>, Vec<AttributePath>)> {
        let mut state = proposed_state.keep_computed(&prior_state);

        if !state.same_user_attributes(&prior_state) {
            state.version = Value::Unknown;
            state.last_modification_time_usecs = Value::Unknown;
        }

        Some((state, prior_private_state, vec![]))
    }

    async fn plan_destroy<'a>(
        &self,
        _diags: &mut Diagnostics,
        _prior_state: Self::State<'a>,
        prior_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::PrivateState<'a>> {
        Some(prior_private_state)
    }

    async fn create<'a>(
        &self,
        diags: &mut Diagnostics,
        planned_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        planned_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let client = connected_client(&self.client, diags).await?;
        let request = models::ProtectionPolicy::from(&planned_state);
        tracing::info!(
            "Creating protection policy {}",
            request.name.as_deref().unwrap_or_default()
        );

        let response = match client.create_protection_policy(&request).await {
            Ok(response) => response,
            Err(err) => {
                report_api_error(diags, "CreateProtectionPolicy", &err);
                return None;
            }
        };

        if response.id.is_none() {
            diags.root_error_short("CreateProtectionPolicy returned a policy without id");
            return None;
        }

        Some((planned_state.with_computed(&response), planned_private_state))
    }

    async fn update<'a>(
        &self,
        diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        planned_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        planned_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let Value::Value(id) = &prior_state.id else {
            diags.root_error_short("Protection policy has no id");
            return None;
        };
        let client = connected_client(&self.client, diags).await?;

        // The server rejects updates whose modification time is stale
        let mut request = models::ProtectionPolicy::from(&planned_state);
        request.id = Some(id.clone());
        request.version = expand(&prior_state.version);
        request.last_modification_time_usecs = expand(&prior_state.last_modification_time_usecs);
        tracing::info!("Updating protection policy {}", id);

        let response = match client.update_protection_policy(id, &request).await {
            Ok(response) => response,
            Err(err) => {
                report_api_error(diags, "UpdateProtectionPolicy", &err);
                return None;
            }
        };

        let mut state = planned_state.with_computed(&response);
        if state.id.is_null() {
            state.id = prior_state.id.clone();
        }

        Some((state, planned_private_state))
    }

    async fn destroy<'a>(
        &self,
        diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        _planned_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<()> {
        let Value::Value(id) = &prior_state.id else {
            return Some(());
        };
        let client = connected_client(&self.client, diags).await?;
        tracing::info!("Deleting protection policy {}", id);

        match client.delete_protection_policy(id).await {
            Ok(()) => Some(()),
            Err(err) if err.is_not_found() => {
                tracing::info!("Protection policy {} was already deleted", id);
                Some(())
            }
            Err(err) => {
                report_api_error(diags, "DeleteProtectionPolicy", &err);
                None
            }
        }
    }

    async fn import<'a>(
        &self,
        diags: &mut Diagnostics,
        id: String,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        if id.is_empty() {
            diags.root_error_short("Protection policy id should not be empty");
            return None;
        }
        let client = connected_client(&self.client, diags).await?;

        match client.get_protection_policy_by_id(&id).await {
            Ok(policy) => {
                let mut state = ProtectionPolicy::from(&policy);
                if state.id.is_null() {
                    state.id = Value::Value(id);
                }
                Some((state, Default::default()))
            }
            Err(err) => {
                report_api_error(diags, "GetProtectionPolicyById", &err);
                None
            }
        }
    }
}
