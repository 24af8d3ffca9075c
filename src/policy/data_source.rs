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

use crate::client::{ClientSlot, ProtectionPoliciesOptions};
use crate::schema::{boolean, objects, string, strings, Usage, WithAttributes};
use crate::utils::{
    connected_client, filter_list, filter_string, filter_value, flatten_list, report_api_error,
    timestamp_id,
};

use super::state::{
    BackupPolicy, BlackoutWindow, ExtendedRetentionPolicy, ProtectionPolicy, RetryOptions,
    TargetsConfiguration,
};

/// List of protection policies, filtered on the server
#[derive(Debug, Clone, Default)]
pub struct ProtectionPoliciesDataSource {
    client: ClientSlot,
}

impl ProtectionPoliciesDataSource {
    pub fn new(client: ClientSlot) -> Self {
        Self { client }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProtectionPoliciesState<'a> {
    pub id: Value<String>,
    #[serde(borrow = "'a")]
    pub request_initiator_type: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub ids: ValueList<ValueString<'a>>,
    #[serde(borrow = "'a")]
    pub policy_names: ValueList<ValueString<'a>>,
    #[serde(borrow = "'a")]
    pub types: ValueList<ValueString<'a>>,
    #[serde(borrow = "'a")]
    pub tenant_ids: ValueList<ValueString<'a>>,
    pub include_tenants: ValueBool,
    pub exclude_linked_policies: ValueBool,
    pub include_replicated_policies: ValueBool,
    pub include_stats: ValueBool,
    pub policies: ValueList<ProtectionPolicy>,
}

impl ProtectionPoliciesState<'_> {
    fn options(&self) -> ProtectionPoliciesOptions {
        ProtectionPoliciesOptions {
            request_initiator_type: filter_string(&self.request_initiator_type),
            ids: filter_list(&self.ids),
            policy_names: filter_list(&self.policy_names),
            types: filter_list(&self.types),
            tenant_ids: filter_list(&self.tenant_ids),
            include_tenants: filter_value(&self.include_tenants),
            exclude_linked_policies: filter_value(&self.exclude_linked_policies),
            include_replicated_policies: filter_value(&self.include_replicated_policies),
            include_stats: filter_value(&self.include_stats),
        }
    }
}

#[async_trait]
impl DataSource for ProtectionPoliciesDataSource {
    type State<'a> = ProtectionPoliciesState<'a>;
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
                    "ids" => strings("Filter policies by a list of policy ids.", filter.clone()),
                    "policy_names" => strings("Filter policies by a list of policy names.", filter.clone()),
                    "types" => strings(
                        "Filter policies by policy type (Regular, Internal).",
                        filter.clone(),
                    ),
                    "tenant_ids" => strings(
                        "Return the policies of these tenants and of the tenants they include.",
                        filter.clone(),
                    ),
                    "include_tenants" => boolean(
                        "Return the policies of all the organizations under the hierarchy of the logged in user.",
                        filter.clone(),
                    ),
                    "exclude_linked_policies" => boolean(
                        "Only return local policies, excluding policies linked to templates.",
                        filter.clone(),
                    ),
                    "include_replicated_policies" => boolean(
                        "Also return replicated policies.",
                        filter.clone(),
                    ),
                    "include_stats" => boolean(
                        "Return the number of protection groups and objects of each policy.",
                        filter,
                    ),
                    "policies" => objects::<ProtectionPolicy>(
                        Usage::Output,
                        "Specifies a list of protection policies.",
                        Usage::computed(),
                    ),
                },
                description: Description::plain("List of protection policies"),
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

        let response = match client.get_protection_policies(&config.options()).await {
            Ok(response) => response,
            Err(err) => {
                report_api_error(diags, "GetProtectionPolicies", &err);
                return None;
            }
        };

        let mut state = config;
        state.id = Value::Value(timestamp_id());
        state.policies = flatten_list(&response.policies);

        Some(state)
    }
}

/// A single protection policy, looked up by id
#[derive(Debug, Clone, Default)]
pub struct ProtectionPolicyDataSource {
    client: ClientSlot,
}

impl ProtectionPolicyDataSource {
    pub fn new(client: ClientSlot) -> Self {
        Self { client }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProtectionPolicyState<'a> {
    #[serde(borrow = "'a")]
    pub protection_policy_id: ValueString<'a>,
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

impl<'a> ProtectionPolicyState<'a> {
    /// Fill the state with a policy, keeping the requested id
    fn with_policy(self, policy: ProtectionPolicy) -> Self {
        let id = match policy.id {
            Value::Value(id) => Value::Value(id),
            _ => Value::Value(self.protection_policy_id.as_str().to_owned()),
        };
        Self {
            protection_policy_id: self.protection_policy_id,
            id,
            name: policy.name,
            backup_policy: policy.backup_policy,
            description: policy.description,
            blackout_window: policy.blackout_window,
            extended_retention: policy.extended_retention,
            remote_target_policy: policy.remote_target_policy,
            retry_options: policy.retry_options,
            data_lock: policy.data_lock,
            version: policy.version,
            is_cbs_enabled: policy.is_cbs_enabled,
            last_modification_time_usecs: policy.last_modification_time_usecs,
            template_id: policy.template_id,
            is_usable: policy.is_usable,
            is_replicated: policy.is_replicated,
            num_protection_groups: policy.num_protection_groups,
            num_protected_objects: policy.num_protected_objects,
        }
    }
}

#[async_trait]
impl DataSource for ProtectionPolicyDataSource {
    type State<'a> = ProtectionPolicyState<'a>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        let mut attributes = ProtectionPolicy::attributes(Usage::Output);
        attributes.insert(
            "protection_policy_id".into(),
            string(
                "Specifies a unique id of the protection policy.",
                Usage::Input.required(),
            ),
        );
        Some(Schema {
            version: 1,
            block: Block {
                version: 1,
                attributes,
                description: Description::plain("Protection policy"),
                ..Default::default()
            },
        })
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        match &config.protection_policy_id {
            Value::Value(id) => {
                if id.is_empty() {
                    diags.error_short(
                        "`protection_policy_id` should not be empty",
                        AttributePath::new("protection_policy_id"),
                    );
                }
            }
            Value::Null => {
                diags.error_short(
                    "`protection_policy_id` should not be null",
                    AttributePath::new("protection_policy_id"),
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

        let policy = match client
            .get_protection_policy_by_id(config.protection_policy_id.as_str())
            .await
        {
            Ok(policy) => policy,
            Err(err) => {
                report_api_error(diags, "GetProtectionPolicyById", &err);
                return None;
            }
        };

        Some(config.with_policy(ProtectionPolicy::from(&policy)))
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;
    use crate::models;
    use crate::schema::assert_matches_attributes;

    #[test]
    fn filters_become_options() {
        let state = ProtectionPoliciesState {
            ids: Value::Value(vec![Value::Value(Cow::Borrowed("1:2:3"))]),
            policy_names: Value::Value(vec![]),
            include_stats: Value::Value(false),
            exclude_linked_policies: Value::Unknown,
            ..Default::default()
        };
        assert_eq!(
            state.options(),
            ProtectionPoliciesOptions {
                ids: Some(vec!["1:2:3".to_owned()]),
                include_stats: Some(false),
                ..Default::default()
            }
        );
    }

    #[test]
    fn list_state_matches_schema() {
        let state = ProtectionPoliciesState {
            id: Value::Value(timestamp_id()),
            policies: flatten_list(&Some(vec![super::super::state::tests::full_policy()])),
            ..Default::default()
        };
        let schema = ProtectionPoliciesDataSource::default()
            .schema(&mut Diagnostics::default())
            .unwrap();
        assert_matches_attributes(
            "protection_policies",
            &serde_json::to_value(&state).unwrap(),
            &schema.block.attributes,
        );
    }

    #[test]
    fn single_state_matches_schema() {
        let state = ProtectionPolicyState {
            protection_policy_id: Value::Value(Cow::Borrowed("3:1700000000:12")),
            ..Default::default()
        }
        .with_policy(ProtectionPolicy::from(
            &super::super::state::tests::full_policy(),
        ));
        assert_eq!(state.id, Value::Value("3:1700000000:12".to_owned()));
        let schema = ProtectionPolicyDataSource::default()
            .schema(&mut Diagnostics::default())
            .unwrap();
        assert_matches_attributes(
            "protection_policy",
            &serde_json::to_value(&state).unwrap(),
            &schema.block.attributes,
        );
    }

    #[test]
    fn missing_policy_id_falls_back_to_the_requested_one() {
        let state = ProtectionPolicyState {
            protection_policy_id: Value::Value(Cow::Borrowed("3:1:1")),
            ..Default::default()
        }
        .with_policy(ProtectionPolicy::from(&models::ProtectionPolicy::default()));
        assert_eq!(state.id, Value::Value("3:1:1".to_owned()));
        assert_eq!(state.name, Value::Null);
    }

    #[tokio::test]
    async fn empty_policy_id_is_rejected() {
        let mut diags = Diagnostics::default();
        let config = ProtectionPolicyState {
            protection_policy_id: Value::Value(Cow::Borrowed("")),
            ..Default::default()
        };
        assert!(ProtectionPolicyDataSource::default()
            .validate(&mut diags, config)
            .await
            .is_none());
        assert_eq!(diags.errors.len(), 1);
    }
}
