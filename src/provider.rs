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

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use tf_provider::schema::{Attribute, Block, Description, Schema};
use tf_provider::value::{Value, ValueEmpty, ValueString};
use tf_provider::{
    map, AttributePath, Diagnostics, DynamicDataSource, DynamicResource, Provider,
};

use crate::client::{is_http_url, BackupRecoveryClient, ClientConfig, ClientSlot};
use crate::group::{
    ProtectionGroupDataSource, ProtectionGroupRunDataSource, ProtectionGroupRunsDataSource,
    ProtectionGroupsDataSource,
};
use crate::policy::{
    ProtectionPoliciesDataSource, ProtectionPolicyDataSource, ProtectionPolicyResource,
};
use crate::report::ReportsDataSource;
use crate::schema::{string, Usage};

/// Provider of the Backup & Recovery service
///
/// The client is built by `configure` and shared with every data source and resource.
#[derive(Debug, Clone, Default)]
pub struct BackupRecoveryProvider {
    client: ClientSlot,
}

impl BackupRecoveryProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProviderConfig<'a> {
    #[serde(borrow = "'a")]
    pub endpoint: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub auth_token: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub tenant_id: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub user_agent: ValueString<'a>,
}

impl ProviderConfig<'_> {
    fn client_config(&self) -> ClientConfig {
        ClientConfig {
            endpoint: self.endpoint.as_str().to_owned(),
            auth_token: self.auth_token.as_str().to_owned(),
            tenant_id: self.tenant_id.as_deref_option().map(str::to_owned),
            user_agent: self.user_agent.as_deref_option().map(str::to_owned),
        }
    }
}

#[async_trait]
impl Provider for BackupRecoveryProvider {
    type Config<'a> = ProviderConfig<'a>;
    type MetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        let attributes: HashMap<String, Attribute> = map! {
            "endpoint" => string(
                "Base URL of the Backup & Recovery API, for instance https://host/v2",
                Usage::Input.required(),
            ),
            "auth_token" => Attribute {
                sensitive: true,
                ..string("Bearer token used to authenticate the requests", Usage::Input.required())
            },
            "tenant_id" => string(
                "Tenant sent along every request",
                Usage::Input.optional(),
            ),
            "user_agent" => string(
                "User agent of the requests",
                Usage::Input.optional(),
            ),
        };
        Some(Schema {
            version: 1,
            block: Block {
                version: 1,
                attributes,
                description: Description::plain("backuprecovery"),
                ..Default::default()
            },
        })
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::Config<'a>) -> Option<()> {
        match &config.endpoint {
            Value::Value(endpoint) => {
                if endpoint.is_empty() {
                    diags.error_short(
                        "`endpoint` should not be empty",
                        AttributePath::new("endpoint"),
                    );
                } else if !is_http_url(endpoint.trim()) {
                    diags.error(
                        "`endpoint` is not a valid URL",
                        format!("`{endpoint}` should start with http:// or https://"),
                        AttributePath::new("endpoint"),
                    );
                }
            }
            Value::Null => {
                diags.error_short(
                    "`endpoint` should not be null",
                    AttributePath::new("endpoint"),
                );
            }
            Value::Unknown => (),
        }
        match &config.auth_token {
            Value::Value(auth_token) => {
                if auth_token.is_empty() {
                    diags.error_short(
                        "`auth_token` should not be empty",
                        AttributePath::new("auth_token"),
                    );
                }
            }
            Value::Null => {
                diags.error_short(
                    "`auth_token` should not be null",
                    AttributePath::new("auth_token"),
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

    async fn configure<'a>(
        &self,
        diags: &mut Diagnostics,
        terraform_version: String,
        config: Self::Config<'a>,
    ) -> Option<()> {
        tracing::info!(
            "Configuring the provider for Terraform {} on {}",
            terraform_version,
            config.endpoint.as_str()
        );
        match BackupRecoveryClient::new(&config.client_config()) {
            Ok(client) => {
                self.client.set(client).await;
                Some(())
            }
            Err(err) => {
                tracing::error!("Could not initialize the client: {}", err);
                diags.root_error("initialize-client failed", err.to_string());
                None
            }
        }
    }

    fn get_resources(
        &self,
        _diags: &mut Diagnostics,
    ) -> Option<HashMap<String, Box<dyn DynamicResource>>> {
        Some(map! {
            "protection_policy" => ProtectionPolicyResource::new(self.client.clone()),
        })
    }

    fn get_data_sources(
        &self,
        _diags: &mut Diagnostics,
    ) -> Option<HashMap<String, Box<dyn DynamicDataSource>>> {
        Some(map! {
            "protection_policies" => ProtectionPoliciesDataSource::new(self.client.clone()),
            "protection_policy" => ProtectionPolicyDataSource::new(self.client.clone()),
            "protection_groups" => ProtectionGroupsDataSource::new(self.client.clone()),
            "protection_group" => ProtectionGroupDataSource::new(self.client.clone()),
            "protection_group_run" => ProtectionGroupRunDataSource::new(self.client.clone()),
            "protection_group_runs" => ProtectionGroupRunsDataSource::new(self.client.clone()),
            "reports" => ReportsDataSource::new(self.client.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;

    fn config<'a>(endpoint: &'a str, auth_token: &'a str) -> ProviderConfig<'a> {
        ProviderConfig {
            endpoint: Value::Value(Cow::Borrowed(endpoint)),
            auth_token: Value::Value(Cow::Borrowed(auth_token)),
            ..Default::default()
        }
    }

    #[test]
    fn auth_token_is_sensitive() {
        let schema = BackupRecoveryProvider::new()
            .schema(&mut Diagnostics::default())
            .unwrap();
        assert!(schema.block.attributes["auth_token"].sensitive);
        assert!(!schema.block.attributes["endpoint"].sensitive);
    }

    #[test]
    fn registers_every_entity() {
        let provider = BackupRecoveryProvider::new();
        let mut diags = Diagnostics::default();

        let mut data_sources: Vec<String> = provider
            .get_data_sources(&mut diags)
            .unwrap()
            .into_keys()
            .collect();
        data_sources.sort();
        assert_eq!(
            data_sources,
            [
                "protection_group",
                "protection_group_run",
                "protection_group_runs",
                "protection_groups",
                "protection_policies",
                "protection_policy",
                "reports",
            ]
        );

        let resources: Vec<String> = provider
            .get_resources(&mut diags)
            .unwrap()
            .into_keys()
            .collect();
        assert_eq!(resources, ["protection_policy"]);
    }

    #[tokio::test]
    async fn invalid_endpoint_is_reported_on_its_attribute() {
        let mut diags = Diagnostics::default();
        assert!(BackupRecoveryProvider::new()
            .validate(&mut diags, config("ftp://host", "token"))
            .await
            .is_none());
        assert_eq!(diags.errors.len(), 1);
        assert_eq!(diags.errors[0].summary, "`endpoint` is not a valid URL");
    }

    #[tokio::test]
    async fn unknown_values_are_accepted() {
        let mut diags = Diagnostics::default();
        let config = ProviderConfig {
            endpoint: Value::Unknown,
            auth_token: Value::Unknown,
            ..Default::default()
        };
        assert!(BackupRecoveryProvider::new()
            .validate(&mut diags, config)
            .await
            .is_some());
    }

    #[tokio::test]
    async fn configure_fills_the_shared_slot() {
        let provider = BackupRecoveryProvider::new();
        let mut diags = Diagnostics::default();
        assert!(provider
            .configure(
                &mut diags,
                "1.9.0".to_owned(),
                config("https://backup.example.com/v2/", "token"),
            )
            .await
            .is_some());
        let client = provider.client.get().await.unwrap();
        assert_eq!(client.endpoint(), "https://backup.example.com/v2");
    }

    #[tokio::test]
    async fn configure_failure_names_the_step() {
        let provider = BackupRecoveryProvider::new();
        let mut diags = Diagnostics::default();
        assert!(provider
            .configure(&mut diags, "1.9.0".to_owned(), config("https://host", ""))
            .await
            .is_none());
        assert_eq!(diags.errors[0].summary, "initialize-client failed");
        assert!(provider.client.get().await.is_err());
    }
}
