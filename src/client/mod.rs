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

//! HTTP client of the Backup & Recovery API
//!
//! Every operation issues exactly one request. There is no retry, no pagination and no caching:
//! any failure is returned to the caller as is.

pub mod error;
pub mod options;

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::models::{
    ProtectionGroup, ProtectionGroupRun, ProtectionGroupRunsResponse, ProtectionGroupsResponse,
    ProtectionPoliciesResponse, ProtectionPolicy, ReportsResponse,
};

pub use error::{ApiError, ClientError};
pub use options::{
    ProtectionGroupOptions, ProtectionGroupRunOptions, ProtectionGroupRunsOptions, ProtectionGroupsOptions,
    ProtectionPoliciesOptions, Query, ReportsOptions,
};

/// User agent sent when the provider configuration does not override it
pub const DEFAULT_USER_AGENT: &str = concat!(
    "terraform-provider-backuprecovery/",
    env!("CARGO_PKG_VERSION")
);

/// Header carrying the tenant of every request
pub const TENANT_HEADER: &str = "x-ibm-tenant-id";

/// Connection settings of the client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub auth_token: String,
    pub tenant_id: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BackupRecoveryClient {
    http: Client,
    endpoint: String,
    base: Url,
}

impl BackupRecoveryClient {
    /// Build a client from its configuration
    ///
    /// The token and the tenant are installed as default headers, so they are sent on every request.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let endpoint = config.endpoint.trim();
        if !is_http_url(endpoint) {
            return Err(ClientError::InvalidEndpoint(config.endpoint.clone()));
        }
        let base = match Url::parse(endpoint) {
            Ok(base) if !base.cannot_be_a_base() => base,
            _ => return Err(ClientError::InvalidEndpoint(config.endpoint.clone())),
        };
        if config.auth_token.trim().is_empty() {
            return Err(ClientError::MissingToken);
        }

        let mut headers = HeaderMap::new();
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", config.auth_token))
            .map_err(|_| ClientError::InvalidHeader("Authorization"))?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);

        if let Some(tenant_id) = &config.tenant_id {
            let tenant_id = HeaderValue::from_str(tenant_id)
                .map_err(|_| ClientError::InvalidHeader(TENANT_HEADER))?;
            headers.insert(TENANT_HEADER, tenant_id);
        }

        let http = Client::builder()
            .user_agent(config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
            .default_headers(headers)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_owned(),
            base,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Endpoint followed by the given path segments, each one percent-encoded
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // `new` only accepts endpoints that can be a base
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Send a request and return the raw body of a successful response
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &[&str],
        query: &Query,
        body: Option<&B>,
    ) -> Result<String, ApiError> {
        let url = self.url(path);
        tracing::debug!("{} {}", method, url);

        let mut request = self.http.request(method, url.clone());
        if !query.is_empty() {
            request = request.query(query.pairs());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("Request to {} failed: {}", url, err);
                return Err(err.into());
            }
        };

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::error!("API error: {} - {}", status, error::truncate(&text));
            return Err(ApiError::from_response(status, &text));
        }

        Ok(text)
    }

    async fn get<T: DeserializeOwned>(&self, path: &[&str], query: &Query) -> Result<T, ApiError> {
        let body = self.send::<()>(Method::GET, path, query, None).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn write<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &[&str],
        body: &B,
    ) -> Result<T, ApiError> {
        let body = self.send(method, path, &Query::new(), Some(body)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// `GetProtectionPolicies`
    pub async fn get_protection_policies(
        &self,
        options: &ProtectionPoliciesOptions,
    ) -> Result<ProtectionPoliciesResponse, ApiError> {
        self.get(&["data-protect", "policies"], &options.query()).await
    }

    /// `GetProtectionPolicyById`
    pub async fn get_protection_policy_by_id(
        &self,
        id: &str,
    ) -> Result<ProtectionPolicy, ApiError> {
        self.get(&["data-protect", "policies", id], &Query::new())
            .await
    }

    /// `CreateProtectionPolicy`
    pub async fn create_protection_policy(
        &self,
        policy: &ProtectionPolicy,
    ) -> Result<ProtectionPolicy, ApiError> {
        self.write(Method::POST, &["data-protect", "policies"], policy)
            .await
    }

    /// `UpdateProtectionPolicy`
    pub async fn update_protection_policy(
        &self,
        id: &str,
        policy: &ProtectionPolicy,
    ) -> Result<ProtectionPolicy, ApiError> {
        self.write(Method::PUT, &["data-protect", "policies", id], policy)
            .await
    }

    /// `DeleteProtectionPolicy`
    ///
    /// The API answers with an empty body, which is ignored.
    pub async fn delete_protection_policy(&self, id: &str) -> Result<(), ApiError> {
        self.send::<()>(
            Method::DELETE,
            &["data-protect", "policies", id],
            &Query::new(),
            None,
        )
        .await?;
        Ok(())
    }

    /// `GetProtectionGroups`
    pub async fn get_protection_groups(
        &self,
        options: &ProtectionGroupsOptions,
    ) -> Result<ProtectionGroupsResponse, ApiError> {
        self.get(&["data-protect", "protection-groups"], &options.query())
            .await
    }

    /// `GetProtectionGroupById`
    pub async fn get_protection_group_by_id(
        &self,
        id: &str,
        options: &ProtectionGroupOptions,
    ) -> Result<ProtectionGroup, ApiError> {
        self.get(
            &["data-protect", "protection-groups", id],
            &options.query(),
        )
        .await
    }

    /// `GetProtectionGroupRuns`
    pub async fn get_protection_group_runs(
        &self,
        id: &str,
        options: &ProtectionGroupRunsOptions,
    ) -> Result<ProtectionGroupRunsResponse, ApiError> {
        self.get(
            &["data-protect", "protection-groups", id, "runs"],
            &options.query(),
        )
        .await
    }

    /// `GetProtectionGroupRun`
    pub async fn get_protection_group_run(
        &self,
        id: &str,
        run_id: &str,
        options: &ProtectionGroupRunOptions,
    ) -> Result<ProtectionGroupRun, ApiError> {
        self.get(
            &["data-protect", "protection-groups", id, "runs", run_id],
            &options.query(),
        )
        .await
    }

    /// `GetReports`
    pub async fn get_reports(&self, options: &ReportsOptions) -> Result<ReportsResponse, ApiError> {
        self.get(&["reports"], &options.query()).await
    }
}

pub(crate) fn is_http_url(endpoint: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        endpoint
            .strip_prefix(scheme)
            .is_some_and(|host| !host.is_empty())
    })
}

/// Client shared by the provider, its data sources and its resources
///
/// The slot is empty until the provider is configured.
#[derive(Debug, Clone, Default)]
pub struct ClientSlot(Arc<RwLock<Option<Arc<BackupRecoveryClient>>>>);

impl ClientSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot already holding a client
    pub fn with_client(client: BackupRecoveryClient) -> Self {
        Self(Arc::new(RwLock::new(Some(Arc::new(client)))))
    }

    pub async fn set(&self, client: BackupRecoveryClient) {
        *self.0.write().await = Some(Arc::new(client));
    }

    pub async fn get(&self) -> Result<Arc<BackupRecoveryClient>, ClientError> {
        self.0.read().await.clone().ok_or(ClientError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(endpoint: &str, auth_token: &str) -> ClientConfig {
        ClientConfig {
            endpoint: endpoint.to_owned(),
            auth_token: auth_token.to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn endpoint_must_be_http() {
        for endpoint in ["", "host/v2", "ftp://host", "https://"] {
            assert!(matches!(
                BackupRecoveryClient::new(&config(endpoint, "token")),
                Err(ClientError::InvalidEndpoint(_))
            ));
        }
    }

    #[test]
    fn token_must_not_be_empty() {
        assert!(matches!(
            BackupRecoveryClient::new(&config("https://host/v2", "  ")),
            Err(ClientError::MissingToken)
        ));
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let client = BackupRecoveryClient::new(&config("https://host/v2/", "token")).unwrap();
        assert_eq!(client.endpoint(), "https://host/v2");
        assert_eq!(client.url(&["reports"]).as_str(), "https://host/v2/reports");
    }

    #[test]
    fn path_segments_are_escaped() {
        let client = BackupRecoveryClient::new(&config("https://host/v2", "token")).unwrap();
        assert_eq!(
            client
                .url(&["data-protect", "policies", "../../reports"])
                .as_str(),
            "https://host/v2/data-protect/policies/..%2F..%2Freports"
        );
        assert_eq!(
            client.url(&["data-protect", "policies", "a:1:2?x#y"]).as_str(),
            "https://host/v2/data-protect/policies/a:1:2%3Fx%23y"
        );
    }

    #[test]
    fn invalid_tenant_is_rejected() {
        let mut config = config("https://host/v2", "token");
        config.tenant_id = Some("tenant\n".to_owned());
        assert!(matches!(
            BackupRecoveryClient::new(&config),
            Err(ClientError::InvalidHeader(TENANT_HEADER))
        ));
    }

    #[tokio::test]
    async fn empty_slot_is_not_configured() {
        let slot = ClientSlot::new();
        assert!(matches!(slot.get().await, Err(ClientError::NotConfigured)));

        let client = BackupRecoveryClient::new(&config("https://host/v2", "token")).unwrap();
        slot.set(client).await;
        assert_eq!(slot.get().await.unwrap().endpoint(), "https://host/v2");
    }
}
