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
use tf_provider::value::{Value, ValueEmpty, ValueList, ValueString};
use tf_provider::{map, DataSource, Diagnostics};

use crate::client::{ClientSlot, ReportsOptions};
use crate::models;
use crate::schema::{objects, string, strings, Usage, WithAttributes};
use crate::utils::{
    connected_client, filter_list, flatten_list, flatten_strings, report_api_error, timestamp_id,
};

/// Report descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: Value<String>,
    pub title: Value<String>,
    pub category: Value<String>,
    pub component_ids: ValueList<Value<String>>,
    pub description: Value<String>,
    pub supported_user_contexts: ValueList<Value<String>>,
}

impl WithAttributes for Report {
    fn attributes(_usage: Usage) -> HashMap<String, Attribute> {
        map! {
            "id" => string("Specifies the id of the report.", Usage::computed()),
            "title" => string("Specifies the title of the report.", Usage::computed()),
            "category" => string("Specifies the category of the report.", Usage::computed()),
            "component_ids" => strings(
                "Specifies the list of component ids in the report.",
                Usage::computed(),
            ),
            "description" => string("Specifies the description of the report.", Usage::computed()),
            "supported_user_contexts" => strings(
                "Specifies all the supported user contexts for this report.",
                Usage::computed(),
            ),
        }
    }
}

impl From<&models::Report> for Report {
    fn from(model: &models::Report) -> Self {
        Self {
            id: model.id.clone().into(),
            title: model.title.clone().into(),
            category: model.category.clone().into(),
            component_ids: flatten_strings(&model.component_ids),
            description: model.description.clone().into(),
            supported_user_contexts: flatten_strings(&model.supported_user_contexts),
        }
    }
}

/// Reports available on the service
#[derive(Debug, Clone, Default)]
pub struct ReportsDataSource {
    client: ClientSlot,
}

impl ReportsDataSource {
    pub fn new(client: ClientSlot) -> Self {
        Self { client }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportsState<'a> {
    pub id: Value<String>,
    #[serde(borrow = "'a")]
    pub ids: ValueList<ValueString<'a>>,
    pub reports: ValueList<Report>,
}

#[async_trait]
impl DataSource for ReportsDataSource {
    type State<'a> = ReportsState<'a>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(Schema {
            version: 1,
            block: Block {
                version: 1,
                attributes: map! {
                    "id" => string("Timestamp of the read", Usage::computed()),
                    "ids" => strings(
                        "Filter by a list of report ids.",
                        Usage::Input.optional(),
                    ),
                    "reports" => objects::<Report>(
                        Usage::Output,
                        "Specifies the list of reports.",
                        Usage::computed(),
                    ),
                },
                description: Description::plain("List of reports"),
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

        let options = ReportsOptions {
            ids: filter_list(&config.ids),
        };
        let response = match client.get_reports(&options).await {
            Ok(response) => response,
            Err(err) => {
                report_api_error(diags, "GetReports", &err);
                return None;
            }
        };

        let mut state = config;
        state.id = Value::Value(timestamp_id());
        state.reports = flatten_list(&response.reports);

        Some(state)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::schema::assert_matches_attributes;

    #[test]
    fn report_flattens_to_its_attributes() {
        let model: models::Report = serde_json::from_value(json!({
            "category": "Protection",
            "componentIds": ["testString"],
            "id": "testString",
            "supportedUserContexts": ["IBMBaaS"],
            "title": "testString"
        }))
        .unwrap();

        assert_eq!(
            serde_json::to_value(Report::from(&model)).unwrap(),
            json!({
                "category": "Protection",
                "component_ids": ["testString"],
                "description": null,
                "id": "testString",
                "supported_user_contexts": ["IBMBaaS"],
                "title": "testString"
            })
        );
    }

    #[test]
    fn state_matches_schema() {
        let state = ReportsState {
            id: Value::Value(timestamp_id()),
            reports: Value::Value(vec![Report::default()]),
            ..Default::default()
        };
        let schema = ReportsDataSource::default()
            .schema(&mut Diagnostics::default())
            .unwrap();
        assert_matches_attributes(
            "reports",
            &serde_json::to_value(&state).unwrap(),
            &schema.block.attributes,
        );
    }
}
