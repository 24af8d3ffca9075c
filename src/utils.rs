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

use std::sync::Arc;

use tf_provider::value::{Value, ValueList, ValueString};
use tf_provider::Diagnostics;

use crate::client::{ApiError, BackupRecoveryClient, ClientSlot};

/// Synthetic identifier of list data sources
pub(crate) fn timestamp_id() -> String {
    time::OffsetDateTime::now_utc().to_string()
}

/// Fetch the configured client, or report why there is none
pub(crate) async fn connected_client(
    slot: &ClientSlot,
    diags: &mut Diagnostics,
) -> Option<Arc<BackupRecoveryClient>> {
    match slot.get().await {
        Ok(client) => Some(client),
        Err(err) => {
            diags.root_error("initialize-client failed", err.to_string());
            None
        }
    }
}

pub(crate) fn report_api_error(diags: &mut Diagnostics, operation: &str, err: &ApiError) {
    tracing::error!("{} failed: {}", operation, err);
    diags.root_error(format!("{operation} failed"), err.to_string());
}

// Model to state

pub(crate) fn flatten<M, S>(model: &Option<M>) -> Value<S>
where
    S: for<'m> From<&'m M>,
{
    model.as_ref().map(S::from).into()
}

pub(crate) fn flatten_list<M, S>(models: &Option<Vec<M>>) -> ValueList<S>
where
    S: for<'m> From<&'m M>,
{
    models
        .as_ref()
        .map(|models| models.iter().map(S::from).collect())
        .into()
}

pub(crate) fn flatten_strings(values: &Option<Vec<String>>) -> ValueList<Value<String>> {
    values
        .as_ref()
        .map(|values| values.iter().cloned().map(Value::Value).collect())
        .into()
}

// State to model

/// Null and unknown values are both absent from the model
pub(crate) fn expand<T: Clone>(value: &Value<T>) -> Option<T> {
    value.as_ref_option().cloned()
}

pub(crate) fn expand_object<S, M>(value: &Value<S>) -> Option<M>
where
    M: for<'s> From<&'s S>,
{
    value.as_ref_option().map(M::from)
}

pub(crate) fn expand_list<S, M>(values: &ValueList<S>) -> Option<Vec<M>>
where
    M: for<'s> From<&'s S>,
{
    values
        .as_ref_option()
        .map(|values| values.iter().map(M::from).collect())
}

pub(crate) fn expand_strings(values: &ValueList<Value<String>>) -> Option<Vec<String>> {
    values.as_ref_option().map(|values| {
        values
            .iter()
            .filter_map(|value| value.as_ref_option().cloned())
            .collect()
    })
}

// Data source filters

pub(crate) fn filter_string(value: &ValueString<'_>) -> Option<String> {
    value.as_deref_option().map(str::to_owned)
}

pub(crate) fn filter_value<T: Copy>(value: &Value<T>) -> Option<T> {
    value.as_ref_option().copied()
}

/// An empty list is not sent
pub(crate) fn filter_list(values: &ValueList<ValueString<'_>>) -> Option<Vec<String>> {
    let values: Vec<String> = values
        .iter()
        .flatten()
        .filter_map(|value| value.as_deref_option().map(str::to_owned))
        .collect();
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;

    #[derive(Debug, PartialEq)]
    struct Doubled(i64);

    impl From<&i64> for Doubled {
        fn from(value: &i64) -> Self {
            Doubled(value * 2)
        }
    }

    #[test]
    fn absent_model_is_null() {
        assert_eq!(flatten::<i64, Doubled>(&None), Value::Null);
        assert_eq!(flatten_list::<i64, Doubled>(&None), Value::Null);
        assert_eq!(flatten_strings(&None), Value::Null);
    }

    #[test]
    fn list_order_is_preserved() {
        assert_eq!(
            flatten_list::<i64, Doubled>(&Some(vec![3, 1, 2])),
            Value::Value(vec![Doubled(6), Doubled(2), Doubled(4)])
        );
    }

    #[test]
    fn unknown_is_not_expanded() {
        assert_eq!(expand::<i64>(&Value::Unknown), None);
        assert_eq!(expand(&Value::Value(0)), Some(0));
        assert_eq!(
            expand_strings(&Value::Value(vec![
                Value::Value("a".to_owned()),
                Value::Unknown,
                Value::Value("b".to_owned()),
            ])),
            Some(vec!["a".to_owned(), "b".to_owned()])
        );
    }

    #[test]
    fn filters_keep_explicit_false() {
        assert_eq!(filter_value(&Value::Value(false)), Some(false));
        assert_eq!(filter_value::<bool>(&Value::Null), None);
        assert_eq!(filter_value::<bool>(&Value::Unknown), None);
        assert_eq!(filter_string(&Value::Value(Cow::Borrowed("x"))), Some("x".to_owned()));
    }

    #[test]
    fn empty_filter_list_is_absent() {
        assert_eq!(filter_list(&Value::Value(vec![])), None);
        assert_eq!(filter_list(&Value::Null), None);
        assert_eq!(
            filter_list(&Value::Value(vec![
                Value::Value(Cow::Borrowed("a")),
                Value::Null,
            ])),
            Some(vec!["a".to_owned()])
        );
    }

    #[test]
    fn timestamp_id_is_not_empty() {
        assert!(!timestamp_id().is_empty());
    }
}
