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

//! Properties of the conversions between API models and Terraform state

use backup_recovery::models;
use backup_recovery::policy::state::{DataLockConfig, Retention, Tiers};
use backup_recovery::report::Report;
use proptest::prelude::*;
use tf_provider::value::Value;

fn arb_data_lock_config() -> impl Strategy<Value = models::DataLockConfig> {
    (
        proptest::option::of(prop_oneof!["Compliance", "Administrative"]),
        proptest::option::of(prop_oneof!["Days", "Weeks", "Months", "Years"]),
        proptest::option::of(0i64..10_000),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(
            |(mode, unit, duration, enable_worm_on_external_target)| models::DataLockConfig {
                mode,
                unit,
                duration,
                enable_worm_on_external_target,
            },
        )
}

fn arb_retention() -> impl Strategy<Value = models::Retention> {
    (
        proptest::option::of(prop_oneof!["Days", "Weeks", "Months", "Years"]),
        proptest::option::of(any::<i64>()),
        proptest::option::of(arb_data_lock_config()),
    )
        .prop_map(|(unit, duration, data_lock_config)| models::Retention {
            unit,
            duration,
            data_lock_config,
        })
}

fn arb_tiers() -> impl Strategy<Value = models::Tiers> {
    let tier = (
        proptest::option::of(prop_oneof!["Days", "Weeks", "Months"]),
        proptest::option::of(1i64..365),
        proptest::option::of("[a-zA-Z0-9]{1,24}"),
    )
        .prop_map(|(move_after_unit, move_after, tier_type)| models::Tier {
            move_after_unit,
            move_after,
            tier_type,
        });
    proptest::option::of(prop::collection::vec(tier, 0..8))
        .prop_map(|tiers| models::Tiers { tiers })
}

fn arb_text() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[ -~]{0,32}")
}

fn arb_texts() -> impl Strategy<Value = Option<Vec<String>>> {
    proptest::option::of(prop::collection::vec("[a-zA-Z]{1,12}", 0..6))
}

fn arb_report() -> impl Strategy<Value = models::Report> {
    (
        arb_text(),
        arb_text(),
        arb_text(),
        arb_texts(),
        arb_text(),
        arb_texts(),
    )
        .prop_map(
            |(id, title, category, component_ids, description, supported_user_contexts)| {
                models::Report {
                    id,
                    title,
                    category,
                    component_ids,
                    description,
                    supported_user_contexts,
                }
            },
        )
}

fn same_as<T: PartialEq>(value: &Value<T>, model: &Option<T>) -> bool {
    match (value, model) {
        (Value::Value(value), Some(model)) => value == model,
        (Value::Null, None) => true,
        _ => false,
    }
}

proptest! {
    #[test]
    fn absent_fields_are_null_and_present_fields_are_equal(model in arb_data_lock_config()) {
        let state = DataLockConfig::from(&model);
        prop_assert!(same_as(&state.mode, &model.mode));
        prop_assert!(same_as(&state.unit, &model.unit));
        prop_assert!(same_as(&state.duration, &model.duration));
        prop_assert!(same_as(
            &state.enable_worm_on_external_target,
            &model.enable_worm_on_external_target
        ));
    }

    #[test]
    fn nested_object_is_null_only_when_absent(model in arb_retention()) {
        let state = Retention::from(&model);
        prop_assert_eq!(state.data_lock_config.is_null(), model.data_lock_config.is_none());
    }

    #[test]
    fn flattening_is_idempotent(model in arb_report()) {
        let first = serde_json::to_value(Report::from(&model)).unwrap();
        let second = serde_json::to_value(Report::from(&model)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn list_order_is_preserved(model in arb_tiers()) {
        let state = Tiers::from(&model);
        match (&state.tiers, &model.tiers) {
            (Value::Value(tiers), Some(expected)) => {
                prop_assert_eq!(tiers.len(), expected.len());
                for (tier, expected) in tiers.iter().zip(expected) {
                    prop_assert!(same_as(&tier.tier_type, &expected.tier_type));
                    prop_assert!(same_as(&tier.move_after, &expected.move_after));
                }
            }
            (Value::Null, None) => (),
            (state, model) => prop_assert!(false, "{:?} does not match {:?}", state, model),
        }
    }

    #[test]
    fn expanding_reverses_flattening(model in arb_retention()) {
        prop_assert_eq!(models::Retention::from(&Retention::from(&model)), model);
    }

    #[test]
    fn tiers_round_trip(model in arb_tiers()) {
        prop_assert_eq!(models::Tiers::from(&Tiers::from(&model)), model);
    }
}
