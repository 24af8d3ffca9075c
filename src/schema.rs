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

//! Building blocks of the attribute tables
//!
//! Each entity declares its attributes once, through [`WithAttributes`], and the table is rendered
//! either for a data source ([`Usage::Output`], everything computed) or for a resource
//! ([`Usage::Input`], user attributes optional or required).

use std::collections::HashMap;

use tf_provider::schema::{Attribute, AttributeConstraint, AttributeType, Description};

/// How an attribute table is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Usage {
    /// Attributes are set by the practitioner
    Input,
    /// Attributes are read from the API
    Output,
}

impl Usage {
    pub fn required(self) -> AttributeConstraint {
        match self {
            Usage::Input => AttributeConstraint::Required,
            Usage::Output => AttributeConstraint::Computed,
        }
    }

    pub fn optional(self) -> AttributeConstraint {
        match self {
            Usage::Input => AttributeConstraint::Optional,
            Usage::Output => AttributeConstraint::Computed,
        }
    }

    /// Attributes assigned by the server, whatever the usage
    pub fn computed() -> AttributeConstraint {
        AttributeConstraint::Computed
    }
}

/// Entity with a static attribute table
pub trait WithAttributes {
    fn attributes(usage: Usage) -> HashMap<String, Attribute>;
}

fn attribute(
    attr_type: AttributeType,
    description: &str,
    constraint: AttributeConstraint,
) -> Attribute {
    Attribute {
        attr_type,
        description: Description::plain(description),
        constraint,
        ..Default::default()
    }
}

pub fn string(description: &str, constraint: AttributeConstraint) -> Attribute {
    attribute(AttributeType::String, description, constraint)
}

pub fn number(description: &str, constraint: AttributeConstraint) -> Attribute {
    attribute(AttributeType::Number, description, constraint)
}

pub fn boolean(description: &str, constraint: AttributeConstraint) -> Attribute {
    attribute(AttributeType::Bool, description, constraint)
}

/// List of strings
pub fn strings(description: &str, constraint: AttributeConstraint) -> Attribute {
    attribute(
        AttributeType::List(Box::new(AttributeType::String)),
        description,
        constraint,
    )
}

/// Single nested object
pub fn object<T: WithAttributes>(
    usage: Usage,
    description: &str,
    constraint: AttributeConstraint,
) -> Attribute {
    attribute(
        AttributeType::AttributeSingle(T::attributes(usage)),
        description,
        constraint,
    )
}

/// List of nested objects
pub fn objects<T: WithAttributes>(
    usage: Usage,
    description: &str,
    constraint: AttributeConstraint,
) -> Attribute {
    attribute(
        AttributeType::AttributeList(T::attributes(usage)),
        description,
        constraint,
    )
}

/// Check that a serialized state has exactly the keys declared by its table, recursively
#[cfg(test)]
pub(crate) fn assert_matches_attributes(
    path: &str,
    value: &serde_json::Value,
    attributes: &HashMap<String, Attribute>,
) {
    use std::collections::BTreeSet;

    let object = value
        .as_object()
        .unwrap_or_else(|| panic!("{path}: expected an object, got {value}"));
    let state_keys: BTreeSet<&str> = object.keys().map(String::as_str).collect();
    let schema_keys: BTreeSet<&str> = attributes.keys().map(String::as_str).collect();
    assert_eq!(state_keys, schema_keys, "{path}: key sets differ");

    for (name, attr) in attributes {
        let nested = &object[name];
        let path = format!("{path}.{name}");
        match &attr.attr_type {
            AttributeType::AttributeSingle(inner) if !nested.is_null() => {
                assert_matches_attributes(&path, nested, inner)
            }
            AttributeType::AttributeList(inner) if !nested.is_null() => {
                let elements = nested
                    .as_array()
                    .unwrap_or_else(|| panic!("{path}: expected a list, got {nested}"));
                for (i, element) in elements.iter().enumerate() {
                    assert_matches_attributes(&format!("{path}[{i}]"), element, inner);
                }
            }
            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use tf_provider::map;

    use super::*;

    struct Window;

    impl WithAttributes for Window {
        fn attributes(usage: Usage) -> HashMap<String, Attribute> {
            map! {
                "day" => string("Day of the week", usage.required()),
                "config_id" => string("Config id", Usage::computed()),
            }
        }
    }

    #[test]
    fn output_usage_is_computed() {
        let attr = objects::<Window>(Usage::Output, "Windows", Usage::Output.optional());
        assert_eq!(attr.constraint, AttributeConstraint::Computed);
        let AttributeType::AttributeList(inner) = attr.attr_type else {
            panic!("expected a list of objects");
        };
        assert!(inner
            .values()
            .all(|attr| attr.constraint == AttributeConstraint::Computed));
    }

    #[test]
    fn input_usage_keeps_user_constraints() {
        let attrs = Window::attributes(Usage::Input);
        assert_eq!(attrs["day"].constraint, AttributeConstraint::Required);
        assert_eq!(attrs["config_id"].constraint, AttributeConstraint::Computed);
    }
}
