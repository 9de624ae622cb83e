// Copyright Nansen Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashMap;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Raw catalog search result entry, read-only for the duration of one
/// normalization call
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogEntry {
    pub linked_resource: String,
    pub relative_resource_name: String,
    pub user_specified_system: Option<String>,
    pub integrated_system: Option<IntegratedSystem>,
}

impl CatalogEntry {
    /// System the entry is declared under. A user-specified system always
    /// takes precedence over the integrated one.
    pub fn declared_system(&self) -> Option<DeclaredSystem<'_>> {
        if let Some(user_specified) = &self.user_specified_system {
            Some(DeclaredSystem::Named(user_specified))
        } else {
            self.integrated_system.map(DeclaredSystem::Integrated)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredSystem<'a> {
    Named(&'a str),
    Integrated(IntegratedSystem),
}

impl DeclaredSystem<'_> {
    pub fn canonical_name(&self) -> String {
        match self {
            DeclaredSystem::Named(name) => (*name).to_string(),
            DeclaredSystem::Integrated(system) => system.canonical_name(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Source system an entry was ingested from, as the numeric value of the
/// backend's protobuf enum. The REST surface reports the symbolic name
/// instead, so deserialization accepts both forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct IntegratedSystem(pub i32);

impl IntegratedSystem {
    pub const BIGQUERY: IntegratedSystem = IntegratedSystem(1);
    pub const CLOUD_PUBSUB: IntegratedSystem = IntegratedSystem(2);

    /// Canonical lowercase name used in the normalized result model.
    /// Sentinels without a known mapping fall back to their decimal value.
    pub fn canonical_name(self) -> String {
        match self.0 {
            1 => "bigquery".to_string(),
            2 => "cloud_pubsub".to_string(),
            other => other.to_string(),
        }
    }
}

impl<'de> serde::Deserialize<'de> for IntegratedSystem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Value(i32),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Value(value) => Ok(IntegratedSystem(value)),
            Raw::Name(name) => match name.as_str() {
                "INTEGRATED_SYSTEM_UNSPECIFIED" => Ok(IntegratedSystem(0)),
                "BIGQUERY" => Ok(IntegratedSystem(1)),
                "CLOUD_PUBSUB" => Ok(IntegratedSystem(2)),
                "DATAPROC_METASTORE" => Ok(IntegratedSystem(3)),
                "DATAPLEX" => Ok(IntegratedSystem(4)),
                unknown => Err(serde::de::Error::custom(format!(
                    "Unknown integrated system '{unknown}'"
                ))),
            },
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Full entry record returned by the detail fetch. Only the resource name is
/// needed downstream, remaining fields are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntryDetail {
    pub name: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Structured metadata attachment on a catalog resource
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DescriptiveTag {
    pub template_display_name: String,
    pub fields: HashMap<String, TagField>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TagField {
    pub display_name: Option<String>,
    pub string_value: Option<String>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Narrows searches to the configured projects
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchScope {
    pub include_project_ids: Vec<String>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
