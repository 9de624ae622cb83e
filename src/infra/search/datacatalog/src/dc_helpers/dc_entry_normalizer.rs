// Copyright Nansen Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::{ErrorIntoInternal, InternalError};
use nansen_search::{
    DashboardResult, EntryKind, NormalizedResult, SearchError, TableResult,
    UnsupportedEntryKindError,
};

use crate::{CatalogEntry, DataCatalogClient, DeclaredSystem, ResourceMetadataExtractor};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Turns raw catalog entries into the uniform result model.
///
/// Table entries are normalized from the entry record alone. Workbook entries
/// need two extra backend calls: the full entry record and its descriptive
/// tags, where the workbook metadata lives.
pub struct EntryNormalizer<'a> {
    client: &'a dyn DataCatalogClient,
    dashboard_metadata_pattern: regex::Regex,
}

impl<'a> EntryNormalizer<'a> {
    pub fn new(client: &'a dyn DataCatalogClient) -> Self {
        Self {
            client,
            dashboard_metadata_pattern: regex::Regex::new(r".*Dashboard Metadata$").unwrap(),
        }
    }

    pub async fn normalize(
        &self,
        entry: &CatalogEntry,
        kind: EntryKind,
    ) -> Result<NormalizedResult, SearchError> {
        match kind {
            EntryKind::Table => Ok(NormalizedResult::Table(Self::normalize_table(entry))),
            EntryKind::Workbook => Ok(NormalizedResult::Dashboard(
                self.normalize_dashboard(entry).await?,
            )),
            EntryKind::User => Err(UnsupportedEntryKindError {
                kind: kind.as_query_value().to_string(),
            }
            .into()),
        }
    }

    /// Table coordinates are recovered from the entry's resource names.
    ///
    /// The linked resource carries the native path of the table
    /// (`//bigquery.googleapis.com/projects/<p>/datasets/<d>/tables/<t>`),
    /// while the relative resource name is the catalog-internal path
    /// (`projects/<p>/locations/<l>/entryGroups/<g>/entries/<e>`). Entries
    /// from an integrated system keep the schema in the linked path; entries
    /// registered under a user-specified system encode it in the final
    /// relative segment as `<schema>_<name>`.
    fn normalize_table(entry: &CatalogEntry) -> TableResult {
        let linked_parts: Vec<&str> = entry.linked_resource.split('/').collect();
        let relative_parts: Vec<&str> = entry.relative_resource_name.split('/').collect();

        let name = linked_parts.last().copied().unwrap_or_default().to_string();

        let (database, schema) = match entry.declared_system() {
            Some(DeclaredSystem::Integrated(system)) => {
                let schema = linked_parts
                    .len()
                    .checked_sub(3)
                    .and_then(|i| linked_parts.get(i))
                    .copied()
                    .unwrap_or_default();
                (system.canonical_name(), schema.to_string())
            }
            declared => {
                let schema = relative_parts
                    .last()
                    .copied()
                    .unwrap_or_default()
                    .replace(&name, "")
                    .trim_matches('_')
                    .to_string();
                let database = declared
                    .map(|system| system.canonical_name())
                    .unwrap_or_default();
                (database, schema)
            }
        };

        let cluster = format!(
            "{}__{}",
            relative_parts.get(1).copied().unwrap_or_default(),
            relative_parts.get(3).copied().unwrap_or_default(),
        );

        TableResult {
            database,
            cluster,
            schema,
            name,
            key: entry.relative_resource_name.clone(),
            tags: vec![],
            badges: vec![],
            last_updated_timestamp: None,
            column_names: vec![],
        }
    }

    async fn normalize_dashboard(
        &self,
        entry: &CatalogEntry,
    ) -> Result<DashboardResult, SearchError> {
        let detail = self.client.get_entry(&entry.relative_resource_name).await?;

        let mut metadata = ResourceMetadataExtractor::extract(
            self.client,
            &detail.name,
            &self.dashboard_metadata_pattern,
        )
        .await?;

        let name = Self::take_required_field(&mut metadata, "workbook_name")?;
        let uri = Self::take_required_field(&mut metadata, "workbook_entry")?;

        let cluster = detail
            .name
            .split('/')
            .nth(1)
            .unwrap_or_default()
            .to_string();

        Ok(DashboardResult {
            group_name: metadata.remove("site_name"),
            group_url: String::new(),
            url: String::new(),
            uri,
            cluster,
            product: entry.declared_system().map(|s| s.canonical_name()),
            name,
            last_successful_run_timestamp: 0,
        })
    }

    fn take_required_field(
        metadata: &mut std::collections::HashMap<String, String>,
        field: &str,
    ) -> Result<String, InternalError> {
        metadata
            .remove(field)
            .ok_or_else(|| MissingMetadataFieldError::new(field).int_err())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, thiserror::Error)]
#[error("Dashboard metadata tag does not declare the '{field}' field")]
struct MissingMetadataFieldError {
    field: String,
}

impl MissingMetadataFieldError {
    fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
