// Copyright Nansen Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use internal_error::InternalError;
use nansen_search::*;

use crate::{
    DataCatalogClient, DataCatalogQueryBuilder, DataCatalogSearchConfig, EntryNormalizer,
    FieldOperatorTable, PagedSearchExecutor,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Translation of domain filter names into the fields of the backend query
/// DSL. Domain filters with no mapping here are silently ignored.
const FILTER_FIELD_MAPPING: &[(&str, &str)] = &[
    ("table", "name"),
    ("description", "description"),
    ("column", "column"),
    ("tag", "tag"),
    ("database", "system"),
    ("badge", "label"),
];

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// [`CatalogSearchBackend`] over the Google Data Catalog search API.
///
/// Every search follows the same shape: build a query expression from the
/// term and filters, drive the backend's paged result stream, keep the
/// requested page, and normalize its entries into the uniform result model.
pub struct DataCatalogSearchProxy {
    config: Arc<DataCatalogSearchConfig>,
    client: Arc<dyn DataCatalogClient>,
    operator_table: FieldOperatorTable,
}

#[dill::component(pub)]
#[dill::interface(dyn CatalogSearchBackend)]
impl DataCatalogSearchProxy {
    pub fn new(config: Arc<DataCatalogSearchConfig>, client: Arc<dyn DataCatalogClient>) -> Self {
        Self {
            config,
            client,
            operator_table: FieldOperatorTable::default(),
        }
    }

    async fn basic_search(
        &self,
        query_term: &str,
        page_index: usize,
        kind: EntryKind,
        mut filters: SearchFilters,
    ) -> Result<(usize, Vec<NormalizedResult>), SearchError> {
        // Kind constraint goes last so caller-supplied filters keep their
        // position in the generated query
        filters.push(
            SearchFilters::KIND_FIELD,
            FilterValue::scalar(kind.as_query_value()),
        );

        let query = DataCatalogQueryBuilder::build_query(query_term, &filters, &self.operator_table);

        tracing::debug!(%query, page_index, "Executing catalog search");

        let pages = self
            .client
            .search_catalog(&query, &self.config.scope(), self.config.page_size)
            .await?;

        let (total_count, entries) =
            PagedSearchExecutor::execute(pages, self.config.page_size, page_index).await?;

        let normalizer = EntryNormalizer::new(self.client.as_ref());

        let mut results = Vec::with_capacity(entries.len());
        for entry in &entries {
            results.push(normalizer.normalize(entry, kind).await?);
        }

        Ok((total_count, results))
    }

    fn translate_filters(search_request: &SearchRequest) -> SearchFilters {
        FILTER_FIELD_MAPPING
            .iter()
            .filter_map(|(domain_field, backend_field)| {
                let value = search_request.filters.get(*domain_field)?;
                if value.is_empty() {
                    return None;
                }
                Some((*backend_field, value.clone()))
            })
            .collect()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl CatalogSearchBackend for DataCatalogSearchProxy {
    /// A search for the `table` kind also returns views, which the backend
    /// reports with the `table.view` subtype
    #[tracing::instrument(
        level = "debug",
        name = "DataCatalogSearchProxy_search_tables",
        skip_all,
        fields(query_term = %query_term, page_index)
    )]
    async fn search_tables(
        &self,
        query_term: &str,
        page_index: usize,
    ) -> Result<SearchTableResponse, SearchError> {
        let (total_results, results) = self
            .basic_search(query_term, page_index, EntryKind::Table, SearchFilters::new())
            .await?;

        Ok(SearchTableResponse {
            total_results,
            results: into_tables(results)?,
        })
    }

    #[tracing::instrument(
        level = "debug",
        name = "DataCatalogSearchProxy_search_users",
        skip_all,
        fields(query_term = %query_term, page_index)
    )]
    async fn search_users(
        &self,
        query_term: &str,
        page_index: usize,
    ) -> Result<SearchUserResponse, SearchError> {
        // User entries cannot be normalized, so this only succeeds when the
        // requested page holds no results
        let (total_results, results) = self
            .basic_search(query_term, page_index, EntryKind::User, SearchFilters::new())
            .await?;

        Ok(SearchUserResponse {
            total_results,
            results: into_users(results)?,
        })
    }

    #[tracing::instrument(
        level = "debug",
        name = "DataCatalogSearchProxy_search_dashboards",
        skip_all,
        fields(query_term = %query_term, page_index)
    )]
    async fn search_dashboards(
        &self,
        query_term: &str,
        page_index: usize,
    ) -> Result<SearchDashboardResponse, SearchError> {
        let (total_results, results) = self
            .basic_search(
                query_term,
                page_index,
                EntryKind::Workbook,
                SearchFilters::new(),
            )
            .await?;

        Ok(SearchDashboardResponse {
            total_results,
            results: into_dashboards(results)?,
        })
    }

    #[tracing::instrument(
        level = "debug",
        name = "DataCatalogSearchProxy_search_filtered",
        skip_all,
        fields(query_term = %query_term, page_index, %kind)
    )]
    async fn search_filtered(
        &self,
        kind: EntryKind,
        query_term: &str,
        search_request: &SearchRequest,
        page_index: usize,
    ) -> Result<FilteredSearchResponse, SearchError> {
        let filters = Self::translate_filters(search_request);

        let (total_results, results) = self
            .basic_search(query_term, page_index, kind, filters)
            .await?;

        Ok(FilteredSearchResponse {
            total_results,
            results,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn into_tables(results: Vec<NormalizedResult>) -> Result<Vec<TableResult>, InternalError> {
    results
        .into_iter()
        .map(|result| match result {
            NormalizedResult::Table(table) => Ok(table),
            _ => InternalError::bail("Table search produced a non-table result"),
        })
        .collect()
}

fn into_dashboards(results: Vec<NormalizedResult>) -> Result<Vec<DashboardResult>, InternalError> {
    results
        .into_iter()
        .map(|result| match result {
            NormalizedResult::Dashboard(dashboard) => Ok(dashboard),
            _ => InternalError::bail("Dashboard search produced a non-dashboard result"),
        })
        .collect()
}

fn into_users(results: Vec<NormalizedResult>) -> Result<Vec<UserResult>, InternalError> {
    results
        .into_iter()
        .map(|result| match result {
            NormalizedResult::User(user) => Ok(user),
            _ => InternalError::bail("User search produced a non-user result"),
        })
        .collect()
}
