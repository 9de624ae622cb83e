// Copyright Nansen Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use nansen_search::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[dill::component(pub)]
#[dill::interface(dyn CatalogSearchService)]
pub struct CatalogSearchServiceImpl {
    backend: Arc<dyn CatalogSearchBackend>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl CatalogSearchService for CatalogSearchServiceImpl {
    #[tracing::instrument(
        level = "debug",
        name = "CatalogSearchServiceImpl_fetch_table_search_results",
        skip_all,
        fields(query_term = %query_term, page_index)
    )]
    async fn fetch_table_search_results(
        &self,
        query_term: &str,
        page_index: usize,
    ) -> Result<SearchTableResponse, SearchError> {
        self.backend.search_tables(query_term, page_index).await
    }

    #[tracing::instrument(
        level = "debug",
        name = "CatalogSearchServiceImpl_fetch_user_search_results",
        skip_all,
        fields(query_term = %query_term, page_index)
    )]
    async fn fetch_user_search_results(
        &self,
        query_term: &str,
        page_index: usize,
    ) -> Result<SearchUserResponse, SearchError> {
        self.backend.search_users(query_term, page_index).await
    }

    #[tracing::instrument(
        level = "debug",
        name = "CatalogSearchServiceImpl_fetch_dashboard_search_results",
        skip_all,
        fields(query_term = %query_term, page_index)
    )]
    async fn fetch_dashboard_search_results(
        &self,
        query_term: &str,
        page_index: usize,
    ) -> Result<SearchDashboardResponse, SearchError> {
        self.backend.search_dashboards(query_term, page_index).await
    }

    #[tracing::instrument(
        level = "debug",
        name = "CatalogSearchServiceImpl_fetch_search_results_with_filter",
        skip_all,
        fields(query_term = %query_term, page_index, index = %index)
    )]
    async fn fetch_search_results_with_filter(
        &self,
        query_term: &str,
        search_request: &SearchRequest,
        page_index: usize,
        index: &str,
    ) -> Result<FilteredSearchResponse, SearchError> {
        let kind = EntryKind::from_index(index)?;

        self.backend
            .search_filtered(kind, query_term, search_request, page_index)
            .await
    }

    async fn create_document(
        &self,
        _data: Vec<serde_json::Value>,
        index: &str,
    ) -> Result<(), SearchError> {
        tracing::warn!(index, "Rejecting unsupported document creation");
        Err(UnsupportedOperationError::new("create_document").into())
    }

    async fn update_document(
        &self,
        _data: Vec<serde_json::Value>,
        index: &str,
    ) -> Result<(), SearchError> {
        tracing::warn!(index, "Rejecting unsupported document update");
        Err(UnsupportedOperationError::new("update_document").into())
    }

    async fn delete_document(&self, _ids: Vec<String>, index: &str) -> Result<(), SearchError> {
        tracing::warn!(index, "Rejecting unsupported document deletion");
        Err(UnsupportedOperationError::new("delete_document").into())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
