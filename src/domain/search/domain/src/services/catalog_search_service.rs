// Copyright Nansen Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::InternalError;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Inbound surface of the search layer, consumed by the web service tier.
///
/// All search operations are read-only and independent across calls.
/// `page_index` is 0-based. Each result container carries an approximate
/// total, see [`SearchTableResponse`].
#[async_trait::async_trait]
pub trait CatalogSearchService: Send + Sync {
    async fn fetch_table_search_results(
        &self,
        query_term: &str,
        page_index: usize,
    ) -> Result<SearchTableResponse, SearchError>;

    async fn fetch_user_search_results(
        &self,
        query_term: &str,
        page_index: usize,
    ) -> Result<SearchUserResponse, SearchError>;

    async fn fetch_dashboard_search_results(
        &self,
        query_term: &str,
        page_index: usize,
    ) -> Result<SearchDashboardResponse, SearchError>;

    /// Entry kind is derived from the namespaced `index` identifier; only
    /// filters present and non-empty in the request are forwarded to the
    /// backend
    async fn fetch_search_results_with_filter(
        &self,
        query_term: &str,
        search_request: &SearchRequest,
        page_index: usize,
        index: &str,
    ) -> Result<FilteredSearchResponse, SearchError>;

    /// Document mutations are not supported by read-only catalog backends
    /// and fail with [`UnsupportedOperationError`] rather than silently
    /// succeeding
    async fn create_document(
        &self,
        data: Vec<serde_json::Value>,
        index: &str,
    ) -> Result<(), SearchError>;

    async fn update_document(
        &self,
        data: Vec<serde_json::Value>,
        index: &str,
    ) -> Result<(), SearchError>;

    async fn delete_document(&self, ids: Vec<String>, index: &str) -> Result<(), SearchError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    UnsupportedEntryKind(#[from] UnsupportedEntryKindError),

    #[error(transparent)]
    UnsupportedOperation(#[from] UnsupportedOperationError),

    /// Transport and backend faults propagate here unchanged: the search
    /// layer performs no retries
    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, thiserror::Error)]
#[error("Operation '{operation}' is not supported by this search backend")]
pub struct UnsupportedOperationError {
    pub operation: &'static str,
}

impl UnsupportedOperationError {
    pub fn new(operation: &'static str) -> Self {
        Self { operation }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
