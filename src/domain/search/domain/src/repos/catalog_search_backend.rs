// Copyright Nansen Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Backend-facing seam of the search layer: translates a query term plus
/// filters into the backend's native query language, drives its paged result
/// stream, and normalizes raw entries. One implementation per catalog
/// backend.
#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogSearchBackend: Send + Sync {
    async fn search_tables(
        &self,
        query_term: &str,
        page_index: usize,
    ) -> Result<SearchTableResponse, SearchError>;

    async fn search_users(
        &self,
        query_term: &str,
        page_index: usize,
    ) -> Result<SearchUserResponse, SearchError>;

    async fn search_dashboards(
        &self,
        query_term: &str,
        page_index: usize,
    ) -> Result<SearchDashboardResponse, SearchError>;

    /// Filters come in the domain vocabulary; the backend maps them onto
    /// its own field names and drops the ones it has no mapping for
    async fn search_filtered(
        &self,
        kind: EntryKind,
        query_term: &str,
        search_request: &SearchRequest,
        page_index: usize,
    ) -> Result<FilteredSearchResponse, SearchError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
