// Copyright Nansen Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod dc_api_types;
mod dc_rest_client;

pub use dc_api_types::*;
pub use dc_rest_client::*;

use internal_error::InternalError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Lazy sequence of result pages, each holding up to `page_size` raw catalog
/// entries. Transport faults surface at the poll that triggers the fetch.
pub type EntryPageStream = futures::stream::BoxStream<'static, Result<Vec<CatalogEntry>, InternalError>>;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Minimal slice of the Data Catalog API surface this backend depends on.
/// Implementations are expected to be safe for concurrent use: the search
/// layer holds one shared instance and performs no locking of its own.
#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait DataCatalogClient: Send + Sync {
    /// Paged catalog search. No retries, timeouts, or cancellation are
    /// layered on top, those are left to the implementation's own contract.
    async fn search_catalog(
        &self,
        query: &str,
        scope: &SearchScope,
        page_size: usize,
    ) -> Result<EntryPageStream, InternalError>;

    /// Fetches the full entry record by its relative resource name
    async fn get_entry(&self, entry_name: &str) -> Result<EntryDetail, InternalError>;

    /// Lists all descriptive tags attached to a resource
    async fn list_tags(&self, resource_name: &str) -> Result<Vec<DescriptiveTag>, InternalError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
