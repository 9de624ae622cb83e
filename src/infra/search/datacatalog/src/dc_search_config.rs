// Copyright Nansen Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::SearchScope;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_DATA_CATALOG_ENDPOINT: &str = "https://datacatalog.googleapis.com/";

pub const DEFAULT_PAGE_SIZE: usize = 10;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Read-only after construction and shared between concurrent search calls
#[derive(Debug, Clone)]
pub struct DataCatalogSearchConfig {
    pub endpoint: url::Url,
    pub project_id: String,
    pub page_size: usize,
    /// Bearer token attached to outgoing requests. Token acquisition and
    /// refresh are outside of this layer's responsibility.
    pub api_token: Option<String>,
    pub timeout_secs: u64,
}

impl DataCatalogSearchConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            endpoint: url::Url::parse(DEFAULT_DATA_CATALOG_ENDPOINT).unwrap(),
            project_id: project_id.into(),
            page_size: DEFAULT_PAGE_SIZE,
            api_token: None,
            timeout_secs: 30,
        }
    }

    /// Scope limiting all searches to the configured project
    pub fn scope(&self) -> SearchScope {
        SearchScope {
            include_project_ids: vec![self.project_id.clone()],
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
