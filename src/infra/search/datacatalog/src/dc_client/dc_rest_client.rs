// Copyright Nansen Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use futures::StreamExt;
use internal_error::{InternalError, ResultIntoInternal};

use crate::{
    CatalogEntry, DataCatalogClient, DataCatalogSearchConfig, DescriptiveTag, EntryDetail,
    EntryPageStream, SearchScope,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Client for the Data Catalog `v1` REST surface
pub struct DataCatalogRestClient {
    config: Arc<DataCatalogSearchConfig>,
}

#[dill::component(pub)]
#[dill::interface(dyn DataCatalogClient)]
impl DataCatalogRestClient {
    pub fn new(config: Arc<DataCatalogSearchConfig>) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION"),
            ))
            .timeout(std::time::Duration::from_secs(self.config.timeout_secs))
            .build()
    }

    fn resource_url(&self, resource_name: &str) -> Result<url::Url, InternalError> {
        self.config
            .endpoint
            .join(&format!("v1/{resource_name}"))
            .int_err()
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl DataCatalogClient for DataCatalogRestClient {
    #[tracing::instrument(level = "debug", name = "DataCatalogRestClient_search_catalog", skip_all)]
    async fn search_catalog(
        &self,
        query: &str,
        scope: &SearchScope,
        page_size: usize,
    ) -> Result<EntryPageStream, InternalError> {
        let client = self.get_client().int_err()?;
        let url = self.config.endpoint.join("v1/catalog:search").int_err()?;

        let state = PageFetchState {
            client,
            url,
            api_token: self.config.api_token.clone(),
            body: SearchCatalogRequestBody {
                query: query.to_string(),
                scope: scope.clone(),
                page_size,
                page_token: None,
            },
            exhausted: false,
        };

        // Pages are fetched lazily: each poll of the stream performs at most
        // one request, using the page token of the previous response
        let stream = futures::stream::try_unfold(state, |mut state| async move {
            if state.exhausted {
                return Ok(None);
            }

            let request = state
                .client
                .post(state.url.clone())
                .json(&state.body);
            let request = match &state.api_token {
                Some(token) => request.bearer_auth(token),
                None => request,
            };

            let response: SearchCatalogResponseBody = request
                .send()
                .await
                .int_err()?
                .error_for_status()
                .int_err()?
                .json()
                .await
                .int_err()?;

            state.body.page_token = response.next_page_token.filter(|t| !t.is_empty());
            state.exhausted = state.body.page_token.is_none();

            Ok(Some((response.results, state)))
        })
        .boxed();

        Ok(stream)
    }

    #[tracing::instrument(
        level = "debug",
        name = "DataCatalogRestClient_get_entry",
        skip_all,
        fields(entry_name = %entry_name)
    )]
    async fn get_entry(&self, entry_name: &str) -> Result<EntryDetail, InternalError> {
        let client = self.get_client().int_err()?;
        let url = self.resource_url(entry_name)?;

        self.authorized(client.get(url))
            .send()
            .await
            .int_err()?
            .error_for_status()
            .int_err()?
            .json()
            .await
            .int_err()
    }

    #[tracing::instrument(
        level = "debug",
        name = "DataCatalogRestClient_list_tags",
        skip_all,
        fields(resource_name = %resource_name)
    )]
    async fn list_tags(&self, resource_name: &str) -> Result<Vec<DescriptiveTag>, InternalError> {
        let client = self.get_client().int_err()?;
        let url = self.resource_url(&format!("{resource_name}/tags"))?;

        let mut tags = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self.authorized(client.get(url.clone()));
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let response: ListTagsResponseBody = request
                .send()
                .await
                .int_err()?
                .error_for_status()
                .int_err()?
                .json()
                .await
                .int_err()?;

            tags.extend(response.tags);

            page_token = response.next_page_token.filter(|t| !t.is_empty());
            if page_token.is_none() {
                break;
            }
        }

        Ok(tags)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Wire bodies
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

struct PageFetchState {
    client: reqwest::Client,
    url: url::Url,
    api_token: Option<String>,
    body: SearchCatalogRequestBody,
    exhausted: bool,
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchCatalogRequestBody {
    query: String,
    scope: SearchScope,
    page_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_token: Option<String>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SearchCatalogResponseBody {
    results: Vec<CatalogEntry>,
    next_page_token: Option<String>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ListTagsResponseBody {
    tags: Vec<DescriptiveTag>,
    next_page_token: Option<String>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
