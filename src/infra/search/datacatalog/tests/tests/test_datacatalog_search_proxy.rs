// Copyright Nansen Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::{Arc, Mutex};

use futures::StreamExt;
use internal_error::InternalError;
use nansen_search::*;
use nansen_search_datacatalog::*;
use pretty_assertions::assert_eq;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const TEST_PAGE_SIZE: usize = 2;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_table_search_returns_requested_page() {
    let harness = SearchProxyHarness::new(vec![
        vec![bigquery_entry("orders"), bigquery_entry("customers")],
        vec![bigquery_entry("invoices")],
    ]);

    let response = harness.proxy.search_tables("ledger", 1).await.unwrap();

    assert_eq!(response.total_results, 3);
    assert_eq!(response.results.len(), 1);

    let table = &response.results[0];
    assert_eq!(table.name, "invoices");
    assert_eq!(table.database, "bigquery");
    assert_eq!(table.schema, "sales");
    assert_eq!(table.cluster, "acme__eu");
    assert_eq!(
        table.key,
        "projects/acme/locations/eu/entryGroups/@bigquery/entries/invoices"
    );

    assert_eq!(harness.queries(), ["ledger AND type=table"]);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_table_search_past_the_end_keeps_whole_stream_estimate() {
    let harness = SearchProxyHarness::new(vec![
        vec![bigquery_entry("orders"), bigquery_entry("customers")],
        vec![bigquery_entry("invoices")],
    ]);

    let response = harness.proxy.search_tables("ledger", 5).await.unwrap();

    assert_eq!(response.total_results, 3);
    assert!(response.results.is_empty());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_table_search_with_no_results() {
    let harness = SearchProxyHarness::new(vec![]);

    let response = harness.proxy.search_tables("ledger", 0).await.unwrap();

    assert_eq!(response.total_results, 0);
    assert!(response.results.is_empty());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_filtered_search_maps_only_present_filters() {
    let harness = SearchProxyHarness::new(vec![vec![bigquery_entry("orders")]]);

    let search_request: SearchRequest = serde_json::from_str(
        r#"{
            "filters": {
                "database": "bigquery",
                "tag": ["pii", "gdpr"],
                "table": "",
                "priority": "high"
            }
        }"#,
    )
    .unwrap();

    let response = harness
        .proxy
        .search_filtered(EntryKind::Table, "ledger", &search_request, 0)
        .await
        .unwrap();

    assert_eq!(response.total_results, 1);
    assert!(matches!(
        response.results.as_slice(),
        [NormalizedResult::Table(table)] if table.name == "orders"
    ));

    // Field order follows the fixed domain-to-backend mapping, unknown
    // filters ("priority") and empty values ("table") contribute nothing,
    // and the kind constraint is appended last
    assert_eq!(
        harness.queries(),
        ["ledger AND (tag:pii OR tag:gdpr) AND system=bigquery AND type=table"]
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_filtered_search_badge_filter_becomes_label_constraint() {
    let harness = SearchProxyHarness::new(vec![]);

    let search_request: SearchRequest =
        serde_json::from_str(r#"{"filters": {"badge": "tier:gold"}}"#).unwrap();

    harness
        .proxy
        .search_filtered(EntryKind::Table, "ledger", &search_request, 0)
        .await
        .unwrap();

    assert_eq!(
        harness.queries(),
        ["ledger AND label.tier:gold AND type=table"]
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_dashboard_search_normalizes_workbooks() {
    let entry = CatalogEntry {
        linked_resource: String::new(),
        relative_resource_name: "projects/acme/locations/eu/entryGroups/tableau/entries/wb1"
            .to_string(),
        user_specified_system: Some("tableau".to_string()),
        integrated_system: None,
    };

    let harness = SearchProxyHarness::with_tags(
        vec![vec![entry]],
        vec![metadata_tag(
            "Tableau Dashboard Metadata",
            &[
                ("workbook_name", "Sales"),
                ("workbook_entry", "uri://sales"),
                ("site_name", "emea"),
            ],
        )],
    );

    let response = harness.proxy.search_dashboards("sales", 0).await.unwrap();

    assert_eq!(response.total_results, 1);

    let dashboard = &response.results[0];
    assert_eq!(dashboard.name, "Sales");
    assert_eq!(dashboard.uri, "uri://sales");
    assert_eq!(dashboard.group_name, Some("emea".to_string()));
    assert_eq!(dashboard.cluster, "acme");
    assert_eq!(dashboard.product, Some("tableau".to_string()));

    assert_eq!(harness.queries(), ["sales AND type=workbook"]);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_user_search_with_no_results_succeeds() {
    let harness = SearchProxyHarness::new(vec![]);

    let response = harness.proxy.search_users("jdoe", 0).await.unwrap();

    assert_eq!(response.total_results, 0);
    assert!(response.results.is_empty());
    assert_eq!(harness.queries(), ["jdoe AND type=user"]);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_user_search_cannot_normalize_returned_entries() {
    let harness = SearchProxyHarness::new(vec![vec![bigquery_entry("jdoe")]]);

    let err = harness.proxy.search_users("jdoe", 0).await.unwrap_err();

    assert!(matches!(
        err,
        SearchError::UnsupportedEntryKind(UnsupportedEntryKindError { kind }) if kind == "user"
    ));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Harness
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

struct SearchProxyHarness {
    proxy: DataCatalogSearchProxy,
    queries: Arc<Mutex<Vec<String>>>,
}

impl SearchProxyHarness {
    fn new(pages: Vec<Vec<CatalogEntry>>) -> Self {
        Self::with_tags(pages, vec![])
    }

    fn with_tags(pages: Vec<Vec<CatalogEntry>>, tags: Vec<DescriptiveTag>) -> Self {
        let queries = Arc::new(Mutex::new(Vec::new()));

        let client = Arc::new(FakeDataCatalogClient {
            pages,
            tags,
            queries: queries.clone(),
        });

        let mut config = DataCatalogSearchConfig::new("acme");
        config.page_size = TEST_PAGE_SIZE;

        Self {
            proxy: DataCatalogSearchProxy::new(Arc::new(config), client),
            queries,
        }
    }

    fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

struct FakeDataCatalogClient {
    pages: Vec<Vec<CatalogEntry>>,
    tags: Vec<DescriptiveTag>,
    queries: Arc<Mutex<Vec<String>>>,
}

#[async_trait::async_trait]
impl DataCatalogClient for FakeDataCatalogClient {
    async fn search_catalog(
        &self,
        query: &str,
        _scope: &SearchScope,
        _page_size: usize,
    ) -> Result<EntryPageStream, InternalError> {
        self.queries.lock().unwrap().push(query.to_string());

        let pages = self.pages.clone();
        Ok(futures::stream::iter(pages.into_iter().map(Ok)).boxed())
    }

    async fn get_entry(&self, entry_name: &str) -> Result<EntryDetail, InternalError> {
        Ok(EntryDetail {
            name: entry_name.to_string(),
        })
    }

    async fn list_tags(&self, _resource_name: &str) -> Result<Vec<DescriptiveTag>, InternalError> {
        Ok(self.tags.clone())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Fixtures
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn bigquery_entry(name: &str) -> CatalogEntry {
    CatalogEntry {
        linked_resource: format!(
            "//bigquery.googleapis.com/projects/acme/datasets/sales/tables/{name}"
        ),
        relative_resource_name: format!(
            "projects/acme/locations/eu/entryGroups/@bigquery/entries/{name}"
        ),
        user_specified_system: None,
        integrated_system: Some(IntegratedSystem::BIGQUERY),
    }
}

fn metadata_tag(display_name: &str, fields: &[(&str, &str)]) -> DescriptiveTag {
    DescriptiveTag {
        template_display_name: display_name.to_string(),
        fields: fields
            .iter()
            .map(|(k, v)| {
                (
                    (*k).to_string(),
                    TagField {
                        display_name: None,
                        string_value: Some((*v).to_string()),
                    },
                )
            })
            .collect(),
    }
}
