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
use nansen_search_services::CatalogSearchServiceImpl;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_table_search_delegates_to_backend() {
    let mut mock_backend = MockCatalogSearchBackend::new();
    mock_backend
        .expect_search_tables()
        .withf(|query_term, page_index| query_term == "orders" && *page_index == 2)
        .times(1)
        .returning(|_, _| {
            Ok(SearchTableResponse {
                total_results: 17,
                results: vec![],
            })
        });

    let service = make_service(mock_backend);

    let res = service
        .fetch_table_search_results("orders", 2)
        .await
        .unwrap();
    assert_eq!(res.total_results, 17);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_filtered_search_resolves_kind_from_index() {
    let mut mock_backend = MockCatalogSearchBackend::new();
    mock_backend
        .expect_search_filtered()
        .withf(|kind, query_term, _, page_index| {
            *kind == EntryKind::Workbook && query_term == "sales" && *page_index == 0
        })
        .times(1)
        .returning(|_, _, _, _| Ok(FilteredSearchResponse::default()));

    let service = make_service(mock_backend);

    service
        .fetch_search_results_with_filter("sales", &SearchRequest::default(), 0, "workbook_index")
        .await
        .unwrap();
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_filtered_search_rejects_unknown_index_prefix_without_backend_call() {
    // No expectations set: reaching the backend would panic the mock
    let mock_backend = MockCatalogSearchBackend::new();
    let service = make_service(mock_backend);

    let err = service
        .fetch_search_results_with_filter("sales", &SearchRequest::default(), 0, "feature_index")
        .await
        .unwrap_err();

    assert!(matches!(
        &err,
        SearchError::UnsupportedEntryKind(UnsupportedEntryKindError { kind }) if kind == "feature"
    ));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_document_mutations_are_rejected() {
    let service = make_service(MockCatalogSearchBackend::new());

    let err = service
        .create_document(vec![], "table_index")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SearchError::UnsupportedOperation(UnsupportedOperationError {
            operation: "create_document"
        })
    ));

    let err = service
        .update_document(vec![], "table_index")
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::UnsupportedOperation(_)));

    let err = service
        .delete_document(vec!["key".to_string()], "table_index")
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::UnsupportedOperation(_)));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn make_service(mock_backend: MockCatalogSearchBackend) -> Arc<dyn CatalogSearchService> {
    let catalog = dill::CatalogBuilder::new()
        .add::<CatalogSearchServiceImpl>()
        .add_value(mock_backend)
        .bind::<dyn CatalogSearchBackend, MockCatalogSearchBackend>()
        .build();

    catalog.get_one::<dyn CatalogSearchService>().unwrap()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
