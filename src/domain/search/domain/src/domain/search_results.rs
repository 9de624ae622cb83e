// Copyright Nansen Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Catalog table normalized into the uniform result model.
///
/// `tags` and `badges` are currently always empty: the backend exposes the
/// information only through per-resource tag listing calls, which would cost
/// one extra round-trip per result (TODO: populate from descriptive tags
/// once the backend supports batched tag retrieval).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TableResult {
    pub database: String,
    pub cluster: String,
    pub schema: String,
    pub name: String,
    /// Stable identifier of the table within the catalog
    pub key: String,
    pub tags: Vec<String>,
    pub badges: Vec<String>,
    pub last_updated_timestamp: Option<i64>,
    pub column_names: Vec<String>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Dashboard/workbook normalized into the uniform result model.
///
/// `group_url`, `url` and `last_successful_run_timestamp` are not populated
/// by this backend and stay at their empty/zero values.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DashboardResult {
    pub group_name: Option<String>,
    pub group_url: String,
    pub url: String,
    pub uri: String,
    pub cluster: String,
    pub product: Option<String>,
    pub name: String,
    pub last_successful_run_timestamp: i64,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserResult {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum NormalizedResult {
    Table(TableResult),
    Dashboard(DashboardResult),
    User(UserResult),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// One page of table search results.
///
/// `total_results` is an estimate accurate only up to a full page: the
/// backend reports no exact totals without consuming the entire result
/// stream. Callers must treat it as an approximation.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct SearchTableResponse {
    pub total_results: usize,
    pub results: Vec<TableResult>,
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct SearchDashboardResponse {
    pub total_results: usize,
    pub results: Vec<DashboardResult>,
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct SearchUserResponse {
    pub total_results: usize,
    pub results: Vec<UserResult>,
}

/// Result page of the filtered search entry point, whose entry kind is only
/// known at runtime
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct FilteredSearchResponse {
    pub total_results: usize,
    pub results: Vec<NormalizedResult>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
