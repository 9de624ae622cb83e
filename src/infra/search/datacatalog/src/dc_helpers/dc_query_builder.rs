// Copyright Nansen Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt::Write as _;

use nansen_search::{FilterValue, SearchFilters};

use crate::dc_helpers::parse_label;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const LABEL_FIELD: &str = "label";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Maps a field name to the constraint operator supported by the backend
/// query DSL. Some fields only support exact matching with `=`, the rest use
/// pattern matching with `:`. Kept as data rather than a hardcoded match so
/// a different dialect of the table can be swapped in.
#[derive(Debug, Clone)]
pub struct FieldOperatorTable {
    exact_match_fields: Vec<String>,
}

impl FieldOperatorTable {
    pub fn new<S: Into<String>>(exact_match_fields: impl IntoIterator<Item = S>) -> Self {
        Self {
            exact_match_fields: exact_match_fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Operator choice depends on the field name only, never on the value
    pub fn operator_for(&self, field: &str) -> char {
        if self.exact_match_fields.iter().any(|f| f == field) {
            '='
        } else {
            ':'
        }
    }
}

impl Default for FieldOperatorTable {
    fn default() -> Self {
        Self::new(["type", "system"])
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct DataCatalogQueryBuilder {}

impl DataCatalogQueryBuilder {
    /// Combines the free-text term with `AND`-joined field constraints into
    /// a backend query expression. Pure: the same inputs always produce the
    /// same string.
    ///
    /// The term is passed through verbatim. The backend DSL defines no
    /// escaping rules, so a term containing DSL syntax will be interpreted
    /// as such. An accepted risk of this query language.
    pub fn build_query(
        term: &str,
        filters: &SearchFilters,
        operators: &FieldOperatorTable,
    ) -> String {
        let mut query = term.to_string();

        for (field, value) in filters.iter() {
            let op = operators.operator_for(field);

            if field == LABEL_FIELD {
                // Only scalar label filters are supported; a malformed one
                // is dropped without affecting the remaining filters
                let FilterValue::Scalar(raw) = value else {
                    continue;
                };
                let Some((label_name, label_value)) = parse_label(raw) else {
                    continue;
                };
                write!(query, " AND {field}.{label_name}{op}{label_value}").unwrap();
                continue;
            }

            match value {
                FilterValue::Scalar(v) => {
                    write!(query, " AND {field}{op}{v}").unwrap();
                }
                FilterValue::List(vs) if vs.is_empty() => {}
                FilterValue::List(vs) => {
                    let disjunction = vs
                        .iter()
                        .map(|v| format!("{field}{op}{v}"))
                        .collect::<Vec<_>>()
                        .join(" OR ");
                    write!(query, " AND ({disjunction})").unwrap();
                }
            }
        }

        query
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
