// Copyright Nansen Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashMap;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Value of a single search filter: either one value or an ordered set of
/// alternatives that the backend combines into a disjunction
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Scalar(String),
    List(Vec<String>),
}

impl FilterValue {
    pub fn scalar(value: impl Into<String>) -> Self {
        FilterValue::Scalar(value.into())
    }

    pub fn list<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        FilterValue::List(values.into_iter().map(Into::into).collect())
    }

    /// An empty list constrains nothing
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Scalar(v) => v.is_empty(),
            FilterValue::List(vs) => vs.is_empty(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Ordered collection of `(field, value)` constraints. Iteration order is
/// insertion order, which determines the order of constraints in the
/// generated backend query, but not its meaning.
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    entries: Vec<(String, FilterValue)>,
}

impl SearchFilters {
    /// Field name reserved for entry kind selection. It is always set from
    /// the resolved [`crate::EntryKind`], never supplied by the caller.
    pub const KIND_FIELD: &'static str = "type";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, value: FilterValue) {
        self.entries.push((field.into(), value));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.entries.iter().map(|(f, v)| (f.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<F: Into<String>> FromIterator<(F, FilterValue)> for SearchFilters {
    fn from_iter<T: IntoIterator<Item = (F, FilterValue)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().map(|(f, v)| (f.into(), v)).collect(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Inbound body of a filtered search call
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub filters: HashMap<String, FilterValue>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
