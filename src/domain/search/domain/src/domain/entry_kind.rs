// Copyright Nansen Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Closed set of catalog entry kinds this search layer understands.
/// The kind selects which normalizer turns a raw backend entry into a
/// [`crate::NormalizedResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Table,
    Workbook,
    User,
}

impl EntryKind {
    /// Value this kind takes in a backend `type=` query constraint
    pub fn as_query_value(self) -> &'static str {
        match self {
            EntryKind::Table => "table",
            EntryKind::Workbook => "workbook",
            EntryKind::User => "user",
        }
    }

    /// Derives the entry kind from a namespaced index identifier such as
    /// `table_search_index`; only the substring before the first `_` is
    /// significant
    pub fn from_index(index: &str) -> Result<Self, UnsupportedEntryKindError> {
        let prefix = index.split('_').next().unwrap_or_default();
        match prefix {
            "table" => Ok(EntryKind::Table),
            "workbook" => Ok(EntryKind::Workbook),
            "user" => Ok(EntryKind::User),
            _ => Err(UnsupportedEntryKindError {
                kind: prefix.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_query_value())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, thiserror::Error)]
#[error("Entry kind '{kind}' is not supported by this search backend")]
pub struct UnsupportedEntryKindError {
    pub kind: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
