// Copyright Nansen Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Name that matches any label when the caller wants to filter by value
/// alone
pub const LABEL_NAME_WILDCARD: &str = "*";

const LABEL_SEPARATOR: char = ':';

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Parses a raw label filter value into a `(name, value)` pair.
///
/// A bare token filters by value under the wildcard name, `name:value`
/// filters by both. Anything with more separators is malformed and yields
/// `None`, and the caller is expected to drop the filter, not to fail.
pub fn parse_label(raw: &str) -> Option<(&str, &str)> {
    let mut parts = raw.split(LABEL_SEPARATOR);

    match (parts.next(), parts.next(), parts.next()) {
        (Some(value), None, None) => Some((LABEL_NAME_WILDCARD, value)),
        (Some(name), Some(value), None) => Some((name, value)),
        _ => None,
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
