// Copyright Nansen Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use futures::TryStreamExt;
use internal_error::InternalError;

use crate::{CatalogEntry, EntryPageStream};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct PagedSearchExecutor {}

impl PagedSearchExecutor {
    /// Walks the paged result stream, keeping the entries of the requested
    /// 0-based page and estimating the total result count.
    ///
    /// The backend reports no exact totals, so every visited page adds a
    /// full `page_size` to the running count, and after the stream ends the
    /// slack of the final, possibly partial page is subtracted. The result
    /// over-counts by at most one page and callers must treat it as an
    /// estimate.
    ///
    /// A `page_index` past the end of the stream yields no entries while
    /// the estimate still covers the whole stream. An empty stream yields
    /// `(0, [])`.
    pub async fn execute(
        mut pages: EntryPageStream,
        page_size: usize,
        page_index: usize,
    ) -> Result<(usize, Vec<CatalogEntry>), InternalError> {
        let mut entries = Vec::new();
        let mut total_count = 0usize;
        let mut last_page_len = None;
        let mut page_position = 0usize;

        while let Some(page) = pages.try_next().await? {
            total_count += page_size;
            last_page_len = Some(page.len());

            if page_position == page_index {
                entries = page;
            }

            page_position += 1;
        }

        match last_page_len {
            None => Ok((0, entries)),
            Some(len) => {
                let total_count = total_count.saturating_sub(page_size.saturating_sub(len));
                Ok((total_count, entries))
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
