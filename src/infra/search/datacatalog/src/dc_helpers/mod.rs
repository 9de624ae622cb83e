// Copyright Nansen Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod dc_entry_normalizer;
mod dc_label_filter;
mod dc_metadata_extractor;
mod dc_paged_search;
mod dc_query_builder;

pub use dc_entry_normalizer::*;
pub use dc_label_filter::*;
pub use dc_metadata_extractor::*;
pub use dc_paged_search::*;
pub use dc_query_builder::*;
