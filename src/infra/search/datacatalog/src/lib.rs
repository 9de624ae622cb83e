// Copyright Nansen Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Google Data Catalog implementation of the catalog search backend.
//!
//! Translates the generic search request shape into the Data Catalog query
//! DSL, drives its paged search API, and normalizes raw catalog entries into
//! the uniform result model of [`nansen_search`].

mod dc_client;
mod dc_helpers;
mod dc_search_config;
mod dc_search_proxy;

pub use dc_client::*;
pub use dc_helpers::*;
pub use dc_search_config::*;
pub use dc_search_proxy::*;
