// Copyright Nansen Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod entry_kind;
mod search_filters;
mod search_results;

pub use entry_kind::*;
pub use search_filters::*;
pub use search_results::*;
