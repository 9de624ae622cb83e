// Copyright Nansen Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashMap;

use internal_error::InternalError;

use crate::DataCatalogClient;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct ResourceMetadataExtractor {}

impl ResourceMetadataExtractor {
    /// Flattens the descriptive tags of a resource into a single field map.
    ///
    /// Only tags whose template display name matches the pattern contribute.
    /// When several matching tags carry the same field key, the value of the
    /// later tag wins.
    pub async fn extract(
        client: &dyn DataCatalogClient,
        resource_name: &str,
        display_name_pattern: &regex::Regex,
    ) -> Result<HashMap<String, String>, InternalError> {
        let tags = client.list_tags(resource_name).await?;

        let mut fields = HashMap::new();
        for tag in tags {
            if !display_name_pattern.is_match(&tag.template_display_name) {
                continue;
            }
            for (key, field) in tag.fields {
                if let Some(value) = field.string_value {
                    fields.insert(key, value);
                }
            }
        }

        Ok(fields)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
