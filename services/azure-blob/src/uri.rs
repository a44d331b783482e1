// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use http::Uri;
use percent_encoding::utf8_percent_encode;

use crate::constants::*;
use crate::{ConnectionConfig, Result};

/// UriBuilder turns a logical blob path into a fully qualified endpoint uri.
#[derive(Debug, Clone, Copy)]
pub struct UriBuilder<'a> {
    config: &'a ConnectionConfig,
}

impl<'a> UriBuilder<'a> {
    /// Create a new uri builder for given config.
    pub fn new(config: &'a ConnectionConfig) -> Self {
        Self { config }
    }

    /// Build the uri for `path` with query parameters attached in the given order.
    ///
    /// - With `BlobEndpoint` set, `path` is appended to that endpoint.
    /// - Otherwise the host is `{account}.blob.{suffix}`.
    ///
    /// Path and query values are percent encoded here, callers pass them raw.
    pub fn build_uri<I, K, V>(&self, path: &str, query: I) -> Result<Uri>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let path = utf8_percent_encode(path.trim_start_matches('/'), &AZURE_PATH_ENCODE_SET);

        let mut url = match &self.config.blob_endpoint {
            Some(endpoint) => format!("{}/{path}", endpoint.trim_end_matches('/')),
            None => format!(
                "{}://{}.blob.{}/{path}",
                self.config.protocol(),
                self.config.account_name,
                self.config.endpoint_suffix()
            ),
        };

        for (idx, (k, v)) in query.into_iter().enumerate() {
            url.push(if idx == 0 { '?' } else { '&' });
            url.push_str(k.as_ref());
            url.push('=');
            url.extend(utf8_percent_encode(v.as_ref(), &AZURE_QUERY_ENCODE_SET));
        }

        Ok(url.parse::<Uri>()?)
    }
}

/// BlobPath is a logical path split into container and the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobPath {
    /// Container name.
    pub container: String,
    /// Everything after the container, `None` when nothing follows.
    pub rest: Option<String>,
}

impl BlobPath {
    /// Split `/container/rest` on the first `/` after the leading one.
    pub fn parse(path: &str) -> Self {
        let path = path.strip_prefix('/').unwrap_or(path);

        match path.split_once('/') {
            Some((container, rest)) if !rest.is_empty() => BlobPath {
                container: container.to_string(),
                rest: Some(rest.to_string()),
            },
            Some((container, _)) => BlobPath {
                container: container.to_string(),
                rest: None,
            },
            None => BlobPath {
                container: path.to_string(),
                rest: None,
            },
        }
    }
}
