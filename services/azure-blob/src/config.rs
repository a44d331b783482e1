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

use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

use blobsign_core::utils::Redact;
use blobsign_core::Context;
use http::Uri;
use percent_encoding::percent_decode_str;

use crate::constants::*;
use crate::{connection_string, Credential, Error, Result};

/// ConnectionConfig carries everything parsed from an account connection string.
///
/// It is built once and never mutated afterwards.
#[derive(Clone)]
#[cfg_attr(test, derive(PartialEq))]
pub struct ConnectionConfig {
    /// `DefaultEndpointsProtocol`, `https` is used when absent.
    pub protocol: Option<String>,
    /// `EndpointSuffix`, `core.windows.net` is used when absent.
    pub endpoint_suffix: Option<String>,
    /// `AccountName`.
    pub account_name: String,
    /// `AccountKey` as given, base64 encoded.
    pub account_key: String,
    /// `BlobEndpoint`, overrides the endpoint built from the other fields.
    pub blob_endpoint: Option<String>,
    /// Keys we don't recognize, kept as-is.
    pub extra: HashMap<String, String>,

    /// `account_key` decoded.
    pub(crate) key: Vec<u8>,
}

impl Debug for ConnectionConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("protocol", &self.protocol)
            .field("endpoint_suffix", &self.endpoint_suffix)
            .field("account_name", &self.account_name)
            .field("account_key", &Redact::from(&self.account_key))
            .field("blob_endpoint", &self.blob_endpoint)
            .field("extra", &self.extra.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ConnectionConfig {
    /// Parses an [Azure connection string][1] into a configuration object.
    ///
    /// `AccountName` and a base64 `AccountKey` are required. Parsing is all or
    /// nothing: any malformed segment fails the whole string.
    ///
    /// An example of a connection string looks like:
    ///
    /// ```txt
    /// DefaultEndpointsProtocol=https;
    /// AccountName=mystorageaccount;
    /// AccountKey=Eby8vdM02xNOcqFlqUwJPLlmEtlCDXJ1OUzFT50uSRZ6IFsuFq2UVErCz4I6tq/K1SZFPTOtr/KBHBeksoGMGw==;
    /// EndpointSuffix=core.windows.net
    /// ```
    ///
    /// [1]: https://learn.microsoft.com/en-us/azure/storage/common/storage-configure-connection-string
    pub fn try_from_connection_string(conn_str: &str) -> Result<Self> {
        connection_string::parse(conn_str)
    }

    /// Load config from the `AZURE_STORAGE_CONNECTION_STRING` env.
    pub fn from_env(ctx: &Context) -> Result<Self> {
        let conn_str = ctx.env_var(AZURE_STORAGE_CONNECTION_STRING).ok_or_else(|| {
            Error::Core(blobsign_core::Error::config_invalid(format!(
                "env {AZURE_STORAGE_CONNECTION_STRING} is not set"
            )))
        })?;

        Self::try_from_connection_string(&conn_str)
    }

    /// Scheme used to build endpoints.
    pub fn protocol(&self) -> &str {
        self.protocol
            .as_deref()
            .unwrap_or(DEFAULT_ENDPOINTS_PROTOCOL)
    }

    /// Suffix used to build endpoints.
    pub fn endpoint_suffix(&self) -> &str {
        self.endpoint_suffix
            .as_deref()
            .unwrap_or(DEFAULT_ENDPOINT_SUFFIX)
    }

    /// Credential used to sign requests for this account.
    pub fn credential(&self) -> Credential {
        Credential::new(&self.account_name, self.key.clone())
    }

    /// Path of the `BlobEndpoint` override, percent decoded.
    ///
    /// `None` without an override or when the override has no path.
    pub fn endpoint_path(&self) -> Option<String> {
        let uri = self.blob_endpoint.as_deref()?.parse::<Uri>().ok()?;
        let path = percent_decode_str(uri.path()).decode_utf8_lossy();
        let path = path.trim_end_matches('/');

        (!path.is_empty()).then(|| path.to_string())
    }
}
