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

use blobsign_core::hash::base64_decode;
use log::debug;

use crate::{ConnectionConfig, Error, Result};

const ACCOUNT_NAME: &str = "AccountName";
const ACCOUNT_KEY: &str = "AccountKey";
const BLOB_ENDPOINT: &str = "BlobEndpoint";
const DEFAULT_ENDPOINTS_PROTOCOL: &str = "DefaultEndpointsProtocol";
const ENDPOINT_SUFFIX: &str = "EndpointSuffix";
const USE_DEVELOPMENT_STORAGE: &str = "UseDevelopmentStorage";
const DEVELOPMENT_STORAGE_PROXY_URI: &str = "DevelopmentStorageProxyUri";

// Azurite defaults.
const AZURITE_DEFAULT_STORAGE_ACCOUNT_NAME: &str = "devstoreaccount1";
const AZURITE_DEFAULT_STORAGE_ACCOUNT_KEY: &str =
    "Eby8vdM02xNOcqFlqUwJPLlmEtlCDXJ1OUzFT50uSRZ6IFsuFq2UVErCz4I6tq/K1SZFPTOtr/KBHBeksoGMGw==";
const AZURITE_DEFAULT_BLOB_URI: &str = "http://127.0.0.1:10000";

/// Parses an [Azure connection string][1].
///
/// [1]: https://learn.microsoft.com/en-us/azure/storage/common/storage-configure-connection-string
pub(crate) fn parse(conn_str: &str) -> Result<ConnectionConfig> {
    let mut key_values = parse_into_key_values(conn_str)?;

    if key_values.get(USE_DEVELOPMENT_STORAGE).map(String::as_str) == Some("true") {
        apply_development_defaults(&mut key_values);
    }

    let account_name = key_values
        .remove(ACCOUNT_NAME)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::connection_string_parse("missing AccountName", conn_str))?;
    let account_key = key_values
        .remove(ACCOUNT_KEY)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::connection_string_parse("missing AccountKey", conn_str))?;
    let key = base64_decode(&account_key).map_err(|_| {
        Error::connection_string_parse("AccountKey is not valid base64", conn_str)
    })?;

    let protocol = key_values.remove(DEFAULT_ENDPOINTS_PROTOCOL);
    if let Some(protocol) = &protocol {
        if protocol != "http" && protocol != "https" {
            return Err(Error::connection_string_parse(
                format!("invalid DefaultEndpointsProtocol: {protocol}"),
                conn_str,
            ));
        }
    }

    let config = ConnectionConfig {
        protocol,
        endpoint_suffix: key_values.remove(ENDPOINT_SUFFIX),
        account_name,
        account_key,
        blob_endpoint: key_values.remove(BLOB_ENDPOINT),
        extra: key_values,
        key,
    };
    debug!("parsed connection string: {config:?}");

    Ok(config)
}

fn parse_into_key_values(conn_str: &str) -> Result<HashMap<String, String>> {
    conn_str
        .trim()
        .replace('\n', "")
        .split(';')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(|field| {
            // Never echo the field, it may be key material.
            let (key, value) = field.split_once('=').ok_or_else(|| {
                Error::connection_string_parse("expected '=' in every field", conn_str)
            })?;
            Ok((key.to_string(), value.to_string()))
        })
        .collect()
}

/// Fill the gaps for a local emulator; explicit values win.
fn apply_development_defaults(key_values: &mut HashMap<String, String>) {
    let account_name = key_values
        .entry(ACCOUNT_NAME.to_string())
        .or_insert_with(|| AZURITE_DEFAULT_STORAGE_ACCOUNT_NAME.to_string())
        .clone();
    key_values
        .entry(ACCOUNT_KEY.to_string())
        .or_insert_with(|| AZURITE_DEFAULT_STORAGE_ACCOUNT_KEY.to_string());

    if !key_values.contains_key(BLOB_ENDPOINT) {
        let proxy_uri = key_values
            .get(DEVELOPMENT_STORAGE_PROXY_URI)
            .map(String::as_str)
            .unwrap_or(AZURITE_DEFAULT_BLOB_URI);
        let endpoint = format!("{proxy_uri}/{account_name}");
        key_values.insert(BLOB_ENDPOINT.to_string(), endpoint);
    }
}
