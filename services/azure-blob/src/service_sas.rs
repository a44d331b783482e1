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

use blobsign_core::hash::base64_hmac_sha256;
use blobsign_core::time::{format_iso8601, DateTime};
use log::debug;

use crate::constants::*;
use crate::Credential;

/// ServiceSharedAccessSignature mints a read-only service SAS for a single blob.
///
/// - [Create a service SAS](https://learn.microsoft.com/en-us/rest/api/storageservices/create-service-sas)
pub struct ServiceSharedAccessSignature<'a> {
    credential: &'a Credential,
    /// Logical blob path, `/{container}/{blob}`, not percent encoded.
    path: &'a str,
    expiry: DateTime,
}

impl<'a> ServiceSharedAccessSignature<'a> {
    /// Create a SAS signer for `path` valid until `expiry`.
    pub fn new(credential: &'a Credential, path: &'a str, expiry: DateTime) -> Self {
        Self {
            credential,
            path,
            expiry,
        }
    }

    /// String to sign for version `2012-02-12`.
    ///
    /// ```text
    /// signedpermissions + "\n" +
    /// signedstart + "\n" +
    /// signedexpiry + "\n" +
    /// canonicalizedresource + "\n" +
    /// signedidentifier + "\n" +
    /// signedversion
    /// ```
    fn string_to_sign(&self) -> String {
        format!(
            "{}\n{}\n{}\n{}\n{}\n{}",
            SAS_PERMISSION_READ,
            "",
            format_iso8601(self.expiry),
            self.canonicalized_resource(),
            "",
            SAS_VERSION,
        )
    }

    fn canonicalized_resource(&self) -> String {
        let path = if self.path.starts_with('/') {
            self.path.to_string()
        } else {
            format!("/{}", self.path)
        };

        format!("/{}{}", self.credential.account_name(), path)
    }

    fn signature(&self) -> String {
        let string_to_sign = self.string_to_sign();
        debug!("sas string to sign: {string_to_sign:?}");

        base64_hmac_sha256(self.credential.account_key(), string_to_sign.as_bytes())
    }

    /// Query parameters carrying the SAS, values are not percent encoded.
    pub fn token(&self) -> Vec<(String, String)> {
        vec![
            ("sr".to_string(), SAS_RESOURCE_BLOB.to_string()),
            ("sp".to_string(), SAS_PERMISSION_READ.to_string()),
            ("se".to_string(), format_iso8601(self.expiry)),
            ("sv".to_string(), SAS_VERSION.to_string()),
            ("spr".to_string(), SAS_PROTOCOL.to_string()),
            ("sig".to_string(), self.signature()),
        ]
    }
}
