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

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use bytes::Bytes;

use crate::{Error, Result};

/// BlobType decides how a blob is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlobType {
    /// Written in one shot per write call.
    BlockBlob,
    /// Created empty, then grown by appending blocks.
    AppendBlob,
}

impl BlobType {
    /// Name used in the `x-ms-blob-type` header.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlobType::BlockBlob => "BlockBlob",
            BlobType::AppendBlob => "AppendBlob",
        }
    }
}

impl Display for BlobType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// BlobPayload is the content of a write, given either as text or as bytes.
///
/// Exactly one of `body` and `body_bytes` must be set, this is checked before
/// any request goes out.
#[derive(Debug, Clone, Default)]
pub struct BlobPayload {
    body: Option<String>,
    body_bytes: Option<Bytes>,
}

impl BlobPayload {
    /// Create an empty payload, set one of the bodies before use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Payload from text.
    pub fn text(body: impl Into<String>) -> Self {
        Self::new().with_body(body)
    }

    /// Payload from bytes.
    pub fn bytes(body_bytes: impl Into<Bytes>) -> Self {
        Self::new().with_body_bytes(body_bytes)
    }

    /// Set the text body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the bytes body.
    pub fn with_body_bytes(mut self, body_bytes: impl Into<Bytes>) -> Self {
        self.body_bytes = Some(body_bytes.into());
        self
    }

    pub(crate) fn into_content(self) -> Result<Bytes> {
        match (self.body, self.body_bytes) {
            (Some(body), None) => Ok(Bytes::from(body)),
            (None, Some(body_bytes)) => Ok(body_bytes),
            (Some(_), Some(_)) => Err(Error::Validation(
                "body and body_bytes are mutually exclusive, got both".to_string(),
            )),
            (None, None) => Err(Error::Validation(
                "one of body and body_bytes is required, got neither".to_string(),
            )),
        }
    }
}

impl From<String> for BlobPayload {
    fn from(body: String) -> Self {
        Self::text(body)
    }
}

impl From<&str> for BlobPayload {
    fn from(body: &str) -> Self {
        Self::text(body)
    }
}

impl From<Bytes> for BlobPayload {
    fn from(body_bytes: Bytes) -> Self {
        Self::bytes(body_bytes)
    }
}

impl From<Vec<u8>> for BlobPayload {
    fn from(body_bytes: Vec<u8>) -> Self {
        Self::bytes(body_bytes)
    }
}

/// Optional headers for `put_blob`.
#[derive(Debug, Clone, Default)]
pub struct PutBlobOptions {
    pub(crate) content_type: Option<String>,
    pub(crate) metadata: BTreeMap<String, String>,
}

impl PutBlobOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `Content-Type` of the blob.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Add a metadata entry, sent as `x-ms-meta-{name}`.
    pub fn with_metadata(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(name.into(), value.into());
        self
    }
}
