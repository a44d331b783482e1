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

use std::sync::Arc;

use blobsign_core::time::{now, DateTime};
use blobsign_core::{body_to_bytes, Body, Context, SignRequest};
use bytes::Bytes;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::{Request, Response, StatusCode, Uri};
use log::{debug, warn};

use crate::constants::*;
use crate::service_sas::ServiceSharedAccessSignature;
use crate::{
    BlobPath, BlobPayload, BlobType, ConnectionConfig, Credential, PutBlobOptions,
    RequestSigner, Result, StorageError, UriBuilder,
};

/// BlobClient issues signed requests against a single storage account.
///
/// The client holds no mutable state, clone it freely and share it across tasks.
#[derive(Debug, Clone)]
pub struct BlobClient {
    ctx: Context,
    config: Arc<ConnectionConfig>,
    credential: Credential,
    signer: Arc<RequestSigner>,
}

impl BlobClient {
    /// Create a new client for the account described by `config`.
    pub fn new(ctx: Context, config: ConnectionConfig) -> Self {
        let credential = config.credential();
        let mut signer = RequestSigner::new();
        if let Some(prefix) = config.endpoint_path() {
            signer = signer.with_path_prefix(prefix);
        }

        Self {
            ctx,
            config: Arc::new(config),
            credential,
            signer: Arc::new(signer),
        }
    }

    /// Create a new client from a connection string.
    pub fn from_connection_string(ctx: Context, conn_str: &str) -> Result<Self> {
        let config = ConnectionConfig::try_from_connection_string(conn_str)?;
        Ok(Self::new(ctx, config))
    }

    /// Config of this client.
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Create a blob at `path`.
    ///
    /// - `BlockBlob`: the payload is uploaded with the create request.
    /// - `AppendBlob`: the blob is created empty, then a non-empty payload is
    ///   sent with [`BlobClient::append_block`].
    ///
    /// The two requests of an append blob are not atomic. If the append fails,
    /// the blob stays created and empty and the append error is returned.
    pub async fn put_blob(
        &self,
        path: &str,
        payload: BlobPayload,
        blob_type: BlobType,
        opts: PutBlobOptions,
    ) -> Result<()> {
        let content = payload.into_content()?;

        let body = match blob_type {
            BlobType::BlockBlob => content.clone(),
            BlobType::AppendBlob => Bytes::new(),
        };

        let uri = UriBuilder::new(&self.config).build_uri(path, Vec::<(&str, &str)>::new())?;
        let mut req = Request::put(uri).header(X_MS_BLOB_TYPE, blob_type.as_str());
        for (name, value) in &opts.metadata {
            req = req.header(format!("{X_MS_META_PREFIX}{name}"), value);
        }
        if let Some(content_type) = &opts.content_type {
            req = req.header(CONTENT_TYPE, content_type);
        }
        let req = req.header(CONTENT_LENGTH, body.len()).body(body)?;

        let resp = self.send(req).await?;
        expect_created(resp).await?;

        if blob_type == BlobType::AppendBlob && !content.is_empty() {
            self.append_content(path, content).await?;
        }

        Ok(())
    }

    /// Append a block to an existing append blob.
    pub async fn append_block(&self, path: &str, payload: BlobPayload) -> Result<()> {
        let content = payload.into_content()?;
        self.append_content(path, content).await
    }

    async fn append_content(&self, path: &str, content: Bytes) -> Result<()> {
        let uri = UriBuilder::new(&self.config).build_uri(path, [("comp", "appendblock")])?;
        let req = Request::put(uri)
            .header(CONTENT_LENGTH, content.len())
            .body(content)?;

        let resp = self.send(req).await?;
        expect_created(resp).await
    }

    /// Read a blob.
    ///
    /// The response is returned as-is: checking the status and reading the body
    /// is up to the caller.
    pub async fn get_blob(&self, path: &str) -> Result<Response<Body>> {
        let uri = UriBuilder::new(&self.config).build_uri(path, Vec::<(&str, &str)>::new())?;
        let req = Request::get(uri).body(Bytes::new())?;

        self.send(req).await
    }

    /// Delete a blob.
    ///
    /// The response is returned as-is: checking the status is up to the caller.
    pub async fn delete_blob(&self, path: &str) -> Result<Response<Body>> {
        let uri = UriBuilder::new(&self.config).build_uri(path, Vec::<(&str, &str)>::new())?;
        let req = Request::delete(uri).body(Bytes::new())?;

        self.send(req).await
    }

    /// List blobs of the container in `path`, filtered by the rest of `path` as prefix.
    ///
    /// `/mycontainer/logs-` lists blobs in `mycontainer` starting with `logs-`.
    /// The XML body is returned unparsed.
    pub async fn list_blobs_raw(&self, path: &str) -> Result<Response<Body>> {
        let BlobPath { container, rest } = BlobPath::parse(path);

        let mut query = vec![("restype", "container"), ("comp", "list")];
        if let Some(prefix) = rest.as_deref() {
            query.push(("prefix", prefix));
        }

        let uri = UriBuilder::new(&self.config).build_uri(&format!("/{container}"), query)?;
        let req = Request::get(uri).body(Bytes::new())?;

        self.send(req).await
    }

    /// Build a read-only link to a blob, valid until `expiry`.
    ///
    /// `expiry` defaults to one hour from now. No request is sent.
    pub fn get_blob_link(&self, path: &str, expiry: Option<DateTime>) -> Result<Uri> {
        let expiry = expiry
            .unwrap_or_else(|| now() + chrono::TimeDelta::hours(1));
        let token = ServiceSharedAccessSignature::new(&self.credential, path, expiry).token();

        UriBuilder::new(&self.config).build_uri(path, token)
    }

    async fn send(&self, req: Request<Bytes>) -> Result<Response<Body>> {
        let (mut parts, body) = req.into_parts();
        self.signer
            .sign_request(&self.ctx, &mut parts, Some(&self.credential), None)
            .await?;
        let req = Request::from_parts(parts, body);

        debug!("sending request: {} {}", req.method(), req.uri());
        Ok(self.ctx.http_send(req).await?)
    }
}

/// Drain the response and fail unless it's `201 Created`.
async fn expect_created(resp: Response<Body>) -> Result<()> {
    let (parts, body) = resp.into_parts();
    let bs = body_to_bytes(body).await?;

    if parts.status == StatusCode::CREATED {
        return Ok(());
    }

    warn!("storage service responded unexpected status: {}", parts.status);
    Err(StorageError {
        message: String::from_utf8_lossy(&bs).into_owned(),
        status: parts.status,
        headers: parts.headers,
    }
    .into())
}
