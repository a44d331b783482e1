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

use crate::{Error, Result};
use bytes::Bytes;
use http_body_util::combinators::UnsyncBoxBody;
use http_body_util::{BodyExt, Full};
use std::fmt::Debug;

/// Body is the streamed response body returned by [`HttpSend`].
///
/// The body is not buffered: callers decide whether to read it, drain it or drop it.
pub type Body = UnsyncBoxBody<Bytes, Error>;

/// HttpSend is used to send signed http requests to the storage service.
///
/// Connection pooling, TLS, timeouts and retries are all owned by the implementation.
#[async_trait::async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send http request and return the response with a streamed body.
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Body>>;
}

/// Build a [`Body`] from in-memory bytes.
pub fn body_from_bytes(bs: impl Into<Bytes>) -> Body {
    Full::new(bs.into())
        .map_err(|never| match never {})
        .boxed_unsync()
}

/// Read the whole body into memory.
pub async fn body_to_bytes(body: Body) -> Result<Bytes> {
    Ok(body.collect().await?.to_bytes())
}
