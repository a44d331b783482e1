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

use std::fmt::{Debug, Formatter};

use blobsign_core::utils::Redact;
use http::{HeaderMap, StatusCode};
use thiserror::Error;

/// Errors returned by the blob client.
#[derive(Error)]
pub enum Error {
    /// The connection string is malformed or incomplete.
    ///
    /// The original string is kept for inspection but never printed since it
    /// usually carries the account key.
    #[error("failed to parse connection string: {reason}")]
    ConnectionStringParse {
        /// Why parsing failed.
        reason: String,
        /// The connection string as given by the caller.
        connection_string: String,
    },
    /// Caller input rejected before any request was sent.
    #[error("invalid input: {0}")]
    Validation(String),
    /// The service answered a write with an unexpected status.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// Signing or transport failure.
    #[error(transparent)]
    Core(#[from] blobsign_core::Error),
}

impl Error {
    pub(crate) fn connection_string_parse(reason: impl Into<String>, conn_str: &str) -> Self {
        Error::ConnectionStringParse {
            reason: reason.into(),
            connection_string: conn_str.to_string(),
        }
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ConnectionStringParse {
                reason,
                connection_string,
            } => f
                .debug_struct("ConnectionStringParse")
                .field("reason", reason)
                .field("connection_string", &Redact::from(connection_string))
                .finish(),
            Error::Validation(msg) => f.debug_tuple("Validation").field(msg).finish(),
            Error::Storage(err) => f.debug_tuple("Storage").field(err).finish(),
            Error::Core(err) => f.debug_tuple("Core").field(err).finish(),
        }
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Error::Core(err.into())
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Error::Core(err.into())
    }
}

impl From<http::header::InvalidHeaderName> for Error {
    fn from(err: http::header::InvalidHeaderName) -> Self {
        Error::Core(err.into())
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Error::Core(err.into())
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

/// StorageError carries the response of a write the service refused.
///
/// All fields are taken verbatim from the response.
#[derive(Error, Debug, Clone)]
#[error("storage service responded {status}: {message}")]
pub struct StorageError {
    /// Response body, decoded as lossy utf-8.
    pub message: String,
    /// Response status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
}
