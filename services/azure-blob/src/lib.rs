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

//! Azure Blob Storage client built on Shared Key signing.
//!
//! This crate provides:
//! - Connection string parsing into [`ConnectionConfig`]
//! - Shared Key request signing with [`RequestSigner`]
//! - Read-only blob links through service SAS
//! - [`BlobClient`] for writing, appending, reading, deleting and listing blobs
//!
//! # Example
//!
//! ```rust,no_run
//! use anyhow::Result;
//! use blobsign_azure_blob::{BlobClient, BlobPayload, BlobType, PutBlobOptions};
//! use blobsign_core::{Context, OsEnv};
//! use blobsign_http_send_reqwest::ReqwestHttpSend;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::new()
//!         .with_http_send(ReqwestHttpSend::default())
//!         .with_env(OsEnv);
//!
//!     let client = BlobClient::from_connection_string(
//!         ctx,
//!         "AccountName=acct;AccountKey=eHh4eHh4eHh4eHh4eHh4eHh4eHh4eHh4eHh4eHh4eHg=",
//!     )?;
//!
//!     client
//!         .put_blob(
//!             "/container/hello.txt",
//!             BlobPayload::text("hello, world"),
//!             BlobType::BlockBlob,
//!             PutBlobOptions::new().with_content_type("text/plain"),
//!         )
//!         .await?;
//!
//!     let link = client.get_blob_link("/container/hello.txt", None)?;
//!     println!("share: {link}");
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

mod constants;

mod error;
pub use error::{Error, Result, StorageError};

mod config;
pub use config::ConnectionConfig;

mod connection_string;

mod credential;
pub use credential::Credential;

mod uri;
pub use uri::{BlobPath, UriBuilder};

mod service_sas;
pub use service_sas::ServiceSharedAccessSignature;

mod sign_request;
pub use sign_request::RequestSigner;

mod blob;
pub use blob::{BlobPayload, BlobType, PutBlobOptions};

mod client;
pub use client::BlobClient;
