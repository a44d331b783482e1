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

//! Signed blob storage requests without effort.
//!
//! This crate re-exports [`blobsign_core`] and, behind features, the service crates:
//!
//! - `azure`: Azure Blob Storage, see [`azure`].
//! - `default-context`: a [`Context`] backed by reqwest and the OS environment.
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> blobsign::azure::Result<()> {
//! use blobsign::azure::{BlobPayload, BlobType, PutBlobOptions};
//!
//! let client = blobsign::azure::default_client()?;
//! client
//!     .put_blob(
//!         "/container/hello.txt",
//!         BlobPayload::text("hello"),
//!         BlobType::BlockBlob,
//!         PutBlobOptions::new(),
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use blobsign_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

#[cfg(feature = "azure")]
pub mod azure;
