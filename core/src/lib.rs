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

//! Core components for signing blob storage requests.
//!
//! This crate provides the foundational types and traits shared by the
//! blobsign crates. Service crates build on it to canonicalize and sign
//! requests, while transport crates plug an HTTP client into [`Context`].
//!
//! ## Overview
//!
//! - **Context**: holds the HTTP transport and environment access used by services
//! - **Traits**: [`SignRequest`] for signing and [`SigningCredential`] for validating keys
//! - **SigningRequest**: a decomposed request that signers mutate before applying it back
//!
//! ## Example
//!
//! ```no_run
//! use async_trait::async_trait;
//! use blobsign_core::{Context, Result, SignRequest, SigningCredential};
//! use http::request::Parts;
//! use std::time::Duration;
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     secret: Vec<u8>,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.secret.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MySigner;
//!
//! #[async_trait]
//! impl SignRequest for MySigner {
//!     type Credential = MyCredential;
//!
//!     async fn sign_request(
//!         &self,
//!         _ctx: &Context,
//!         req: &mut Parts,
//!         credential: Option<&Self::Credential>,
//!         _expires_in: Option<Duration>,
//!     ) -> Result<()> {
//!         let cred = credential
//!             .ok_or_else(|| blobsign_core::Error::request_invalid("credential is required"))?;
//!         let sig = blobsign_core::hash::base64_hmac_sha256(&cred.secret, b"payload");
//!         req.headers.insert("x-signature", sig.parse()?);
//!         Ok(())
//!     }
//! }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time formatting utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};
mod http_send;
pub use http_send::{body_from_bytes, body_to_bytes, Body, HttpSend};

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{SignRequest, SigningCredential};
mod request;
pub use request::{SigningMethod, SigningRequest};
