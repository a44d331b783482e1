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

//! Azure Blob Storage support with convenience APIs.

pub use blobsign_azure_blob::*;

/// Create a blob client from `AZURE_STORAGE_CONNECTION_STRING`.
///
/// The client sends requests with [`crate::default_context`].
///
/// # Example
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> blobsign::azure::Result<()> {
/// let client = blobsign::azure::default_client()?;
/// let link = client.get_blob_link("/container/report.pdf", None)?;
/// println!("{link}");
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_client() -> Result<BlobClient> {
    let ctx = crate::default_context();
    let config = ConnectionConfig::from_env(&ctx)?;
    Ok(BlobClient::new(ctx, config))
}
