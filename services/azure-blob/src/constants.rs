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

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

// Headers used in azure blob services.
pub const X_MS_DATE: &str = "x-ms-date";
pub const X_MS_VERSION: &str = "x-ms-version";
pub const X_MS_BLOB_TYPE: &str = "x-ms-blob-type";
pub const X_MS_HEADER_PREFIX: &str = "x-ms-";
pub const X_MS_META_PREFIX: &str = "x-ms-meta-";
pub const CONTENT_MD5: &str = "content-md5";

/// Service version sent with every SharedKey signed request.
pub const AZURE_VERSION: &str = "2019-12-12";

// Service SAS parameters.
pub const SAS_VERSION: &str = "2012-02-12";
pub const SAS_RESOURCE_BLOB: &str = "b";
pub const SAS_PERMISSION_READ: &str = "r";
pub const SAS_PROTOCOL: &str = "https";

// Endpoint defaults.
pub const DEFAULT_ENDPOINTS_PROTOCOL: &str = "https";
pub const DEFAULT_ENDPOINT_SUFFIX: &str = "core.windows.net";

// Env values used in azure blob services.
pub const AZURE_STORAGE_CONNECTION_STRING: &str = "AZURE_STORAGE_CONNECTION_STRING";

/// AsciiSet for query values, only unreserved characters are left as-is.
pub static AZURE_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// AsciiSet for blob paths, same as query but keeps `/`.
pub static AZURE_PATH_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
