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

use blobsign_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential for Shared Key authorization: account name plus decoded account key.
#[derive(Clone)]
pub struct Credential {
    account_name: String,
    account_key: Vec<u8>,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("account_name", &self.account_name)
            .field("account_key", &format_args!("<{} bytes>", self.account_key.len()))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.account_name.is_empty() && !self.account_key.is_empty()
    }
}

impl Credential {
    /// Create a new credential from an account name and the decoded account key.
    pub fn new(account_name: &str, account_key: Vec<u8>) -> Self {
        Self {
            account_name: account_name.to_string(),
            account_key,
        }
    }

    /// Storage account name.
    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    /// Decoded account key.
    pub fn account_key(&self) -> &[u8] {
        &self.account_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_is_valid() {
        assert!(Credential::new("acct", vec![b'x'; 32]).is_valid());
        assert!(!Credential::new("", vec![b'x'; 32]).is_valid());
        assert!(!Credential::new("acct", vec![]).is_valid());
    }

    #[test]
    fn test_credential_debug() {
        let cred = Credential::new("acct", b"secret".to_vec());
        assert_eq!(
            format!("{cred:?}"),
            r#"Credential { account_name: "acct", account_key: <6 bytes> }"#
        );
    }
}
