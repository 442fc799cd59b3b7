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

use klevusign_core::{utils::Redact, SigningCredential};

/// Account credentials used to sign klevu requests.
///
/// - `js_api_key` is the public key, e.g. `klevu-1234567890`.
/// - `rest_auth_key` is the secret key the token is derived from.
#[derive(Clone, PartialEq, Eq)]
pub struct AccountCredentials {
    js_api_key: String,
    rest_auth_key: String,
}

impl AccountCredentials {
    /// Create new account credentials.
    pub fn new(js_api_key: impl Into<String>, rest_auth_key: impl Into<String>) -> Self {
        Self {
            js_api_key: js_api_key.into(),
            rest_auth_key: rest_auth_key.into(),
        }
    }

    /// The public key.
    pub fn js_api_key(&self) -> &str {
        &self.js_api_key
    }

    /// The secret key.
    pub fn rest_auth_key(&self) -> &str {
        &self.rest_auth_key
    }
}

impl Debug for AccountCredentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountCredentials")
            .field("js_api_key", &Redact::from(&self.js_api_key))
            .field("rest_auth_key", &Redact::from(&self.rest_auth_key))
            .finish()
    }
}

impl SigningCredential for AccountCredentials {
    fn is_valid(&self) -> bool {
        !self.js_api_key.is_empty() && !self.rest_auth_key.is_empty()
    }
}
