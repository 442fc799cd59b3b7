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

use crate::AccountCredentials;
use async_trait::async_trait;
use klevusign_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider provides static klevu account credentials.
///
/// This provider is used when you have the JS API key and REST AUTH key
/// directly and want to use them without any dynamic loading.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credentials: AccountCredentials,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with JS API key and REST AUTH key.
    pub fn new(js_api_key: &str, rest_auth_key: &str) -> Self {
        Self {
            credentials: AccountCredentials::new(js_api_key, rest_auth_key),
        }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = AccountCredentials;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credentials.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_credential_provider() -> anyhow::Result<()> {
        let provider = StaticCredentialProvider::new("klevu-1234567890", "ABCDE1234567890");
        let cred = provider
            .provide_credential(&Context::new())
            .await?
            .expect("credential must be provided");

        assert_eq!(cred.js_api_key(), "klevu-1234567890");
        assert_eq!(cred.rest_auth_key(), "ABCDE1234567890");
        Ok(())
    }
}
