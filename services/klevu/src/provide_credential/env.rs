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

use crate::{constants::*, AccountCredentials};
use async_trait::async_trait;
use klevusign_core::{Context, ProvideCredential, Result};
use log::debug;

/// EnvCredentialProvider loads klevu credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `KLEVU_JS_API_KEY`: The public JS API key
/// - `KLEVU_REST_AUTH_KEY`: The secret REST AUTH key
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = AccountCredentials;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        match (envs.get(KLEVU_JS_API_KEY), envs.get(KLEVU_REST_AUTH_KEY)) {
            (Some(js_api_key), Some(rest_auth_key)) => Ok(Some(AccountCredentials::new(
                js_api_key.clone(),
                rest_auth_key.clone(),
            ))),
            _ => {
                debug!("{KLEVU_JS_API_KEY} or {KLEVU_REST_AUTH_KEY} is not set");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use klevusign_core::StaticEnv;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_env_credential_provider() -> anyhow::Result<()> {
        let envs = HashMap::from([
            (KLEVU_JS_API_KEY.to_string(), "klevu-1234567890".to_string()),
            (KLEVU_REST_AUTH_KEY.to_string(), "ABCDE1234567890".to_string()),
        ]);
        let ctx = Context::new().with_env(StaticEnv { envs });

        let cred = EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .expect("credential must be loaded");
        assert_eq!(cred.js_api_key(), "klevu-1234567890");
        assert_eq!(cred.rest_auth_key(), "ABCDE1234567890");

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_partial_credentials() -> anyhow::Result<()> {
        let envs = HashMap::from([(KLEVU_JS_API_KEY.to_string(), "klevu-1234567890".to_string())]);
        let ctx = Context::new().with_env(StaticEnv { envs });

        let cred = EnvCredentialProvider::new().provide_credential(&ctx).await?;
        assert!(cred.is_none());

        Ok(())
    }
}
