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

use std::sync::Arc;

use async_trait::async_trait;
use klevusign_core::{Context, ProvideCredential, Result};

use crate::{AccountCredentials, Config};

/// ConfigCredentialProvider will load credential from config.
///
/// Only the keys set on the config are used. Pair it with
/// [`crate::EnvCredentialProvider`] to fall back to the environment.
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new loader via config.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = AccountCredentials;

    async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
        match (&self.config.js_api_key, &self.config.rest_auth_key) {
            (Some(js_api_key), Some(rest_auth_key)) => Ok(Some(AccountCredentials::new(
                js_api_key.clone(),
                rest_auth_key.clone(),
            ))),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use klevusign_core::StaticEnv;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_config_with_credentials() -> anyhow::Result<()> {
        let config = Config::new()
            .with_js_api_key("klevu-1234567890")
            .with_rest_auth_key("ABCDE1234567890");

        let cred = ConfigCredentialProvider::new(Arc::new(config))
            .provide_credential(&Context::new())
            .await?
            .expect("credential must be loaded");
        assert_eq!(cred.js_api_key(), "klevu-1234567890");
        assert_eq!(cred.rest_auth_key(), "ABCDE1234567890");

        Ok(())
    }

    #[tokio::test]
    async fn test_config_ignores_env() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([(
                KLEVU_REST_AUTH_KEY.to_string(),
                "ABCDE1234567890".to_string(),
            )]),
        });
        let config = Config::new().with_js_api_key("klevu-1234567890");

        let cred = ConfigCredentialProvider::new(Arc::new(config))
            .provide_credential(&ctx)
            .await?;
        assert!(cred.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_config_without_keys() -> anyhow::Result<()> {
        let cred = ConfigCredentialProvider::new(Arc::new(Config::default()))
            .provide_credential(&Context::new())
            .await?;
        assert!(cred.is_none());

        Ok(())
    }
}
