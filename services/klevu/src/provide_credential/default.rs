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

use crate::provide_credential::{ConfigCredentialProvider, EnvCredentialProvider};
use crate::{AccountCredentials, Config};
use async_trait::async_trait;
use klevusign_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

/// DefaultCredentialProvider is a loader that will try to load credential via default chains.
///
/// Resolution order:
///
/// 1. Config
/// 2. Environment variables
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<AccountCredentials>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new(Arc::new(Config::default()))
    }
}

impl DefaultCredentialProvider {
    /// Create a new `DefaultCredentialProvider` instance.
    pub fn new(config: Arc<Config>) -> Self {
        let chain = ProvideCredentialChain::new()
            .push(ConfigCredentialProvider::new(config))
            .push(EnvCredentialProvider::new());

        Self { chain }
    }

    /// Create with a custom credential chain.
    pub fn with_chain(chain: ProvideCredentialChain<AccountCredentials>) -> Self {
        Self { chain }
    }

    /// Add a credential provider to the front of the default chain.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use klevusign_klevu::{DefaultCredentialProvider, StaticCredentialProvider};
    ///
    /// let provider = DefaultCredentialProvider::default()
    ///     .push_front(StaticCredentialProvider::new("klevu-1234567890", "ABCDE1234567890"));
    /// ```
    pub fn push_front(
        mut self,
        provider: impl ProvideCredential<Credential = AccountCredentials>,
    ) -> Self {
        self.chain = self.chain.push_front(provider);
        self
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = AccountCredentials;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::StaticCredentialProvider;
    use klevusign_core::StaticEnv;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_default_loader_without_env() -> anyhow::Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();

        let cred = DefaultCredentialProvider::default()
            .provide_credential(&Context::new())
            .await?;
        assert!(cred.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_default_loader_with_env() -> anyhow::Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();

        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (KLEVU_JS_API_KEY.to_string(), "klevu-1234567890".to_string()),
                (KLEVU_REST_AUTH_KEY.to_string(), "ABCDE1234567890".to_string()),
            ]),
        });

        let cred = DefaultCredentialProvider::default()
            .provide_credential(&ctx)
            .await?
            .expect("credential must be loaded");
        assert_eq!(cred.js_api_key(), "klevu-1234567890");

        Ok(())
    }

    #[tokio::test]
    async fn test_incomplete_config_falls_through_to_env() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (KLEVU_JS_API_KEY.to_string(), "klevu-222".to_string()),
                (KLEVU_REST_AUTH_KEY.to_string(), "ENVSECRET123".to_string()),
            ]),
        });
        let config = Config::new().with_js_api_key("klevu-111");

        let cred = DefaultCredentialProvider::new(Arc::new(config))
            .provide_credential(&ctx)
            .await?
            .expect("credential must be loaded");
        assert_eq!(cred.js_api_key(), "klevu-222");
        assert_eq!(cred.rest_auth_key(), "ENVSECRET123");

        Ok(())
    }

    #[tokio::test]
    async fn test_push_front_takes_priority() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (KLEVU_JS_API_KEY.to_string(), "klevu-1234567890".to_string()),
                (KLEVU_REST_AUTH_KEY.to_string(), "ABCDE1234567890".to_string()),
            ]),
        });

        let cred = DefaultCredentialProvider::default()
            .push_front(StaticCredentialProvider::new("klevu-42", "STATICKEY123"))
            .provide_credential(&ctx)
            .await?
            .expect("credential must be loaded");
        assert_eq!(cred.js_api_key(), "klevu-42");

        Ok(())
    }
}
