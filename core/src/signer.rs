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

use crate::{Context, ProvideCredential, Result, SignRequest, SigningBody, SigningCredential};
use std::sync::{Arc, Mutex};

/// Signer is the main struct used to sign the request.
///
/// The credential is loaded lazily and reused while it stays valid. Signatures
/// are computed for every call.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
    credential: Arc<Mutex<Option<K>>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,

            loader: Arc::new(loader),
            builder: Arc::new(builder),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Signing request.
    pub async fn sign(
        &self,
        req: &mut http::request::Parts,
        body: &mut dyn SigningBody,
    ) -> Result<()> {
        let credential = self.credential.lock().expect("lock poisoned").clone();
        let credential = if credential.is_valid() {
            credential
        } else {
            let loaded = self.loader.provide_credential(&self.ctx).await?;
            *self.credential.lock().expect("lock poisoned") = loaded.clone();
            loaded
        };

        self.builder
            .sign_request(&self.ctx, req, body, credential.as_ref())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::io::{Cursor, Read};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Debug)]
    struct Token(String);

    impl SigningCredential for Token {
        fn is_valid(&self) -> bool {
            !self.0.is_empty()
        }
    }

    #[derive(Debug)]
    struct Loader(Arc<AtomicUsize>, &'static str);

    #[async_trait]
    impl ProvideCredential for Loader {
        type Credential = Token;

        async fn provide_credential(&self, _: &Context) -> Result<Option<Token>> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(Some(Token(self.1.to_string())))
        }
    }

    #[derive(Debug)]
    struct Builder;

    #[async_trait]
    impl SignRequest for Builder {
        type Credential = Token;

        async fn sign_request(
            &self,
            _: &Context,
            req: &mut http::request::Parts,
            body: &mut dyn SigningBody,
            credential: Option<&Token>,
        ) -> Result<()> {
            let token =
                credential.ok_or_else(|| crate::Error::credential_invalid("missing credential"))?;
            let mut content = String::new();
            body.read_to_string(&mut content)?;
            body.rewind()?;

            req.headers
                .insert("x-signature", format!("{}:{content}", token.0).parse()?);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_sign_reuses_valid_credential() -> Result<()> {
        let calls = Arc::new(AtomicUsize::new(0));
        let signer = Signer::new(Context::new(), Loader(calls.clone(), "token"), Builder);

        for _ in 0..2 {
            let (mut parts, mut body) = http::Request::post("https://example.com")
                .body(Cursor::new(b"payload".to_vec()))?
                .into_parts();
            signer.sign(&mut parts, &mut body).await?;
            assert_eq!(parts.headers["x-signature"], "token:payload");
            assert_eq!(body.position(), 0);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_sign_reloads_invalid_credential() -> Result<()> {
        let calls = Arc::new(AtomicUsize::new(0));
        let signer = Signer::new(Context::new(), Loader(calls.clone(), ""), Builder);

        for _ in 0..2 {
            let (mut parts, mut body) = http::Request::post("https://example.com")
                .body(Cursor::new(Vec::new()))?
                .into_parts();
            signer.sign(&mut parts, &mut body).await?;
        }

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        Ok(())
    }
}
