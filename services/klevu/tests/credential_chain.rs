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

use std::io::Cursor;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use http::header::AUTHORIZATION;
use http::Request;
use klevusign_core::{Context, ErrorKind, ProvideCredential, ProvideCredentialChain, Result, Signer};
use klevusign_klevu::{AccountCredentials, DefaultCredentialProvider, RequestSigner};

#[derive(Debug)]
struct CountingProvider {
    credential: Option<AccountCredentials>,
    call_count: Arc<Mutex<usize>>,
}

#[async_trait]
impl ProvideCredential for CountingProvider {
    type Credential = AccountCredentials;

    async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
        *self.call_count.lock().unwrap() += 1;
        Ok(self.credential.clone())
    }
}

fn signer(provider: impl ProvideCredential<Credential = AccountCredentials>) -> Signer<AccountCredentials> {
    Signer::new(
        Context::new(),
        provider,
        RequestSigner::new().with_time(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()),
    )
}

fn request() -> (http::request::Parts, Cursor<Vec<u8>>) {
    Request::put("https://indexing.ksearchnet.com/v2/batch")
        .body(Cursor::new(b"[]".to_vec()))
        .unwrap()
        .into_parts()
}

#[tokio::test]
async fn test_signer_caches_valid_credential() {
    let count = Arc::new(Mutex::new(0));
    let signer = signer(CountingProvider {
        credential: Some(AccountCredentials::new("klevu-1234567890", "ABCDE1234567890")),
        call_count: count.clone(),
    });

    for _ in 0..3 {
        let (mut parts, mut body) = request();
        signer.sign(&mut parts, &mut body).await.unwrap();
        assert!(parts.headers.contains_key(AUTHORIZATION));
    }

    assert_eq!(*count.lock().unwrap(), 1);
}

#[tokio::test]
async fn test_signer_without_credential() {
    let count = Arc::new(Mutex::new(0));
    let signer = signer(CountingProvider {
        credential: None,
        call_count: count.clone(),
    });

    for _ in 0..2 {
        let (mut parts, mut body) = request();
        let err = signer.sign(&mut parts, &mut body).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    }

    // Nothing was cached, so every attempt asks the provider again.
    assert_eq!(*count.lock().unwrap(), 2);
}

#[tokio::test]
async fn test_default_provider_with_custom_chain() {
    let first = Arc::new(Mutex::new(0));
    let second = Arc::new(Mutex::new(0));
    let third = Arc::new(Mutex::new(0));

    let chain = ProvideCredentialChain::new()
        .push(CountingProvider {
            credential: None,
            call_count: first.clone(),
        })
        .push(CountingProvider {
            credential: Some(AccountCredentials::new("klevu-42", "SECONDKEY123")),
            call_count: second.clone(),
        })
        .push(CountingProvider {
            credential: Some(AccountCredentials::new("klevu-43", "THIRDKEY1234")),
            call_count: third.clone(),
        });

    let cred = DefaultCredentialProvider::with_chain(chain)
        .provide_credential(&Context::new())
        .await
        .unwrap()
        .expect("credential must be provided");

    assert_eq!(cred.js_api_key(), "klevu-42");
    assert_eq!(*first.lock().unwrap(), 1);
    assert_eq!(*second.lock().unwrap(), 1);
    assert_eq!(*third.lock().unwrap(), 0);
}
