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

//! Klevu bearer token signing for klevusign.
//!
//! This crate signs requests to the Klevu indexing APIs. A request carries
//! four signing headers, and its `Authorization` header holds an HMAC of
//! a canonical string built from the method, path, query, those headers and
//! the body, keyed by the account's REST AUTH key.
//!
//! ## Quick Start
//!
//! ```no_run
//! use klevusign_core::{Context, OsEnv, Result, Signer};
//! use klevusign_klevu::{Config, DefaultCredentialProvider, RequestSigner};
//! use std::io::Cursor;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::new().with_env(OsEnv);
//!
//!     let config = Config::new()
//!         .with_js_api_key("klevu-1234567890")
//!         .with_rest_auth_key("ABCDE1234567890");
//!     let builder = RequestSigner::from_config(&config);
//!     let loader = DefaultCredentialProvider::new(config.into());
//!
//!     let signer = Signer::new(ctx, loader, builder);
//!
//!     let (mut parts, mut body) = http::Request::put("https://indexing.ksearchnet.com/v2/batch")
//!         .body(Cursor::new(br#"[{"id":"1"}]"#.to_vec()))?
//!         .into_parts();
//!     signer.sign(&mut parts, &mut body).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Computing a token directly
//!
//! When the signing headers are set by the caller, [`BearerTokenProvider`]
//! returns the token without touching the request:
//!
//! ```no_run
//! use klevusign_klevu::{AccountCredentials, BearerTokenProvider};
//! use std::io::Cursor;
//!
//! # fn example() -> klevusign_core::Result<()> {
//! let (parts, mut body) = http::Request::get("https://indexing.ksearchnet.com/v2/batch")
//!     .header("X-KLEVU-TIMESTAMP", "2024-01-01T00:00:00.000Z")
//!     .header("X-KLEVU-APIKEY", "klevu-1234567890")
//!     .header("X-KLEVU-AUTH-ALGO", "HmacSHA384")
//!     .header("Content-Type", "application/json")
//!     .body(Cursor::new(Vec::new()))?
//!     .into_parts();
//!
//! let credentials = AccountCredentials::new("klevu-1234567890", "ABCDE1234567890");
//! let token = BearerTokenProvider::new().get_for_request(&credentials, &parts, &mut body)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Credential Sources
//!
//! ### Environment Variables
//!
//! ```bash
//! export KLEVU_JS_API_KEY=klevu-1234567890
//! export KLEVU_REST_AUTH_KEY=ABCDE1234567890
//! ```
//!
//! Both must be set for [`EnvCredentialProvider`] to return credentials.
//!
//! ### Configuration
//!
//! [`ConfigCredentialProvider`] reads keys from [`Config`]. The default chain
//! tries it first and [`EnvCredentialProvider`] second.

mod constants;

mod algorithm;
pub use algorithm::{derive_identifier, AuthAlgorithm};

mod canonical;
pub use canonical::canonical_string;

mod config;
pub use config::Config;

mod credential;
pub use credential::AccountCredentials;

pub mod validate;

mod token;
pub use token::BearerTokenProvider;

mod sign_request;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::*;
