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

//! Core components for signing Klevu API requests.
//!
//! This crate provides the foundational types and traits shared by the klevusign
//! services. It knows nothing about a concrete wire format; services build on top
//! of it.
//!
//! ## Overview
//!
//! - **Context**: A container that holds the environment implementation used by credential providers
//! - **Traits**: Abstract interfaces for credential loading (`ProvideCredential`), request
//!   signing (`SignRequest`) and value validation (`Validate`)
//! - **Signer**: The orchestrator that coordinates credential loading and request signing
//! - **Error**: A single error type whose validation kinds carry every collected message
//!
//! ## Example
//!
//! ```no_run
//! use async_trait::async_trait;
//! use klevusign_core::{Context, ProvideCredential, Result, SignRequest, Signer, SigningBody, SigningCredential};
//! use std::io::Cursor;
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! #[async_trait]
//! impl ProvideCredential for MyLoader {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential { key: "secret".to_string() }))
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyBuilder;
//!
//! #[async_trait]
//! impl SignRequest for MyBuilder {
//!     type Credential = MyCredential;
//!
//!     async fn sign_request(
//!         &self,
//!         _ctx: &Context,
//!         _req: &mut http::request::Parts,
//!         _body: &mut dyn SigningBody,
//!         _cred: Option<&Self::Credential>,
//!     ) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let signer = Signer::new(Context::new(), MyLoader, MyBuilder);
//!
//! let (mut parts, mut body) = http::Request::post("https://example.com/v2/batch")
//!     .body(Cursor::new(b"{}".to_vec()))?
//!     .into_parts();
//! signer.sign(&mut parts, &mut body).await?;
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;
pub mod validate;

mod error;
pub use error::{Error, ErrorKind, Result};

mod context;
pub use context::{Context, Env, NoopEnv, OsEnv, StaticEnv};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningBody, SigningCredential, Validate};
mod chain;
pub use chain::ProvideCredentialChain;
mod signer;
pub use signer::Signer;
