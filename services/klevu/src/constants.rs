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

use std::time::Duration;

// Headers used in the canonical string, in wire casing.
pub const X_KLEVU_TIMESTAMP: &str = "X-KLEVU-TIMESTAMP";
pub const X_KLEVU_APIKEY: &str = "X-KLEVU-APIKEY";
pub const X_KLEVU_AUTH_ALGO: &str = "X-KLEVU-AUTH-ALGO";
pub const CONTENT_TYPE: &str = "Content-Type";

// Env values used in klevu services.
pub const KLEVU_JS_API_KEY: &str = "KLEVU_JS_API_KEY";
pub const KLEVU_REST_AUTH_KEY: &str = "KLEVU_REST_AUTH_KEY";

pub const AUTH_ALGORITHM_PREFIX: &str = "Hmac";
pub const BEARER_SCHEME: &str = "Bearer";
pub const CONTENT_TYPE_JSON: &str = "application/json";

pub const TIMESTAMP_FUTURE_TOLERANCE: Duration = Duration::from_secs(60);
pub const TIMESTAMP_PAST_TOLERANCE: Duration = Duration::from_secs(600);
