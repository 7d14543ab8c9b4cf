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

// Headers used in aws services.
pub const X_AMZ_CONTENT_SHA_256: &str = "x-amz-content-sha256";
pub const X_AMZ_DATE: &str = "x-amz-date";

// Headers written to the signed request, in wire order.
pub const AUTHORIZATION: &str = "Authorization";
pub const DATE: &str = "Date";
pub const HOST: &str = "Host";
pub const CONTENT_MD5: &str = "Content-MD5";
pub const CONTENT_TYPE: &str = "Content-Type";

/// Headers covered by the signature, in canonical order.
pub const SIGNED_HEADERS: &str = "content-md5;content-type;host;x-amz-content-sha256;x-amz-date";

pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";
pub const SCOPE_TERMINATOR: &str = "aws4_request";
pub const AMAZONAWS_SUFFIX: &str = ".amazonaws.com";
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

// Param names used to look up credentials.
pub const ACCESS_KEY: &str = "ACCESS_KEY";
pub const SECRET_KEY: &str = "SECRET_KEY";

// Env values used in aws services.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";

// Env values used to configure signing.
pub const S3SIGN_QUERY_ORDER: &str = "S3SIGN_QUERY_ORDER";
pub const S3SIGN_UNKNOWN_SERVICE: &str = "S3SIGN_UNKNOWN_SERVICE";
