use std::fmt::{self, Display, Formatter};

use s3sign_core::hash::{base64_md5, hex_sha256};
use s3sign_core::{NameValue, Request};

use crate::config::QueryOrder;
use crate::constants::SIGNED_HEADERS;
use crate::endpoint::Endpoint;
use crate::timestamp::Timestamp;

/// CanonicalRequest holds every value that goes into the canonical request.
///
/// Its `Display` output is the canonical request itself:
///
/// ```text
/// GET
/// /key.txt
/// list-type=2
/// content-md5:1B2M2Y8AsgTpgAmY7PhCfg==
/// content-type:application/json
/// host:mybucket.s3.amazonaws.com
/// x-amz-content-sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855
/// x-amz-date:20130524T000000Z
///
/// content-md5;content-type;host;x-amz-content-sha256;x-amz-date
/// e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855
/// ```
///
/// Unlike generic SigV4, every query pair takes its own line and is neither
/// encoded nor, by default, sorted. An empty query is a single blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest {
    /// Upper-cased HTTP method.
    pub method: String,
    /// Path of the url, without query.
    pub relative_path: String,
    /// Query pairs in canonical order.
    pub query: Vec<NameValue>,
    /// Base64 MD5 of the payload.
    pub content_md5: String,
    /// Content type asserted by the request.
    pub content_type: String,
    /// Virtual host of the bucket.
    pub host: String,
    /// Hex SHA256 of the payload.
    pub payload_hash: String,
    /// Signing time in ISO8601 basic form.
    pub amz_date: String,
}

impl CanonicalRequest {
    /// Collect canonical values from a request.
    pub fn build(
        req: &Request,
        endpoint: &Endpoint,
        content_type: &str,
        ts: &Timestamp,
        order: QueryOrder,
    ) -> Self {
        let payload = req.payload();

        let mut query = req.query_string.clone();
        if order == QueryOrder::Sorted {
            query.sort_by(|a, b| (&a.name, &a.value).cmp(&(&b.name, &b.value)));
        }

        Self {
            method: req.method.to_ascii_uppercase(),
            relative_path: endpoint.relative_path().to_string(),
            query,
            content_md5: base64_md5(payload),
            content_type: content_type.to_string(),
            host: endpoint.virtual_host().to_string(),
            payload_hash: hex_sha256(payload),
            amz_date: ts.short_date().to_string(),
        }
    }

    /// Hex SHA256 of the canonical request.
    pub fn hash(&self) -> String {
        hex_sha256(self.to_string().as_bytes())
    }
}

impl Display for CanonicalRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", self.relative_path)?;

        if self.query.is_empty() {
            writeln!(f)?;
        } else {
            for NameValue { name, value } in &self.query {
                writeln!(f, "{name}={value}")?;
            }
        }

        writeln!(f, "content-md5:{}", self.content_md5)?;
        writeln!(f, "content-type:{}", self.content_type)?;
        writeln!(f, "host:{}", self.host)?;
        writeln!(f, "x-amz-content-sha256:{}", self.payload_hash)?;
        writeln!(f, "x-amz-date:{}", self.amz_date)?;
        writeln!(f)?;
        writeln!(f, "{SIGNED_HEADERS}")?;
        write!(f, "{}", self.payload_hash)
    }
}
