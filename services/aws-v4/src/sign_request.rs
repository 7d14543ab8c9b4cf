use crate::canonical::CanonicalRequest;
use crate::config::{Config, UnknownServicePolicy};
use crate::constants::*;
use crate::endpoint::Endpoint;
use crate::timestamp::Timestamp;
use crate::Credential;
use http::HeaderValue;
use log::{debug, warn};
use s3sign_core::hash::{hex_hmac_sha256, hmac_sha256};
use s3sign_core::time::DateTime;
use s3sign_core::{
    Context, Error, NameValue, Request, Result, SignRequest, SignedHeaders, SigningCredential,
};
use std::fmt::Write;

/// RequestSigner that implements AWS SigV4 for virtual-hosted S3 urls.
///
/// Region and service are taken from the request host, and the signature
/// always covers the same five headers:
/// `content-md5;content-type;host;x-amz-content-sha256;x-amz-date`.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
#[derive(Debug, Default)]
pub struct RequestSigner {
    config: Config,

    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer with default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new signer with given config.
    pub fn with_config(config: Config) -> Self {
        Self { config, time: None }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Sign the request in place with the given credential.
    ///
    /// On error the request is left untouched.
    pub fn sign(&self, req: &mut Request, cred: &Credential) -> Result<()> {
        let signed = self.build(req, cred)?;
        signed.apply(req);
        Ok(())
    }

    /// Compute the signed headers for `req`.
    pub fn build(&self, req: &Request, cred: &Credential) -> Result<SignedHeaders> {
        if !cred.is_valid() {
            return Err(Error::missing_credentials(
                "access key id and secret access key must not be empty",
            ));
        }

        let ts = self.time.map(Timestamp::from).unwrap_or_else(Timestamp::now);
        let endpoint = Endpoint::parse(&req.url)?;
        let region = match (endpoint.region(), self.config.unknown_service) {
            (Some(region), _) => region,
            (None, UnknownServicePolicy::FailFast) => {
                return Err(Error::unrecognized_service(format!(
                    "no region known for service `{}` of host `{}`",
                    endpoint.service(),
                    endpoint.virtual_host()
                )));
            }
            (None, UnknownServicePolicy::SignAnyway) => {
                warn!(
                    "no region known for service `{}`, signing with an empty region",
                    endpoint.service()
                );
                ""
            }
        };

        let content_type = req
            .mime_type()
            .unwrap_or(&self.config.default_content_type)
            .to_string();

        let creq = CanonicalRequest::build(
            req,
            &endpoint,
            &content_type,
            &ts,
            self.config.query_order,
        );
        let encoded_req = creq.hash();
        debug!("calculated canonical request hash: {encoded_req}");

        // Scope: "20220313/<region>/<service>/aws4_request"
        let scope = format!(
            "{}/{}/{}/{}",
            ts.date_scope(),
            region,
            endpoint.service(),
            SCOPE_TERMINATOR
        );
        debug!("calculated scope: {scope}");

        let string_to_sign = string_to_sign(&ts, &scope, &encoded_req)?;
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key = generate_signing_key(
            &cred.secret_access_key,
            ts.date_scope(),
            region,
            endpoint.service(),
        );
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

        let authorization = format!(
            "{ALGORITHM} Credential={}/{scope},SignedHeaders={SIGNED_HEADERS},Signature={signature}",
            cred.access_key_id
        );

        let headers = vec![
            NameValue::new(AUTHORIZATION, authorization),
            NameValue::new(DATE, ts.long_date()),
            NameValue::new(HOST, creq.host),
            NameValue::new(CONTENT_MD5, creq.content_md5),
            NameValue::new(CONTENT_TYPE, creq.content_type),
            NameValue::new(X_AMZ_CONTENT_SHA_256, creq.payload_hash),
            NameValue::new(X_AMZ_DATE, creq.amz_date),
        ];
        // Make sure every value can go on the wire before handing them out.
        for h in &headers {
            HeaderValue::from_str(&h.value).map_err(|e| {
                Error::request_invalid(format!("header `{}` has an invalid value", h.name))
                    .with_source(e)
            })?;
        }

        Ok(SignedHeaders::new(headers, content_type))
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(
        &self,
        _: &Context,
        req: &Request,
        credential: &Self::Credential,
    ) -> Result<SignedHeaders> {
        self.build(req, credential)
    }
}

// StringToSign:
//
// AWS4-HMAC-SHA256
// 20220313T072004Z
// 20220313/<region>/<service>/aws4_request
// <hashed_canonical_request>
fn string_to_sign(ts: &Timestamp, scope: &str, encoded_req: &str) -> Result<String> {
    let mut f = String::with_capacity(128);
    writeln!(f, "{ALGORITHM}")?;
    writeln!(f, "{}", ts.short_date())?;
    writeln!(f, "{scope}")?;
    write!(f, "{encoded_req}")?;
    Ok(f)
}

/// Derive the SigV4 signing key: date, then region, then service, then `aws4_request`.
pub fn generate_signing_key(secret: &str, date: &str, region: &str, service: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), date.as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), SCOPE_TERMINATOR.as_bytes())
}
