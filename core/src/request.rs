use http::header::HeaderName;
use http::header::AUTHORIZATION;
use http::header::CONTENT_TYPE;
use http::HeaderMap;
use http::HeaderValue;
use percent_encoding::percent_decode_str;
use serde::Deserialize;
use serde::Serialize;

use crate::{Error, Result};

/// A name/value pair, used for both query parameters and headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameValue {
    /// Name of the pair.
    pub name: String,
    /// Value of the pair.
    pub value: String,
}

impl NameValue {
    /// Create a new pair.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Body of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    /// Body text, absent for an empty body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// MIME type of the body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

/// Request to be signed.
///
/// The layout follows a HAR request entry, so a request exported as JSON by an
/// editor or a browser can be deserialized directly:
///
/// ```
/// use s3sign_core::Request;
///
/// let req: Request = serde_json::from_str(r#"{
///     "method": "PUT",
///     "url": "https://mybucket.s3.amazonaws.com/hello.json",
///     "queryString": [],
///     "postData": { "text": "{}", "mimeType": "application/json" },
///     "headers": []
/// }"#).unwrap();
/// assert_eq!(req.payload(), b"{}");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// HTTP method.
    pub method: String,
    /// Full request url.
    pub url: String,
    /// Query parameters, in the order they were supplied.
    #[serde(default)]
    pub query_string: Vec<NameValue>,
    /// Optional request body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_data: Option<PostData>,
    /// Request headers, replaced wholesale by signing.
    #[serde(default)]
    pub headers: Vec<NameValue>,
}

impl Request {
    /// Create a request without body, query or headers.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    /// Push a query pair, keeping insertion order.
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_string.push(NameValue::new(name, value));
        self
    }

    /// Set the body text, keeping any existing MIME type.
    pub fn with_body(mut self, text: impl Into<String>) -> Self {
        self.post_data.get_or_insert_with(PostData::default).text = Some(text.into());
        self
    }

    /// Set the body MIME type.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.post_data.get_or_insert_with(PostData::default).mime_type = Some(mime_type.into());
        self
    }

    /// Payload bytes to sign. An absent body signs as the empty string.
    pub fn payload(&self) -> &[u8] {
        self.post_data
            .as_ref()
            .and_then(|v| v.text.as_deref())
            .unwrap_or_default()
            .as_bytes()
    }

    /// MIME type declared by the body, if any.
    pub fn mime_type(&self) -> Option<&str> {
        self.post_data.as_ref().and_then(|v| v.mime_type.as_deref())
    }

    /// Get the first header value by name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Build a request from an `http::Request`.
    ///
    /// The body must be valid utf-8. Query pairs are percent decoded and kept
    /// in their original order, with `+` kept literally. `Content-Type`
    /// becomes the body MIME type.
    pub fn from_http<B: AsRef<[u8]>>(req: &http::Request<B>) -> Result<Self> {
        Self::build(req.method(), req.uri(), req.headers(), req.body().as_ref())
    }

    /// Build a request from `http::request::Parts` and its body.
    pub fn from_parts(parts: &http::request::Parts, body: &[u8]) -> Result<Self> {
        Self::build(&parts.method, &parts.uri, &parts.headers, body)
    }

    fn build(
        method: &http::Method,
        uri: &http::Uri,
        headers: &HeaderMap,
        body: &[u8],
    ) -> Result<Self> {
        let query_string = uri.query().map(parse_query).transpose()?.unwrap_or_default();

        let mime_type = headers
            .get(CONTENT_TYPE)
            .map(|v| v.to_str().map(str::to_string))
            .transpose()?;
        let post_data = if body.is_empty() && mime_type.is_none() {
            None
        } else {
            let text = if body.is_empty() {
                None
            } else {
                Some(String::from_utf8(body.to_vec())?)
            };
            Some(PostData { text, mime_type })
        };

        let headers = headers
            .iter()
            .map(|(k, v)| -> Result<NameValue> {
                Ok(NameValue::new(k.as_str(), v.to_str()?))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            method: method.to_string(),
            url: uri.to_string(),
            query_string,
            post_data,
            headers,
        })
    }
}

/// Headers computed by a signer, together with the content type they assert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    headers: Vec<NameValue>,
    content_type: String,
}

impl SignedHeaders {
    /// Create a new header set.
    ///
    /// `content_type` must be the value the headers were signed with.
    pub fn new(headers: Vec<NameValue>, content_type: impl Into<String>) -> Self {
        Self {
            headers,
            content_type: content_type.into(),
        }
    }

    /// Signed headers in wire order.
    pub fn headers(&self) -> &[NameValue] {
        &self.headers
    }

    /// Get a header value by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Content type used while signing.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Apply the signed headers back to the request.
    ///
    /// - The header list is replaced, not merged.
    /// - A body without MIME type gets the signed content type, so the
    ///   request on the wire matches what was signed.
    pub fn apply(self, req: &mut Request) {
        if let Some(post_data) = req.post_data.as_mut() {
            if post_data.mime_type.is_none() {
                post_data.mime_type = Some(self.content_type);
            }
        }
        req.headers = self.headers;
    }

    /// Apply the signed headers to `http::request::Parts`.
    ///
    /// The header map is replaced, not merged. Nothing is changed if any
    /// header can't be represented.
    pub fn apply_to_parts(self, parts: &mut http::request::Parts) -> Result<()> {
        let mut headers = HeaderMap::with_capacity(self.headers.len());
        for NameValue { name, value } in self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())?;
            let mut value = HeaderValue::from_str(&value)?;
            if name == AUTHORIZATION {
                value.set_sensitive(true);
            }
            headers.append(name, value);
        }

        parts.headers = headers;
        Ok(())
    }

    /// Consume into the header list.
    pub fn into_headers(self) -> Vec<NameValue> {
        self.headers
    }
}

fn parse_query(query: &str) -> Result<Vec<NameValue>> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| -> Result<NameValue> {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            Ok(NameValue::new(percent_decode(name)?, percent_decode(value)?))
        })
        .collect()
}

fn percent_decode(v: &str) -> Result<String> {
    let decoded = percent_decode_str(v).decode_utf8().map_err(|e| {
        Error::request_invalid(format!("query `{v}` is not valid utf-8 once decoded"))
            .with_source(e)
    })?;
    Ok(decoded.into_owned())
}

fn find_header<'a>(headers: &'a [NameValue], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|v| v.name.eq_ignore_ascii_case(name))
        .map(|v| v.value.as_str())
}

impl TryFrom<&http::Request<String>> for Request {
    type Error = Error;

    fn try_from(req: &http::Request<String>) -> Result<Self> {
        Request::from_http(req)
    }
}
