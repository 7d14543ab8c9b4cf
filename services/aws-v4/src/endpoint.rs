use std::str::FromStr;

use s3sign_core::{Error, Result};

use crate::constants::AMAZONAWS_SUFFIX;

/// Known S3 service tokens and the region they sign for.
static SERVICE_REGIONS: &[(&str, &str)] = &[
    ("s3", "us-east-1"),
    ("s3-external-1", "us-east-1"),
    ("s3-us-west-2", "us-west-2"),
    ("s3-us-west-1", "us-west-1"),
    ("s3-eu-west-1", "eu-west-1"),
    ("s3-ap-southeast-1", "ap-southeast-1"),
    ("s3-ap-southeast-2", "ap-southeast-2"),
    ("s3-ap-northeast-1", "ap-northeast-1"),
    ("s3-sa-east-1", "sa-east-1"),
];

/// Look up the region of an S3 service token like `s3-eu-west-1`.
pub fn region_of(service: &str) -> Option<&'static str> {
    SERVICE_REGIONS
        .iter()
        .find(|(s, _)| *s == service)
        .map(|(_, r)| *r)
}

/// Endpoint is the signing relevant view of a virtual-hosted S3 url.
///
/// ```
/// use s3sign_aws_v4::Endpoint;
///
/// let ep: Endpoint = "https://MyBucket.s3-eu-west-1.amazonaws.com/a/b.txt?acl".parse().unwrap();
/// assert_eq!(ep.virtual_host(), "mybucket.s3-eu-west-1.amazonaws.com");
/// assert_eq!(ep.relative_path(), "/a/b.txt");
/// assert_eq!(ep.service(), "s3-eu-west-1");
/// assert_eq!(ep.region(), Some("eu-west-1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    relative_path: String,
    virtual_host: String,
    service: String,
    region: Option<&'static str>,
}

impl Endpoint {
    /// Parse `scheme://{bucket}.{service}.amazonaws.com/{path}[?query]`.
    ///
    /// The query and fragment are dropped, the host is lower-cased and an
    /// empty path becomes `/`. An unknown service token is not an error here: `region` is `None`
    /// and the caller decides what to do with it.
    pub fn parse(url: &str) -> Result<Self> {
        let without_query = url
            .find(['?', '#'])
            .map_or(url, |idx| &url[..idx]);

        let Some((_, rest)) = without_query.split_once("://") else {
            return Err(Error::malformed_url(format!(
                "url `{url}` has no scheme"
            )));
        };

        let (host, path) = match rest.find('/') {
            Some(idx) => rest.split_at(idx),
            None => (rest, ""),
        };
        let virtual_host = host.to_ascii_lowercase();

        let Some(prefix) = virtual_host.strip_suffix(AMAZONAWS_SUFFIX) else {
            return Err(Error::malformed_url(format!(
                "host `{host}` of url `{url}` is not under `{AMAZONAWS_SUFFIX}`"
            )));
        };
        let mut labels = prefix.split('.');
        let (Some(bucket), Some(service)) = (labels.next(), labels.next()) else {
            return Err(Error::malformed_url(format!(
                "host `{host}` of url `{url}` is not a virtual-hosted bucket"
            )));
        };
        if bucket.is_empty() || service.is_empty() {
            return Err(Error::malformed_url(format!(
                "host `{host}` of url `{url}` has an empty bucket or service label"
            )));
        }
        let service = service.to_string();

        // Deviates from the deployed configurator, which signs an empty path
        // as an empty line. The bucket root is signed as `/` here.
        let relative_path = if path.is_empty() {
            "/".to_string()
        } else {
            path.to_string()
        };

        Ok(Endpoint {
            relative_path,
            region: region_of(&service),
            service,
            virtual_host,
        })
    }

    /// Path of the url, without query.
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    /// Lower-cased host, used as the `Host` header.
    pub fn virtual_host(&self) -> &str {
        &self.virtual_host
    }

    /// Service token, the label after the bucket, like `s3` or `s3-us-west-2`.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Region of the service token, `None` if the token is unknown.
    pub fn region(&self) -> Option<&'static str> {
        self.region
    }
}

impl FromStr for Endpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Endpoint::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use s3sign_core::ErrorKind;
    use test_case::test_case;

    #[test_case("s3", "us-east-1")]
    #[test_case("s3-external-1", "us-east-1")]
    #[test_case("s3-us-west-2", "us-west-2")]
    #[test_case("s3-us-west-1", "us-west-1")]
    #[test_case("s3-eu-west-1", "eu-west-1")]
    #[test_case("s3-ap-southeast-1", "ap-southeast-1")]
    #[test_case("s3-ap-southeast-2", "ap-southeast-2")]
    #[test_case("s3-ap-northeast-1", "ap-northeast-1")]
    #[test_case("s3-sa-east-1", "sa-east-1")]
    fn test_region_of(service: &str, region: &str) {
        assert_eq!(region_of(service), Some(region));
    }

    #[test]
    fn test_region_of_unknown() {
        assert_eq!(region_of("s3-eu-central-1"), None);
        assert_eq!(region_of("S3"), None);
        assert_eq!(region_of(""), None);
    }

    #[test_case(
        "https://mybucket.s3.amazonaws.com/key.txt",
        "/key.txt", "mybucket.s3.amazonaws.com", "s3", Some("us-east-1");
        "default region"
    )]
    #[test_case(
        "http://mybucket.s3-eu-west-1.amazonaws.com/dir/key.txt?versionId=3&acl",
        "/dir/key.txt", "mybucket.s3-eu-west-1.amazonaws.com", "s3-eu-west-1", Some("eu-west-1");
        "regional endpoint with query"
    )]
    #[test_case(
        "https://MyBucket.S3.AmazonAWS.com/Key.TXT",
        "/Key.TXT", "mybucket.s3.amazonaws.com", "s3", Some("us-east-1");
        "host is lower-cased but path is not"
    )]
    #[test_case(
        "https://mybucket.s3.amazonaws.com",
        "/", "mybucket.s3.amazonaws.com", "s3", Some("us-east-1");
        "empty path"
    )]
    #[test_case(
        "https://mybucket.s3.amazonaws.com?list-type=2",
        "/", "mybucket.s3.amazonaws.com", "s3", Some("us-east-1");
        "query without path"
    )]
    #[test_case(
        "https://mybucket.s3.amazonaws.com/dir/key.txt#section",
        "/dir/key.txt", "mybucket.s3.amazonaws.com", "s3", Some("us-east-1");
        "fragment is dropped"
    )]
    #[test_case(
        "https://mybucket.s3.amazonaws.com/key.txt#frag?list-type=2",
        "/key.txt", "mybucket.s3.amazonaws.com", "s3", Some("us-east-1");
        "fragment before question mark"
    )]
    #[test_case(
        "https://mybucket.s3.amazonaws.com#top",
        "/", "mybucket.s3.amazonaws.com", "s3", Some("us-east-1");
        "fragment without path"
    )]
    #[test_case(
        "https://mybucket.s3-eu-central-1.amazonaws.com/key.txt",
        "/key.txt", "mybucket.s3-eu-central-1.amazonaws.com", "s3-eu-central-1", None;
        "unknown service"
    )]
    #[test_case(
        "https://my.bucket.s3.amazonaws.com/key.txt",
        "/key.txt", "my.bucket.s3.amazonaws.com", "bucket", None;
        "dotted bucket takes the second label"
    )]
    fn test_endpoint_parse(
        url: &str,
        relative_path: &str,
        virtual_host: &str,
        service: &str,
        region: Option<&str>,
    ) {
        let ep = Endpoint::parse(url).expect("url must be valid");
        assert_eq!(ep.relative_path(), relative_path);
        assert_eq!(ep.virtual_host(), virtual_host);
        assert_eq!(ep.service(), service);
        assert_eq!(ep.region(), region);
    }

    #[test_case("mybucket.s3.amazonaws.com/key.txt"; "no scheme")]
    #[test_case("https://example.com/key.txt"; "not aws")]
    #[test_case("https://s3.amazonaws.com/mybucket/key.txt"; "path style")]
    #[test_case("https://.s3.amazonaws.com/key.txt"; "empty bucket")]
    #[test_case("https://mybucket..amazonaws.com/key.txt"; "empty service")]
    #[test_case("https://mybucket.s3.amazonaws.com:443/key.txt"; "explicit port")]
    #[test_case(""; "empty")]
    fn test_endpoint_parse_malformed(url: &str) {
        let err = url.parse::<Endpoint>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedUrl);
    }
}
