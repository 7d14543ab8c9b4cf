use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::debug;
use s3sign_core::{Context, Error, Result};

use crate::constants::*;

/// Order of query parameters in the canonical request.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum QueryOrder {
    /// Keep the order supplied by the caller.
    ///
    /// This is what the deployed configurator signs with, so it is kept as
    /// the default for wire compatibility even though SigV4 asks for sorting.
    #[default]
    Preserve,
    /// Sort by name, then by value, as SigV4 requires.
    Sorted,
}

impl FromStr for QueryOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preserve" => Ok(QueryOrder::Preserve),
            "sorted" | "sort" => Ok(QueryOrder::Sorted),
            v => Err(Error::config_invalid(format!(
                "invalid query order `{v}`, expected `preserve` or `sorted`"
            ))),
        }
    }
}

impl Display for QueryOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryOrder::Preserve => f.write_str("preserve"),
            QueryOrder::Sorted => f.write_str("sorted"),
        }
    }
}

/// What to do when the service token in the host has no known region.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum UnknownServicePolicy {
    /// Return an `UnrecognizedService` error before anything is signed.
    #[default]
    FailFast,
    /// Sign with an empty region in the scope and let the server reject it.
    SignAnyway,
}

impl FromStr for UnknownServicePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" | "fail_fast" => Ok(UnknownServicePolicy::FailFast),
            "sign" | "sign_anyway" => Ok(UnknownServicePolicy::SignAnyway),
            v => Err(Error::config_invalid(format!(
                "invalid unknown service policy `{v}`, expected `fail` or `sign`"
            ))),
        }
    }
}

impl Display for UnknownServicePolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            UnknownServicePolicy::FailFast => f.write_str("fail"),
            UnknownServicePolicy::SignAnyway => f.write_str("sign"),
        }
    }
}

/// Config for the S3 request signer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `query_order` will be loaded from:
    ///
    /// - env value: `S3SIGN_QUERY_ORDER`
    /// - default to: `preserve`
    pub query_order: QueryOrder,
    /// `unknown_service` will be loaded from:
    ///
    /// - env value: `S3SIGN_UNKNOWN_SERVICE`
    /// - default to: `fail`
    pub unknown_service: UnknownServicePolicy,
    /// Content type signed and written back when the request body has none.
    ///
    /// Default to `application/json`.
    pub default_content_type: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            query_order: QueryOrder::default(),
            unknown_service: UnknownServicePolicy::default(),
            default_content_type: DEFAULT_CONTENT_TYPE.to_string(),
        }
    }
}

impl Config {
    /// Load config from the context params.
    ///
    /// Values not present in the context keep what's already in `self`.
    pub fn from_env(mut self, ctx: &Context) -> Result<Self> {
        if let Some(v) = ctx.param_non_empty(S3SIGN_QUERY_ORDER) {
            self.query_order = v.parse()?;
        }
        if let Some(v) = ctx.param_non_empty(S3SIGN_UNKNOWN_SERVICE) {
            self.unknown_service = v.parse()?;
        }

        debug!(
            "loaded config: query_order={}, unknown_service={}",
            self.query_order, self.unknown_service
        );
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use s3sign_core::{ErrorKind, StaticParams};
    use test_case::test_case;

    #[test]
    fn test_config_default() {
        let cfg = Config::default();
        assert_eq!(cfg.query_order, QueryOrder::Preserve);
        assert_eq!(cfg.unknown_service, UnknownServicePolicy::FailFast);
        assert_eq!(cfg.default_content_type, "application/json");
    }

    #[test]
    fn test_config_from_env() -> anyhow::Result<()> {
        let ctx = Context::new().with_params(StaticParams::new([
            (S3SIGN_QUERY_ORDER, "Sorted"),
            (S3SIGN_UNKNOWN_SERVICE, "sign"),
        ]));

        let cfg = Config::default().from_env(&ctx)?;
        assert_eq!(cfg.query_order, QueryOrder::Sorted);
        assert_eq!(cfg.unknown_service, UnknownServicePolicy::SignAnyway);
        Ok(())
    }

    #[test]
    fn test_config_from_empty_env_keeps_values() -> anyhow::Result<()> {
        let ctx = Context::new().with_params(StaticParams::new([(S3SIGN_QUERY_ORDER, "")]));
        let cfg = Config {
            query_order: QueryOrder::Sorted,
            ..Default::default()
        }
        .from_env(&ctx)?;

        assert_eq!(cfg.query_order, QueryOrder::Sorted);
        Ok(())
    }

    #[test_case(S3SIGN_QUERY_ORDER, "random"; "bad query order")]
    #[test_case(S3SIGN_UNKNOWN_SERVICE, "maybe"; "bad unknown service policy")]
    fn test_config_from_env_invalid(name: &str, value: &str) {
        let ctx = Context::new().with_params(StaticParams::new([(name, value)]));
        let err = Config::default().from_env(&ctx).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_display_parses_back() -> anyhow::Result<()> {
        for v in [QueryOrder::Preserve, QueryOrder::Sorted] {
            assert_eq!(v.to_string().parse::<QueryOrder>()?, v);
        }
        for v in [
            UnknownServicePolicy::FailFast,
            UnknownServicePolicy::SignAnyway,
        ] {
            assert_eq!(v.to_string().parse::<UnknownServicePolicy>()?, v);
        }
        Ok(())
    }
}
