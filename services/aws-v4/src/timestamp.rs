use s3sign_core::time::{format_date, format_http_date, format_iso8601, now, DateTime};

/// Timestamp holds every date form a signature needs, all derived from one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    short_date: String,
    long_date: String,
    date_scope: String,
}

impl Timestamp {
    /// Read the clock once and build all forms from it.
    pub fn now() -> Self {
        Self::from(now())
    }

    /// `20220313T072004Z`, used by `x-amz-date` and the string to sign.
    pub fn short_date(&self) -> &str {
        &self.short_date
    }

    /// `Sun, 13 Mar 2022 07:20:04 GMT`, used by `Date`.
    pub fn long_date(&self) -> &str {
        &self.long_date
    }

    /// `20220313`, used by the credential scope and the signing key.
    pub fn date_scope(&self) -> &str {
        &self.date_scope
    }
}

impl From<DateTime> for Timestamp {
    fn from(t: DateTime) -> Self {
        Self {
            short_date: format_iso8601(t),
            long_date: format_http_date(t),
            date_scope: format_date(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use s3sign_core::time::parse_iso8601;

    #[test]
    fn test_timestamp_forms() -> anyhow::Result<()> {
        let ts = Timestamp::from(parse_iso8601("20091011T214913Z")?);
        assert_eq!(ts.short_date(), "20091011T214913Z");
        assert_eq!(ts.long_date(), "Sun, 11 Oct 2009 21:49:13 GMT");
        assert_eq!(ts.date_scope(), "20091011");
        Ok(())
    }

    #[test]
    fn test_timestamp_forms_share_instant() -> anyhow::Result<()> {
        let ts = Timestamp::now();
        assert!(ts.short_date().starts_with(ts.date_scope()));

        let t = parse_iso8601(ts.short_date())?;
        assert_eq!(Timestamp::from(t), ts);
        Ok(())
    }
}
