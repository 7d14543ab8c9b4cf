use crate::{constants::*, Credential};
use async_trait::async_trait;
use log::debug;
use s3sign_core::{Context, ProvideCredential, Result};

/// ParamsCredentialProvider loads credentials from the context params.
///
/// By default it looks for:
/// - `ACCESS_KEY`: The access key ID
/// - `SECRET_KEY`: The secret access key
///
/// Both must be present and non-empty, otherwise nothing is provided.
#[derive(Debug, Clone)]
pub struct ParamsCredentialProvider {
    access_key_name: String,
    secret_key_name: String,
}

impl Default for ParamsCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ParamsCredentialProvider {
    /// Create a new ParamsCredentialProvider with the default param names.
    pub fn new() -> Self {
        Self {
            access_key_name: ACCESS_KEY.to_string(),
            secret_key_name: SECRET_KEY.to_string(),
        }
    }

    /// Set the param name of the access key ID.
    pub fn with_access_key_name(mut self, name: &str) -> Self {
        self.access_key_name = name.to_string();
        self
    }

    /// Set the param name of the secret access key.
    pub fn with_secret_key_name(mut self, name: &str) -> Self {
        self.secret_key_name = name.to_string();
        self
    }
}

#[async_trait]
impl ProvideCredential for ParamsCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let access_key_id = ctx.param_non_empty(&self.access_key_name);
        let secret_access_key = ctx.param_non_empty(&self.secret_key_name);

        match (access_key_id, secret_access_key) {
            (Some(ak), Some(sk)) => Ok(Some(Credential::new(ak, sk))),
            (ak, sk) => {
                debug!(
                    "params `{}` present: {}, `{}` present: {}",
                    self.access_key_name,
                    ak.is_some(),
                    self.secret_key_name,
                    sk.is_some()
                );
                Ok(None)
            }
        }
    }
}
