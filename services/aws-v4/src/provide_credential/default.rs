use crate::provide_credential::{EnvCredentialProvider, ParamsCredentialProvider};
use crate::Credential;
use async_trait::async_trait;
use s3sign_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

/// DefaultCredentialProvider is a loader that will try to load credential via default chains.
///
/// Resolution order:
///
/// 1. Context params (`ACCESS_KEY`, `SECRET_KEY`)
/// 2. Environment variables (`AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`)
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultCredentialProvider {
    /// Create a new `DefaultCredentialProvider` instance.
    pub fn new() -> Self {
        let chain = ProvideCredentialChain::new()
            .push(ParamsCredentialProvider::new())
            .push(EnvCredentialProvider::new());

        Self { chain }
    }

    /// Create with a custom credential chain.
    pub fn with_chain(chain: ProvideCredentialChain<Credential>) -> Self {
        Self { chain }
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ACCESS_KEY, AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, SECRET_KEY};
    use crate::StaticCredentialProvider;
    use s3sign_core::StaticParams;

    #[tokio::test]
    async fn test_default_loader_without_params() {
        let _ = env_logger::builder().is_test(true).try_init();

        let l = DefaultCredentialProvider::new();
        let x = l
            .provide_credential(&Context::new())
            .await
            .expect("load must succeed");
        assert!(x.is_none());
    }

    #[tokio::test]
    async fn test_default_loader_with_env() {
        let _ = env_logger::builder().is_test(true).try_init();

        let ctx = Context::new().with_params(StaticParams::new([
            (AWS_ACCESS_KEY_ID, "access_key_id"),
            (AWS_SECRET_ACCESS_KEY, "secret_access_key"),
        ]));

        let l = DefaultCredentialProvider::new();
        let x = l.provide_credential(&ctx).await.expect("load must succeed");

        let x = x.expect("must load succeed");
        assert_eq!("access_key_id", x.access_key_id);
        assert_eq!("secret_access_key", x.secret_access_key);
    }

    /// Params should be taken first.
    #[tokio::test]
    async fn test_default_loader_prefers_params() {
        let _ = env_logger::builder().is_test(true).try_init();

        let ctx = Context::new().with_params(StaticParams::new([
            (ACCESS_KEY, "params_access_key_id"),
            (SECRET_KEY, "params_secret_access_key"),
            (AWS_ACCESS_KEY_ID, "env_access_key_id"),
            (AWS_SECRET_ACCESS_KEY, "env_secret_access_key"),
        ]));

        let l = DefaultCredentialProvider::new();
        let x = l
            .provide_credential(&ctx)
            .await
            .expect("load must succeed")
            .expect("must load succeed");
        assert_eq!("params_access_key_id", x.access_key_id);
        assert_eq!("params_secret_access_key", x.secret_access_key);
    }

    #[tokio::test]
    async fn test_default_loader_with_chain() {
        let chain = ProvideCredentialChain::new()
            .push(StaticCredentialProvider::new("static_ak", "static_sk"));

        let l = DefaultCredentialProvider::with_chain(chain);
        let x = l
            .provide_credential(&Context::new())
            .await
            .expect("load must succeed")
            .expect("must load succeed");
        assert_eq!("static_ak", x.access_key_id);
    }
}
