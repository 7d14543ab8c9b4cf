use crate::{
    Context, Error, ProvideCredential, Request, Result, SignRequest, SignedHeaders,
    SigningCredential,
};
use log::debug;
use std::sync::Arc;

/// Signer is the main struct used to sign the request.
///
/// Credentials are loaded again on every call and dropped once the request is
/// signed; nothing is cached between calls.
///
/// A signer plays the role of a named security scheme in a request editor:
/// [`Signer::with_name`] sets the scheme name shown to users, the params
/// capability of the [`Context`] is the security provider, and a signer is
/// ready to sign as soon as it is built.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    name: String,
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            name: String::new(),
            ctx,

            loader: Arc::new(loader),
            builder: Arc::new(builder),
        }
    }

    /// Set the scheme name of this signer.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Scheme name of this signer, empty if never set.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Compute the signed headers for `req` without touching it.
    pub async fn signed_headers(&self, req: &Request) -> Result<SignedHeaders> {
        let cred = self.loader.provide_credential(&self.ctx).await?;
        let Some(cred) = cred.filter(|v| v.is_valid()) else {
            return Err(Error::missing_credentials(
                "no valid credential loaded, refusing to sign with an empty key",
            ));
        };
        debug!("loaded credential: {cred:?}");

        self.builder.sign_request(&self.ctx, req, &cred)
    }

    /// Sign the request in place.
    ///
    /// On error the request is left untouched.
    pub async fn sign(&self, req: &mut Request) -> Result<()> {
        let signed = self.signed_headers(req).await?;
        signed.apply(req);
        Ok(())
    }

    /// Sign `http::request::Parts` with the given body in place.
    pub async fn sign_parts(&self, parts: &mut http::request::Parts, body: &[u8]) -> Result<()> {
        let req = Request::from_parts(parts, body)?;
        let signed = self.signed_headers(&req).await?;
        signed.apply_to_parts(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NameValue;
    use async_trait::async_trait;

    #[derive(Clone, Debug)]
    struct Token(String);

    impl SigningCredential for Token {
        fn is_valid(&self) -> bool {
            !self.0.is_empty()
        }
    }

    #[derive(Debug)]
    struct TokenLoader(&'static str);

    #[async_trait]
    impl ProvideCredential for TokenLoader {
        type Credential = Token;

        async fn provide_credential(&self, _: &Context) -> Result<Option<Token>> {
            Ok(Some(Token(self.0.to_string())))
        }
    }

    #[derive(Debug)]
    struct TokenSigner;

    impl SignRequest for TokenSigner {
        type Credential = Token;

        fn sign_request(&self, _: &Context, _: &Request, cred: &Token) -> Result<SignedHeaders> {
            Ok(SignedHeaders::new(
                vec![NameValue::new("Authorization", format!("Token {}", cred.0))],
                "application/json",
            ))
        }
    }

    #[tokio::test]
    async fn test_signer_name_and_sign() -> anyhow::Result<()> {
        let signer = Signer::new(Context::new(), TokenLoader("abc"), TokenSigner);
        assert_eq!(signer.name(), "");

        let signer = signer.with_name("AmazonS3");
        assert_eq!(signer.name(), "AmazonS3");

        let mut req = Request::new("GET", "https://mybucket.s3.amazonaws.com/key.txt");
        signer.sign(&mut req).await?;
        assert_eq!(req.header("authorization"), Some("Token abc"));
        Ok(())
    }

    #[tokio::test]
    async fn test_signer_rejects_invalid_credential() {
        let signer = Signer::new(Context::new(), TokenLoader(""), TokenSigner);

        let mut req = Request::new("GET", "https://mybucket.s3.amazonaws.com/key.txt");
        let err = signer.sign(&mut req).await.unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::MissingCredentials);
        assert!(req.headers.is_empty());
    }
}
