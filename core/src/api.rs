use crate::{Context, Request, Result, SignedHeaders};
use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is usable for signing.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential is the trait used by signer to load the credential from the context.
///
/// Loading may hit a secret store or prompt a user, so this is the only async
/// step of signing. Returns `Ok(None)` when this provider has nothing to offer.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load signing credential from current context.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest is the trait used by signer to compute the signed headers.
///
/// Implementations must be pure: the request is only read, and the returned
/// [`SignedHeaders`] is applied by the caller.
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this signer.
    type Credential: Send + Sync + Unpin + 'static;

    /// Compute the headers that authenticate `req`.
    fn sign_request(
        &self,
        ctx: &Context,
        req: &Request,
        credential: &Self::Credential,
    ) -> Result<SignedHeaders>;
}
