//! AWS SigV4 signer for S3 virtual-hosted requests.
//!
//! The region and service are taken from the host of the request url, in the
//! form `{bucket}.{service}.amazonaws.com`, and every request is signed over
//! the same five headers: `content-md5;content-type;host;x-amz-content-sha256;x-amz-date`.
//!
//! ## Example
//!
//! ```no_run
//! use s3sign_aws_v4::{DefaultCredentialProvider, RequestSigner};
//! use s3sign_core::{Context, OsEnv, Request, Result, Signer};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::new().with_params(OsEnv);
//!     let signer = Signer::new(ctx, DefaultCredentialProvider::new(), RequestSigner::new());
//!
//!     let mut req = Request::new("PUT", "https://mybucket.s3-eu-west-1.amazonaws.com/hello.txt")
//!         .with_body("Hello,World!")
//!         .with_mime_type("text/plain");
//!     signer.sign(&mut req).await?;
//!
//!     for h in &req.headers {
//!         println!("{}: {}", h.name, h.value);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

mod canonical;
pub use canonical::CanonicalRequest;

mod config;
pub use config::Config;
pub use config::QueryOrder;
pub use config::UnknownServicePolicy;

mod constants;

mod credential;
pub use credential::Credential;

mod endpoint;
pub use endpoint::region_of;
pub use endpoint::Endpoint;

mod provide_credential;
pub use provide_credential::*;

mod sign_request;
pub use sign_request::generate_signing_key;
pub use sign_request::RequestSigner;

mod timestamp;
pub use timestamp::Timestamp;
