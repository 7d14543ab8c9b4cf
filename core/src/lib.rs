//! Core components for signing S3 requests.
//!
//! This crate provides the foundational types and traits for the s3sign ecosystem.
//! It defines the abstractions that keep credential retrieval apart from the
//! signing algorithm itself.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Context**: A container that holds the params source used to look up credentials
//! - **Request**: A HAR shaped request model, convertible from `http::Request`
//! - **Traits**: Abstract interfaces for credential loading (`ProvideCredential`) and request signing (`SignRequest`)
//! - **Signer**: The orchestrator that loads a credential and applies the signed headers
//!
//! ## Example
//!
//! ```no_run
//! use s3sign_core::{Context, NameValue, ProvideCredential, Request, Result, SignRequest};
//! use s3sign_core::{SignedHeaders, Signer, SigningCredential, StaticParams};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! #[async_trait]
//! impl ProvideCredential for MyLoader {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(ctx.param("API_KEY").map(|key| MyCredential { key }))
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MySigner;
//!
//! impl SignRequest for MySigner {
//!     type Credential = MyCredential;
//!
//!     fn sign_request(
//!         &self,
//!         _: &Context,
//!         _: &Request,
//!         cred: &Self::Credential,
//!     ) -> Result<SignedHeaders> {
//!         Ok(SignedHeaders::new(
//!             vec![NameValue::new("X-Api-Key", &cred.key)],
//!             "application/json",
//!         ))
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_params(StaticParams::new([("API_KEY", "my-key")]));
//! let signer = Signer::new(ctx, MyLoader, MySigner);
//!
//! let mut req = Request::new("GET", "https://example.com/hello");
//! signer.sign(&mut req).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time formatting utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod context;
pub use context::{Context, NoopParams, OsEnv, Params, StaticParams};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod chain;
pub use chain::ProvideCredentialChain;
mod request;
pub use request::{NameValue, PostData, Request, SignedHeaders};
mod signer;
pub use signer::Signer;
