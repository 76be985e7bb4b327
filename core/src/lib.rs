//! Core components for signing HTTP requests on their way out.
//!
//! This crate provides the foundational types and traits for the signclient ecosystem.
//! It wraps any transport with a decorator that signs every request before it is sent,
//! so a plain HTTP client can talk to a signature-authenticated API.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Context**: A container that holds the default client, the default transport and the environment
//! - **Traits**: Abstract interfaces for request signing (`SignRequest`), request sending (`HttpSend`) and logging (`ContextLogger`)
//! - **SigningTransport**: The decorator that normalizes, buffers, signs and forwards requests
//! - **Builder**: Validates configuration and installs the decorator into a client
//!
//! ## Example
//!
//! ```no_run
//! use signclient_core::{Body, Builder, Context, HttpSend, Result, SignRequest};
//! use signclient_core::time::DateTime;
//! use async_trait::async_trait;
//! use bytes::Bytes;
//! use http::request::Parts;
//! use http::HeaderMap;
//!
//! // Define your signer
//! #[derive(Debug)]
//! struct MySigner;
//!
//! #[async_trait]
//! impl SignRequest for MySigner {
//!     async fn sign_request(
//!         &self,
//!         _req: &mut Parts,
//!         _body: Option<Bytes>,
//!         _service: &str,
//!         _region: &str,
//!         _time: DateTime,
//!     ) -> Result<HeaderMap> {
//!         // Compute the signature here
//!         todo!()
//!     }
//! }
//!
//! // Define your transport
//! #[derive(Debug)]
//! struct MyTransport;
//!
//! #[async_trait]
//! impl HttpSend for MyTransport {
//!     async fn http_send(&self, _req: &mut http::Request<Body>) -> Result<http::Response<Bytes>> {
//!         todo!()
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_http_send(MyTransport);
//!
//! let client = Builder::new(ctx)
//!     .signer(MySigner)
//!     .service("es")
//!     .region("us-east-1")
//!     .build()?;
//!
//! let mut req = http::Request::builder()
//!     .method("GET")
//!     .uri("http://search.example.com/_cat/indices")
//!     .body(Body::empty())?;
//!
//! let resp = client.send(&mut req).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Traits
//!
//! This crate defines several important traits:
//!
//! - [`SignRequest`]: For computing a request signature
//! - [`HttpSend`]: For sending HTTP requests
//! - [`ContextLogger`]: For diagnostic logging
//! - [`Env`]: For environment variable access
//!
//! ## Utilities
//!
//! The crate also provides utility modules:
//!
//! - [`escape`]: Strict path escaping
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod escape;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};
mod body;
pub use body::{Body, BodyKind, BodyStream};
mod logger;
pub use logger::{ContextLogger, DiscardLogger, LogLogger};
mod context;
pub use context::{Context, Env, NoopEnv, OsEnv, StaticEnv};
mod transport;
pub use transport::{HttpSend, NoopHttpSend};
mod api;
pub use api::SignRequest;
mod client;
pub use client::Client;
mod signer;
pub use signer::{SigningTransport, SIGNATURE_SCHEME_PREFIX};
mod build;
pub use build::Builder;
