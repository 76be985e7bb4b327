//! Sign every outgoing HTTP request without effort.
//!
//! `signclient` wraps a transport with a decorator that normalizes, buffers
//! and signs each request before sending it, so that a plain HTTP client can
//! talk to a signature-authenticated API such as Amazon OpenSearch or S3.
//!
//! ## Features
//!
//! - `aws`: AWS SigV4 signing, re-exported as [`aws`].
//! - `default-context`: [`default_context`] wired with reqwest and the OS environment.
//!
//! ## Example
//!
//! ```no_run
//! # #[cfg(all(feature = "aws", feature = "default-context"))]
//! # async fn example() -> signclient::Result<()> {
//! use signclient::Body;
//!
//! let client = signclient::aws::default_client("es", "us-east-1")?;
//!
//! let mut req = http::Request::builder()
//!     .method("GET")
//!     .uri("https://search.example.com/_cat/indices")
//!     .body(Body::empty())?;
//! let resp = client.send(&mut req).await?;
//! println!("status: {}", resp.status());
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use signclient_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

#[cfg(feature = "aws")]
pub mod aws;
