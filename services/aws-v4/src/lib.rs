//! AWS SigV4 signing capability for signclient.
//!
//! ```no_run
//! use signclient_aws_v4::{Config, RequestSigner};
//! use signclient_core::{Builder, Context, OsEnv};
//!
//! # fn main() -> signclient_core::Result<()> {
//! let ctx = Context::new().with_env(OsEnv);
//! let config = Config::default().from_env(&ctx);
//! let credential = config.credential().unwrap_or_default();
//!
//! let client = Builder::new(ctx)
//!     .signer(RequestSigner::new(credential))
//!     .service("es")
//!     .region(config.region.as_deref().unwrap_or("us-east-1"))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::*;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::RequestSigner;
