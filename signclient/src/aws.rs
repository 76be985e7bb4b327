// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! AWS service support with convenience APIs
//!
//! This module provides AWS signing functionality along with convenience functions
//! for common use cases.

// Re-export all AWS signing types
pub use signclient_aws_v4::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Builder, Client, Error, ErrorKind, LogLogger, Result};

/// Create a signing client with standard configuration
///
/// This function creates a client with:
/// - Default context (reqwest HTTP client, OS environment)
/// - Credential and region loaded from env (`AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`,
///   `AWS_SESSION_TOKEN`, `AWS_REGION`)
/// - Request signer for the specified service
///
/// An empty `region` falls back to the region from env.
///
/// # Example
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> signclient::Result<()> {
/// let client = signclient::aws::default_client("s3", "us-east-1")?;
///
/// let mut req = http::Request::builder()
///     .method("GET")
///     .uri("https://my-bucket.s3.amazonaws.com/my-object")
///     .body(signclient::Body::empty())?;
/// let resp = client.send(&mut req).await?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_client(service: &str, region: &str) -> Result<Client> {
    let ctx = default_context();
    let config = Config::default().from_env(&ctx);

    let Some(credential) = config.credential() else {
        return Err(Error::new(
            ErrorKind::MissingSigner,
            "no AWS credential found in env",
        ));
    };
    let region = match region {
        "" => config.region.unwrap_or_default(),
        v => v.to_string(),
    };

    Builder::new(ctx)
        .signer(RequestSigner::new(credential))
        .service(service)
        .region(&region)
        .logger(LogLogger::new())
        .build()
}
