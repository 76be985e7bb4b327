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

use std::sync::Arc;

use crate::{
    Client, Context, ContextLogger, DiscardLogger, Error, Result, SignRequest, SigningTransport,
};

/// Builder validates the configuration and installs a [`SigningTransport`] into a client.
///
/// ## Side effects
///
/// The client passed to [`Builder::client`] (or the context's default client
/// when none is given) is modified in place: its transport is replaced by the
/// signing transport, and every clone of that client observes the change.
///
/// ## Example
///
/// ```
/// use signclient_core::{Builder, Context};
/// # use signclient_core::{Result, SignRequest, time::DateTime};
/// # use http::{request::Parts, HeaderMap};
/// # #[derive(Debug)]
/// # struct MySigner;
/// # #[async_trait::async_trait]
/// # impl SignRequest for MySigner {
/// #     async fn sign_request(&self, _: &mut Parts, _: Option<bytes::Bytes>, _: &str, _: &str, _: DateTime) -> Result<HeaderMap> {
/// #         Ok(HeaderMap::new())
/// #     }
/// # }
///
/// let client = Builder::new(Context::new())
///     .signer(MySigner)
///     .service("es")
///     .region("us-east-1")
///     .build()
///     .expect("client must be valid");
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    ctx: Context,
    signer: Option<Arc<dyn SignRequest>>,
    client: Option<Client>,
    service: String,
    region: String,
    logger: Option<Arc<dyn ContextLogger>>,
}

impl Builder {
    /// Create a new builder, `ctx` provides the default client and transport.
    pub fn new(ctx: Context) -> Self {
        Self {
            ctx,
            ..Default::default()
        }
    }

    /// Set the signing capability.
    pub fn signer(mut self, signer: impl SignRequest) -> Self {
        self.signer = Some(Arc::new(signer));
        self
    }

    /// Set the client to wrap.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the service name, for example `s3` or `es`.
    pub fn service(mut self, service: &str) -> Self {
        self.service = service.to_string();
        self
    }

    /// Set the region name, for example `us-east-1`.
    pub fn region(mut self, region: &str) -> Self {
        self.region = region.to_string();
        self
    }

    /// Set the logger used for diagnostics.
    pub fn logger(mut self, logger: impl ContextLogger) -> Self {
        self.logger = Some(Arc::new(logger));
        self
    }

    /// Validate the configuration and return the wrapped client.
    ///
    /// Fails with `MissingSigner`, `MissingService` or `MissingRegion`,
    /// checked in this order.
    pub fn build(self) -> Result<Client> {
        let Some(signer) = self.signer else {
            return Err(Error::missing_signer());
        };
        if self.service.is_empty() {
            return Err(Error::missing_service());
        }
        if self.region.is_empty() {
            return Err(Error::missing_region());
        }

        let client = self.client.unwrap_or_else(|| self.ctx.client());
        let logger = self
            .logger
            .unwrap_or_else(|| Arc::new(DiscardLogger) as Arc<dyn ContextLogger>);
        let inner = client
            .transport()
            .unwrap_or_else(|| self.ctx.http_send());

        client.set_transport(SigningTransport::new(
            inner,
            signer,
            &self.service,
            &self.region,
            logger,
        ));
        Ok(client)
    }
}
