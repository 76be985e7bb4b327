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

use std::fmt::{Debug, Formatter};
use std::sync::{Arc, RwLock};

use bytes::Bytes;

use crate::{Body, Error, HttpSend, Result};

/// Client sends requests through its transport.
///
/// `Client` is a cheap handle: clones share the same transport slot, so
/// [`Client::set_transport`] on one handle is observed by every other.
/// [`crate::Builder`] relies on this to install the signing transport into a
/// client the caller already holds.
#[derive(Clone, Default)]
pub struct Client {
    transport: Arc<RwLock<Option<Arc<dyn HttpSend>>>>,
}

impl Debug for Client {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("transport", &self.transport())
            .finish()
    }
}

impl Client {
    /// Create a client without transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client with given transport.
    pub fn with_transport(transport: impl HttpSend) -> Self {
        let client = Self::new();
        client.set_transport(transport);
        client
    }

    /// Get the current transport.
    pub fn transport(&self) -> Option<Arc<dyn HttpSend>> {
        self.transport.read().expect("lock poisoned").clone()
    }

    /// Replace the transport for this client and all its clones.
    pub fn set_transport(&self, transport: impl HttpSend) {
        *self.transport.write().expect("lock poisoned") = Some(Arc::new(transport));
    }

    /// Send the request through current transport.
    ///
    /// The request may be modified in place by the transport.
    pub async fn send(&self, req: &mut http::Request<Body>) -> Result<http::Response<Bytes>> {
        let Some(transport) = self.transport() else {
            return Err(Error::unexpected(
                "HTTP sending not supported: client has no transport",
            ));
        };

        transport.http_send(req).await
    }
}

#[async_trait::async_trait]
impl HttpSend for Client {
    async fn http_send(&self, req: &mut http::Request<Body>) -> Result<http::Response<Bytes>> {
        self.send(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[derive(Debug)]
    struct Echo;

    #[async_trait::async_trait]
    impl HttpSend for Echo {
        async fn http_send(
            &self,
            req: &mut http::Request<Body>,
        ) -> Result<http::Response<Bytes>> {
            let body = req.body_mut().buffer().await?;
            Ok(http::Response::new(body))
        }
    }

    #[tokio::test]
    async fn test_send_without_transport() {
        let client = Client::new();
        let mut req = http::Request::new(Body::empty());

        let err = client.send(&mut req).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unexpected);
    }

    #[tokio::test]
    async fn test_set_transport_is_shared() -> anyhow::Result<()> {
        let client = Client::new();
        let handle = client.clone();
        handle.set_transport(Echo);

        let mut req = http::Request::new(Body::from("ping"));
        let resp = client.send(&mut req).await?;
        assert_eq!(resp.body(), &Bytes::from_static(b"ping"));
        Ok(())
    }
}
