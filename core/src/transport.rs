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

use std::fmt::Debug;
use std::sync::Arc;

use bytes::Bytes;

use crate::{Body, Error, Result};

/// HttpSend is the transport that actually executes a request.
///
/// The request is borrowed mutably: decorators such as
/// [`crate::SigningTransport`] rewrite it in place before handing it to the
/// next transport, and the caller can inspect the final request afterwards.
#[async_trait::async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send http request and return the response.
    async fn http_send(&self, req: &mut http::Request<Body>) -> Result<http::Response<Bytes>>;
}

#[async_trait::async_trait]
impl<T: HttpSend + ?Sized> HttpSend for Arc<T> {
    async fn http_send(&self, req: &mut http::Request<Body>) -> Result<http::Response<Bytes>> {
        self.as_ref().http_send(req).await
    }
}

/// NoopHttpSend is a no-op implementation that always returns an error.
///
/// This is used when no transport is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHttpSend;

#[async_trait::async_trait]
impl HttpSend for NoopHttpSend {
    async fn http_send(&self, _req: &mut http::Request<Body>) -> Result<http::Response<Bytes>> {
        Err(Error::unexpected(
            "HTTP sending not supported: no transport configured",
        ))
    }
}
