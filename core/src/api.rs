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
use http::request::Parts;
use http::HeaderMap;

use crate::time::DateTime;
use crate::Result;

/// SignRequest is the signing capability used by [`crate::SigningTransport`].
///
/// The algorithm itself lives outside this crate, for example
/// `signclient-aws-v4` implements AWS SigV4 on top of the `aws-sigv4` crate.
#[async_trait::async_trait]
pub trait SignRequest: Debug + Send + Sync + 'static {
    /// Sign the request in place and return the headers that were applied.
    ///
    /// ## Body
    ///
    /// `body` is `None` when the request carries no body at all. Otherwise it
    /// holds exactly the bytes that will be sent.
    ///
    /// ## Time
    ///
    /// `time` is the signing time. It matches the `Date` header already set
    /// on the request, implementations must not take their own clock.
    ///
    /// Implementations must be idempotent for identical inputs and safe for
    /// concurrent use.
    async fn sign_request(
        &self,
        req: &mut Parts,
        body: Option<Bytes>,
        service: &str,
        region: &str,
        time: DateTime,
    ) -> Result<HeaderMap>;
}

#[async_trait::async_trait]
impl<T: SignRequest + ?Sized> SignRequest for Arc<T> {
    async fn sign_request(
        &self,
        req: &mut Parts,
        body: Option<Bytes>,
        service: &str,
        region: &str,
        time: DateTime,
    ) -> Result<HeaderMap> {
        self.as_ref()
            .sign_request(req, body, service, region, time)
            .await
    }
}
