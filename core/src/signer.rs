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

use std::mem;
use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use http::header::{AUTHORIZATION, DATE};
use http::request::Parts;
use http::HeaderValue;

use crate::escape::{normalize_uri, ENCODED_COMMA};
use crate::time::{format_rfc3339, now, DateTime};
use crate::{Body, ContextLogger, Error, HttpSend, Result, SignRequest};

/// Prefix of an `Authorization` header produced by the signing scheme.
pub const SIGNATURE_SCHEME_PREFIX: &str = "AWS4";

/// SigningTransport signs every request before handing it to the inner transport.
///
/// For each request, in this order:
///
/// - requests whose `Authorization` already starts with [`SIGNATURE_SCHEME_PREFIX`]
///   are forwarded untouched.
/// - the scheme is forced to `https`.
/// - a raw path carrying `%2C` is re-escaped in strict mode.
/// - `Date` is set to the signing time in RFC 3339.
/// - a present body is read into memory and replaced by the buffered bytes.
/// - the signer is invoked, then the request is forwarded.
///
/// The request is modified in place and stays modified after the call, its
/// body (if any) is buffered and can be read again. Errors from reading the
/// body or signing stop the request, errors from the inner transport are
/// returned as is. Nothing is retried.
#[derive(Debug, Clone)]
pub struct SigningTransport {
    transport: Arc<dyn HttpSend>,
    signer: Arc<dyn SignRequest>,
    service: String,
    region: String,
    logger: Arc<dyn ContextLogger>,
}

impl SigningTransport {
    /// Create a new signing transport.
    ///
    /// No validation happens here, use [`crate::Builder`] to get a checked client.
    pub fn new(
        transport: Arc<dyn HttpSend>,
        signer: Arc<dyn SignRequest>,
        service: &str,
        region: &str,
        logger: Arc<dyn ContextLogger>,
    ) -> Self {
        Self {
            transport,
            signer,
            service: service.to_string(),
            region: region.to_string(),
            logger,
        }
    }

    /// Service name used for signing.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Region name used for signing.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// The transport requests are forwarded to.
    pub fn inner(&self) -> Arc<dyn HttpSend> {
        self.transport.clone()
    }

    async fn sign(&self, req: &mut http::Request<Body>) -> Result<()> {
        let path = req.uri().path();
        if path.contains(ENCODED_COMMA) {
            self.logger.log(
                req.extensions(),
                format_args!("Escaping path for URL path '{path}'"),
            );
        }
        let uri = match normalize_uri(req.uri()) {
            Ok(uri) => uri,
            Err(err) => {
                self.logger.log(
                    req.extensions(),
                    format_args!("Error while normalizing request URL: '{err}'"),
                );
                return Err(err);
            }
        };
        *req.uri_mut() = uri;

        let now = now();
        let date = match HeaderValue::from_str(&format_rfc3339(now)) {
            Ok(v) => v,
            Err(err) => {
                let err = Error::from(err);
                self.logger.log(
                    req.extensions(),
                    format_args!("Error while setting date header: '{err}'"),
                );
                return Err(err);
            }
        };
        req.headers_mut().insert(DATE, date);
        self.logger
            .log(req.extensions(), format_args!("Request to be signed: {req:?}"));

        let body = if req.body().is_none() {
            self.logger
                .log(req.extensions(), format_args!("Signing request with no body..."));
            None
        } else {
            let buffered = req.body_mut().buffer().await;
            let bs = match buffered {
                Ok(bs) => bs,
                Err(err) => {
                    self.logger.log(
                        req.extensions(),
                        format_args!("Error while attempting to read request body: '{err}'"),
                    );
                    return Err(err);
                }
            };
            self.logger
                .log(req.extensions(), format_args!("Signing request with body..."));
            Some(bs)
        };

        let start = Instant::now();
        let result = self.sign_parts(req, body, now).await;
        let latency = start.elapsed().as_millis();

        match result {
            Ok(()) => {
                self.logger.log(
                    req.extensions(),
                    format_args!("Signing successful. Latency: {latency} ms"),
                );
                Ok(())
            }
            Err(err) => {
                self.logger.log(
                    req.extensions(),
                    format_args!("Error while attempting to sign request: '{err}'"),
                );
                Err(err)
            }
        }
    }

    /// Hand the request head to the signer and put it back afterwards,
    /// whatever the outcome, including the future being dropped.
    async fn sign_parts(
        &self,
        req: &mut http::Request<Body>,
        body: Option<Bytes>,
        now: DateTime,
    ) -> Result<()> {
        let mut head = RestoreOnDrop::take(req);
        let result = self
            .signer
            .sign_request(head.parts_mut(), body, &self.service, &self.region, now)
            .await;
        drop(head);

        result.map(|_| ())
    }
}

/// Holds the head of a request taken out for signing and writes it back on drop.
struct RestoreOnDrop<'a> {
    req: &'a mut http::Request<Body>,
    parts: Option<Parts>,
    content: Body,
}

impl<'a> RestoreOnDrop<'a> {
    fn take(req: &'a mut http::Request<Body>) -> Self {
        let (parts, content) = mem::take(req).into_parts();
        Self {
            req,
            parts: Some(parts),
            content,
        }
    }

    fn parts_mut(&mut self) -> &mut Parts {
        self.parts.as_mut().expect("parts are only taken on drop")
    }
}

impl Drop for RestoreOnDrop<'_> {
    fn drop(&mut self) {
        if let Some(parts) = self.parts.take() {
            *self.req = http::Request::from_parts(parts, mem::take(&mut self.content));
        }
    }
}

#[async_trait::async_trait]
impl HttpSend for SigningTransport {
    async fn http_send(&self, req: &mut http::Request<Body>) -> Result<http::Response<Bytes>> {
        let signed = req
            .headers()
            .get(AUTHORIZATION)
            .is_some_and(|v| v.as_bytes().starts_with(SIGNATURE_SCHEME_PREFIX.as_bytes()));
        if signed {
            self.logger.log(
                req.extensions(),
                format_args!("Received request to sign that is already signed. Skipping."),
            );
            return self.transport.http_send(req).await;
        }

        self.sign(req).await?;

        let start = Instant::now();
        let result = self.transport.http_send(req).await;
        let latency = start.elapsed().as_millis();

        match &result {
            Ok(_) => self.logger.log(
                req.extensions(),
                format_args!("Successful response from transport. Latency: {latency} ms"),
            ),
            Err(err) => self.logger.log(
                req.extensions(),
                format_args!("Error from transport. Latency: {latency} ms, Error: {err}"),
            ),
        }

        result
    }
}
