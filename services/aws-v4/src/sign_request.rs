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

use std::time::SystemTime;

use async_trait::async_trait;
use aws_credential_types::Credentials;
use aws_sigv4::http_request::{
    sign, PayloadChecksumKind, PercentEncodingMode, SignableBody, SignableRequest,
    SigningSettings,
};
use aws_sigv4::sign::v4;
use bytes::Bytes;
use http::header::AUTHORIZATION;
use http::request::Parts;
use http::{HeaderMap, HeaderName, HeaderValue};
use log::debug;
use signclient_core::time::DateTime;
use signclient_core::{Error, Result, SignRequest};

use crate::constants::*;
use crate::Credential;

/// RequestSigner that implement AWS SigV4.
///
/// The signature itself is computed by [`aws_sigv4`], this type only adapts
/// it to [`SignRequest`].
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credential: Credential,
}

impl RequestSigner {
    /// Create a new signer with a static credential.
    pub fn new(credential: Credential) -> Self {
        Self { credential }
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    async fn sign_request(
        &self,
        req: &mut Parts,
        body: Option<Bytes>,
        service: &str,
        region: &str,
        time: DateTime,
    ) -> Result<HeaderMap> {
        if !self.credential.is_valid() {
            return Err(Error::sign_failed("credential is not valid"));
        }

        let identity = Credentials::new(
            &self.credential.access_key_id,
            &self.credential.secret_access_key,
            self.credential.session_token.clone(),
            None,
            PROVIDER_NAME,
        )
        .into();

        let mut settings = SigningSettings::default();
        if service == S3_SERVICE {
            settings.percent_encoding_mode = PercentEncodingMode::Single;
            settings.payload_checksum_kind = PayloadChecksumKind::XAmzSha256;
        }

        let params = v4::SigningParams::builder()
            .identity(&identity)
            .region(region)
            .name(service)
            .time(SystemTime::from(time))
            .settings(settings)
            .build()
            .map_err(|err| Error::sign_failed("failed to build signing params").with_source(err))?;

        let mut headers = Vec::with_capacity(req.headers.len());
        for (name, value) in req.headers.iter() {
            let value = value.to_str().map_err(|err| {
                Error::sign_failed(format!("header {name} is not visible ASCII, cannot sign"))
                    .with_source(err)
            })?;
            headers.push((name.as_str(), value));
        }

        let body = body.unwrap_or_default();
        let signable = SignableRequest::new(
            req.method.as_str(),
            req.uri.to_string(),
            headers.into_iter(),
            SignableBody::Bytes(&body),
        )
        .map_err(|err| Error::sign_failed("failed to build signable request").with_source(err))?;

        let (instructions, signature) = sign(signable, &params.into())
            .map_err(|err| Error::sign_failed("failed to sign request").with_source(err))?
            .into_parts();
        debug!("calculated signature: {signature}");

        let mut signed = HeaderMap::new();
        for (name, value) in instructions.headers() {
            let name = HeaderName::from_bytes(name.as_bytes())?;
            let mut value = HeaderValue::from_str(value)?;
            // Set value sensitive to avoid leaking.
            if name == AUTHORIZATION || name == X_AMZ_SECURITY_TOKEN {
                value.set_sensitive(true);
            }
            signed.insert(name, value);
        }

        req.headers.extend(signed.clone());
        Ok(signed)
    }
}
