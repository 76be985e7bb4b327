//! [`HttpSend`] implementation backed by [`reqwest`].
//!
//! ```no_run
//! use signclient_core::Context;
//! use signclient_http_send_reqwest::ReqwestHttpSend;
//!
//! let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use log::debug;
use reqwest::{Client, Request, Url};
use signclient_core::{Body, BodyKind, Error, HttpSend, Result};

/// Send requests with a [`reqwest::Client`].
///
/// Buffered bodies are cloned so the caller can read them again after the
/// call, streaming bodies are handed over to reqwest and consumed.
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: &mut http::Request<Body>) -> Result<http::Response<Bytes>> {
        let req = to_reqwest_request(req)?;
        debug!("sending request: {} {}", req.method(), req.url());

        let resp = self
            .client
            .execute(req)
            .await
            .map_err(|err| Error::transport("failed to send request").with_source(err))?;
        let resp: http::Response<reqwest::Body> = resp.into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|err| Error::transport("failed to read response body").with_source(err))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}

/// Build a reqwest request out of `req`, leaving `req` usable for the caller.
fn to_reqwest_request(req: &mut http::Request<Body>) -> Result<Request> {
    let url = Url::parse(&req.uri().to_string()).map_err(|err| {
        Error::request_invalid(format!("invalid request url: {}", req.uri())).with_source(err)
    })?;

    let mut out = Request::new(req.method().clone(), url);
    *out.headers_mut() = req.headers().clone();
    *out.version_mut() = req.version();
    *out.body_mut() = match req.body_mut().take_for_send().into_inner() {
        BodyKind::None => None,
        BodyKind::Bytes(bs) => Some(reqwest::Body::from(bs)),
        BodyKind::Stream(stream) => Some(reqwest::Body::wrap_stream(stream)),
    };

    Ok(out)
}
