
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use http::header::AUTHORIZATION;
use http::request::Parts;
use http::{HeaderMap, HeaderValue, StatusCode};
use signclient_core::time::DateTime;
use signclient_core::{Body, ContextLogger, Error, HttpSend, Result, SignRequest};

/// Arguments seen by [`RecordSigner`] for one call.
#[derive(Debug, Clone)]
pub struct SignCall {
    pub path: String,
    pub scheme: Option<String>,
    pub date: Option<String>,
    pub body: Option<Bytes>,
    pub service: String,
    pub region: String,
    pub time: DateTime,
}

/// Signer that records its arguments and sets a fixed authorization header.
#[derive(Debug, Default)]
pub struct RecordSigner {
    pub calls: Mutex<Vec<SignCall>>,
    pub fail: bool,
}

impl RecordSigner {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<SignCall> {
        self.calls.lock().expect("lock poisoned").clone()
    }
}

#[async_trait::async_trait]
impl SignRequest for RecordSigner {
    async fn sign_request(
        &self,
        req: &mut Parts,
        body: Option<Bytes>,
        service: &str,
        region: &str,
        time: DateTime,
    ) -> Result<HeaderMap> {
        self.calls.lock().expect("lock poisoned").push(SignCall {
            path: req.uri.path().to_string(),
            scheme: req.uri.scheme_str().map(|v| v.to_string()),
            date: req
                .headers
                .get(http::header::DATE)
                .map(|v| v.to_str().expect("date must be valid").to_string()),
            body,
            service: service.to_string(),
            region: region.to_string(),
            time,
        });

        if self.fail {
            return Err(Error::sign_failed("credential is not available"));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_static("AWS4-HMAC-SHA256 Credential=test, Signature=abc"),
        );
        req.headers.extend(headers.clone());
        Ok(headers)
    }
}

/// What [`EchoTransport`] received.
#[derive(Debug, Clone)]
pub struct SentRequest {
    pub uri: http::Uri,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

/// Transport that records requests and answers with a fixed response.
#[derive(Debug, Default)]
pub struct EchoTransport {
    pub sent: Mutex<Vec<SentRequest>>,
    pub fail: bool,
}

impl EchoTransport {
    pub const RESPONSE: &'static [u8] = b"fixed response";

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<SentRequest> {
        self.sent.lock().expect("lock poisoned").clone()
    }
}

#[async_trait::async_trait]
impl HttpSend for EchoTransport {
    async fn http_send(&self, req: &mut http::Request<Body>) -> Result<http::Response<Bytes>> {
        let body = if req.body().is_none() {
            None
        } else {
            Some(req.body_mut().buffer().await?)
        };
        self.sent.lock().expect("lock poisoned").push(SentRequest {
            uri: req.uri().clone(),
            headers: req.headers().clone(),
            body,
        });

        if self.fail {
            return Err(Error::transport("connection refused"));
        }

        let mut resp = http::Response::new(Bytes::from_static(Self::RESPONSE));
        *resp.status_mut() = StatusCode::ACCEPTED;
        Ok(resp)
    }
}

/// Logger that keeps every line in memory.
#[derive(Debug, Default)]
pub struct RecordLogger {
    pub lines: Mutex<Vec<String>>,
}

impl RecordLogger {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("lock poisoned").clone()
    }

    /// Returns true if any line starts with `prefix`.
    pub fn has(&self, prefix: &str) -> bool {
        self.lines().iter().any(|v| v.starts_with(prefix))
    }
}

impl ContextLogger for RecordLogger {
    fn log(&self, _: &http::Extensions, args: std::fmt::Arguments<'_>) {
        self.lines.lock().expect("lock poisoned").push(args.to_string());
    }
}

pub fn init_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Shared stubs for one test.
pub fn stubs() -> (Arc<RecordSigner>, Arc<EchoTransport>) {
    (
        Arc::new(RecordSigner::default()),
        Arc::new(EchoTransport::default()),
    )
}
