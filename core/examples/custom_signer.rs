use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use http::header::AUTHORIZATION;
use http::request::Parts;
use http::{HeaderMap, HeaderValue};
use signclient_core::time::{format_rfc3339, DateTime};
use signclient_core::{Body, Builder, Context, HttpSend, LogLogger, SignRequest};

// A toy signer that puts the signing scope into the authorization header.
#[derive(Debug)]
struct ScopeSigner {
    access_key: String,
}

#[async_trait]
impl SignRequest for ScopeSigner {
    async fn sign_request(
        &self,
        req: &mut Parts,
        body: Option<Bytes>,
        service: &str,
        region: &str,
        time: DateTime,
    ) -> signclient_core::Result<HeaderMap> {
        let value = format!(
            "AWS4-TOY Credential={}/{}/{}, Time={}, BodyLength={}",
            self.access_key,
            region,
            service,
            format_rfc3339(time),
            body.map(|v| v.len()).unwrap_or_default(),
        );

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&value)?);
        req.headers.extend(headers.clone());
        Ok(headers)
    }
}

// A transport that prints the request instead of sending it.
#[derive(Debug)]
struct PrintTransport;

#[async_trait]
impl HttpSend for PrintTransport {
    async fn http_send(
        &self,
        req: &mut http::Request<Body>,
    ) -> signclient_core::Result<http::Response<Bytes>> {
        println!("{} {}", req.method(), req.uri());
        for (name, value) in req.headers() {
            println!("  {name}: {value:?}");
        }
        Ok(http::Response::new(Bytes::from_static(b"ok")))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let ctx = Context::new().with_http_send(PrintTransport);

    let client = Builder::new(ctx)
        .signer(ScopeSigner {
            access_key: "my-access-key".to_string(),
        })
        .service("es")
        .region("us-east-1")
        .logger(LogLogger::new())
        .build()?;

    let mut req = http::Request::builder()
        .method(http::Method::PUT)
        .uri("http://search.example.com/index/_doc/%2Cid")
        .body(Body::from(r#"{"hello":"world"}"#))?;

    let resp = client.send(&mut req).await?;
    println!("Response status: {}", resp.status());

    Ok(())
}
