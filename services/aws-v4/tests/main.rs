use std::env;
use std::str::FromStr;

use anyhow::Result;
use http::{Method, Request, StatusCode};
use log::{debug, warn};
use signclient_aws_v4::{Config, RequestSigner};
use signclient_core::{Body, Builder, Client, Context, LogLogger, OsEnv};
use signclient_http_send_reqwest::ReqwestHttpSend;

fn init_signing_client() -> Option<(Client, String)> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("SIGNCLIENT_AWS_V4_TEST").unwrap_or_default() != "on" {
        return None;
    }

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::default().from_env(&ctx);
    let credential = config
        .credential()
        .expect("env AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY must set");
    let region = config.region.clone().expect("env AWS_REGION must set");
    let url = env::var("SIGNCLIENT_AWS_V4_URL").expect("env SIGNCLIENT_AWS_V4_URL must set");

    let client = Builder::new(ctx)
        .signer(RequestSigner::new(credential))
        .service("s3")
        .region(&region)
        .logger(LogLogger::new())
        .build()
        .expect("client must be valid");

    Some((client, url))
}

#[tokio::test]
async fn test_put_and_get_object() -> Result<()> {
    let Some((client, url)) = init_signing_client() else {
        warn!("SIGNCLIENT_AWS_V4_TEST is not set, skipped");
        return Ok(());
    };

    let path = format!("{url}/signclient-test-{}", unique_suffix());
    let content = "Hello, signclient!";

    let mut req = Request::builder()
        .method(Method::PUT)
        .uri(&path)
        .body(Body::from(content))?;
    let resp = client.send(&mut req).await?;
    debug!("put response: {resp:?}");
    assert_eq!(StatusCode::OK, resp.status());

    // Body stays readable after sending.
    assert_eq!(req.body_mut().buffer().await?, content.as_bytes());

    let mut req = Request::builder()
        .method(Method::GET)
        .uri(&path)
        .body(Body::empty())?;
    let resp = client.send(&mut req).await?;
    assert_eq!(StatusCode::OK, resp.status());
    assert_eq!(resp.body(), content.as_bytes());

    let mut req = Request::builder()
        .method(Method::DELETE)
        .uri(&path)
        .body(Body::empty())?;
    let resp = client.send(&mut req).await?;
    assert_eq!(StatusCode::NO_CONTENT, resp.status());
    Ok(())
}

#[tokio::test]
async fn test_head_object_with_special_chars() -> Result<()> {
    let Some((client, url)) = init_signing_client() else {
        warn!("SIGNCLIENT_AWS_V4_TEST is not set, skipped");
        return Ok(());
    };

    let mut req = Request::builder()
        .method(Method::HEAD)
        .uri(http::Uri::from_str(&format!("{url}/not-exist-%2Cfile"))?)
        .body(Body::empty())?;
    let resp = client.send(&mut req).await?;
    debug!("head response: {resp:?}");

    // A bad signature would be 403.
    assert_eq!(StatusCode::NOT_FOUND, resp.status());
    assert_eq!(req.uri().path().rsplit('/').next(), Some("not-exist-%252Cfile"));
    Ok(())
}

fn unique_suffix() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|v| v.as_nanos())
        .unwrap_or_default()
}
