use anyhow::Result;
use signclient::aws::{Config, RequestSigner};
use signclient::{default_context, Body, Builder, LogLogger};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Create a default context with reqwest and the OS environment
    let ctx = default_context();

    // Load credential and region from env
    let config = Config::default().from_env(&ctx);
    let Some(credential) = config.credential() else {
        eprintln!("AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY must be set");
        return Ok(());
    };
    let region = config.region.unwrap_or_else(|| "us-east-1".to_string());

    // Build a client that signs for OpenSearch
    let client = Builder::new(ctx)
        .signer(RequestSigner::new(credential))
        .service("es")
        .region(&region)
        .logger(LogLogger::new())
        .build()?;

    let mut req = http::Request::builder()
        .method(http::Method::GET)
        .uri("https://search-my-domain.us-east-1.es.amazonaws.com/_cat/indices")
        .body(Body::empty())?;

    let resp = client.send(&mut req).await?;
    println!("Response status: {}", resp.status());

    Ok(())
}
