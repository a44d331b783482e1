use anyhow::Result;
use blobsign_azure_blob::{BlobClient, BlobPayload, BlobType, ConnectionConfig, PutBlobOptions};
use blobsign_core::{body_to_bytes, Context, OsEnv};
use blobsign_http_send_reqwest::ReqwestHttpSend;
use reqwest::Client;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::new(Client::new()))
        .with_env(OsEnv);

    // Falls back to the local emulator when no connection string is configured.
    let config = match ConnectionConfig::from_env(&ctx) {
        Ok(config) => config,
        Err(_) => {
            println!("AZURE_STORAGE_CONNECTION_STRING is not set, using Azurite at 127.0.0.1:10000");
            ConnectionConfig::try_from_connection_string("UseDevelopmentStorage=true")?
        }
    };
    let client = BlobClient::new(ctx, config);

    let path = "/demo/greeting.log";

    println!("Creating append blob {path}");
    client
        .put_blob(
            path,
            BlobPayload::text("hello\n"),
            BlobType::AppendBlob,
            PutBlobOptions::new().with_content_type("text/plain"),
        )
        .await?;

    println!("Appending to {path}");
    client
        .append_block(path, BlobPayload::text("world\n"))
        .await?;

    let resp = client.get_blob(path).await?;
    println!("Read {path}: {}", resp.status());
    let content = body_to_bytes(resp.into_body()).await?;
    println!("{}", String::from_utf8_lossy(&content));

    let link = client.get_blob_link(path, None)?;
    println!("Share link, valid for one hour: {link}");

    let resp = client.list_blobs_raw("/demo/greeting").await?;
    println!("List /demo: {}", resp.status());

    let resp = client.delete_blob(path).await?;
    println!("Delete {path}: {}", resp.status());

    Ok(())
}
