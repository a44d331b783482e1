use anyhow::Result;
use blobsign::azure::{default_client, BlobPayload, BlobType, PutBlobOptions};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Reads AZURE_STORAGE_CONNECTION_STRING.
    let client = default_client()?;

    client
        .put_blob(
            "/mycontainer/hello.txt",
            BlobPayload::text("hello, world"),
            BlobType::BlockBlob,
            PutBlobOptions::new().with_content_type("text/plain"),
        )
        .await?;

    let link = client.get_blob_link("/mycontainer/hello.txt", None)?;
    println!("Share link: {link}");

    let resp = client.get_blob("/mycontainer/hello.txt").await?;
    println!("Response status: {}", resp.status());

    Ok(())
}
