use async_trait::async_trait;
use blobsign_core::hash::base64_hmac_sha256;
use blobsign_core::time::{format_http_date, now};
use blobsign_core::{Context, Error, OsEnv, Result, SignRequest, SigningCredential};
use http::request::Parts;
use std::time::Duration;

// Define a custom credential type
#[derive(Clone, Debug)]
struct MyCredential {
    key_id: String,
    secret: Vec<u8>,
}

impl SigningCredential for MyCredential {
    fn is_valid(&self) -> bool {
        !self.key_id.is_empty() && !self.secret.is_empty()
    }
}

impl MyCredential {
    fn from_context(ctx: &Context) -> Self {
        let key_id = ctx.env_var("MY_KEY_ID").unwrap_or_default();
        let secret = ctx.env_var("MY_SECRET").unwrap_or_default();

        if key_id.is_empty() || secret.is_empty() {
            println!("No credentials found in environment, using demo credentials");
            return MyCredential {
                key_id: "demo-key".to_string(),
                secret: b"demo-secret".to_vec(),
            };
        }

        MyCredential {
            key_id,
            secret: secret.into_bytes(),
        }
    }
}

// Sign `METHOD\nPATH\nDATE` with HMAC-SHA256.
#[derive(Debug)]
struct MyRequestSigner;

#[async_trait]
impl SignRequest for MyRequestSigner {
    type Credential = MyCredential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &mut Parts,
        credential: Option<&Self::Credential>,
        _expires_in: Option<Duration>,
    ) -> Result<()> {
        let cred = credential.ok_or_else(|| Error::request_invalid("credential is required"))?;

        let date = format_http_date(now());
        let string_to_sign = format!("{}\n{}\n{}", req.method, req.uri.path(), date);
        let signature = base64_hmac_sha256(&cred.secret, string_to_sign.as_bytes());

        req.headers.insert("x-my-date", date.parse()?);
        req.headers.insert(
            http::header::AUTHORIZATION,
            format!("MY-HMAC {}:{signature}", cred.key_id).parse()?,
        );

        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let ctx = Context::new().with_env(OsEnv);
    let cred = MyCredential::from_context(&ctx);

    let mut parts = http::Request::builder()
        .method("GET")
        .uri("https://api.example.com/v1/objects/report.pdf")
        .body(())?
        .into_parts()
        .0;

    match MyRequestSigner
        .sign_request(&ctx, &mut parts, Some(&cred), None)
        .await
    {
        Ok(_) => {
            println!("Request signed successfully!");
            println!("Headers: {:?}", parts.headers);
        }
        Err(e) => {
            eprintln!("Failed to sign request: {}", e);
        }
    }

    Ok(())
}
