use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use blobsign_azure_blob::{BlobClient, ConnectionConfig};
use blobsign_core::{body_from_bytes, Body, Context, HttpSend, Result};
use bytes::Bytes;
use http::{HeaderMap, Method, Request, Response, StatusCode, Uri};

pub const CONN_STR: &str = "DefaultEndpointsProtocol=https;AccountName=acct;AccountKey=eHh4eHh4eHh4eHh4eHh4eHh4eHh4eHh4eHh4eHh4eHg=;EndpointSuffix=core.windows.net";

/// A request as seen by the transport.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// MockHttpSend records every request and answers with scripted responses.
///
/// Once the script runs out, every request is answered with `201 Created`.
#[derive(Debug, Clone, Default)]
pub struct MockHttpSend {
    requests: Arc<Mutex<Vec<Recorded>>>,
    responses: Arc<Mutex<VecDeque<(StatusCode, HeaderMap, Bytes)>>>,
}

impl MockHttpSend {
    pub fn respond(&self, status: StatusCode, headers: HeaderMap, body: &'static str) {
        self.responses
            .lock()
            .unwrap()
            .push_back((status, headers, Bytes::from_static(body.as_bytes())));
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: Request<Bytes>) -> Result<Response<Body>> {
        let (parts, body) = req.into_parts();
        self.requests.lock().unwrap().push(Recorded {
            method: parts.method,
            uri: parts.uri,
            headers: parts.headers,
            body,
        });

        let (status, headers, body) = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or((StatusCode::CREATED, HeaderMap::new(), Bytes::new()));

        let mut resp = Response::new(body_from_bytes(body));
        *resp.status_mut() = status;
        *resp.headers_mut() = headers;
        Ok(resp)
    }
}

pub fn init_client() -> (BlobClient, MockHttpSend) {
    init_client_with(CONN_STR)
}

pub fn init_client_with(conn_str: &str) -> (BlobClient, MockHttpSend) {
    let _ = env_logger::builder().is_test(true).try_init();

    let mock = MockHttpSend::default();
    let ctx = Context::new().with_http_send(mock.clone());
    let config = ConnectionConfig::try_from_connection_string(conn_str).unwrap();

    (BlobClient::new(ctx, config), mock)
}
