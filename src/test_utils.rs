use bytes::Bytes;
use mockall::mock;
use reqwest::{
    StatusCode,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};

use crate::{
    Client,
    config::ClientConfig,
    transport::{HttpRequest, HttpResponse, HttpTransport, TransportError},
};

pub const TEST_BASE_URL: &str = "https://cloud.mongodb.com/api/atlas/v1.0/";

mock! {
    pub Transport {}

    impl HttpTransport for Transport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
    }
}

pub fn json_response(status: StatusCode, body: &str) -> HttpResponse {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    HttpResponse {
        status,
        headers,
        body: Bytes::copy_from_slice(body.as_bytes()),
    }
}

/// Parses the JSON body of a captured request.
pub fn request_json(request: &HttpRequest) -> serde_json::Value {
    request
        .body
        .as_deref()
        .map(|body| serde_json::from_slice(body).expect("request body is JSON"))
        .unwrap_or(serde_json::Value::Null)
}

pub fn test_client(transport: MockTransport) -> Client<MockTransport> {
    Client::with_config(
        transport,
        ClientConfig::builder().base_url(TEST_BASE_URL).build(),
    )
}
