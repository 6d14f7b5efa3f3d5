use bytes::Bytes;
use reqwest::{
    Method, StatusCode,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;
use url::Url;

use crate::{
    auth::{Credentials, DigestAuth},
    config::ClientConfig,
    transport::{HttpRequest, HttpResponse, HttpTransport},
};

mod clusters;
mod containers;
mod error;
mod peers;
mod projects;
mod root;

pub use clusters::ClusterService;
pub use containers::ContainerService;
pub use error::{ApiError, ApiErrorDetails};
pub use peers::PeerService;
pub use projects::ProjectService;
pub use root::RootService;

const APPLICATION_JSON: &str = "application/json";

/// The main entry point for talking to the Atlas management API.
///
/// `Client` owns a transport and the [`ClientConfig`]; the resource services
/// (`projects()`, `clusters()`, ...) are cheap borrowed views over it.
///
/// # Examples
///
/// See the [module-level documentation](crate) for a complete example.
#[derive(Debug, Clone)]
pub struct Client<T = DigestAuth> {
    transport: T,
    config: ClientConfig,
}

impl Client {
    /// Creates a client that authenticates with HTTP digest over a default `reqwest` client.
    ///
    /// # Arguments
    ///
    /// * `username` - The public part of the Atlas API key
    /// * `password` - The private part of the Atlas API key
    pub fn with_digest_auth(username: impl Into<String>, password: impl Into<String>) -> Client {
        Client::new(DigestAuth::new(
            reqwest::Client::new(),
            Credentials::new(username, password),
        ))
    }
}

impl<T> Client<T> {
    /// Creates a new client using the default configuration.
    ///
    /// # Arguments
    ///
    /// * `transport` - The transport requests are executed with, usually a
    ///   [`DigestAuth`] wrapping a `reqwest::Client`
    pub fn new(transport: T) -> Client<T> {
        Client::with_config(transport, ClientConfig::default())
    }

    /// Creates a new client with an explicit configuration.
    ///
    /// This is primarily useful to point the client at another base URL, for
    /// example a test server.
    pub fn with_config(transport: T, config: ClientConfig) -> Client<T> {
        Client { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: HttpTransport> Client<T> {
    /// The API root resource.
    pub fn root(&self) -> RootService<'_, T> {
        RootService::new(self)
    }

    /// Projects (also called groups).
    pub fn projects(&self) -> ProjectService<'_, T> {
        ProjectService::new(self)
    }

    /// Clusters of a project.
    pub fn clusters(&self) -> ClusterService<'_, T> {
        ClusterService::new(self)
    }

    /// Network containers of a project.
    pub fn containers(&self) -> ContainerService<'_, T> {
        ContainerService::new(self)
    }

    /// Network peering connections of a project.
    pub fn peers(&self) -> PeerService<'_, T> {
        PeerService::new(self)
    }

    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        self.config.endpoint(segments)
    }

    pub(crate) async fn get<R: DeserializeOwned>(&self, url: Url) -> Result<Response<R>, ApiError> {
        let response = self.send(Method::GET, url, None).await?;
        Response::decode(response)
    }

    pub(crate) async fn post<B, R>(&self, url: Url, body: &B) -> Result<Response<R>, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_vec(body).map_err(ApiError::Encode)?;
        let response = self.send(Method::POST, url, Some(body.into())).await?;
        Response::decode(response)
    }

    pub(crate) async fn patch<B, R>(&self, url: Url, body: &B) -> Result<Response<R>, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_vec(body).map_err(ApiError::Encode)?;
        let response = self.send(Method::PATCH, url, Some(body.into())).await?;
        Response::decode(response)
    }

    /// Issues a DELETE; the response body is discarded.
    pub(crate) async fn delete(&self, url: Url) -> Result<Response<()>, ApiError> {
        let response = self.send(Method::DELETE, url, None).await?;
        Ok(Response {
            status: response.status,
            headers: response.headers,
            value: (),
        })
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<Bytes>,
    ) -> Result<HttpResponse, ApiError> {
        let mut request = HttpRequest::new(method, url);
        request
            .headers
            .insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        request
            .headers
            .insert(USER_AGENT, HeaderValue::from_str(&self.config.user_agent)?);
        if body.is_some() {
            request
                .headers
                .insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        }
        request.body = body;

        debug!(method = %request.method, url = %request.url, "sending Atlas API request");

        let execution = self.transport.execute(request);
        let response = match self.config.timeout {
            Some(timeout) => tokio::time::timeout(timeout, execution)
                .await
                .map_err(|_| ApiError::Timeout(timeout))??,
            None => execution.await?,
        };

        debug!(status = %response.status, "received Atlas API response");

        if !response.status.is_success() {
            return Err(ApiError::from_response(&response));
        }

        Ok(response)
    }
}

/// A decoded API response together with its status and headers.
#[derive(Debug, Clone)]
pub struct Response<T> {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub value: T,
}

impl<T> Response<T> {
    pub fn into_value(self) -> T {
        self.value
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Response<U> {
        Response {
            status: self.status,
            headers: self.headers,
            value: f(self.value),
        }
    }
}

impl<T: DeserializeOwned> Response<T> {
    fn decode(response: HttpResponse) -> Result<Response<T>, ApiError> {
        let value = serde_json::from_slice(&response.body).map_err(ApiError::Decode)?;
        Ok(Response {
            status: response.status,
            headers: response.headers,
            value,
        })
    }
}
