use md5::Md5;
use rand::Rng;
use reqwest::{
    Method, StatusCode,
    header::{AUTHORIZATION, HeaderMap, HeaderValue, WWW_AUTHENTICATE},
};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use super::{Algorithm, DigestChallenge, DigestError, Qop};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, TransportError};

/// Nonce count sent with every answer; challenges are never reused.
const NONCE_COUNT: &str = "00000001";

/// Username and password used to answer digest challenges.
///
/// For Atlas these are the public and private halves of a programmatic API key.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A transport that answers `401 Unauthorized` digest challenges.
///
/// The request is first sent as-is. When the server replies with a 401 and a
/// `WWW-Authenticate: Digest` challenge, the response is computed and the
/// request is sent exactly once more with an `Authorization` header. Any
/// other response is returned untouched.
///
/// # Examples
///
/// ```
/// use atlas_api::auth::{Credentials, DigestAuth};
///
/// let transport = DigestAuth::new(
///     reqwest::Client::new(),
///     Credentials::new("public-key", "private-key"),
/// );
/// let client = atlas_api::Client::new(transport);
/// ```
#[derive(Debug, Clone)]
pub struct DigestAuth<T = reqwest::Client> {
    inner: T,
    credentials: Credentials,
}

impl<T> DigestAuth<T> {
    pub fn new(inner: T, credentials: Credentials) -> DigestAuth<T> {
        DigestAuth { inner, credentials }
    }

    /// The wrapped transport.
    pub fn inner(&self) -> &T {
        &self.inner
    }
}

impl<T: HttpTransport> HttpTransport for DigestAuth<T> {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let response = self.inner.execute(request.clone()).await?;
        if response.status != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        let challenge = match find_challenge(&response.headers) {
            None => return Ok(response),
            Some(Ok(challenge)) => challenge,
            Some(Err(err)) => {
                warn!(url = %request.url, error = %err, "unable to answer digest challenge");
                return Err(err.into());
            }
        };

        let cnonce = format!("{:016x}", rand::rng().random::<u64>());
        let authorization = authorization_header(
            &challenge,
            &self.credentials,
            &request.method,
            request.request_uri(),
            request.body.as_deref().unwrap_or_default(),
            &cnonce,
        );
        let mut authorization = HeaderValue::from_str(&authorization).map_err(DigestError::from)?;
        authorization.set_sensitive(true);

        debug!(
            method = %request.method,
            url = %request.url,
            realm = %challenge.realm,
            algorithm = %challenge.algorithm,
            "answering digest challenge"
        );

        let mut request = request;
        request.headers.insert(AUTHORIZATION, authorization);
        self.inner.execute(request).await
    }
}

/// Finds the first digest challenge, skipping challenges for other schemes.
fn find_challenge(headers: &HeaderMap) -> Option<Result<DigestChallenge, DigestError>> {
    for value in headers.get_all(WWW_AUTHENTICATE) {
        let Ok(value) = value.to_str() else {
            continue;
        };
        match value.parse::<DigestChallenge>() {
            Err(DigestError::NotDigest) => continue,
            result => return Some(result),
        }
    }
    None
}

fn hash(algorithm: Algorithm, data: &str) -> String {
    hash_bytes(algorithm, data.as_bytes())
}

fn hash_bytes(algorithm: Algorithm, data: &[u8]) -> String {
    match algorithm {
        Algorithm::Md5 | Algorithm::Md5Sess => format!("{:x}", Md5::digest(data)),
        Algorithm::Sha256 | Algorithm::Sha256Sess => format!("{:x}", Sha256::digest(data)),
    }
}

/// Computes the `response` value of an authorization (RFC 2617 section 3.2.2.1).
pub(crate) fn response_digest(
    challenge: &DigestChallenge,
    credentials: &Credentials,
    method: &Method,
    uri: &str,
    body: &[u8],
    cnonce: &str,
) -> String {
    let algorithm = challenge.algorithm;
    let qop = challenge.preferred_qop();

    let mut ha1 = hash(
        algorithm,
        &format!(
            "{}:{}:{}",
            credentials.username, challenge.realm, credentials.password
        ),
    );
    if algorithm.is_session() {
        ha1 = hash(algorithm, &format!("{}:{}:{}", ha1, challenge.nonce, cnonce));
    }

    let ha2 = match qop {
        Some(Qop::AuthInt) => hash(
            algorithm,
            &format!("{}:{}:{}", method, uri, hash_bytes(algorithm, body)),
        ),
        Some(Qop::Auth) | None => hash(algorithm, &format!("{}:{}", method, uri)),
    };

    match qop {
        Some(qop) => hash(
            algorithm,
            &format!(
                "{}:{}:{}:{}:{}:{}",
                ha1, challenge.nonce, NONCE_COUNT, cnonce, qop, ha2
            ),
        ),
        None => hash(algorithm, &format!("{}:{}:{}", ha1, challenge.nonce, ha2)),
    }
}

/// Builds the full `Authorization` header value answering `challenge`.
pub(crate) fn authorization_header(
    challenge: &DigestChallenge,
    credentials: &Credentials,
    method: &Method,
    uri: &str,
    body: &[u8],
    cnonce: &str,
) -> String {
    let response = response_digest(challenge, credentials, method, uri, body, cnonce);

    let mut header = format!(
        "Digest username=\"{}\", realm=\"{}\", nonce=\"{}\", uri=\"{}\", algorithm={}, response=\"{}\"",
        quote(&credentials.username),
        quote(&challenge.realm),
        quote(&challenge.nonce),
        quote(uri),
        challenge.algorithm,
        response
    );
    if let Some(opaque) = &challenge.opaque {
        header.push_str(&format!(", opaque=\"{}\"", quote(opaque)));
    }
    if let Some(qop) = challenge.preferred_qop() {
        header.push_str(&format!(
            ", qop={}, nc={}, cnonce=\"{}\"",
            qop, NONCE_COUNT, cnonce
        ));
    }
    header
}

fn quote(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
