//! HTTP digest authentication layered over any [`HttpTransport`](crate::transport::HttpTransport).

mod challenge;
mod digest;

pub use challenge::{Algorithm, DigestChallenge, Qop};
pub use digest::{Credentials, DigestAuth};

#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    #[error("Challenge does not use the Digest scheme")]
    NotDigest,
    #[error("Malformed digest challenge: {0}")]
    Malformed(String),
    #[error("Digest challenge is missing `{0}`")]
    MissingField(&'static str),
    #[error("Unsupported digest algorithm: {0}")]
    UnsupportedAlgorithm(String),
    #[error("Digest challenge offers no supported qop")]
    UnsupportedQop,
    #[error("Authorization header is not a valid header value: {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),
}
