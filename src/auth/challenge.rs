use std::{fmt::Display, str::FromStr};

use super::DigestError;

/// Hash algorithm announced by a digest challenge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Md5,
    Md5Sess,
    Sha256,
    Sha256Sess,
}

impl Algorithm {
    /// Whether the session variant is used (HA1 is re-hashed with the nonces).
    pub fn is_session(&self) -> bool {
        matches!(self, Algorithm::Md5Sess | Algorithm::Sha256Sess)
    }
}

impl FromStr for Algorithm {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "MD5" => Ok(Algorithm::Md5),
            "MD5-SESS" => Ok(Algorithm::Md5Sess),
            "SHA-256" => Ok(Algorithm::Sha256),
            "SHA-256-SESS" => Ok(Algorithm::Sha256Sess),
            _ => Err(DigestError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Md5 => write!(f, "MD5"),
            Algorithm::Md5Sess => write!(f, "MD5-sess"),
            Algorithm::Sha256 => write!(f, "SHA-256"),
            Algorithm::Sha256Sess => write!(f, "SHA-256-sess"),
        }
    }
}

/// Quality of protection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Qop {
    Auth,
    AuthInt,
}

impl Display for Qop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Qop::Auth => write!(f, "auth"),
            Qop::AuthInt => write!(f, "auth-int"),
        }
    }
}

/// A parsed `WWW-Authenticate: Digest ...` challenge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigestChallenge {
    pub realm: String,
    pub nonce: String,
    pub opaque: Option<String>,
    pub algorithm: Algorithm,
    /// The qop values offered by the server, in the order they were listed.
    pub qop: Vec<Qop>,
    pub stale: bool,
}

impl DigestChallenge {
    /// Picks the qop to answer with: `auth` when offered, otherwise `auth-int`.
    ///
    /// Returns `None` when the server offered no qop at all, which means the
    /// RFC 2069 compatible response must be used.
    pub fn preferred_qop(&self) -> Option<Qop> {
        if self.qop.contains(&Qop::Auth) {
            Some(Qop::Auth)
        } else if self.qop.contains(&Qop::AuthInt) {
            Some(Qop::AuthInt)
        } else {
            None
        }
    }
}

impl FromStr for DigestChallenge {
    type Err = DigestError;

    fn from_str(header: &str) -> Result<Self, Self::Err> {
        let params = strip_digest_scheme(header).ok_or(DigestError::NotDigest)?;

        let mut realm = None;
        let mut nonce = None;
        let mut opaque = None;
        let mut algorithm = Algorithm::Md5;
        let mut qop = Vec::new();
        let mut qop_offered = false;
        let mut stale = false;

        for (key, value) in parse_params(params)? {
            match key.to_ascii_lowercase().as_str() {
                "realm" => realm = Some(value),
                "nonce" => nonce = Some(value),
                "opaque" => opaque = Some(value),
                "algorithm" => algorithm = value.parse()?,
                "stale" => stale = value.eq_ignore_ascii_case("true"),
                "qop" => {
                    qop_offered = true;
                    for option in value.split(',').map(str::trim) {
                        match option.to_ascii_lowercase().as_str() {
                            "auth" => qop.push(Qop::Auth),
                            "auth-int" => qop.push(Qop::AuthInt),
                            _ => {}
                        }
                    }
                }
                // domain, charset, userhash and extensions are not needed to answer
                _ => {}
            }
        }

        if qop_offered && qop.is_empty() {
            return Err(DigestError::UnsupportedQop);
        }

        Ok(DigestChallenge {
            realm: realm.ok_or(DigestError::MissingField("realm"))?,
            nonce: nonce.ok_or(DigestError::MissingField("nonce"))?,
            opaque,
            algorithm,
            qop,
            stale,
        })
    }
}

/// Returns the parameter list if the header uses the Digest scheme.
pub(super) fn strip_digest_scheme(header: &str) -> Option<&str> {
    let header = header.trim_start();
    let (scheme, rest) = header.split_once(char::is_whitespace)?;
    scheme
        .eq_ignore_ascii_case("digest")
        .then_some(rest.trim())
}

/// Splits `key=value, key="quoted, value"` into pairs.
pub(super) fn parse_params(input: &str) -> Result<Vec<(String, String)>, DigestError> {
    let mut params = Vec::new();
    let mut chars = input.chars().peekable();

    loop {
        // Skip separators between parameters
        while chars.next_if(|c| *c == ',' || c.is_whitespace()).is_some() {}
        if chars.peek().is_none() {
            break;
        }

        let mut key = String::new();
        while let Some(c) = chars.next_if(|c| *c != '=' && *c != ',' && !c.is_whitespace()) {
            key.push(c);
        }
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        if chars.next() != Some('=') {
            return Err(DigestError::Malformed(input.to_string()));
        }
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let mut value = String::new();
        if chars.next_if_eq(&'"').is_some() {
            let mut closed = false;
            while let Some(c) = chars.next() {
                match c {
                    '\\' => {
                        if let Some(escaped) = chars.next() {
                            value.push(escaped);
                        }
                    }
                    '"' => {
                        closed = true;
                        break;
                    }
                    _ => value.push(c),
                }
            }
            if !closed {
                return Err(DigestError::Malformed(input.to_string()));
            }
        } else {
            while let Some(c) = chars.next_if(|c| *c != ',' && !c.is_whitespace()) {
                value.push(c);
            }
        }

        if key.is_empty() {
            return Err(DigestError::Malformed(input.to_string()));
        }
        params.push((key, value));
    }

    Ok(params)
}
