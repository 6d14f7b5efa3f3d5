use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A `<major>.<minor>` MongoDB release line, as used by `mongoDBMajorVersion`.
///
/// Carried on the wire as a string such as `"4.0"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MongoDBMajorVersion {
    pub major: u8,
    pub minor: u8,
}

impl MongoDBMajorVersion {
    pub const fn new(major: u8, minor: u8) -> Self {
        MongoDBMajorVersion { major, minor }
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("Invalid MongoDB major version {0:?}. Expected format: <major>.<minor>, for example 4.0")]
pub struct ParseMongoDBMajorVersionError(String);

impl TryFrom<&str> for MongoDBMajorVersion {
    type Error = ParseMongoDBMajorVersionError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let invalid = || ParseMongoDBMajorVersionError(s.to_string());

        let (major, minor) = s.split_once('.').ok_or_else(invalid)?;
        let major = major.parse::<u8>().map_err(|_| invalid())?;
        let minor = minor.parse::<u8>().map_err(|_| invalid())?;

        Ok(MongoDBMajorVersion { major, minor })
    }
}

impl TryFrom<String> for MongoDBMajorVersion {
    type Error = ParseMongoDBMajorVersionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.as_str().try_into()
    }
}

impl From<MongoDBMajorVersion> for String {
    fn from(version: MongoDBMajorVersion) -> Self {
        version.to_string()
    }
}

impl Display for MongoDBMajorVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
