use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// The lifecycle state of a cluster, as reported in `stateName`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClusterState {
    Idle,
    Creating,
    Updating,
    Deleting,
    Deleted,
    Repairing,
    /// A state this client does not know about yet.
    #[serde(other)]
    Unknown,
}

impl ClusterState {
    /// Whether the cluster is in a transitional state and a change is still being applied.
    pub fn is_transitional(&self) -> bool {
        matches!(
            self,
            ClusterState::Creating
                | ClusterState::Updating
                | ClusterState::Deleting
                | ClusterState::Repairing
        )
    }
}

impl Display for ClusterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClusterState::Idle => write!(f, "IDLE"),
            ClusterState::Creating => write!(f, "CREATING"),
            ClusterState::Updating => write!(f, "UPDATING"),
            ClusterState::Deleting => write!(f, "DELETING"),
            ClusterState::Deleted => write!(f, "DELETED"),
            ClusterState::Repairing => write!(f, "REPAIRING"),
            ClusterState::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FromStrClusterStateError {
    #[error("Invalid cluster state: {0}")]
    InvalidState(String),
}

impl FromStr for ClusterState {
    type Err = FromStrClusterStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IDLE" => Ok(ClusterState::Idle),
            "CREATING" => Ok(ClusterState::Creating),
            "UPDATING" => Ok(ClusterState::Updating),
            "DELETING" => Ok(ClusterState::Deleting),
            "DELETED" => Ok(ClusterState::Deleted),
            "REPAIRING" => Ok(ClusterState::Repairing),
            _ => Err(FromStrClusterStateError::InvalidState(s.to_string())),
        }
    }
}
