use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Link;

/// An Atlas project, called a group by the API.
///
/// To create a project only `name` and `org_id` are needed:
///
/// ```
/// use atlas_api::models::Project;
///
/// let params = Project::new("my-project", "5a0a1e7e0f2912c554080adc");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
}

impl Project {
    /// Parameters for creating a project in an organization.
    pub fn new(name: impl Into<String>, org_id: impl Into<String>) -> Self {
        Project {
            name: Some(name.into()),
            org_id: Some(org_id.into()),
            ..Default::default()
        }
    }
}
