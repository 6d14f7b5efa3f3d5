use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{ClusterState, MongoDBMajorVersion};

/// An Atlas cluster.
///
/// The same type is used for responses and for create/update parameters.
/// Only fields that are `Some` are sent, so an update built from
/// `Cluster { disk_size_gb: Some(5.0), ..Default::default() }` changes the
/// disk size and nothing else, while `backup_enabled: Some(false)` explicitly
/// turns backups off.
///
/// # Examples
///
/// ```
/// use atlas_api::models::{Cluster, ProviderSettings, ReplicationSpec};
/// use std::collections::BTreeMap;
///
/// let params = Cluster {
///     name: Some("test".to_string()),
///     disk_size_gb: Some(10.5),
///     provider_settings: Some(ProviderSettings {
///         provider_name: Some("AWS".to_string()),
///         region_name: Some("US_EAST_1".to_string()),
///         instance_size_name: Some("M10".to_string()),
///         ..Default::default()
///     }),
///     replication_spec: Some(BTreeMap::from([(
///         "US_EAST_1".to_string(),
///         ReplicationSpec::electable(7, 3),
///     )])),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    // Identifiers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    // MongoDB details
    #[serde(rename = "mongoDBVersion", skip_serializing_if = "Option::is_none")]
    pub mongodb_version: Option<String>,
    #[serde(rename = "mongoDBMajorVersion", skip_serializing_if = "Option::is_none")]
    pub mongodb_major_version: Option<MongoDBMajorVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_type: Option<String>,

    // Connection strings
    #[serde(rename = "mongoURI", skip_serializing_if = "Option::is_none")]
    pub mongo_uri: Option<String>,
    #[serde(rename = "mongoURIUpdated", skip_serializing_if = "Option::is_none")]
    pub mongo_uri_updated: Option<String>,
    #[serde(rename = "mongoURIWithOptions", skip_serializing_if = "Option::is_none")]
    pub mongo_uri_with_options: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srv_address: Option<String>,

    // Topology
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_shards: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_factor: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_spec: Option<BTreeMap<String, ReplicationSpec>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_settings: Option<ProviderSettings>,

    // Storage
    #[serde(rename = "diskSizeGB", skip_serializing_if = "Option::is_none")]
    pub disk_size_gb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling: Option<AutoScaling>,

    // Flags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_backup_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,

    // Read only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_name: Option<ClusterState>,
}

impl Cluster {
    /// Parses `mongoDBVersion` (for example `3.4.10`) as a semantic version.
    ///
    /// Returns `None` when the version is absent or not a full semantic version.
    pub fn mongodb_semver(&self) -> Option<semver::Version> {
        self.mongodb_version
            .as_deref()
            .and_then(|version| semver::Version::parse(version).ok())
    }
}

/// Cloud provider settings of a cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSettings {
    /// `AWS`, `GCP`, `AZURE` or `TENANT` for shared tiers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    /// The underlying provider of a `TENANT` cluster
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backing_provider_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_size_name: Option<String>,
    #[serde(rename = "diskIOPS", skip_serializing_if = "Option::is_none")]
    pub disk_iops: Option<u32>,
    #[serde(rename = "encryptEBSVolume", skip_serializing_if = "Option::is_none")]
    pub encrypt_ebs_volume: Option<bool>,
}

/// Node topology of a cluster within one region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationSpec {
    /// Election priority of the region, 7 for the highest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electable_nodes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only_nodes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_nodes: Option<u32>,
}

impl ReplicationSpec {
    /// A region with only electable nodes.
    pub fn electable(priority: u32, electable_nodes: u32) -> Self {
        ReplicationSpec {
            priority: Some(priority),
            electable_nodes: Some(electable_nodes),
            read_only_nodes: Some(0),
            analytics_nodes: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoScaling {
    #[serde(rename = "diskGBEnabled", skip_serializing_if = "Option::is_none")]
    pub disk_gb_enabled: Option<bool>,
}
