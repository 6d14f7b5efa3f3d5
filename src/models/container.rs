use serde::{Deserialize, Serialize};

/// A network container: the Atlas-side VPC (or VNet) clusters of one
/// provider and region are deployed into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    /// CIDR block Atlas uses for the container, for example `10.8.0.0/21`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atlas_cidr_block: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned: Option<bool>,

    // AWS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,

    // GCP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcp_project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_name: Option<String>,

    // Azure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azure_subscription_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vnet_name: Option<String>,
}

impl Container {
    /// Parameters for creating an AWS container.
    pub fn aws(atlas_cidr_block: impl Into<String>, region_name: impl Into<String>) -> Self {
        Container {
            provider_name: Some("AWS".to_string()),
            atlas_cidr_block: Some(atlas_cidr_block.into()),
            region_name: Some(region_name.into()),
            ..Default::default()
        }
    }
}
