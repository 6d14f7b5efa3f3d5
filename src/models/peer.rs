use serde::{Deserialize, Serialize};

/// A network peering connection between an Atlas container and a customer network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Peer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    /// The Atlas container the peer is attached to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_id: Option<String>,

    // AWS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepter_region_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_table_cidr_block: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_state_name: Option<String>,

    // GCP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcp_project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    // Azure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atlas_cidr_block: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azure_directory_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azure_subscription_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vnet_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_state: Option<String>,

    // GCP and Azure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_decode_aws_peer() {
        let peer: Peer = serde_json::from_value(json!({
            "accepterRegionName": "us-east-1",
            "awsAccountId": "999900000000",
            "connectionId": "pcx-1234567",
            "containerId": "507f1f77bcf86cd799439011",
            "errorStateName": null,
            "id": "1112269b3bf99403840e8934",
            "providerName": "AWS",
            "routeTableCidrBlock": "10.15.0.0/16",
            "statusName": "PENDING_ACCEPTANCE",
            "vpcId": "vpc-abc123abc123"
        }))
        .unwrap();

        assert_eq!(
            peer,
            Peer {
                id: Some("1112269b3bf99403840e8934".to_string()),
                provider_name: Some("AWS".to_string()),
                container_id: Some("507f1f77bcf86cd799439011".to_string()),
                accepter_region_name: Some("us-east-1".to_string()),
                aws_account_id: Some("999900000000".to_string()),
                vpc_id: Some("vpc-abc123abc123".to_string()),
                route_table_cidr_block: Some("10.15.0.0/16".to_string()),
                connection_id: Some("pcx-1234567".to_string()),
                status_name: Some("PENDING_ACCEPTANCE".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_encode_update_params() {
        let params = Peer {
            provider_name: Some("AWS".to_string()),
            route_table_cidr_block: Some("10.16.0.0/16".to_string()),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"providerName": "AWS", "routeTableCidrBlock": "10.16.0.0/16"})
        );
    }
}
