use crate::{
    client::{ApiError, Client, Response},
    models::{Container, ListOptions, Page},
    transport::HttpTransport,
};

/// Network containers of a project.
#[derive(Debug)]
pub struct ContainerService<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: HttpTransport> ContainerService<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        ContainerService { client }
    }

    /// Lists the first page of containers. Atlas only returns AWS containers
    /// unless a provider is given, see [`ContainerService::list_by_provider`].
    pub async fn list(&self, group_id: &str) -> Result<Response<Page<Container>>, ApiError> {
        self.list_with_options(group_id, &ListOptions::default())
            .await
    }

    pub async fn list_with_options(
        &self,
        group_id: &str,
        options: &ListOptions,
    ) -> Result<Response<Page<Container>>, ApiError> {
        let mut url = self.client.endpoint(&["groups", group_id, "containers"])?;
        options.apply(&mut url);
        self.client.get(url).await
    }

    /// Lists the containers of one cloud provider (`AWS`, `GCP` or `AZURE`).
    pub async fn list_by_provider(
        &self,
        group_id: &str,
        provider_name: &str,
    ) -> Result<Response<Page<Container>>, ApiError> {
        let mut url = self.client.endpoint(&["groups", group_id, "containers"])?;
        url.query_pairs_mut()
            .append_pair("providerName", provider_name);
        self.client.get(url).await
    }

    /// Gets a single container.
    ///
    /// # Arguments
    ///
    /// * `group_id` - The ID of the project owning the container
    /// * `container_id` - The ID of the container
    pub async fn get(
        &self,
        group_id: &str,
        container_id: &str,
    ) -> Result<Response<Container>, ApiError> {
        let url = self
            .client
            .endpoint(&["groups", group_id, "containers", container_id])?;
        self.client.get(url).await
    }

    pub async fn create(
        &self,
        group_id: &str,
        params: &Container,
    ) -> Result<Response<Container>, ApiError> {
        let url = self.client.endpoint(&["groups", group_id, "containers"])?;
        self.client.post(url, params).await
    }

    /// Modifies a container. Only the fields set in `params` are sent; Atlas
    /// rejects changes to containers that already host clusters.
    pub async fn update(
        &self,
        group_id: &str,
        container_id: &str,
        params: &Container,
    ) -> Result<Response<Container>, ApiError> {
        let url = self
            .client
            .endpoint(&["groups", group_id, "containers", container_id])?;
        self.client.patch(url, params).await
    }

    pub async fn delete(
        &self,
        group_id: &str,
        container_id: &str,
    ) -> Result<Response<()>, ApiError> {
        let url = self
            .client
            .endpoint(&["groups", group_id, "containers", container_id])?;
        self.client.delete(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockTransport, json_response, request_json, test_client};
    use pretty_assertions::assert_eq;
    use reqwest::{Method, StatusCode};
    use serde_json::json;

    const GROUP_ID: &str = "1";
    const CONTAINER_JSON: &str = r#"{"atlasCidrBlock":"10.8.0.0/21","id":"1112269b3bf99403840e8934","providerName":"AWS","provisioned":true,"regionName":"US_EAST_1","vpcId":"vpc-zz0zzzzz"}"#;

    #[tokio::test]
    async fn test_list_containers() {
        // Arrange
        let mut mock_transport = MockTransport::new();

        mock_transport
            .expect_execute()
            .withf(|request| {
                request.method == Method::GET
                    && request.url.path() == "/api/atlas/v1.0/groups/1/containers"
            })
            .times(1)
            .returning(|_| {
                Ok(json_response(
                    StatusCode::OK,
                    &format!(r#"{{"results":[{CONTAINER_JSON}],"totalCount":1}}"#),
                ))
            });

        let client = test_client(mock_transport);

        // Act
        let result = client.containers().list(GROUP_ID).await;

        // Assert
        let page = result.unwrap().into_value();
        assert_eq!(page.len(), 1);
        assert_eq!(page.results[0].vpc_id.as_deref(), Some("vpc-zz0zzzzz"));
    }

    #[tokio::test]
    async fn test_list_containers_by_provider() {
        // Arrange
        let mut mock_transport = MockTransport::new();

        mock_transport
            .expect_execute()
            .withf(|request| {
                request.url.path() == "/api/atlas/v1.0/groups/1/containers"
                    && request.url.query() == Some("providerName=GCP")
            })
            .times(1)
            .returning(|_| Ok(json_response(StatusCode::OK, r#"{"results":[]}"#)));

        let client = test_client(mock_transport);

        // Act
        let result = client.containers().list_by_provider(GROUP_ID, "GCP").await;

        // Assert
        assert!(result.unwrap().value.is_empty());
    }

    #[tokio::test]
    async fn test_get_container() {
        // Arrange
        let mut mock_transport = MockTransport::new();

        mock_transport
            .expect_execute()
            .withf(|request| {
                request.method == Method::GET
                    && request.url.path()
                        == "/api/atlas/v1.0/groups/1/containers/1112269b3bf99403840e8934"
            })
            .times(1)
            .returning(|_| Ok(json_response(StatusCode::OK, CONTAINER_JSON)));

        let client = test_client(mock_transport);

        // Act
        let result = client
            .containers()
            .get(GROUP_ID, "1112269b3bf99403840e8934")
            .await;

        // Assert
        let container = result.unwrap().into_value();
        assert_eq!(container.provisioned, Some(true));
        assert_eq!(container.region_name.as_deref(), Some("US_EAST_1"));
    }

    #[tokio::test]
    async fn test_create_container() {
        // Arrange
        let mut mock_transport = MockTransport::new();

        mock_transport
            .expect_execute()
            .withf(|request| {
                request.method == Method::POST
                    && request.url.path() == "/api/atlas/v1.0/groups/1/containers"
                    && request_json(request)
                        == json!({
                            "providerName": "AWS",
                            "atlasCidrBlock": "10.8.0.0/21",
                            "regionName": "US_EAST_1"
                        })
            })
            .times(1)
            .returning(|_| Ok(json_response(StatusCode::CREATED, CONTAINER_JSON)));

        let client = test_client(mock_transport);

        // Act
        let result = client
            .containers()
            .create(GROUP_ID, &Container::aws("10.8.0.0/21", "US_EAST_1"))
            .await;

        // Assert
        assert_eq!(
            result.unwrap().value.id.as_deref(),
            Some("1112269b3bf99403840e8934")
        );
    }

    #[tokio::test]
    async fn test_update_container() {
        // Arrange
        let mut mock_transport = MockTransport::new();

        mock_transport
            .expect_execute()
            .withf(|request| {
                request.method == Method::PATCH
                    && request.url.path()
                        == "/api/atlas/v1.0/groups/1/containers/1112269b3bf99403840e8934"
                    && request_json(request)
                        == json!({"providerName": "AWS", "atlasCidrBlock": "10.8.0.0/20"})
            })
            .times(1)
            .returning(|_| Ok(json_response(StatusCode::OK, CONTAINER_JSON)));

        let client = test_client(mock_transport);

        let params = Container {
            provider_name: Some("AWS".to_string()),
            atlas_cidr_block: Some("10.8.0.0/20".to_string()),
            ..Default::default()
        };

        // Act
        let result = client
            .containers()
            .update(GROUP_ID, "1112269b3bf99403840e8934", &params)
            .await;

        // Assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_container() {
        // Arrange
        let mut mock_transport = MockTransport::new();

        mock_transport
            .expect_execute()
            .withf(|request| {
                request.method == Method::DELETE
                    && request.url.path()
                        == "/api/atlas/v1.0/groups/1/containers/1112269b3bf99403840e8934"
            })
            .times(1)
            .returning(|_| Ok(json_response(StatusCode::NO_CONTENT, "")));

        let client = test_client(mock_transport);

        // Act
        let result = client
            .containers()
            .delete(GROUP_ID, "1112269b3bf99403840e8934")
            .await;

        // Assert
        assert_eq!(result.unwrap().status, StatusCode::NO_CONTENT);
    }
}
