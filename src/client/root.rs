use crate::{
    client::{ApiError, Client, Response},
    models::Root,
    transport::HttpTransport,
};

/// The API root resource.
#[derive(Debug)]
pub struct RootService<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: HttpTransport> RootService<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        RootService { client }
    }

    /// Fetches the API root, a cheap way to verify connectivity and credentials.
    pub async fn get(&self) -> Result<Response<Root>, ApiError> {
        let url = self.client.endpoint(&[])?;
        self.client.get(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockTransport, json_response, test_client};
    use reqwest::{Method, StatusCode};

    #[tokio::test]
    async fn test_get_root() {
        // Arrange
        let mut mock_transport = MockTransport::new();

        mock_transport
            .expect_execute()
            .withf(|request| {
                request.method == Method::GET
                    && request.url.as_str() == "https://cloud.mongodb.com/api/atlas/v1.0"
            })
            .times(1)
            .returning(|_| {
                Ok(json_response(
                    StatusCode::OK,
                    r#"{"appName":"MongoDB Atlas","build":"83be55e140f493c88e7f578aae96548dd881587b","links":[{"href":"https://cloud.mongodb.com/api/atlas/v1.0","rel":"self"}],"throttling":false}"#,
                ))
            });

        let client = test_client(mock_transport);

        // Act
        let result = client.root().get().await;

        // Assert
        let root = result.unwrap().into_value();
        assert_eq!(root.app_name.as_deref(), Some("MongoDB Atlas"));
        assert_eq!(root.throttling, Some(false));
        assert_eq!(root.links.len(), 1);
    }
}
