use crate::{
    client::{ApiError, Client, Response},
    models::{Cluster, ListOptions, Page},
    transport::HttpTransport,
};

/// Clusters of a project. Clusters are addressed by name, not by ID.
#[derive(Debug)]
pub struct ClusterService<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: HttpTransport> ClusterService<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        ClusterService { client }
    }

    /// Lists the first page of clusters in a project.
    ///
    /// # Arguments
    ///
    /// * `group_id` - The ID of the project owning the clusters
    pub async fn list(&self, group_id: &str) -> Result<Response<Page<Cluster>>, ApiError> {
        self.list_with_options(group_id, &ListOptions::default())
            .await
    }

    /// Lists clusters in a project with explicit paging.
    pub async fn list_with_options(
        &self,
        group_id: &str,
        options: &ListOptions,
    ) -> Result<Response<Page<Cluster>>, ApiError> {
        let mut url = self.client.endpoint(&["groups", group_id, "clusters"])?;
        options.apply(&mut url);
        self.client.get(url).await
    }

    /// Gets a single cluster.
    ///
    /// # Arguments
    ///
    /// * `group_id` - The ID of the project owning the cluster
    /// * `cluster_name` - The name of the cluster
    pub async fn get(
        &self,
        group_id: &str,
        cluster_name: &str,
    ) -> Result<Response<Cluster>, ApiError> {
        let url = self
            .client
            .endpoint(&["groups", group_id, "clusters", cluster_name])?;
        self.client.get(url).await
    }

    /// Starts provisioning a cluster. The returned cluster is usually in the
    /// `CREATING` state.
    pub async fn create(
        &self,
        group_id: &str,
        params: &Cluster,
    ) -> Result<Response<Cluster>, ApiError> {
        let url = self.client.endpoint(&["groups", group_id, "clusters"])?;
        self.client.post(url, params).await
    }

    /// Modifies a cluster. Only the fields set in `params` are sent.
    pub async fn update(
        &self,
        group_id: &str,
        cluster_name: &str,
        params: &Cluster,
    ) -> Result<Response<Cluster>, ApiError> {
        let url = self
            .client
            .endpoint(&["groups", group_id, "clusters", cluster_name])?;
        self.client.patch(url, params).await
    }

    /// Terminates a cluster.
    pub async fn delete(
        &self,
        group_id: &str,
        cluster_name: &str,
    ) -> Result<Response<()>, ApiError> {
        let url = self
            .client
            .endpoint(&["groups", group_id, "clusters", cluster_name])?;
        self.client.delete(url).await
    }
}
