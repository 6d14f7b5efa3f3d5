use crate::{
    client::{ApiError, Client, Response},
    models::{ListOptions, Page, Peer},
    transport::HttpTransport,
};

/// Network peering connections of a project.
#[derive(Debug)]
pub struct PeerService<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: HttpTransport> PeerService<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        PeerService { client }
    }

    pub async fn list(&self, group_id: &str) -> Result<Response<Page<Peer>>, ApiError> {
        self.list_with_options(group_id, &ListOptions::default())
            .await
    }

    pub async fn list_with_options(
        &self,
        group_id: &str,
        options: &ListOptions,
    ) -> Result<Response<Page<Peer>>, ApiError> {
        let mut url = self.client.endpoint(&["groups", group_id, "peers"])?;
        options.apply(&mut url);
        self.client.get(url).await
    }

    /// Gets a single peering connection.
    pub async fn get(&self, group_id: &str, peer_id: &str) -> Result<Response<Peer>, ApiError> {
        let url = self
            .client
            .endpoint(&["groups", group_id, "peers", peer_id])?;
        self.client.get(url).await
    }

    /// Requests a peering connection. The connection stays pending until it
    /// is accepted on the customer side.
    pub async fn create(&self, group_id: &str, params: &Peer) -> Result<Response<Peer>, ApiError> {
        let url = self.client.endpoint(&["groups", group_id, "peers"])?;
        self.client.post(url, params).await
    }

    /// Modifies a peering connection. `provider_name` must always be set.
    pub async fn update(
        &self,
        group_id: &str,
        peer_id: &str,
        params: &Peer,
    ) -> Result<Response<Peer>, ApiError> {
        let url = self
            .client
            .endpoint(&["groups", group_id, "peers", peer_id])?;
        self.client.patch(url, params).await
    }

    pub async fn delete(&self, group_id: &str, peer_id: &str) -> Result<Response<()>, ApiError> {
        let url = self
            .client
            .endpoint(&["groups", group_id, "peers", peer_id])?;
        self.client.delete(url).await
    }
}
