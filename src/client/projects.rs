use crate::{
    client::{ApiError, Client, Response},
    models::{ListOptions, Page, Project},
    transport::HttpTransport,
};

/// Projects (groups) visible to the API key.
#[derive(Debug)]
pub struct ProjectService<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: HttpTransport> ProjectService<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        ProjectService { client }
    }

    /// Lists the first page of projects.
    pub async fn list(&self) -> Result<Response<Page<Project>>, ApiError> {
        self.list_with_options(&ListOptions::default()).await
    }

    /// Lists projects with explicit paging.
    pub async fn list_with_options(
        &self,
        options: &ListOptions,
    ) -> Result<Response<Page<Project>>, ApiError> {
        let mut url = self.client.endpoint(&["groups"])?;
        options.apply(&mut url);
        self.client.get(url).await
    }

    /// Gets a project by ID.
    ///
    /// # Arguments
    ///
    /// * `project_id` - The unique identifier of the project
    pub async fn get(&self, project_id: &str) -> Result<Response<Project>, ApiError> {
        let url = self.client.endpoint(&["groups", project_id])?;
        self.client.get(url).await
    }

    /// Gets a project by its name.
    pub async fn get_by_name(&self, name: &str) -> Result<Response<Project>, ApiError> {
        let url = self.client.endpoint(&["groups", "byName", name])?;
        self.client.get(url).await
    }

    /// Creates a project. `params` needs at least `name` and `org_id`.
    pub async fn create(&self, params: &Project) -> Result<Response<Project>, ApiError> {
        let url = self.client.endpoint(&["groups"])?;
        self.client.post(url, params).await
    }

    /// Deletes a project. Atlas refuses to delete projects that still have clusters.
    pub async fn delete(&self, project_id: &str) -> Result<Response<()>, ApiError> {
        let url = self.client.endpoint(&["groups", project_id])?;
        self.client.delete(url).await
    }
}
