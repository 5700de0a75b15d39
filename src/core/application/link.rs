use crate::Gns3Connector;
use crate::core::domain::{
    error::{Gns3Result, ValidationError},
    model::{
        apply_response,
        link::{AvailableFilter, LinkFilters, LinkInfo},
        object_without,
    },
};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::info;

/// A link of a project.
///
/// Mirrors `/projects/{project_id}/links/{link_id}`. The local attributes are
/// overwritten by every answer of the server.
#[derive(Debug, Clone)]
pub struct Link {
    connector: Arc<Gns3Connector>,
    info: LinkInfo,
}

impl Link {
    pub fn new(connector: Arc<Gns3Connector>, info: LinkInfo) -> Self {
        Self { connector, info }
    }

    pub fn info(&self) -> &LinkInfo {
        &self.info
    }

    /// Mutable access to the attributes, e.g. to fill them before [`Link::create`].
    pub fn info_mut(&mut self) -> &mut LinkInfo {
        &mut self.info
    }

    pub fn link_id(&self) -> Option<&str> {
        self.info.link_id.as_deref()
    }

    pub fn project_id(&self) -> Option<&str> {
        self.info.project_id.as_deref()
    }

    pub fn connector(&self) -> &Arc<Gns3Connector> {
        &self.connector
    }

    fn require_project_id(&self) -> Gns3Result<&str> {
        Ok(self
            .project_id()
            .ok_or_else(|| ValidationError::missing("project_id", "Need to submit project_id"))?)
    }

    fn link_path(&self) -> Gns3Result<String> {
        let project_id = self.require_project_id()?;
        let link_id = self
            .link_id()
            .ok_or_else(|| ValidationError::missing("link_id", "Need to submit link_id"))?;
        Ok(format!("projects/{}/links/{}", project_id, link_id))
    }

    /// Refreshes the attributes from the server.
    pub async fn get(&mut self) -> Gns3Result<()> {
        let path = self.link_path()?;
        let response: Value = self.connector.api().get(&path).await?;
        apply_response(&mut self.info, response)
    }

    /// Creates the link from every attribute set locally (`nodes` at least).
    pub async fn create(&mut self) -> Gns3Result<()> {
        let path = format!("projects/{}/links", self.require_project_id()?);
        let body = object_without(&self.info, &[])?;

        let response: Value = self.connector.api().post(&path, &body).await?;
        apply_response(&mut self.info, response)?;
        info!(
            link_id = self.link_id().unwrap_or_default(),
            link_type = ?self.info.link_type,
            "created link"
        );
        Ok(())
    }

    /// Sends the given attribute changes, e.g. `{"suspend": true}`.
    pub async fn update(&mut self, changes: Map<String, Value>) -> Gns3Result<()> {
        let path = self.link_path()?;
        let response: Value = self.connector.api().put(&path, &changes).await?;
        apply_response(&mut self.info, response)
    }

    /// Packet filters supported on this link by its compute.
    pub async fn available_filters(&self) -> Gns3Result<Vec<AvailableFilter>> {
        let path = self.link_path()?;
        self.connector
            .api()
            .get(&format!("{}/available_filters", path))
            .await
    }

    /// Replaces the filters of the link, e.g. 50 ms of delay with 10 ms of
    /// jitter. Filters left unset in `filters` are removed.
    pub async fn apply_filters(&mut self, filters: &LinkFilters) -> Gns3Result<()> {
        let mut changes = Map::new();
        changes.insert("filters".to_string(), Value::Object(filters.to_map()));
        self.update(changes).await
    }

    /// Deletes the link and clears its `project_id` and `link_id`.
    pub async fn delete(&mut self) -> Gns3Result<()> {
        let path = self.link_path()?;
        self.connector.api().delete(&path).await?;

        self.info.project_id = None;
        self.info.link_id = None;
        Ok(())
    }
}
