use crate::Gns3Connector;
use crate::core::application::link::Link;
use crate::core::domain::{
    error::{Gns3Result, ValidationError},
    model::{
        apply_response,
        link::LinkInfo,
        lookup::Lookup,
        node::{NodeInfo, NodeStatus},
        object_without,
    },
};
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tracing::info;

/// Attributes never sent back when completing a node after its creation.
const CREATION_ONLY: [&str; 4] = ["project_id", "template", "template_id", "node_id"];

/// A node of a project.
///
/// Mirrors `/projects/{project_id}/nodes/{node_id}`. Operations need the
/// `project_id`; when the `node_id` is unknown but a `name` is set, the id is
/// resolved from the project's node list on first use.
///
/// # Examples
///
/// ```no_run
/// use gns3_sdk::{Gns3Connector, Gns3Result, Node, NodeInfo};
/// use std::sync::Arc;
///
/// # async fn run() -> Gns3Result<()> {
/// let server = Arc::new(Gns3Connector::builder().url("http://gns3server:3080").build()?);
/// let mut router = Node::new(
///     server,
///     NodeInfo {
///         project_id: Some("4b21dfb3-675a-4efa-8613-2f7fb32e76fe".to_string()),
///         name: Some("router01".to_string()),
///         ..Default::default()
///     },
/// );
/// router.start().await?;
/// println!("{:?}", router.info().status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Node {
    connector: Arc<Gns3Connector>,
    info: NodeInfo,
    links: Vec<Link>,
}

impl Node {
    pub fn new(connector: Arc<Gns3Connector>, info: NodeInfo) -> Self {
        Self {
            connector,
            info,
            links: Vec::new(),
        }
    }

    pub fn info(&self) -> &NodeInfo {
        &self.info
    }

    /// Mutable access to the attributes, e.g. to fill them before [`Node::create`].
    pub fn info_mut(&mut self) -> &mut NodeInfo {
        &mut self.info
    }

    /// Links of the node, as of the last [`Node::get_links`].
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn name(&self) -> Option<&str> {
        self.info.name.as_deref()
    }

    pub fn node_id(&self) -> Option<&str> {
        self.info.node_id.as_deref()
    }

    pub fn project_id(&self) -> Option<&str> {
        self.info.project_id.as_deref()
    }

    pub fn connector(&self) -> &Arc<Gns3Connector> {
        &self.connector
    }

    fn require_project_id(&self) -> Gns3Result<String> {
        Ok(self
            .project_id()
            .ok_or_else(|| ValidationError::missing("project_id", "Need to submit project_id"))?
            .to_string())
    }

    /// Returns `projects/{project_id}/nodes/{node_id}`, resolving the node id
    /// from the name when needed.
    async fn node_path(&mut self) -> Gns3Result<String> {
        let project_id = self.require_project_id()?;

        if self.info.node_id.is_none() {
            let name = self
                .name()
                .ok_or_else(|| {
                    ValidationError::missing("node_id", "Need to either submit node_id or name")
                })?
                .to_string();
            let nodes = self.connector.get_nodes(&project_id).await?;

            let mut matching = nodes
                .into_iter()
                .filter(|node| Lookup::Name(&name).matches(node.name.as_deref(), None));
            let found = matching
                .next()
                .ok_or_else(|| ValidationError::NotFound(format!("Node {}", name)))?;
            if matching.next().is_some() {
                return Err(ValidationError::ConstraintViolation(
                    "Multiple nodes found with same name. Need to submit node_id".to_string(),
                )
                .into());
            }
            self.info.node_id = found.node_id;
        }

        let node_id = self
            .node_id()
            .ok_or_else(|| ValidationError::missing("node_id", "Server returned a node without id"))?;
        Ok(format!("projects/{}/nodes/{}", project_id, node_id))
    }

    /// Refreshes the attributes from the server, and the links when `with_links`.
    pub async fn get(&mut self, with_links: bool) -> Gns3Result<()> {
        let path = self.node_path().await?;
        let response: Value = self.connector.api().get(&path).await?;
        apply_response(&mut self.info, response)?;

        if with_links {
            self.get_links().await?;
        }
        Ok(())
    }

    /// Replaces the local links with the node's links on the server.
    pub async fn get_links(&mut self) -> Gns3Result<()> {
        let path = self.node_path().await?;
        let links: Vec<LinkInfo> = self.connector.api().get(&format!("{}/links", path)).await?;

        self.links = links
            .into_iter()
            .map(|mut link| {
                if link.project_id.is_none() {
                    link.project_id = self.info.project_id.clone();
                }
                Link::new(Arc::clone(&self.connector), link)
            })
            .collect();
        Ok(())
    }

    /// POSTs a status action and applies its answer when the server already
    /// reports the expected status, otherwise fetches the node again.
    async fn status_action(&mut self, action: &str, expected: NodeStatus) -> Gns3Result<()> {
        let path = self.node_path().await?;
        let response: Value = self
            .connector
            .api()
            .post_empty(&format!("{}/{}", path, action))
            .await?;

        if response.get("status").and_then(Value::as_str) == Some(expected.as_str()) {
            apply_response(&mut self.info, response)
        } else {
            self.get(true).await
        }
    }

    pub async fn start(&mut self) -> Gns3Result<()> {
        self.status_action("start", NodeStatus::Started).await
    }

    pub async fn stop(&mut self) -> Gns3Result<()> {
        self.status_action("stop", NodeStatus::Stopped).await
    }

    pub async fn reload(&mut self) -> Gns3Result<()> {
        self.status_action("reload", NodeStatus::Started).await
    }

    pub async fn suspend(&mut self) -> Gns3Result<()> {
        self.status_action("suspend", NodeStatus::Suspended).await
    }

    /// Sends the given attribute changes, e.g. `{"name": "router01-CSX"}`.
    pub async fn update(&mut self, changes: Map<String, Value>) -> Gns3Result<()> {
        let path = self.node_path().await?;
        let response: Value = self.connector.api().put(&path, &changes).await?;
        apply_response(&mut self.info, response)
    }

    /// Creates the node from its template.
    ///
    /// The template is given either by `template_id` or by `template` (its
    /// name). The node is first instantiated at `(0, 0)` on `compute_id`,
    /// then every other attribute set locally is sent as an update.
    pub async fn create(&mut self) -> Gns3Result<()> {
        if self.info.node_id.is_some() {
            return Err(ValidationError::ConstraintViolation("Node already created".to_string()).into());
        }
        let project_id = self.require_project_id()?;

        if self.info.template_id.is_none() {
            let template_name = self.info.template.as_deref().ok_or_else(|| {
                ValidationError::missing("template", "Need either 'template' or 'template_id'")
            })?;
            let template = self
                .connector
                .get_template(Lookup::Name(template_name))
                .await?
                .ok_or_else(|| {
                    ValidationError::NotFound(format!("Template {} not found", template_name))
                })?;
            self.info.template_id = Some(template.template_id);
        }
        let template_id = self
            .info
            .template_id
            .clone()
            .ok_or_else(|| ValidationError::missing("template_id", "Need either 'template' or 'template_id'"))?;

        let cached = object_without(&self.info, &CREATION_ONLY)?;

        let response: Value = self
            .connector
            .api()
            .post(
                &format!("projects/{}/templates/{}", project_id, template_id),
                &json!({"x": 0, "y": 0, "compute_id": self.info.compute_id}),
            )
            .await?;
        apply_response(&mut self.info, response)?;

        self.update(cached).await?;
        info!(
            name = self.name().unwrap_or_default(),
            node_type = ?self.info.node_type,
            console = ?self.info.console,
            "created node"
        );
        Ok(())
    }

    /// Deletes the node and clears its `project_id`, `node_id` and `name`.
    pub async fn delete(&mut self) -> Gns3Result<()> {
        let path = self.node_path().await?;
        self.connector.api().delete(&path).await?;

        self.info.project_id = None;
        self.info.node_id = None;
        self.info.name = None;
        Ok(())
    }

    /// Reads a text file of the node directory, `path` being relative to it.
    /// Invalid UTF-8 is replaced rather than rejected.
    pub async fn get_file(&mut self, path: &str) -> Gns3Result<String> {
        let node_path = self.node_path().await?;
        self.connector
            .api()
            .get_text(&format!("{}/files/{}", node_path, path.trim_start_matches('/')))
            .await
    }

    /// Reads a file of the node directory as raw bytes.
    pub async fn get_file_bytes(&mut self, path: &str) -> Gns3Result<Vec<u8>> {
        let node_path = self.node_path().await?;
        self.connector
            .api()
            .get_bytes(&format!("{}/files/{}", node_path, path.trim_start_matches('/')))
            .await
    }

    /// Writes `data` to a file of the node directory (docker nodes mostly,
    /// e.g. `etc/network/interfaces`).
    pub async fn write_file(&mut self, path: &str, data: impl Into<Vec<u8>>) -> Gns3Result<()> {
        let node_path = self.node_path().await?;
        self.connector
            .api()
            .post_raw(
                &format!("{}/files/{}", node_path, path.trim_start_matches('/')),
                data.into(),
            )
            .await?;
        Ok(())
    }
}
