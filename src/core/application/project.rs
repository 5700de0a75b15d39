use crate::Gns3Connector;
use crate::core::application::{link::Link, node::Node};
use crate::core::domain::{
    error::{Gns3Result, ValidationError},
    model::{
        apply_response,
        drawing::{Drawing, DrawingParams, DrawingUpdate},
        link::{LinkEndpoint, LinkInfo},
        lookup::Lookup,
        node::NodeInfo,
        object_without,
        project::{ProjectInfo, ProjectStats, ProjectStatus},
        snapshot::Snapshot,
        summary::{LinkSummary, NodeInventoryEntry, NodeSummary},
    },
};
use reqwest::StatusCode;
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;
use std::f64::consts::PI;
use std::sync::Arc;
use tracing::{info, warn};

/// What [`Project::get`] fetches besides the project itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    pub links: bool,
    pub nodes: bool,
    /// Also fetches snapshots and drawings when the stats report any.
    pub stats: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            links: true,
            nodes: true,
            stats: true,
        }
    }
}

impl FetchOptions {
    /// Only the project attributes.
    pub fn project_only() -> Self {
        Self {
            links: false,
            nodes: false,
            stats: false,
        }
    }
}

/// A project of the server, with its nodes, links, snapshots and drawings.
///
/// Collections are refreshed only by an explicit fetch (`get`,
/// `get_nodes`, ...). Lookups such as [`Project::get_node`] scan the local
/// collection and fetch it first when it is empty.
///
/// # Examples
///
/// ```no_run
/// use gns3_sdk::{FetchOptions, Gns3Connector, Gns3Result, Project, ProjectInfo};
/// use std::sync::Arc;
///
/// # async fn run() -> Gns3Result<()> {
/// let server = Arc::new(Gns3Connector::builder().url("http://gns3server:3080").build()?);
/// let mut lab = Project::new(server, ProjectInfo::named("lab"));
/// lab.get(FetchOptions::default()).await?;
///
/// lab.create_link("router01", "Ethernet0", "router02", "Ethernet0").await?;
/// for row in lab.links_summary().await? {
///     println!("{}", row);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Project {
    connector: Arc<Gns3Connector>,
    info: ProjectInfo,
    stats: Option<ProjectStats>,
    nodes: Vec<Node>,
    links: Vec<Link>,
    snapshots: Vec<Snapshot>,
    drawings: Vec<Drawing>,
}

impl Project {
    pub fn new(connector: Arc<Gns3Connector>, info: ProjectInfo) -> Self {
        Self {
            connector,
            info,
            stats: None,
            nodes: Vec::new(),
            links: Vec::new(),
            snapshots: Vec::new(),
            drawings: Vec::new(),
        }
    }

    pub fn info(&self) -> &ProjectInfo {
        &self.info
    }

    /// Mutable access to the attributes, e.g. to fill them before [`Project::create`].
    pub fn info_mut(&mut self) -> &mut ProjectInfo {
        &mut self.info
    }

    pub fn name(&self) -> Option<&str> {
        self.info.name.as_deref()
    }

    pub fn project_id(&self) -> Option<&str> {
        self.info.project_id.as_deref()
    }

    pub fn status(&self) -> Option<ProjectStatus> {
        self.info.status
    }

    pub fn stats(&self) -> Option<&ProjectStats> {
        self.stats.as_ref()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn drawings(&self) -> &[Drawing] {
        &self.drawings
    }

    pub fn connector(&self) -> &Arc<Gns3Connector> {
        &self.connector
    }

    fn project_path(&self) -> Gns3Result<String> {
        let project_id = self
            .project_id()
            .ok_or_else(|| ValidationError::missing("project_id", "Need to submit project_id"))?;
        Ok(format!("projects/{}", project_id))
    }

    /// Fetches the project, resolving its id from the name when only the
    /// name is known, then whatever `options` asks for.
    pub async fn get(&mut self, options: FetchOptions) -> Gns3Result<()> {
        if self.info.project_id.is_none() {
            let name = self.name().ok_or_else(|| {
                ValidationError::missing("project_id", "Need to submit either project_id or name")
            })?;
            let found = self
                .connector
                .get_project(Lookup::Name(name))
                .await?
                .ok_or_else(|| ValidationError::NotFound(format!("Project {}", name)))?;
            self.info.project_id = found.project_id;
        }

        let path = self.project_path()?;
        let response: Value = self.connector.api().get(&path).await?;
        apply_response(&mut self.info, response)?;

        if options.stats {
            let stats = self.get_stats().await?;
            if stats.snapshots > 0 {
                self.get_snapshots().await?;
            }
            if stats.drawings > 0 {
                self.get_drawings().await?;
            }
        }
        if options.nodes {
            self.get_nodes().await?;
        }
        if options.links {
            self.get_links().await?;
        }
        Ok(())
    }

    /// Creates the project from every attribute set locally; `name` is required.
    pub async fn create(&mut self) -> Gns3Result<()> {
        if self.info.name.is_none() {
            return Err(ValidationError::missing("name", "Need to submit project name").into());
        }
        let body = object_without(&self.info, &[])?;
        let response: Value = self.connector.api().post("projects", &body).await?;
        apply_response(&mut self.info, response)?;
        info!(
            name = self.name().unwrap_or_default(),
            project_id = self.project_id().unwrap_or_default(),
            "created project"
        );
        Ok(())
    }

    /// Sends the given attribute changes, e.g. `{"auto_close": true}`.
    pub async fn update(&mut self, changes: Map<String, Value>) -> Gns3Result<()> {
        let path = self.project_path()?;
        let response: Value = self.connector.api().put(&path, &changes).await?;
        apply_response(&mut self.info, response)
    }

    /// Deletes the project and clears its `project_id` and `name`.
    pub async fn delete(&mut self) -> Gns3Result<()> {
        let path = self.project_path()?;
        self.connector.api().delete(&path).await?;

        self.info.project_id = None;
        self.info.name = None;
        Ok(())
    }

    pub async fn open(&mut self) -> Gns3Result<()> {
        let path = self.project_path()?;
        let response: Value = self
            .connector
            .api()
            .post_empty(&format!("{}/open", path))
            .await?;
        apply_response(&mut self.info, response)
    }

    /// Closes the project; the local status becomes `closed` when the server
    /// answers `204 No Content`.
    pub async fn close(&mut self) -> Gns3Result<()> {
        let path = self.project_path()?;
        let status = self
            .connector
            .api()
            .post_for_status(&format!("{}/close", path))
            .await?;
        if status == StatusCode::NO_CONTENT {
            self.info.status = Some(ProjectStatus::Closed);
        }
        Ok(())
    }

    pub async fn get_stats(&mut self) -> Gns3Result<ProjectStats> {
        let path = self.project_path()?;
        let stats: ProjectStats = self
            .connector
            .api()
            .get(&format!("{}/stats", path))
            .await?;
        self.stats = Some(stats);
        Ok(stats)
    }

    /// Reads a text file of the project directory; invalid UTF-8 is replaced.
    pub async fn get_file(&self, path: &str) -> Gns3Result<String> {
        let project_path = self.project_path()?;
        self.connector
            .api()
            .get_text(&format!("{}/files/{}", project_path, path.trim_start_matches('/')))
            .await
    }

    /// Reads a file of the project directory as raw bytes.
    pub async fn get_file_bytes(&self, path: &str) -> Gns3Result<Vec<u8>> {
        let project_path = self.project_path()?;
        self.connector
            .api()
            .get_bytes(&format!("{}/files/{}", project_path, path.trim_start_matches('/')))
            .await
    }

    /// Writes `data` to a file of the project directory.
    pub async fn write_file(&self, path: &str, data: impl Into<Vec<u8>>) -> Gns3Result<()> {
        let project_path = self.project_path()?;
        self.connector
            .api()
            .post_raw(
                &format!("{}/files/{}", project_path, path.trim_start_matches('/')),
                data.into(),
            )
            .await?;
        Ok(())
    }

    /// Replaces the local nodes with the project's nodes on the server.
    pub async fn get_nodes(&mut self) -> Gns3Result<()> {
        let path = self.project_path()?;
        let nodes: Vec<NodeInfo> = self
            .connector
            .api()
            .get(&format!("{}/nodes", path))
            .await?;

        self.nodes = nodes
            .into_iter()
            .map(|mut node| {
                node.project_id = self.info.project_id.clone();
                Node::new(Arc::clone(&self.connector), node)
            })
            .collect();
        Ok(())
    }

    /// Replaces the local links with the project's links on the server.
    pub async fn get_links(&mut self) -> Gns3Result<()> {
        let path = self.project_path()?;
        let links: Vec<LinkInfo> = self
            .connector
            .api()
            .get(&format!("{}/links", path))
            .await?;

        self.links = links
            .into_iter()
            .map(|mut link| {
                link.project_id = self.info.project_id.clone();
                Link::new(Arc::clone(&self.connector), link)
            })
            .collect();
        Ok(())
    }

    /// POSTs a bulk action on every node, waits `poll_wait_time` and
    /// fetches the nodes again.
    async fn bulk_action(&mut self, action: &str) -> Gns3Result<()> {
        let path = self.project_path()?;
        self.connector
            .api()
            .post_for_status(&format!("{}/nodes/{}", path, action))
            .await?;

        tokio::time::sleep(self.connector.config().poll_wait_time).await;
        self.get_nodes().await
    }

    pub async fn start_nodes(&mut self) -> Gns3Result<()> {
        self.bulk_action("start").await
    }

    pub async fn stop_nodes(&mut self) -> Gns3Result<()> {
        self.bulk_action("stop").await
    }

    pub async fn reload_nodes(&mut self) -> Gns3Result<()> {
        self.bulk_action("reload").await
    }

    pub async fn suspend_nodes(&mut self) -> Gns3Result<()> {
        self.bulk_action("suspend").await
    }

    async fn ensure_nodes(&mut self) -> Gns3Result<()> {
        if self.nodes.is_empty() {
            self.get_nodes().await?;
        }
        Ok(())
    }

    async fn ensure_links(&mut self) -> Gns3Result<()> {
        if self.links.is_empty() {
            self.get_links().await?;
        }
        Ok(())
    }

    /// One row per node: name, status, console port and id.
    pub async fn nodes_summary(&mut self) -> Gns3Result<Vec<NodeSummary>> {
        self.ensure_nodes().await?;
        Ok(self
            .nodes
            .iter()
            .map(|node| NodeSummary {
                name: node.info().name.clone(),
                status: node.info().status,
                console: node.info().console,
                node_id: node.info().node_id.clone(),
            })
            .collect())
    }

    /// Inventory of the nodes keyed by node name.
    ///
    /// `server` is the host name of the connector's URL.
    pub async fn nodes_inventory(&mut self) -> Gns3Result<BTreeMap<String, NodeInventoryEntry>> {
        self.ensure_nodes().await?;
        let server = self
            .connector
            .connection()
            .url()
            .hostname()
            .map(str::to_string);

        let mut inventory = BTreeMap::new();
        for node in &self.nodes {
            let info = node.info();
            let Some(name) = info.name.clone() else {
                warn!(node_id = ?info.node_id, "skipping node without name in inventory");
                continue;
            };
            inventory.insert(
                name.clone(),
                NodeInventoryEntry {
                    server: server.clone(),
                    name: Some(name),
                    console_port: info.console,
                    console_type: info.console_type,
                    node_type: info.node_type,
                    template: info.template.clone(),
                },
            );
        }
        Ok(inventory)
    }

    /// One row per link, naming both ends by node name and port name.
    ///
    /// Links without two endpoints, or whose nodes or ports are not in the
    /// local node list, are skipped.
    pub async fn links_summary(&mut self) -> Gns3Result<Vec<LinkSummary>> {
        self.ensure_nodes().await?;
        self.ensure_links().await?;

        let mut summary = Vec::new();
        for link in &self.links {
            let [side_a, side_b, ..] = link.info().nodes.as_slice() else {
                continue;
            };
            match (self.describe_endpoint(side_a), self.describe_endpoint(side_b)) {
                (Some((node_a, port_a)), Some((node_b, port_b))) => summary.push(LinkSummary {
                    node_a,
                    port_a,
                    node_b,
                    port_b,
                }),
                _ => warn!(link_id = ?link.link_id(), "skipping link with unknown endpoint"),
            }
        }
        Ok(summary)
    }

    /// Node name and port name of a link endpoint.
    fn describe_endpoint(&self, endpoint: &LinkEndpoint) -> Option<(String, String)> {
        let node = self
            .nodes
            .iter()
            .find(|node| node.node_id() == Some(endpoint.node_id.as_str()))?;
        let port = node
            .info()
            .port_at(endpoint.adapter_number, endpoint.port_number)?;
        Some((node.name().unwrap_or_default().to_string(), port.name.clone()))
    }

    /// Finds a node by name or id, fetching the nodes first when none are held.
    ///
    /// Call [`Project::get_nodes`] to refresh a stale list.
    pub async fn get_node(&mut self, lookup: Lookup<'_>) -> Gns3Result<Option<&Node>> {
        self.ensure_nodes().await?;
        Ok(self
            .nodes
            .iter()
            .find(|node| lookup.matches(node.name(), node.node_id())))
    }

    /// Same as [`Project::get_node`], for operations that change the node.
    pub async fn get_node_mut(&mut self, lookup: Lookup<'_>) -> Gns3Result<Option<&mut Node>> {
        self.ensure_nodes().await?;
        Ok(self
            .nodes
            .iter_mut()
            .find(|node| lookup.matches(node.name(), node.node_id())))
    }

    /// Finds a link by id, fetching the links first when none are held.
    pub async fn get_link(&mut self, link_id: &str) -> Gns3Result<Option<&Link>> {
        self.ensure_links().await?;
        Ok(self
            .links
            .iter()
            .find(|link| link.link_id() == Some(link_id)))
    }

    pub async fn get_link_mut(&mut self, link_id: &str) -> Gns3Result<Option<&mut Link>> {
        self.ensure_links().await?;
        Ok(self
            .links
            .iter_mut()
            .find(|link| link.link_id() == Some(link_id)))
    }

    /// Creates a node in this project and adds it to the local nodes.
    ///
    /// `attributes` needs `template` or `template_id`; see [`Node::create`].
    pub async fn create_node(&mut self, attributes: NodeInfo) -> Gns3Result<&Node> {
        self.project_path()?;
        self.ensure_nodes().await?;

        let mut node = Node::new(
            Arc::clone(&self.connector),
            NodeInfo {
                project_id: self.info.project_id.clone(),
                ..attributes
            },
        );
        node.create().await?;

        let index = self.nodes.len();
        self.nodes.push(node);
        Ok(&self.nodes[index])
    }

    /// Deletes a node of this project and drops it from the local nodes.
    pub async fn delete_node(&mut self, lookup: Lookup<'_>) -> Gns3Result<()> {
        self.ensure_nodes().await?;
        let index = self
            .nodes
            .iter()
            .position(|node| lookup.matches(node.name(), node.node_id()))
            .ok_or_else(|| ValidationError::NotFound(format!("Node with {} not found", lookup)))?;

        let name = self.nodes[index].name().unwrap_or_default().to_string();
        self.nodes[index].delete().await?;
        self.nodes.remove(index);
        info!(%name, "deleted node");
        Ok(())
    }

    /// Endpoint for the named port of the named node, labelled with the port name.
    fn resolve_endpoint(&self, side: &str, node_name: &str, port_name: &str) -> Gns3Result<LinkEndpoint> {
        let node = self
            .nodes
            .iter()
            .find(|node| node.name() == Some(node_name))
            .ok_or_else(|| ValidationError::NotFound(format!("node_{}: {} not found", side, node_name)))?;
        let port = node
            .info()
            .port_named(port_name)
            .ok_or_else(|| ValidationError::NotFound(format!("port_{}: {} not found", side, port_name)))?;
        let node_id = node
            .node_id()
            .ok_or_else(|| ValidationError::missing("node_id", "Node without id"))?;

        Ok(LinkEndpoint {
            node_id: node_id.to_string(),
            adapter_number: port.adapter_number,
            port_number: port.port_number,
            label: Some(json!({ "text": port.name })),
        })
    }

    fn uses_endpoint(link: &Link, endpoint: &LinkEndpoint) -> bool {
        link.info().nodes.iter().any(|side| {
            side.is_at(&endpoint.node_id, endpoint.adapter_number, endpoint.port_number)
        })
    }

    /// Links `node_a`/`port_a` to `node_b`/`port_b`, names as shown by the
    /// nodes' port lists (e.g. `Ethernet0`, `e0/1`).
    ///
    /// # Errors
    ///
    /// Fails without calling the server when a node or port does not exist,
    /// or when either port is already used by another link.
    pub async fn create_link(
        &mut self,
        node_a: &str,
        port_a: &str,
        node_b: &str,
        port_b: &str,
    ) -> Gns3Result<&Link> {
        self.project_path()?;
        self.ensure_nodes().await?;
        self.ensure_links().await?;

        let side_a = self.resolve_endpoint("a", node_a, port_a)?;
        let side_b = self.resolve_endpoint("b", node_b, port_b)?;

        if let Some(used) = self
            .links
            .iter()
            .find(|link| Self::uses_endpoint(link, &side_a) || Self::uses_endpoint(link, &side_b))
        {
            return Err(ValidationError::ConstraintViolation(format!(
                "At least one port is used, ID: {}",
                used.link_id().unwrap_or_default()
            ))
            .into());
        }

        let mut link = Link::new(
            Arc::clone(&self.connector),
            LinkInfo {
                project_id: self.info.project_id.clone(),
                nodes: vec![side_a, side_b],
                ..Default::default()
            },
        );
        link.create().await?;

        let index = self.links.len();
        self.links.push(link);
        Ok(&self.links[index])
    }

    /// Deletes the link between `node_a`/`port_a` and `node_b`/`port_b`.
    pub async fn delete_link(
        &mut self,
        node_a: &str,
        port_a: &str,
        node_b: &str,
        port_b: &str,
    ) -> Gns3Result<()> {
        self.ensure_nodes().await?;
        self.ensure_links().await?;

        let side_a = self.resolve_endpoint("a", node_a, port_a)?;
        let side_b = self.resolve_endpoint("b", node_b, port_b)?;

        let index = self
            .links
            .iter()
            .position(|link| Self::uses_endpoint(link, &side_a) && Self::uses_endpoint(link, &side_b))
            .ok_or_else(|| {
                ValidationError::NotFound(format!(
                    "Link not found: ({}, {}, {}, {})",
                    node_a, port_a, node_b, port_b
                ))
            })?;

        let link_id = self.links[index].link_id().unwrap_or_default().to_string();
        self.links[index].delete().await?;
        self.links.remove(index);
        info!(
            %link_id,
            node_a, port_a, node_b, port_b,
            "deleted link"
        );
        Ok(())
    }

    /// Replaces the local snapshots with the project's snapshots on the server.
    pub async fn get_snapshots(&mut self) -> Gns3Result<()> {
        let path = self.project_path()?;
        self.snapshots = self
            .connector
            .api()
            .get(&format!("{}/snapshots", path))
            .await?;
        Ok(())
    }

    /// Finds a snapshot by name or id, fetching them first when none are held.
    pub async fn get_snapshot(&mut self, lookup: Lookup<'_>) -> Gns3Result<Option<&Snapshot>> {
        if self.snapshots.is_empty() {
            self.get_snapshots().await?;
        }
        Ok(self.find_snapshot(lookup))
    }

    fn find_snapshot(&self, lookup: Lookup<'_>) -> Option<&Snapshot> {
        self.snapshots
            .iter()
            .find(|snapshot| lookup.matches(Some(snapshot.name.as_str()), Some(snapshot.snapshot_id.as_str())))
    }

    /// Snapshot id for `lookup`, from a fresh snapshot list.
    async fn snapshot_id(&mut self, lookup: Lookup<'_>) -> Gns3Result<String> {
        self.get_snapshots().await?;
        self.find_snapshot(lookup)
            .map(|snapshot| snapshot.snapshot_id.clone())
            .ok_or_else(|| ValidationError::NotFound("Snapshot not found".to_string()).into())
    }

    /// Takes a snapshot named `name`; the name must not be used yet.
    pub async fn create_snapshot(&mut self, name: &str) -> Gns3Result<&Snapshot> {
        self.get_snapshots().await?;
        if self.find_snapshot(Lookup::Name(name)).is_some() {
            return Err(ValidationError::ConstraintViolation("Snapshot already created".to_string()).into());
        }

        let path = self.project_path()?;
        let snapshot: Snapshot = self
            .connector
            .api()
            .post(&format!("{}/snapshots", path), &json!({ "name": name }))
            .await?;
        info!(name = %snapshot.name, snapshot_id = %snapshot.snapshot_id, "created snapshot");

        let index = self.snapshots.len();
        self.snapshots.push(snapshot);
        Ok(&self.snapshots[index])
    }

    pub async fn delete_snapshot(&mut self, lookup: Lookup<'_>) -> Gns3Result<()> {
        let snapshot_id = self.snapshot_id(lookup).await?;
        let path = self.project_path()?;
        self.connector
            .api()
            .delete(&format!("{}/snapshots/{}", path, snapshot_id))
            .await?;
        self.get_snapshots().await
    }

    /// Restores a snapshot, then fetches the whole project again.
    pub async fn restore_snapshot(&mut self, lookup: Lookup<'_>) -> Gns3Result<()> {
        let snapshot_id = self.snapshot_id(lookup).await?;
        let path = self.project_path()?;
        self.connector
            .api()
            .post_for_status(&format!("{}/snapshots/{}/restore", path, snapshot_id))
            .await?;
        self.get(FetchOptions::default()).await
    }

    /// Places the nodes on a circle of the given radius around the scene
    /// origin, opening the project first if needed.
    ///
    /// Node `i` of `n` goes to `(radius·sin(i·2π/n), −radius·cos(i·2π/n))`,
    /// truncated; the first node sits on top since the scene's Y axis points
    /// down.
    pub async fn arrange_nodes_circular(&mut self, radius: f64) -> Gns3Result<()> {
        self.get(FetchOptions::default()).await?;
        if self.info.status != Some(ProjectStatus::Opened) {
            self.open().await?;
        }
        if self.nodes.is_empty() {
            return Ok(());
        }

        let angle = (2.0 * PI) / self.nodes.len() as f64;
        for (index, node) in self.nodes.iter_mut().enumerate() {
            let x = (radius * (angle * index as f64).sin()) as i64;
            let y = (radius * -(angle * index as f64).cos()) as i64;

            let mut changes = Map::new();
            changes.insert("x".to_string(), Value::from(x));
            changes.insert("y".to_string(), Value::from(y));
            node.update(changes).await?;
        }
        Ok(())
    }

    /// Replaces the local drawings with the project's drawings on the server.
    pub async fn get_drawings(&mut self) -> Gns3Result<()> {
        let path = self.project_path()?;
        self.drawings = self
            .connector
            .api()
            .get(&format!("{}/drawings", path))
            .await?;
        Ok(())
    }

    /// Finds a drawing by id, fetching them first when none are held.
    pub async fn get_drawing(&mut self, drawing_id: &str) -> Gns3Result<Option<&Drawing>> {
        if self.drawings.is_empty() {
            self.get_drawings().await?;
        }
        Ok(self
            .drawings
            .iter()
            .find(|drawing| drawing.drawing_id == drawing_id))
    }

    /// Adds a drawing to the scene.
    pub async fn create_drawing(&mut self, params: DrawingParams) -> Gns3Result<&Drawing> {
        let path = self.project_path()?;
        let drawing: Drawing = self
            .connector
            .api()
            .post(&format!("{}/drawings", path), &params)
            .await?;
        info!(drawing_id = %drawing.drawing_id, "created drawing");

        let index = self.drawings.len();
        self.drawings.push(drawing);
        Ok(&self.drawings[index])
    }

    /// Updates a drawing; attributes left unset in `changes` keep the value
    /// of the local copy. Returns the server's answer and refreshes the
    /// drawings.
    pub async fn update_drawing(
        &mut self,
        drawing_id: &str,
        changes: DrawingUpdate,
    ) -> Gns3Result<Drawing> {
        let path = self.project_path()?;
        let current = self
            .get_drawing(drawing_id)
            .await?
            .ok_or_else(|| ValidationError::NotFound(format!("Drawing {}", drawing_id)))?;
        let body = changes.resolve(current);

        let updated: Drawing = self
            .connector
            .api()
            .put(&format!("{}/drawings/{}", path, drawing_id), &body)
            .await?;
        self.get_drawings().await?;
        Ok(updated)
    }

    pub async fn delete_drawing(&mut self, drawing_id: &str) -> Gns3Result<()> {
        self.get_drawings().await?;
        if !self
            .drawings
            .iter()
            .any(|drawing| drawing.drawing_id == drawing_id)
        {
            return Err(ValidationError::NotFound("drawing not found".to_string()).into());
        }

        let path = self.project_path()?;
        self.connector
            .api()
            .delete(&format!("{}/drawings/{}", path, drawing_id))
            .await?;
        self.get_drawings().await
    }
}
