//! Server-wide calls of the connector: projects, templates, computes and the
//! raw node/link listings of a project.

use crate::Gns3Connector;
use crate::core::domain::{
    error::{Gns3Result, ValidationError},
    model::{
        compute::{Compute, ComputeImage, ComputePorts},
        link::LinkInfo,
        lookup::Lookup,
        node::NodeInfo,
        project::{ProjectInfo, ProjectStats},
        summary::{ProjectSummary, TemplateSummary},
        template::Template,
    },
};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::info;

const DEFAULT_COMPUTE: &str = "local";

impl Gns3Connector {
    /// Lists the projects of the server.
    pub async fn get_projects(&self) -> Gns3Result<Vec<ProjectInfo>> {
        self.api().get("projects").await
    }

    /// Retrieves a project by id (direct lookup) or by name (scan of the list).
    ///
    /// Returns `Ok(None)` when no project has the given name. A lookup by id
    /// of an unknown project fails with the server's 404.
    pub async fn get_project(&self, lookup: Lookup<'_>) -> Gns3Result<Option<ProjectInfo>> {
        match lookup {
            Lookup::Id(project_id) => self
                .api()
                .get(&format!("projects/{}", project_id))
                .await
                .map(Some),
            Lookup::Name(name) => Ok(self
                .get_projects()
                .await?
                .into_iter()
                .find(|project| project.name.as_deref() == Some(name))),
        }
    }

    /// Creates a project from the given attributes; `name` is mandatory.
    pub async fn create_project(&self, project: &ProjectInfo) -> Gns3Result<ProjectInfo> {
        if project.name.is_none() {
            return Err(ValidationError::missing("name", "Need to submit project name").into());
        }
        let created: ProjectInfo = self.api().post("projects", project).await?;
        info!(
            project_id = created.project_id.as_deref().unwrap_or_default(),
            "created project"
        );
        Ok(created)
    }

    pub async fn delete_project(&self, project_id: &str) -> Gns3Result<()> {
        self.api().delete(&format!("projects/{}", project_id)).await?;
        info!(project_id, "deleted project");
        Ok(())
    }

    /// One row per project with its node and link counts.
    ///
    /// Issues one `stats` call per project.
    pub async fn projects_summary(&self) -> Gns3Result<Vec<ProjectSummary>> {
        let mut summary = Vec::new();
        for project in self.get_projects().await? {
            let project_id = project
                .project_id
                .ok_or_else(|| ValidationError::missing("project_id", "Project without id"))?;
            let stats: ProjectStats = self
                .api()
                .get(&format!("projects/{}/stats", project_id))
                .await?;
            summary.push(ProjectSummary {
                name: project.name.unwrap_or_default(),
                project_id,
                total_nodes: stats.nodes,
                total_links: stats.links,
                status: project.status,
            });
        }
        Ok(summary)
    }

    /// Lists the templates defined on the server.
    pub async fn get_templates(&self) -> Gns3Result<Vec<Template>> {
        self.api().get("templates").await
    }

    /// Retrieves a template by id or name; `Ok(None)` when the name is unknown.
    pub async fn get_template(&self, lookup: Lookup<'_>) -> Gns3Result<Option<Template>> {
        match lookup {
            Lookup::Id(template_id) => self
                .api()
                .get(&format!("templates/{}", template_id))
                .await
                .map(Some),
            Lookup::Name(name) => Ok(self
                .get_templates()
                .await?
                .into_iter()
                .find(|template| template.name == name)),
        }
    }

    /// Creates a template.
    ///
    /// `name` and `template_type` are mandatory, `compute_id` defaults to
    /// `local`. A template with the same name must not exist yet.
    pub async fn create_template(&self, attributes: Map<String, Value>) -> Gns3Result<Template> {
        let name = attributes
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| ValidationError::missing("name", "Need to submit template name"))?
            .to_string();
        if !attributes.contains_key("template_type") {
            return Err(ValidationError::missing(
                "template_type",
                "Need to submit template_type",
            )
            .into());
        }
        if self.get_template(Lookup::Name(&name)).await?.is_some() {
            return Err(
                ValidationError::ConstraintViolation(format!("Template already used: {}", name))
                    .into(),
            );
        }

        let mut body = attributes;
        body.entry("compute_id")
            .or_insert_with(|| Value::from(DEFAULT_COMPUTE));

        let created: Template = self.api().post("templates", &body).await?;
        info!(template_id = %created.template_id, name = %created.name, "created template");
        Ok(created)
    }

    /// Fetches a template, merges `changes` into it and sends the whole
    /// template back.
    pub async fn update_template(
        &self,
        lookup: Lookup<'_>,
        changes: Map<String, Value>,
    ) -> Gns3Result<Template> {
        let template = self
            .get_template(lookup)
            .await?
            .ok_or_else(|| ValidationError::NotFound(format!("Template with {}", lookup)))?;

        let mut body = match serde_json::to_value(&template) {
            Ok(Value::Object(fields)) => fields,
            _ => Map::new(),
        };
        body.extend(changes);

        self.api()
            .put(&format!("templates/{}", template.template_id), &body)
            .await
    }

    /// Deletes a template; a name is resolved to the template id first.
    pub async fn delete_template(&self, lookup: Lookup<'_>) -> Gns3Result<()> {
        let template_id = match lookup {
            Lookup::Id(template_id) => template_id.to_string(),
            Lookup::Name(_) => {
                self.get_template(lookup)
                    .await?
                    .ok_or_else(|| ValidationError::NotFound(format!("Template with {}", lookup)))?
                    .template_id
            }
        };
        self.api()
            .delete(&format!("templates/{}", template_id))
            .await?;
        info!(%template_id, "deleted template");
        Ok(())
    }

    /// One row per template of the server.
    pub async fn templates_summary(&self) -> Gns3Result<Vec<TemplateSummary>> {
        Ok(self
            .get_templates()
            .await?
            .into_iter()
            .map(|template| TemplateSummary {
                name: template.name,
                template_id: template.template_id,
                template_type: template.template_type,
                builtin: template.builtin,
                console_type: template.console_type.unwrap_or_else(|| "N/A".to_string()),
                category: template.category,
            })
            .collect())
    }

    /// Lists the nodes of a project.
    pub async fn get_nodes(&self, project_id: &str) -> Gns3Result<Vec<NodeInfo>> {
        self.api()
            .get(&format!("projects/{}/nodes", project_id))
            .await
    }

    pub async fn get_node(&self, project_id: &str, node_id: &str) -> Gns3Result<NodeInfo> {
        self.api()
            .get(&format!("projects/{}/nodes/{}", project_id, node_id))
            .await
    }

    /// Lists the links of a project.
    pub async fn get_links(&self, project_id: &str) -> Gns3Result<Vec<LinkInfo>> {
        self.api()
            .get(&format!("projects/{}/links", project_id))
            .await
    }

    pub async fn get_link(&self, project_id: &str, link_id: &str) -> Gns3Result<LinkInfo> {
        self.api()
            .get(&format!("projects/{}/links/{}", project_id, link_id))
            .await
    }

    /// Lists the computes known to the controller.
    pub async fn get_computes(&self) -> Gns3Result<Vec<Compute>> {
        self.api().get("computes").await
    }

    /// Retrieves a compute; `None` means `local`.
    pub async fn get_compute(&self, compute_id: Option<&str>) -> Gns3Result<Compute> {
        self.api()
            .get(&format!(
                "computes/{}",
                compute_id.unwrap_or(DEFAULT_COMPUTE)
            ))
            .await
    }

    /// Lists the images available to an emulator (`qemu`, `iou`, `dynamips`, ...).
    pub async fn get_compute_images(
        &self,
        emulator: &str,
        compute_id: Option<&str>,
    ) -> Gns3Result<Vec<ComputeImage>> {
        self.api()
            .get(&format!(
                "computes/{}/{}/images",
                compute_id.unwrap_or(DEFAULT_COMPUTE),
                emulator
            ))
            .await
    }

    /// Uploads a local image file for an emulator.
    ///
    /// The file is streamed from disk as the raw request body of
    /// `computes/{compute_id}/{emulator}/images/{file name}`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Gns3Error::Io`] when the file cannot be read.
    pub async fn upload_compute_image(
        &self,
        emulator: &str,
        file_path: impl AsRef<Path>,
        compute_id: Option<&str>,
    ) -> Gns3Result<()> {
        let file_path = file_path.as_ref();
        let filename = file_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| ValidationError::Format(format!("Invalid image path: {}", file_path.display())))?
            .to_string();
        let image = tokio::fs::File::open(file_path).await?;

        self.api()
            .post_file(
                &format!(
                    "computes/{}/{}/images/{}",
                    compute_id.unwrap_or(DEFAULT_COMPUTE),
                    emulator,
                    filename
                ),
                image,
            )
            .await?;
        info!(emulator, %filename, "uploaded image");
        Ok(())
    }

    /// Console and UDP ports reserved on a compute.
    pub async fn get_compute_ports(&self, compute_id: Option<&str>) -> Gns3Result<ComputePorts> {
        self.api()
            .get(&format!(
                "computes/{}/ports",
                compute_id.unwrap_or(DEFAULT_COMPUTE)
            ))
            .await
    }
}
