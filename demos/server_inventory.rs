//! Prints what a GNS3 server holds: version, computes, templates, projects,
//! and the node inventory of every opened project.
//!
//! Connection settings come from `GNS3_URL`, `GNS3_USER` and `GNS3_CRED`
//! (a `.env` file is read if present).

use gns3_sdk::{FetchOptions, Gns3Connector, Gns3Result, Project, ProjectInfo, ProjectStatus};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Gns3Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let server = Arc::new(Gns3Connector::from_env()?);
    let version = server.get_version().await?;
    println!("GNS3 {} at {}", version.version, server.base_url());

    println!("\nComputes:");
    for compute in server.get_computes().await? {
        println!(
            "  • {} ({}:{}) connected: {}",
            compute.compute_id,
            compute.host.as_deref().unwrap_or("?"),
            compute.port.unwrap_or_default(),
            compute.connected.unwrap_or(false)
        );
    }

    println!("\nTemplates:");
    for row in server.templates_summary().await? {
        println!("  {}", row);
    }

    println!("\nProjects:");
    let projects = server.projects_summary().await?;
    for row in &projects {
        println!("  {}", row);
    }

    for row in projects
        .iter()
        .filter(|row| row.status == Some(ProjectStatus::Opened))
    {
        let mut project = Project::new(
            Arc::clone(&server),
            ProjectInfo {
                project_id: Some(row.project_id.clone()),
                ..Default::default()
            },
        );
        project.get(FetchOptions::project_only()).await?;

        println!("\nInventory of {}:", row.name);
        for (name, entry) in project.nodes_inventory().await? {
            println!(
                "  {}: {:?} console {:?} on port {:?}",
                name, entry.node_type, entry.console_type, entry.console_port
            );
        }
    }

    println!("\n{} API calls", server.api_calls());
    Ok(())
}
