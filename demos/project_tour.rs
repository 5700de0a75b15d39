//! Builds a small lab with the GNS3 client.
//!
//! This program connects to the server named by `GNS3_URL`, creates a
//! project, instantiates two nodes from a template, links them, arranges
//! them on a circle and starts them. The project is deleted at the end.

use gns3_sdk::{
    DrawingParams, FetchOptions, Gns3Connector, Gns3Result, NodeInfo, Project, ProjectInfo,
    RectangleSvg,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Gns3Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let template = std::env::var("GNS3_TEMPLATE").unwrap_or_else(|_| "VPCS".to_string());
    let server = Arc::new(Gns3Connector::from_env()?);
    println!("Connected to {}", server.base_url());

    // 1. Create the project.
    let mut lab = Project::new(Arc::clone(&server), ProjectInfo::named("sdk-tour"));
    lab.create().await?;
    println!("Created project {:?}", lab.project_id());

    // 2. Two nodes from the same template.
    for name in ["pc1", "pc2"] {
        let node = lab
            .create_node(NodeInfo::from_template(name, template.as_str()))
            .await?;
        println!("  • {} ({:?})", name, node.node_id());
    }

    // 3. Link their first ports.
    lab.get_nodes().await?;
    let port_of = |project: &Project, node: &str| {
        project
            .nodes()
            .iter()
            .find(|n| n.name() == Some(node))
            .and_then(|n| n.info().ports.as_ref()?.first().map(|p| p.name.clone()))
    };
    if let (Some(port_a), Some(port_b)) = (port_of(&lab, "pc1"), port_of(&lab, "pc2")) {
        lab.create_link("pc1", &port_a, "pc2", &port_b).await?;
    }

    // 4. Layout, a frame around it, and boot.
    lab.arrange_nodes_circular(150.0).await?;
    let frame = RectangleSvg {
        height: 400,
        width: 400,
        ..Default::default()
    };
    lab.create_drawing(DrawingParams {
        x: -200,
        y: -200,
        z: 0,
        ..DrawingParams::new(frame.to_svg())
    })
    .await?;
    lab.start_nodes().await?;

    lab.get(FetchOptions::default()).await?;
    println!("\nNodes:");
    for row in lab.nodes_summary().await? {
        println!("  {}", row);
    }
    println!("\nLinks:");
    for row in lab.links_summary().await? {
        println!("  {}", row);
    }

    lab.stop_nodes().await?;
    lab.delete().await?;
    println!("\nProject deleted ({} API calls)", server.api_calls());

    Ok(())
}
