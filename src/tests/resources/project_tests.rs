use crate::tests::support::{
    LINK_ID, PROJECT_ID, ROUTER_ID, SWITCH_ID, TEMPLATE_ID, links_json, mount_get, nodes_json,
    project_json, router_json, setup, switch_json,
};
use crate::{
    ConsoleType, DrawingParams, DrawingUpdate, FetchOptions, Gns3Error, Lookup, NodeInfo,
    NodeStatus, NodeType, Project, ProjectInfo, ProjectStatus, RectangleSvg, ValidationError,
};
use serde_json::{Map, Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, body_partial_json, body_string, method, path},
};

fn project_path(suffix: &str) -> String {
    format!("/v2/projects/{}{}", PROJECT_ID, suffix)
}

fn known_project(connector: std::sync::Arc<crate::Gns3Connector>) -> Project {
    Project::new(
        connector,
        ProjectInfo {
            project_id: Some(PROJECT_ID.to_string()),
            ..Default::default()
        },
    )
}

async fn mount_lab(mock_server: &MockServer) {
    mount_get(mock_server, &format!("/projects/{}/nodes", PROJECT_ID), nodes_json()).await;
    mount_get(mock_server, &format!("/projects/{}/links", PROJECT_ID), links_json()).await;
}

fn snapshots_json() -> Value {
    json!([
        {
            "created_at": 1_569_707_832,
            "name": "snap1",
            "project_id": PROJECT_ID,
            "snapshot_id": "7fd725d5-0e96-4a46-a5a8-8d3ec3b3bd20"
        }
    ])
}

fn drawing_json() -> Value {
    json!({
        "drawing_id": "04901e4d-1b60-4b4a-8fe2-0a8d0d8f3c0a",
        "project_id": PROJECT_ID,
        "svg": "<svg height=\"100\" width=\"200\"></svg>",
        "locked": false,
        "rotation": 0,
        "x": -250,
        "y": -200,
        "z": 0
    })
}

#[tokio::test]
async fn test_get_by_name_fetches_everything() {
    let (mock_server, connector) = setup().await;
    mount_get(&mock_server, "/projects", json!([project_json()])).await;
    mount_get(&mock_server, &format!("/projects/{}", PROJECT_ID), project_json()).await;
    mount_get(
        &mock_server,
        &format!("/projects/{}/stats", PROJECT_ID),
        json!({"drawings": 0, "links": 2, "nodes": 2, "snapshots": 1}),
    )
    .await;
    mount_get(
        &mock_server,
        &format!("/projects/{}/snapshots", PROJECT_ID),
        snapshots_json(),
    )
    .await;
    mount_lab(&mock_server).await;

    let mut lab = Project::new(connector.clone(), ProjectInfo::named("lab"));
    lab.get(FetchOptions::default()).await.unwrap();

    assert_eq!(lab.project_id(), Some(PROJECT_ID));
    assert_eq!(lab.status(), Some(ProjectStatus::Opened));
    assert_eq!(lab.info().grid_size, Some(75));
    assert_eq!(lab.stats().map(|s| s.nodes), Some(2));
    assert_eq!(lab.snapshots().len(), 1);
    assert!(lab.drawings().is_empty());
    assert_eq!(lab.nodes().len(), 2);
    assert_eq!(lab.nodes()[1].project_id(), Some(PROJECT_ID));
    assert_eq!(lab.links().len(), 2);
    // list, project, stats, snapshots, nodes, links
    assert_eq!(connector.api_calls(), 6);
}

#[tokio::test]
async fn test_get_unknown_name() {
    let (mock_server, connector) = setup().await;
    mount_get(&mock_server, "/projects", json!([project_json()])).await;

    let mut lab = Project::new(connector.clone(), ProjectInfo::named("missing"));
    let result = lab.get(FetchOptions::project_only()).await;
    assert!(matches!(
        result,
        Err(Gns3Error::Validation {
            source: ValidationError::NotFound(_),
            ..
        })
    ));

    let mut anonymous = Project::new(connector, ProjectInfo::default());
    assert!(anonymous.get(FetchOptions::project_only()).await.is_err());
}

#[tokio::test]
async fn test_create_update_delete() {
    let (mock_server, connector) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v2/projects"))
        .and(body_json(json!({"name": "lab", "auto_close": true})))
        .respond_with(ResponseTemplate::new(201).set_body_json(project_json()))
        .expect(1)
        .mount(&mock_server)
        .await;
    let mut zoomed = project_json();
    zoomed["zoom"] = json!(150);
    Mock::given(method("PUT"))
        .and(path(project_path("")))
        .and(body_json(json!({"zoom": 150})))
        .respond_with(ResponseTemplate::new(200).set_body_json(zoomed))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(project_path("")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut lab = Project::new(
        connector.clone(),
        ProjectInfo {
            auto_close: Some(true),
            ..ProjectInfo::named("lab")
        },
    );
    lab.create().await.unwrap();
    assert_eq!(lab.project_id(), Some(PROJECT_ID));

    let mut changes = Map::new();
    changes.insert("zoom".to_string(), Value::from(150));
    lab.update(changes).await.unwrap();
    assert_eq!(lab.info().zoom, Some(150));

    lab.delete().await.unwrap();
    assert_eq!(lab.project_id(), None);
    assert_eq!(lab.name(), None);

    let mut unnamed = Project::new(connector, ProjectInfo::default());
    assert!(unnamed.create().await.is_err());
}

#[tokio::test]
async fn test_open_and_close() {
    let (mock_server, connector) = setup().await;
    Mock::given(method("POST"))
        .and(path(project_path("/open")))
        .respond_with(ResponseTemplate::new(201).set_body_json(project_json()))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path(project_path("/close")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let mut lab = known_project(connector);
    lab.open().await.unwrap();
    assert_eq!(lab.status(), Some(ProjectStatus::Opened));
    lab.close().await.unwrap();
    assert_eq!(lab.status(), Some(ProjectStatus::Closed));
}

#[tokio::test]
async fn test_bulk_actions_refresh_nodes() {
    let (mock_server, connector) = setup().await;
    let mut stopped_router = router_json();
    stopped_router["status"] = json!("stopped");
    let mut stopped_switch = switch_json();
    stopped_switch["status"] = json!("stopped");

    Mock::given(method("POST"))
        .and(path(project_path("/nodes/stop")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_get(
        &mock_server,
        &format!("/projects/{}/nodes", PROJECT_ID),
        json!([stopped_router, stopped_switch]),
    )
    .await;

    let mut lab = known_project(connector);
    lab.stop_nodes().await.unwrap();
    assert!(
        lab.nodes()
            .iter()
            .all(|node| node.info().status == Some(NodeStatus::Stopped))
    );
}

#[tokio::test]
async fn test_summaries_and_inventory() {
    let (mock_server, connector) = setup().await;
    mount_lab(&mock_server).await;

    let mut lab = known_project(connector);

    let nodes = lab.nodes_summary().await.unwrap();
    assert_eq!(
        nodes[0].to_string(),
        format!("router01: started -- Console: 5000 -- ID: {}", ROUTER_ID)
    );

    let inventory = lab.nodes_inventory().await.unwrap();
    let router = &inventory["router01"];
    assert_eq!(router.server.as_deref(), Some("127.0.0.1"));
    assert_eq!(router.console_port, Some(5000));
    assert_eq!(router.console_type, Some(ConsoleType::Telnet));
    assert_eq!(router.node_type, Some(NodeType::Dynamips));
    assert_eq!(inventory["switch01"].console_type, Some(ConsoleType::None));

    // The dangling link without endpoints is left out.
    let links = lab.links_summary().await.unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(
        links[0].to_string(),
        "router01: Ethernet0 ---- switch01: Ethernet0"
    );
}

#[tokio::test]
async fn test_get_node_and_link_lookups() {
    let (mock_server, connector) = setup().await;
    mount_lab(&mock_server).await;

    let mut lab = known_project(connector.clone());
    let by_name = lab.get_node(Lookup::Name("switch01")).await.unwrap();
    assert_eq!(by_name.and_then(|n| n.node_id()), Some(SWITCH_ID));
    let by_id = lab.get_node(Lookup::Id(ROUTER_ID)).await.unwrap();
    assert_eq!(by_id.and_then(|n| n.name()), Some("router01"));
    assert!(lab.get_node(Lookup::Name("r9")).await.unwrap().is_none());

    let link = lab.get_link(LINK_ID).await.unwrap();
    assert!(link.is_some());
    // Nodes and links were fetched once each.
    assert_eq!(connector.api_calls(), 2);
}

#[tokio::test]
async fn test_create_node_adds_it_locally() {
    let (mock_server, connector) = setup().await;
    mount_get(&mock_server, &format!("/projects/{}/nodes", PROJECT_ID), json!([])).await;

    let alpine_id = "ef503c45-e998-499d-88fc-2765614b313e";
    let alpine = json!({
        "name": "alpine-1",
        "node_id": alpine_id,
        "project_id": PROJECT_ID,
        "compute_id": "local",
        "node_type": "docker",
        "status": "stopped",
        "console": 5005,
        "console_type": "telnet",
        "template_id": TEMPLATE_ID
    });
    Mock::given(method("POST"))
        .and(path(project_path(&format!("/templates/{}", TEMPLATE_ID))))
        .respond_with(ResponseTemplate::new(201).set_body_json(alpine.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path(project_path(&format!("/nodes/{}", alpine_id))))
        .and(body_partial_json(json!({"name": "alpine-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(alpine))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut lab = known_project(connector);
    let node = lab
        .create_node(NodeInfo {
            name: Some("alpine-1".to_string()),
            template_id: Some(TEMPLATE_ID.to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(node.node_id(), Some(alpine_id));
    assert_eq!(node.project_id(), Some(PROJECT_ID));
    assert_eq!(lab.nodes().len(), 1);
}

#[tokio::test]
async fn test_create_link_between_free_ports() {
    let (mock_server, connector) = setup().await;
    mount_lab(&mock_server).await;

    let new_link_id = "0d10d697-ef8d-40af-a4f3-fafe71f5458b";
    Mock::given(method("POST"))
        .and(path(project_path("/links")))
        .and(body_json(json!({
            "project_id": PROJECT_ID,
            "nodes": [
                {"node_id": ROUTER_ID, "adapter_number": 0, "port_number": 1, "label": {"text": "Ethernet1"}},
                {"node_id": SWITCH_ID, "adapter_number": 0, "port_number": 1, "label": {"text": "Ethernet1"}}
            ]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "link_id": new_link_id,
            "link_type": "ethernet",
            "project_id": PROJECT_ID,
            "nodes": [
                {"node_id": ROUTER_ID, "adapter_number": 0, "port_number": 1},
                {"node_id": SWITCH_ID, "adapter_number": 0, "port_number": 1}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut lab = known_project(connector);
    let link = lab
        .create_link("router01", "Ethernet1", "switch01", "Ethernet1")
        .await
        .unwrap();
    assert_eq!(link.link_id(), Some(new_link_id));
    assert_eq!(lab.links().len(), 3);
}

#[tokio::test]
async fn test_create_link_rejections() {
    let (mock_server, connector) = setup().await;
    mount_lab(&mock_server).await;
    Mock::given(method("POST"))
        .and(path(project_path("/links")))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut lab = known_project(connector);

    // Ethernet0 of the switch is already linked to the router.
    let used = lab
        .create_link("router01", "Ethernet1", "switch01", "Ethernet0")
        .await;
    match used {
        Err(Gns3Error::Validation {
            source: ValidationError::ConstraintViolation(message),
            ..
        }) => assert_eq!(message, format!("At least one port is used, ID: {}", LINK_ID)),
        other => panic!("unexpected result: {:?}", other.map(|l| l.link_id().map(str::to_string))),
    }

    assert!(matches!(
        lab.create_link("router09", "Ethernet1", "switch01", "Ethernet1").await,
        Err(Gns3Error::Validation {
            source: ValidationError::NotFound(ref message),
            ..
        }) if message == "node_a: router09 not found"
    ));
    assert!(matches!(
        lab.create_link("router01", "Ethernet1", "switch01", "Gi0/0").await,
        Err(Gns3Error::Validation {
            source: ValidationError::NotFound(ref message),
            ..
        }) if message == "port_b: Gi0/0 not found"
    ));
}

#[tokio::test]
async fn test_delete_link() {
    let (mock_server, connector) = setup().await;
    mount_lab(&mock_server).await;
    Mock::given(method("DELETE"))
        .and(path(project_path(&format!("/links/{}", LINK_ID))))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut lab = known_project(connector);
    lab.delete_link("router01", "Ethernet0", "switch01", "Ethernet0")
        .await
        .unwrap();
    assert_eq!(lab.links().len(), 1);

    let missing = lab
        .delete_link("router01", "Ethernet1", "switch01", "Ethernet1")
        .await;
    assert!(missing.is_err());
}

#[tokio::test]
async fn test_snapshots() {
    let (mock_server, connector) = setup().await;
    mount_get(
        &mock_server,
        &format!("/projects/{}/snapshots", PROJECT_ID),
        snapshots_json(),
    )
    .await;
    Mock::given(method("POST"))
        .and(path(project_path("/snapshots")))
        .and(body_json(json!({"name": "snap2"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "created_at": 1_569_879_997,
            "name": "snap2",
            "project_id": PROJECT_ID,
            "snapshot_id": "6796e3ad-ce6d-47db-bdd7-b305506ea22d"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(project_path("/snapshots/7fd725d5-0e96-4a46-a5a8-8d3ec3b3bd20")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut lab = known_project(connector);

    let snap1 = lab.get_snapshot(Lookup::Name("snap1")).await.unwrap();
    assert_eq!(
        snap1.map(|s| s.snapshot_id.as_str()),
        Some("7fd725d5-0e96-4a46-a5a8-8d3ec3b3bd20")
    );

    let created = lab.create_snapshot("snap2").await.unwrap();
    assert_eq!(created.name, "snap2");

    assert!(matches!(
        lab.create_snapshot("snap1").await,
        Err(Gns3Error::Validation {
            source: ValidationError::ConstraintViolation(_),
            ..
        })
    ));

    lab.delete_snapshot(Lookup::Name("snap1")).await.unwrap();
    assert!(lab.delete_snapshot(Lookup::Name("snap9")).await.is_err());
}

#[tokio::test]
async fn test_restore_snapshot_refetches_project() {
    let (mock_server, connector) = setup().await;
    mount_get(
        &mock_server,
        &format!("/projects/{}/snapshots", PROJECT_ID),
        snapshots_json(),
    )
    .await;
    Mock::given(method("POST"))
        .and(path(project_path(
            "/snapshots/7fd725d5-0e96-4a46-a5a8-8d3ec3b3bd20/restore",
        )))
        .respond_with(ResponseTemplate::new(201).set_body_json(project_json()))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_get(&mock_server, &format!("/projects/{}", PROJECT_ID), project_json()).await;
    mount_get(
        &mock_server,
        &format!("/projects/{}/stats", PROJECT_ID),
        json!({"drawings": 0, "links": 2, "nodes": 2, "snapshots": 1}),
    )
    .await;
    mount_lab(&mock_server).await;

    let mut lab = known_project(connector);
    lab.restore_snapshot(Lookup::Id("7fd725d5-0e96-4a46-a5a8-8d3ec3b3bd20"))
        .await
        .unwrap();
    assert_eq!(lab.name(), Some("lab"));
    assert_eq!(lab.nodes().len(), 2);
}

#[tokio::test]
async fn test_arrange_nodes_circular() {
    let (mock_server, connector) = setup().await;
    mount_get(&mock_server, &format!("/projects/{}", PROJECT_ID), project_json()).await;
    mount_get(
        &mock_server,
        &format!("/projects/{}/stats", PROJECT_ID),
        json!({"drawings": 0, "links": 2, "nodes": 2, "snapshots": 0}),
    )
    .await;
    mount_lab(&mock_server).await;

    // First node on top, second one opposite (sin(pi) truncates to 0).
    Mock::given(method("PUT"))
        .and(path(project_path(&format!("/nodes/{}", ROUTER_ID))))
        .and(body_json(json!({"x": 0, "y": -120})))
        .respond_with(ResponseTemplate::new(200).set_body_json(router_json()))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path(project_path(&format!("/nodes/{}", SWITCH_ID))))
        .and(body_json(json!({"x": 0, "y": 120})))
        .respond_with(ResponseTemplate::new(200).set_body_json(switch_json()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut lab = known_project(connector);
    lab.arrange_nodes_circular(120.0).await.unwrap();
}

#[tokio::test]
async fn test_drawings() {
    let (mock_server, connector) = setup().await;
    let drawing_id = "04901e4d-1b60-4b4a-8fe2-0a8d0d8f3c0a";
    let svg = RectangleSvg::default().to_svg();

    Mock::given(method("POST"))
        .and(path(project_path("/drawings")))
        .and(body_json(json!({"svg": svg, "locked": false, "x": 10, "y": 10, "z": 1})))
        .respond_with(ResponseTemplate::new(201).set_body_json(drawing_json()))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_get(
        &mock_server,
        &format!("/projects/{}/drawings", PROJECT_ID),
        json!([drawing_json()]),
    )
    .await;
    let mut moved = drawing_json();
    moved["x"] = json!(0);
    Mock::given(method("PUT"))
        .and(path(project_path(&format!("/drawings/{}", drawing_id))))
        .and(body_json(json!({
            "svg": "<svg height=\"100\" width=\"200\"></svg>",
            "locked": false,
            "x": 0,
            "y": -200,
            "z": 0
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(moved))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(project_path(&format!("/drawings/{}", drawing_id))))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut lab = known_project(connector);
    let created = lab.create_drawing(DrawingParams::new(svg.clone())).await.unwrap();
    assert_eq!(created.drawing_id, drawing_id);

    let updated = lab
        .update_drawing(
            drawing_id,
            DrawingUpdate {
                x: Some(0),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.x, 0);

    lab.delete_drawing(drawing_id).await.unwrap();
    assert!(lab.delete_drawing("unknown").await.is_err());
}

#[tokio::test]
async fn test_close_keeps_status_without_no_content() {
    let (mock_server, connector) = setup().await;
    Mock::given(method("POST"))
        .and(path(project_path("/close")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut lab = Project::new(
        connector,
        ProjectInfo {
            project_id: Some(PROJECT_ID.to_string()),
            status: Some(ProjectStatus::Opened),
            ..Default::default()
        },
    );
    lab.close().await.unwrap();
    assert_eq!(lab.status(), Some(ProjectStatus::Opened));
}

#[tokio::test]
async fn test_project_files() {
    let (mock_server, connector) = setup().await;
    let readme = "Lab for the OSPF training\n";

    Mock::given(method("GET"))
        .and(path(project_path("/files/README.txt")))
        .respond_with(ResponseTemplate::new(200).set_body_string(readme))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path(project_path("/files/README.txt")))
        .and(body_string(readme))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(project_path("/files/lab.gns3.backup")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xff, 0xfe, 0x00]))
        .mount(&mock_server)
        .await;

    let lab = known_project(connector.clone());
    assert_eq!(lab.get_file("/README.txt").await.unwrap(), readme);
    lab.write_file("README.txt", readme).await.unwrap();
    assert_eq!(
        lab.get_file_bytes("lab.gns3.backup").await.unwrap(),
        vec![0xff, 0xfe, 0x00]
    );

    let unsaved = Project::new(connector, ProjectInfo::named("lab"));
    assert!(unsaved.get_file("README.txt").await.is_err());
}

#[tokio::test]
async fn test_arrange_opens_closed_project() {
    let (mock_server, connector) = setup().await;
    let mut closed = project_json();
    closed["status"] = json!("closed");
    mount_get(&mock_server, &format!("/projects/{}", PROJECT_ID), closed).await;
    mount_get(
        &mock_server,
        &format!("/projects/{}/stats", PROJECT_ID),
        json!({"drawings": 0, "links": 0, "nodes": 1, "snapshots": 0}),
    )
    .await;
    mount_get(
        &mock_server,
        &format!("/projects/{}/nodes", PROJECT_ID),
        json!([router_json()]),
    )
    .await;
    mount_get(&mock_server, &format!("/projects/{}/links", PROJECT_ID), json!([])).await;

    Mock::given(method("POST"))
        .and(path(project_path("/open")))
        .respond_with(ResponseTemplate::new(201).set_body_json(project_json()))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path(project_path(&format!("/nodes/{}", ROUTER_ID))))
        .and(body_json(json!({"x": 0, "y": -250})))
        .respond_with(ResponseTemplate::new(200).set_body_json(router_json()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut lab = known_project(connector);
    lab.arrange_nodes_circular(250.0).await.unwrap();
    assert_eq!(lab.status(), Some(ProjectStatus::Opened));
}

#[tokio::test]
async fn test_arrange_without_nodes_is_a_no_op() {
    let (mock_server, connector) = setup().await;
    mount_get(&mock_server, &format!("/projects/{}", PROJECT_ID), project_json()).await;
    mount_get(
        &mock_server,
        &format!("/projects/{}/stats", PROJECT_ID),
        json!({"drawings": 0, "links": 0, "nodes": 0, "snapshots": 0}),
    )
    .await;
    mount_get(&mock_server, &format!("/projects/{}/nodes", PROJECT_ID), json!([])).await;
    mount_get(&mock_server, &format!("/projects/{}/links", PROJECT_ID), json!([])).await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut lab = known_project(connector.clone());
    lab.arrange_nodes_circular(100.0).await.unwrap();
    // project, stats, nodes, links
    assert_eq!(connector.api_calls(), 4);
}

#[tokio::test]
async fn test_delete_node() {
    let (mock_server, connector) = setup().await;
    mount_lab(&mock_server).await;
    Mock::given(method("DELETE"))
        .and(path(project_path(&format!("/nodes/{}", SWITCH_ID))))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut lab = known_project(connector);
    lab.delete_node(Lookup::Name("switch01")).await.unwrap();
    assert_eq!(lab.nodes().len(), 1);
    assert_eq!(lab.nodes()[0].name(), Some("router01"));

    assert!(matches!(
        lab.delete_node(Lookup::Name("switch01")).await,
        Err(Gns3Error::Validation {
            source: ValidationError::NotFound(_),
            ..
        })
    ));
}
