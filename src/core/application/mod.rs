//! Resource objects mirroring the server's projects, nodes and links, and
//! the connector calls that work on raw server resources.

mod connector;
pub mod link;
pub mod node;
pub mod project;
