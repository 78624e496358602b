//! Domain modules organized as vertical slices, one per API resource area.
//!
//! Each sub-module contains:
//! - `mod.rs`: Wire types and request payloads for the resource
//! - `client.rs`: Sub-client mapping methods onto REST paths and verbs
//!
//! Sub-clients validate parameters lightly and unwrap list envelopes
//! (`{"folders": [...]}` → `Vec<Folder>`); everything else is passed through.

pub mod agent_groups;
pub mod agents;
pub mod assets;
pub mod audit_log;
pub mod folders;
pub mod scanners;
pub mod scans;
pub mod server;
pub mod session;
pub mod users;
