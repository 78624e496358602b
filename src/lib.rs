//! # tenable-io
//!
//! A Rust client for the Tenable.io vulnerability management REST API.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Errors, network constants, parameter validation
//! 2. **Auth**: API key credentials and the `X-ApiKeys` header
//! 3. **Session**: `TioSession` with auth injection, retry/backoff and request correlation
//! 4. **Domain**: Thin per-resource sub-clients (scans, folders, agents, ...)
//! 5. **High-Level Client**: `TenableIo` with nested sub-client accessors and caching
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tenable_io::prelude::*;
//!
//! let tio = TenableIo::new("ACCESS_KEY", "SECRET_KEY")?;
//!
//! let folders = tio.folders().list().await?;
//! let scans = tio.scans().list(None, None).await?;
//!
//! // Raw calls go straight through the session (status checking + retries only).
//! let status: serde_json::Value = tio.get("server/status").await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Unified SDK error types.
pub mod error;

/// Network URL, header and default constants.
pub mod network;

/// Parameter checks shared by the domain sub-clients.
pub mod validation;

/// Shared helpers: path encoding, serde adapters.
pub mod shared;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// API key credentials.
pub mod auth;

// ── Layer 3: Session ─────────────────────────────────────────────────────────

/// HTTP session with retry policies and request correlation.
pub mod http;

// ── Layer 4: Domain ──────────────────────────────────────────────────────────

/// Per-resource sub-clients and their wire types.
pub mod domain;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `TenableIo`: the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Entry point + sub-clients
    pub use crate::client::{
        AgentGroupsClient, AgentsClient, AssetsClient, AuditLogClient, FoldersClient,
        ScannersClient, ScansClient, ServerClient, SessionClient, TenableIo, TenableIoBuilder,
        UsersClient,
    };

    // Auth
    pub use crate::auth::ApiKeys;

    // Session
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
    pub use crate::http::TioSession;

    // Domain types
    pub use crate::domain::agents::{Agent, AgentFilter, AgentListParams, AgentPage, Pagination};
    pub use crate::domain::assets::{Asset, AssetImport};
    pub use crate::domain::audit_log::{AuditEvent, EventFilter};
    pub use crate::domain::folders::{Folder, FolderType};
    pub use crate::domain::scans::{Scan, ScanCreate, ScanStatus};
    pub use crate::domain::server::{ServerProperties, ServerStatus};
    pub use crate::domain::session::SessionDetails;
    pub use crate::domain::users::{PermissionLevel, User, UserCreate};

    // Errors
    pub use crate::error::{AuthError, HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;
}
