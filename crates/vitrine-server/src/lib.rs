//! Artifact store service.
//!
//! Accepts create/update requests, delegates to the renderer, serves the
//! produced documents as static pages, and lists known artifacts by
//! scanning storage. The filesystem is the single source of truth; no
//! separate index is maintained.

pub mod routes;
pub mod server;
pub mod store;

pub use routes::{api_router, AppState};
pub use server::{ArtifactServer, ArtifactServerConfig, ServerError};
pub use store::{ArtifactEntry, ArtifactStore, StoredArtifact, ARTIFACTS_PREFIX};
