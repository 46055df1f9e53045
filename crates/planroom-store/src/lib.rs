//! # planroom-store
//!
//! In-memory implementations of the Planroom collaborator traits, plus a
//! JSON project-manifest loader. Used by the CLI and by integration
//! tests; production deployments substitute an HTTP-backed store.

pub mod manifest;
pub mod memory;

pub use manifest::ProjectManifest;
pub use memory::{MemoryProjectStore, MemoryUiStateStore};
