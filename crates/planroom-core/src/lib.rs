//! # planroom-core
//!
//! Core crate for Planroom. Contains collaborator traits, configuration
//! schemas, typed identifiers, the canonical folder-path grammar, domain
//! events, filter types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Planroom crates.

pub mod config;
pub mod error;
pub mod events;
pub mod keys;
pub mod path;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
