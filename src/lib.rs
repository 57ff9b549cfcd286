//! Guardsmith - multi-guard authentication scaffolding generator
//!
//! Guardsmith derives the naming and path conventions for a named auth guard
//! and password broker, then materializes a library of controller, request,
//! middleware and route stubs into a Laravel project tree with the
//! guard-specific identifiers substituted in.

pub mod auth_config;
pub mod error;
pub mod fs;
pub mod naming;
pub mod paths;
pub mod resolver;
pub mod scaffold;
pub mod stubs;
pub mod template;

// Re-exports for convenience
pub use auth_config::AuthConfig;
pub use error::{GuardsmithError, GuardsmithResult};
pub use fs::{FileSystem, LocalFs};
pub use naming::{derive_plan, NamingPlan, DEFAULT_GUARD};
pub use paths::ProjectPaths;
pub use resolver::{resolve, GuardIdentity, ResolvedModel};
pub use scaffold::{FeatureSet, Scaffolder, WriteReport};
pub use stubs::{DirStubs, EmbeddedStubs, TemplateSource};
pub use template::{substitute, token_map, TOKENS};
