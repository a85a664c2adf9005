//! nwkit core library: project identity, manifest, layout and path checks.
//!
//! - [`types`]: validated newtypes ([`ProjectName`], [`PackageId`])
//! - [`manifest`]: [`ProjectDescriptor`] and `package.json` encoding
//! - [`layout`]: fixed project and runtime-library paths
//! - [`validate`]: `can_create` / `can_update`
//! - [`settings`]: `~/.nwkit/config.yaml`
//! - [`error`]: [`ProjectError`]

pub mod error;
pub mod layout;
pub mod manifest;
pub mod settings;
pub mod types;
pub mod validate;

pub use error::ProjectError;
pub use manifest::ProjectDescriptor;
pub use settings::Settings;
pub use types::{PackageId, ProjectName};
