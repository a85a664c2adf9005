//! Template context: serializable rendering payload built from a [`ProjectDescriptor`].

use serde::{Deserialize, Serialize};

use nwkit_core::{layout, ProjectDescriptor};

use crate::error::TemplateError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateContext {
    pub name: String,
    pub package_id: String,
    pub window_title: String,
    pub main_entry: String,
    /// File name of the runtime bootstrap script, relative to `www/`.
    pub runtime_asset: String,
    pub nwkit_version: String,
}

impl TemplateContext {
    pub fn from_descriptor(descriptor: &ProjectDescriptor) -> Self {
        TemplateContext {
            name: descriptor.name.to_string(),
            package_id: descriptor.package_id.to_string(),
            window_title: descriptor.window_title.clone(),
            main_entry: descriptor.main_entry.clone(),
            runtime_asset: layout::RUNTIME_ASSET.to_string(),
            nwkit_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, TemplateError> {
        tera::Context::from_serialize(self).map_err(TemplateError::from)
    }
}
