//! Project descriptor and its `app/package.json` encoding.
//!
//! The manifest is plain JSON so the desktop shell can read it directly:
//!
//! ```json
//! {
//!   "name": "projName",
//!   "id": "com.example.app",
//!   "main": "www/index.html",
//!   "window": { "title": "projName" }
//! }
//! ```
//!
//! Only `name`, `id`, `main` and `window.title` are owned by nwkit. Every
//! other key comes from the skeleton's base manifest and is kept as-is.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ProjectError;
use crate::layout::MAIN_ENTRY;
use crate::types::{PackageId, ProjectName};

/// Identity of a project as persisted in its manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDescriptor {
    pub name: ProjectName,
    pub package_id: PackageId,
    pub window_title: String,
    /// Always [`MAIN_ENTRY`] for descriptors built by nwkit.
    pub main_entry: String,
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    name: ProjectName,
    id: PackageId,
    main: String,
    window: RawWindow,
}

#[derive(Debug, Deserialize)]
struct RawWindow {
    title: String,
}

impl ProjectDescriptor {
    pub fn build(name: ProjectName, package_id: PackageId, window_title: impl Into<String>) -> Self {
        Self {
            name,
            package_id,
            window_title: window_title.into(),
            main_entry: MAIN_ENTRY.to_string(),
        }
    }

    /// The nwkit-owned keys as a JSON object.
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "name": self.name.as_str(),
            "id": self.package_id.as_str(),
            "main": self.main_entry,
            "window": { "title": self.window_title },
        })
    }

    /// Inject the nwkit-owned keys into `base`, keeping every other key.
    ///
    /// `base` must be a JSON object, and its `window` key (if present) must
    /// be an object too.
    pub fn merge_into(&self, base: Value) -> Result<Value, ProjectError> {
        let Value::Object(mut root) = base else {
            return Err(ProjectError::ManifestShape(
                "base manifest must be a JSON object".to_string(),
            ));
        };

        root.insert("name".into(), Value::from(self.name.as_str()));
        root.insert("id".into(), Value::from(self.package_id.as_str()));
        root.insert("main".into(), Value::from(self.main_entry.as_str()));

        let window = root
            .entry("window")
            .or_insert_with(|| Value::Object(Map::new()));
        let Value::Object(window) = window else {
            return Err(ProjectError::ManifestShape(
                "`window` must be a JSON object".to_string(),
            ));
        };
        window.insert("title".into(), Value::from(self.window_title.as_str()));

        Ok(Value::Object(root))
    }

    /// Manifest bytes with only the nwkit-owned keys.
    pub fn serialize(&self) -> Result<Vec<u8>, ProjectError> {
        to_bytes(&self.to_json())
    }

    /// Manifest bytes for `base` with the nwkit-owned keys merged in.
    pub fn serialize_onto(&self, base: Value) -> Result<Vec<u8>, ProjectError> {
        to_bytes(&self.merge_into(base)?)
    }

    /// Read the nwkit-owned keys back out of manifest bytes.
    pub fn parse(bytes: &[u8]) -> Result<Self, ProjectError> {
        let raw: RawManifest = serde_json::from_slice(bytes)?;
        Ok(Self {
            name: raw.name,
            package_id: raw.id,
            window_title: raw.window.title,
            main_entry: raw.main,
        })
    }
}

/// Pretty JSON with a trailing newline.
fn to_bytes(value: &Value) -> Result<Vec<u8>, ProjectError> {
    let mut bytes = serde_json::to_vec_pretty(value)?;
    bytes.push(b'\n');
    Ok(bytes)
}
