//! Tera engine for the project skeleton.
//!
//! # Skeleton (embedded)
//!
//! | Template                        | Output (relative to project root) |
//! |---------------------------------|-----------------------------------|
//! | `app/package.json.tera`         | `app/package.json` (base manifest)|
//! | `app/www/index.html.tera`       | `app/www/index.html`              |
//! | `app/www/css/index.css.tera`    | `app/www/css/index.css`           |
//! | `app/www/js/index.js.tera`      | `app/www/js/index.js`             |
//!
//! A user template directory may override any of these by relative name and
//! add new ones; added templates outside `app/` are written under `app/`.
//! Files whose name starts with `_` are partials: available to
//! `{% include %}` but never written out.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tera::Tera;

use nwkit_core::layout;

use crate::context::TemplateContext;
use crate::error::{io_err, TemplateError};

// ---------------------------------------------------------------------------
// Embedded templates, baked in at compile time.
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    ("app/package.json.tera", include_str!("templates/app/package.json.tera")),
    ("app/www/index.html.tera", include_str!("templates/app/www/index.html.tera")),
    ("app/www/css/index.css.tera", include_str!("templates/app/www/css/index.css.tera")),
    ("app/www/js/index.js.tera", include_str!("templates/app/www/js/index.js.tera")),
];

/// Template whose output is merged with the descriptor instead of written verbatim.
pub const MANIFEST_TEMPLATE: &str = "app/package.json.tera";

const TEMPLATE_EXT: &str = ".tera";

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), TemplateError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn load_user_templates(dir: &Path) -> Result<Vec<(String, String)>, TemplateError> {
    if !dir.exists() {
        tracing::warn!(path = %dir.display(), "template directory not found, using embedded skeleton");
        return Ok(vec![]);
    }
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;
    let mut templates = Vec::new();
    for path in files {
        if path.extension().and_then(|s| s.to_str()) != Some("tera") {
            continue;
        }
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        tracing::debug!(template = %name, "loaded user template");
        templates.push((name, contents));
    }
    Ok(templates)
}

fn build_tera(user_template_dir: Option<&Path>) -> Result<Tera, TemplateError> {
    let mut templates: BTreeMap<String, String> = BTreeMap::new();
    for (name, content) in TPLS {
        templates.insert((*name).to_string(), (*content).to_string());
    }
    if let Some(dir) = user_template_dir {
        for (name, content) in load_user_templates(dir)? {
            templates.insert(name, content);
        }
    }

    let mut tera = Tera::default();
    tera.add_raw_templates(templates)?;
    Ok(tera)
}

fn is_partial(name: &str) -> bool {
    name.rsplit('/')
        .next()
        .is_some_and(|file| file.starts_with('_'))
}

/// Project-relative output path. Templates outside `app/` land under it.
fn output_path(name: &str) -> PathBuf {
    let rel = name.trim_end_matches(TEMPLATE_EXT);
    let mut path = PathBuf::new();
    let under_app = rel
        .strip_prefix(layout::APP_DIR)
        .is_some_and(|rest| rest.starts_with('/'));
    if !under_app {
        path.push(layout::APP_DIR);
    }
    path.extend(rel.split('/'));
    path
}

// ---------------------------------------------------------------------------
// SkeletonEngine
// ---------------------------------------------------------------------------

/// One rendered skeleton file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Template the content came from.
    pub template: String,
    /// Output path relative to the project root.
    pub path: PathBuf,
    pub content: String,
}

/// Tera-based engine rendering the skeleton with optional user overrides.
pub struct SkeletonEngine {
    tera: Tera,
}

impl SkeletonEngine {
    /// Load embedded templates plus any overrides found in `user_template_dir`.
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, TemplateError> {
        let tera = build_tera(user_template_dir)?;
        Ok(SkeletonEngine { tera })
    }

    /// Engine with the embedded skeleton only.
    pub fn embedded() -> Result<Self, TemplateError> {
        Self::new(None)
    }

    /// Render every non-partial template, sorted by template name.
    pub fn render(&self, ctx: &TemplateContext) -> Result<Vec<RenderedFile>, TemplateError> {
        let tera_ctx = ctx.to_tera_context()?;
        let mut names: Vec<&str> = self
            .tera
            .get_template_names()
            .filter(|name| name.ends_with(TEMPLATE_EXT) && !is_partial(name))
            .collect();
        names.sort_unstable();

        let mut results = Vec::with_capacity(names.len());
        for name in names {
            let content = self.tera.render(name, &tera_ctx)?;
            results.push(RenderedFile {
                template: name.to_string(),
                path: output_path(name),
                content: content.replace("\r\n", "\n"),
            });
        }
        Ok(results)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
