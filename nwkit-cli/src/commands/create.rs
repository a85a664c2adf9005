//! `create <path> <packageId> <projectName> [--runtime-dir DIR] [--template-dir DIR]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use colored::Colorize;

use nwkit_core::{PackageId, ProjectName};
use nwkit_sync::Lifecycle;
use nwkit_template::{Materializer, SkeletonEngine};

use super::{load_settings, runtime_synchronizer};
use crate::Invocation;

/// Create a new node-webkit project.
#[derive(Parser, Debug)]
#[command(name = "create", disable_help_flag = true)]
pub struct CreateArgs {
    /// Directory to create. Must not exist yet.
    pub path: PathBuf,

    /// Reverse-domain package id (e.g. "com.example.app").
    pub package_id: PackageId,

    /// Human-readable project name; also the window title.
    pub project_name: ProjectName,

    /// Directory holding `cordova-lib/cordova.js`. Defaults to the bundled copy.
    #[arg(long, env = "NWKIT_RUNTIME_DIR", value_name = "DIR")]
    pub runtime_dir: Option<PathBuf>,

    /// Directory of `.tera` files overriding or extending the skeleton.
    #[arg(long, env = "NWKIT_TEMPLATE_DIR", value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    /// Print usage and exit.
    #[arg(long, short = 'h', action = ArgAction::SetTrue)]
    pub help: bool,
}

impl Invocation for CreateArgs {
    fn help_requested(&self) -> bool {
        self.help
    }

    fn run(self) -> Result<()> {
        let settings = load_settings()?;

        let template_dir = self.template_dir.or_else(|| settings.template_dir.clone());
        let engine = SkeletonEngine::new(template_dir.as_deref()).with_context(|| {
            match &template_dir {
                Some(dir) => format!("failed to load templates from '{}'", dir.display()),
                None => "failed to load the built-in skeleton".to_string(),
            }
        })?;

        let lifecycle = Lifecycle::new(
            Materializer::new(engine),
            runtime_synchronizer(self.runtime_dir, &settings),
        );

        let outcome = lifecycle.create(&self.path, self.package_id, self.project_name)?;

        println!(
            "{} Created '{}' ({}) at {}",
            "✓".green(),
            outcome.descriptor.name,
            outcome.descriptor.package_id,
            outcome.root.display()
        );
        Ok(())
    }
}
