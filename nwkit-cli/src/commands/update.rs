//! `update <path> [--runtime-dir DIR]`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{ArgAction, Parser};
use colored::Colorize;

use nwkit_core::{layout, ProjectDescriptor};
use nwkit_sync::{lifecycle, WriteResult};

use super::{load_settings, runtime_synchronizer};
use crate::Invocation;

/// Refresh the runtime asset of an existing project.
#[derive(Parser, Debug)]
#[command(name = "update", disable_help_flag = true)]
pub struct UpdateArgs {
    /// Root of a project made by `create`.
    pub path: PathBuf,

    /// Directory holding `cordova-lib/cordova.js`. Defaults to the bundled copy.
    #[arg(long, env = "NWKIT_RUNTIME_DIR", value_name = "DIR")]
    pub runtime_dir: Option<PathBuf>,

    /// Print usage and exit.
    #[arg(long, short = 'h', action = ArgAction::SetTrue)]
    pub help: bool,
}

impl Invocation for UpdateArgs {
    fn help_requested(&self) -> bool {
        self.help
    }

    fn run(self) -> Result<()> {
        let settings = load_settings()?;
        let synchronizer = runtime_synchronizer(self.runtime_dir, &settings);

        let result = lifecycle::update(&synchronizer, &self.path)?;
        let label = display_name(&self.path);
        match result {
            WriteResult::Written { path } => {
                println!("{} {}: written {}", "✓".green(), label, path.display())
            }
            WriteResult::Unchanged { path } => {
                println!("{} {}: unchanged {}", "·".dimmed(), label, path.display())
            }
        }
        Ok(())
    }
}

/// Name from the manifest when it parses, else the directory name.
fn display_name(root: &Path) -> String {
    let from_manifest = fs::read(layout::manifest_path(root))
        .ok()
        .and_then(|bytes| ProjectDescriptor::parse(&bytes).ok())
        .map(|descriptor| descriptor.name.to_string());

    from_manifest.unwrap_or_else(|| {
        root.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string())
    })
}
