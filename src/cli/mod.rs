mod scan;

pub use scan::{collect_presets, scan};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{debug, warn};

use crate::config::LoaderConfig;
use crate::error::Result as LoadResult;
use crate::manager::PresetFactoryManager;
use crate::preset::Preset;

#[derive(Parser)]
#[command(
    name = "preset-loader",
    about = "Load visual presets through the extension-keyed factory registry",
    version,
    author
)]
pub struct Cli {
    /// Mesh width presets are built against (overrides .presetrc.json)
    #[arg(long, global = true)]
    pub mesh_width: Option<u32>,

    /// Mesh height presets are built against (overrides .presetrc.json)
    #[arg(long, global = true)]
    pub mesh_height: Option<u32>,

    /// Log registry and load activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the preset extensions the registry handles
    Extensions,

    /// Load presets from paths or file:// / idle:// URLs
    Load {
        /// Paths or URLs to load
        #[arg(required = true)]
        targets: Vec<String>,
    },

    /// Load every preset with a handled extension under a directory
    Scan {
        /// Directory to walk (defaults to preset_dir from config, then ".")
        path: Option<String>,
    },
}

/// Outcome counts for a batch of loads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub failed: usize,
}

impl LoadSummary {
    pub fn ensure_success(&self) -> Result<()> {
        if self.failed > 0 {
            bail!(
                "{} of {} preset(s) failed to load",
                self.failed,
                self.loaded + self.failed
            );
        }
        Ok(())
    }
}

/// Build an initialized manager from config plus command-line overrides.
pub fn build_manager(
    config: &LoaderConfig,
    mesh_width: Option<u32>,
    mesh_height: Option<u32>,
) -> PresetFactoryManager {
    let configured = config.mesh_size();
    let width = mesh_width.unwrap_or(configured.width);
    let height = mesh_height.unwrap_or(configured.height);
    debug!(width, height, "initializing preset factories");

    let mut manager = PresetFactoryManager::new();
    manager.initialize(width, height);
    manager
}

pub fn extensions(manager: &PresetFactoryManager) -> Result<Vec<String>> {
    let tags = manager.extensions_handled()?;
    println!("{}", "Handled extensions:".yellow().bold());
    for tag in &tags {
        println!("  .{}", tag);
    }
    Ok(tags)
}

pub fn load(manager: &PresetFactoryManager, targets: &[String]) -> LoadSummary {
    let mut summary = LoadSummary::default();
    for location in targets {
        debug!(%location, "loading preset");
        let result = manager.create_preset_from_file(location);
        report(&mut summary, location, result);
    }
    summary
}

fn report(summary: &mut LoadSummary, location: &str, result: LoadResult<Box<dyn Preset>>) {
    match result {
        Ok(preset) => {
            summary.loaded += 1;
            print_loaded(location, preset.as_ref());
        }
        Err(e) => {
            summary.failed += 1;
            warn!(%location, error = %e, "preset failed to load");
            println!("  {} {}: {}", "✗".red(), location, e);
        }
    }
}

fn print_loaded(target: &str, preset: &dyn Preset) {
    println!(
        "  {} {} ({}, mesh {}, {} parameter(s))",
        "✓".green(),
        target,
        preset.name().cyan(),
        preset.mesh_size(),
        preset.parameter_count()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn manager() -> PresetFactoryManager {
        build_manager(&LoaderConfig::default(), None, Some(16))
    }

    #[test]
    fn build_manager_prefers_overrides() {
        let m = manager();
        assert_eq!(m.mesh_size().unwrap(), crate::MeshSize::new(32, 16));
    }

    #[test]
    fn build_manager_falls_back_to_config_mesh() {
        let config = LoaderConfig {
            mesh_width: 64,
            mesh_height: 48,
            preset_dir: None,
        };
        let m = build_manager(&config, None, None);
        assert_eq!(m.mesh_size().unwrap(), config.mesh_size());
    }

    #[test]
    fn load_counts_successes_and_failures() {
        let tmp = TempDir::new().unwrap();
        let good = tmp.path().join("good.milk");
        fs::write(&good, "[preset00]\nzoom=1.0\n").unwrap();

        let targets = vec![
            good.to_str().unwrap().to_string(),
            "idle://".to_string(),
            "ftp://host/x.milk".to_string(),
        ];
        let summary = load(&manager(), &targets);
        assert_eq!(summary, LoadSummary { loaded: 2, failed: 1 });
        assert!(summary.ensure_success().is_err());
    }

    #[test]
    fn extensions_lists_builtin_tags() {
        assert_eq!(extensions(&manager()).unwrap(), vec!["milk", "prjm"]);
    }
}
