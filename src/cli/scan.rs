use anyhow::{Context, Result};
use colored::Colorize;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{report, LoadSummary};
use crate::manager::PresetFactoryManager;
use crate::url::extension_of;

/// Walk `path` (respecting .gitignore) and load every file whose extension
/// the registry handles.
pub fn scan(manager: &PresetFactoryManager, path: &Path) -> Result<LoadSummary> {
    let files = collect_presets(manager, path)?;
    println!(
        "{} {} preset(s) under {}",
        "Scanning".green().bold(),
        files.len(),
        path.display()
    );

    // Walked paths are loaded as paths; they never go back through URL parsing.
    let mut summary = LoadSummary::default();
    for file in &files {
        debug!(path = %file.display(), "loading preset");
        let result = manager.create_preset_from_path(file);
        report(&mut summary, &file.display().to_string(), result);
    }
    Ok(summary)
}

fn is_handled(manager: &PresetFactoryManager, path: &Path) -> bool {
    extension_of(path).is_some_and(|ext| manager.extension_handled(&ext))
}

pub fn collect_presets(manager: &PresetFactoryManager, path: &Path) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }
    if path.is_file() {
        if !is_handled(manager, path) {
            return Ok(Vec::new());
        }
        let canonical = path
            .canonicalize()
            .with_context(|| format!("Failed to resolve {}", path.display()))?;
        return Ok(vec![canonical]);
    }

    let walker = WalkBuilder::new(path).standard_filters(true).build();

    let mut files: Vec<PathBuf> = walker
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .filter(|entry| is_handled(manager, entry.path()))
        .map(|entry| entry.into_path())
        .collect();
    files.sort();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn manager() -> PresetFactoryManager {
        let mut m = PresetFactoryManager::new();
        m.initialize(32, 24);
        m
    }

    #[test]
    fn collects_only_handled_extensions() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("pack");
        fs::create_dir_all(&nested).unwrap();
        fs::write(tmp.path().join("a.milk"), "zoom=1\n").unwrap();
        fs::write(nested.join("b.PRJM"), "zoom=1\n").unwrap();
        fs::write(nested.join("readme.txt"), "hello").unwrap();

        let files = collect_presets(&manager(), tmp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"a.milk".to_string()));
        assert!(names.contains(&"b.PRJM".to_string()));
    }

    #[test]
    fn scan_reports_parse_failures() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("good.milk"), "zoom=1\n").unwrap();
        fs::write(tmp.path().join("bad.milk"), "no assignment here\n").unwrap();

        let summary = scan(&manager(), tmp.path()).unwrap();
        assert_eq!(summary, LoadSummary { loaded: 1, failed: 1 });
    }

    #[test]
    fn missing_directory_is_an_error() {
        let tmp = TempDir::new().unwrap();
        assert!(collect_presets(&manager(), &tmp.path().join("nope")).is_err());
    }

    #[test]
    fn single_file_with_unhandled_extension_is_skipped() {
        let tmp = TempDir::new().unwrap();
        let notes = tmp.path().join("notes.txt");
        let preset = tmp.path().join("a.milk");
        fs::write(&notes, "hello").unwrap();
        fs::write(&preset, "zoom=1\n").unwrap();

        assert!(collect_presets(&manager(), &notes).unwrap().is_empty());
        assert_eq!(collect_presets(&manager(), &preset).unwrap().len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn scan_loads_presets_under_non_utf8_directory() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = TempDir::new().unwrap();
        let pack = tmp.path().join(OsStr::from_bytes(b"pack\xff"));
        fs::create_dir_all(&pack).unwrap();
        fs::write(pack.join("a.milk"), "[preset00]\nzoom=1\n").unwrap();

        let summary = scan(&manager(), tmp.path()).unwrap();
        assert_eq!(summary, LoadSummary { loaded: 1, failed: 0 });
    }
}
