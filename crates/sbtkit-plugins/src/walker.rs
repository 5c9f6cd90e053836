//! Discovery of the build-metadata directories that need a plugin file.
//!
//! sbt builds are recursive: `project/` is itself an sbt build whose own
//! definition lives in `project/project/`, and so on. Each level that
//! contains `.sbt` sources of its own gets a meta build one level further
//! down, which also needs the plugin.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;

use sbtkit_fs::{NormalizedPath, SbtPath};

/// Collect every meta directory that should hold a generated plugin file.
///
/// The result always contains `project` and `project/project`. Starting
/// from `project`, each directory that exists and holds at least one `.sbt`
/// file other than the generated one adds its grand-child
/// `<dir>/project/project` and the walk continues in `<dir>/project`.
pub fn meta_directories(workspace: impl AsRef<Path>) -> BTreeSet<NormalizedPath> {
    let main_meta = NormalizedPath::new(workspace).join(SbtPath::ProjectDir);
    let mut dirs = BTreeSet::from([main_meta.clone(), main_meta.join(SbtPath::ProjectDir)]);

    let mut pending = vec![main_meta];
    let mut visited = HashSet::new();

    while let Some(dir) = pending.pop() {
        // Canonical paths stop symlink cycles such as `project/project -> ..`.
        let Ok(canonical) = fs::canonicalize(dir.to_native()) else {
            continue;
        };
        if !visited.insert(canonical) {
            continue;
        }
        if !has_build_sources(&dir) {
            continue;
        }

        let next = dir.join(SbtPath::ProjectDir);
        dirs.insert(next.join(SbtPath::ProjectDir));
        pending.push(next);
    }

    tracing::debug!(count = dirs.len(), "discovered meta directories");
    dirs
}

/// Whether `dir` contains an `.sbt` file that sbtkit did not generate.
///
/// Unreadable directories count as having no sources.
pub fn has_build_sources(dir: &NormalizedPath) -> bool {
    let Ok(entries) = fs::read_dir(dir.to_native()) else {
        return false;
    };

    entries.flatten().any(|entry| {
        let path = entry.path();
        let is_sbt = path.extension().is_some_and(|ext| ext == "sbt");
        let generated = path
            .file_name()
            .is_some_and(|name| name == SbtPath::PluginFile.as_str());
        is_sbt && !generated && path.is_file()
    })
}
