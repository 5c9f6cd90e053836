//! Per-workspace option files.

use std::path::Path;

use sbtkit_fs::{NormalizedPath, SbtPath, io};

use crate::error::Result;

/// Option files read, in this order.
pub const OPTION_FILES: [SbtPath; 2] = [SbtPath::JvmOpts, SbtPath::SbtOpts];

/// Arguments from `.jvmopts` then `.sbtopts`.
///
/// Each non-empty trimmed line is one argument. Missing files contribute
/// nothing.
pub fn option_file_args(workspace: impl AsRef<Path>) -> Result<Vec<String>> {
    let workspace = NormalizedPath::new(workspace);
    let mut args = Vec::new();

    for file in OPTION_FILES {
        let path = workspace.join(file);
        if let Some(text) = io::read_text_opt(&path)? {
            let before = args.len();
            args.extend(
                text.lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(String::from),
            );
            tracing::debug!(path = %path, count = args.len() - before, "read option file");
        }
    }

    Ok(args)
}
