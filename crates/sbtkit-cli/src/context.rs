//! Per-invocation workspace and configuration.

use std::path::PathBuf;

use sbtkit_core::{ConfigResolver, SbtBuildTool, SbtConfig};

use crate::cli::Cli;
use crate::error::Result;

/// Everything a command needs: where to work and with which settings.
#[derive(Debug)]
pub struct Context {
    pub workspace: PathBuf,
    pub config: SbtConfig,
}

impl Context {
    /// Resolve configuration files, then apply command-line and
    /// environment overrides on top.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let workspace = match &cli.workspace {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        let mut resolver = ConfigResolver::new(&workspace);
        if let Some(file) = &cli.config {
            resolver = resolver.with_config_file(file);
        }
        let config = apply_overrides(resolver.resolve()?, cli);

        tracing::debug!(workspace = %workspace.display(), ?config, "resolved configuration");
        Ok(Self { workspace, config })
    }

    pub fn tool(&self) -> SbtBuildTool {
        SbtBuildTool::new(&self.workspace, self.config.clone())
    }
}

fn apply_overrides(mut config: SbtConfig, cli: &Cli) -> SbtConfig {
    if let Some(script) = &cli.sbt_script {
        config.sbt_script = Some(script.clone());
    }
    if let Some(opts) = &cli.java_opts {
        config
            .jvm_options
            .extend(opts.split_whitespace().map(String::from));
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn java_opts_extend_configured_options() {
        let cli = Cli::parse_from([
            "sbtkit",
            "--java-opts",
            "  -Xss4m   -Dfoo=bar ",
            "--sbt-script",
            "./sbt",
            "version",
        ]);
        let base = SbtConfig::default().with_jvm_options(["-Dconfigured=1"]);

        let config = apply_overrides(base, &cli);

        assert_eq!(config.jvm_options, vec!["-Dconfigured=1", "-Xss4m", "-Dfoo=bar"]);
        assert_eq!(config.sbt_script, Some(PathBuf::from("./sbt")));
    }
}
