//! Construction of the sbt command lines for bloop export and BSP.
//!
//! The produced argument vectors are handed to whoever spawns sbt; nothing
//! here starts a process.

use std::path::{Path, PathBuf};

use sbtkit_plugins::{Error as PluginsError, LegacyCleaner, ensure_plugins_written};
use sbtkit_version::{RECOMMENDED_VERSION, ToolVersion};

use crate::config::SbtConfig;
use crate::error::Result;
use crate::options::option_file_args;

/// JVM flags passed on every launcher invocation.
pub const DIAGNOSTIC_FLAGS: [&str; 4] = [
    "-Xms100m",
    "-Xmx2G",
    "-XX:+UseG1GC",
    "-Dfile.encoding=UTF-8",
];

/// Exports the build to bloop, including source jars.
pub const INSTALL_SUBCOMMAND: [&str; 2] =
    ["-Dbloop.export-jar-classifiers=sources", "bloopInstall"];

/// Writes `.bsp/sbt.json` so clients can discover sbt's BSP server.
pub const BSP_SUBCOMMAND: [&str; 1] = ["bspConfig"];

/// Builds sbt invocations for one workspace.
#[derive(Debug, Clone)]
pub struct CommandBuilder<'a> {
    workspace: PathBuf,
    config: &'a SbtConfig,
}

impl<'a> CommandBuilder<'a> {
    pub fn new(workspace: impl AsRef<Path>, config: &'a SbtConfig) -> Self {
        Self {
            workspace: workspace.as_ref().to_path_buf(),
            config,
        }
    }

    /// `<java_home>/bin/java`, or `java` resolved through `PATH`.
    pub fn java_executable(&self) -> String {
        match &self.config.java_home {
            Some(home) => home.join("bin").join("java").display().to_string(),
            None => "java".to_string(),
        }
    }

    /// The full argument list for `subcommand`, without side effects.
    ///
    /// A configured script replaces everything before the subcommand.
    /// Otherwise the launcher jar is run directly, pinning
    /// [`RECOMMENDED_VERSION`] only when the workspace pins nothing.
    pub fn desired_args(
        &self,
        version: Option<&ToolVersion>,
        subcommand: &[&str],
    ) -> Result<Vec<String>> {
        if let Some(script) = &self.config.sbt_script {
            let mut args = vec![script.display().to_string()];
            args.extend(subcommand.iter().map(|s| s.to_string()));
            return Ok(args);
        }

        let mut args = vec![self.java_executable()];
        args.extend(DIAGNOSTIC_FLAGS.iter().map(|s| s.to_string()));
        args.extend(self.config.jvm_options.iter().cloned());
        if version.is_none() {
            args.push(format!("-Dsbt.version={RECOMMENDED_VERSION}"));
        }
        args.extend(option_file_args(&self.workspace)?);
        args.push("-jar".to_string());
        args.push(self.config.launcher_jar_or_default().display().to_string());
        args.extend(subcommand.iter().map(|s| s.to_string()));
        Ok(args)
    }

    pub fn desired_install_args(&self, version: Option<&ToolVersion>) -> Result<Vec<String>> {
        self.desired_args(version, &INSTALL_SUBCOMMAND)
    }

    pub fn desired_bsp_args(&self, version: Option<&ToolVersion>) -> Result<Vec<String>> {
        self.desired_args(version, &BSP_SUBCOMMAND)
    }

    /// Arguments for `bloopInstall`, after priming the workspace for it.
    ///
    /// Removes the legacy global plugin and then writes the per-workspace
    /// plugin descriptors, whichever form the command takes. A failed
    /// descriptor write aborts with an error.
    pub fn build_install_args(&self, version: Option<&ToolVersion>) -> Result<Vec<String>> {
        let args = self.desired_install_args(version)?;

        let bucket_version = version
            .map(ToolVersion::as_str)
            .unwrap_or(RECOMMENDED_VERSION);
        self.remove_legacy_plugin(bucket_version);

        ensure_plugins_written(
            &self.workspace,
            &self.config.plugin_version,
            self.config.plugins_installed,
        )?;

        Ok(args)
    }

    /// Arguments for `bspConfig`. Never touches the filesystem beyond
    /// reading option files.
    pub fn build_bsp_args(&self, version: Option<&ToolVersion>) -> Result<Vec<String>> {
        self.desired_bsp_args(version)
    }

    fn remove_legacy_plugin(&self, version: &str) {
        match LegacyCleaner::for_current_user(self.config.home_dir.as_deref()) {
            Ok(cleaner) => {
                cleaner.remove_legacy_global_plugin(version);
            }
            Err(PluginsError::HomeDirNotFound) => {
                tracing::warn!("home directory unknown, skipping legacy plugin cleanup");
            }
            Err(e) => tracing::warn!(error = %e, "skipping legacy plugin cleanup"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn config() -> SbtConfig {
        SbtConfig::default().with_launcher_jar("/opt/sbt/sbt-launch.jar")
    }

    #[test]
    fn java_from_java_home() {
        let config = config().with_java_home("/opt/jdk17");
        let builder = CommandBuilder::new("/ws", &config);
        assert_eq!(builder.java_executable(), "/opt/jdk17/bin/java");
    }

    #[test]
    fn java_from_path_by_default() {
        let config = config();
        assert_eq!(CommandBuilder::new("/ws", &config).java_executable(), "java");
    }

    #[test]
    fn full_install_command_without_version() {
        let temp = TempDir::new().unwrap();
        let config = config().with_jvm_options(["-Dhttp.proxyHost=proxy"]);

        let args = CommandBuilder::new(temp.path(), &config)
            .desired_install_args(None)
            .unwrap();

        assert_eq!(
            args,
            vec![
                "java",
                "-Xms100m",
                "-Xmx2G",
                "-XX:+UseG1GC",
                "-Dfile.encoding=UTF-8",
                "-Dhttp.proxyHost=proxy",
                "-Dsbt.version=1.9.9",
                "-jar",
                "/opt/sbt/sbt-launch.jar",
                "-Dbloop.export-jar-classifiers=sources",
                "bloopInstall",
            ]
        );
    }

    #[test]
    fn script_override_for_bsp() {
        let config = config().with_sbt_script("/usr/local/bin/sbt");
        let args = CommandBuilder::new("/ws", &config)
            .desired_bsp_args(None)
            .unwrap();
        assert_eq!(args, vec!["/usr/local/bin/sbt", "bspConfig"]);
    }
}
