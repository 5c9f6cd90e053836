//! User configuration and its layered resolution.
//!
//! Every operation receives an explicit [`SbtConfig`]; nothing reads
//! process-wide settings behind the caller's back.
//!
//! [`ConfigResolver`] builds one from up to three files, later layers
//! overriding earlier ones field by field:
//! 1. Global (`<config_dir>/sbtkit/config.toml`)
//! 2. Workspace (`<workspace>/.sbtkit/config.toml`)
//! 3. An explicit file given by the caller (any supported format)

use std::path::{Path, PathBuf};

use sbtkit_fs::{ConfigStore, NormalizedPath, SbtPath};
use sbtkit_plugins::DEFAULT_PLUGIN_VERSION;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Effective settings for one workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SbtConfig {
    /// Script to run instead of the bundled launcher.
    pub sbt_script: Option<PathBuf>,
    /// sbt-bloop version written into generated plugin files.
    pub plugin_version: String,
    /// The user manages the bloop plugin themselves.
    pub plugins_installed: bool,
    /// JDK used to run the launcher; `java` from `PATH` otherwise.
    pub java_home: Option<PathBuf>,
    /// Extra JVM options, typically from `JAVA_OPTS`.
    pub jvm_options: Vec<String>,
    /// Location of the sbt launcher jar.
    pub launcher_jar: Option<PathBuf>,
    /// Home directory used for legacy cleanup.
    pub home_dir: Option<PathBuf>,
    /// sbt version to assume instead of reading `build.properties`.
    pub sbt_version: Option<String>,
}

impl Default for SbtConfig {
    fn default() -> Self {
        Self {
            sbt_script: None,
            plugin_version: DEFAULT_PLUGIN_VERSION.to_string(),
            plugins_installed: false,
            java_home: None,
            jvm_options: Vec::new(),
            launcher_jar: None,
            home_dir: None,
            sbt_version: None,
        }
    }
}

impl SbtConfig {
    pub fn with_sbt_script(mut self, script: impl Into<PathBuf>) -> Self {
        self.sbt_script = Some(script.into());
        self
    }

    pub fn with_plugin_version(mut self, version: impl Into<String>) -> Self {
        self.plugin_version = version.into();
        self
    }

    pub fn with_plugins_installed(mut self, installed: bool) -> Self {
        self.plugins_installed = installed;
        self
    }

    pub fn with_java_home(mut self, java_home: impl Into<PathBuf>) -> Self {
        self.java_home = Some(java_home.into());
        self
    }

    pub fn with_jvm_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.jvm_options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_launcher_jar(mut self, jar: impl Into<PathBuf>) -> Self {
        self.launcher_jar = Some(jar.into());
        self
    }

    pub fn with_home_dir(mut self, home: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(home.into());
        self
    }

    pub fn with_sbt_version(mut self, version: impl Into<String>) -> Self {
        self.sbt_version = Some(version.into());
        self
    }

    /// The launcher jar, defaulting to `<data_dir>/sbtkit/sbt-launch.jar`.
    pub fn launcher_jar_or_default(&self) -> PathBuf {
        if let Some(jar) = &self.launcher_jar {
            return jar.clone();
        }
        dirs::data_dir()
            .map(|d| d.join("sbtkit"))
            .unwrap_or_else(|| PathBuf::from(".sbtkit"))
            .join("sbt-launch.jar")
    }

    /// Overlay every field `layer` sets.
    pub fn merge(&mut self, layer: ConfigLayer) {
        let ConfigLayer {
            sbt_script,
            plugin_version,
            plugins_installed,
            java_home,
            jvm_options,
            launcher_jar,
            home_dir,
            sbt_version,
        } = layer;

        if sbt_script.is_some() {
            self.sbt_script = sbt_script;
        }
        if let Some(version) = plugin_version {
            self.plugin_version = version;
        }
        if let Some(installed) = plugins_installed {
            self.plugins_installed = installed;
        }
        if java_home.is_some() {
            self.java_home = java_home;
        }
        if let Some(options) = jvm_options {
            self.jvm_options = options;
        }
        if launcher_jar.is_some() {
            self.launcher_jar = launcher_jar;
        }
        if home_dir.is_some() {
            self.home_dir = home_dir;
        }
        if sbt_version.is_some() {
            self.sbt_version = sbt_version;
        }
    }
}

/// One configuration file: only the fields it mentions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
    pub sbt_script: Option<PathBuf>,
    pub plugin_version: Option<String>,
    pub plugins_installed: Option<bool>,
    pub java_home: Option<PathBuf>,
    pub jvm_options: Option<Vec<String>>,
    pub launcher_jar: Option<PathBuf>,
    pub home_dir: Option<PathBuf>,
    pub sbt_version: Option<String>,
}

impl ConfigLayer {
    fn validate(&self, path: &NormalizedPath) -> Result<()> {
        if self
            .plugin_version
            .as_deref()
            .is_some_and(|v| v.trim().is_empty())
        {
            return Err(Error::InvalidConfig {
                path: path.to_native(),
                message: "plugin_version must not be empty".to_string(),
            });
        }
        if self
            .sbt_script
            .as_deref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(Error::InvalidConfig {
                path: path.to_native(),
                message: "sbt_script must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Resolves [`SbtConfig`] for a workspace from its configuration files.
pub struct ConfigResolver {
    workspace: NormalizedPath,
    /// Override for the global config directory, mainly for tests.
    global_config_dir_override: Option<PathBuf>,
    explicit_file: Option<PathBuf>,
    store: ConfigStore,
}

impl ConfigResolver {
    pub fn new(workspace: impl AsRef<Path>) -> Self {
        Self {
            workspace: NormalizedPath::new(workspace),
            global_config_dir_override: None,
            explicit_file: None,
            store: ConfigStore::new(),
        }
    }

    /// Use `dir` instead of the platform config directory for layer 1.
    pub fn with_global_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.global_config_dir_override = Some(dir.into());
        self
    }

    /// Add an explicit configuration file as the last layer. Unlike the
    /// other layers it must exist.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_file = Some(path.into());
        self
    }

    fn global_config_dir(&self) -> Option<PathBuf> {
        if let Some(dir) = &self.global_config_dir_override {
            return Some(dir.clone());
        }
        dirs::config_dir().map(|d| d.join("sbtkit"))
    }

    pub fn workspace_config_path(&self) -> NormalizedPath {
        self.workspace.join(SbtPath::WorkspaceConfig)
    }

    /// Merge all layers over the defaults. Missing optional layers are
    /// skipped; unparsable ones are errors.
    pub fn resolve(&self) -> Result<SbtConfig> {
        let mut config = SbtConfig::default();

        if let Some(global_dir) = self.global_config_dir() {
            let path = NormalizedPath::new(global_dir.join("config.toml"));
            self.apply_optional(&mut config, &path, "global")?;
        }

        let workspace_path = self.workspace_config_path();
        self.apply_optional(&mut config, &workspace_path, "workspace")?;

        if let Some(explicit) = &self.explicit_file {
            let path = NormalizedPath::new(explicit);
            tracing::debug!(path = %path, "loading explicit config");
            let layer: ConfigLayer = self.store.load(&path)?;
            layer.validate(&path)?;
            config.merge(layer);
        }

        Ok(config)
    }

    fn apply_optional(
        &self,
        config: &mut SbtConfig,
        path: &NormalizedPath,
        name: &'static str,
    ) -> Result<()> {
        match self.store.load_opt::<ConfigLayer>(path)? {
            Some(layer) => {
                tracing::debug!(path = %path, layer = name, "loading config layer");
                layer.validate(path)?;
                config.merge(layer);
            }
            None => tracing::debug!(path = %path, layer = name, "no config layer, skipping"),
        }
        Ok(())
    }
}
