// src/config/builder.rs

use super::file::FileConfig;
use super::parsing::{compile_match_pattern, non_empty, normalize_root_path};
use super::Config;
use crate::cli::Cli;
use crate::constants::{DEFAULT_BRANCH, DEFAULT_DEPTH, DEFAULT_TIMEOUT_SECS};
use crate::errors::{ConfigError, Result};
use std::time::Duration;

/// A builder for creating a `Config` instance.
///
/// Each setter records a value for one setting. Layers are merged by filling
/// only the settings that are still unset, so the first layer applied wins:
/// the binary starts from the command line (which already folds in the
/// environment) and then applies the config file.
///
/// # Examples
///
/// ```
/// use tfsgit::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .cred("me:token")
///     .repo("https://tfs.local/_apis/git/repositories/app")
///     .path("src/")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.root_path, "/src");
/// assert_eq!(config.branch, "master");
/// assert_eq!(config.depth, 10);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    cred: Option<String>,
    repo: Option<String>,
    branch: Option<String>,
    match_pattern: Option<String>,
    path: Option<String>,
    depth: Option<u32>,
    quiet: Option<bool>,
    timeout: Option<u64>,
    verbosity: Option<u8>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from parsed command line arguments (flags and environment).
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            cred: non_empty(cli.cred),
            repo: non_empty(cli.repo),
            branch: non_empty(cli.branch),
            match_pattern: cli.match_pattern,
            path: cli.path,
            depth: cli.depth,
            quiet: cli.quiet,
            timeout: cli.timeout,
            verbosity: cli.verbosity,
        }
    }

    /// Fills settings that are still unset from a config file layer.
    #[must_use]
    pub fn with_file(mut self, file: FileConfig) -> Self {
        self.cred = self.cred.or(non_empty(file.tfscred));
        self.repo = self.repo.or(non_empty(file.tfsrepo));
        self.branch = self.branch.or(non_empty(file.tfsbranch));
        self.match_pattern = self.match_pattern.or(file.tfsmatch);
        self.path = self.path.or(file.tfspath);
        self.depth = self.depth.or(file.tfsdepth);
        self.quiet = self.quiet.or(file.tfsquiet);
        self.timeout = self.timeout.or(file.tfstimeout);
        self.verbosity = self.verbosity.or(file.tfsverbosity);
        self
    }

    /// Sets the `user:token` credential.
    #[must_use]
    pub fn cred(mut self, cred: impl Into<String>) -> Self {
        self.cred = Some(cred.into());
        self
    }
    /// Sets the repository API base URL.
    #[must_use]
    pub fn repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = Some(repo.into());
        self
    }
    #[must_use]
    pub fn branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }
    /// Sets the file name regex. An empty pattern disables filtering.
    #[must_use]
    pub fn match_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.match_pattern = Some(pattern.into());
        self
    }
    /// Sets the repository path to mirror. It is normalized by `build`.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
    #[must_use]
    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }
    #[must_use]
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = Some(quiet);
        self
    }
    /// Sets the per-request timeout in seconds.
    #[must_use]
    pub fn timeout(mut self, secs: u64) -> Self {
        self.timeout = Some(secs);
        self
    }
    #[must_use]
    pub fn verbosity(mut self, level: u8) -> Self {
        self.verbosity = Some(level);
        self
    }

    /// Validates the collected settings and produces the immutable snapshot.
    ///
    /// # Errors
    /// Returns a `ConfigError` when a required setting is missing, the
    /// timeout is zero, or the match pattern does not compile.
    pub fn build(self) -> Result<Config> {
        let cred = self.cred.ok_or_else(|| missing("tfscred", "TFSCRED"))?;
        let repo = self.repo.ok_or_else(|| missing("tfsrepo", "TFSREPO"))?;
        let path = self.path.ok_or_else(|| missing("tfspath", "TFSPATH"))?;

        let timeout_secs = self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                option: "tfstimeout".to_string(),
                reason: "must be at least 1 second".to_string(),
            }
            .into());
        }

        let match_pattern = compile_match_pattern(self.match_pattern)?;
        // File search is a root-level search only.
        let depth = if match_pattern.is_some() {
            0
        } else {
            self.depth.unwrap_or(DEFAULT_DEPTH)
        };

        let config = Config {
            cred,
            repo: repo.trim_end_matches('/').to_string(),
            branch: self.branch.unwrap_or_else(|| DEFAULT_BRANCH.to_string()),
            match_pattern,
            root_path: normalize_root_path(&path),
            depth,
            quiet: self.quiet.unwrap_or(false),
            timeout: Duration::from_secs(timeout_secs),
            verbosity: self.verbosity.unwrap_or(0),
        };
        Ok(config)
    }
}

fn missing(option: &str, env: &str) -> ConfigError {
    ConfigError::Missing {
        option: option.to_string(),
        env: env.to_string(),
    }
}
