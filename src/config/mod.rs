//! Defines the `Config` snapshot and how it is assembled.
//!
//! Settings come from three layers, lowest precedence first: an optional YAML
//! config file, environment variables, and command-line flags. The last two
//! are read by clap; the file layer is merged underneath by `ConfigBuilder`.

use crate::cli::Cli;
use crate::constants::DEFAULT_CONFIG_FILE;
use crate::errors::Result;
use regex::Regex;
use std::fmt;
use std::path::Path;
use std::time::Duration;

pub use builder::ConfigBuilder;
pub use file::FileConfig;
mod builder;
mod file;
mod parsing;

/// Immutable configuration for one mirror run.
#[derive(Clone)]
pub struct Config {
    /// `user:token` credential, sent verbatim in the Basic auth header.
    pub cred: String,
    /// Repository API base URL, without a trailing slash.
    pub repo: String,
    pub branch: String,
    /// File name filter. When set, `depth` is always 0.
    pub match_pattern: Option<Regex>,
    /// Normalized logical root path, always starting with a single `/`.
    pub root_path: String,
    /// Maximum number of directory levels entered below the root.
    pub depth: u32,
    pub quiet: bool,
    /// Timeout applied to each individual request.
    pub timeout: Duration,
    pub verbosity: u8,
}

// The credential is never printed.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("cred", &"<redacted>")
            .field("repo", &self.repo)
            .field("branch", &self.branch)
            .field("match_pattern", &self.match_pattern.as_ref().map(Regex::as_str))
            .field("root_path", &self.root_path)
            .field("depth", &self.depth)
            .field("quiet", &self.quiet)
            .field("timeout", &self.timeout)
            .field("verbosity", &self.verbosity)
            .finish()
    }
}

impl Config {
    /// Resolves the full configuration from the command line, the environment
    /// and the config file.
    ///
    /// A file named with `--config` must exist; the default `.tfsgit.yaml` in
    /// the working directory is optional.
    pub fn load(cli: Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::load_optional(Path::new(DEFAULT_CONFIG_FILE))?,
        };
        ConfigBuilder::from_cli(cli).with_file(file).build()
    }

    /// Creates a `Config` for tests pointing at the given repository URL.
    #[doc(hidden)]
    pub fn new_for_test(repo: &str) -> Self {
        Self {
            cred: "user:token".to_string(),
            repo: repo.to_string(),
            branch: "master".to_string(),
            match_pattern: None,
            root_path: "/".to_string(),
            depth: 10,
            quiet: false,
            timeout: Duration::from_secs(5),
            verbosity: 0,
        }
    }
}
