// src/cli.rs

use clap::Parser;
use std::path::PathBuf;

/// Mirror a subtree of a TFS / Azure DevOps git repository onto the local filesystem.
///
/// tfsgit lists the given repository path one level at a time through the REST
/// API, recreates the directory structure under the current directory, and
/// downloads every file it finds (large-file-storage blobs included). Every
/// option can also come from an environment variable or from a `.tfsgit.yaml`
/// config file; flags win over the environment, which wins over the file.
///
/// Value options are left unset here on purpose: defaults are applied by the
/// config builder after the file layer has been merged in.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// User name and access token, as `user:token`.
    #[arg(short = 'c', long = "tfscred", env = "TFSCRED", value_name = "USER:TOKEN")]
    pub cred: Option<String>,

    /// Repository API base URL (`.../_apis/git/repositories/<repo>`).
    #[arg(short = 'r', long = "tfsrepo", env = "TFSREPO", value_name = "URL")]
    pub repo: Option<String>,

    /// Branch name [default: master].
    #[arg(short = 'b', long = "tfsbranch", env = "TFSBRANCH", value_name = "BRANCH")]
    pub branch: Option<String>,

    /// Download only root-level files whose name matches this regex.
    /// Setting it disables recursion.
    #[arg(short = 'm', long = "tfsmatch", env = "TFSMATCH", value_name = "REGEX")]
    pub match_pattern: Option<String>,

    /// Repository path to mirror.
    #[arg(short = 'p', long = "tfspath", env = "TFSPATH", value_name = "PATH")]
    pub path: Option<String>,

    /// Maximum directory depth below the root path [default: 10].
    #[arg(short = 'd', long = "tfsdepth", env = "TFSDEPTH", value_name = "DEPTH")]
    pub depth: Option<u32>,

    /// Quiet mode: no banner and no per-item progress lines.
    /// A bare `-q` means true; `--tfsquiet=false` turns it off again.
    #[arg(
        short = 'q',
        long = "tfsquiet",
        env = "TFSQUIET",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub quiet: Option<bool>,

    /// Per-request timeout in seconds [default: 5].
    #[arg(short = 't', long = "tfstimeout", env = "TFSTIMEOUT", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output verbosity: 1 shows request URLs and entries, 2 adds raw responses.
    #[arg(short = 'v', long = "tfsverbosity", env = "TFSVERBOSITY", value_name = "LEVEL")]
    pub verbosity: Option<u8>,

    /// Config file to read instead of `./.tfsgit.yaml`.
    #[arg(long = "config", env = "TFSCONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,
}
