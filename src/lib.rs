//! `tfsgit` is a library and command-line tool that mirrors a subtree of a
//! TFS / Azure DevOps git repository onto the local filesystem through the
//! items REST API.
//!
//! The work is split into small pieces that can be used on their own:
//! 1.  **Configure**: `ConfigBuilder` resolves settings into a `Config` snapshot.
//! 2.  **Fetch**: `remote::HttpFetcher` performs authenticated GET requests and
//!     `remote::classify` turns a listing body into entries or an error.
//! 3.  **Mirror**: `mirror::TreeWalker` walks the remote tree one level at a
//!     time, recreating directories and downloading files.
//!
//! # Example: Library Usage
//!
//! The walker is generic over `remote::Fetch`, so it can be driven by any
//! source of responses. Here a single canned listing is mirrored into a
//! temporary directory.
//!
//! ```
//! use tfsgit::prelude::*;
//! use std::io::Cursor;
//! use tempfile::tempdir;
//!
//! struct Canned;
//!
//! impl Fetch for Canned {
//!     fn fetch(&self, url: &str) -> Result<RemoteResponse> {
//!         let body: &'static [u8] = if url.contains("recursionLevel=OneLevel") {
//!             br#"{"value":[{"gitObjectType":"tree","path":"/docs"},
//!                           {"gitObjectType":"tree","path":"/docs/api"}]}"#
//!         } else {
//!             b""
//!         };
//!         Ok(RemoteResponse::new(200, Cursor::new(body)))
//!     }
//! }
//!
//! let temp = tempdir().unwrap();
//! let config = ConfigBuilder::new()
//!     .cred("me:token")
//!     .repo("https://tfs.local/_apis/git/repositories/app")
//!     .path("docs")
//!     .depth(0)
//!     .quiet(true)
//!     .build()
//!     .unwrap();
//!
//! let summary = mirror(&config, &Canned, temp.path()).unwrap();
//! assert!(temp.path().join("api").is_dir());
//! assert_eq!(summary.listings, 1);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod mirror;
pub mod prelude;
pub mod remote;

pub use config::{Config, ConfigBuilder};
pub use mirror::{mirror, WalkSummary};

use crate::errors::{io_error_with_path, Result};
use crate::remote::HttpFetcher;

/// Mirrors `config.root_path` into the current working directory over HTTP.
///
/// This is what the binary runs. Use `mirror::mirror` directly to pick the
/// target directory or supply a different `remote::Fetch`.
///
/// # Errors
/// Returns the first fatal error. Files and directories created before the
/// failure are left in place.
pub fn run(config: &Config) -> Result<WalkSummary> {
    let fetcher = HttpFetcher::new(config)?;
    let root_dir =
        std::env::current_dir().map_err(|e| io_error_with_path(e, "<current directory>"))?;
    log::debug!("Mirroring into '{}'", root_dir.display());
    mirror(config, &fetcher, &root_dir)
}
