//! The `tfsgit` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types, traits, and functions.
//!
//! ```
//! use tfsgit::prelude::*;
//!
//! let config = ConfigBuilder::new()
//!     .cred("me:token")
//!     .repo("https://tfs.local/_apis/git/repositories/app")
//!     .path("/")
//!     .build()
//!     .unwrap();
//! assert_eq!(
//!     listing_url(&config.repo, &config.root_path, &config.branch),
//!     "https://tfs.local/_apis/git/repositories/app/items?scopePath=%2F/\
//!      &recursionLevel=OneLevel&versionDescriptor.versionType=branch&version=master"
//! );
//! ```

pub use crate::config::{Config, ConfigBuilder, FileConfig};
pub use crate::errors::{ConfigError, Error, Result};
pub use crate::mirror::{materialize::download, mirror, TreeWalker, WalkContext, WalkSummary};
pub use crate::remote::{
    classify, download_url, listing_url, Fetch, HttpFetcher, ObjectKind, RemoteEntry,
    RemoteResponse,
};
pub use crate::run;
