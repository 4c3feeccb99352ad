//! The tree walker: mirrors a remote subtree onto a local directory.
//!
//! Each call lists one remote directory level, creates local directories for
//! `tree` entries, descends into them while the depth budget allows, and
//! downloads `blob` entries. Any error other than a failed directory creation
//! aborts the whole walk.

use crate::config::Config;
use crate::errors::Result;
use crate::remote::{classify, download_url, listing_url, Fetch, ObjectKind, RemoteEntry};
use std::fs;
use std::path::Path;

pub use context::WalkContext;
mod context;
pub mod materialize;

/// Counters collected during a walk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkSummary {
    /// Remote listings fetched, the root included.
    pub listings: usize,
    pub directories_created: usize,
    pub files_downloaded: usize,
    pub bytes_downloaded: u64,
    /// Entries skipped by the filter, of unknown kind, or unusable.
    pub skipped: usize,
}

/// Drives the fetcher over a remote tree according to a `Config`.
pub struct TreeWalker<'a, F: Fetch + ?Sized> {
    config: &'a Config,
    fetcher: &'a F,
    summary: WalkSummary,
}

impl<'a, F: Fetch + ?Sized> TreeWalker<'a, F> {
    pub fn new(config: &'a Config, fetcher: &'a F) -> Self {
        Self {
            config,
            fetcher,
            summary: WalkSummary::default(),
        }
    }

    pub fn summary(&self) -> WalkSummary {
        self.summary
    }

    /// Lists `scope_path` and mirrors its entries into `ctx.current_dir()`.
    pub fn walk(&mut self, ctx: &mut WalkContext, scope_path: &str) -> Result<()> {
        let url = listing_url(&self.config.repo, scope_path, &self.config.branch);
        log::debug!("Url {}", url);

        let body = self.fetcher.fetch(&url)?.text(&url)?;
        log::trace!("Response {}", body);
        let entries = classify(&body)?;
        self.summary.listings += 1;

        for entry in &entries {
            log::trace!("Scan {:?}", entry);
            match entry.kind {
                ObjectKind::Tree => self.visit_tree(ctx, scope_path, entry)?,
                ObjectKind::Blob => self.visit_blob(ctx, entry)?,
                ObjectKind::Other(_) => {
                    log::warn!("unknown type {} path {}", entry.kind_str(), entry.path);
                    self.summary.skipped += 1;
                }
            }
        }
        Ok(())
    }

    fn visit_tree(
        &mut self,
        ctx: &mut WalkContext,
        scope_path: &str,
        entry: &RemoteEntry,
    ) -> Result<()> {
        log::debug!("Folder {}", entry.path);
        // The listing includes the requested folder itself; file search never recurses.
        if entry.path == scope_path || self.config.match_pattern.is_some() {
            return Ok(());
        }

        let name = entry.name();
        if !is_safe_name(name) {
            log::warn!("Skipping folder with unusable name: {}", entry.path);
            self.summary.skipped += 1;
            return Ok(());
        }

        let local = ctx.current_dir().join(name);
        if !local.exists() {
            if !self.config.quiet {
                log::info!("make new directory - {}", name);
            }
            match fs::create_dir(&local) {
                Ok(()) => self.summary.directories_created += 1,
                Err(e) => log::warn!("Failed to create directory '{}': {}", local.display(), e),
            }
        }

        if ctx.depth() >= self.config.depth {
            return Ok(());
        }
        if !local.is_dir() {
            log::warn!(
                "Cannot enter '{}', not descending into {}",
                local.display(),
                entry.path
            );
            self.summary.skipped += 1;
            return Ok(());
        }

        ctx.descend(name, |ctx| self.walk(ctx, &entry.path))
    }

    fn visit_blob(&mut self, ctx: &mut WalkContext, entry: &RemoteEntry) -> Result<()> {
        log::debug!("File {}", entry.path);
        let name = entry.name();

        if let Some(pattern) = &self.config.match_pattern {
            if !pattern.is_match(name) {
                self.summary.skipped += 1;
                return Ok(());
            }
        }
        if !is_safe_name(name) {
            log::warn!("Skipping file with unusable name: {}", entry.path);
            self.summary.skipped += 1;
            return Ok(());
        }
        let Some(item_url) = entry.url.as_deref() else {
            log::warn!("Skipping file with no url: {}", entry.path);
            self.summary.skipped += 1;
            return Ok(());
        };

        if !self.config.quiet {
            log::info!("download file - {}", name);
        }
        let url = download_url(item_url, &self.config.branch);
        let written = materialize::download(self.fetcher, &url, &ctx.current_dir().join(name))?;
        self.summary.files_downloaded += 1;
        self.summary.bytes_downloaded += written;
        Ok(())
    }
}

/// Rejects names that would escape or alias the current directory.
fn is_safe_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

/// Mirrors `config.root_path` into `root_dir`.
///
/// # Errors
/// Returns the first fatal error; whatever was mirrored before it stays on disk.
pub fn mirror<F: Fetch + ?Sized>(config: &Config, fetcher: &F, root_dir: &Path) -> Result<WalkSummary> {
    let mut walker = TreeWalker::new(config, fetcher);
    let mut ctx = WalkContext::new(root_dir);
    walker.walk(&mut ctx, &config.root_path)?;
    Ok(walker.summary())
}
