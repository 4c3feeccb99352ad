// src/mirror/materialize.rs

//! Writes blob content to local files.

use crate::errors::{io_error_with_path, Result};
use crate::remote::Fetch;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Fetches `url` and streams the body into a newly created file at `dest`.
///
/// No classification is done on the body: blob responses are raw bytes. An
/// existing file is truncated. Returns the number of bytes written.
///
/// # Errors
/// Transport failures, file creation failures and copy failures are all
/// returned; nothing is cleaned up.
pub fn download<F: Fetch + ?Sized>(fetcher: &F, url: &str, dest: &Path) -> Result<u64> {
    log::debug!("Downloading file from: {}", url);
    let response = fetcher.fetch(url)?;
    if response.status != 200 {
        log::warn!(
            "Download of '{}' answered with status {}, writing the body anyway.",
            dest.display(),
            response.status
        );
    }

    let mut out = File::create(dest).map_err(|e| io_error_with_path(e, dest))?;
    let mut body = response.into_reader();
    let written = io::copy(&mut body, &mut out).map_err(|e| io_error_with_path(e, dest))?;
    out.flush().map_err(|e| io_error_with_path(e, dest))?;
    log::trace!("Wrote {} bytes to '{}'", written, dest.display());
    Ok(written)
}
