//! Builds the listing and download URLs understood by the items API.

use crate::constants::{
    BLOB_PATH_MARKER, BLOB_PATH_REPLACEMENT, DOWNLOAD_TAIL_PARAMS, DOWNLOAD_VERSION_PARAMS,
    VERSION_TYPE_MARKER,
};
use url::form_urlencoded;

/// Query-escapes a value (space becomes `+`, `/` becomes `%2F`).
fn query_escape(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// URL requesting a one-level listing of `scope_path` on `branch`.
///
/// # Examples
/// ```
/// use tfsgit::remote::listing_url;
///
/// assert_eq!(
///     listing_url("https://tfs/repo", "/a b", "dev"),
///     "https://tfs/repo/items?scopePath=%2Fa+b/&recursionLevel=OneLevel\
///      &versionDescriptor.versionType=branch&version=dev"
/// );
/// ```
pub fn listing_url(repo: &str, scope_path: &str, branch: &str) -> String {
    format!(
        "{}/items?scopePath={}/&recursionLevel=OneLevel&versionDescriptor.versionType=branch&version={}",
        repo,
        query_escape(scope_path),
        query_escape(branch)
    )
}

/// Rewrites a listing entry URL into a blob download URL.
///
/// The `items//` segment is routed through the `items?path=` endpoint, which
/// resolves large-file-storage pointers. Everything from `?versionType` on is
/// dropped and replaced by a branch selector, LFS resolution, a pinned API
/// version and the download flag. The branch is appended verbatim.
pub fn download_url(item_url: &str, branch: &str) -> String {
    let routed = item_url.replace(BLOB_PATH_MARKER, BLOB_PATH_REPLACEMENT);
    let base = routed
        .split(VERSION_TYPE_MARKER)
        .next()
        .unwrap_or(routed.as_str());
    format!(
        "{}{}{}{}",
        base, DOWNLOAD_VERSION_PARAMS, branch, DOWNLOAD_TAIL_PARAMS
    )
}
