// src/constants.rs

/// User agent sent with every request. The remote accepts it like a plain curl call.
pub const USER_AGENT: &str = "curl/7.79.1";

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = ".tfsgit.yaml";

pub const DEFAULT_BRANCH: &str = "master";
pub const DEFAULT_DEPTH: u32 = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// HTTP statuses passed through to the caller. Error statuses in this set
/// carry a readable message in the body.
pub const ACCEPTED_STATUSES: [u16; 4] = [200, 400, 401, 404];

/// Marker in blob URLs rewritten to route through the path-query endpoint.
pub const BLOB_PATH_MARKER: &str = "items//";
pub const BLOB_PATH_REPLACEMENT: &str = "items?path=";

/// Blob URLs are cut at this marker before the download parameters are appended.
pub const VERSION_TYPE_MARKER: &str = "?versionType";

/// Branch selector appended to download URLs; the branch name follows verbatim.
pub const DOWNLOAD_VERSION_PARAMS: &str = "&versionDescriptor%5BversionOptions%5D=0&versionDescriptor%5BversionType%5D=0&versionDescriptor%5Bversion%5D=";

/// LFS resolution, pinned API version and download flag.
pub const DOWNLOAD_TAIL_PARAMS: &str = "&resolveLfs=true&api-version=5.0&download=true";
