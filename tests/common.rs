// tests/common.rs

use std::path::Path;
use std::process::Command;
use tokio::runtime::Runtime;
use wiremock::matchers::{any, method, path, query_param};
use wiremock::{Mock, MockBuilder, MockServer, Request, ResponseTemplate};

// Helper function to get the binary command, isolated from the caller's environment.
#[allow(dead_code)]
pub fn tfsgit_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tfsgit"));
    for var in [
        "TFSCRED",
        "TFSREPO",
        "TFSBRANCH",
        "TFSMATCH",
        "TFSPATH",
        "TFSDEPTH",
        "TFSQUIET",
        "TFSTIMEOUT",
        "TFSVERBOSITY",
        "TFSCONFIG",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

const REPO_PATH: &str = "/tfs/_apis/git/repositories/app";

/// A request seen by the mock remote.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct Recorded {
    pub target: String,
    pub headers: Vec<(String, String)>,
}

#[allow(dead_code)]
impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl From<&Request> for Recorded {
    fn from(request: &Request) -> Self {
        let target = match request.url.query() {
            Some(query) => format!("{}?{}", request.url.path(), query),
            None => request.url.path().to_string(),
        };
        let headers = request
            .headers
            .iter()
            .map(|(k, v)| {
                let value = v.to_str().unwrap_or_default().to_string();
                (k.as_str().to_string(), value)
            })
            .collect();
        Self { target, headers }
    }
}

/// A `wiremock` server standing in for one repository's REST API.
///
/// The tests drive a blocking binary, so the server's async calls are run on
/// a private runtime. Requests that match no mounted mock get a 500.
#[allow(dead_code)]
pub struct MockRemote {
    /// Repository API base URL, as passed to `--tfsrepo`.
    pub base: String,
    server: MockServer,
    runtime: Runtime,
}

#[allow(dead_code)]
impl MockRemote {
    pub fn start() -> Self {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("build test runtime");
        let server = runtime.block_on(MockServer::start());
        let base = format!("{}{}", server.uri(), REPO_PATH);
        let remote = Self {
            base,
            server,
            runtime,
        };
        remote.mount(
            Mock::given(any())
                .respond_with(ResponseTemplate::new(500).set_body_string("no route"))
                .with_priority(u8::MAX),
        );
        remote
    }

    fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    fn items() -> MockBuilder {
        Mock::given(method("GET")).and(path(format!("{}/items", REPO_PATH)))
    }

    /// A one-level listing of `scope` (e.g. `/proj`) holding `entries` of (kind, path).
    pub fn listing(&self, scope: &str, entries: &[(&str, &str)]) -> &Self {
        let value: Vec<String> = entries
            .iter()
            .map(|(kind, item)| {
                format!(
                    r#"{{"objectId":"0","gitObjectType":"{}","path":"{}","url":"{}/items/{}?versionType=Branch&version=master"}}"#,
                    kind, item, self.base, item
                )
            })
            .collect();
        let body = format!(r#"{{"count":{},"value":[{}]}}"#, value.len(), value.join(","));
        self.listing_reply(scope, ResponseTemplate::new(200).set_body_raw(body, "application/json"))
    }

    /// Answers the listing request for `scope` with `template`.
    pub fn listing_reply(&self, scope: &str, template: ResponseTemplate) -> &Self {
        self.mount(
            Self::items()
                .and(query_param("scopePath", format!("{}/", scope)))
                .respond_with(template),
        );
        self
    }

    /// The download answer for a blob listed by `listing`.
    pub fn blob(&self, item: &str, content: &str) -> &Self {
        self.mount(
            Self::items()
                .and(query_param("path", item.trim_start_matches('/')))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_raw(content.as_bytes().to_vec(), "application/octet-stream"),
                ),
        );
        self
    }

    /// Answers `GET {base}{route}` with `template`.
    pub fn reply_at(&self, route: &str, template: ResponseTemplate) -> &Self {
        self.mount(
            Mock::given(method("GET"))
                .and(path(format!("{}{}", REPO_PATH, route)))
                .respond_with(template),
        );
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.runtime
            .block_on(self.server.received_requests())
            .unwrap_or_default()
            .iter()
            .map(Recorded::from)
            .collect()
    }

    pub fn listing_targets(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .map(|r| r.target)
            .filter(|t| t.contains("recursionLevel=OneLevel"))
            .collect()
    }
}

/// Relative paths of everything under `root`, sorted, with `/` separators.
#[allow(dead_code)]
pub fn tree_of(root: &Path) -> Vec<String> {
    let mut paths: Vec<String> = walkdir::WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/");
            if e.file_type().is_dir() {
                format!("{}/", rel)
            } else {
                rel
            }
        })
        .collect();
    paths.sort();
    paths
}
