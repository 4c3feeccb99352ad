//! The remote fetcher: authenticated GET requests against the items API.

use crate::config::Config;
use crate::constants::{ACCEPTED_STATUSES, USER_AGENT};
use crate::errors::{io_error_with_path, ConfigError, Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use std::fmt;
use std::io::Read;

/// A raw response: status code plus a streaming body.
pub struct RemoteResponse {
    pub status: u16,
    body: Box<dyn Read>,
}

impl fmt::Debug for RemoteResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl RemoteResponse {
    pub fn new(status: u16, body: impl Read + 'static) -> Self {
        Self {
            status,
            body: Box::new(body),
        }
    }

    /// Reads the whole body as text. Invalid UTF-8 is replaced, not rejected.
    pub fn text(mut self, url: &str) -> Result<String> {
        let mut bytes = Vec::new();
        self.body
            .read_to_end(&mut bytes)
            .map_err(|e| io_error_with_path(e, url))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Hands out the body for streaming copies.
    pub fn into_reader(self) -> Box<dyn Read> {
        self.body
    }
}

/// Something that can GET a URL.
///
/// The walker is generic over this so it can be driven without a network.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<RemoteResponse>;
}

/// Rejects statuses outside the accepted set. Known error statuses pass so
/// the body can be inspected for a message.
pub fn check_status(url: &str, status: u16) -> Result<()> {
    if ACCEPTED_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(Error::UnexpectedStatus {
            url: url.to_string(),
            status,
        })
    }
}

/// Builds the `Basic` authorization value. The credential is encoded as-is,
/// without splitting it into user and password.
pub fn basic_auth_value(cred: &str) -> String {
    format!("Basic {}", STANDARD.encode(cred.as_bytes()))
}

/// `Fetch` implementation backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a client carrying the user agent, auth header and timeout from `config`.
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&basic_auth_value(&config.cred)).map_err(|e| {
            ConfigError::InvalidValue {
                option: "tfscred".to_string(),
                reason: e.to_string(),
            }
        })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|source| Error::Transport {
                url: config.repo.clone(),
                source,
            })?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<RemoteResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| Error::Transport {
                url: url.to_string(),
                source,
            })?;
        let status = response.status().as_u16();
        log::trace!("GET {} -> {}", url, status);
        check_status(url, status)?;
        Ok(RemoteResponse::new(status, response))
    }
}
