//! Access to the remote items API: fetching, classifying listing responses,
//! and building request URLs.

mod classify;
mod client;
mod entry;
mod endpoints;

pub use classify::classify;
pub use client::{basic_auth_value, check_status, Fetch, HttpFetcher, RemoteResponse};
pub use entry::{ObjectKind, RemoteEntry};
pub use endpoints::{download_url, listing_url};
