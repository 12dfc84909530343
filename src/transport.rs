//! The transport seam: how the widget talks to the documentation search API.
//!
//! The HTTP client itself lives outside this crate. What lives here is the
//! contract an implementation must honor: the trait, the credential value it
//! is handed at configuration time, the request shape the remote expects,
//! and the response envelope it sends back.

use crate::error::TransportError;
use crate::types::{ArticleRecord, ResultSet};
use serde::Deserialize;
use std::future::Future;

/// Endpoint for article searches.
pub const SEARCH_ENDPOINT: &str = "https://docsapi.helpscout.net/v1/search/articles";

/// A ready-to-use HTTP Basic token for the docs API, supplied once at
/// configuration time. Producing it (key management, encoding) is outside
/// this crate's scope.
#[derive(Debug, Clone)]
pub struct Credentials(String);

impl Credentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Value for the `Authorization` request header.
    pub fn authorization_header(&self) -> String {
        format!("Basic {}", self.0)
    }
}

/// Query parameters for a search request, in the order the remote documents
/// them. Percent-encoding is the HTTP client's job.
pub fn search_params(query: &str) -> [(&'static str, String); 3] {
    [
        ("status", "published".to_string()),
        ("visibility", "public".to_string()),
        ("query", query.to_string()),
    ]
}

#[derive(Debug, Default, Deserialize)]
struct Envelope {
    #[serde(default)]
    articles: Option<Articles>,
}

#[derive(Debug, Default, Deserialize)]
struct Articles {
    #[serde(default)]
    items: Vec<ArticleRecord>,
    #[serde(default)]
    count: usize,
}

/// Parse the API's response envelope into a [`ResultSet`].
///
/// The remote wraps results as `{ "articles": { "items": [...], "count": N } }`.
/// A body without the envelope (the remote sends `{}` for some degenerate
/// queries) parses as an empty set rather than an error.
pub fn parse_response(body: &str) -> Result<ResultSet, TransportError> {
    let envelope: Envelope = serde_json::from_str(body)?;
    Ok(envelope
        .articles
        .map(|articles| ResultSet {
            items: articles.items,
            total_available: articles.count,
        })
        .unwrap_or_default())
}

/// Asynchronous search request against the documentation backend.
///
/// Implementations receive an already-sanitized query. Requests are not
/// aborted once issued; the coordinator neutralizes stale completions on its
/// side, so an implementation may simply let a superseded request run out.
pub trait SearchTransport {
    fn search(&self, query: &str)
    -> impl Future<Output = Result<ResultSet, TransportError>> + Send;
}
