//! Tab identity and address helpers.

use serde::{Deserialize, Serialize};

/// Path-only identity of a tab. Two visits of the same path with different
/// query strings share one key.
pub type TabKey = String;

/// Derives the tab key for a route. The query never takes part in identity.
pub fn generate_key(path: &str, _query: &str) -> TabKey {
    path.to_string()
}

/// Одна вкладка в полосе табов
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabItem {
    pub key: TabKey,
    pub path: String,
    /// Latest query string seen for this path, without the leading `?`.
    pub query: String,
    pub title: String,
}

impl TabItem {
    pub fn new(path: &str, query: &str, title: &str) -> Self {
        Self {
            key: generate_key(path, query),
            path: path.to_string(),
            query: query.to_string(),
            title: title.to_string(),
        }
    }

    /// Address this tab should show in the address bar.
    pub fn address(&self) -> String {
        compose_address(&self.path, &self.query)
    }
}

/// `path` when the query is empty, `path?query` otherwise.
pub fn compose_address(path: &str, query: &str) -> String {
    let query = query.trim_start_matches('?');
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

/// Splits `path?query` into its parts. A missing or empty query yields `""`.
pub fn split_address(address: &str) -> (&str, &str) {
    match address.split_once('?') {
        Some((path, query)) => (path, query),
        None => (address, ""),
    }
}
