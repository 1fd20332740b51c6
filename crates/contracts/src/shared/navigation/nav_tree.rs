//! Side navigation tree, used to name newly opened tabs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::NavigationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavNode {
    /// Absolute (`/system`) or relative to the parent (`user`).
    pub path: String,
    pub title: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavNode>,
}

impl NavNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

pub fn parse_nav_tree(json: &str) -> Result<Vec<NavNode>, NavigationError> {
    serde_json::from_str(json).map_err(|e| NavigationError::Config(format!("nav tree: {}", e)))
}

/// Joins a child path onto its parent unless the child is already absolute.
pub fn join_path(parent: &str, child: &str) -> String {
    if child.starts_with('/') {
        child.to_string()
    } else if parent.ends_with('/') {
        format!("{}{}", parent, child)
    } else {
        format!("{}/{}", parent, child)
    }
}

/// Depth-first search for the node whose full path equals `path`.
pub fn find_title<'a>(tree: &'a [NavNode], path: &str) -> Option<&'a str> {
    fn walk<'a>(nodes: &'a [NavNode], parent: &str, path: &str) -> Option<&'a str> {
        for node in nodes {
            let full = join_path(parent, &node.path);
            if full == path {
                return Some(node.title.as_str());
            }
            if let Some(title) = walk(&node.children, &full, path) {
                return Some(title);
            }
        }
        None
    }
    walk(tree, "/", path)
}

/// Title for a new tab: hardcoded overrides first, then the nav tree,
/// then the last path segment.
pub fn resolve_title(tree: &[NavNode], overrides: &BTreeMap<String, String>, path: &str) -> String {
    if let Some(title) = overrides.get(path) {
        return title.clone();
    }
    find_title(tree, path)
        .unwrap_or_else(|| path.rsplit('/').find(|s| !s.is_empty()).unwrap_or(path))
        .to_string()
}
