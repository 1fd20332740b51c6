use std::collections::BTreeMap;

use serde::Deserialize;

use super::tab::TabItem;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NavigationConfig {
    /// Stripped from a path to obtain the page module name.
    #[serde(default = "default_route_prefix")]
    pub route_prefix: String,
    #[serde(default = "default_home_path")]
    pub home_path: String,
    #[serde(default = "default_home_title")]
    pub home_title: String,
    /// Drop a tab's cached content when the tab is closed.
    #[serde(default)]
    pub evict_on_close: bool,
    /// Fixed titles for paths that are not in the side navigation.
    #[serde(default)]
    pub title_overrides: BTreeMap<String, String>,
}

fn default_route_prefix() -> String {
    "/".to_string()
}

fn default_home_path() -> String {
    "/index".to_string()
}

fn default_home_title() -> String {
    "Home".to_string()
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
route_prefix = "/"
home_path = "/index"
home_title = "Home"
evict_on_close = false

[title_overrides]
"/user/profile" = "Profile"
"#;

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            route_prefix: default_route_prefix(),
            home_path: default_home_path(),
            home_title: default_home_title(),
            evict_on_close: false,
            title_overrides: BTreeMap::new(),
        }
    }
}

impl NavigationConfig {
    /// The pinned tab seeded into every registry.
    pub fn home_tab(&self) -> TabItem {
        TabItem::new(&self.home_path, "", &self.home_title)
    }

    /// Title override for `path`; the home path always maps to `home_title`.
    pub fn title_overrides(&self) -> BTreeMap<String, String> {
        let mut overrides = self.title_overrides.clone();
        overrides.insert(self.home_path.clone(), self.home_title.clone());
        overrides
    }
}

/// Load navigation configuration.
///
/// `overrides` is a TOML document; fields it omits keep their defaults.
/// Without it the embedded default is used.
pub fn load_config(overrides: Option<&str>) -> anyhow::Result<NavigationConfig> {
    match overrides {
        Some(source) => {
            log::info!("Loading navigation config from override");
            Ok(toml::from_str(source)?)
        }
        None => {
            log::info!("Using default embedded navigation configuration");
            Ok(toml::from_str(DEFAULT_CONFIG)?)
        }
    }
}
