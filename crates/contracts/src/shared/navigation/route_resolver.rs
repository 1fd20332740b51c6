//! Static route registry: maps a logical path to one of a fixed, enumerable
//! set of page modules. Paths never reach anything outside the table.

use std::collections::BTreeMap;

use super::error::NavigationError;

#[derive(Debug, Clone)]
pub struct RouteRegistry<M> {
    prefix: String,
    home: M,
    modules: BTreeMap<&'static str, M>,
}

impl<M: Clone> RouteRegistry<M> {
    /// `prefix` is stripped from every path before lookup; an empty remainder
    /// resolves to `home`.
    pub fn new(prefix: &str, home: M) -> Self {
        Self {
            prefix: prefix.to_string(),
            home,
            modules: BTreeMap::new(),
        }
    }

    pub fn register(mut self, name: &'static str, module: M) -> Self {
        self.modules.insert(name, module);
        self
    }

    /// Registered module names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.modules.keys().copied()
    }

    /// Module name for `path`: the path minus prefix and surrounding slashes.
    pub fn module_name<'a>(&self, path: &'a str) -> Result<&'a str, NavigationError> {
        let rest = path
            .strip_prefix(self.prefix.as_str())
            .ok_or_else(|| NavigationError::InvalidPath(path.to_string()))?;
        // "/adminx" must not match prefix "/admin"
        if !self.prefix.ends_with('/') && !rest.is_empty() && !rest.starts_with('/') {
            return Err(NavigationError::InvalidPath(path.to_string()));
        }
        let name = rest.trim_matches('/');

        let well_formed = name.split('/').all(|segment| {
            name.is_empty()
                || (!segment.is_empty()
                    && segment != "."
                    && segment != ".."
                    && segment
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'))
        });
        if !well_formed {
            return Err(NavigationError::InvalidPath(path.to_string()));
        }
        Ok(name)
    }

    pub fn resolve(&self, path: &str) -> Result<M, NavigationError> {
        let name = self.module_name(path)?;
        if name.is_empty() {
            return Ok(self.home.clone());
        }
        self.modules
            .get(name)
            .cloned()
            .ok_or_else(|| NavigationError::UnknownPath(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> RouteRegistry<&'static str> {
        RouteRegistry::new("/", "home")
            .register("system/user", "user")
            .register("system/role", "role")
            .register("monitor/operlog", "operlog")
    }

    #[test]
    fn test_resolve_known_module() {
        let registry = registry();
        assert_eq!(registry.resolve("/system/user"), Ok("user"));
        assert_eq!(registry.resolve("/system/role/"), Ok("role"));
        assert_eq!(registry.resolve("/monitor/operlog"), Ok("operlog"));
    }

    #[test]
    fn test_empty_name_is_home() {
        assert_eq!(registry().resolve("/"), Ok("home"));
    }

    #[test]
    fn test_unknown_module() {
        assert_eq!(
            registry().resolve("/system/ghost"),
            Err(NavigationError::UnknownPath("/system/ghost".to_string()))
        );
    }

    #[test]
    fn test_crafted_paths_rejected() {
        let registry = registry();
        for path in [
            "/../secret",
            "/system/../user",
            "/system//user",
            "/system/user.js",
            "/system/%2e%2e",
            "/system/<script>",
            "relative",
        ] {
            assert!(
                matches!(registry.resolve(path), Err(NavigationError::InvalidPath(_))),
                "{} should be rejected",
                path
            );
        }
    }

    #[test]
    fn test_prefix_is_stripped() {
        let registry = RouteRegistry::new("/admin", "home").register("system/dict", "dict");
        assert_eq!(registry.resolve("/admin/system/dict"), Ok("dict"));
        assert_eq!(registry.resolve("/admin"), Ok("home"));
        assert!(registry.resolve("/system/dict").is_err());
    }

    #[test]
    fn test_names_are_enumerable() {
        let names: Vec<_> = registry().names().collect();
        assert_eq!(names, vec!["monitor/operlog", "system/role", "system/user"]);
    }
}
