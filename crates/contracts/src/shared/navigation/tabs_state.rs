//! Реестр открытых вкладок.
//!
//! Хранит упорядоченный список вкладок и ключ активной. Все операции
//! синхронные; адресную строку не трогают, синхронизация - забота вызывающего.

use super::tab::{generate_key, TabItem, TabKey};

/// Outcome of a closing operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Closed {
    /// Keys actually removed, in list order.
    pub removed: Vec<TabKey>,
    /// Active tab after the operation.
    pub activated: Option<TabItem>,
}

impl Closed {
    pub fn is_noop(&self) -> bool {
        self.removed.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabsState {
    tabs: Vec<TabItem>,
    active_key: Option<TabKey>,
    home_key: TabKey,
}

impl TabsState {
    /// Creates the registry with the home tab seeded and active.
    pub fn new(home: TabItem) -> Self {
        let home_key = home.key.clone();
        Self {
            tabs: vec![home],
            active_key: Some(home_key.clone()),
            home_key,
        }
    }

    pub fn tabs(&self) -> &[TabItem] {
        &self.tabs
    }

    pub fn active_key(&self) -> Option<&str> {
        self.active_key.as_deref()
    }

    pub fn active(&self) -> Option<&TabItem> {
        let key = self.active_key.as_deref()?;
        self.get(key)
    }

    pub fn home_key(&self) -> &str {
        &self.home_key
    }

    pub fn get(&self, key: &str) -> Option<&TabItem> {
        self.tabs.iter().find(|tab| tab.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active_key.as_deref() == Some(key)
    }

    /// Only the home tab is pinned.
    pub fn is_closable(&self, key: &str) -> bool {
        key != self.home_key
    }

    /// Appends a tab for `path` or re-activates the existing one in place.
    ///
    /// On re-entry the stored query is replaced and the title is overwritten
    /// only when `title` is non-empty.
    pub fn add_or_activate(&mut self, path: &str, query: &str, title: &str) -> &TabItem {
        let key = generate_key(path, query);
        let index = match self.tabs.iter().position(|tab| tab.key == key) {
            Some(index) => {
                let tab = &mut self.tabs[index];
                tab.query = query.to_string();
                if !title.is_empty() {
                    tab.title = title.to_string();
                }
                log::debug!("tab '{}' re-activated", key);
                index
            }
            None => {
                self.tabs.push(TabItem::new(path, query, title));
                log::debug!("tab '{}' added, total {}", key, self.tabs.len());
                self.tabs.len() - 1
            }
        };
        self.active_key = Some(key);
        &self.tabs[index]
    }

    /// Makes `key` active. Unknown keys leave the state untouched.
    pub fn switch_tab(&mut self, key: &str) -> Option<TabItem> {
        let Some(tab) = self.get(key).cloned() else {
            log::debug!("switch_tab: unknown key '{}'", key);
            return None;
        };
        self.active_key = Some(tab.key.clone());
        Some(tab)
    }

    /// Removes `key`. When the closed tab was active, the last remaining tab
    /// becomes active (not the neighbour).
    pub fn close_tab(&mut self, key: &str) -> Closed {
        if !self.is_closable(key) {
            log::debug!("close_tab: '{}' is pinned", key);
            return self.unchanged();
        }
        let before = self.tabs.len();
        self.tabs.retain(|tab| tab.key != key);
        if self.tabs.len() == before {
            log::debug!("close_tab: unknown key '{}'", key);
            return self.unchanged();
        }

        if self.is_active(key) {
            self.active_key = self.tabs.last().map(|tab| tab.key.clone());
            log::debug!("close_tab: '{}' closed, next active {:?}", key, self.active_key);
        }

        Closed {
            removed: vec![key.to_string()],
            activated: self.active().cloned(),
        }
    }

    /// Keeps the home tab and `key`, activating `key`.
    pub fn close_others(&mut self, key: &str) -> Closed {
        if !self.contains(key) {
            log::debug!("close_others: unknown key '{}'", key);
            return self.unchanged();
        }
        let home = self.home_key.clone();
        let removed = self.drain_where(|tab| tab.key != key && tab.key != home);
        self.active_key = Some(key.to_string());
        Closed {
            removed,
            activated: self.active().cloned(),
        }
    }

    /// Keeps only the home tab and activates it.
    pub fn close_all(&mut self) -> Closed {
        let home = self.home_key.clone();
        let removed = self.drain_where(|tab| tab.key != home);
        self.active_key = self.tabs.last().map(|tab| tab.key.clone());
        Closed {
            removed,
            activated: self.active().cloned(),
        }
    }

    /// Renames a tab in place. Empty titles are ignored.
    pub fn update_title(&mut self, key: &str, title: &str) {
        if title.is_empty() {
            return;
        }
        if let Some(tab) = self.tabs.iter_mut().find(|tab| tab.key == key) {
            tab.title = title.to_string();
        }
    }

    fn drain_where(&mut self, mut remove: impl FnMut(&TabItem) -> bool) -> Vec<TabKey> {
        let mut removed = Vec::new();
        self.tabs.retain(|tab| {
            if remove(tab) {
                removed.push(tab.key.clone());
                false
            } else {
                true
            }
        });
        removed
    }

    fn unchanged(&self) -> Closed {
        Closed {
            removed: Vec::new(),
            activated: self.active().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> TabsState {
        TabsState::new(TabItem::new("/index", "", "Home"))
    }

    fn keys(state: &TabsState) -> Vec<&str> {
        state.tabs().iter().map(|tab| tab.key.as_str()).collect()
    }

    #[test]
    fn test_home_is_seeded_and_active() {
        let state = state();
        assert_eq!(keys(&state), vec!["/index"]);
        assert_eq!(state.active_key(), Some("/index"));
        assert!(!state.is_closable("/index"));
    }

    #[test]
    fn test_add_twice_keeps_one_tab() {
        let mut state = state();
        state.add_or_activate("/system/user", "", "Users");
        assert_eq!(state.active_key(), Some("/system/user"));
        state.add_or_activate("/system/user", "", "Users");
        assert_eq!(state.active_key(), Some("/system/user"));
        assert_eq!(keys(&state), vec!["/index", "/system/user"]);
    }

    #[test]
    fn test_reentry_updates_query_and_keeps_position() {
        let mut state = state();
        state.add_or_activate("/system/user", "", "Users");
        state.add_or_activate("/system/role", "", "Roles");
        let tab = state.add_or_activate("/system/user", "x=1", "");
        assert_eq!(tab.query, "x=1");
        assert_eq!(tab.title, "Users");
        assert_eq!(keys(&state), vec!["/index", "/system/user", "/system/role"]);
        assert_eq!(state.active_key(), Some("/system/user"));
    }

    #[test]
    fn test_reentry_with_query_scenario() {
        let mut state = state();
        state.add_or_activate("/system/user", "", "Users");
        state.add_or_activate("/system/user", "x=1", "Users");
        assert_eq!(state.tabs().len(), 2);
        assert_eq!(state.active_key(), Some("/system/user"));
        assert_eq!(state.get("/system/user").map(|t| t.query.as_str()), Some("x=1"));
    }

    #[test]
    fn test_reentry_overwrites_non_empty_title() {
        let mut state = state();
        state.add_or_activate("/system/notice", "", "Notice");
        state.add_or_activate("/system/notice", "", "Notices");
        assert_eq!(state.get("/system/notice").map(|t| t.title.as_str()), Some("Notices"));
    }

    #[test]
    fn test_switch_tab() {
        let mut state = state();
        state.add_or_activate("/system/user", "", "Users");
        state.add_or_activate("/system/role", "", "Roles");
        let tab = state.switch_tab("/system/user");
        assert_eq!(tab.map(|t| t.key), Some("/system/user".to_string()));
        assert_eq!(state.active_key(), Some("/system/user"));
    }

    #[test]
    fn test_switch_unknown_is_noop() {
        let mut state = state();
        state.add_or_activate("/system/user", "", "Users");
        let before = state.clone();
        assert!(state.switch_tab("/missing").is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn test_close_active_moves_to_last() {
        let mut state = state();
        state.add_or_activate("/system/user", "", "Users");
        state.add_or_activate("/system/role", "", "Roles");
        state.add_or_activate("/system/menu", "", "Menus");
        state.switch_tab("/system/user");

        let closed = state.close_tab("/system/user");
        assert_eq!(closed.removed, vec!["/system/user".to_string()]);
        // last tab, not the neighbour "/system/role"
        assert_eq!(state.active_key(), Some("/system/menu"));
        assert_eq!(closed.activated.map(|t| t.key), Some("/system/menu".to_string()));
    }

    #[test]
    fn test_close_inactive_keeps_active() {
        let mut state = state();
        state.add_or_activate("/system/user", "", "Users");
        state.add_or_activate("/system/role", "", "Roles");

        state.close_tab("/system/user");
        assert_eq!(keys(&state), vec!["/index", "/system/role"]);
        assert_eq!(state.active_key(), Some("/system/role"));
    }

    #[test]
    fn test_close_unknown_and_home_are_noops() {
        let mut state = state();
        state.add_or_activate("/system/user", "", "Users");
        let before = state.clone();
        assert!(state.close_tab("/missing").is_noop());
        assert!(state.close_tab("/index").is_noop());
        assert_eq!(state, before);
    }

    #[test]
    fn test_close_others() {
        let mut state = state();
        state.add_or_activate("/system/user", "", "Users");
        state.add_or_activate("/system/role", "", "Roles");
        state.add_or_activate("/system/dept", "", "Departments");

        let closed = state.close_others("/system/role");
        assert_eq!(
            closed.removed,
            vec!["/system/user".to_string(), "/system/dept".to_string()]
        );
        assert_eq!(keys(&state), vec!["/index", "/system/role"]);
        assert_eq!(state.active_key(), Some("/system/role"));
    }

    #[test]
    fn test_close_all_returns_home() {
        let mut state = state();
        state.add_or_activate("/system/user", "", "Users");
        state.add_or_activate("/system/role", "", "Roles");

        let closed = state.close_all();
        assert_eq!(closed.removed.len(), 2);
        assert_eq!(keys(&state), vec!["/index"]);
        assert_eq!(state.active_key(), Some("/index"));
    }

    #[test]
    fn test_update_title() {
        let mut state = state();
        state.add_or_activate("/system/config", "", "Config");
        state.update_title("/system/config", "Parameters");
        state.update_title("/system/config", "");
        assert_eq!(state.get("/system/config").map(|t| t.title.as_str()), Some("Parameters"));
    }
}
