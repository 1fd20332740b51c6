//! Сессия навигации: реестр вкладок + кэш содержимого.
//!
//! Каждая операция сначала меняет реестр, затем гарантирует слот в кэше для
//! ставшей активной вкладки. Возвращает `Activation`, по которому вызывающий
//! запускает загрузку (`Populate::Created`) и синхронизирует адресную строку.

use super::config::NavigationConfig;
use super::content_cache::{ContentCache, Populate};
use super::history::{sync_address, AddressBar};
use super::tab::TabItem;
use super::tabs_state::{Closed, TabsState};

/// The tab that ended up active and the state of its content slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub tab: TabItem,
    pub content: Populate,
}

impl Activation {
    /// Rewrites the address bar if it does not already show this tab.
    pub fn sync(&self, bar: &impl AddressBar) -> bool {
        sync_address(bar, &self.tab)
    }
}

#[derive(Debug, Clone)]
pub struct NavigationSession<U> {
    tabs: TabsState,
    cache: ContentCache<U>,
    evict_on_close: bool,
}

impl<U> NavigationSession<U> {
    /// Seeds the home tab; its content slot is created by the first
    /// [`NavigationSession::activate_current`].
    pub fn new(config: &NavigationConfig) -> Self {
        Self {
            tabs: TabsState::new(config.home_tab()),
            cache: ContentCache::new(),
            evict_on_close: config.evict_on_close,
        }
    }

    pub fn tabs(&self) -> &TabsState {
        &self.tabs
    }

    pub fn cache(&self) -> &ContentCache<U> {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut ContentCache<U> {
        &mut self.cache
    }

    /// Ensures the active tab has a content slot.
    pub fn activate_current(&mut self) -> Option<Activation> {
        let tab = self.tabs.active()?.clone();
        let content = self.cache.get_or_create(&tab.key, &tab.path, &tab.query);
        Some(Activation { tab, content })
    }

    /// Initial entry at `path?query`. The home slot is always created first so
    /// it precedes the entry tab in the content host; `/` and the empty path
    /// stay on home. Returns the home activation and, for any other path
    /// (home path included, so its query is kept), the entry activation.
    pub fn enter(
        &mut self,
        path: &str,
        query: &str,
        title: &str,
    ) -> (Option<Activation>, Option<Activation>) {
        let home = self.activate_current();
        if path.is_empty() || path == "/" {
            return (home, None);
        }
        let entry = self.open(path, query, title);
        (home, Some(entry))
    }

    /// A path became visible: add or re-activate its tab.
    pub fn open(&mut self, path: &str, query: &str, title: &str) -> Activation {
        let tab = self.tabs.add_or_activate(path, query, title).clone();
        let content = self.cache.get_or_create(&tab.key, &tab.path, &tab.query);
        Activation { tab, content }
    }

    pub fn switch(&mut self, key: &str) -> Option<Activation> {
        self.tabs.switch_tab(key)?;
        self.activate_current()
    }

    pub fn close(&mut self, key: &str) -> (Closed, Option<Activation>) {
        let closed = self.tabs.close_tab(key);
        self.after_close(closed)
    }

    pub fn close_others(&mut self, key: &str) -> (Closed, Option<Activation>) {
        let closed = self.tabs.close_others(key);
        self.after_close(closed)
    }

    pub fn close_all(&mut self) -> (Closed, Option<Activation>) {
        let closed = self.tabs.close_all();
        self.after_close(closed)
    }

    pub fn rename(&mut self, key: &str, title: &str) {
        self.tabs.update_title(key, title);
    }

    fn after_close(&mut self, closed: Closed) -> (Closed, Option<Activation>) {
        if closed.is_noop() {
            return (closed, None);
        }
        if self.evict_on_close {
            for key in &closed.removed {
                self.cache.evict(key);
            }
        }
        let activation = self.activate_current();
        (closed, activation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::navigation::config::load_config;
    use crate::shared::navigation::history::testing::RecordingBar;
    use crate::shared::navigation::history::AddressBar;

    fn session(evict: bool) -> NavigationSession<&'static str> {
        let mut config = load_config(None).unwrap();
        config.evict_on_close = evict;
        let mut session = NavigationSession::new(&config);
        session.activate_current();
        session
    }

    fn keys<U>(session: &NavigationSession<U>) -> Vec<String> {
        session.tabs().tabs().iter().map(|t| t.key.clone()).collect()
    }

    #[test]
    fn test_home_content_created_on_start() {
        let session = session(false);
        assert!(session.cache().contains("/index"));
    }

    #[test]
    fn test_open_open_close_scenario() {
        let mut session = session(false);
        let user = session.open("/system/user", "", "Users");
        assert_eq!(user.tab.key, "/system/user");
        assert!(matches!(user.content, Populate::Created(_)));
        assert_eq!(session.tabs().active_key(), Some("/system/user"));

        session.open("/system/role", "", "Roles");
        assert_eq!(keys(&session), ["/index", "/system/user", "/system/role"]);
        assert_eq!(session.tabs().active_key(), Some("/system/role"));

        let (closed, activation) = session.close("/system/user");
        assert_eq!(closed.removed, ["/system/user"]);
        assert_eq!(keys(&session), ["/index", "/system/role"]);
        assert_eq!(session.tabs().active_key(), Some("/system/role"));
        assert_eq!(activation.map(|a| a.tab.key), Some("/system/role".to_string()));
        // content stays resident by default
        assert!(session.cache().contains("/system/user"));
    }

    #[test]
    fn test_reopen_with_query_reuses_content() {
        let mut session = session(false);
        let first = session.open("/system/user", "", "Users");
        let second = session.open("/system/user", "x=1", "Users");

        assert_eq!(keys(&session), ["/index", "/system/user"]);
        assert_eq!(session.tabs().active_key(), Some("/system/user"));
        assert_eq!(second.tab.query, "x=1");
        assert_eq!(second.content, Populate::Existing(first.content.id()));
    }

    #[test]
    fn test_evict_on_close() {
        let mut session = session(true);
        let first = session.open("/system/notice", "", "Notices");
        session.close("/system/notice");
        assert!(!session.cache().contains("/system/notice"));

        let reopened = session.open("/system/notice", "", "Notices");
        assert!(matches!(reopened.content, Populate::Created(id) if id != first.content.id()));
    }

    #[test]
    fn test_close_all_keeps_home_content() {
        let mut session = session(true);
        session.open("/system/user", "", "Users");
        session.open("/system/role", "", "Roles");
        let (closed, activation) = session.close_all();
        assert_eq!(closed.removed.len(), 2);
        assert_eq!(activation.map(|a| a.content), Some(Populate::Existing(1)));
        assert_eq!(session.cache().keys(), ["/index"]);
    }

    #[test]
    fn test_noop_close_has_no_activation() {
        let mut session = session(false);
        let (closed, activation) = session.close("/missing");
        assert!(closed.is_noop());
        assert!(activation.is_none());
    }

    #[test]
    fn test_enter_at_home_keeps_query() {
        let bar = RecordingBar::at("/index?x=1");
        let mut config = load_config(None).unwrap();
        config.evict_on_close = false;
        let mut session: NavigationSession<&'static str> = NavigationSession::new(&config);

        let (home, entry) = session.enter("/index", "x=1", "");
        assert!(matches!(home.map(|a| a.content), Some(Populate::Created(1))));
        let entry = entry.unwrap();
        assert_eq!(entry.content, Populate::Existing(1));
        assert!(!entry.sync(&bar));
        assert_eq!(bar.current(), "/index?x=1");
        assert_eq!(keys(&session), ["/index"]);
        assert_eq!(session.tabs().get("/index").map(|t| t.title.as_str()), Some("Home"));
    }

    #[test]
    fn test_enter_at_root_stays_home() {
        let mut session: NavigationSession<&'static str> =
            NavigationSession::new(&load_config(None).unwrap());
        let (home, entry) = session.enter("/", "", "");
        assert_eq!(home.map(|a| a.tab.key), Some("/index".to_string()));
        assert!(entry.is_none());
    }

    #[test]
    fn test_enter_deep_link() {
        let mut session: NavigationSession<&'static str> =
            NavigationSession::new(&load_config(None).unwrap());
        let (_, entry) = session.enter("/system/role", "id=7", "Roles");
        assert_eq!(entry.map(|a| a.tab.address()), Some("/system/role?id=7".to_string()));
        assert_eq!(session.cache().keys(), ["/index", "/system/role"]);
        assert_eq!(session.tabs().active_key(), Some("/system/role"));
    }

    #[test]
    fn test_activation_sync() {
        let bar = RecordingBar::at("/index");
        let mut session = session(false);
        session.open("/system/user", "x=1", "Users").sync(&bar);
        session.open("/system/role", "", "Roles").sync(&bar);
        if let Some(a) = session.switch("/system/user") {
            a.sync(&bar);
        }
        assert_eq!(bar.current(), "/system/user?x=1");
        assert!(session.switch("/missing").is_none());
    }
}
