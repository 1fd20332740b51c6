use std::collections::BTreeMap;

use contracts::shared::navigation::{
    resolve_title, split_address, Activation, AddressBar, Loadable, NavNode, NavigationConfig,
    NavigationError, NavigationSession, Populate, RouteRegistry, SlotId, TabItem,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::layout::history::{listen_popstate, BrowserHistory};
use crate::layout::tabs::registry::{page_registry, PageModule};

/// Глобальное состояние навигации, передаётся через context.
///
/// Одна сессия на всё приложение; в тестах и при перезапуске создаётся заново.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub session: RwSignal<NavigationSession<PageModule>>,
    pub left_open: RwSignal<bool>,
    nav_tree: StoredValue<Vec<NavNode>>,
    title_overrides: StoredValue<BTreeMap<String, String>>,
    registry: StoredValue<RouteRegistry<PageModule>>,
}

impl AppGlobalContext {
    pub fn new(config: NavigationConfig, nav_tree: Vec<NavNode>) -> Self {
        let registry = page_registry(&config.route_prefix);
        let title_overrides = config.title_overrides();
        Self {
            session: RwSignal::new(NavigationSession::new(&config)),
            left_open: RwSignal::new(true),
            nav_tree: StoredValue::new(nav_tree),
            title_overrides: StoredValue::new(title_overrides),
            registry: StoredValue::new(registry),
        }
    }

    pub fn nav_tree(&self) -> Vec<NavNode> {
        self.nav_tree.get_value()
    }

    /// Opens the tab for the address the page was loaded with and follows
    /// later back/forward navigation. Runs once when the shell is created.
    pub fn init_router_integration(&self) {
        let this = *self;

        let initial = BrowserHistory.current();
        let (path, query) = split_address(&initial);
        let title = self.title_for(path);
        let entered = self.session.try_update(|s| s.enter(path, query, &title));
        if let Some((home, entry)) = entered {
            match (home, entry) {
                (Some(home), Some(entry)) => {
                    this.schedule(&home);
                    this.apply(entry);
                }
                (Some(home), None) => this.apply(home),
                (None, Some(entry)) => this.apply(entry),
                (None, None) => {}
            }
        }

        listen_popstate(move |address| {
            let (path, query) = split_address(&address);
            log::debug!("popstate -> '{}'", address);
            this.open_path(path, query);
        });
    }

    /// A path became visible (menu click, direct entry, popstate).
    pub fn open_path(&self, path: &str, query: &str) {
        let title = self.title_for(path);
        let activation = self.session.try_update(|s| s.open(path, query, &title));
        if let Some(activation) = activation {
            self.apply(activation);
        }
    }

    pub fn switch_tab(&self, key: &str) {
        if let Some(activation) = self.session.try_update(|s| s.switch(key)).flatten() {
            self.apply(activation);
        }
    }

    pub fn close_tab(&self, key: &str) {
        if let Some((_, Some(activation))) = self.session.try_update(|s| s.close(key)) {
            self.apply(activation);
        }
    }

    pub fn close_others(&self, key: &str) {
        if let Some((_, Some(activation))) = self.session.try_update(|s| s.close_others(key)) {
            self.apply(activation);
        }
    }

    pub fn close_all(&self) {
        if let Some((_, Some(activation))) = self.session.try_update(|s| s.close_all()) {
            self.apply(activation);
        }
    }

    pub fn update_tab_title(&self, key: &str, title: &str) {
        self.session.update(|s| s.rename(key, title));
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn tabs(&self) -> Vec<TabItem> {
        self.session.with(|s| s.tabs().tabs().to_vec())
    }

    pub fn active_key(&self) -> Option<String> {
        self.session.with(|s| s.tabs().active_key().map(str::to_string))
    }

    pub fn is_closable(&self, key: &str) -> bool {
        self.session.with_untracked(|s| s.tabs().is_closable(key))
    }

    pub fn tab_title(&self, key: &str) -> String {
        self.session.with(|s| {
            s.tabs()
                .get(key)
                .map(|tab| tab.title.clone())
                .unwrap_or_default()
        })
    }

    /// Cached content slots in render order.
    pub fn cached_slots(&self) -> Vec<(String, SlotId)> {
        self.session.with(|s| {
            s.cache()
                .keys()
                .iter()
                .filter_map(|key| s.cache().get(key).map(|slot| (key.clone(), slot.id)))
                .collect()
        })
    }

    pub fn slot_state(&self, key: &str) -> Option<Loadable<PageModule>> {
        self.session.with(|s| s.cache().state(key).cloned())
    }

    fn title_for(&self, path: &str) -> String {
        self.nav_tree.with_value(|tree| {
            self.title_overrides
                .with_value(|overrides| resolve_title(tree, overrides, path))
        })
    }

    fn apply(&self, activation: Activation) {
        self.schedule(&activation);
        activation.sync(&BrowserHistory);
    }

    /// Resolves a freshly created slot on the next tick, so the loading
    /// indicator paints and the triggering event handler finishes first.
    fn schedule(&self, activation: &Activation) {
        let Populate::Created(id) = activation.content else {
            return;
        };
        let this = *self;
        let key = activation.tab.key.clone();
        let path = activation.tab.path.clone();
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            let outcome = this.resolve(&path);
            this.session.update(|s| {
                s.cache_mut().settle(&key, id, outcome);
            });
        });
    }

    fn resolve(&self, path: &str) -> Result<PageModule, NavigationError> {
        let decoded = urlencoding::decode(path)
            .map_err(|_| NavigationError::InvalidPath(path.to_string()))?;
        self.registry.with_value(|registry| registry.resolve(&decoded))
    }
}
