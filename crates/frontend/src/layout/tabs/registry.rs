//! Tab content registry - единственный источник правды для маппинга путь → страница.
//!
//! Все известные модули страниц перечислены здесь; путь, которого нет в
//! таблице, не загружается.

use std::fmt;

use contracts::shared::navigation::RouteRegistry;
use leptos::prelude::*;

use crate::pages::{home, monitor, system, user};

/// A loadable page module: a name for diagnostics and its view factory.
#[derive(Clone, Copy)]
pub struct PageModule {
    pub name: &'static str,
    pub render: fn() -> AnyView,
}

impl PageModule {
    pub const fn new(name: &'static str, render: fn() -> AnyView) -> Self {
        Self { name, render }
    }

    pub fn view(&self) -> AnyView {
        log::debug!("✅ Creating page '{}'", self.name);
        (self.render)()
    }
}

// fn pointers are not comparable; the module name is the identity
impl PartialEq for PageModule {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for PageModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageModule").field("name", &self.name).finish()
    }
}

/// Builds the registry of every page the console can open in a tab.
pub fn page_registry(route_prefix: &str) -> RouteRegistry<PageModule> {
    RouteRegistry::new(
        route_prefix,
        PageModule::new("index", || view! { <home::HomePage /> }.into_any()),
    )
    // ═══════════════════════════════════════════════════════════════════
    // Home
    // ═══════════════════════════════════════════════════════════════════
    .register(
        "index",
        PageModule::new("index", || view! { <home::HomePage /> }.into_any()),
    )
    // ═══════════════════════════════════════════════════════════════════
    // System
    // ═══════════════════════════════════════════════════════════════════
    .register(
        "system/user",
        PageModule::new("system/user", || view! { <system::UserPage /> }.into_any()),
    )
    .register(
        "system/role",
        PageModule::new("system/role", || view! { <system::RolePage /> }.into_any()),
    )
    .register(
        "system/menu",
        PageModule::new("system/menu", || view! { <system::MenuPage /> }.into_any()),
    )
    .register(
        "system/dept",
        PageModule::new("system/dept", || view! { <system::DeptPage /> }.into_any()),
    )
    .register(
        "system/dict",
        PageModule::new("system/dict", || view! { <system::DictPage /> }.into_any()),
    )
    .register(
        "system/config",
        PageModule::new("system/config", || view! { <system::ConfigPage /> }.into_any()),
    )
    .register(
        "system/notice",
        PageModule::new("system/notice", || view! { <system::NoticePage /> }.into_any()),
    )
    .register(
        "system/oss",
        PageModule::new("system/oss", || view! { <system::OssPage /> }.into_any()),
    )
    // ═══════════════════════════════════════════════════════════════════
    // Monitor
    // ═══════════════════════════════════════════════════════════════════
    .register(
        "monitor/operlog",
        PageModule::new("monitor/operlog", || view! { <monitor::OperLogPage /> }.into_any()),
    )
    .register(
        "monitor/logininfor",
        PageModule::new("monitor/logininfor", || view! { <monitor::LoginLogPage /> }.into_any()),
    )
    // ═══════════════════════════════════════════════════════════════════
    // User
    // ═══════════════════════════════════════════════════════════════════
    .register(
        "user/profile",
        PageModule::new("user/profile", || view! { <user::ProfilePage /> }.into_any()),
    )
}
