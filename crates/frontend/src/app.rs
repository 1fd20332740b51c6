use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::MENU_JSON;
use contracts::shared::navigation::{load_config, parse_nav_tree, NavigationConfig};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config(None).unwrap_or_else(|err| {
        log::error!("Failed to load navigation config: {:#}", err);
        NavigationConfig::default()
    });
    let nav_tree = parse_nav_tree(MENU_JSON).unwrap_or_else(|err| {
        log::error!("Failed to parse side navigation: {}", err);
        Vec::new()
    });

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new(config, nav_tree));

    view! {
        <AppShell />
    }
}
