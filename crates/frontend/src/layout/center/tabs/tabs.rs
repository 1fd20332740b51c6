use crate::layout::center::tabs::tab::Tab as TabComponent;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::TabPage;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

/// Tab strip plus the content host.
///
/// The host renders every cached slot at once; inactive ones stay mounted
/// and are only hidden by `TabPage`.
#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || tabs_store.tabs()
                    key=|tab| tab.key.clone()
                    children=move |tab| {
                        view! { <TabComponent tab=tab /> }
                    }
                />
                <div class="tabs-bar__actions">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| tabs_store.close_all()
                    >
                        "Закрыть все"
                    </Button>
                </div>
            </div>
            <div class="tab-content">
                <For
                    each=move || {
                        let slots = tabs_store.cached_slots();
                        log!("📋 <For> each triggered. Cached slots: {}", slots.len());
                        slots
                    }
                    key=|slot| slot.clone()
                    children=move |(key, _id)| {
                        log!("👶 <For> children function called for: '{}'", key);
                        view! { <TabPage tab_key=key tabs_store=tabs_store /> }
                    }
                />
            </div>
        </div>
    }
}
