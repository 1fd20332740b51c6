use crate::layout::global_context::AppGlobalContext;
use contracts::shared::navigation::TabItem;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Tab(tab: TabItem) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let key_for_active = tab.key.clone();
    let is_active =
        Memo::new(move |_| tabs_store.active_key().as_deref() == Some(key_for_active.as_str()));

    // title may change on re-entry, the item itself is keyed by path
    let key_for_title = tab.key.clone();
    let title = move || tabs_store.tab_title(&key_for_title);

    let key_for_click = tab.key.clone();
    let on_click = move |_| tabs_store.switch_tab(&key_for_click);

    let closable = tabs_store.is_closable(&tab.key);
    let key_for_close = tab.key.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&key_for_close);
    };

    let key_for_others = tab.key.clone();
    let on_close_others = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        tabs_store.close_others(&key_for_others);
    };

    view! {
        <div
            class="tab"
            class:active=is_active
            title="ПКМ - закрыть остальные"
            on:click=on_click
            on:contextmenu=on_close_others
        >
            <span>{title}</span>
            {closable.then(|| view! {
                <button class="tab-close" on:click=on_close>"×"</button>
            })}
        </div>
    }
}
