//! Console pages opened inside tabs.
//!
//! CRUD tables and editors talk to the REST backend; here each page only
//! carries its search form so that unsaved input survives tab switches.

pub mod home;
pub mod monitor;
pub mod system;
pub mod user;

use leptos::prelude::*;
use thaw::*;

/// Common frame: heading, search field and a run counter.
#[component]
pub fn ConsolePage(title: &'static str, placeholder: &'static str) -> impl IntoView {
    let search = RwSignal::new(String::new());
    let runs = RwSignal::new(0u32);

    view! {
        <div class="page">
            <h2 class="page__title">{title}</h2>
            <div class="page__search">
                <Input value=search placeholder=placeholder />
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| runs.update(|n| *n += 1)
                >
                    "Найти"
                </Button>
                <Button on_click=move |_| {
                    search.set(String::new());
                    runs.set(0);
                }>
                    "Сбросить"
                </Button>
            </div>
            <div class="page__status">
                {move || format!("Запросов: {}, фильтр: '{}'", runs.get(), search.get())}
            </div>
        </div>
    }
}
