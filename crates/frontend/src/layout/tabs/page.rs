//! TabPage component - wrapper для отображения контента таба
//!
//! Отвечает за:
//! - Показ/скрытие контента в зависимости от активности таба (без размонтирования)
//! - Индикатор загрузки, пока модуль страницы не готов
//! - Заглушку с ошибкой, если модуль не найден

use contracts::shared::navigation::Loadable;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;

/// Компонент-обёртка для кэшированного содержимого одного таба.
///
/// Создаётся один раз на слот кэша. Содержимое строится, когда слот переходит
/// из `Pending` в итоговое состояние, и дальше не пересоздаётся.
#[component]
pub fn TabPage(tab_key: String, tabs_store: AppGlobalContext) -> impl IntoView {
    let key_for_active = tab_key.clone();
    let is_active = move || tabs_store.active_key().as_deref() == Some(key_for_active.as_str());

    log!("🔨 TabPage CREATED for: '{}'", tab_key);

    let key_for_cleanup = tab_key.clone();
    on_cleanup(move || {
        log!("💥 TabPage DESTROYED for: '{}'", key_for_cleanup);
    });

    // Memo: the page view is rebuilt only when the slot state itself changes
    let key_for_state = tab_key.clone();
    let state = Memo::new(move |_| tabs_store.slot_state(&key_for_state));

    let key_for_close = tab_key.clone();
    let content = move || match state.get() {
        None | Some(Loadable::Pending) => view! {
            <div class="tabs__loading">
                <Spinner />
            </div>
        }
        .into_any(),
        Some(Loadable::Ready(module)) => module.view(),
        Some(Loadable::Failed(err)) => {
            let key_for_close = key_for_close.clone();
            view! {
                <div class="tabs__error">
                    <p>"Страница не загружена: " {err.to_string()}</p>
                    <Button on_click=move |_| tabs_store.close_tab(&key_for_close)>
                        "Закрыть вкладку"
                    </Button>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}
