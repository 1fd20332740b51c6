use leptos::prelude::*;

use super::ConsolePage;

#[component]
pub fn OperLogPage() -> impl IntoView {
    view! { <ConsolePage title="Operation log" placeholder="Модуль или оператор" /> }
}

#[component]
pub fn LoginLogPage() -> impl IntoView {
    view! { <ConsolePage title="Login log" placeholder="Адрес или пользователь" /> }
}
