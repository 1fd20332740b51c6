use leptos::prelude::*;

use super::ConsolePage;

#[component]
pub fn UserPage() -> impl IntoView {
    view! { <ConsolePage title="Users" placeholder="Логин или телефон" /> }
}

#[component]
pub fn RolePage() -> impl IntoView {
    view! { <ConsolePage title="Roles" placeholder="Название роли" /> }
}

#[component]
pub fn MenuPage() -> impl IntoView {
    view! { <ConsolePage title="Menus" placeholder="Название меню" /> }
}

#[component]
pub fn DeptPage() -> impl IntoView {
    view! { <ConsolePage title="Departments" placeholder="Название подразделения" /> }
}

#[component]
pub fn DictPage() -> impl IntoView {
    view! { <ConsolePage title="Dictionaries" placeholder="Тип словаря" /> }
}

#[component]
pub fn ConfigPage() -> impl IntoView {
    view! { <ConsolePage title="Parameters" placeholder="Ключ параметра" /> }
}

#[component]
pub fn NoticePage() -> impl IntoView {
    view! { <ConsolePage title="Notices" placeholder="Заголовок объявления" /> }
}

#[component]
pub fn OssPage() -> impl IntoView {
    view! { <ConsolePage title="Object storage" placeholder="Имя файла" /> }
}
