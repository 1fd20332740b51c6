use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let open_users = move |_| ctx.open_path("/system/user", "");

    view! {
        <div class="page">
            <h2 class="page__title">"Profile"</h2>
            <p>"Данные учётной записи загружаются с сервера."</p>
            <button class="page__link" on:click=open_users>"Пользователи"</button>
        </div>
    }
}
