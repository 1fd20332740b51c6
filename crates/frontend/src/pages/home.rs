use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page--home">
            <h2 class="page__title">"Admin Console"</h2>
            <p>"Выберите раздел в меню слева. Открытые разделы остаются во вкладках."</p>
        </div>
    }
}
