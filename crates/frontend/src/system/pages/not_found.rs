use contracts::system::routing::AppRoute;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    log::warn!("No route matched the current location");

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Página não encontrada."</p>
            <a href=AppRoute::Home.path()>"Voltar para o início"</a>
        </div>
    }
}
