use contracts::shared::submit_guard::SubmitGuard;
use contracts::system::routing::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::api;
use crate::system::auth::context::use_auth_handle;

const LOGIN_FAILED: &str = "Houve um erro ao logar.";

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let submit = RwSignal::new(SubmitGuard::default());
    let is_loading = move || submit.with(|g| g.is_in_flight());

    let auth = use_auth_handle();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Ignore a second submit while the first is pending
        if !submit.try_update(|g| g.try_begin()).unwrap_or(false) {
            return;
        }

        let username_val = username.get_untracked();
        let password_val = password.get_untracked();
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(username_val, password_val).await {
                Ok(session) => {
                    // The route gate sends us to /admin once the state changes
                    auth.sign_in(session);
                }
                Err(e) => {
                    if e.is_auth_failure() {
                        log::warn!("Login rejected: {}", e);
                    } else {
                        log::error!("Login failed: {}", e);
                    }
                    let _ = set_error_message.try_set(Some(LOGIN_FAILED.to_string()));
                }
            }
            let _ = submit.try_update(|g| g.finish());
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Barbearia"</h1>
                <h2>"Área do barbeiro"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Usuário"</label>
                        <input
                            type="text"
                            id="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=is_loading
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Senha"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=is_loading
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=is_loading>
                        {move || if is_loading() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>

                <div class="login-info">
                    <a href=AppRoute::Home.path()>"← Voltar para o site"</a>
                </div>
            </div>
        </div>
    }
}
