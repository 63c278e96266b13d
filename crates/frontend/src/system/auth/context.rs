use contracts::shared::error::ApiError;
use contracts::system::auth::Session;
use contracts::system::routing::handle_auth_failure;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use super::storage::{self, LocalSessionStore};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // Initial load from localStorage; protected views re-read it on mount
    let (auth_state, set_auth_state) = signal(AuthState {
        session: storage::load_session(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Session operations for a component; safe to move into async tasks
#[derive(Clone, Copy)]
pub struct AuthHandle {
    pub state: ReadSignal<AuthState>,
    set_state: WriteSignal<AuthState>,
}

pub fn use_auth_handle() -> AuthHandle {
    let (state, set_state) = use_auth();
    AuthHandle { state, set_state }
}

impl AuthHandle {
    pub fn session(&self) -> Option<Session> {
        self.state.get_untracked().session
    }

    /// Re-read the store and publish the result when it differs
    pub fn sync_from_storage(&self) -> Option<Session> {
        let fresh = AuthState {
            session: storage::load_session(),
        };
        if self.state.get_untracked() != fresh {
            self.set_state.set(fresh.clone());
        }
        fresh.session
    }

    pub fn sign_in(&self, session: Session) {
        storage::save_session(&session);
        log::info!("Signed in as {} (barber {})", session.user_name, session.barber_id);
        self.set_state.set(AuthState {
            session: Some(session),
        });
    }

    /// Clear the store now and leave the page after `delay_ms`
    pub fn sign_out_after(&self, delay_ms: u32) {
        storage::clear_session();
        log::info!("Signed out");
        let set_state = self.set_state;
        Timeout::new(delay_ms, move || {
            let _ = set_state.try_set(AuthState::default());
        })
        .forget();
    }

    /// Drop the session on an authorization failure; the route gate then
    /// redirects to login. Returns `true` when the error was handled here.
    pub fn handle_api_error(&self, error: &ApiError) -> bool {
        match handle_auth_failure(&LocalSessionStore, error) {
            Some(_) => {
                log::warn!("Session rejected by the API, signing out");
                let _ = self.set_state.try_set(AuthState::default());
                true
            }
            None => false,
        }
    }
}
