use contracts::system::routing::{guard, AppRoute, RouteDecision};
use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth_handle;

/// Renders `children` when the session gate allows `route`, otherwise redirects.
///
/// The store is read again every time a gated view mounts.
#[component]
pub fn RouteGate(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth_handle();
    auth.sync_from_storage();

    move || match guard(route, auth.state.get().is_authenticated()) {
        RouteDecision::Render => children().into_any(),
        RouteDecision::Redirect(target) => view! { <Redirect path=target.path() /> }.into_any(),
    }
}
