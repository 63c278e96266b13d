use contracts::domain::a001_appointment::ViewMode;
use contracts::system::routing::AppRoute;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_appointment::ui::list::AppointmentsList;
use crate::system::auth::guard::RouteGate;
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;

#[component]
fn LoginRoute() -> impl IntoView {
    view! {
        <RouteGate route=AppRoute::Login>
            <LoginPage />
        </RouteGate>
    }
}

#[component]
fn AdminRoute(mode: ViewMode) -> impl IntoView {
    view! {
        <RouteGate route=AppRoute::for_view_mode(mode)>
            <AppointmentsList mode=mode />
        </RouteGate>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/login") view=LoginRoute />
                <Route
                    path=path!("/admin")
                    view=|| view! { <AdminRoute mode=ViewMode::Active /> }
                />
                <Route
                    path=path!("/admin/historico")
                    view=|| view! { <AdminRoute mode=ViewMode::History /> }
                />
            </Routes>
        </Router>
    }
}
