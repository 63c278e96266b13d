use crate::routes::routes::AppRoutes;
use crate::shared::components::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Notices are shared by every page
    provide_context(ToastService::new());

    view! {
        <ConfigProvider>
            <AuthProvider>
                <AppRoutes />
                <ToastHost />
            </AuthProvider>
        </ConfigProvider>
    }
}
