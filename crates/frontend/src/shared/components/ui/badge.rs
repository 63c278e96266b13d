use contracts::domain::a001_appointment::AppointmentStatus;
use leptos::prelude::*;

/// Status badge for an appointment; the class follows the category label
#[component]
pub fn StatusBadge(
    #[prop(into)]
    status: Signal<AppointmentStatus>,
) -> impl IntoView {
    view! {
        <span class=move || format!("status {}", status.get().css_class())>
            {move || status.get().display_name()}
        </span>
    }
}
