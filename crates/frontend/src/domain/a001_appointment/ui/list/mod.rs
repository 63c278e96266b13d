mod state;

use contracts::domain::a001_appointment::{
    Appointment, AppointmentId, AppointmentsAction, StatusAction, ViewMode,
};
use contracts::shared::error::ApiError;
use contracts::system::routing::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_appointment::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::toast::{use_toast, ToastService};
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::format_datetime;
use crate::system::auth::context::use_auth_handle;
use state::create_state;

const LOGOUT_REDIRECT_DELAY_MS: u32 = 800;
const STATUS_UPDATED: &str = "Status atualizado com sucesso ✅";
const STATUS_UPDATE_FAILED: &str = "Erro ao atualizar o status ❌";
const SIGNED_OUT: &str = "Sessão encerrada com sucesso 👋";

/// Barber dashboard: the active or history partition of the barber's appointments
#[component]
pub fn AppointmentsList(mode: ViewMode) -> impl IntoView {
    let state = create_state(mode);
    let (loading, set_loading) = signal(true);
    let auth = use_auth_handle();
    let toast = use_toast();

    let load_data = move || {
        let Some(session) = auth.session() else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            let items = match api::fetch_appointments(&session).await {
                Ok(parsed) => {
                    if !parsed.skipped.is_empty() {
                        log::warn!(
                            "Skipped {} malformed appointments: {:?}",
                            parsed.skipped.len(),
                            parsed.skipped
                        );
                    }
                    parsed.items
                }
                Err(e) => {
                    report_load_error(&e, auth.handle_api_error(&e), toast);
                    Vec::new()
                }
            };

            // The view may be gone by now; every write below tolerates that
            let _ = state.try_update(|s| {
                s.data.apply(AppointmentsAction::Loaded(items));
                s.is_loaded = true;

                let unclassified = s.data.partition().unclassified.len();
                if unclassified > 0 {
                    log::warn!(
                        "{} appointments have an unknown status and are not listed",
                        unclassified
                    );
                }
            });
            let _ = set_loading.try_set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let change_status = move |id: AppointmentId, action: StatusAction| {
        let Some(session) = auth.session() else {
            return;
        };
        let target = action.target_code();

        match state.try_update(|s| s.data.begin_transition(id, target)) {
            Some(Ok(())) => {}
            Some(Err(e)) => {
                log::warn!("Status change ignored: {}", e);
                return;
            }
            None => return,
        }

        spawn_local(async move {
            match api::update_status(&session, id, target).await {
                Ok(()) => {
                    log::info!("Appointment {} moved to status {}", id, target);
                    let _ = state.try_update(|s| {
                        s.data.apply(AppointmentsAction::TransitionSucceeded {
                            id,
                            status_code: target,
                        });
                        // The row may have left this partition
                        let len = s.visible_len();
                        let page = s.cursor.page;
                        s.cursor.go_to(page, len);
                    });
                    toast.success(STATUS_UPDATED);
                }
                Err(e) => {
                    let _ = state.try_update(|s| s.data.apply(AppointmentsAction::TransitionFailed(id)));
                    if !auth.handle_api_error(&e) {
                        log::error!("Failed to update appointment {}: {}", id, e);
                        toast.error(STATUS_UPDATE_FAILED);
                    }
                }
            }
        });
    };

    let go_to_page = move |page: usize| {
        state.update(|s| {
            let len = s.visible_len();
            s.cursor.go_to(page, len);
        });
    };

    let logout = move |_: leptos::ev::MouseEvent| {
        toast.success(SIGNED_OUT);
        auth.sign_out_after(LOGOUT_REDIRECT_DELAY_MS);
    };

    let window = Memo::new(move |_| state.with(|s| s.cursor.window(&s.data.partition())));
    let tab_class = move |tab: ViewMode| if tab == mode { "aba ativa" } else { "aba" };

    view! {
        <div class="admin-page">
            <div class="top-buttons">
                <a class="voltar-site" href=AppRoute::Home.path()>"← Voltar ao site"</a>
                <Button appearance=ButtonAppearance::Secondary on_click=logout>
                    "⎋ Sair do painel"
                </Button>
            </div>

            <div class="admin-container">
                <h1>"💈 Painel do Barbeiro"</h1>
                <p>{mode.title()}</p>

                <div class="abas-container">
                    {[ViewMode::Active, ViewMode::History]
                        .into_iter()
                        .map(|tab| view! {
                            <a class=tab_class(tab) href=AppRoute::for_view_mode(tab).path()>
                                {tab.tab_label()}
                            </a>
                        })
                        .collect_view()}
                </div>

                <div class="admin-table">
                    {move || {
                        if loading.get() {
                            view! {
                                <Flex gap=FlexGap::Small style="align-items: center; justify-content: center;">
                                    <Spinner />
                                    <span>"Carregando..."</span>
                                </Flex>
                            }.into_any()
                        } else if window.with(|w| w.total_count == 0) {
                            view! {
                                <div class="admin-empty">
                                    <p>"Nenhum agendamento encontrado."</p>
                                </div>
                            }.into_any()
                        } else {
                            view! {
                                <Table attr:style="width: 100%;">
                                    <TableHeader>
                                        <TableRow>
                                            <TableHeaderCell>"Cliente"</TableHeaderCell>
                                            <TableHeaderCell>"Serviços"</TableHeaderCell>
                                            <TableHeaderCell>"Data"</TableHeaderCell>
                                            <TableHeaderCell>"Status"</TableHeaderCell>
                                            <TableHeaderCell>"Observação"</TableHeaderCell>
                                            <TableHeaderCell>"Ações"</TableHeaderCell>
                                        </TableRow>
                                    </TableHeader>
                                    <TableBody>
                                        <For
                                            each=move || window.get().items
                                            // status is part of the key so a changed row re-renders
                                            key=|a: &Appointment| (a.id, a.status_code)
                                            children=move |appointment: Appointment| {
                                                let id = appointment.id;
                                                view! {
                                                    <AppointmentRow
                                                        appointment=appointment
                                                        busy=Signal::derive(move || state.with(|s| s.data.is_in_flight(id)))
                                                        on_action=Callback::new(move |(id, action)| change_status(id, action))
                                                    />
                                                }
                                            }
                                        />
                                    </TableBody>
                                </Table>
                            }.into_any()
                        }
                    }}
                </div>

                <Show when=move || window.with(|w| w.needs_pager())>
                    <PaginationControls
                        current_page=Signal::derive(move || window.with(|w| w.page))
                        total_pages=Signal::derive(move || window.with(|w| w.display_total_pages()))
                        has_previous=Signal::derive(move || window.with(|w| w.has_previous()))
                        has_next=Signal::derive(move || window.with(|w| w.has_next()))
                        on_page_change=Callback::new(go_to_page)
                    />
                </Show>
            </div>
        </div>
    }
}

fn report_load_error(error: &ApiError, handled: bool, toast: ToastService) {
    if handled {
        return;
    }
    match error {
        ApiError::Malformed(detail) => {
            log::warn!("Appointments response not understood, showing none: {}", detail);
        }
        other => {
            log::error!("Failed to load appointments: {}", other);
            toast.error(other.user_message());
        }
    }
}

#[component]
fn AppointmentRow(
    appointment: Appointment,
    /// A status change for this row is awaiting the API
    #[prop(into)]
    busy: Signal<bool>,
    on_action: Callback<(AppointmentId, StatusAction)>,
) -> impl IntoView {
    let id = appointment.id;
    let status = appointment.status();
    let client_name = appointment.client_name.clone();
    let services_label = appointment.services_label();
    let scheduled_at = format_datetime(&appointment.scheduled_at);
    let observation_label = appointment.observation_label().to_string();

    view! {
        <TableRow>
            <TableCell attr:data-label="Cliente">
                <TableCellLayout truncate=true>{client_name}</TableCellLayout>
            </TableCell>
            <TableCell attr:data-label="Serviços">
                <TableCellLayout>{services_label}</TableCellLayout>
            </TableCell>
            <TableCell attr:data-label="Data">
                <TableCellLayout>{scheduled_at}</TableCellLayout>
            </TableCell>
            <TableCell attr:data-label="Status">
                <StatusBadge status=status />
            </TableCell>
            <TableCell attr:data-label="Observação">
                <TableCellLayout truncate=true>
                    {observation_label}
                </TableCellLayout>
            </TableCell>
            <TableCell attr:data-label="Ações">
                <div class="acoes-admin">
                    {status
                        .actions()
                        .iter()
                        .copied()
                        .map(|action| view! {
                            <Button
                                size=ButtonSize::Small
                                appearance=ButtonAppearance::Subtle
                                disabled=busy
                                on_click=move |_| on_action.run((id, action))
                            >
                                {action.label()}
                            </Button>
                        })
                        .collect_view()}
                </div>
            </TableCell>
        </TableRow>
    }
}
