use contracts::domain::a002_barber::Barber;
use contracts::domain::a003_service::Service;
use contracts::shared::error::ApiError;
use contracts::shared::submit_guard::SubmitGuard;
use contracts::usecases::u501_book_appointment::{BookingField, BookingForm};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::components::toast::ToastService;

const OPTIONS_LOAD_FAILED: &str = "⚠️ Erro ao carregar barbeiros ou serviços. Tente novamente mais tarde.";

/// ViewModel for the public booking form
#[derive(Clone, Copy)]
pub struct BookingViewModel {
    pub form: RwSignal<BookingForm>,
    pub barbers: RwSignal<Vec<Barber>>,
    pub services: RwSignal<Vec<Service>>,
    pub loading_options: RwSignal<bool>,
    pub submit: RwSignal<SubmitGuard>,
    /// Inline validation message
    pub error: RwSignal<Option<String>>,
}

impl BookingViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(BookingForm::default()),
            barbers: RwSignal::new(Vec::new()),
            services: RwSignal::new(Vec::new()),
            loading_options: RwSignal::new(true),
            submit: RwSignal::new(SubmitGuard::default()),
            error: RwSignal::new(None),
        }
    }

    pub fn field(&self, field: BookingField) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.get(field).to_string()))
    }

    pub fn set_field(&self, field: BookingField, value: String) {
        // Caps are applied inside `set`; the input shows the stored text
        self.form.update(|f| f.set(field, &value));
    }

    pub fn observation_counter(&self) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.observation_counter()))
    }

    pub fn is_submitting(&self) -> Signal<bool> {
        let submit = self.submit;
        Signal::derive(move || submit.with(|g| g.is_in_flight()))
    }

    pub fn barber_options(&self) -> Signal<Vec<(String, String)>> {
        let barbers = self.barbers;
        Signal::derive(move || barbers.with(|list| list.iter().map(Barber::to_option).collect()))
    }

    pub fn service_options(&self) -> Signal<Vec<(String, String)>> {
        let services = self.services;
        Signal::derive(move || services.with(|list| list.iter().map(Service::to_option).collect()))
    }

    /// Load barbers and services together; a failure of either leaves both lists empty
    pub fn load_options(&self, toast: ToastService) {
        let vm = *self;
        spawn_local(async move {
            let (barbers, services) =
                futures::future::join(api::fetch_barbers(), api::fetch_services()).await;

            match (barbers, services) {
                (Ok(barbers), Ok(services)) => {
                    log::info!("Loaded {} barbers and {} services", barbers.len(), services.len());
                    let _ = vm.barbers.try_set(barbers);
                    let _ = vm.services.try_set(services);
                }
                (Err(e), _) | (_, Err(e)) => {
                    log::error!("Failed to load booking options: {}", e);
                    toast.error(OPTIONS_LOAD_FAILED);
                }
            }
            let _ = vm.loading_options.try_set(false);
        });
    }

    /// Validate, then send the booking. Nothing is sent while a previous
    /// submission is pending or when validation fails.
    pub fn submit_command(&self, toast: ToastService, on_success: Callback<()>) {
        let request = match self.form.with_untracked(|f| f.validate()) {
            Ok(request) => request,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };

        if !self.submit.try_update(|g| g.try_begin()).unwrap_or(false) {
            log::warn!("Booking already being submitted, ignoring");
            return;
        }
        self.error.set(None);

        let vm = *self;
        spawn_local(async move {
            match api::create_appointment(&request).await {
                Ok(message) => {
                    log::info!("Booking created for barber {}", request.barbeiro_id);
                    toast.success(format!("✅ {}", message));
                    let _ = vm.submit.try_update(|g| g.finish());
                    on_success.run(());
                }
                Err(e) => {
                    // Form stays open with its data
                    log::error!("Failed to create booking: {}", e);
                    toast.error(booking_failure_message(&e));
                    let _ = vm.submit.try_update(|g| g.finish());
                }
            }
        });
    }
}

impl Default for BookingViewModel {
    fn default() -> Self {
        Self::new()
    }
}

fn booking_failure_message(error: &ApiError) -> String {
    match error {
        ApiError::ServerRejection { message: None, .. } => "❌ Erro ao criar agendamento.".to_string(),
        ApiError::Network(_) => "❌ Falha inesperada.".to_string(),
        other => format!("❌ {}", other.user_message()),
    }
}
