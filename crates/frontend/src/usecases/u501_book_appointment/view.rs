use contracts::usecases::u501_book_appointment::{BookingField, OBSERVATION_MAX_CHARS};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonType, Spinner};

use super::view_model::BookingViewModel;
use crate::shared::components::toast::use_toast;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::modal::Modal;

#[component]
pub fn BookingModal(on_close: Callback<()>) -> impl IntoView {
    let vm = BookingViewModel::new();
    let toast = use_toast();

    vm.load_options(toast);

    let setter = move |field: BookingField| Callback::new(move |value: String| vm.set_field(field, value));
    let busy = vm.is_submitting();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command(toast, on_close);
    };

    view! {
        <Modal title="Agendar horário" on_close=on_close>
            <Show
                when=move || !vm.loading_options.get()
                fallback=|| view! {
                    <div class="booking-loading">
                        <Spinner />
                        <p>"Carregando opções..."</p>
                    </div>
                }
            >
                <form class="booking-form" on:submit=on_submit>
                    {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <Input
                        label="Nome:"
                        id="booking-nome"
                        value=vm.field(BookingField::Name)
                        on_input=setter(BookingField::Name)
                        placeholder="Digite seu nome completo"
                        required=true
                        disabled=busy
                    />
                    <Input
                        label="CPF:"
                        id="booking-cpf"
                        value=vm.field(BookingField::Cpf)
                        on_input=setter(BookingField::Cpf)
                        placeholder="Somente números"
                        max_length=BookingField::Cpf.max_chars().unwrap_or_default()
                        disabled=busy
                    />
                    <Input
                        label="Telefone:"
                        id="booking-telefone"
                        input_type="tel"
                        value=vm.field(BookingField::Phone)
                        on_input=setter(BookingField::Phone)
                        placeholder="Ex: 51999999999"
                        max_length=BookingField::Phone.max_chars().unwrap_or_default()
                        required=true
                        disabled=busy
                    />
                    <Select
                        label="Barbeiro:"
                        id="booking-barbeiro"
                        value=vm.field(BookingField::Barber)
                        on_change=setter(BookingField::Barber)
                        options=vm.barber_options()
                        placeholder="Selecione"
                        required=true
                        disabled=busy
                    />
                    <Select
                        label="Serviço:"
                        id="booking-servico"
                        value=vm.field(BookingField::Service)
                        on_change=setter(BookingField::Service)
                        options=vm.service_options()
                        placeholder="Selecione"
                        required=true
                        disabled=busy
                    />
                    <Input
                        label="Data e Hora:"
                        id="booking-data-hora"
                        input_type="datetime-local"
                        value=vm.field(BookingField::DateTime)
                        on_input=setter(BookingField::DateTime)
                        required=true
                        disabled=busy
                    />
                    <Textarea
                        label="Observação:"
                        id="booking-observacao"
                        value=vm.field(BookingField::Observation)
                        on_input=setter(BookingField::Observation)
                        placeholder="Alguma preferência? (opcional)"
                        max_length=OBSERVATION_MAX_CHARS
                        counter=vm.observation_counter()
                        disabled=busy
                    />

                    <div class="booking-actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            button_type=ButtonType::Submit
                            loading=busy
                            disabled=busy
                        >
                            {move || if busy.get() { "Enviando..." } else { "Confirmar agendamento" }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            button_type=ButtonType::Button
                            on_click=move |_| on_close.run(())
                        >
                            "Cancelar"
                        </Button>
                    </div>
                </form>
            </Show>
        </Modal>
    }
}
