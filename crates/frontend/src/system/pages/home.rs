use contracts::system::routing::AppRoute;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

use crate::usecases::u501_book_appointment::BookingModal;

#[component]
pub fn HomePage() -> impl IntoView {
    let (show_booking, set_show_booking) = signal(false);

    view! {
        <div class="home">
            <header class="home__header">
                <span class="home__brand">"Barbearia"</span>
                <a class="home__login" href=AppRoute::Login.path()>"Área do barbeiro"</a>
            </header>

            <section class="home__hero">
                <h1>"Corte, barba e estilo"</h1>
                <p>"Escolha o barbeiro, o serviço e o horário. Sem fila."</p>
                <Button
                    appearance=ButtonAppearance::Primary
                    size=ButtonSize::Large
                    on_click=move |_| set_show_booking.set(true)
                >
                    "Agendar horário"
                </Button>
            </section>

            <Show when=move || show_booking.get()>
                <BookingModal on_close=Callback::new(move |_| set_show_booking.set(false)) />
            </Show>
        </div>
    }
}
