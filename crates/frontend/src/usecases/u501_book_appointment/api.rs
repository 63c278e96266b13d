use contracts::domain::a002_barber::Barber;
use contracts::domain::a003_service::Service;
use contracts::shared::endpoints;
use contracts::shared::envelope::parse_list;
use contracts::shared::error::ApiError;
use contracts::usecases::u501_book_appointment::{success_message, BookingRequest};

use crate::shared::http;

pub async fn fetch_barbers() -> Result<Vec<Barber>, ApiError> {
    let response = http::get(endpoints::BARBERS, None).await?;
    parse_list(response.json_value()?)
}

pub async fn fetch_services() -> Result<Vec<Service>, ApiError> {
    let response = http::get(endpoints::SERVICES, None).await?;
    parse_list(response.json_value()?)
}

/// Submit a booking; returns the notice to show on success
pub async fn create_appointment(request: &BookingRequest) -> Result<String, ApiError> {
    let response = http::post(endpoints::APPOINTMENTS, request, None).await?;
    Ok(success_message(&response.body))
}
