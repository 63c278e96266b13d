use contracts::domain::a001_appointment::aggregate::ParsedAppointments;
use contracts::domain::a001_appointment::{parse_appointments, AppointmentId, StatusUpdateRequest};
use contracts::shared::endpoints;
use contracts::shared::error::ApiError;
use contracts::system::auth::Session;

use crate::shared::http;

/// Fetch every appointment of the signed-in barber
pub async fn fetch_appointments(session: &Session) -> Result<ParsedAppointments, ApiError> {
    let path = endpoints::appointments_by_barber(&session.barber_id);
    let response = http::get(&path, Some(session)).await?;
    parse_appointments(response.json_value()?)
}

/// Move an appointment to `status_code`; the response body is ignored
pub async fn update_status(
    session: &Session,
    id: AppointmentId,
    status_code: i32,
) -> Result<(), ApiError> {
    let request = StatusUpdateRequest {
        status: status_code,
    };
    http::patch(&endpoints::appointment_status(id), &request, Some(session)).await?;
    Ok(())
}
