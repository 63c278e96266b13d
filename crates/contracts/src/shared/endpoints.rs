//! Paths of the booking API, relative to the configured base URL

use crate::domain::a001_appointment::AppointmentId;

pub const LOGIN: &str = "/api/login";
pub const BARBERS: &str = "/api/barbeiro";
pub const SERVICES: &str = "/api/servico";
pub const APPOINTMENTS: &str = "/api/agendamento";

/// Appointments of one barber (bearer auth)
pub fn appointments_by_barber(barber_id: &str) -> String {
    format!("{}/barbeiro/{}", APPOINTMENTS, urlencoding::encode(barber_id))
}

/// Status change of one appointment (bearer auth)
pub fn appointment_status(id: AppointmentId) -> String {
    format!("{}/status/{}", APPOINTMENTS, id)
}
