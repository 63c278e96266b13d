pub mod aggregate;
pub mod list;
pub mod reducer;
pub mod status;

pub use aggregate::{parse_appointments, Appointment, AppointmentDto, AppointmentId, StatusUpdateRequest};
pub use list::{partition, ListCursor, Partition, ViewMode};
pub use reducer::{AppointmentsAction, AppointmentsState};
pub use status::{AppointmentStatus, StatusAction, TransitionError};
