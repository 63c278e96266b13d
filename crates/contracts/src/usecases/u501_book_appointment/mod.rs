//! Public booking form: field caps, validation and the request it produces

pub mod form;
pub mod request;

pub use form::{BookingField, BookingForm, BookingValidationError, OBSERVATION_MAX_CHARS};
pub use request::{success_message, BookingRequest, BookingServiceLine};
