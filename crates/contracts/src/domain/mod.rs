pub mod a001_appointment;
pub mod a002_barber;
pub mod a003_service;
