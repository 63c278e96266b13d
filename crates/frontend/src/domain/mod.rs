pub mod a001_appointment;
