//! Shared types and client-side rules of the barbershop booking app.
//!
//! Everything here is target independent: the frontend crate renders it,
//! the unit tests run it on the host.

pub mod domain;
pub mod shared;
pub mod system;
pub mod usecases;
