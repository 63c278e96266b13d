pub mod aggregate;

pub use aggregate::{Barber, BarberId};
