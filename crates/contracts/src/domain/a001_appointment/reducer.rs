//! Local state of the admin list.
//!
//! Status changes are applied optimistically: once the API accepts a change the
//! new code is written into the local copy and the list is never re-fetched.

use std::collections::HashSet;

use super::aggregate::{Appointment, AppointmentId};
use super::list::{partition, Partition};
use super::status::TransitionError;

#[derive(Debug, Clone, PartialEq)]
pub enum AppointmentsAction {
    Loaded(Vec<Appointment>),
    TransitionStarted(AppointmentId),
    TransitionSucceeded { id: AppointmentId, status_code: i32 },
    TransitionFailed(AppointmentId),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentsState {
    pub items: Vec<Appointment>,
    /// Appointments with a status change awaiting the API
    pub in_flight: HashSet<AppointmentId>,
}

impl AppointmentsState {
    pub fn apply(&mut self, action: AppointmentsAction) {
        match action {
            AppointmentsAction::Loaded(items) => {
                self.items = items;
                self.in_flight.clear();
            }
            AppointmentsAction::TransitionStarted(id) => {
                self.in_flight.insert(id);
            }
            AppointmentsAction::TransitionSucceeded { id, status_code } => {
                self.in_flight.remove(&id);
                if let Some(item) = self.items.iter_mut().find(|a| a.id == id) {
                    item.status_code = status_code;
                }
            }
            AppointmentsAction::TransitionFailed(id) => {
                self.in_flight.remove(&id);
            }
        }
    }

    pub fn get(&self, id: AppointmentId) -> Option<&Appointment> {
        self.items.iter().find(|a| a.id == id)
    }

    pub fn is_in_flight(&self, id: AppointmentId) -> bool {
        self.in_flight.contains(&id)
    }

    /// Check a requested change and mark it in flight. Must be paired with a
    /// `TransitionSucceeded` or `TransitionFailed` once the API answers.
    pub fn begin_transition(
        &mut self,
        id: AppointmentId,
        target_code: i32,
    ) -> Result<(), TransitionError> {
        let current = self.get(id).ok_or(TransitionError::NotFound(id))?;
        current.status().transition_to(target_code)?;
        if self.is_in_flight(id) {
            return Err(TransitionError::AlreadyInFlight(id));
        }
        self.apply(AppointmentsAction::TransitionStarted(id));
        Ok(())
    }

    pub fn partition(&self) -> Partition {
        partition(&self.items)
    }
}
