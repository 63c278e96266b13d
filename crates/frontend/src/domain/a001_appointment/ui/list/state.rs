use contracts::domain::a001_appointment::{AppointmentsState, ListCursor, ViewMode};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct AppointmentsListState {
    pub data: AppointmentsState,
    pub cursor: ListCursor,
    pub is_loaded: bool,
}

impl AppointmentsListState {
    pub fn new(mode: ViewMode) -> Self {
        Self {
            data: AppointmentsState::default(),
            cursor: ListCursor::new(mode),
            is_loaded: false,
        }
    }

    /// Length of the partition currently shown
    pub fn visible_len(&self) -> usize {
        self.data.partition().for_mode(self.cursor.mode).len()
    }
}

pub fn create_state(mode: ViewMode) -> RwSignal<AppointmentsListState> {
    RwSignal::new(AppointmentsListState::new(mode))
}
