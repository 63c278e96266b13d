use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::aggregate::AppointmentId;

pub const STATUS_PENDING: i32 = 1;
pub const STATUS_CONFIRMED: i32 = 2;
pub const STATUS_CANCELLED_BY_CLIENT: i32 = 5;
pub const STATUS_CANCELLED_BY_BARBER: i32 = 6;
pub const STATUS_FINISHED: i32 = 7;

/// Display category of an appointment.
///
/// `classify` is the only place where raw API codes are interpreted; every
/// label, filter and transition goes through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    CancelledByClient,
    CancelledByBarber,
    Finished,
    Unknown,
}

impl AppointmentStatus {
    pub fn classify(code: i32) -> Self {
        match code {
            STATUS_PENDING => AppointmentStatus::Pending,
            STATUS_CONFIRMED => AppointmentStatus::Confirmed,
            STATUS_CANCELLED_BY_CLIENT => AppointmentStatus::CancelledByClient,
            STATUS_CANCELLED_BY_BARBER => AppointmentStatus::CancelledByBarber,
            STATUS_FINISHED => AppointmentStatus::Finished,
            _ => AppointmentStatus::Unknown,
        }
    }

    /// Raw code; `None` for `Unknown`
    pub fn code(&self) -> Option<i32> {
        match self {
            AppointmentStatus::Pending => Some(STATUS_PENDING),
            AppointmentStatus::Confirmed => Some(STATUS_CONFIRMED),
            AppointmentStatus::CancelledByClient => Some(STATUS_CANCELLED_BY_CLIENT),
            AppointmentStatus::CancelledByBarber => Some(STATUS_CANCELLED_BY_BARBER),
            AppointmentStatus::Finished => Some(STATUS_FINISHED),
            AppointmentStatus::Unknown => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Pendente",
            AppointmentStatus::Confirmed => "Confirmado",
            AppointmentStatus::CancelledByClient => "Cancelado pelo Cliente",
            AppointmentStatus::CancelledByBarber => "Cancelado pelo Barbeiro",
            AppointmentStatus::Finished => "Finalizado",
            AppointmentStatus::Unknown => "Desconhecido",
        }
    }

    /// "Cancelado pelo Cliente" -> "cancelado-pelo-cliente"
    pub fn css_class(&self) -> String {
        self.display_name().to_lowercase().replace(' ', "-")
    }

    pub fn is_active(&self) -> bool {
        matches!(
            self,
            AppointmentStatus::Pending | AppointmentStatus::Confirmed
        )
    }

    pub fn is_history(&self) -> bool {
        matches!(
            self,
            AppointmentStatus::Finished
                | AppointmentStatus::CancelledByBarber
                | AppointmentStatus::CancelledByClient
        )
    }

    /// Actions the barber may take from this status
    pub fn actions(&self) -> &'static [StatusAction] {
        match self {
            AppointmentStatus::Pending => &[StatusAction::Confirm, StatusAction::Cancel],
            AppointmentStatus::Confirmed => &[StatusAction::Finish, StatusAction::Cancel],
            _ => &[],
        }
    }

    /// Validate a barber-initiated change to `target_code`
    pub fn transition_to(&self, target_code: i32) -> Result<AppointmentStatus, TransitionError> {
        self.actions()
            .iter()
            .find(|action| action.target_code() == target_code)
            .map(|action| action.target())
            .ok_or(TransitionError::NotAllowed {
                from: *self,
                to: target_code,
            })
    }
}

/// Buttons offered on the admin list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusAction {
    Confirm,
    Finish,
    Cancel,
}

impl StatusAction {
    pub fn target_code(&self) -> i32 {
        match self {
            StatusAction::Confirm => STATUS_CONFIRMED,
            StatusAction::Finish => STATUS_FINISHED,
            StatusAction::Cancel => STATUS_CANCELLED_BY_BARBER,
        }
    }

    pub fn target(&self) -> AppointmentStatus {
        AppointmentStatus::classify(self.target_code())
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusAction::Confirm => "✅ Confirmar",
            StatusAction::Finish => "🏁 Finalizar",
            StatusAction::Cancel => "❌ Cancelar",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("status change from {from:?} to code {to} is not allowed")]
    NotAllowed { from: AppointmentStatus, to: i32 },

    #[error("appointment {0} not found")]
    NotFound(AppointmentId),

    #[error("a status change for appointment {0} is already in progress")]
    AlreadyInFlight(AppointmentId),
}
