use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::a002_barber::BarberId;
use crate::domain::a003_service::ServiceId;
use crate::shared::error::extract_message;

/// Body of `POST /api/agendamento`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub nome: String,
    pub cpf: Option<String>,
    pub telefone: String,
    pub barbeiro_id: BarberId,
    pub data_hora: NaiveDateTime,
    pub observacao: String,
    pub agendamento_servicos: Vec<BookingServiceLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingServiceLine {
    pub servico_id: ServiceId,
    pub observacao: Option<String>,
}

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Agendamento criado com sucesso!";

/// Notice shown after the API accepted a booking
pub fn success_message(body: &str) -> String {
    extract_message(body).unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string())
}
