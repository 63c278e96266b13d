use chrono::NaiveDateTime;
use thiserror::Error;

use super::request::{BookingRequest, BookingServiceLine};
use crate::domain::a002_barber::BarberId;
use crate::domain::a003_service::ServiceId;

pub const OBSERVATION_MAX_CHARS: usize = 150;
pub const PHONE_MAX_CHARS: usize = 11;
pub const CPF_MAX_CHARS: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingField {
    Name,
    Cpf,
    Phone,
    Barber,
    Service,
    DateTime,
    Observation,
}

impl BookingField {
    pub fn max_chars(&self) -> Option<usize> {
        match self {
            BookingField::Cpf => Some(CPF_MAX_CHARS),
            BookingField::Phone => Some(PHONE_MAX_CHARS),
            BookingField::Observation => Some(OBSERVATION_MAX_CHARS),
            _ => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingValidationError {
    #[error("Informe o nome.")]
    MissingName,
    #[error("Informe o telefone.")]
    MissingPhone,
    #[error("Selecione um barbeiro.")]
    MissingBarber,
    #[error("Selecione um serviço.")]
    MissingService,
    #[error("Informe a data e a hora.")]
    MissingDateTime,
    #[error("Barbeiro inválido: {0}")]
    InvalidBarber(String),
    #[error("Serviço inválido: {0}")]
    InvalidService(String),
    #[error("Data e hora inválidas: {0}")]
    InvalidDateTime(String),
}

/// Raw text of the booking form, exactly as typed.
///
/// Length caps are applied in `set`, so the stored text never exceeds them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub nome: String,
    pub cpf: String,
    pub telefone: String,
    pub barbeiro_id: String,
    pub servico_id: String,
    /// `datetime-local` value: `YYYY-MM-DDTHH:MM`
    pub data_hora: String,
    pub observacao: String,
}

impl BookingForm {
    pub fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::Name => &self.nome,
            BookingField::Cpf => &self.cpf,
            BookingField::Phone => &self.telefone,
            BookingField::Barber => &self.barbeiro_id,
            BookingField::Service => &self.servico_id,
            BookingField::DateTime => &self.data_hora,
            BookingField::Observation => &self.observacao,
        }
    }

    pub fn set(&mut self, field: BookingField, value: &str) {
        let value = match field.max_chars() {
            Some(max) => truncate_chars(value, max),
            None => value.to_string(),
        };
        match field {
            BookingField::Name => self.nome = value,
            BookingField::Cpf => self.cpf = value,
            BookingField::Phone => self.telefone = value,
            BookingField::Barber => self.barbeiro_id = value,
            BookingField::Service => self.servico_id = value,
            BookingField::DateTime => self.data_hora = value,
            BookingField::Observation => self.observacao = value,
        }
    }

    /// "12/150"
    pub fn observation_counter(&self) -> String {
        format!("{}/{}", self.observacao.chars().count(), OBSERVATION_MAX_CHARS)
    }

    /// Check required fields and build the request; no request exists unless this passes
    pub fn validate(&self) -> Result<BookingRequest, BookingValidationError> {
        let nome = required(&self.nome, BookingValidationError::MissingName)?;
        let telefone = required(&self.telefone, BookingValidationError::MissingPhone)?;
        let barber_raw = required(&self.barbeiro_id, BookingValidationError::MissingBarber)?;
        let service_raw = required(&self.servico_id, BookingValidationError::MissingService)?;
        let date_raw = required(&self.data_hora, BookingValidationError::MissingDateTime)?;

        let barbeiro_id = barber_raw
            .parse::<i64>()
            .map(BarberId)
            .map_err(|_| BookingValidationError::InvalidBarber(barber_raw.to_string()))?;
        let servico_id = service_raw
            .parse::<i64>()
            .map(ServiceId)
            .map_err(|_| BookingValidationError::InvalidService(service_raw.to_string()))?;
        let data_hora = parse_local_input(date_raw)
            .ok_or_else(|| BookingValidationError::InvalidDateTime(date_raw.to_string()))?;

        let cpf = Some(self.cpf.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string);
        let observacao = truncate_chars(self.observacao.trim(), OBSERVATION_MAX_CHARS);
        let line_observacao = Some(observacao.clone()).filter(|o| !o.is_empty());

        // One service per booking; the API accepts a list.
        Ok(BookingRequest {
            nome: nome.to_string(),
            cpf,
            telefone: telefone.to_string(),
            barbeiro_id,
            data_hora,
            observacao,
            agendamento_servicos: vec![BookingServiceLine {
                servico_id,
                observacao: line_observacao,
            }],
        })
    }
}

fn required(value: &str, missing: BookingValidationError) -> Result<&str, BookingValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(missing)
    } else {
        Ok(value)
    }
}

fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

/// `datetime-local` input value, with or without seconds
fn parse_local_input(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}
