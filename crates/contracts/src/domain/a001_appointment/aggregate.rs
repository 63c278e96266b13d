use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::status::AppointmentStatus;
use crate::domain::a002_barber::BarberId;
use crate::domain::a003_service::ServiceId;
use crate::shared::envelope::{unwrap_list, Values};
use crate::shared::error::ApiError;
use crate::shared::serde_utils::{lenient_id, null_as_default};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentId(pub i64);

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Appointment record as returned by `GET /api/agendamento/barbeiro/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDto {
    pub id: AppointmentId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nome: String,
    #[serde(default, deserialize_with = "lenient_id")]
    pub barbeiro_id: Option<i64>,
    pub data_hora: String,
    pub status: i32,
    #[serde(default)]
    pub observacao: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub agendamento_servicos: Values<AppointmentServiceDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentServiceDto {
    pub servico_id: ServiceId,
}

/// Body of `PATCH /api/agendamento/status/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: i32,
}

/// Appointment as the admin views work with it
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: AppointmentId,
    pub client_name: String,
    /// `None` when the API sent no usable barber id
    pub barber_id: Option<BarberId>,
    /// Local wall-clock time, no timezone attached
    pub scheduled_at: NaiveDateTime,
    pub status_code: i32,
    pub observation: Option<String>,
    /// In the order the API listed them
    pub services: Vec<ServiceId>,
}

impl Appointment {
    pub fn status(&self) -> AppointmentStatus {
        AppointmentStatus::classify(self.status_code)
    }

    /// "Serviço #1, Serviço #4"
    pub fn services_label(&self) -> String {
        self.services
            .iter()
            .map(|id| format!("Serviço #{}", id))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn observation_label(&self) -> &str {
        match self.observation.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => text,
            _ => "-",
        }
    }
}

impl TryFrom<AppointmentDto> for Appointment {
    type Error = String;

    fn try_from(dto: AppointmentDto) -> Result<Self, Self::Error> {
        let scheduled_at = parse_scheduled_at(&dto.data_hora)
            .map_err(|e| format!("appointment {}: bad dataHora {:?}: {}", dto.id, dto.data_hora, e))?;

        Ok(Self {
            id: dto.id,
            client_name: dto.nome,
            barber_id: dto.barbeiro_id.map(BarberId),
            scheduled_at,
            status_code: dto.status,
            observation: dto.observacao,
            services: dto
                .agendamento_servicos
                .into_vec()
                .into_iter()
                .map(|s| s.servico_id)
                .collect(),
        })
    }
}

/// Parse the API's ISO date-time into the wall-clock time it names.
///
/// Seconds and fractional seconds are optional. An explicit offset is dropped
/// without shifting the clock, and a trailing `Z` is ignored.
pub fn parse_scheduled_at(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Ok(with_offset.naive_local());
    }
    if let Ok(with_offset) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M%:z") {
        return Ok(with_offset.naive_local());
    }
    let raw = raw.trim_end_matches('Z');
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
}

/// Result of decoding an appointment list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedAppointments {
    pub items: Vec<Appointment>,
    /// Records that could not be decoded and were left out
    pub skipped: Vec<String>,
}

/// Decode a list response. A bad envelope fails the call; a bad record is skipped.
pub fn parse_appointments(body: Value) -> Result<ParsedAppointments, ApiError> {
    let mut parsed = ParsedAppointments::default();

    for raw in unwrap_list(body)? {
        let decoded = serde_json::from_value::<AppointmentDto>(raw)
            .map_err(|e| e.to_string())
            .and_then(Appointment::try_from);
        match decoded {
            Ok(appointment) => parsed.items.push(appointment),
            Err(reason) => parsed.skipped.push(reason),
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_envelope_with_nested_services() {
        let body = json!({
            "$id": "1",
            "$values": [{
                "$id": "2",
                "id": 10,
                "nome": "Carlos",
                "barbeiroId": 3,
                "dataHora": "2025-05-20T14:30:00",
                "status": 1,
                "observacao": "Máquina 2",
                "agendamentoServicos": {"$id": "3", "$values": [{"servicoId": 4}, {"servicoId": 1}]}
            }]
        });

        let parsed = parse_appointments(body).unwrap();
        assert!(parsed.skipped.is_empty());
        let a = &parsed.items[0];
        assert_eq!(a.id, AppointmentId(10));
        assert_eq!(a.client_name, "Carlos");
        assert_eq!(a.barber_id, Some(BarberId(3)));
        assert_eq!(a.status(), AppointmentStatus::Pending);
        assert_eq!(a.services, vec![ServiceId(4), ServiceId(1)]);
        assert_eq!(a.services_label(), "Serviço #4, Serviço #1");
        assert_eq!(a.observation_label(), "Máquina 2");
    }

    #[test]
    fn test_parse_bare_list_without_services() {
        let body = json!([{
            "id": 1,
            "nome": "Ana",
            "barbeiroId": 2,
            "dataHora": "2025-05-20T09:00",
            "status": 99
        }]);

        let parsed = parse_appointments(body).unwrap();
        let a = &parsed.items[0];
        assert!(a.services.is_empty());
        assert_eq!(a.observation_label(), "-");
        assert_eq!(a.status(), AppointmentStatus::Unknown);
    }

    #[test]
    fn test_bad_record_is_skipped() {
        let body = json!([
            {"id": 1, "nome": "Ana", "barbeiroId": 2, "dataHora": "ontem", "status": 1},
            {"id": 2, "nome": "Bia", "barbeiroId": 2, "dataHora": "2025-01-01T10:00:00", "status": 2},
            {"nome": "sem id"}
        ]);

        let parsed = parse_appointments(body).unwrap();
        assert_eq!(parsed.items.len(), 1);
        assert_eq!(parsed.items[0].id, AppointmentId(2));
        assert_eq!(parsed.skipped.len(), 2);
    }

    #[test]
    fn test_null_fields_and_offset_times_are_kept() {
        let body = json!({"$values": [
            {"id": 1, "nome": "Ana", "barbeiroId": 2, "dataHora": "2025-05-20T09:00:00",
             "status": 1, "agendamentoServicos": null},
            {"id": 2, "nome": null, "barbeiroId": 2, "dataHora": "2025-05-20T09:30:00", "status": 1},
            {"id": 3, "nome": "Caio", "barbeiroId": "2", "dataHora": "2025-05-20T10:00:00-03:00",
             "status": 2}
        ]});

        let parsed = parse_appointments(body).unwrap();
        assert!(parsed.skipped.is_empty(), "{:?}", parsed.skipped);
        assert_eq!(parsed.items.len(), 3);
        assert!(parsed.items[0].services.is_empty());
        assert_eq!(parsed.items[1].client_name, "");
        let offset = &parsed.items[2];
        assert_eq!(offset.barber_id, Some(BarberId(2)));
        assert_eq!(offset.scheduled_at.format("%H:%M").to_string(), "10:00");
    }

    #[test]
    fn test_unusable_barber_id_does_not_drop_the_record() {
        let body = json!([
            {"id": 1, "nome": "Ana", "barbeiroId": null, "dataHora": "2025-05-20T09:00", "status": 1},
            {"id": 2, "nome": "Bia", "dataHora": "2025-05-20T09:30", "status": 1}
        ]);

        let parsed = parse_appointments(body).unwrap();
        assert_eq!(parsed.items.len(), 2);
        assert!(parsed.items.iter().all(|a| a.barber_id.is_none()));
    }

    #[test]
    fn test_bad_envelope_is_malformed() {
        assert!(matches!(
            parse_appointments(json!({"erro": true})),
            Err(ApiError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_scheduled_at_variants() {
        let expected = NaiveDateTime::parse_from_str("2025-05-20 14:30:00", "%Y-%m-%d %H:%M:%S")
            .unwrap();
        assert_eq!(parse_scheduled_at("2025-05-20T14:30:00").unwrap(), expected);
        assert_eq!(parse_scheduled_at("2025-05-20T14:30").unwrap(), expected);
        assert_eq!(parse_scheduled_at("2025-05-20T14:30:00.000Z").unwrap(), expected);
        assert_eq!(parse_scheduled_at("2025-05-20T14:30:00-03:00").unwrap(), expected);
        assert_eq!(parse_scheduled_at("2025-05-20T14:30+02:00").unwrap(), expected);
        assert!(parse_scheduled_at("20/05/2025").is_err());
    }

    #[test]
    fn test_status_update_body() {
        let body = serde_json::to_value(StatusUpdateRequest { status: 2 }).unwrap();
        assert_eq!(body, json!({"status": 2}));
    }
}
