use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(pub i64);

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Service as listed by `GET /api/servico`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(alias = "ID", alias = "Id")]
    pub id: ServiceId,
    #[serde(alias = "NomeServico", default)]
    pub nome_servico: String,
    #[serde(alias = "Preco", default)]
    pub preco: f64,
}

impl Service {
    /// Option label with the price as the API sent it, e.g. "Corte — R$35"
    pub fn label(&self) -> String {
        format!("{} — R${}", self.nome_servico, self.preco)
    }

    pub fn to_option(&self) -> (String, String) {
        (self.id.to_string(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_label() {
        let service: Service =
            serde_json::from_value(json!({"id": 3, "nomeServico": "Barba", "preco": 25.5}))
                .unwrap();
        assert_eq!(service.label(), "Barba — R$25.5");
        assert_eq!(service.to_option().0, "3");
    }

    #[test]
    fn test_label_keeps_price_unformatted() {
        let whole: Service =
            serde_json::from_value(json!({"id": 1, "nomeServico": "Corte", "preco": 35})).unwrap();
        assert_eq!(whole.label(), "Corte — R$35");

        let cents: Service =
            serde_json::from_value(json!({"Id": 2, "NomeServico": "Sobrancelha", "Preco": 12.75}))
                .unwrap();
        assert_eq!(cents.to_option(), ("2".to_string(), "Sobrancelha — R$12.75".to_string()));
    }
}
