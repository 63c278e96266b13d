use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BarberId(pub i64);

impl fmt::Display for BarberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Barber as listed by `GET /api/barbeiro` (camel- or Pascal-case keys)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Barber {
    #[serde(alias = "ID", alias = "Id")]
    pub id: BarberId,
    #[serde(alias = "Nome", default)]
    pub nome: String,
}

impl Barber {
    /// (value, label) pair for a select box
    pub fn to_option(&self) -> (String, String) {
        (self.id.to_string(), self.nome.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::envelope::parse_list;
    use serde_json::json;

    #[test]
    fn test_both_key_casings() {
        let barbers: Vec<Barber> = parse_list(json!({
            "$values": [
                {"id": 1, "nome": "João"},
                {"ID": 2, "Nome": "Pedro"}
            ]
        }))
        .unwrap();

        assert_eq!(barbers[0].to_option(), ("1".to_string(), "João".to_string()));
        assert_eq!(barbers[1].to_option(), ("2".to_string(), "Pedro".to_string()));
    }
}
