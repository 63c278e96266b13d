pub mod store;

use serde::{Deserialize, Serialize};

use crate::shared::serde_utils::string_or_number;

#[cfg(test)]
pub use store::MemorySessionStore;
pub use store::SessionStore;

/// Body of `POST /api/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub usuario: String,
    pub senha: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub usuario: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub nome_usuario: String,
    /// Empty for accounts that are not linked to a barber
    #[serde(default, deserialize_with = "string_or_number")]
    pub barbeiro_id: String,
}

/// Authenticated barber, persisted between page loads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub barber_id: String,
    pub user_id: String,
    pub user_name: String,
}

impl Session {
    /// Both the token and the barber id are required; the other two are informational
    pub fn from_fields(
        token: Option<String>,
        barber_id: Option<String>,
        user_id: Option<String>,
        user_name: Option<String>,
    ) -> Option<Self> {
        let token = token.filter(|t| !t.trim().is_empty())?;
        let barber_id = barber_id.filter(|b| !b.trim().is_empty())?;
        Some(Self {
            token,
            barber_id,
            user_id: user_id.unwrap_or_default(),
            user_name: user_name.unwrap_or_default(),
        })
    }

    pub fn from_login(response: LoginResponse) -> Option<Self> {
        Self::from_fields(
            Some(response.token),
            Some(response.usuario.barbeiro_id),
            Some(response.usuario.id),
            Some(response.usuario.nome_usuario),
        )
    }

    /// Value of the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}
