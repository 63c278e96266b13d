use contracts::shared::endpoints;
use contracts::shared::error::ApiError;
use contracts::system::auth::{LoginRequest, LoginResponse, Session};

use crate::shared::http;

/// Login with username and password
pub async fn login(usuario: String, senha: String) -> Result<Session, ApiError> {
    let request = LoginRequest { usuario, senha };

    let response = http::post(endpoints::LOGIN, &request, None).await?;
    let body: LoginResponse = response.json()?;

    Session::from_login(body).ok_or_else(|| {
        ApiError::Malformed("login response carries no token or barber id".to_string())
    })
}
