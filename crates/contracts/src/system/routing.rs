//! Client-side route table and the session gate in front of it

use crate::domain::a001_appointment::ViewMode;
use crate::shared::error::ApiError;
use crate::system::auth::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Login,
    Admin,
    AdminHistory,
}

impl AppRoute {
    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::Login => "/login",
            AppRoute::Admin => "/admin",
            AppRoute::AdminHistory => "/admin/historico",
        }
    }

    pub fn requires_session(&self) -> bool {
        matches!(self, AppRoute::Admin | AppRoute::AdminHistory)
    }

    pub fn for_view_mode(mode: ViewMode) -> Self {
        match mode {
            ViewMode::Active => AppRoute::Admin,
            ViewMode::History => AppRoute::AdminHistory,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    Redirect(AppRoute),
}

/// Protected routes need a session; the login page is skipped when one exists
pub fn guard(route: AppRoute, authenticated: bool) -> RouteDecision {
    match (route, authenticated) {
        (r, false) if r.requires_session() => RouteDecision::Redirect(AppRoute::Login),
        (AppRoute::Login, true) => RouteDecision::Redirect(AppRoute::Admin),
        _ => RouteDecision::Render,
    }
}

/// Drop the session after an authorization failure.
///
/// Returns where to send the user, or `None` when the error is not an auth failure.
pub fn handle_auth_failure(store: &impl SessionStore, error: &ApiError) -> Option<AppRoute> {
    if !error.is_auth_failure() {
        return None;
    }
    store.clear();
    Some(AppRoute::Login)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_appointment::{parse_appointments, partition, ListCursor};
    use crate::shared::endpoints;
    use crate::system::auth::store::SESSION_KEYS;
    use crate::system::auth::{LoginResponse, MemorySessionStore, Session};
    use serde_json::json;

    fn logged_in_store() -> MemorySessionStore {
        let store = MemorySessionStore::new();
        store.save(&Session {
            token: "tok".to_string(),
            barber_id: "2".to_string(),
            user_id: "5".to_string(),
            user_name: "ze".to_string(),
        });
        store
    }

    #[test]
    fn test_route_table() {
        assert_eq!(AppRoute::Home.path(), "/");
        assert_eq!(AppRoute::Login.path(), "/login");
        assert_eq!(AppRoute::for_view_mode(ViewMode::Active).path(), "/admin");
        assert_eq!(
            AppRoute::for_view_mode(ViewMode::History).path(),
            "/admin/historico"
        );
        assert!(AppRoute::Admin.requires_session());
        assert!(AppRoute::AdminHistory.requires_session());
        assert!(!AppRoute::Home.requires_session());
        assert!(!AppRoute::Login.requires_session());
    }

    #[test]
    fn test_guard_decisions() {
        assert_eq!(guard(AppRoute::Admin, false), RouteDecision::Redirect(AppRoute::Login));
        assert_eq!(
            guard(AppRoute::AdminHistory, false),
            RouteDecision::Redirect(AppRoute::Login)
        );
        assert_eq!(guard(AppRoute::Admin, true), RouteDecision::Render);
        assert_eq!(guard(AppRoute::Login, true), RouteDecision::Redirect(AppRoute::Admin));
        assert_eq!(guard(AppRoute::Login, false), RouteDecision::Render);
        assert_eq!(guard(AppRoute::Home, false), RouteDecision::Render);
        assert_eq!(guard(AppRoute::Home, true), RouteDecision::Render);
    }

    #[test]
    fn test_logout_then_protected_route_is_denied() {
        let store = logged_in_store();
        assert_eq!(guard(AppRoute::Admin, store.load().is_some()), RouteDecision::Render);

        store.clear();
        assert!(store.is_empty());
        assert_eq!(
            guard(AppRoute::Admin, store.load().is_some()),
            RouteDecision::Redirect(AppRoute::Login)
        );
    }

    #[test]
    fn test_401_clears_session_and_redirects() {
        let store = logged_in_store();
        let redirect = handle_auth_failure(&store, &ApiError::from_status(401, ""));

        assert_eq!(redirect, Some(AppRoute::Login));
        for key in SESSION_KEYS {
            assert_eq!(store.read(key), None);
        }
    }

    #[test]
    fn test_other_errors_keep_session() {
        let store = logged_in_store();
        assert_eq!(
            handle_auth_failure(&store, &ApiError::Network("offline".to_string())),
            None
        );
        assert_eq!(
            handle_auth_failure(&store, &ApiError::from_status(500, "")),
            None
        );
        assert!(store.load().is_some());
    }

    #[test]
    fn test_login_to_active_list_flow() {
        let store = MemorySessionStore::new();
        assert_eq!(
            guard(AppRoute::Admin, store.load().is_some()),
            RouteDecision::Redirect(AppRoute::Login)
        );

        let response: LoginResponse = serde_json::from_value(json!({
            "token": "jwt",
            "usuario": {"id": 1, "nomeUsuario": "barbeiro", "barbeiroId": 7}
        }))
        .unwrap();
        let session = Session::from_login(response).unwrap();
        store.save(&session);

        assert_eq!(
            guard(AppRoute::Login, store.load().is_some()),
            RouteDecision::Redirect(AppRoute::Admin)
        );
        assert_eq!(guard(AppRoute::Admin, store.load().is_some()), RouteDecision::Render);

        let loaded = store.load().unwrap();
        assert_eq!(
            endpoints::appointments_by_barber(&loaded.barber_id),
            "/api/agendamento/barbeiro/7"
        );

        let body = json!({"$values": [
            {"id": 1, "nome": "A", "barbeiroId": 7, "dataHora": "2025-01-01T09:00:00", "status": 7},
            {"id": 2, "nome": "B", "barbeiroId": 7, "dataHora": "2025-01-02T09:00:00", "status": 1},
            {"id": 3, "nome": "C", "barbeiroId": 7, "dataHora": "2025-01-03T09:00:00", "status": 2}
        ]});
        let split = partition(&parse_appointments(body).unwrap().items);

        let window = ListCursor::new(ViewMode::Active).window(&split);
        let ids: Vec<i64> = window.items.iter().map(|a| a.id.0).collect();
        assert_eq!(ids, vec![3, 2]);
    }
}
