#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use super::Session;

pub const TOKEN_KEY: &str = "token";
pub const USER_ID_KEY: &str = "usuarioId";
pub const USER_NAME_KEY: &str = "usuarioNome";
pub const BARBER_ID_KEY: &str = "barbeiroId";

pub const SESSION_KEYS: [&str; 4] = [TOKEN_KEY, USER_ID_KEY, USER_NAME_KEY, BARBER_ID_KEY];

/// Key/value persistence for the session.
///
/// Implementors only provide the raw accessors; loading, saving and clearing
/// always handle the four session keys together.
pub trait SessionStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    fn load(&self) -> Option<Session> {
        Session::from_fields(
            self.read(TOKEN_KEY),
            self.read(BARBER_ID_KEY),
            self.read(USER_ID_KEY),
            self.read(USER_NAME_KEY),
        )
    }

    fn save(&self, session: &Session) {
        self.write(TOKEN_KEY, &session.token);
        self.write(USER_ID_KEY, &session.user_id);
        self.write(USER_NAME_KEY, &session.user_name);
        self.write(BARBER_ID_KEY, &session.barber_id);
    }

    fn clear(&self) {
        for key in SESSION_KEYS {
            self.remove(key);
        }
    }
}

/// In-memory store for exercising session logic without a browser
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            token: "tok".to_string(),
            barber_id: "4".to_string(),
            user_id: "10".to_string(),
            user_name: "rafa".to_string(),
        }
    }

    #[test]
    fn test_save_and_load() {
        let store = MemorySessionStore::new();
        assert!(store.load().is_none());

        store.save(&session());
        assert_eq!(store.len(), 4);
        assert_eq!(store.load(), Some(session()));
        assert_eq!(store.read(BARBER_ID_KEY).as_deref(), Some("4"));
    }

    #[test]
    fn test_clear_removes_all_four_fields() {
        let store = MemorySessionStore::new();
        store.save(&session());
        store.write("tema", "escuro");

        store.clear();

        for key in SESSION_KEYS {
            assert_eq!(store.read(key), None);
        }
        assert_eq!(store.len(), 1);
        assert!(store.load().is_none());
    }

    #[test]
    fn test_partial_session_is_not_authenticated() {
        let store = MemorySessionStore::new();
        store.write(TOKEN_KEY, "tok");
        assert!(store.load().is_none());

        store.write(BARBER_ID_KEY, "4");
        assert!(store.load().is_some());
    }
}
