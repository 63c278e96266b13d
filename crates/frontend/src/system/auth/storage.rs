use contracts::system::auth::{Session, SessionStore};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Session fields kept in the browser's localStorage
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSessionStore;

impl SessionStore for LocalSessionStore {
    fn read(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Load the persisted session, if complete
pub fn load_session() -> Option<Session> {
    LocalSessionStore.load()
}

/// Persist all session fields
pub fn save_session(session: &Session) {
    LocalSessionStore.save(session);
}

/// Remove all session fields
pub fn clear_session() {
    LocalSessionStore.clear();
}
