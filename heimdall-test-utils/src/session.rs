//! Session store test doubles.

use async_trait::async_trait;
use tower_sessions::{
    session::{Id, Record},
    session_store, SessionStore,
};

/// A session store whose every operation fails.
///
/// Used to exercise the logout contract: session teardown failures must be
/// logged and swallowed, with the redirect issued regardless.
///
/// # Example
///
/// ```ignore
/// let session = Session::new(Some(Id::default()), Arc::new(FailingStore), None);
/// let response = logout(session).await;
/// // response still redirects to the login page
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingStore;

fn backend_error() -> session_store::Error {
    session_store::Error::Backend("session store unavailable".to_string())
}

#[async_trait]
impl SessionStore for FailingStore {
    async fn create(&self, _record: &mut Record) -> session_store::Result<()> {
        Err(backend_error())
    }

    async fn save(&self, _record: &Record) -> session_store::Result<()> {
        Err(backend_error())
    }

    async fn load(&self, _session_id: &Id) -> session_store::Result<Option<Record>> {
        Err(backend_error())
    }

    async fn delete(&self, _session_id: &Id) -> session_store::Result<()> {
        Err(backend_error())
    }
}
