use std::sync::Arc;

use backend::errors::domain::{DomainError, NotFoundKind};
use backend::services::SessionService;
use backend::store::{InMemorySessionStore, SessionStore};
use time::{Duration, OffsetDateTime};

fn service() -> SessionService {
    SessionService::new(Arc::new(InMemorySessionStore::new()))
}

#[test]
fn sweep_with_long_ttl_keeps_fresh_sessions() {
    let service = service();
    let id = service.create_session();

    let evicted = service.sweep_idle(OffsetDateTime::now_utc(), Duration::hours(24));

    assert_eq!(evicted, 0);
    assert!(service.summary(&id).is_ok());
}

#[test]
fn swept_sessions_are_not_found() {
    let service = service();
    let id = service.create_session();
    service.play_round(&id, "rock").unwrap();

    // A day later nothing has touched the session
    let later = OffsetDateTime::now_utc() + Duration::hours(25);
    let evicted = service.sweep_idle(later, Duration::hours(24));

    assert_eq!(evicted, 1);
    assert_eq!(service.session_count(), 0);
    assert!(matches!(
        service.play_round(&id, "rock"),
        Err(DomainError::NotFound(NotFoundKind::Session, _))
    ));
}

#[test]
fn handle_taken_before_delete_sees_eviction() {
    let store = Arc::new(InMemorySessionStore::new());
    let handle = store.create();
    let id = handle.lock().id().clone();

    assert!(store.delete(&id));

    assert!(handle.lock().is_evicted());
    assert!(store.get(&id).is_none());
}
