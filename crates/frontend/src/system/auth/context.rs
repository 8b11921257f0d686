use leptos::prelude::*;
use leptos::task::spawn_local;

use super::manager::SessionManager;
use super::session::{Session, SessionHandle, SessionState, SessionStatus};
use super::storage::LocalStorageTokenStore;
use crate::shared::api::ApiClient;

/// Reactive mirror of the session for the view layer
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: RwSignal<SessionState>,
    /// `false` until the startup restore has settled
    pub ready: RwSignal<bool>,
}

impl AuthContext {
    pub fn status(&self) -> SessionStatus {
        self.state.with(|s| s.status())
    }

    pub fn display_name(&self) -> Option<String> {
        self.state
            .with(|s| s.user().map(|u| u.display_name().to_string()))
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let session = SessionHandle::new(Session::new(LocalStorageTokenStore));
    let state = RwSignal::new(session.snapshot());
    let ready = RwSignal::new(false);

    // Forced logouts from deep inside feature calls land here too
    session.subscribe(move |next| state.set(next.clone()));

    let client = ApiClient::browser(session);
    let manager = SessionManager::new(client.clone());

    provide_context(AuthContext { state, ready });
    provide_context(client);
    provide_context(manager.clone());

    // Try to restore session from localStorage on mount
    Effect::new(move |_| {
        let manager = manager.clone();
        spawn_local(async move {
            if let Err(e) = manager.restore_session().await {
                log::error!("Session restore failed: {}", e);
            }
            ready.set(true);
        });
    });

    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("AuthProvider not found in component tree")
}

pub fn use_session_manager() -> SessionManager {
    use_context::<SessionManager>().expect("AuthProvider not found in component tree")
}
