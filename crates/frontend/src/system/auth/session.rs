//! Session state machine.
//!
//! ```text
//!   LoggedOut ──restore (token stored)──▶ Verifying ──user──▶ LoggedIn
//!       ▲  │                                  │                 │
//!       │  └────────── login accepted ────────┼────────────────▶│
//!       │                                     │ rejected        │
//!       └─────────────────────────────────────┴─ logout / 401 ◀─┘
//! ```
//!
//! Every transition into `LoggedIn` writes the token to the `TokenStore`,
//! every transition into `LoggedOut` removes it.

use contracts::system::auth::UserInfo;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

use super::storage::TokenStore;
use crate::shared::api::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    LoggedOut,
    /// A persisted token is being checked against `/auth/me`
    Verifying { token: String },
    LoggedIn { token: String, user: UserInfo },
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::LoggedOut
    }
}

impl SessionState {
    pub fn status(&self) -> SessionStatus {
        match self {
            SessionState::LoggedOut => SessionStatus::LoggedOut,
            SessionState::Verifying { .. } => SessionStatus::Verifying,
            SessionState::LoggedIn { .. } => SessionStatus::LoggedIn,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            SessionState::LoggedOut => None,
            SessionState::Verifying { token } | SessionState::LoggedIn { token, .. } => {
                Some(token)
            }
        }
    }

    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            SessionState::LoggedIn { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, SessionState::LoggedIn { .. })
    }
}

/// Payload-free view of `SessionState`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    LoggedOut,
    Verifying,
    LoggedIn,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("invalid session transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: SessionStatus,
        to: SessionStatus,
    },

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// The one session of the console: current state plus its persistent slot
pub struct Session {
    state: SessionState,
    store: Box<dyn TokenStore>,
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            state: SessionState::LoggedOut,
            store: Box::new(store),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn token(&self) -> Option<&str> {
        self.state.token()
    }

    fn reject(&self, to: SessionStatus) -> SessionError {
        SessionError::InvalidTransition {
            from: self.state.status(),
            to,
        }
    }

    /// `LoggedOut → Verifying` when a token is persisted.
    ///
    /// Returns the token being verified, or `None` (state unchanged) when
    /// storage is empty.
    pub fn begin_restore(&mut self) -> Result<Option<String>, SessionError> {
        if self.state != SessionState::LoggedOut {
            return Err(self.reject(SessionStatus::Verifying));
        }
        let token = self.store.load();
        if let Some(token) = &token {
            self.state = SessionState::Verifying {
                token: token.clone(),
            };
        }
        Ok(token)
    }

    /// `Verifying → LoggedIn`
    pub fn confirm(&mut self, user: UserInfo) -> Result<(), SessionError> {
        let token = match &self.state {
            SessionState::Verifying { token } => token.clone(),
            _ => return Err(self.reject(SessionStatus::LoggedIn)),
        };
        self.store.save(&token);
        self.state = SessionState::LoggedIn { token, user };
        Ok(())
    }

    /// `LoggedOut → LoggedIn` after an accepted login
    pub fn establish(&mut self, token: String, user: UserInfo) -> Result<(), SessionError> {
        if self.state != SessionState::LoggedOut {
            return Err(self.reject(SessionStatus::LoggedIn));
        }
        self.store.save(&token);
        self.state = SessionState::LoggedIn { token, user };
        Ok(())
    }

    /// `* → LoggedOut`, unconditional
    pub fn logout(&mut self) {
        self.store.clear();
        self.state = SessionState::LoggedOut;
    }

    /// Logout for a 401 answered to a request sent with `token`.
    ///
    /// A session started after that request (different token) is kept.
    pub fn expire(&mut self, token: &str) -> bool {
        if self.token() != Some(token) {
            return false;
        }
        self.logout();
        true
    }
}

type Listener = Arc<dyn Fn(&SessionState) + Send + Sync>;

/// Shared handle to the session.
///
/// Held by the API client (for the bearer token and forced logout on 401) and
/// by the session manager. Listeners run after the lock is released, once per
/// actual state change.
#[derive(Clone)]
pub struct SessionHandle {
    inner: Arc<Mutex<Session>>,
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl SessionHandle {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn subscribe(&self, listener: impl Fn(&SessionState) + Send + Sync + 'static) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(listener));
    }

    pub fn snapshot(&self) -> SessionState {
        self.lock().state().clone()
    }

    pub fn status(&self) -> SessionStatus {
        self.lock().state().status()
    }

    pub fn token(&self) -> Option<String> {
        self.lock().token().map(str::to_string)
    }

    fn transition<R>(&self, apply: impl FnOnce(&mut Session) -> R) -> R {
        let (result, before, after) = {
            let mut session = self.lock();
            let before = session.state().status();
            let result = apply(&mut session);
            (result, before, session.state().clone())
        };

        if before != after.status() {
            log::info!("Session: {:?} -> {:?}", before, after.status());
            let listeners: Vec<Listener> = self
                .listeners
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone();
            for listener in listeners {
                listener(&after);
            }
        }
        result
    }

    pub fn begin_restore(&self) -> Result<Option<String>, SessionError> {
        self.transition(|s| s.begin_restore())
    }

    pub fn confirm(&self, user: UserInfo) -> Result<(), SessionError> {
        self.transition(|s| s.confirm(user))
    }

    pub fn establish(&self, token: String, user: UserInfo) -> Result<(), SessionError> {
        self.transition(|s| s.establish(token, user))
    }

    pub fn logout(&self) {
        self.transition(|s| s.logout())
    }

    pub fn expire(&self, token: &str) -> bool {
        self.transition(|s| s.expire(token))
    }
}
