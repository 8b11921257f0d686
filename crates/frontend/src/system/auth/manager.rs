//! Session lifecycle: restore at startup, login, logout.

use contracts::system::auth::UserInfo;

use super::api;
use super::session::{SessionError, SessionStatus};
use crate::shared::api::ApiClient;

#[derive(Clone)]
pub struct SessionManager {
    client: ApiClient,
}

impl SessionManager {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Run once at startup.
    ///
    /// Without a stored token nothing is sent. A stored token the backend
    /// does not accept is discarded, whatever the reason.
    pub async fn restore_session(&self) -> Result<SessionStatus, SessionError> {
        let session = self.client.session();
        if session.begin_restore()?.is_none() {
            log::debug!("No stored token, staying logged out");
            return Ok(SessionStatus::LoggedOut);
        }

        match api::get_current_user(&self.client).await {
            Ok(user) => {
                log::info!("Session restored for {}", user.username);
                session.confirm(user)?;
            }
            Err(e) => {
                log::warn!("Stored token rejected: {}", e);
                session.logout();
            }
        }
        Ok(session.status())
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<UserInfo, SessionError> {
        let session = self.client.session();
        let status = session.status();
        if status != SessionStatus::LoggedOut {
            return Err(SessionError::InvalidTransition {
                from: status,
                to: SessionStatus::LoggedIn,
            });
        }

        self.bootstrap_admin().await;

        let response = api::login(&self.client, username, password)
            .await
            .map_err(|e| {
                log::warn!("Login failed for {}: {}", username, e);
                e
            })?;
        let user = api::get_current_user_with_token(&self.client, &response.access_token).await?;

        session.establish(response.access_token, user.clone())?;
        Ok(user)
    }

    pub fn logout(&self) {
        self.client.session().logout();
    }

    /// `POST /auth/init-admin`; never fails the caller
    pub async fn bootstrap_admin(&self) {
        match api::init_admin(&self.client).await {
            Ok(()) => log::info!("Default admin account created"),
            Err(e) if e.status() == Some(400) => log::debug!("Admin account already exists"),
            Err(e) => log::warn!("Admin bootstrap failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::{client_with, logged_in_client, ScriptedTransport};
    use crate::shared::api::{ApiError, HttpMethod};
    use crate::system::auth::storage::memory::MemoryTokenStore;
    use futures::executor::block_on;

    const ALREADY_INITIALISED: &str = r#"{"detail":"管理员已存在"}"#;

    #[test]
    fn restore_without_token_sends_nothing() {
        let transport = ScriptedTransport::new();
        let (client, _store) = client_with(&transport, MemoryTokenStore::default());
        let manager = SessionManager::new(client);

        let status = block_on(manager.restore_session()).unwrap();
        assert_eq!(status, SessionStatus::LoggedOut);
        assert!(transport.calls().is_empty());
    }

    #[test]
    fn restore_with_rejected_token_logs_out_and_clears() {
        let transport = ScriptedTransport::new();
        transport.respond(HttpMethod::Get, "/auth/me", 401, r#"{"detail":"invalid token"}"#);
        let (client, store) = client_with(&transport, MemoryTokenStore::with_token("old"));
        let manager = SessionManager::new(client);

        let status = block_on(manager.restore_session()).unwrap();
        assert_eq!(status, SessionStatus::LoggedOut);
        assert_eq!(store.current(), None);
        assert_eq!(
            transport.last_call().unwrap().header("Authorization"),
            Some("Bearer old")
        );
    }

    #[test]
    fn restore_with_unreachable_backend_logs_out() {
        let transport = ScriptedTransport::new();
        transport.fail(HttpMethod::Get, "/auth/me", "network down");
        let (client, store) = client_with(&transport, MemoryTokenStore::with_token("old"));
        let manager = SessionManager::new(client);

        assert_eq!(
            block_on(manager.restore_session()).unwrap(),
            SessionStatus::LoggedOut
        );
        assert_eq!(store.current(), None);
    }

    #[test]
    fn restore_with_valid_token_logs_in() {
        let transport = ScriptedTransport::new();
        transport.respond(
            HttpMethod::Get,
            "/auth/me",
            200,
            r#"{"id":"1","username":"admin","full_name":"管理员","role":"admin","is_active":true}"#,
        );
        let (client, store) = client_with(&transport, MemoryTokenStore::with_token("good"));
        let manager = SessionManager::new(client);

        assert_eq!(
            block_on(manager.restore_session()).unwrap(),
            SessionStatus::LoggedIn
        );
        let state = manager.client().session().snapshot();
        assert_eq!(state.user().map(|u| u.display_name()), Some("管理员"));
        assert_eq!(store.current(), Some("good".to_string()));
    }

    #[test]
    fn login_with_bad_credentials_surfaces_detail() {
        let transport = ScriptedTransport::new();
        transport.respond(HttpMethod::Post, "/auth/init-admin", 400, ALREADY_INITIALISED);
        transport.respond(
            HttpMethod::Post,
            "/auth/login",
            400,
            r#"{"detail":"bad credentials"}"#,
        );
        let (client, store) = client_with(&transport, MemoryTokenStore::default());
        let manager = SessionManager::new(client);

        let err = block_on(manager.login("admin", "wrong-password")).unwrap_err();
        assert_eq!(err.to_string(), "bad credentials");
        assert_eq!(
            err,
            SessionError::Api(ApiError::request_failed(400, Some("bad credentials")))
        );
        assert_eq!(manager.client().session().status(), SessionStatus::LoggedOut);
        assert_eq!(store.current(), None);
    }

    #[test]
    fn login_success_persists_token() {
        let transport = ScriptedTransport::new();
        transport.respond(HttpMethod::Post, "/auth/init-admin", 400, ALREADY_INITIALISED);
        transport.respond(
            HttpMethod::Post,
            "/auth/login",
            200,
            r#"{"access_token":"tok123","token_type":"bearer"}"#,
        );
        transport.respond(HttpMethod::Get, "/auth/me", 200, r#"{"username":"admin"}"#);
        let (client, store) = client_with(&transport, MemoryTokenStore::default());
        let manager = SessionManager::new(client);

        let user = block_on(manager.login("admin", "correct-password")).unwrap();
        assert_eq!(user.username, "admin");
        assert_eq!(manager.client().session().status(), SessionStatus::LoggedIn);
        assert_eq!(store.current(), Some("tok123".to_string()));

        assert_eq!(
            transport.paths(),
            vec![
                "POST /auth/init-admin".to_string(),
                "POST /auth/login".to_string(),
                "GET /auth/me".to_string(),
            ]
        );
        let calls = transport.calls();
        assert_eq!(calls[1].header("Authorization"), None);
        assert_eq!(calls[2].header("Authorization"), Some("Bearer tok123"));
    }

    #[test]
    fn bootstrap_failure_does_not_block_login() {
        let transport = ScriptedTransport::new();
        transport.respond(HttpMethod::Post, "/auth/init-admin", 500, "");
        transport.respond(
            HttpMethod::Post,
            "/auth/login",
            200,
            r#"{"access_token":"t","token_type":"bearer"}"#,
        );
        transport.respond(HttpMethod::Get, "/auth/me", 200, r#"{"username":"admin"}"#);
        let (client, _store) = client_with(&transport, MemoryTokenStore::default());
        let manager = SessionManager::new(client);

        assert!(block_on(manager.login("admin", "pw")).is_ok());
    }

    #[test]
    fn login_while_logged_in_is_rejected_without_request() {
        let transport = ScriptedTransport::new();
        let (client, store) = logged_in_client(&transport, "current");
        let manager = SessionManager::new(client);

        let err = block_on(manager.login("other", "pw")).unwrap_err();
        assert!(matches!(
            err,
            SessionError::InvalidTransition {
                from: SessionStatus::LoggedIn,
                ..
            }
        ));
        assert!(transport.calls().is_empty());
        assert_eq!(store.current(), Some("current".to_string()));
    }

    #[test]
    fn logout_clears_everything() {
        let transport = ScriptedTransport::new();
        let (client, store) = logged_in_client(&transport, "current");
        let manager = SessionManager::new(client);

        manager.logout();
        assert_eq!(manager.client().session().status(), SessionStatus::LoggedOut);
        assert_eq!(store.current(), None);
    }
}
