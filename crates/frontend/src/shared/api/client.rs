//! Единый API-шлюз.
//!
//! Every feature module goes through `ApiClient::request` (or the typed
//! `get` / `post` / `put` / `delete` helpers on top of it). The client injects
//! the bearer token held by the session, turns HTTP 401 into a forced logout
//! and normalises every other failure into `ApiError`.

use contracts::system::auth::ErrorDetail;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use super::error::ApiError;
use super::transport::{GlooTransport, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::shared::api_utils::{api_base, join_url};
use crate::system::auth::session::SessionHandle;

pub type ApiResult<T> = Result<T, ApiError>;

/// Чей токен прикладывать к запросу
#[derive(Debug, Clone)]
enum Credentials {
    /// Token held by the session; 401 expires the session
    Session,
    /// Explicit token, used right after login before the session holds one
    Token(String),
    /// No bearer; 401 is an ordinary failure (login, init-admin)
    Anonymous,
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    session: SessionHandle,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
        session: SessionHandle,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            session,
        }
    }

    /// Client for the browser: compiled-in API root and fetch transport
    pub fn browser(session: SessionHandle) -> Self {
        Self::new(api_base(), Arc::new(GlooTransport), session)
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    /// Выполнить запрос от имени текущей сессии.
    ///
    /// `Ok(None)` означает пустой ответ (204).
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: Option<Value>,
    ) -> ApiResult<Option<T>> {
        self.dispatch(endpoint, method, body, Credentials::Session)
            .await
    }

    pub async fn request_with_token<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: Option<Value>,
        token: &str,
    ) -> ApiResult<Option<T>> {
        self.dispatch(endpoint, method, body, Credentials::Token(token.to_string()))
            .await
    }

    pub async fn request_anonymous<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: Option<Value>,
    ) -> ApiResult<Option<T>> {
        self.dispatch(endpoint, method, body, Credentials::Anonymous)
            .await
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        required(self.request(endpoint, HttpMethod::Get, None).await?)
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        let body = to_json(body)?;
        required(self.request(endpoint, HttpMethod::Post, Some(body)).await?)
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        let body = to_json(body)?;
        required(self.request(endpoint, HttpMethod::Put, Some(body)).await?)
    }

    /// POST whose response payload, if any, is not needed
    pub async fn post_ignore<B: Serialize>(
        &self,
        endpoint: &str,
        body: Option<&B>,
    ) -> ApiResult<()> {
        let body = body.map(to_json).transpose()?;
        self.request::<IgnoredAny>(endpoint, HttpMethod::Post, body)
            .await
            .map(|_| ())
    }

    pub async fn delete(&self, endpoint: &str) -> ApiResult<()> {
        self.request::<IgnoredAny>(endpoint, HttpMethod::Delete, None)
            .await
            .map(|_| ())
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: Option<Value>,
        credentials: Credentials,
    ) -> ApiResult<Option<T>> {
        let url = join_url(&self.base_url, endpoint);

        let token = match &credentials {
            Credentials::Session => self.session.token(),
            Credentials::Token(token) => Some(token.clone()),
            Credentials::Anonymous => None,
        };

        let mut headers = Vec::new();
        if let Some(token) = &token {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        let body = match body {
            Some(value) => {
                headers.push(("Content-Type".to_string(), "application/json".to_string()));
                Some(value.to_string())
            }
            None => None,
        };

        let request = HttpRequest {
            method,
            url: url.clone(),
            headers,
            body,
        };

        let response = self.transport.send(request).await.map_err(|e| {
            log::error!("{} {} failed: {}", method, url, e);
            ApiError::Transport(e)
        })?;

        if response.status == 401 && matches!(credentials, Credentials::Session) {
            match token.as_deref() {
                Some(sent) if self.session.expire(sent) => {
                    log::warn!("{} {} returned 401, logging out", method, url);
                }
                _ => log::warn!(
                    "{} {} returned 401 for a session that already ended",
                    method,
                    url
                ),
            }
            return Err(ApiError::AuthExpired);
        }

        if !response.ok() {
            let err = rejection(&response);
            log::error!("{} {} rejected ({}): {}", method, url, response.status, err);
            return Err(err);
        }

        if response.status == 204 || response.body.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str::<T>(&response.body)
            .map(Some)
            .map_err(|e| {
                log::error!("{} {}: failed to parse response: {}", method, url, e);
                ApiError::Transport(format!("Failed to parse response: {}", e))
            })
    }
}

fn rejection(response: &HttpResponse) -> ApiError {
    let detail = serde_json::from_str::<ErrorDetail>(&response.body).ok();
    ApiError::request_failed(
        response.status,
        detail.as_ref().and_then(ErrorDetail::message),
    )
}

pub fn to_json<B: Serialize>(body: &B) -> ApiResult<Value> {
    serde_json::to_value(body)
        .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))
}

/// Payload that must be present; an empty response is a decode failure
pub fn required<T>(payload: Option<T>) -> ApiResult<T> {
    payload.ok_or_else(|| ApiError::Transport("Empty response body".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::{client_with, logged_in_client, user, ScriptedTransport};
    use crate::system::auth::session::SessionStatus;
    use crate::system::auth::storage::memory::MemoryTokenStore;
    use futures::executor::block_on;

    #[test]
    fn attaches_bearer_and_json_content_type() {
        let transport = ScriptedTransport::new();
        transport.respond(HttpMethod::Post, "/products/", 201, r#"{"ok":true}"#);
        let (client, _store) = logged_in_client(&transport, "tok123");

        let body = serde_json::json!({"name": "BSA"});
        let payload: Option<Value> =
            block_on(client.request("/products/", HttpMethod::Post, Some(body))).unwrap();
        assert_eq!(payload, Some(serde_json::json!({"ok": true})));

        let call = transport.last_call().unwrap();
        assert_eq!(call.header("Authorization"), Some("Bearer tok123"));
        assert_eq!(call.header("Content-Type"), Some("application/json"));
        assert_eq!(call.body.as_deref(), Some(r#"{"name":"BSA"}"#));
    }

    #[test]
    fn get_without_body_has_no_content_type() {
        let transport = ScriptedTransport::new();
        transport.respond(HttpMethod::Get, "/products/", 200, "[]");
        let (client, _store) = client_with(&transport, MemoryTokenStore::default());

        let list: Vec<Value> = block_on(client.get("/products/")).unwrap();
        assert!(list.is_empty());

        let call = transport.last_call().unwrap();
        assert_eq!(call.header("Authorization"), None);
        assert_eq!(call.header("Content-Type"), None);
        assert_eq!(call.body, None);
    }

    #[test]
    fn unauthorized_forces_logout_and_clears_token() {
        let transport = ScriptedTransport::new();
        transport.respond(HttpMethod::Get, "/sales/", 401, r#"{"detail":"expired"}"#);
        let (client, store) = logged_in_client(&transport, "stale");

        let err = block_on(client.get::<Vec<Value>>("/sales/")).unwrap_err();
        assert_eq!(err, ApiError::AuthExpired);
        assert_eq!(client.session().status(), SessionStatus::LoggedOut);
        assert_eq!(store.current(), None);
    }

    #[test]
    fn late_unauthorized_keeps_newer_session() {
        let transport = ScriptedTransport::new();
        transport.respond(HttpMethod::Get, "/inventory/", 401, "");
        let (client, store) = logged_in_client(&transport, "tokA");

        // the user logs out and back in while the tokA request is pending
        let session = client.session().clone();
        transport.on_send(move |_| {
            session.logout();
            session.establish("tokB".into(), user("admin")).unwrap();
        });

        let err = block_on(client.get::<Vec<Value>>("/inventory/")).unwrap_err();
        assert_eq!(err, ApiError::AuthExpired);
        assert_eq!(
            transport.last_call().unwrap().header("Authorization"),
            Some("Bearer tokA")
        );
        assert_eq!(client.session().status(), SessionStatus::LoggedIn);
        assert_eq!(client.session().token().as_deref(), Some("tokB"));
        assert_eq!(store.current(), Some("tokB".to_string()));
    }

    #[test]
    fn delete_with_no_content_does_not_decode() {
        let transport = ScriptedTransport::new();
        transport.respond(HttpMethod::Delete, "/products/42", 204, "not json");
        let (client, _store) = logged_in_client(&transport, "tok");

        let payload: Option<Value> =
            block_on(client.request("/products/42", HttpMethod::Delete, None)).unwrap();
        assert_eq!(payload, None);
        assert!(block_on(client.delete("/products/42")).is_ok());
    }

    #[test]
    fn rejection_carries_server_detail() {
        let transport = ScriptedTransport::new();
        transport.respond(
            HttpMethod::Post,
            "/partners/",
            400,
            r#"{"detail":"合作伙伴编码已存在"}"#,
        );
        let (client, _store) = logged_in_client(&transport, "tok");

        let err = block_on(client.post::<Value, _>("/partners/", &serde_json::json!({})))
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::RequestFailed {
                status: 400,
                message: "合作伙伴编码已存在".to_string()
            }
        );
        assert_eq!(client.session().status(), SessionStatus::LoggedIn);
    }

    #[test]
    fn rejection_without_detail_uses_generic_message() {
        let transport = ScriptedTransport::new();
        transport.respond(HttpMethod::Get, "/inventory/", 500, "Internal Server Error");
        let (client, _store) = logged_in_client(&transport, "tok");

        let err = block_on(client.get::<Vec<Value>>("/inventory/")).unwrap_err();
        assert_eq!(err, ApiError::request_failed(500, None));
    }

    #[test]
    fn transport_failure_keeps_underlying_message() {
        let transport = ScriptedTransport::new();
        transport.fail(HttpMethod::Get, "/purchases/", "connection refused");
        let (client, _store) = logged_in_client(&transport, "tok");

        let err = block_on(client.get::<Vec<Value>>("/purchases/")).unwrap_err();
        assert_eq!(err, ApiError::Transport("connection refused".to_string()));
        assert_eq!(client.session().status(), SessionStatus::LoggedIn);
    }

    #[test]
    fn undecodable_payload_is_transport_error() {
        let transport = ScriptedTransport::new();
        transport.respond(HttpMethod::Get, "/partners/", 200, "<html>");
        let (client, _store) = logged_in_client(&transport, "tok");

        let err = block_on(client.get::<Vec<Value>>("/partners/")).unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[test]
    fn anonymous_unauthorized_is_ordinary_failure() {
        let transport = ScriptedTransport::new();
        transport.respond(
            HttpMethod::Post,
            "/auth/login",
            401,
            r#"{"detail":"用户名或密码错误"}"#,
        );
        let (client, store) = logged_in_client(&transport, "tok");

        let err = block_on(client.request_anonymous::<Value>(
            "/auth/login",
            HttpMethod::Post,
            Some(serde_json::json!({})),
        ))
        .unwrap_err();
        assert_eq!(err.to_string(), "用户名或密码错误");
        assert_eq!(client.session().status(), SessionStatus::LoggedIn);
        assert_eq!(store.current(), Some("tok".to_string()));
        assert_eq!(transport.last_call().unwrap().header("Authorization"), None);
    }

    #[test]
    fn explicit_token_overrides_session() {
        let transport = ScriptedTransport::new();
        transport.respond(HttpMethod::Get, "/auth/me", 200, r#"{"username":"admin"}"#);
        let (client, _store) = client_with(&transport, MemoryTokenStore::default());

        let user: Option<Value> =
            block_on(client.request_with_token("/auth/me", HttpMethod::Get, None, "fresh"))
                .unwrap();
        assert!(user.is_some());
        assert_eq!(
            transport.last_call().unwrap().header("Authorization"),
            Some("Bearer fresh")
        );
    }
}
