//! Scripted transport for gateway and session tests.

use async_trait::async_trait;
use contracts::system::auth::UserInfo;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::client::ApiClient;
use super::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::system::auth::session::{Session, SessionHandle};
use crate::system::auth::storage::memory::MemoryTokenStore;

pub const TEST_BASE: &str = "http://backend.test/api";

type Reply = Result<HttpResponse, String>;
type Hook = Arc<dyn Fn(&HttpRequest) + Send + Sync>;

/// Answers by `(method, url)`; unscripted routes fail like an unreachable host
#[derive(Default)]
pub struct ScriptedTransport {
    routes: Mutex<HashMap<(HttpMethod, String), Reply>>,
    calls: Mutex<Vec<HttpRequest>>,
    on_send: Mutex<Option<Hook>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, method: HttpMethod, path: &str, status: u16, body: &str) {
        self.routes.lock().unwrap().insert(
            (method, format!("{}{}", TEST_BASE, path)),
            Ok(HttpResponse {
                status,
                body: body.to_string(),
            }),
        );
    }

    pub fn fail(&self, method: HttpMethod, path: &str, message: &str) {
        self.routes.lock().unwrap().insert(
            (method, format!("{}{}", TEST_BASE, path)),
            Err(message.to_string()),
        );
    }

    /// Runs while a request is in flight, before the reply is produced
    pub fn on_send(&self, hook: impl Fn(&HttpRequest) + Send + Sync + 'static) {
        *self.on_send.lock().unwrap() = Some(Arc::new(hook));
    }

    pub fn calls(&self) -> Vec<HttpRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Option<HttpRequest> {
        self.calls.lock().unwrap().last().cloned()
    }

    pub fn paths(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .map(|c| format!("{} {}", c.method, c.url.trim_start_matches(TEST_BASE)))
            .collect()
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let key = (request.method, request.url.clone());
        let hook = self.on_send.lock().unwrap().clone();
        if let Some(hook) = hook {
            hook(&request);
        }
        self.calls.lock().unwrap().push(request);
        self.routes
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Err(format!("no route for {} {}", key.0, key.1)))
    }
}

pub fn client_with(
    transport: &Arc<ScriptedTransport>,
    store: MemoryTokenStore,
) -> (ApiClient, MemoryTokenStore) {
    let session = SessionHandle::new(Session::new(store.clone()));
    let client = ApiClient::new(TEST_BASE, transport.clone(), session);
    (client, store)
}

pub fn user(username: &str) -> UserInfo {
    UserInfo {
        id: format!("id-{}", username),
        username: username.to_string(),
        full_name: None,
        role: Some("admin".to_string()),
        is_active: true,
    }
}

/// Client whose session is already `LoggedIn` with `token`
pub fn logged_in_client(
    transport: &Arc<ScriptedTransport>,
    token: &str,
) -> (ApiClient, MemoryTokenStore) {
    let (client, store) = client_with(transport, MemoryTokenStore::default());
    client
        .session()
        .establish(token.to_string(), user("admin"))
        .unwrap();
    (client, store)
}
