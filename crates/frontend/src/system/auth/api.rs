use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};
use serde::de::IgnoredAny;

use crate::shared::api::client::{required, to_json, ApiClient, ApiResult};
use crate::shared::api::HttpMethod;

/// Create the default admin account if the backend has none yet
pub async fn init_admin(client: &ApiClient) -> ApiResult<()> {
    client
        .request_anonymous::<IgnoredAny>("/auth/init-admin", HttpMethod::Post, None)
        .await
        .map(|_| ())
}

/// Login with username and password
pub async fn login(client: &ApiClient, username: &str, password: &str) -> ApiResult<LoginResponse> {
    let request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    let body = to_json(&request)?;
    required(
        client
            .request_anonymous("/auth/login", HttpMethod::Post, Some(body))
            .await?,
    )
}

/// Get current user info with the session's token
pub async fn get_current_user(client: &ApiClient) -> ApiResult<UserInfo> {
    client.get("/auth/me").await
}

/// Get current user info with a token the session does not hold yet
pub async fn get_current_user_with_token(client: &ApiClient, token: &str) -> ApiResult<UserInfo> {
    required(
        client
            .request_with_token("/auth/me", HttpMethod::Get, None, token)
            .await?,
    )
}
