use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api::error::GENERIC_FAILURE;
use crate::shared::api::ApiError;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::{use_session_manager, SessionError};

/// Message shown under the login form
pub fn login_error_message(error: &SessionError) -> String {
    match error {
        SessionError::InvalidTransition { from, to } => {
            log::warn!("Login rejected by session state: {:?} -> {:?}", from, to);
            "当前会话状态无法登录，请刷新页面后重试".to_string()
        }
        SessionError::Api(ApiError::Transport(_)) => "网络错误，请重试".to_string(),
        SessionError::Api(ApiError::RequestFailed { message, .. })
            if message == GENERIC_FAILURE =>
        {
            "登录失败".to_string()
        }
        SessionError::Api(other) => other.to_string(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let manager = use_session_manager();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        let manager = manager.clone();
        spawn_local(async move {
            // Success flips the session to LoggedIn and the shell swaps this page out
            if let Err(e) = manager.login(&username_val, &password_val).await {
                set_error_message.set(Some(login_error_message(&e)));
                set_is_loading.set(false);
            }
        });
    };

    view! {
        <PageFrame page_id="sys_login--system" category=PAGE_CAT_SYSTEM>
            <div class="login-container">
                <div class="login-box">
                    <h1>"生物公司进销存管理系统"</h1>
                    <h2>"用户登录"</h2>

                    <Show when=move || error_message.get().is_some()>
                        <div class="error-message" id="login-error">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <form on:submit=on_submit>
                        <div class="form-group">
                            <label for="login-username">"用户名"</label>
                            <input
                                type="text"
                                id="login-username"
                                placeholder="admin"
                                prop:value=move || username.get()
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <div class="form-group">
                            <label for="login-password">"密码"</label>
                            <input
                                type="password"
                                id="login-password"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || is_loading.get()
                        >
                            {move || if is_loading.get() { "登录中..." } else { "登录" }}
                        </button>
                    </form>
                </div>
            </div>
        </PageFrame>
    }
}
