//! TopHeader: page title, add button, current user, logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::{use_auth, use_session_manager};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let auth = use_auth();
    let manager = use_session_manager();

    let logout = move |_| manager.logout();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "隐藏导航" } else { "显示导航" }
                >
                    "☰"
                </button>
                <h1 class="top-header__title" id="page-title">{move || ctx.active.get().title()}</h1>
            </div>

            <div class="top-header__actions">
                <Show when=move || ctx.active.get().has_create_form()>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| ctx.open_create()>
                        {icon("plus")}
                        "新增"
                    </Button>
                </Show>

                <div class="top-header__user">
                    {icon("user")}
                    <span id="current-user">
                        {move || auth.display_name().unwrap_or_default()}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="退出登录">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
