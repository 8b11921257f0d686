//! Application Shell - корневые компоненты приложения
//!
//! Содержит:
//! - `AppShell` - auth gate (заставка, LoginPage или MainLayout)
//! - `MainLayout` - основной layout приложения (Sidebar + TopHeader + страница)

use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_inventory::ui::list::InventoryList;
use crate::domain::a003_purchase_order::ui::list::PurchaseOrderList;
use crate::domain::a004_sales_order::ui::list::SalesOrderList;
use crate::domain::a005_partner::ui::list::PartnerList;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::auth::{use_auth, SessionStatus};
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

fn render_page(page: Page) -> AnyView {
    match page {
        Page::Dashboard => view! { <OverviewDashboard /> }.into_any(),
        Page::Products => view! { <ProductList /> }.into_any(),
        Page::Inventory => view! { <InventoryList /> }.into_any(),
        Page::Purchases => view! { <PurchaseOrderList /> }.into_any(),
        Page::Sales => view! { <SalesOrderList /> }.into_any(),
        Page::Partners => view! { <PartnerList /> }.into_any(),
    }
}

/// Main application layout: every page switch re-mounts the page and re-fetches its data
#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Fresh session always starts on the dashboard
    ctx.open_page(Page::Dashboard);

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || (move || render_page(ctx.active.get())).into_any()
        />
    }
}

/// Application shell - auth gate component.
///
/// Показывает:
/// - заставку, пока проверяется сохранённый токен
/// - `LoginPage` если пользователь не авторизован
/// - `MainLayout` если авторизован
#[component]
pub fn AppShell() -> impl IntoView {
    let auth = use_auth();

    view! {
        {move || {
            if !auth.ready.get() || auth.status() == SessionStatus::Verifying {
                return view! { <div class="app-splash">"加载中..."</div> }.into_any();
            }
            match auth.status() {
                SessionStatus::LoggedIn => view! { <MainLayout /> }.into_any(),
                _ => view! { <LoginPage /> }.into_any(),
            }
        }}
    }
}
