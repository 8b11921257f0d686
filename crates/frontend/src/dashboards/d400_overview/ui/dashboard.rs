use crate::dashboards::d400_overview::api;
use crate::shared::components::stat_card::StatCard;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::use_api;
use contracts::dashboards::d400_overview::OverviewCounts;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 仪表盘: four record counts
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let client = use_api();
    let (counts, set_counts) = signal(None::<OverviewCounts>);

    Effect::new(move |_| {
        let client = client.clone();
        spawn_local(async move {
            set_counts.set(Some(api::load_overview(&client).await));
        });
    });

    let pick = move |f: fn(&OverviewCounts) -> usize| {
        Signal::derive(move || counts.get().as_ref().map(f))
    };

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__content">
                <div class="stat-cards">
                    <StatCard label="产品总数" icon_name="products" value=pick(|c| c.products) />
                    <StatCard label="库存记录" icon_name="inventory" value=pick(|c| c.inventory) />
                    <StatCard label="采购订单" icon_name="purchases" value=pick(|c| c.purchases) />
                    <StatCard label="销售订单" icon_name="sales" value=pick(|c| c.sales) />
                </div>
            </div>
        </PageFrame>
    }
}
