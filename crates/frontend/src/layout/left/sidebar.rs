//! Sidebar: one entry per console page

use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">"生物公司进销存管理系统"</div>
            {Page::ALL.into_iter().map(|page| {
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || ctx.active.get() == page
                        data-page=page.key()
                        on:click=move |_| ctx.open_page(page)
                    >
                        <div class="app-sidebar__item-content">
                            {icon(page.icon())}
                            <span>{page.title()}</span>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
