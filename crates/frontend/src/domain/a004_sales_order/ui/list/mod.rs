use crate::domain::a004_sales_order::api::approve;
use crate::domain::a004_sales_order::ui::details::SalesOrderDetails;
use crate::domain::common::actions::{approve_record, delete_record};
use crate::domain::common::list::use_record_list;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::table::placeholder_row;
use crate::shared::date_utils::format_date_opt;
use crate::shared::number_format::format_money;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::use_api;
use contracts::domain::a004_sales_order::aggregate::SalesOrder;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct SalesOrderRow {
    pub id: String,
    pub order_number: String,
    pub customer: String,
    pub total: String,
    pub status: String,
    pub status_class: &'static str,
    pub order_date: String,
    pub expected_date: String,
    pub can_approve: bool,
}

impl From<&SalesOrder> for SalesOrderRow {
    fn from(o: &SalesOrder) -> Self {
        Self {
            id: o.id.clone(),
            order_number: o.order_number.clone(),
            customer: o.customer_name.clone().unwrap_or_else(|| "-".to_string()),
            total: format_money(o.total_amount),
            status: o.status.clone(),
            status_class: o.status_class(),
            order_date: format_date_opt(o.order_date.as_deref()),
            expected_date: format_date_opt(o.expected_date.as_deref()),
            can_approve: o.can_approve(),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SalesOrderList() -> impl IntoView {
    let client = use_api();
    let list = use_record_list::<SalesOrder>(client.clone());
    let (viewing, set_viewing) = signal::<Option<SalesOrder>>(None);
    let close_details = Callback::new(move |_| set_viewing.set(None));

    view! {
        <PageFrame page_id="a004_sales_order--list" category=PAGE_CAT_LIST>
            <table class="table__data data-table">
                <thead>
                    <tr>
                        <th>"订单号"</th>
                        <th>"客户"</th>
                        <th>"总金额"</th>
                        <th>"状态"</th>
                        <th>"订单日期"</th>
                        <th>"预计发货"</th>
                        <th>"操作"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || list.state.with(|state| match state.placeholder() {
                        Some(text) => placeholder_row(7, text),
                        None => state
                            .items()
                            .iter()
                            .map(|order| {
                                let row = SalesOrderRow::from(order);
                                let order = order.clone();
                                let approve_id = row.id.clone();
                                let delete_id = row.id.clone();
                                let approve_client = client.clone();
                                let delete_client = client.clone();
                                let delete = move |_| {
                                    delete_record::<SalesOrder>(
                                        delete_client.clone(),
                                        delete_id.clone(),
                                        list.reload,
                                    )
                                };
                                view! {
                                    <tr>
                                        <td>{row.order_number}</td>
                                        <td>{row.customer}</td>
                                        <td>{row.total}</td>
                                        <td><StatusBadge label=row.status css_class=row.status_class /></td>
                                        <td>{row.order_date}</td>
                                        <td>{row.expected_date}</td>
                                        <td class="actions">
                                            <button class="btn btn-sm btn-primary" on:click=move |_| set_viewing.set(Some(order.clone()))>
                                                "查看"
                                            </button>
                                            {row.can_approve.then(move || view! {
                                                <button
                                                    class="btn btn-sm btn-success"
                                                    on:click=move |_| {
                                                        let client = approve_client.clone();
                                                        let id = approve_id.clone();
                                                        approve_record(
                                                            async move { approve(&client, &id).await },
                                                            list.reload,
                                                        )
                                                    }
                                                >
                                                    "审核"
                                                </button>
                                            })}
                                            <button class="btn btn-sm btn-danger" on:click=delete>
                                                "删除"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any(),
                    })}
                </tbody>
            </table>

            {move || viewing.get().map(|order| view! {
                <SalesOrderDetails order=order on_close=close_details />
            })}
        </PageFrame>
    }
}
