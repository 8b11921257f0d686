use crate::shared::components::status_badge::StatusBadge;
use crate::shared::date_utils::format_date_opt;
use crate::shared::modal::Modal;
use crate::shared::number_format::format_money;
use contracts::domain::a004_sales_order::aggregate::SalesOrder;
use leptos::prelude::*;

/// Read-only view of one sales order with its lines
#[component]
pub fn SalesOrderDetails(order: SalesOrder, on_close: Callback<()>) -> impl IntoView {
    let status_class = order.status_class();
    let lines = order
        .items
        .iter()
        .map(|line| {
            view! {
                <tr>
                    <td>{line.product_name.clone().unwrap_or_else(|| line.product_id.clone())}</td>
                    <td>{line.quantity}</td>
                    <td>{format_money(line.unit_price)}</td>
                    <td>{format_money(line.line_total())}</td>
                    <td>{line.shipped_quantity}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <Modal title=format!("销售订单 {}", order.order_number) on_close=on_close>
            <div class="details-grid">
                <div><label>"订单号"</label><span>{order.order_number.clone()}</span></div>
                <div><label>"客户"</label><span>{order.customer_name.clone().unwrap_or_else(|| "-".to_string())}</span></div>
                <div><label>"状态"</label><StatusBadge label=order.status.clone() css_class=status_class /></div>
                <div><label>"总金额"</label><span>{format_money(order.total_amount)}</span></div>
                <div><label>"订单日期"</label><span>{format_date_opt(order.order_date.as_deref())}</span></div>
                <div><label>"预计发货"</label><span>{format_date_opt(order.expected_date.as_deref())}</span></div>
                <div><label>"收货地址"</label><span>{order.shipping_address.clone().unwrap_or_else(|| "-".to_string())}</span></div>
                <div><label>"备注"</label><span>{order.remark.clone().unwrap_or_else(|| "-".to_string())}</span></div>
            </div>
            <h3>"订单明细"</h3>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"产品"</th>
                        <th>"数量"</th>
                        <th>"单价"</th>
                        <th>"小计"</th>
                        <th>"已出库"</th>
                    </tr>
                </thead>
                <tbody>{lines}</tbody>
            </table>
        </Modal>
    }
}
