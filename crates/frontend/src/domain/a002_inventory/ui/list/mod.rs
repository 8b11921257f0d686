use crate::domain::a002_inventory::api::stock_movement;
use crate::domain::a002_inventory::ui::details::InventoryDetails;
use crate::domain::common::actions::failure_notice;
use crate::domain::common::list::use_record_list;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api::ApiClient;
use crate::shared::components::table::placeholder_row;
use crate::shared::dialogs;
use crate::shared::number_format::format_money;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::use_api;
use contracts::domain::a002_inventory::aggregate::InventoryItem;
use contracts::enums::StockDirection;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug, PartialEq)]
pub struct InventoryRow {
    pub product_code: String,
    pub product_name: String,
    pub warehouse: String,
    pub batch_number: String,
    pub quantity: i64,
    pub unit_price: String,
    pub location: String,
}

impl From<&InventoryItem> for InventoryRow {
    fn from(i: &InventoryItem) -> Self {
        let or_dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
        Self {
            product_code: or_dash(&i.product_code),
            product_name: or_dash(&i.product_name),
            warehouse: i.warehouse.clone(),
            batch_number: or_dash(&i.batch_number),
            quantity: i.quantity,
            unit_price: format_money(i.unit_price),
            location: or_dash(&i.location),
        }
    }
}

fn quantity_prompt(direction: StockDirection) -> String {
    format!("请输入{}数量：", direction.label())
}

/// Prompt for a quantity, post the movement, then reload
fn run_stock_movement(
    client: ApiClient,
    item: InventoryItem,
    direction: StockDirection,
    reload: Callback<()>,
) {
    let quantity = match dialogs::prompt_positive_quantity(&quantity_prompt(direction)) {
        Ok(Some(quantity)) => quantity,
        Ok(None) => return,
        Err(notice) => {
            dialogs::alert(&notice);
            return;
        }
    };
    spawn_local(async move {
        match stock_movement(&client, &item, direction, quantity).await {
            Ok(_) => {
                dialogs::alert(&format!("{}成功", direction.label()));
                reload.run(());
            }
            Err(e) => dialogs::alert(&failure_notice(direction.label(), &e)),
        }
    });
}

#[component]
#[allow(non_snake_case)]
pub fn InventoryList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let client = use_api();
    let list = use_record_list::<InventoryItem>(client.clone());

    let on_saved = Callback::new(move |_| {
        ctx.close_form();
        list.reload.run(());
    });
    let on_close = Callback::new(move |_| ctx.close_form());

    view! {
        <PageFrame page_id="a002_inventory--list" category=PAGE_CAT_LIST>
            <table class="table__data data-table">
                <thead>
                    <tr>
                        <th>"产品编号"</th>
                        <th>"产品名称"</th>
                        <th>"仓库"</th>
                        <th>"批次号"</th>
                        <th>"数量"</th>
                        <th>"单价"</th>
                        <th>"货位"</th>
                        <th>"操作"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || list.state.with(|state| match state.placeholder() {
                        Some(text) => placeholder_row(8, text),
                        None => state
                            .items()
                            .iter()
                            .map(|item| {
                                let row = InventoryRow::from(item);
                                let stock_in = {
                                    let client = client.clone();
                                    let item = item.clone();
                                    move |_| {
                                        run_stock_movement(
                                            client.clone(),
                                            item.clone(),
                                            StockDirection::In,
                                            list.reload,
                                        )
                                    }
                                };
                                let stock_out = {
                                    let client = client.clone();
                                    let item = item.clone();
                                    move |_| {
                                        run_stock_movement(
                                            client.clone(),
                                            item.clone(),
                                            StockDirection::Out,
                                            list.reload,
                                        )
                                    }
                                };
                                view! {
                                    <tr>
                                        <td>{row.product_code}</td>
                                        <td>{row.product_name}</td>
                                        <td>{row.warehouse}</td>
                                        <td>{row.batch_number}</td>
                                        <td>{row.quantity}</td>
                                        <td>{row.unit_price}</td>
                                        <td>{row.location}</td>
                                        <td class="actions">
                                            <button class="btn btn-sm btn-success" on:click=stock_in>"入库"</button>
                                            <button class="btn btn-sm btn-warning" on:click=stock_out>"出库"</button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any(),
                    })}
                </tbody>
            </table>

            {move || ctx.form.get().map(|target| view! {
                <InventoryDetails target=target on_saved=on_saved on_close=on_close />
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_formats_price_and_fills_gaps() {
        let item: InventoryItem = serde_json::from_str(
            r#"{"id":"i1","product_id":"p1","product_code":"P-001","warehouse":"主仓库","quantity":3,"unit_price":1234.5}"#,
        )
        .unwrap();
        let row = InventoryRow::from(&item);
        assert_eq!(row.unit_price, "¥1,234.50");
        assert_eq!(row.product_name, "-");
        assert_eq!(row.batch_number, "-");
    }

    #[test]
    fn prompts_name_the_operation() {
        assert_eq!(quantity_prompt(StockDirection::In), "请输入入库数量：");
        assert_eq!(quantity_prompt(StockDirection::Out), "请输入出库数量：");
    }
}
