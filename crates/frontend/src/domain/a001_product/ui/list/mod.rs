use crate::domain::a001_product::ui::details::ProductDetails;
use crate::domain::common::actions::delete_record;
use crate::domain::common::list::use_record_list;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::table::placeholder_row;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::use_api;
use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ProductRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub product_type: String,
    pub specification: String,
    pub unit: String,
    pub storage_conditions: String,
}

impl From<Product> for ProductRow {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            code: p.product_code,
            name: p.name,
            product_type: p.product_type,
            specification: p.specification.unwrap_or_else(|| "-".to_string()),
            unit: p.unit,
            storage_conditions: p.storage_conditions.unwrap_or_else(|| "-".to_string()),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let client = use_api();
    let list = use_record_list::<Product>(client.clone());

    let on_saved = Callback::new(move |_| {
        ctx.close_form();
        list.reload.run(());
    });
    let on_close = Callback::new(move |_| ctx.close_form());

    view! {
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
            <table class="table__data data-table">
                <thead>
                    <tr>
                        <th>"产品编号"</th>
                        <th>"产品名称"</th>
                        <th>"类型"</th>
                        <th>"规格"</th>
                        <th>"单位"</th>
                        <th>"储存条件"</th>
                        <th>"操作"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || list.state.with(|state| match state.placeholder() {
                        Some(text) => placeholder_row(7, text),
                        None => state
                            .items()
                            .iter()
                            .cloned()
                            .map(ProductRow::from)
                            .map(|row| {
                                let edit_id = row.id.clone();
                                let delete_id = row.id.clone();
                                let client = client.clone();
                                let delete = move |_| {
                                    delete_record::<Product>(
                                        client.clone(),
                                        delete_id.clone(),
                                        list.reload,
                                    )
                                };
                                view! {
                                    <tr>
                                        <td>{row.code}</td>
                                        <td>{row.name}</td>
                                        <td>{row.product_type}</td>
                                        <td>{row.specification}</td>
                                        <td>{row.unit}</td>
                                        <td>{row.storage_conditions}</td>
                                        <td class="actions">
                                            <button class="btn btn-sm btn-primary" on:click=move |_| ctx.open_edit(&edit_id)>
                                                "编辑"
                                            </button>
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

            {move || ctx.form.get().map(|target| view! {
                <ProductDetails target=target on_saved=on_saved on_close=on_close />
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optionals_render_as_dash() {
        let product: Product = serde_json::from_str(
            r#"{"id":"1","product_code":"P-001","name":"IL-6","product_type":"蛋白","unit":"支","storage_conditions":"-80°C"}"#,
        )
        .unwrap();
        let row = ProductRow::from(product);
        assert_eq!(row.specification, "-");
        assert_eq!(row.storage_conditions, "-80°C");
        assert_eq!(row.product_type, "蛋白");
    }
}
