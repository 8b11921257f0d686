use super::model::InventoryForm;
use crate::domain::common::form::{form_title, FormViewModel};
use crate::layout::global_context::FormTarget;
use crate::shared::components::ui::Input;
use crate::shared::modal::Modal;
use crate::system::auth::use_api;
use contracts::domain::a002_inventory::aggregate::InventoryItem;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn InventoryDetails(
    target: FormTarget,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let client = use_api();
    let vm = FormViewModel::<InventoryForm>::new();
    vm.load_if_needed(&client, &target, on_close);

    let (product_id, set_product_id) = vm.text(|f| &f.product_id, |f, v| f.product_id = v);
    let (warehouse, set_warehouse) = vm.text(|f| &f.warehouse, |f, v| f.warehouse = v);
    let (batch, set_batch) = vm.text(|f| &f.batch_number, |f, v| f.batch_number = v);
    let (quantity, set_quantity) = vm.text(|f| &f.quantity, |f, v| f.quantity = v);
    let (price, set_price) = vm.text(|f| &f.unit_price, |f, v| f.unit_price = v);
    let (location, set_location) = vm.text(|f| &f.location, |f, v| f.location = v);

    let title = form_title::<InventoryItem>(&target);
    let handle_save = move |_| vm.save_command(&client, &target, on_saved);

    view! {
        <Modal title=title on_close=on_close>
            {move || vm.error.get().map(|e| view! { <div class="error-message">{e}</div> })}
            <div class="form-row">
                <Input label="产品ID" required=true value=product_id on_input=set_product_id />
                <Input label="仓库" value=warehouse on_input=set_warehouse />
            </div>
            <div class="form-row">
                <Input label="批次号" value=batch on_input=set_batch />
                <Input label="数量" input_type="number" value=quantity on_input=set_quantity />
            </div>
            <div class="form-row">
                <Input label="单价" input_type="number" step="0.01" value=price on_input=set_price />
                <Input label="货位" value=location on_input=set_location />
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "取消"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=handle_save
                    disabled=Signal::derive(move || vm.saving.get())
                >
                    "保存"
                </Button>
            </div>
        </Modal>
    }
}
