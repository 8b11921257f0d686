use super::model::ProductForm;
use crate::domain::common::form::{form_title, FormViewModel};
use crate::layout::global_context::FormTarget;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::modal::Modal;
use crate::system::auth::use_api;
use contracts::domain::a001_product::aggregate::Product;
use contracts::enums::ProductType;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ProductDetails(
    target: FormTarget,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let client = use_api();
    let vm = FormViewModel::<ProductForm>::new();
    vm.load_if_needed(&client, &target, on_close);

    let (code, set_code) = vm.text(|f| &f.product_code, |f, v| f.product_code = v);
    let (name, set_name) = vm.text(|f| &f.name, |f, v| f.name = v);
    let (spec, set_spec) = vm.text(|f| &f.specification, |f, v| f.specification = v);
    let (unit, set_unit) = vm.text(|f| &f.unit, |f, v| f.unit = v);
    let (storage, set_storage) =
        vm.text(|f| &f.storage_conditions, |f, v| f.storage_conditions = v);
    let (description, set_description) =
        vm.text(|f| &f.description, |f, v| f.description = v);

    let form = vm.form;
    let product_type = Signal::derive(move || form.with(|f| f.product_type.label().to_string()));
    let set_product_type = Callback::new(move |v: String| {
        if let Some(t) = ProductType::from_label(&v) {
            form.update(|f| f.product_type = t);
        }
    });

    let title = form_title::<Product>(&target);
    let handle_save = move |_| vm.save_command(&client, &target, on_saved);

    view! {
        <Modal title=title on_close=on_close>
            {move || vm.error.get().map(|e| view! { <div class="error-message">{e}</div> })}
            <div class="form-row">
                <Input label="产品编号" required=true value=code on_input=set_code />
                <Input label="产品名称" required=true value=name on_input=set_name />
            </div>
            <div class="form-row">
                <Select
                    label="产品类型"
                    required=true
                    value=product_type
                    on_change=set_product_type
                    options=ProductType::all().iter().map(|t| t.label()).collect()
                />
                <Input label="规格" value=spec on_input=set_spec placeholder="如: 100μg" />
            </div>
            <div class="form-row">
                <Input label="单位" value=unit on_input=set_unit />
                <Input label="储存条件" value=storage on_input=set_storage placeholder="如: -20°C" />
            </div>
            <Textarea label="产品描述" value=description on_input=set_description />
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
