use super::model::PartnerForm;
use crate::domain::common::form::{form_title, FormViewModel};
use crate::layout::global_context::FormTarget;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::modal::Modal;
use crate::system::auth::use_api;
use contracts::domain::a005_partner::aggregate::Partner;
use contracts::enums::PartnerType;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PartnerDetails(
    target: FormTarget,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let client = use_api();
    let vm = FormViewModel::<PartnerForm>::new();
    vm.load_if_needed(&client, &target, on_close);

    let (code, set_code) = vm.text(|f| &f.partner_code, |f, v| f.partner_code = v);
    let (name, set_name) = vm.text(|f| &f.name, |f, v| f.name = v);
    let (contact, set_contact) = vm.text(|f| &f.contact_person, |f, v| f.contact_person = v);
    let (phone, set_phone) = vm.text(|f| &f.phone, |f, v| f.phone = v);
    let (email, set_email) = vm.text(|f| &f.email, |f, v| f.email = v);
    let (address, set_address) = vm.text(|f| &f.address, |f, v| f.address = v);
    let (remark, set_remark) = vm.text(|f| &f.remark, |f, v| f.remark = v);

    let form = vm.form;
    let partner_type = Signal::derive(move || form.with(|f| f.partner_type.label().to_string()));
    let set_partner_type = Callback::new(move |v: String| {
        if let Some(t) = PartnerType::from_label(&v) {
            form.update(|f| f.partner_type = t);
        }
    });

    let title = form_title::<Partner>(&target);
    let handle_save = move |_| vm.save_command(&client, &target, on_saved);

    view! {
        <Modal title=title on_close=on_close>
            {move || vm.error.get().map(|e| view! { <div class="error-message">{e}</div> })}
            <div class="form-row">
                <Input label="编号" required=true value=code on_input=set_code />
                <Input label="名称" required=true value=name on_input=set_name />
            </div>
            <div class="form-row">
                <Select
                    label="类型"
                    required=true
                    value=partner_type
                    on_change=set_partner_type
                    options=PartnerType::all().iter().map(|t| t.label()).collect()
                />
                <Input label="联系人" value=contact on_input=set_contact />
            </div>
            <div class="form-row">
                <Input label="电话" value=phone on_input=set_phone />
                <Input label="邮箱" input_type="email" value=email on_input=set_email />
            </div>
            <Input label="地址" value=address on_input=set_address />
            <Textarea label="备注" value=remark on_input=set_remark rows=2 />
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
