use crate::domain::a005_partner::ui::details::PartnerDetails;
use crate::domain::common::actions::delete_record;
use crate::domain::common::list::use_record_list;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::status_badge::ActiveBadge;
use crate::shared::components::table::placeholder_row;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::use_api;
use contracts::domain::a005_partner::aggregate::Partner;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct PartnerRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub partner_type: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub is_active: bool,
}

impl From<Partner> for PartnerRow {
    fn from(p: Partner) -> Self {
        Self {
            id: p.id,
            code: p.partner_code,
            name: p.name,
            partner_type: p.partner_type,
            contact_person: p.contact_person.unwrap_or_else(|| "-".to_string()),
            phone: p.phone.unwrap_or_else(|| "-".to_string()),
            email: p.email.unwrap_or_else(|| "-".to_string()),
            is_active: p.is_active,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PartnerList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let client = use_api();
    let list = use_record_list::<Partner>(client.clone());

    let on_saved = Callback::new(move |_| {
        ctx.close_form();
        list.reload.run(());
    });
    let on_close = Callback::new(move |_| ctx.close_form());

    view! {
        <PageFrame page_id="a005_partner--list" category=PAGE_CAT_LIST>
            <table class="table__data data-table">
                <thead>
                    <tr>
                        <th>"编号"</th>
                        <th>"名称"</th>
                        <th>"类型"</th>
                        <th>"联系人"</th>
                        <th>"电话"</th>
                        <th>"邮箱"</th>
                        <th>"状态"</th>
                        <th>"操作"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || list.state.with(|state| match state.placeholder() {
                        Some(text) => placeholder_row(8, text),
                        None => state
                            .items()
                            .iter()
                            .cloned()
                            .map(PartnerRow::from)
                            .map(|row| {
                                let edit_id = row.id.clone();
                                let delete_id = row.id.clone();
                                let client = client.clone();
                                let delete = move |_| {
                                    delete_record::<Partner>(
                                        client.clone(),
                                        delete_id.clone(),
                                        list.reload,
                                    )
                                };
                                view! {
                                    <tr>
                                        <td>{row.code}</td>
                                        <td>{row.name}</td>
                                        <td>{row.partner_type}</td>
                                        <td>{row.contact_person}</td>
                                        <td>{row.phone}</td>
                                        <td>{row.email}</td>
                                        <td><ActiveBadge active=row.is_active /></td>
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
                <PartnerDetails target=target on_saved=on_saved on_close=on_close />
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partner_defaults_to_active() {
        let partner: Partner = serde_json::from_str(
            r#"{"id":"s1","partner_code":"S-01","name":"义翘神州","partner_type":"供应商","phone":"010-5862"}"#,
        )
        .unwrap();
        let row = PartnerRow::from(partner);
        assert!(row.is_active);
        assert_eq!(row.contact_person, "-");
        assert_eq!(row.phone, "010-5862");
    }
}
