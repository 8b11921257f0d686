//! Create / edit form plumbing shared by products, inventory and partners.

use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;

use super::actions::failure_notice;
use crate::layout::global_context::FormTarget;
use crate::shared::api::{crud, ApiClient};
use crate::shared::dialogs;

/// Raw form state (text as typed) for one record kind
pub trait RecordForm: Clone + Default + Send + Sync + 'static {
    type Record: AggregateRoot + DeserializeOwned + 'static;
    type Dto: Serialize + 'static;

    fn from_record(record: Self::Record) -> Self;

    /// Required fields only; `Err` carries the message to show
    fn validate(&self) -> Result<(), String>;

    fn to_dto(&self) -> Self::Dto;
}

/// "新增产品" / "编辑产品"
pub fn form_title<T: AggregateRoot>(target: &FormTarget) -> String {
    match target {
        FormTarget::Create => format!("新增{}", T::element_name()),
        FormTarget::Edit(_) => format!("编辑{}", T::element_name()),
    }
}

/// ViewModel for a record form
pub struct FormViewModel<F: RecordForm> {
    pub form: RwSignal<F>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl<F: RecordForm> Clone for FormViewModel<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: RecordForm> Copy for FormViewModel<F> {}

impl<F: RecordForm> FormViewModel<F> {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(F::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    /// Signal/callback pair binding one text input to a form field
    pub fn text(
        &self,
        get: fn(&F) -> &String,
        set: fn(&mut F, String),
    ) -> (Signal<String>, Callback<String>) {
        let form = self.form;
        (
            Signal::derive(move || form.with(|f| get(f).clone())),
            Callback::new(move |value: String| form.update(|f| set(f, value))),
        )
    }

    /// Edit mode loads the record; a failed load closes the form with a notice
    pub fn load_if_needed(&self, client: &ApiClient, target: &FormTarget, on_failed: Callback<()>) {
        let Some(id) = target.id().map(str::to_string) else {
            return;
        };
        let client = client.clone();
        let form = self.form;
        spawn_local(async move {
            match crud::fetch_by_id::<F::Record>(&client, &id).await {
                Ok(record) => {
                    log::debug!(
                        "Loaded {} {} ({})",
                        <F::Record as AggregateRoot>::full_name(),
                        record.code(),
                        record.id()
                    );
                    form.set(F::from_record(record));
                }
                Err(e) => {
                    log::error!(
                        "Failed to load {} {}: {}",
                        <F::Record as AggregateRoot>::collection_name(),
                        id,
                        e
                    );
                    dialogs::alert("加载数据失败");
                    on_failed.run(());
                }
            }
        });
    }

    /// Validate, then `POST` (create) or `PUT` (edit)
    pub fn save_command(&self, client: &ApiClient, target: &FormTarget, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Err(message) = current.validate() {
            self.error.set(Some(message));
            return;
        }
        self.error.set(None);
        self.saving.set(true);

        let client = client.clone();
        let target = target.clone();
        let error = self.error;
        let saving = self.saving;
        spawn_local(async move {
            let dto = current.to_dto();
            let (result, notice) = match target.id() {
                None => (
                    crud::create::<F::Record, _>(&client, &dto).await.map(|_| ()),
                    "创建成功",
                ),
                Some(id) => (
                    crud::update::<F::Record, _>(&client, id, &dto).await.map(|_| ()),
                    "更新成功",
                ),
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    dialogs::alert(notice);
                    on_saved.run(());
                }
                Err(e) => error.set(Some(failure_notice("操作", &e))),
            }
        });
    }
}

/// Required-field check used by every `RecordForm::validate`
pub fn require(fields: &[(&str, &str)]) -> Result<(), String> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| *label)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(format!("请填写必填项: {}", missing.join("、")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_partner::aggregate::Partner;

    #[test]
    fn title_depends_on_target() {
        assert_eq!(form_title::<Partner>(&FormTarget::Create), "新增合作伙伴");
        assert_eq!(
            form_title::<Partner>(&FormTarget::Edit("p1".into())),
            "编辑合作伙伴"
        );
    }

    #[test]
    fn require_lists_every_missing_field() {
        assert_eq!(require(&[("编号", "P-1"), ("名称", "x")]), Ok(()));
        assert_eq!(
            require(&[("编号", " "), ("名称", "")]),
            Err("请填写必填项: 编号、名称".to_string())
        );
    }
}
