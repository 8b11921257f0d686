//! Row actions shared by the record lists.

use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use std::future::Future;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api::{crud, ApiClient, ApiError, ApiResult};
use crate::shared::dialogs;

/// "确定要删除此产品吗？"
pub fn delete_question<T: AggregateRoot>() -> String {
    format!("确定要删除此{}吗？", T::element_name())
}

/// Notice text for a failed action, e.g. "删除失败: 订单不存在"
pub fn failure_notice(action: &str, error: &ApiError) -> String {
    format!("{}失败: {}", action, error)
}

/// Confirm, `DELETE /{collection}/{id}`, then notify and reload
pub fn delete_record<T: AggregateRoot + 'static>(
    client: ApiClient,
    id: String,
    reload: Callback<()>,
) {
    if !dialogs::confirm(&delete_question::<T>()) {
        return;
    }
    spawn_local(async move {
        match crud::delete::<T>(&client, &id).await {
            Ok(()) => {
                dialogs::alert("删除成功");
                reload.run(());
            }
            Err(e) => dialogs::alert(&failure_notice("删除", &e)),
        }
    });
}

pub const APPROVE_QUESTION: &str = "确定要审核此订单吗？";

/// Confirm, run the approval call, then notify and reload
pub fn approve_record<Fut>(call: Fut, reload: Callback<()>)
where
    Fut: Future<Output = ApiResult<()>> + 'static,
{
    if !dialogs::confirm(APPROVE_QUESTION) {
        return;
    }
    spawn_local(async move {
        match call.await {
            Ok(()) => {
                dialogs::alert("审核成功");
                reload.run(());
            }
            Err(e) => dialogs::alert(&failure_notice("审核", &e)),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::aggregate::Product;
    use contracts::domain::a003_purchase_order::aggregate::PurchaseOrder;

    #[test]
    fn delete_question_names_the_record_kind() {
        assert_eq!(delete_question::<Product>(), "确定要删除此产品吗？");
        assert_eq!(delete_question::<PurchaseOrder>(), "确定要删除此采购订单吗？");
    }

    #[test]
    fn failure_notice_appends_reason() {
        let err = ApiError::request_failed(404, Some("订单不存在"));
        assert_eq!(failure_notice("删除", &err), "删除失败: 订单不存在");
    }
}
