use contracts::domain::a003_purchase_order::aggregate::PurchaseOrder;

use crate::shared::api::crud::item_path;
use crate::shared::api::{ApiClient, ApiResult};

/// `POST /purchases/{id}/approve`
pub async fn approve(client: &ApiClient, id: &str) -> ApiResult<()> {
    let endpoint = format!("{}/approve", item_path::<PurchaseOrder>(id));
    client.post_ignore::<()>(&endpoint, None).await?;
    log::info!("Purchase order {} approved", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::{logged_in_client, ScriptedTransport};
    use crate::shared::api::{ApiError, HttpMethod};
    use futures::executor::block_on;

    #[test]
    fn approve_posts_without_body() {
        let transport = ScriptedTransport::new();
        transport.respond(
            HttpMethod::Post,
            "/purchases/po%201/approve",
            200,
            r#"{"message":"审核成功"}"#,
        );
        let (client, _) = logged_in_client(&transport, "t");

        block_on(approve(&client, "po 1")).unwrap();
        let call = transport.last_call().unwrap();
        assert_eq!(call.body, None);
        assert_eq!(call.header("Authorization"), Some("Bearer t"));
    }

    #[test]
    fn rejected_approval_surfaces_detail() {
        let transport = ScriptedTransport::new();
        transport.respond(
            HttpMethod::Post,
            "/purchases/po1/approve",
            400,
            r#"{"detail":"只能审核待审核状态的订单"}"#,
        );
        let (client, _) = logged_in_client(&transport, "t");

        let err = block_on(approve(&client, "po1")).unwrap_err();
        assert_eq!(
            err,
            ApiError::request_failed(400, Some("只能审核待审核状态的订单"))
        );
    }
}
