use contracts::domain::a004_sales_order::aggregate::SalesOrder;

use crate::shared::api::crud::item_path;
use crate::shared::api::{ApiClient, ApiResult};

/// `POST /sales/{id}/approve`
pub async fn approve(client: &ApiClient, id: &str) -> ApiResult<()> {
    let endpoint = format!("{}/approve", item_path::<SalesOrder>(id));
    client.post_ignore::<()>(&endpoint, None).await?;
    log::info!("Sales order {} approved", id);
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
            "/sales/so%201/approve",
            200,
            r#"{"message":"审核成功"}"#,
        );
        let (client, _) = logged_in_client(&transport, "t");

        block_on(approve(&client, "so 1")).unwrap();
        let call = transport.last_call().unwrap();
        assert_eq!(call.body, None);
        assert_eq!(call.header("Authorization"), Some("Bearer t"));
    }

    #[test]
    fn expired_session_during_approval_logs_out() {
        let transport = ScriptedTransport::new();
        transport.respond(HttpMethod::Post, "/sales/so1/approve", 401, "");
        let (client, store) = logged_in_client(&transport, "stale");

        let err = block_on(approve(&client, "so1")).unwrap_err();
        assert_eq!(err, ApiError::AuthExpired);
        assert!(!client.session().snapshot().is_logged_in());
        assert_eq!(store.current(), None);
    }
}
