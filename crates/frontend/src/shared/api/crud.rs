//! CRUD over any REST collection described by `AggregateRoot`.

use contracts::domain::common::AggregateRoot;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::client::{ApiClient, ApiResult};

/// Item path with the id percent-encoded
pub fn item_path<T: AggregateRoot>(id: &str) -> String {
    T::item_path(&urlencoding::encode(id))
}

pub async fn fetch_list<T>(client: &ApiClient) -> ApiResult<Vec<T>>
where
    T: AggregateRoot + DeserializeOwned,
{
    client.get(&T::list_path()).await
}

pub async fn fetch_by_id<T>(client: &ApiClient, id: &str) -> ApiResult<T>
where
    T: AggregateRoot + DeserializeOwned,
{
    client.get(&item_path::<T>(id)).await
}

pub async fn create<T, B>(client: &ApiClient, dto: &B) -> ApiResult<T>
where
    T: AggregateRoot + DeserializeOwned,
    B: Serialize,
{
    client.post(&T::list_path(), dto).await
}

pub async fn update<T, B>(client: &ApiClient, id: &str, dto: &B) -> ApiResult<T>
where
    T: AggregateRoot + DeserializeOwned,
    B: Serialize,
{
    client.put(&item_path::<T>(id), dto).await
}

pub async fn delete<T: AggregateRoot>(client: &ApiClient, id: &str) -> ApiResult<()> {
    client.delete(&item_path::<T>(id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::{logged_in_client, ScriptedTransport};
    use crate::shared::api::HttpMethod;
    use contracts::domain::a001_product::aggregate::{Product, ProductDto};
    use contracts::domain::a005_partner::aggregate::Partner;
    use futures::executor::block_on;

    const PRODUCTS: &str = r#"[
        {"id":"p1","product_code":"P-001","name":"BSA","product_type":"蛋白","unit":"mg"},
        {"id":"p2","product_code":"P-002","name":"Anti-HA","product_type":"新类型","unit":"个"}
    ]"#;

    #[test]
    fn list_tolerates_unknown_type_labels() {
        let transport = ScriptedTransport::new();
        transport.respond(HttpMethod::Get, "/products/", 200, PRODUCTS);
        let (client, _store) = logged_in_client(&transport, "tok");

        let products: Vec<Product> = block_on(fetch_list(&client)).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].product_type, "新类型");
        assert_eq!(products[1].product_type_kind(), None);
    }

    #[test]
    fn delete_encodes_id() {
        let transport = ScriptedTransport::new();
        transport.respond(HttpMethod::Delete, "/partners/a%2Fb", 204, "");
        let (client, _store) = logged_in_client(&transport, "tok");

        block_on(delete::<Partner>(&client, "a/b")).unwrap();
        assert_eq!(transport.paths(), vec!["DELETE /partners/a%2Fb".to_string()]);
    }

    #[test]
    fn create_posts_dto_to_collection() {
        let transport = ScriptedTransport::new();
        transport.respond(
            HttpMethod::Post,
            "/products/",
            201,
            r#"{"id":"p9","product_code":"P-009","name":"IgG","product_type":"抗体","unit":"个"}"#,
        );
        let (client, _store) = logged_in_client(&transport, "tok");

        let dto = ProductDto {
            product_code: "P-009".into(),
            name: "IgG".into(),
            ..Default::default()
        };
        let created: Product = block_on(create(&client, &dto)).unwrap();
        assert_eq!(created.id, "p9");

        let sent: serde_json::Value =
            serde_json::from_str(transport.last_call().unwrap().body.as_deref().unwrap()).unwrap();
        assert_eq!(sent["unit"], "个");
        assert_eq!(sent["specification"], serde_json::Value::Null);
    }
}
