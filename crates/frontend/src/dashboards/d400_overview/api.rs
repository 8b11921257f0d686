use contracts::dashboards::d400_overview::OverviewCounts;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_inventory::aggregate::InventoryItem;
use contracts::domain::a003_purchase_order::aggregate::PurchaseOrder;
use contracts::domain::a004_sales_order::aggregate::SalesOrder;
use contracts::domain::common::AggregateRoot;
use serde_json::Value;

use crate::shared::api::ApiClient;

/// Length of a collection; any failure counts as an empty list
async fn count(client: &ApiClient, path: String) -> usize {
    match client.get::<Vec<Value>>(&path).await {
        Ok(items) => items.len(),
        Err(e) => {
            log::warn!("Dashboard: {} unavailable, showing 0: {}", path, e);
            0
        }
    }
}

/// Получить счётчики для карточек (четыре запроса параллельно)
pub async fn load_overview(client: &ApiClient) -> OverviewCounts {
    let (products, inventory, purchases, sales) = futures::join!(
        count(client, Product::list_path()),
        count(client, InventoryItem::list_path()),
        count(client, PurchaseOrder::list_path()),
        count(client, SalesOrder::list_path()),
    );

    OverviewCounts {
        products,
        inventory,
        purchases,
        sales,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::{logged_in_client, ScriptedTransport};
    use crate::shared::api::HttpMethod;
    use futures::executor::block_on;

    #[test]
    fn failed_collection_counts_as_zero() {
        let transport = ScriptedTransport::new();
        transport.respond(HttpMethod::Get, "/products/", 200, r#"[{},{}]"#);
        transport.respond(HttpMethod::Get, "/inventory/", 200, r#"[{},{},{}]"#);
        transport.respond(HttpMethod::Get, "/purchases/", 200, r#"[1,2,3,4,5]"#);
        transport.fail(HttpMethod::Get, "/sales/", "connection reset");
        let (client, _store) = logged_in_client(&transport, "tok");

        let counts = block_on(load_overview(&client));
        assert_eq!(
            counts,
            OverviewCounts {
                products: 2,
                inventory: 3,
                purchases: 5,
                sales: 0,
            }
        );
        assert_eq!(transport.calls().len(), 4);
    }

    #[test]
    fn rejected_collection_counts_as_zero() {
        let transport = ScriptedTransport::new();
        transport.respond(HttpMethod::Get, "/products/", 500, "");
        transport.respond(HttpMethod::Get, "/inventory/", 200, "[]");
        transport.respond(HttpMethod::Get, "/purchases/", 200, "[{}]");
        transport.respond(HttpMethod::Get, "/sales/", 200, "[{},{}]");
        let (client, _store) = logged_in_client(&transport, "tok");

        let counts = block_on(load_overview(&client));
        assert_eq!((counts.products, counts.purchases, counts.sales), (0, 1, 2));
    }
}
