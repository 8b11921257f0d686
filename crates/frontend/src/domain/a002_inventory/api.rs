use contracts::domain::a002_inventory::aggregate::{
    InventoryItem, StockMovementRecord, StockMovementRequest,
};
use contracts::domain::common::AggregateRoot;
use contracts::enums::StockDirection;

use crate::shared::api::{ApiClient, ApiResult};

/// `POST /inventory/in` or `POST /inventory/out` for one batch
pub async fn stock_movement(
    client: &ApiClient,
    item: &InventoryItem,
    direction: StockDirection,
    quantity: i64,
) -> ApiResult<StockMovementRecord> {
    let endpoint = format!(
        "/{}/{}",
        InventoryItem::collection_name(),
        direction.endpoint()
    );
    let request = StockMovementRequest::for_item(item, direction.operation(), quantity);
    log::info!(
        "{} {} x{} (inventory {})",
        direction.label(),
        item.product_id,
        quantity,
        item.id
    );
    client.post(&endpoint, &request).await
}
