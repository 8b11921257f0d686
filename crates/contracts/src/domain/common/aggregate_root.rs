/// Корень агрегата, которым управляет REST backend.
///
/// Связывает запись с её коллекцией (`/products`, `/partners`, ...) и с
/// подписями, которые использует UI.
pub trait AggregateRoot {
    // ============================================================================
    // Методы экземпляра (данные конкретной записи)
    // ============================================================================

    /// ID записи (ObjectId backend'а в строковом виде)
    fn id(&self) -> &str;

    /// Бизнес-код записи (например, "P-001" или "PO20240315120000")
    fn code(&self) -> &str;

    // ============================================================================
    // Метаданные класса агрегата (статические данные)
    // ============================================================================

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя REST-коллекции (например, "products")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "产品")
    fn element_name() -> &'static str;

    /// Имя списка для UI (например, "产品管理")
    fn list_name() -> &'static str;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Полное имя агрегата для системы (например, "a001_products")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Путь списка: "/products/"
    fn list_path() -> String {
        format!("/{}/", Self::collection_name())
    }

    /// Путь отдельной записи: "/products/{id}"
    fn item_path(id: &str) -> String {
        format!("/{}/{}", Self::collection_name(), id)
    }
}
