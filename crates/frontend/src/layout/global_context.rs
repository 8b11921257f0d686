use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_inventory::aggregate::InventoryItem;
use contracts::domain::a003_purchase_order::aggregate::PurchaseOrder;
use contracts::domain::a004_sales_order::aggregate::SalesOrder;
use contracts::domain::a005_partner::aggregate::Partner;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

/// Страницы консоли (пункты бокового меню)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Dashboard,
    Products,
    Inventory,
    Purchases,
    Sales,
    Partners,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Dashboard,
        Page::Products,
        Page::Inventory,
        Page::Purchases,
        Page::Sales,
        Page::Partners,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Products => Product::collection_name(),
            Page::Inventory => InventoryItem::collection_name(),
            Page::Purchases => PurchaseOrder::collection_name(),
            Page::Sales => SalesOrder::collection_name(),
            Page::Partners => Partner::collection_name(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "仪表盘",
            Page::Products => Product::list_name(),
            Page::Inventory => InventoryItem::list_name(),
            Page::Purchases => PurchaseOrder::list_name(),
            Page::Sales => SalesOrder::list_name(),
            Page::Partners => Partner::list_name(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Products => "products",
            Page::Inventory => "inventory",
            Page::Purchases => "purchases",
            Page::Sales => "sales",
            Page::Partners => "partners",
        }
    }

    /// Pages with a create / edit form; the header shows "add" only for these
    pub fn has_create_form(&self) -> bool {
        matches!(self, Page::Products | Page::Inventory | Page::Partners)
    }
}

/// Что открыто в форме редактирования текущей страницы
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormTarget {
    Create,
    Edit(String),
}

impl FormTarget {
    pub fn id(&self) -> Option<&str> {
        match self {
            FormTarget::Create => None,
            FormTarget::Edit(id) => Some(id),
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub form: RwSignal<Option<FormTarget>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::Dashboard),
            form: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Switch page; any open form is dropped
    pub fn open_page(&self, page: Page) {
        log::debug!("open_page: {}", page.key());
        self.form.set(None);
        self.active.set(page);
    }

    pub fn open_create(&self) {
        if self.active.get_untracked().has_create_form() {
            self.form.set(Some(FormTarget::Create));
        }
    }

    pub fn open_edit(&self, id: &str) {
        self.form.set(Some(FormTarget::Edit(id.to_string())));
    }

    pub fn close_form(&self) {
        self.form.set(None);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_titles_follow_navigation() {
        let titles: Vec<&str> = Page::ALL.iter().map(|p| p.title()).collect();
        assert_eq!(
            titles,
            vec!["仪表盘", "产品管理", "库存管理", "采购管理", "销售管理", "合作伙伴管理"]
        );
        assert_eq!(Page::Purchases.key(), "purchases");
    }

    #[test]
    fn add_button_only_where_a_form_exists() {
        let with_form: Vec<Page> = Page::ALL
            .into_iter()
            .filter(|p| p.has_create_form())
            .collect();
        assert_eq!(with_form, vec![Page::Products, Page::Inventory, Page::Partners]);
    }

    #[test]
    fn form_target_exposes_edit_id() {
        assert_eq!(FormTarget::Create.id(), None);
        assert_eq!(FormTarget::Edit("42".into()).id(), Some("42"));
    }
}
