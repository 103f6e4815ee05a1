//! AddMenuItemHandler - Command handler for adding to the menu (admin).

use std::sync::Arc;

use crate::domain::foundation::Money;
use crate::domain::ordering::{MenuItem, OrderingError};
use crate::ports::CatalogRepository;

#[derive(Debug, Clone)]
pub struct AddMenuItemCommand {
    pub name: String,
    pub recipe: String,
    pub image: String,
    pub category: String,
    pub price: Money,
}

pub struct AddMenuItemHandler {
    catalog: Arc<dyn CatalogRepository>,
}

impl AddMenuItemHandler {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, cmd: AddMenuItemCommand) -> Result<MenuItem, OrderingError> {
        let item = MenuItem::new(cmd.name, cmd.recipe, cmd.image, cmd.category, cmd.price)?;
        self.catalog.add_menu_item(&item).await?;
        tracing::info!(menu_item_id = %item.id, category = %item.category, "Menu item added");
        Ok(item)
    }
}
