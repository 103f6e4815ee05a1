//! DeleteMenuItemHandler - Command handler for removing from the menu (admin).

use std::sync::Arc;

use crate::domain::foundation::MenuItemId;
use crate::domain::ordering::OrderingError;
use crate::ports::CatalogRepository;

#[derive(Debug, Clone)]
pub struct DeleteMenuItemCommand {
    pub id: MenuItemId,
}

/// Number of items removed (0 or 1).
pub type DeleteMenuItemResult = u64;

pub struct DeleteMenuItemHandler {
    catalog: Arc<dyn CatalogRepository>,
}

impl DeleteMenuItemHandler {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    pub async fn handle(
        &self,
        cmd: DeleteMenuItemCommand,
    ) -> Result<DeleteMenuItemResult, OrderingError> {
        let deleted = self.catalog.delete_menu_item(&cmd.id).await?;
        if deleted {
            tracing::info!(menu_item_id = %cmd.id, "Menu item deleted");
        }
        Ok(deleted as u64)
    }
}
