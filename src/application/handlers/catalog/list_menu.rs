//! ListMenuHandler - Query handler for the public menu.

use std::sync::Arc;

use crate::domain::ordering::{MenuItem, OrderingError};
use crate::ports::CatalogRepository;

#[derive(Debug, Clone)]
pub struct ListMenuQuery;

pub struct ListMenuHandler {
    catalog: Arc<dyn CatalogRepository>,
}

impl ListMenuHandler {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, _query: ListMenuQuery) -> Result<Vec<MenuItem>, OrderingError> {
        Ok(self.catalog.list_menu().await?)
    }
}
