//! ListReviewsHandler - Query handler for customer reviews.

use std::sync::Arc;

use crate::domain::ordering::{OrderingError, Review};
use crate::ports::CatalogRepository;

#[derive(Debug, Clone)]
pub struct ListReviewsQuery;

pub struct ListReviewsHandler {
    catalog: Arc<dyn CatalogRepository>,
}

impl ListReviewsHandler {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, _query: ListReviewsQuery) -> Result<Vec<Review>, OrderingError> {
        Ok(self.catalog.list_reviews().await?)
    }
}
