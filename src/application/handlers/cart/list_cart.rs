//! ListCartHandler - Query handler for a user's cart.

use std::sync::Arc;

use crate::domain::foundation::Email;
use crate::domain::ordering::{CartEntry, OrderingError};
use crate::ports::CartRepository;

#[derive(Debug, Clone)]
pub struct ListCartQuery {
    pub email: Email,
}

pub struct ListCartHandler {
    carts: Arc<dyn CartRepository>,
}

impl ListCartHandler {
    pub fn new(carts: Arc<dyn CartRepository>) -> Self {
        Self { carts }
    }

    pub async fn handle(&self, query: ListCartQuery) -> Result<Vec<CartEntry>, OrderingError> {
        Ok(self.carts.list_by_owner(&query.email).await?)
    }
}
