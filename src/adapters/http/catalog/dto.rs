//! DTOs for catalog endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Money;
use crate::domain::ordering::{MenuItem, Review};

/// Body of `POST /menu`.
#[derive(Debug, Clone, Deserialize)]
pub struct AddMenuItemRequest {
    pub name: String,
    #[serde(default)]
    pub recipe: String,
    #[serde(default)]
    pub image: String,
    pub category: String,
    pub price: Money,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuItemResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub recipe: String,
    pub image: String,
    pub category: String,
    pub price: Money,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
            recipe: item.recipe,
            image: item.image,
            category: item.category,
            price: item.price,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub details: String,
    pub rating: u8,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id.to_string(),
            name: review.name,
            details: review.details,
            rating: review.rating,
        }
    }
}
