//! Menu items and reviews.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MenuItemId, Money, ReviewId, ValidationError};

/// An item on the restaurant menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub recipe: String,
    pub image: String,
    pub category: String,
    pub price: Money,
}

impl MenuItem {
    /// Creates a menu item, requiring a name and a category.
    pub fn new(
        name: impl Into<String>,
        recipe: impl Into<String>,
        image: impl Into<String>,
        category: impl Into<String>,
        price: Money,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        let category = category.into().trim().to_string();
        if category.is_empty() {
            return Err(ValidationError::empty_field("category"));
        }
        Ok(Self {
            id: MenuItemId::new(),
            name,
            recipe: recipe.into(),
            image: image.into(),
            category,
            price,
        })
    }
}

/// A customer review shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub name: String,
    pub details: String,
    pub rating: u8,
}

impl Review {
    pub const MAX_RATING: u8 = 5;

    pub fn new(
        name: impl Into<String>,
        details: impl Into<String>,
        rating: u8,
    ) -> Result<Self, ValidationError> {
        if rating > Self::MAX_RATING {
            return Err(ValidationError::out_of_range(
                "rating",
                0,
                Self::MAX_RATING as i64,
                rating as i64,
            ));
        }
        Ok(Self {
            id: ReviewId::new(),
            name: name.into(),
            details: details.into(),
            rating,
        })
    }
}
