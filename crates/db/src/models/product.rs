//! Sample `product` resource schema.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::Resource;

fn default_true() -> bool {
    true
}

/// Products collection schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Product {
    /// Product title
    pub title: String,
    /// Product description
    pub description: Option<String>,
    /// Price in dollars
    #[validate(range(min = 0.0))]
    #[schema(minimum = 0)]
    pub price: f64,
    /// Product category
    pub category: String,
    /// Whether product is in stock
    #[serde(default = "default_true")]
    pub in_stock: bool,
}

impl Resource for Product {
    const COLLECTION: &'static str = "product";
}
