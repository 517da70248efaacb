use crate::models::catalog::{Category, Incoming};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock_quantity: i64,
    #[serde(default)]
    pub categories: Vec<Incoming<Category>>,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub date_added: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// Only the first image is ever displayed.
    pub fn primary_image(&self) -> Option<&str> {
        self.images
            .first()
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}

/// Body of `create-product` and `update-product/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCredentials {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_quantity: i64,
    pub categories: Vec<Category>,
    pub brand: String,
    pub images: Vec<String>,
}
