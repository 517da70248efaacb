use crate::api::SalonApi;
use crate::api::transport::Transport;
use crate::errors::{AppError, AppResult};
use crate::forms::{FormOutcome, ensure, has_min_len};
use crate::models::catalog::{Category, known};
use crate::models::product::{Product, ProductCredentials};

const MISSING_ID: &str = "The product doesn't have an id";

/// Editable product fields. Only one image link is handled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub product_id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_quantity: i64,
    pub categories: Vec<Category>,
    pub brand: String,
    pub image: String,
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: Some(product.product_id.clone()),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            stock_quantity: product.stock_quantity,
            categories: known(&product.categories),
            brand: product.brand.clone(),
            image: product.primary_image().unwrap_or_default().to_string(),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        ensure(
            has_min_len(&self.name, 3),
            "The product name must be at least 3 characters long",
        )?;
        ensure(
            has_min_len(&self.description, 10),
            "The product description must be at least 10 characters long",
        )?;
        ensure(self.price > 0.0, "The product price must be greater than 0")?;
        ensure(
            self.stock_quantity >= 0,
            "The product quantity must be 0 or greater",
        )?;
        ensure(
            !self.categories.is_empty(),
            "The product must have at least one category",
        )?;
        ensure(
            has_min_len(&self.brand, 3),
            "The product brand must be at least 3 characters long",
        )?;
        ensure(
            !self.image.trim().is_empty(),
            "The product must have at least one image",
        )?;
        Ok(())
    }

    fn require_id(&self) -> AppResult<&str> {
        self.product_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| AppError::Validation(MISSING_ID.to_string()))
    }

    pub fn credentials(&self) -> ProductCredentials {
        ProductCredentials {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price: self.price,
            stock_quantity: self.stock_quantity,
            categories: self.categories.clone(),
            brand: self.brand.trim().to_string(),
            images: vec![self.image.trim().to_string()],
        }
    }

    pub fn create<T: Transport>(&self, api: &SalonApi<T>) -> FormOutcome {
        FormOutcome::from_result(
            self.validate()
                .and_then(|_| api.create_product(&self.credentials())),
        )
    }

    pub fn update<T: Transport>(&self, api: &SalonApi<T>) -> FormOutcome {
        FormOutcome::from_result(self.validate().and_then(|_| {
            let id = self.require_id()?;
            api.update_product(id, &self.credentials())
        }))
    }

    pub fn delete<T: Transport>(&self, api: &SalonApi<T>) -> FormOutcome {
        FormOutcome::from_result(self.require_id().and_then(|id| api.delete_product(id)))
    }
}
