use crate::api::SalonApi;
use crate::api::transport::Transport;
use crate::errors::AppResult;
use crate::forms::{FormOutcome, ensure};
use crate::models::cart::AddProductCredentials;
use crate::models::product::Product;

#[derive(Debug, Clone, PartialEq)]
pub struct AddToCartForm {
    pub product_id: String,
    pub quantity: u32,
}

impl AddToCartForm {
    pub fn for_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.product_id.clone(),
            quantity,
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        ensure(self.quantity >= 1, "The quantity must be at least 1")
    }

    pub fn submit<T: Transport>(&self, api: &SalonApi<T>, client_id: &str) -> FormOutcome {
        FormOutcome::from_result(self.validate().and_then(|_| {
            api.add_product_to_cart(
                client_id,
                &AddProductCredentials {
                    product_id: self.product_id.clone(),
                    quantity: self.quantity,
                },
            )
        }))
    }
}
