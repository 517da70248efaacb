//! The client's shopping cart screen.

use crate::api::SalonApi;
use crate::api::transport::Transport;
use crate::forms::FormOutcome;
use crate::models::cart::{Cart, DeleteProductCredentials};
use crate::utils::format_price;

pub const EMPTY_CART: &str = "Your shopping cart is empty. Add some products to continue.";
pub const CART_FETCH_ERROR: &str = "An error occurred while fetching the cart.";
pub const CART_DELETE_ERROR: &str = "An error occurred while deleting the product.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartView {
    pub cart: Cart,
    /// Inline status line (empty cart, fetch failure).
    pub message: Option<String>,
}

impl CartView {
    /// Load the cart. A failure leaves an empty cart and the fetch message.
    pub fn load<T: Transport>(api: &SalonApi<T>, client_id: &str) -> Self {
        match api.load_shopping_cart(client_id) {
            Ok(cart) => {
                let message = cart
                    .products_in_shopping_cart
                    .is_empty()
                    .then(|| EMPTY_CART.to_string());
                Self { cart, message }
            }
            Err(_) => Self {
                cart: Cart::default(),
                message: Some(CART_FETCH_ERROR.to_string()),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cart.products_in_shopping_cart.is_empty()
    }

    /// Total as computed by the server; `$0.00` for an empty cart.
    pub fn total(&self) -> f64 {
        if self.is_empty() { 0.0 } else { self.cart.total_price }
    }

    pub fn total_label(&self) -> String {
        format!("Total Price: {}", format_price(self.total()))
    }

    /// Remove a line by product name, then reload from the server.
    pub fn remove<T: Transport>(
        &mut self,
        api: &SalonApi<T>,
        client_id: &str,
        product_name: &str,
    ) -> FormOutcome {
        let credentials = DeleteProductCredentials {
            product_name: product_name.to_string(),
        };
        match api.delete_product_from_cart(client_id, &credentials) {
            Ok(message) => {
                *self = Self::load(api, client_id);
                FormOutcome::ok(message)
            }
            Err(_) => FormOutcome::fail(CART_DELETE_ERROR),
        }
    }
}
