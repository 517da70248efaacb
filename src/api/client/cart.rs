use crate::api::SalonApi;
use crate::api::transport::{ApiRequest, Transport};
use crate::errors::AppResult;
use crate::models::cart::{AddProductCredentials, Cart, DeleteProductCredentials};

impl<T: Transport> SalonApi<T> {
    pub fn load_shopping_cart(&self, client_id: &str) -> AppResult<Cart> {
        self.fetch_data(ApiRequest::get(format!(
            "/api/client/load-shopping-cart/{}",
            client_id
        )))
    }

    pub fn add_product_to_cart(
        &self,
        client_id: &str,
        credentials: &AddProductCredentials,
    ) -> AppResult<String> {
        let path = format!("/api/client/{}/add-product-sp", client_id);
        self.fetch_message(ApiRequest::post(path).json(credentials)?)
    }

    pub fn delete_product_from_cart(
        &self,
        client_id: &str,
        credentials: &DeleteProductCredentials,
    ) -> AppResult<String> {
        let path = format!("/api/client/{}/delete-product-sp", client_id);
        self.fetch_message(ApiRequest::post(path).json(credentials)?)
    }
}
