use crate::api::SalonApi;
use crate::api::transport::{ApiRequest, Transport};
use crate::errors::AppResult;
use crate::models::page::Page;
use crate::models::product::{Product, ProductCredentials};

impl<T: Transport> SalonApi<T> {
    pub fn get_admin_products(&self, page: u32) -> AppResult<Page<Product>> {
        self.fetch_page("/api/admin/get-products", page)
    }

    pub fn create_product(&self, credentials: &ProductCredentials) -> AppResult<String> {
        self.fetch_message(ApiRequest::post("/api/admin/create-product").json(credentials)?)
    }

    pub fn update_product(&self, product_id: &str, credentials: &ProductCredentials) -> AppResult<String> {
        let path = format!("/api/admin/update-product/{}", product_id);
        self.fetch_message(ApiRequest::post(path).json(credentials)?)
    }

    pub fn delete_product(&self, product_id: &str) -> AppResult<String> {
        self.fetch_message(ApiRequest::post(format!(
            "/api/admin/delete-product/{}",
            product_id
        )))
    }
}
