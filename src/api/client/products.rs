use crate::api::SalonApi;
use crate::api::transport::Transport;
use crate::errors::AppResult;
use crate::models::page::Page;
use crate::models::product::Product;

impl<T: Transport> SalonApi<T> {
    pub fn load_products(&self, page: u32) -> AppResult<Page<Product>> {
        self.fetch_page("/api/client/load-products", page)
    }
}
