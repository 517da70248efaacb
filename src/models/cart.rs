use serde::{Deserialize, Deserializer, Serialize};

/// One product line in the client's shopping cart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_name: String,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default, alias = "selectQty")]
    pub selected_qty: u32,
    #[serde(default)]
    pub brand_name: String,
}

/// Cart as returned by `load-shopping-cart`. The server recomputes
/// `total_price` on every mutation; the client never sums the lines.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    #[serde(default, deserialize_with = "null_as_default")]
    pub products_in_shopping_cart: Vec<CartLine>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_price: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddProductCredentials {
    pub product_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProductCredentials {
    pub product_name: String,
}
