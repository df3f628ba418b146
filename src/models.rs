//! Catalog, wishlist and account types exchanged with the backend.
//!
//! Field names follow the backend's JSON (`_id`, `subCategory`, `qty`), mapped
//! onto snake_case Rust fields with serde renames.

use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog Types
// =============================================================================

/// A purchasable configuration of a product (one RAM size).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Variant {
    pub ram: String,
    pub price: f64,
    /// Units in stock
    #[serde(default)]
    pub qty: u32,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Subcategory id this product is filed under
    #[serde(rename = "subCategory", default)]
    pub sub_category: String,
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// Price of the first variant, which is what listings show.
    pub fn list_price(&self) -> Option<f64> {
        self.variants.first().map(|v| v.price)
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn variant(&self, ram: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.ram == ram)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SubCategory {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Parent category id (not always populated by the backend)
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "subCategories", alias = "subcategories", default)]
    pub sub_categories: Vec<SubCategory>,
}

// =============================================================================
// Response Envelopes
// =============================================================================

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ProductsResponse {
    #[serde(default)]
    pub products: Vec<Product>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<Product>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ProductResponse {
    /// `null` or missing when the id is unknown
    #[serde(default)]
    pub product: Option<Product>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub categories: Vec<Category>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct WishlistResponse {
    #[serde(default)]
    pub wishlist: Vec<Product>,
}

/// Body of create/signup responses; only the message is surfaced.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// Request Bodies
// =============================================================================

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewCategory {
    pub name: String,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewSubCategory {
    #[serde(rename = "categoryId")]
    pub category_id: String,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct WishlistItemRequest {
    #[serde(rename = "productId")]
    pub product_id: String,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}

// =============================================================================
// Login Response
// =============================================================================

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct LoginUser {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user: Option<LoginUser>,
}

impl LoginResponse {
    /// User id from either `userId` or a nested `user` object.
    pub fn resolved_user_id(&self) -> Option<&str> {
        self.user_id
            .as_deref()
            .or_else(|| self.user.as_ref().map(|u| u.id.as_str()))
            .filter(|id| !id.is_empty())
    }
}
