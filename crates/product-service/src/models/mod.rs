use common::extract::Validate;
use common::pagination::Pagination;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i64,
    pub category: String,
    pub sku: String,
}

fn validate_price(price: f64) -> Result<(), String> {
    if price.is_finite() && price > 0.0 {
        Ok(())
    } else {
        Err("price must be greater than 0".to_string())
    }
}

fn validate_stock(stock: i64) -> Result<(), String> {
    if stock >= 0 {
        Ok(())
    } else {
        Err("stock must be 0 or greater".to_string())
    }
}

#[derive(Debug, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub stock: i64,
    pub category: String,
    pub sku: String,
}

impl Validate for ProductCreate {
    fn validate(&self) -> Result<(), String> {
        validate_price(self.price)?;
        validate_stock(self.stock)
    }
}

/// Partial update; absent or null fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub category: Option<String>,
    pub sku: Option<String>,
}

impl Validate for ProductUpdate {
    fn validate(&self) -> Result<(), String> {
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(stock) = self.stock {
            validate_stock(stock)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub in_stock: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListProductsQuery {
    #[must_use]
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.limit, self.offset)
    }

    /// Whether a product passes every filter that is set.
    ///
    /// `category` compares case-insensitively; an empty category matches all.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .filter(|c| !c.is_empty())
            .map_or(true, |c| product.category.to_lowercase() == c.to_lowercase());
        let min_ok = self.min_price.map_or(true, |min| product.price >= min);
        let max_ok = self.max_price.map_or(true, |max| product.price <= max);
        let stock_ok = self.in_stock.map_or(true, |in_stock| {
            if in_stock {
                product.stock > 0
            } else {
                product.stock == 0
            }
        });

        category_ok && min_ok && max_ok && stock_ok
    }
}

impl Validate for ListProductsQuery {
    fn validate(&self) -> Result<(), String> {
        for (name, value) in [("min_price", self.min_price), ("max_price", self.max_price)] {
            if value.is_some_and(|v| v < 0.0) {
                return Err(format!("{name} must be 0 or greater"));
            }
        }
        self.pagination().validate()
    }
}

#[derive(Debug, Deserialize)]
pub struct StockQuery {
    pub quantity: i64,
}

impl Validate for StockQuery {}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockUpdateResponse {
    pub product_id: i64,
    pub previous_stock: i64,
    pub current_stock: i64,
    pub change: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
