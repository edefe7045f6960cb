//! Product table operations.

use crate::errors::ProductError;
use crate::models::{ListProductsQuery, Product, ProductCreate, ProductUpdate, StockUpdateResponse};
use std::collections::BTreeSet;

/// Filtered and paginated listing.
pub fn list(products: &[Product], query: &ListProductsQuery) -> Vec<Product> {
    query
        .pagination()
        .apply(products.iter().filter(|p| query.matches(p)).cloned())
}

pub fn get(products: &[Product], product_id: i64) -> Result<Product, ProductError> {
    products
        .iter()
        .find(|p| p.id == product_id)
        .cloned()
        .ok_or(ProductError::NotFound)
}

pub fn get_by_sku(products: &[Product], sku: &str) -> Result<Product, ProductError> {
    products
        .iter()
        .find(|p| p.sku == sku)
        .cloned()
        .ok_or(ProductError::NotFound)
}

/// Insert a product, rejecting a SKU already in use. Id is `max(id) + 1`.
pub fn create(products: &mut Vec<Product>, new_product: ProductCreate) -> Result<Product, ProductError> {
    if products.iter().any(|p| p.sku == new_product.sku) {
        return Err(ProductError::SkuExists);
    }

    let product = Product {
        id: products.iter().map(|p| p.id).max().map_or(1, |max| max + 1),
        name: new_product.name,
        description: new_product.description,
        price: new_product.price,
        stock: new_product.stock,
        category: new_product.category,
        sku: new_product.sku,
    };
    products.push(product.clone());

    Ok(product)
}

/// Apply a partial update; a new SKU must not belong to another product.
pub fn update(
    products: &mut [Product],
    product_id: i64,
    update: ProductUpdate,
) -> Result<Product, ProductError> {
    if let Some(sku) = update.sku.as_deref() {
        let taken = products.iter().any(|p| p.id != product_id && p.sku == sku);
        if taken && products.iter().any(|p| p.id == product_id) {
            return Err(ProductError::SkuExists);
        }
    }

    let product = products
        .iter_mut()
        .find(|p| p.id == product_id)
        .ok_or(ProductError::NotFound)?;

    if let Some(name) = update.name {
        product.name = name;
    }
    if let Some(description) = update.description {
        product.description = Some(description);
    }
    if let Some(price) = update.price {
        product.price = price;
    }
    if let Some(stock) = update.stock {
        product.stock = stock;
    }
    if let Some(category) = update.category {
        product.category = category;
    }
    if let Some(sku) = update.sku {
        product.sku = sku;
    }

    Ok(product.clone())
}

pub fn delete(products: &mut Vec<Product>, product_id: i64) -> Result<(), ProductError> {
    let position = products
        .iter()
        .position(|p| p.id == product_id)
        .ok_or(ProductError::NotFound)?;
    products.remove(position);
    Ok(())
}

/// Add `quantity` (negative to remove) to a product's stock.
///
/// The stock is left unchanged if the result would be negative.
pub fn adjust_stock(
    products: &mut [Product],
    product_id: i64,
    quantity: i64,
) -> Result<StockUpdateResponse, ProductError> {
    let product = products
        .iter_mut()
        .find(|p| p.id == product_id)
        .ok_or(ProductError::NotFound)?;

    let new_stock = product
        .stock
        .checked_add(quantity)
        .filter(|s| *s >= 0)
        .ok_or(ProductError::InsufficientStock)?;

    let previous_stock = product.stock;
    product.stock = new_stock;

    Ok(StockUpdateResponse {
        product_id,
        previous_stock,
        current_stock: new_stock,
        change: quantity,
    })
}

/// Unique categories in sorted order.
pub fn categories(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .map(|p| p.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
