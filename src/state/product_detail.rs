//! Product page view-state: RAM variant selection, quantity stepper, image
//! gallery and the "buy now" check.

use thiserror::Error;

use crate::models::{Product, Variant};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuyError {
    #[error("Please select a RAM variant.")]
    NoVariant,
    #[error("Requested quantity exceeds stock.")]
    ExceedsStock,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductDetail {
    product: Product,
    selected_ram: Option<String>,
    quantity: u32,
    image_index: usize,
}

impl ProductDetail {
    /// Starts on the first variant, quantity 1, first image.
    pub fn new(product: Product) -> Self {
        let selected_ram = product.variants.first().map(|v| v.ram.clone());
        Self {
            product,
            selected_ram,
            quantity: 1,
            image_index: 0,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn selected_ram(&self) -> Option<&str> {
        self.selected_ram.as_deref()
    }

    pub fn selected_variant(&self) -> Option<&Variant> {
        self.selected_ram
            .as_deref()
            .and_then(|ram| self.product.variant(ram))
    }

    /// Select by RAM label and pull the quantity into the new stock bounds.
    pub fn select_ram(&mut self, ram: &str) {
        self.selected_ram = Some(ram.to_string());
        let max = self.max_quantity().max(1);
        self.quantity = self.quantity.clamp(1, max);
    }

    /// Price of the selected variant as `$1299.00`, or `N/A`.
    pub fn price_label(&self) -> String {
        self.selected_variant()
            .map(|v| format_price(v.price))
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn stock(&self) -> u32 {
        self.selected_variant().map(|v| v.qty).unwrap_or(0)
    }

    fn max_quantity(&self) -> u32 {
        self.stock()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn can_decrease(&self) -> bool {
        self.quantity > 1
    }

    pub fn can_increase(&self) -> bool {
        self.selected_variant().is_some() && self.quantity < self.max_quantity()
    }

    pub fn decrease(&mut self) {
        if self.can_decrease() {
            self.quantity -= 1;
        }
    }

    pub fn increase(&mut self) {
        if self.can_increase() {
            self.quantity += 1;
        }
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    pub fn current_image(&self) -> Option<&str> {
        self.product.images.get(self.image_index).map(String::as_str)
    }

    pub fn select_image(&mut self, index: usize) {
        if index < self.product.images.len() {
            self.image_index = index;
        }
    }

    /// Validate a purchase and return the acknowledgement text.
    pub fn buy_now(&self) -> Result<String, BuyError> {
        let variant = self.selected_variant().ok_or(BuyError::NoVariant)?;
        if self.quantity > variant.qty {
            return Err(BuyError::ExceedsStock);
        }
        Ok(format!(
            "Buying {} unit(s) of {} ({} RAM)",
            self.quantity, self.product.title, variant.ram
        ))
    }
}

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}
