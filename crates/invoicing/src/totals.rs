//! Derivation functions for line-item amounts and invoice totals.
//!
//! All four are total and side-effect free. No rounding is applied here;
//! rounding to two decimals is a display concern (see [`crate::preview`]).
//! A result that overflows to a non-finite value reads as 0.

use invoicer_core::finite_or_zero;

use crate::line_item::LineItem;

/// `quantity * unit_price`.
pub fn line_item_amount(quantity: f64, unit_price: f64) -> f64 {
    finite_or_zero(quantity * unit_price)
}

/// Sum of item amounts, accumulated left to right in sequence order.
pub fn subtotal(items: &[LineItem]) -> f64 {
    finite_or_zero(items.iter().fold(0.0, |sum, item| sum + item.amount()))
}

/// `subtotal * (tax_rate / 100)`; `tax_rate` is a percentage.
pub fn tax_amount(subtotal: f64, tax_rate: f64) -> f64 {
    finite_or_zero(subtotal * (tax_rate / 100.0))
}

/// `subtotal + tax_amount`.
pub fn total(subtotal: f64, tax_amount: f64) -> f64 {
    finite_or_zero(subtotal + tax_amount)
}

/// The three invoice-level derived values, always computed together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total: f64,
}

impl Totals {
    pub fn compute(items: &[LineItem], tax_rate: f64) -> Self {
        let subtotal = subtotal(items);
        let tax_amount = tax_amount(subtotal, tax_rate);
        Self {
            subtotal,
            tax_amount,
            total: total(subtotal, tax_amount),
        }
    }
}
