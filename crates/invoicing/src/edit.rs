//! Typed edit operations accepted by the invoice reducer.
//!
//! One variant per editable field or sub-object; there is no path-based
//! assignment. Derived fields (amounts, subtotal, tax, total) have no variant.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use invoicer_core::LineItemId;

use crate::line_item::LineItem;
use crate::party::Party;

/// A single edit to an invoice snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "camelCase")]
pub enum InvoiceEdit {
    SetInvoiceNumber(String),
    SetDate(NaiveDate),
    SetDueDate(NaiveDate),
    SetFromCompany(PartyEdit),
    SetToClient(PartyEdit),
    SetNotes(String),
    SetTerms(String),
    /// Tax rate as a percentage; clamped to `>= 0`.
    SetTaxRate(f64),
    /// Tax rate as typed into a form; unparsable text reads as 0.
    SetTaxRateText(String),
    /// Append a blank row with the given (fresh) id.
    AddItem { id: LineItemId },
    /// Replace the row at `index`; the replacement must keep that row's id.
    UpdateItem { index: usize, item: LineItem },
    /// Change one field of the row at `index`.
    EditItem { index: usize, field: ItemEdit },
    /// Remove the row at `index`, unless it is the only one.
    RemoveItem { index: usize },
}

impl InvoiceEdit {
    /// `AddItem` carrying a newly generated id.
    pub fn add_item() -> Self {
        Self::AddItem {
            id: LineItemId::new(),
        }
    }

    /// Whether this edit changes an input of subtotal/tax/total.
    pub fn touches_totals(&self) -> bool {
        matches!(
            self,
            Self::SetTaxRate(_)
                | Self::SetTaxRateText(_)
                | Self::AddItem { .. }
                | Self::UpdateItem { .. }
                | Self::EditItem { .. }
                | Self::RemoveItem { .. }
        )
    }

    /// Short stable name, used as a tracing field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetInvoiceNumber(_) => "set_invoice_number",
            Self::SetDate(_) => "set_date",
            Self::SetDueDate(_) => "set_due_date",
            Self::SetFromCompany(_) => "set_from_company",
            Self::SetToClient(_) => "set_to_client",
            Self::SetNotes(_) => "set_notes",
            Self::SetTerms(_) => "set_terms",
            Self::SetTaxRate(_) => "set_tax_rate",
            Self::SetTaxRateText(_) => "set_tax_rate_text",
            Self::AddItem { .. } => "add_item",
            Self::UpdateItem { .. } => "update_item",
            Self::EditItem { .. } => "edit_item",
            Self::RemoveItem { .. } => "remove_item",
        }
    }
}

/// Edit to one party field, or a wholesale replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum PartyEdit {
    Name(String),
    Address(String),
    Email(String),
    Phone(String),
    Replace(Party),
}

/// Edit to one line-item field.
///
/// The `*Text` variants carry raw form input and go through numeric coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ItemEdit {
    Description(String),
    Quantity(f64),
    UnitPrice(f64),
    QuantityText(String),
    UnitPriceText(String),
}
