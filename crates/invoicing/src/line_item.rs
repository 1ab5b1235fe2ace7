use serde::{Deserialize, Serialize};

use invoicer_core::{Entity, LineItemId, coerce_number, non_negative};

use crate::edit::ItemEdit;
use crate::totals::line_item_amount;

/// One billable row on an invoice.
///
/// `amount` is a cached derived field: every constructor and `with_*` method
/// recomputes it from `quantity` and `unit_price`, and there is no setter.
/// Quantity and unit price are clamped to `>= 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "LineItemData")]
pub struct LineItem {
    id: LineItemId,
    description: String,
    quantity: f64,
    unit_price: f64,
    amount: f64,
}

/// Wire shape of a line item; any incoming `amount` is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LineItemData {
    id: LineItemId,
    #[serde(default)]
    description: String,
    #[serde(default)]
    quantity: f64,
    #[serde(default)]
    unit_price: f64,
}

impl From<LineItemData> for LineItem {
    fn from(data: LineItemData) -> Self {
        Self::new(data.id, data.description, data.quantity, data.unit_price)
    }
}

impl LineItem {
    pub fn new(
        id: LineItemId,
        description: impl Into<String>,
        quantity: f64,
        unit_price: f64,
    ) -> Self {
        let quantity = non_negative(quantity);
        let unit_price = non_negative(unit_price);
        Self {
            id,
            description: description.into(),
            quantity,
            unit_price,
            amount: line_item_amount(quantity, unit_price),
        }
    }

    /// A freshly added row: empty description, quantity 1, unit price 0.
    pub fn blank(id: LineItemId) -> Self {
        Self::new(id, String::new(), 1.0, 0.0)
    }

    /// Build a row from raw form text; unparsable numbers read as 0.
    pub fn from_form(
        id: LineItemId,
        description: impl Into<String>,
        quantity: &str,
        unit_price: &str,
    ) -> Self {
        Self::new(
            id,
            description,
            coerce_number(quantity),
            coerce_number(unit_price),
        )
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..self
        }
    }

    pub fn with_quantity(self, quantity: f64) -> Self {
        Self::new(self.id, self.description, quantity, self.unit_price)
    }

    pub fn with_unit_price(self, unit_price: f64) -> Self {
        Self::new(self.id, self.description, self.quantity, unit_price)
    }

    /// Copy of this row with one field changed; identity is kept.
    pub fn edited(&self, edit: &ItemEdit) -> Self {
        let item = self.clone();
        match edit {
            ItemEdit::Description(text) => item.with_description(text.clone()),
            ItemEdit::Quantity(q) => item.with_quantity(*q),
            ItemEdit::UnitPrice(p) => item.with_unit_price(*p),
            ItemEdit::QuantityText(text) => item.with_quantity(coerce_number(text)),
            ItemEdit::UnitPriceText(text) => item.with_unit_price(coerce_number(text)),
        }
    }

    /// Whether the cached amount matches the row's own inputs.
    pub fn is_consistent(&self) -> bool {
        self.amount == line_item_amount(self.quantity, self.unit_price)
    }
}

impl Entity for LineItem {
    type Id = LineItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
