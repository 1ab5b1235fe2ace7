//! Invoice builder domain module.
//!
//! This crate contains the invoice data model, the derivation functions for
//! amounts and totals, and the reducer that applies typed edits to an invoice
//! snapshot, implemented purely as deterministic domain logic (no IO, no
//! storage). [`preview`] renders a consistent snapshot for print.

pub mod dates;
pub mod edit;
pub mod invoice;
pub mod line_item;
pub mod number;
pub mod party;
pub mod preview;
pub mod settings;
pub mod totals;

pub use dates::{due_date_after, parse_date};
pub use edit::{InvoiceEdit, ItemEdit, PartyEdit};
pub use invoice::{Invoice, InvoiceDraft};
pub use line_item::LineItem;
pub use number::{compose_invoice_number, generate_invoice_number};
pub use party::Party;
pub use preview::{InvoicePreview, format_currency, format_date};
pub use settings::InvoiceSettings;
pub use totals::{Totals, line_item_amount, subtotal, tax_amount, total};

pub use invoicer_core::{Entity, LineItemId, Reducer};
