//! Read-only print/preview rendering of a consistent invoice snapshot.
//!
//! Currency is shown with exactly two decimals here and nowhere else; the
//! snapshot itself keeps unrounded values.

use chrono::NaiveDate;
use serde::Serialize;

use crate::invoice::Invoice;
use crate::party::Party;

/// `$` followed by the value with exactly two decimals.
pub fn format_currency(value: f64) -> String {
    format!("${value:.2}")
}

/// Long date form, e.g. `October 19, 2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// A party as printed: name, then address lines, email and phone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartyBlock {
    pub name: String,
    pub address_lines: Vec<String>,
    pub email: String,
    pub phone: String,
}

impl From<&Party> for PartyBlock {
    fn from(party: &Party) -> Self {
        Self {
            name: party.name.clone(),
            address_lines: party.address_lines().map(str::to_string).collect(),
            email: party.email.clone(),
            phone: party.phone.clone(),
        }
    }
}

/// One printed table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewRow {
    /// 1-based position in print order.
    pub row: usize,
    pub description: String,
    /// Quantity as entered (no fixed decimals).
    pub quantity: String,
    pub unit_price: String,
    pub amount: String,
}

/// Totals block with display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewTotals {
    pub subtotal: String,
    /// e.g. `Tax (8.25%)`.
    pub tax_label: String,
    pub tax_amount: String,
    pub total: String,
}

/// Everything a print collaborator needs, already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoicePreview {
    /// Suggested document title for print/PDF output.
    pub document_title: String,
    pub invoice_number: String,
    pub date: String,
    pub due_date: String,
    pub from: PartyBlock,
    pub bill_to: PartyBlock,
    pub rows: Vec<PreviewRow>,
    pub totals: PreviewTotals,
    pub notes: String,
    pub terms: String,
}

impl InvoicePreview {
    pub fn from_invoice(invoice: &Invoice) -> Self {
        let rows = invoice
            .items()
            .iter()
            .enumerate()
            .map(|(i, item)| PreviewRow {
                row: i + 1,
                description: item.description().to_string(),
                quantity: item.quantity().to_string(),
                unit_price: format_currency(item.unit_price()),
                amount: format_currency(item.amount()),
            })
            .collect();

        Self {
            document_title: format!("Invoice-{}", invoice.invoice_number()),
            invoice_number: invoice.invoice_number().to_string(),
            date: format_date(invoice.date()),
            due_date: format_date(invoice.due_date()),
            from: PartyBlock::from(invoice.from_company()),
            bill_to: PartyBlock::from(invoice.to_client()),
            rows,
            totals: PreviewTotals {
                subtotal: format_currency(invoice.subtotal()),
                tax_label: format!("Tax ({}%)", invoice.tax_rate()),
                tax_amount: format_currency(invoice.tax_amount()),
                total: format_currency(invoice.total()),
            },
            notes: invoice.notes().to_string(),
            terms: invoice.terms().to_string(),
        }
    }
}

impl From<&Invoice> for InvoicePreview {
    fn from(invoice: &Invoice) -> Self {
        Self::from_invoice(invoice)
    }
}

fn write_party(f: &mut core::fmt::Formatter<'_>, party: &PartyBlock) -> core::fmt::Result {
    writeln!(f, "{}", party.name)?;
    for line in &party.address_lines {
        writeln!(f, "{line}")?;
    }
    writeln!(f, "{}", party.email)?;
    writeln!(f, "{}", party.phone)
}

/// Plain-text print layout.
impl core::fmt::Display for InvoicePreview {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "INVOICE")?;
        writeln!(f, "Invoice #: {}", self.invoice_number)?;
        writeln!(f, "Date: {}", self.date)?;
        writeln!(f, "Due Date: {}", self.due_date)?;
        writeln!(f)?;
        write_party(f, &self.from)?;
        writeln!(f)?;
        writeln!(f, "BILL TO")?;
        write_party(f, &self.bill_to)?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<4}{:<32}{:>10}{:>14}{:>14}",
            "#", "Description", "Quantity", "Unit Price", "Amount"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<4}{:<32}{:>10}{:>14}{:>14}",
                row.row, row.description, row.quantity, row.unit_price, row.amount
            )?;
        }
        writeln!(f)?;

        writeln!(f, "{:<20}{:>14}", "Subtotal:", self.totals.subtotal)?;
        writeln!(
            f,
            "{:<20}{:>14}",
            format!("{}:", self.totals.tax_label),
            self.totals.tax_amount
        )?;
        writeln!(f, "{:<20}{:>14}", "Total:", self.totals.total)?;
        writeln!(f)?;

        writeln!(f, "NOTES")?;
        writeln!(f, "{}", self.notes)?;
        writeln!(f)?;
        writeln!(f, "TERMS & CONDITIONS")?;
        write!(f, "{}", self.terms)
    }
}
