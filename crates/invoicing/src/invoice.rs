use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use invoicer_core::{
    DomainError, DomainResult, Entity, LineItemId, Reducer, coerce_number, non_negative,
};

use crate::dates::due_date_after;
use crate::edit::InvoiceEdit;
use crate::line_item::LineItem;
use crate::number::generate_invoice_number;
use crate::party::Party;
use crate::settings::InvoiceSettings;
use crate::totals::Totals;

/// Invoice snapshot.
///
/// Always consistent: `subtotal`, `tax_amount` and `total` are private and only
/// ever written by the same step that changed `items` or `tax_rate`. The only
/// way to change a snapshot is [`Reducer::reduce`], which returns a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "InvoiceDraft")]
pub struct Invoice {
    invoice_number: String,
    date: NaiveDate,
    due_date: NaiveDate,
    from_company: Party,
    to_client: Party,
    items: Vec<LineItem>,
    notes: String,
    terms: String,
    tax_rate: f64,
    subtotal: f64,
    tax_amount: f64,
    total: f64,
}

/// Every non-derived invoice field; the input for building a snapshot.
///
/// Also the wire shape accepted when decoding an [`Invoice`]: any derived
/// values present in the input are ignored and recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    pub invoice_number: String,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub from_company: Party,
    #[serde(default)]
    pub to_client: Party,
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub terms: String,
    #[serde(default)]
    pub tax_rate: f64,
}

impl TryFrom<InvoiceDraft> for Invoice {
    type Error = DomainError;

    fn try_from(draft: InvoiceDraft) -> Result<Self, Self::Error> {
        Invoice::from_draft(draft)
    }
}

const SEED_NOTES: &str = "Thank you for your business!";
const SEED_ITEM_DESCRIPTION: &str = "Design Services";
const SEED_ITEM_UNIT_PRICE: f64 = 1000.0;

fn seed_company() -> Party {
    Party::new(
        "Your Company Name",
        "123 Business St, Suite 100\nSan Francisco, CA 94111",
        "contact@yourcompany.com",
        "(555) 123-4567",
    )
}

fn seed_client() -> Party {
    Party::new(
        "Client Name",
        "456 Client Ave\nNew York, NY 10001",
        "client@example.com",
        "(555) 987-6543",
    )
}

impl Invoice {
    /// Build a consistent snapshot from its inputs.
    ///
    /// Fails when `items` is empty or two items share an id.
    pub fn from_draft(draft: InvoiceDraft) -> DomainResult<Self> {
        if draft.items.is_empty() {
            return Err(DomainError::validation("invoice must have at least one line item"));
        }

        let mut seen = HashSet::with_capacity(draft.items.len());
        for item in &draft.items {
            if !seen.insert(item.id()) {
                return Err(DomainError::validation(format!(
                    "duplicate line item id: {}",
                    item.id()
                )));
            }
        }

        let tax_rate = non_negative(draft.tax_rate);
        let totals = Totals::compute(&draft.items, tax_rate);

        Ok(Self {
            invoice_number: draft.invoice_number,
            date: draft.date,
            due_date: draft.due_date,
            from_company: draft.from_company,
            to_client: draft.to_client,
            items: draft.items,
            notes: draft.notes,
            terms: draft.terms,
            tax_rate,
            subtotal: totals.subtotal,
            tax_amount: totals.tax_amount,
            total: totals.total,
        })
    }

    /// A new invoice issued `today` with a generated number.
    pub fn seeded(settings: &InvoiceSettings, today: NaiveDate) -> Self {
        let number = generate_invoice_number(&settings.number_prefix, today);
        Self::seeded_with(settings, today, number, LineItemId::new())
    }

    /// Like [`Invoice::seeded`] with an explicit number and placeholder item id.
    pub fn seeded_with(
        settings: &InvoiceSettings,
        today: NaiveDate,
        invoice_number: impl Into<String>,
        item_id: LineItemId,
    ) -> Self {
        let items = vec![LineItem::new(
            item_id,
            SEED_ITEM_DESCRIPTION,
            1.0,
            SEED_ITEM_UNIT_PRICE,
        )];
        let tax_rate = non_negative(settings.default_tax_rate);
        let totals = Totals::compute(&items, tax_rate);

        Self {
            invoice_number: invoice_number.into(),
            date: today,
            due_date: due_date_after(today, settings.payment_terms_days),
            from_company: seed_company(),
            to_client: seed_client(),
            items,
            notes: SEED_NOTES.to_string(),
            terms: format!(
                "Payment due within {} days of issue date.",
                settings.payment_terms_days
            ),
            tax_rate,
            subtotal: totals.subtotal,
            tax_amount: totals.tax_amount,
            total: totals.total,
        }
    }

    pub fn invoice_number(&self) -> &str {
        &self.invoice_number
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn from_company(&self) -> &Party {
        &self.from_company
    }

    pub fn to_client(&self) -> &Party {
        &self.to_client
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn position_of(&self, id: &LineItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn terms(&self) -> &str {
        &self.terms
    }

    pub fn tax_rate(&self) -> f64 {
        self.tax_rate
    }

    pub fn subtotal(&self) -> f64 {
        self.subtotal
    }

    pub fn tax_amount(&self) -> f64 {
        self.tax_amount
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn totals(&self) -> Totals {
        Totals {
            subtotal: self.subtotal,
            tax_amount: self.tax_amount,
            total: self.total,
        }
    }

    /// The non-derived fields, e.g. to rebuild a snapshot elsewhere.
    pub fn to_draft(&self) -> InvoiceDraft {
        InvoiceDraft {
            invoice_number: self.invoice_number.clone(),
            date: self.date,
            due_date: self.due_date,
            from_company: self.from_company.clone(),
            to_client: self.to_client.clone(),
            items: self.items.clone(),
            notes: self.notes.clone(),
            terms: self.terms.clone(),
            tax_rate: self.tax_rate,
        }
    }

    /// Apply edits in order; see [`Reducer::reduce_all`].
    pub fn apply_all(&self, edits: &[InvoiceEdit]) -> Self {
        self.reduce_all(edits)
    }

    /// Check every snapshot invariant: non-empty items, unique ids, each
    /// item's amount matching its inputs, and totals matching a fresh
    /// recomputation exactly.
    pub fn is_consistent(&self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        let mut seen = HashSet::with_capacity(self.items.len());
        if !self.items.iter().all(|item| seen.insert(item.id())) {
            return false;
        }
        self.items.iter().all(LineItem::is_consistent)
            && Totals::compute(&self.items, self.tax_rate) == self.totals()
    }

    fn recalculate(&mut self) {
        let totals = Totals::compute(&self.items, self.tax_rate);
        self.subtotal = totals.subtotal;
        self.tax_amount = totals.tax_amount;
        self.total = totals.total;
    }

    fn ensure_index(&self, index: usize, op: &'static str) -> bool {
        if index < self.items.len() {
            return true;
        }
        tracing::warn!(op, index, len = self.items.len(), "line item index out of range; ignored");
        false
    }

    /// Mutate this (private, not yet published) copy; returns whether the
    /// edit took effect.
    fn apply_edit(&mut self, edit: &InvoiceEdit) -> bool {
        match edit {
            InvoiceEdit::SetInvoiceNumber(v) => self.invoice_number = v.clone(),
            InvoiceEdit::SetDate(d) => self.date = *d,
            InvoiceEdit::SetDueDate(d) => self.due_date = *d,
            InvoiceEdit::SetFromCompany(e) => self.from_company = self.from_company.edited(e),
            InvoiceEdit::SetToClient(e) => self.to_client = self.to_client.edited(e),
            InvoiceEdit::SetNotes(v) => self.notes = v.clone(),
            InvoiceEdit::SetTerms(v) => self.terms = v.clone(),
            InvoiceEdit::SetTaxRate(rate) => self.tax_rate = non_negative(*rate),
            InvoiceEdit::SetTaxRateText(text) => self.tax_rate = non_negative(coerce_number(text)),
            InvoiceEdit::AddItem { id } => {
                if self.position_of(id).is_some() {
                    tracing::warn!(item_id = %id, "line item id already in use; add ignored");
                    return false;
                }
                self.items.push(LineItem::blank(id.clone()));
            }
            InvoiceEdit::UpdateItem { index, item } => {
                if !self.ensure_index(*index, "update") {
                    return false;
                }
                let slot = &mut self.items[*index];
                if slot.id() != item.id() {
                    tracing::warn!(
                        index = *index,
                        expected = %slot.id(),
                        got = %item.id(),
                        "replacement would change line item identity; ignored"
                    );
                    return false;
                }
                *slot = item.clone();
            }
            InvoiceEdit::EditItem { index, field } => {
                if !self.ensure_index(*index, "edit") {
                    return false;
                }
                let slot = &mut self.items[*index];
                *slot = slot.edited(field);
            }
            InvoiceEdit::RemoveItem { index } => {
                if self.items.len() <= 1 {
                    tracing::debug!("refusing to remove the last line item");
                    return false;
                }
                if !self.ensure_index(*index, "remove") {
                    return false;
                }
                self.items.remove(*index);
            }
        }
        true
    }
}

impl Reducer for Invoice {
    type Edit = InvoiceEdit;

    fn reduce(&self, edit: &Self::Edit) -> Self {
        let mut next = self.clone();
        let applied = next.apply_edit(edit);

        // Totals catch up before the new snapshot is handed out.
        if applied && edit.touches_totals() {
            next.recalculate();
        }

        tracing::debug!(
            invoice = %next.invoice_number,
            edit = edit.kind(),
            applied,
            items = next.items.len(),
            total = next.total,
            "invoice edit reduced"
        );

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::{ItemEdit, PartyEdit};
    use proptest::prelude::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn test_item_id(n: u32) -> LineItemId {
        format!("item-{n}").parse().unwrap()
    }

    fn test_invoice() -> Invoice {
        Invoice::seeded_with(
            &InvoiceSettings::default(),
            test_date(),
            "INV-261019-001",
            test_item_id(1),
        )
    }

    #[test]
    fn seeded_invoice_matches_defaults() {
        let invoice = test_invoice();

        assert_eq!(invoice.invoice_number(), "INV-261019-001");
        assert_eq!(invoice.date(), test_date());
        assert_eq!(
            invoice.due_date(),
            NaiveDate::from_ymd_opt(2026, 11, 18).unwrap()
        );
        assert_eq!(invoice.items().len(), 1);
        assert_eq!(invoice.items()[0].description(), "Design Services");
        assert_eq!(invoice.tax_rate(), 8.25);
        assert_eq!(invoice.subtotal(), 1000.0);
        assert_eq!(invoice.tax_amount(), 82.5);
        assert_eq!(invoice.total(), 1082.5);
        assert_eq!(invoice.terms(), "Payment due within 30 days of issue date.");
        assert!(invoice.is_consistent());
    }

    #[test]
    fn seeded_uses_generated_number_and_settings() {
        let settings = InvoiceSettings {
            number_prefix: "ACME".to_string(),
            payment_terms_days: 14,
            default_tax_rate: 0.0,
        };
        let invoice = Invoice::seeded(&settings, test_date());

        assert!(invoice.invoice_number().starts_with("ACME-261019-"));
        assert_eq!(
            invoice.due_date(),
            NaiveDate::from_ymd_opt(2026, 11, 2).unwrap()
        );
        assert_eq!(invoice.total(), 1000.0);
    }

    #[test]
    fn removing_the_last_item_is_a_no_op() {
        let invoice = test_invoice();
        let next = invoice.reduce(&InvoiceEdit::RemoveItem { index: 0 });

        assert_eq!(next.items().len(), 1);
        assert_eq!(next, invoice);
    }

    #[test]
    fn adding_an_item_updates_totals() {
        let invoice = test_invoice();
        let added = invoice.reduce(&InvoiceEdit::AddItem {
            id: test_item_id(2),
        });

        assert_eq!(added.items().len(), 2);
        let blank = &added.items()[1];
        assert_eq!(blank.quantity(), 1.0);
        assert_eq!(blank.unit_price(), 0.0);
        assert_eq!(blank.amount(), 0.0);
        assert_eq!(added.total(), 1082.5);

        let priced = added.apply_all(&[
            InvoiceEdit::EditItem {
                index: 1,
                field: ItemEdit::Quantity(2.0),
            },
            InvoiceEdit::EditItem {
                index: 1,
                field: ItemEdit::UnitPrice(50.0),
            },
        ]);
        assert_eq!(priced.items()[1].amount(), 100.0);
        assert_eq!(priced.subtotal(), 1100.0);
        assert_eq!(priced.tax_amount(), 90.75);
        assert_eq!(priced.total(), 1190.75);
        assert!(priced.is_consistent());
    }

    #[test]
    fn updating_quantity_propagates_to_totals() {
        let invoice = test_invoice();
        let replacement = invoice.items()[0].clone().with_quantity(3.0);
        let next = invoice.reduce(&InvoiceEdit::UpdateItem {
            index: 0,
            item: replacement,
        });

        assert_eq!(next.items()[0].amount(), 3000.0);
        assert_eq!(next.subtotal(), 3000.0);
        assert_eq!(next.tax_amount(), 247.5);
        assert_eq!(next.total(), 3247.5);
        assert_eq!(next.items()[0].id(), &test_item_id(1));
    }

    #[test]
    fn unparsable_quantity_coerces_to_zero() {
        let invoice = test_invoice();
        let next = invoice.reduce(&InvoiceEdit::EditItem {
            index: 0,
            field: ItemEdit::QuantityText("twelve".to_string()),
        });

        assert_eq!(next.items()[0].quantity(), 0.0);
        assert_eq!(next.items()[0].amount(), 0.0);
        assert_eq!(next.total(), 0.0);
        assert!(next.is_consistent());
    }

    #[test]
    fn tax_rate_edits_recompute_and_clamp() {
        let invoice = test_invoice();

        let next = invoice.reduce(&InvoiceEdit::SetTaxRate(10.0));
        assert_eq!(next.tax_amount(), 100.0);
        assert_eq!(next.total(), 1100.0);

        let next = invoice.reduce(&InvoiceEdit::SetTaxRateText("abc".to_string()));
        assert_eq!(next.tax_rate(), 0.0);
        assert_eq!(next.total(), 1000.0);

        let next = invoice.reduce(&InvoiceEdit::SetTaxRate(-3.0));
        assert_eq!(next.tax_rate(), 0.0);
    }

    #[test]
    fn plain_field_edits_leave_totals_untouched() {
        let invoice = test_invoice();
        let next = invoice.apply_all(&[
            InvoiceEdit::SetInvoiceNumber("INV-2".to_string()),
            InvoiceEdit::SetNotes(String::new()),
            InvoiceEdit::SetTerms("Net 15".to_string()),
            InvoiceEdit::SetFromCompany(PartyEdit::Name("Initech".to_string())),
            InvoiceEdit::SetToClient(PartyEdit::Address("1 Way\nCity".to_string())),
            InvoiceEdit::SetDueDate(NaiveDate::from_ymd_opt(2026, 12, 1).unwrap()),
        ]);

        assert_eq!(next.invoice_number(), "INV-2");
        assert_eq!(next.notes(), "");
        assert_eq!(next.terms(), "Net 15");
        assert_eq!(next.from_company().name, "Initech");
        assert_eq!(next.to_client().address, "1 Way\nCity");
        assert_eq!(next.totals(), invoice.totals());
    }

    #[test]
    fn guarded_item_edits_are_ignored() {
        let invoice = test_invoice().reduce(&InvoiceEdit::AddItem {
            id: test_item_id(2),
        });

        // Duplicate id.
        let duplicate = InvoiceEdit::AddItem {
            id: test_item_id(1),
        };
        assert_eq!(invoice.reduce(&duplicate), invoice);
        // Out of range.
        assert_eq!(invoice.reduce(&InvoiceEdit::RemoveItem { index: 5 }), invoice);
        assert_eq!(
            invoice.reduce(&InvoiceEdit::EditItem {
                index: 9,
                field: ItemEdit::Quantity(4.0),
            }),
            invoice
        );
        // Identity change.
        let impostor = LineItem::new(test_item_id(7), "x", 1.0, 1.0);
        let swap = InvoiceEdit::UpdateItem {
            index: 0,
            item: impostor,
        };
        assert_eq!(invoice.reduce(&swap), invoice);
    }

    #[test]
    fn removal_preserves_order_of_remaining_items() {
        let invoice = test_invoice().apply_all(&[
            InvoiceEdit::AddItem {
                id: test_item_id(2),
            },
            InvoiceEdit::AddItem {
                id: test_item_id(3),
            },
            InvoiceEdit::RemoveItem { index: 1 },
        ]);
        let ids: Vec<&str> = invoice.items().iter().map(|i| i.id().as_str()).collect();
        assert_eq!(ids, vec!["item-1", "item-3"]);
    }

    #[test]
    fn reduce_does_not_touch_the_input_snapshot() {
        let invoice = test_invoice();
        let before = invoice.clone();
        let _ = invoice.reduce(&InvoiceEdit::SetTaxRate(50.0));
        assert_eq!(invoice, before);
    }

    #[test]
    fn decoding_recomputes_derived_fields() {
        let json = r#"{
            "invoiceNumber": "INV-1",
            "date": "2026-10-19",
            "dueDate": "2026-11-18",
            "items": [
                {"id": "item-1", "description": "A", "quantity": 2, "unitPrice": 10, "amount": 999},
                {"id": "item-2", "description": "B", "quantity": 1, "unitPrice": 5}
            ],
            "taxRate": 10,
            "subtotal": 1,
            "taxAmount": 2,
            "total": 3
        }"#;
        let invoice: Invoice = serde_json::from_str(json).unwrap();

        assert_eq!(invoice.subtotal(), 25.0);
        assert_eq!(invoice.tax_amount(), 2.5);
        assert_eq!(invoice.total(), 27.5);
        assert_eq!(invoice.from_company(), &Party::default());
        assert!(invoice.is_consistent());
    }

    #[test]
    fn decoding_rejects_empty_or_duplicate_items() {
        let empty =
            r#"{"invoiceNumber":"X","date":"2026-10-19","dueDate":"2026-10-19","items":[]}"#;
        let err = serde_json::from_str::<Invoice>(empty).unwrap_err();
        assert!(err.to_string().contains("at least one line item"));

        let mut draft = test_invoice().to_draft();
        draft.items.push(draft.items[0].clone());
        match Invoice::from_draft(draft) {
            Err(DomainError::Validation(msg)) if msg.contains("duplicate line item id") => {}
            other => panic!("expected duplicate id rejection, got {other:?}"),
        }
    }

    #[test]
    fn snapshot_survives_a_json_trip() {
        let invoice = test_invoice().reduce(&InvoiceEdit::SetTaxRate(12.5));
        let json = serde_json::to_string(&invoice).unwrap();
        let decoded: Invoice = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, invoice);
    }

    #[test]
    fn overflowing_item_inputs_keep_snapshot_consistent() {
        let invoice = test_invoice().apply_all(&[
            InvoiceEdit::EditItem {
                index: 0,
                field: ItemEdit::QuantityText("1e300".to_string()),
            },
            InvoiceEdit::EditItem {
                index: 0,
                field: ItemEdit::UnitPriceText("1e300".to_string()),
            },
            InvoiceEdit::SetTaxRate(0.0),
        ]);

        assert_eq!(invoice.items()[0].quantity(), 1.0e300);
        assert_eq!(invoice.items()[0].amount(), 0.0);
        assert_eq!(invoice.subtotal(), 0.0);
        assert_eq!(invoice.tax_amount(), 0.0);
        assert_eq!(invoice.total(), 0.0);
        assert!(invoice.is_consistent());

        let value = serde_json::to_value(&invoice).unwrap();
        for key in ["subtotal", "taxAmount", "total"] {
            assert_eq!(value[key], 0.0, "{key}");
        }
        assert_eq!(value["items"][0]["amount"], 0.0);
    }

    #[test]
    fn overflowing_subtotal_degrades_to_zero() {
        let invoice = test_invoice().apply_all(&[
            InvoiceEdit::EditItem {
                index: 0,
                field: ItemEdit::Quantity(1.0e300),
            },
            InvoiceEdit::EditItem {
                index: 0,
                field: ItemEdit::UnitPrice(1.0e8),
            },
            InvoiceEdit::AddItem {
                id: test_item_id(2),
            },
            InvoiceEdit::EditItem {
                index: 1,
                field: ItemEdit::Quantity(1.0e300),
            },
            InvoiceEdit::EditItem {
                index: 1,
                field: ItemEdit::UnitPrice(1.0e8),
            },
        ]);

        assert_eq!(invoice.items()[1].amount(), 1.0e308);
        assert_eq!(invoice.subtotal(), 0.0);
        assert_eq!(invoice.total(), 0.0);
        assert!(invoice.is_consistent());
    }

    fn edit_strategy() -> impl Strategy<Value = InvoiceEdit> {
        prop_oneof![
            (0.0f64..50.0).prop_map(InvoiceEdit::SetTaxRate),
            "[0-9.a-z]{0,6}".prop_map(InvoiceEdit::SetTaxRateText),
            (0u32..1000).prop_map(|n| InvoiceEdit::AddItem {
                id: test_item_id(n),
            }),
            (0usize..8).prop_map(|index| InvoiceEdit::RemoveItem { index }),
            (0usize..8, 0.0f64..100.0).prop_map(|(index, q)| InvoiceEdit::EditItem {
                index,
                field: ItemEdit::Quantity(q),
            }),
            (0usize..8, 0.0f64..10_000.0).prop_map(|(index, p)| InvoiceEdit::EditItem {
                index,
                field: ItemEdit::UnitPrice(p),
            }),
            (0usize..8, "[0-9a-z]{0,5}").prop_map(|(index, t)| InvoiceEdit::EditItem {
                index,
                field: ItemEdit::UnitPriceText(t),
            }),
            (0usize..8, "1e30[0-8]").prop_map(|(index, t)| InvoiceEdit::EditItem {
                index,
                field: ItemEdit::QuantityText(t),
            }),
            (0usize..8, "1e30[0-8]").prop_map(|(index, t)| InvoiceEdit::EditItem {
                index,
                field: ItemEdit::UnitPriceText(t),
            }),
            "[A-Za-z ]{0,12}".prop_map(InvoiceEdit::SetNotes),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: every snapshot observed after any edit sequence is consistent.
        #[test]
        fn every_snapshot_is_consistent(edits in prop::collection::vec(edit_strategy(), 0..40)) {
            let mut invoice = test_invoice();
            for edit in &edits {
                invoice = invoice.reduce(edit);
                prop_assert!(invoice.is_consistent(), "inconsistent after {:?}", edit);
                prop_assert!(!invoice.items().is_empty());
                prop_assert!(invoice.total().is_finite());
            }
        }

        /// Property: reduce is deterministic (same snapshot + edit = same result).
        #[test]
        fn reduce_is_deterministic(edits in prop::collection::vec(edit_strategy(), 0..20)) {
            let start = test_invoice();
            prop_assert_eq!(start.apply_all(&edits), start.apply_all(&edits));
        }

        /// Property: item ids survive field edits unchanged.
        #[test]
        fn item_identity_is_stable(q in 0.0f64..100.0, p in 0.0f64..100.0) {
            let invoice = test_invoice().apply_all(&[
                InvoiceEdit::EditItem {
                    index: 0,
                    field: ItemEdit::Quantity(q),
                },
                InvoiceEdit::EditItem {
                    index: 0,
                    field: ItemEdit::UnitPrice(p),
                },
                InvoiceEdit::EditItem {
                    index: 0,
                    field: ItemEdit::Description("x".to_string()),
                },
            ]);
            prop_assert_eq!(invoice.items()[0].id(), &test_item_id(1));
        }
    }
}
