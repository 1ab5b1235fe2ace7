use serde::{Deserialize, Serialize};

use invoicer_core::ValueObject;

use crate::edit::PartyEdit;

/// The issuing company ("from") or the billed client ("to").
///
/// Every field is free text; empty strings are valid. `address` may contain
/// embedded line breaks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Party {
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}

impl ValueObject for Party {}

impl Party {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Address split at its embedded line breaks.
    pub fn address_lines(&self) -> impl Iterator<Item = &str> {
        self.address.lines()
    }

    pub fn edited(&self, edit: &PartyEdit) -> Self {
        let mut party = self.clone();
        match edit {
            PartyEdit::Name(v) => party.name = v.clone(),
            PartyEdit::Address(v) => party.address = v.clone(),
            PartyEdit::Email(v) => party.email = v.clone(),
            PartyEdit::Phone(v) => party.phone = v.clone(),
            PartyEdit::Replace(p) => party = p.clone(),
        }
        party
    }
}
