//! Seeding configuration for new invoices.

use serde::{Deserialize, Serialize};

/// Knobs applied when a new invoice is seeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSettings {
    /// Leading segment of generated invoice numbers (`INV-YYMMDD-NNN`).
    pub number_prefix: String,
    /// Days between the invoice date and its due date.
    pub payment_terms_days: u32,
    /// Tax rate (percent) on a fresh invoice.
    pub default_tax_rate: f64,
}

impl Default for InvoiceSettings {
    fn default() -> Self {
        Self {
            number_prefix: "INV".to_string(),
            payment_terms_days: 30,
            default_tax_rate: 8.25,
        }
    }
}

impl InvoiceSettings {
    pub const ENV_NUMBER_PREFIX: &'static str = "INVOICER_NUMBER_PREFIX";
    pub const ENV_PAYMENT_TERMS_DAYS: &'static str = "INVOICER_PAYMENT_TERMS_DAYS";
    pub const ENV_DEFAULT_TAX_RATE: &'static str = "INVOICER_DEFAULT_TAX_RATE";

    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; unset keys keep their defaults.
    ///
    /// Values that fail to parse are logged and replaced by the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let number_prefix = match lookup(Self::ENV_NUMBER_PREFIX) {
            Some(v) if !v.trim().is_empty() => v.trim().to_string(),
            Some(_) => {
                tracing::warn!(
                    key = Self::ENV_NUMBER_PREFIX,
                    "empty invoice number prefix; using default"
                );
                defaults.number_prefix
            }
            None => defaults.number_prefix,
        };

        let payment_terms_days = match lookup(Self::ENV_PAYMENT_TERMS_DAYS) {
            Some(v) => v.trim().parse::<u32>().unwrap_or_else(|_| {
                tracing::warn!(
                    key = Self::ENV_PAYMENT_TERMS_DAYS,
                    value = %v,
                    "invalid payment terms; using default"
                );
                defaults.payment_terms_days
            }),
            None => defaults.payment_terms_days,
        };

        let default_tax_rate = match lookup(Self::ENV_DEFAULT_TAX_RATE) {
            Some(v) => match v.trim().parse::<f64>() {
                Ok(rate) if rate.is_finite() && rate >= 0.0 => rate,
                _ => {
                    tracing::warn!(
                        key = Self::ENV_DEFAULT_TAX_RATE,
                        value = %v,
                        "invalid default tax rate; using default"
                    );
                    defaults.default_tax_rate
                }
            },
            None => defaults.default_tax_rate,
        };

        Self {
            number_prefix,
            payment_terms_days,
            default_tax_rate,
        }
    }
}
