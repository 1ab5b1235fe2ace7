//! Invoice number generation: `<PREFIX>-<YYMMDD>-<NNN>`.

use chrono::NaiveDate;
use rand::Rng;

/// Upper bound (exclusive) of the random suffix.
const SUFFIX_RANGE: u16 = 1000;

/// Build an invoice number from its parts; `suffix` is reduced modulo 1000
/// and zero-padded to three digits.
pub fn compose_invoice_number(prefix: &str, date: NaiveDate, suffix: u16) -> String {
    format!(
        "{prefix}-{}-{:03}",
        date.format("%y%m%d"),
        suffix % SUFFIX_RANGE
    )
}

/// Generate a number for an invoice issued on `date`, with a random suffix.
pub fn generate_invoice_number(prefix: &str, date: NaiveDate) -> String {
    let suffix = rand::thread_rng().gen_range(0..SUFFIX_RANGE);
    compose_invoice_number(prefix, date, suffix)
}
