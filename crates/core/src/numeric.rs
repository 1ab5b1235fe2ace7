//! Numeric coercion for form input.
//!
//! Malformed numeric entry degrades to zero instead of blocking an edit:
//! nothing in here returns an error.

/// Parse the leading decimal literal of `text`, or return `0.0`.
///
/// Leading whitespace is skipped and trailing garbage is ignored, so `"12abc"`
/// reads as `12`. Empty, unparsable and non-finite input yields `0.0`, and
/// negative zero is normalized to `0.0`.
pub fn coerce_number(text: &str) -> f64 {
    let s = text.trim_start();
    let end = decimal_prefix_len(s.as_bytes());
    if end == 0 {
        return 0.0;
    }

    match s[..end].parse::<f64>() {
        Ok(v) if v.is_finite() && v != 0.0 => v,
        _ => 0.0,
    }
}

/// Clamp a numeric edit to the `>= 0` bounds of quantities, prices and rates.
///
/// NaN, infinities and negative values become `0.0`.
pub fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Keep a computed value if it is finite, otherwise `0.0`.
///
/// Derived amounts and totals go through this so an overflowing product or
/// sum degrades to zero instead of leaking `inf`/`NaN` into a snapshot.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Length of the longest prefix shaped like `[+-] digits [. digits] [e [+-] digits]`.
///
/// Returns 0 when the prefix carries no digits at all.
fn decimal_prefix_len(bytes: &[u8]) -> usize {
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        let frac_digits = frac_end - (end + 1);
        if mantissa_digits > 0 || frac_digits > 0 {
            mantissa_digits += frac_digits;
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    end
}
