//! Scalar coercion helpers backing [`Type::cast`](super::Type::cast).
//!
//! These are raw numeric/string conversions: strings are never parsed
//! semantically ("true" is not a boolean), numbers are read from the leading
//! numeric prefix of a string and anything unparseable becomes zero.

const WHITESPACE: [char; 6] = [' ', '\t', '\n', '\r', '\x0b', '\x0c'];

/// Renders a float the way it is stored in a string column.
pub(super) fn format_f64(value: f64) -> String {
    if value.is_nan() {
        "NAN".to_string()
    } else if value == f64::INFINITY {
        "INF".to_string()
    } else if value == f64::NEG_INFINITY {
        "-INF".to_string()
    } else {
        value.to_string()
    }
}

/// Truncates toward zero. Non-finite values have no integer meaning and map
/// to zero; out-of-range values saturate.
pub(super) fn truncate_f64(value: f64) -> i64 {
    if value.is_finite() {
        value as i64
    } else {
        0
    }
}

pub(super) fn parse_f64_prefix(src: &str) -> f64 {
    match numeric_prefix(src) {
        Some(prefix) => prefix.text.parse().unwrap_or(0.0),
        None => 0.0,
    }
}

pub(super) fn parse_i64_prefix(src: &str) -> i64 {
    let Some(prefix) = numeric_prefix(src) else {
        return 0;
    };

    if !prefix.integer {
        return truncate_f64(prefix.text.parse().unwrap_or(0.0));
    }

    match prefix.text.parse::<i64>() {
        Ok(value) => value,
        Err(_) if prefix.text.starts_with('-') => i64::MIN,
        Err(_) => i64::MAX,
    }
}

struct NumericPrefix<'a> {
    text: &'a str,

    /// False once a fraction or exponent is part of the prefix.
    integer: bool,
}

/// Finds the longest leading `[sign] digits [. digits] [e [sign] digits]`
/// run after leading whitespace.
fn numeric_prefix(src: &str) -> Option<NumericPrefix<'_>> {
    let src = src.trim_start_matches(WHITESPACE);
    let bytes = src.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_start = end;
    end = digits_from(end);
    let int_digits = end - int_start;

    let mut integer = true;
    let mut frac_digits = 0;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        frac_digits = frac_end - end - 1;
        if int_digits + frac_digits > 0 {
            end = frac_end;
            integer = false;
        }
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
            integer = false;
        }
    }

    Some(NumericPrefix {
        text: &src[..end],
        integer,
    })
}
