// Leading-number extraction for display strings such as "2h 30m" or "1 piece, 23kg"

/// Parses the longest decimal prefix of `input`, ignoring leading whitespace.
///
/// Accepts an optional sign, digits with an optional fractional part and an
/// optional exponent. Everything after the prefix is ignored, so `"2h 30m"`
/// gives `2.0` and `"1.5 hrs"` gives `1.5`. Returns `None` when no digits lead
/// the string.
pub fn leading_number(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Only consume an exponent when it is complete, "2e" stays "2"
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Same as [`leading_number`] with the documented `0` fallback on failure.
pub fn leading_number_or_zero(input: &str) -> f64 {
    leading_number(input).unwrap_or(0.0)
}
