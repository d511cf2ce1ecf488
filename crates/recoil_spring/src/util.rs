//! Small numeric and string helpers shared across the workspace

/// Map `t` from `[0, 1]` to `[start, end]`
#[inline]
pub fn scale(t: f64, start: f64, end: f64) -> f64 {
    start + (end - start) * t
}

/// Round a number to a fixed count of decimal places.
///
/// Halves round toward positive infinity, so `-0.0005` at 3 decimals is `0`,
/// not `-0.001`. `f64::round` rounds halves away from zero instead.
#[inline]
pub fn to_fixed(value: f64, decimal: u32) -> f64 {
    let factor = 10f64.powi(decimal as i32);
    (value * factor + 0.5).floor() / factor
}

/// Split a string into its leading number and whatever trails it, e.g.
/// `"50px"` becomes `(50.0, "px")` and `"0turn"` becomes `(0.0, "turn")`.
///
/// Returns `None` when the string does not start with a number, mirroring
/// how a failed numeric parse demotes a value to an opaque token.
pub fn split_number(s: &str) -> Option<(f64, &str)> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut has_digits = i > digits_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > frac_start || has_digits {
            has_digits = has_digits || j > frac_start;
            i = j;
        }
    }

    if !has_digits {
        return None;
    }

    // Exponent is only consumed when digits actually follow it, otherwise
    // it belongs to the unit (e.g. "2em")
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    let value = s[..i].parse::<f64>().ok()?;
    Some((value, &s[i..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fixed_rounds_half_up() {
        assert_eq!(to_fixed(0.125, 2), 0.13);
        assert_eq!(to_fixed(1.0 / 3.0, 2), 0.33);
        assert_eq!(to_fixed(5.0, 0), 5.0);
    }

    #[test]
    fn test_to_fixed_rounds_halves_toward_positive_infinity() {
        // Negative undershoot values are reachable via the out-ease mirror
        assert_eq!(to_fixed(-0.0005, 3), 0.0);
        assert_eq!(to_fixed(0.0005, 3), 0.001);
        assert_eq!(to_fixed(-0.0015, 3), -0.001);
        assert_eq!(to_fixed(-0.125, 2), -0.12);
    }

    #[test]
    fn test_scale_is_linear() {
        assert_eq!(scale(0.0, 10.0, 20.0), 10.0);
        assert_eq!(scale(0.5, 10.0, 20.0), 15.0);
        assert_eq!(scale(1.0, 10.0, 20.0), 20.0);
    }

    #[test]
    fn test_split_number_strips_units() {
        assert_eq!(split_number("50px"), Some((50.0, "px")));
        assert_eq!(split_number("0turn"), Some((0.0, "turn")));
        assert_eq!(split_number("-1.5rem"), Some((-1.5, "rem")));
        assert_eq!(split_number("1e3ms"), Some((1000.0, "ms")));
        assert_eq!(split_number("12"), Some((12.0, "")));
    }

    #[test]
    fn test_split_number_rejects_tokens() {
        assert_eq!(split_number("inherit"), None);
        assert_eq!(split_number("solid"), None);
        assert_eq!(split_number(""), None);
        assert_eq!(split_number("-"), None);
    }

    #[test]
    fn test_split_number_keeps_exponent_looking_units() {
        // "em" must not be eaten as an exponent
        assert_eq!(split_number("2em"), Some((2.0, "em")));
    }
}
