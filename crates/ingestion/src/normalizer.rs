//! Numeric normalization of published calendar values.
//!
//! Calendar feeds publish figures as free text: `"1,5%"`, `"250K"`,
//! `"n/a"`, `"-"`. [`normalize`] turns such a token into an `f64`, or `None`
//! when the value is unavailable. It never fails; malformed and missing
//! values both collapse to `None`.
//!
//! Rules, applied in order:
//! 1. Trim surrounding whitespace.
//! 2. Drop a leading `.` character.
//! 3. Empty, `-`, `n/a` and `nan` (any case) are unavailable.
//! 4. `,` becomes `.`.
//! 5. `%` is removed.
//! 6. `K`, `M`, `B` are replaced by `000`, `000000`, `000000000`.
//! 7. Parse as a float, ignoring surrounding whitespace and `_` digit
//!    separators; failure (or NaN) is unavailable.
//!
//! Rule 2 makes `".75"` parse as `75.0`, not `0.75`.
//! Rule 6 is textual: `"3.2M"` becomes `"3.2000000"`, i.e. `3.2`.

/// Tokens that mean "no value published".
const PLACEHOLDERS: [&str; 3] = ["-", "n/a", "nan"];

/// Normalize a raw textual value.
pub fn normalize(raw: &str) -> Option<f64> {
    let mut s = raw.trim();
    if let Some(rest) = s.strip_prefix('.') {
        s = rest;
    }

    if is_placeholder(s) {
        return None;
    }

    let cleaned = s
        .replace(',', ".")
        .replace('%', "")
        .replace('K', "000")
        .replace('M', "000000")
        .replace('B', "000000000");

    parse_float(cleaned.trim())
}

/// Parse a float the way published sheets were read: `_` is accepted only
/// between two digits.
fn parse_float(s: &str) -> Option<f64> {
    let parsed = if s.contains('_') {
        let bytes = s.as_bytes();
        let separators_ok = bytes.iter().enumerate().all(|(i, &b)| {
            b != b'_'
                || (i > 0
                    && bytes[i - 1].is_ascii_digit()
                    && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
        });
        if !separators_ok {
            return None;
        }
        s.replace('_', "").parse::<f64>()
    } else {
        s.parse::<f64>()
    };

    match parsed {
        Ok(v) if !v.is_nan() => Some(v),
        _ => None,
    }
}

/// Normalize a possibly missing cell. A missing cell is unavailable.
pub fn normalize_opt(raw: Option<&str>) -> Option<f64> {
    raw.and_then(normalize)
}

/// True for empty text and the known placeholder tokens.
fn is_placeholder(s: &str) -> bool {
    s.is_empty() || PLACEHOLDERS.iter().any(|p| s.eq_ignore_ascii_case(p))
}
