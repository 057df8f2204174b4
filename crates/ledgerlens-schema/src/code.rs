//! Security-code normalization.

/// Width codes are zero-padded to.
const CODE_WIDTH: usize = 6;

/// Normalizes a raw security-code value to its canonical form.
///
/// Spreadsheet cells frequently deliver codes as floats (`"600519.0"`) or
/// with stripped leading zeros (`"2776"` for `"002776"`). Normalization
/// trims whitespace, removes a trailing all-zero fractional artifact, and
/// zero-pads all-digit codes to six characters. Non-numeric text is
/// returned trimmed but otherwise unchanged.
///
/// The function is idempotent: applying it to its own output is a no-op,
/// which lets the merge step re-apply it safely.
///
/// # Examples
///
/// ```
/// use ledgerlens_schema::normalize_code;
///
/// assert_eq!(normalize_code("600519.0"), "600519");
/// assert_eq!(normalize_code(" 2776 "), "002776");
/// assert_eq!(normalize_code("AAPL"), "AAPL");
/// ```
#[must_use]
pub fn normalize_code(raw: &str) -> String {
    let trimmed = raw.trim();
    let digits = strip_float_artifact(trimmed);

    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        format!("{:0>width$}", digits, width = CODE_WIDTH)
    } else {
        trimmed.to_string()
    }
}

/// Strips a trailing `.0…` fractional artifact from an integer code.
///
/// Only removes the fraction when the integer part is all digits and the
/// fraction is all zeros; `"600519.5"` is a real value, not an artifact.
fn strip_float_artifact(value: &str) -> &str {
    if let Some((integer, fraction)) = value.split_once('.') {
        let artifact = !integer.is_empty()
            && integer.bytes().all(|b| b.is_ascii_digit())
            && !fraction.is_empty()
            && fraction.bytes().all(|b| b == b'0');
        if artifact {
            return integer;
        }
    }
    value
}
