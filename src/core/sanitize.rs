use once_cell::sync::Lazy;
use regex::Regex;

static NON_NUMERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9.,]").expect("valid non-numeric regex"));
static LEADING_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)").expect("valid leading number regex")
});

/// Keeps only ASCII digits, `.` and `,`, then turns the first comma into a
/// decimal point. Further commas and repeated periods are left alone.
pub fn sanitize(raw: &str) -> String {
    NON_NUMERIC_RE.replace_all(raw, "").replacen(',', ".", 1)
}

/// Sanitizes and parses a field. See [`parse_sanitized`].
pub fn parse_amount(raw: &str) -> f64 {
    parse_sanitized(&sanitize(raw))
}

/// Reads the longest leading decimal of already sanitized text, so
/// `"12..3"` is 12 and `"1.200.5"` is 1.2. No leading digit means 0.
pub fn parse_sanitized(text: &str) -> f64 {
    LEADING_NUMBER_RE
        .find(text)
        .and_then(|found| found.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}
