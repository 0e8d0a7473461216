//! Share links for registered records

use placard_domain::RecordCode;

/// Build the shareable lookup URL carried in a QR payload.
///
/// The query key is `code`, the one canonical external name for the lookup
/// token (historical variants used `c` and `codigo` interchangeably).
///
/// # Examples
///
/// ```
/// use placard_domain::RecordCode;
/// use placard_registry::share_url;
///
/// let code = RecordCode::parse("a1b2c3d").unwrap();
/// assert_eq!(
///     share_url("https://example.com/ver", &code),
///     "https://example.com/ver?code=a1b2c3d"
/// );
/// ```
pub fn share_url(base: &str, code: &RecordCode) -> String {
    let base = base.trim_end_matches(['?', '/']);
    format!("{}?code={}", base, code)
}
