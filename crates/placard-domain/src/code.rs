//! Record codes - short shareable lookup tokens

use std::fmt;

/// Alphabet codes are drawn from: lowercase letters and digits, chosen for
/// low ambiguity when read back from a printed QR label.
pub const CODE_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// Conventional generated code length. With a 36-character alphabet this
/// gives a key space of 36^7 (about 7.8e10).
pub const CODE_LENGTH: usize = 7;

/// A record's unique public identifier.
///
/// The code is the storage primary key and the token carried in share links
/// and QR payloads. It is immutable once assigned.
///
/// # Examples
///
/// ```
/// use placard_domain::RecordCode;
///
/// let code = RecordCode::parse("a1b2c3d").unwrap();
/// assert_eq!(code.as_str(), "a1b2c3d");
///
/// // Scanned input is trimmed and lowercased before validation
/// assert_eq!(RecordCode::parse(" A1B2C3D ").unwrap(), code);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordCode(String);

impl RecordCode {
    /// Maximum accepted length for an externally supplied code.
    const MAX_LENGTH: usize = 32;

    /// Parse a code from external input (query string, CLI argument, QR scan).
    ///
    /// Input is trimmed and lowercased, then every character must come from
    /// [`CODE_ALPHABET`]. Empty and oversized inputs are rejected.
    pub fn parse(s: &str) -> Result<Self, String> {
        let normalized = s.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err("code is empty".to_string());
        }
        if normalized.len() > Self::MAX_LENGTH {
            return Err(format!(
                "code too long: {} chars (max: {})",
                normalized.len(),
                Self::MAX_LENGTH
            ));
        }
        if let Some(bad) = normalized.chars().find(|c| !CODE_ALPHABET.contains(*c)) {
            return Err(format!("invalid character in code: {:?}", bad));
        }
        Ok(Self(normalized))
    }

    /// Borrow the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RecordCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
