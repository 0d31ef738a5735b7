/******************************************************************************
   Author: Checkout Tech
   Email: dev@checkout.tech
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap_or_else(|e| panic!("invalid email regex: {e}"))
});

/// Loose e-mail shape check (`something@host.tld`, no whitespace)
///
/// The backend does the real validation; this only catches typos before a
/// round trip.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// Fails with [`AppError::InvalidInput`] when `value` is blank
pub fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Fails with [`AppError::InvalidInput`] when `email` is blank or malformed
pub fn require_email(field: &str, email: &str) -> Result<(), AppError> {
    require_non_empty(field, email)?;
    if !is_valid_email(email) {
        return Err(AppError::InvalidInput(format!(
            "{field} is not a valid e-mail address: {email}"
        )));
    }
    Ok(())
}

/// Fails with [`AppError::InvalidInput`] unless `price` is finite and non-negative
pub fn require_price(price: f64) -> Result<(), AppError> {
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::InvalidInput(format!(
            "price must be a non-negative number, got {price}"
        )));
    }
    Ok(())
}

/// Percent-encodes a single path segment (ids and uuids coming from callers)
pub fn encode_path_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}
