//! Startup configuration validation with detailed error reporting.
//!
//! The [`validate`] function checks the title identifier and the upstream
//! origin, collecting every problem as a [`ValidationError`] with an
//! optional suggestion so the operator sees all of them at once.

use url::Url;

use crate::error::ValidationError;

/// Validate a PlayFab title identifier. Returns `Ok(())` or a human-readable error.
///
/// The identifier becomes the leftmost DNS label of the upstream host.
pub fn validate_title_id(title_id: &str) -> Result<(), String> {
    if title_id.is_empty() {
        return Err("title id cannot be empty".into());
    }
    if !title_id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(format!(
            "'{title_id}' must contain only ASCII letters and digits"
        ));
    }
    Ok(())
}

/// Validate the upstream origin. Returns the parsed URL or a human-readable error.
pub fn validate_origin(origin: &str) -> Result<Url, String> {
    let parsed = Url::parse(origin).map_err(|_| format!("'{origin}' is not a valid URL"))?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(format!(
            "unsupported scheme '{scheme}' (expected http or https)"
        ));
    }
    if parsed.path() != "/" || parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(format!(
            "'{origin}' must be a bare origin without path, query or fragment"
        ));
    }
    Ok(parsed)
}

pub fn validate(title_id: &str, origin: &str) -> Result<Url, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(msg) = validate_title_id(title_id) {
        errors.push(ValidationError {
            field: "title_id".into(),
            message: msg,
            suggestion: title_id
                .is_empty()
                .then(|| "set --title-id or PLAYFAB_TITLE_ID".to_string()),
        });
        // The default origin embeds the title id, so its errors would only repeat this one.
        return Err(errors);
    }

    match validate_origin(origin) {
        Ok(url) => Ok(url),
        Err(msg) => {
            errors.push(ValidationError {
                field: "upstream_origin".into(),
                message: msg,
                suggestion: None,
            });
            Err(errors)
        }
    }
}
