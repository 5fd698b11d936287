//! Validation of the configuration record and the locale catalog

use crate::contract::{
    ConfigurationRecord, LifecycleError, LocaleResource, CUSTOMER_EMAIL_PLACEHOLDER,
    TRACKING_ID_PLACEHOLDER,
};
use std::collections::HashSet;

/// Maximum length of an alphanumeric SMS sender name
pub const MAX_SMS_SENDER_NAME_LEN: usize = 11;

/// Validate a configuration record before it is written
pub fn validate_configuration(record: &ConfigurationRecord) -> Result<(), LifecycleError> {
    for placeholder in [TRACKING_ID_PLACEHOLDER, CUSTOMER_EMAIL_PLACEHOLDER] {
        if !record.tracking_script.contains(placeholder) {
            return Err(LifecycleError::Config {
                message: format!("tracking script must contain the {} placeholder", placeholder),
            });
        }
    }

    if let Some(name) = &record.sms_sender_name {
        if name.chars().count() > MAX_SMS_SENDER_NAME_LEN {
            return Err(LifecycleError::Config {
                message: format!(
                    "SMS sender name '{}' exceeds {} characters",
                    name, MAX_SMS_SENDER_NAME_LEN
                ),
            });
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(LifecycleError::Config {
                message: format!("SMS sender name '{}' must be alphanumeric", name),
            });
        }
    }

    if matches!(record.email_account_id, Some(id) if id <= 0) {
        return Err(LifecycleError::Config {
            message: "email account id must be positive".to_string(),
        });
    }

    Ok(())
}

/// Validate a locale catalog
///
/// Every key must be unique, live under `prefix` and carry non-empty text.
pub fn validate_locale_catalog(
    resources: &[LocaleResource],
    prefix: &str,
) -> Result<(), LifecycleError> {
    let mut seen = HashSet::with_capacity(resources.len());
    for resource in resources {
        if !resource.key.starts_with(prefix) {
            return Err(LifecycleError::InvariantViolation(format!(
                "locale key '{}' is outside the {} namespace",
                resource.key, prefix
            )));
        }
        if resource.text.trim().is_empty() {
            return Err(LifecycleError::InvariantViolation(format!(
                "locale key '{}' has no text",
                resource.key
            )));
        }
        if !seen.insert(resource.key) {
            return Err(LifecycleError::InvariantViolation(format!(
                "duplicate locale key '{}'",
                resource.key
            )));
        }
    }
    Ok(())
}
