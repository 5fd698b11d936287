//! Plugin settings: defaults on install, tenant-aware reads, namespace delete

use crate::contract::{
    ConfigurationRecord, LifecycleError, SettingScope, SettingsNamespace, SETTINGS_NAMESPACE,
};
use super::repository::SettingsStore;
use super::validation::validate_configuration;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;

/// Setting values by scope, then by fully qualified key
pub type SettingsMap = BTreeMap<SettingScope, BTreeMap<String, Value>>;

/// Resolve a key for a tenant (or the shared scope when `tenant_id` is None)
///
/// A tenant override always wins; the shared value is only consulted when
/// the tenant has no entry for the key and `fallback_to_shared` is set.
pub fn resolve<'a>(
    map: &'a SettingsMap,
    key: &str,
    tenant_id: Option<Uuid>,
    fallback_to_shared: bool,
) -> Option<&'a Value> {
    let scope = tenant_id.map_or(SettingScope::Shared, SettingScope::Tenant);
    if let Some(value) = map.get(&scope).and_then(|values| values.get(key)) {
        return Some(value);
    }
    if fallback_to_shared && scope != SettingScope::Shared {
        return map
            .get(&SettingScope::Shared)
            .and_then(|values| values.get(key));
    }
    None
}

/// Fully qualified key of a configuration record field
pub fn setting_key(field: &str) -> String {
    format!("{}.{}", SETTINGS_NAMESPACE, field)
}

/// Flatten a record into `(key, value)` setting entries
pub fn record_entries(record: &ConfigurationRecord) -> Result<Vec<(String, Value)>, LifecycleError> {
    match serde_json::to_value(record) {
        Ok(Value::Object(fields)) => Ok(fields
            .into_iter()
            .map(|(field, value)| (setting_key(&field), value))
            .collect()),
        Ok(other) => Err(LifecycleError::InvariantViolation(format!(
            "configuration record serialized to a non-object value: {}",
            other
        ))),
        Err(e) => Err(LifecycleError::InvariantViolation(format!(
            "configuration record is not serializable: {}",
            e
        ))),
    }
}

/// Every key the plugin may write, derived from the record's fields
pub fn settings_namespace() -> Result<SettingsNamespace, LifecycleError> {
    let keys = record_entries(&ConfigurationRecord::default())?
        .into_iter()
        .map(|(key, _)| key)
        .collect();
    Ok(SettingsNamespace {
        tag: SETTINGS_NAMESPACE.to_string(),
        keys,
    })
}

/// Writes, reads and removes the plugin's configuration record
#[derive(Clone)]
pub struct SettingsProvisioner {
    store: Arc<dyn SettingsStore>,
}

impl SettingsProvisioner {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    /// Write the record at shared scope, overwriting existing values
    pub fn apply_defaults(&self, record: &ConfigurationRecord) -> Result<usize, LifecycleError> {
        validate_configuration(record)?;
        let entries = record_entries(record)?;
        self.store
            .save(&entries, SettingScope::Shared)
            .map_err(|e| LifecycleError::store("settings", e))?;
        tracing::debug!(keys = entries.len(), "Default SendInBlue settings saved");
        Ok(entries.len())
    }

    /// Tenant value of a record field, falling back to the shared value
    pub fn resolve(&self, tenant_id: Uuid, field: &str) -> Result<Option<Value>, LifecycleError> {
        self.store
            .get(&setting_key(field), Some(tenant_id), true)
            .map_err(|e| LifecycleError::store("settings", e))
    }

    /// Value of a record field stored at shared scope
    pub fn shared(&self, field: &str) -> Result<Option<Value>, LifecycleError> {
        self.store
            .get(&setting_key(field), None, false)
            .map_err(|e| LifecycleError::store("settings", e))
    }

    /// Effective record for a tenant (or the shared record)
    ///
    /// Fields without a stored value keep their defaults.
    pub fn load(&self, tenant_id: Option<Uuid>) -> Result<ConfigurationRecord, LifecycleError> {
        let prefix = format!("{}.", SETTINGS_NAMESPACE);
        let mut fields = Map::new();
        for key in settings_namespace()?.keys {
            let value = self
                .store
                .get(&key, tenant_id, true)
                .map_err(|e| LifecycleError::store("settings", e))?;
            if let (Some(value), Some(field)) = (value, key.strip_prefix(&prefix)) {
                fields.insert(field.to_string(), value);
            }
        }
        serde_json::from_value(Value::Object(fields)).map_err(|e| LifecycleError::Config {
            message: format!("stored SendInBlue settings are malformed: {}", e),
        })
    }

    /// Remove every plugin key, shared and per tenant
    pub fn delete_all(&self) -> Result<usize, LifecycleError> {
        let namespace = settings_namespace()?;
        let prefix = format!("{}.", namespace.tag);
        if let Some(stray) = namespace.keys.iter().find(|key| !key.starts_with(&prefix)) {
            return Err(LifecycleError::InvariantViolation(format!(
                "setting key '{}' is outside the {} namespace",
                stray, namespace.tag
            )));
        }
        let removed = self
            .store
            .delete_namespace(&namespace)
            .map_err(|e| LifecycleError::store("settings", e))?;
        tracing::debug!(removed, "SendInBlue settings deleted");
        Ok(removed)
    }
}
