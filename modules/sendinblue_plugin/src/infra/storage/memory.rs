//! In-memory host stores
//!
//! Reference implementations of the host store traits, backed by
//! `parking_lot` locks. Used by the test suite and for dry runs against a
//! snapshot of host state.

use crate::contract::{
    EmailAccount, GenericAttribute, MessageTemplate, ScheduledTaskDescriptor, SettingScope,
    SettingsNamespace, Tenant,
};
use crate::domain::repository::{
    EmailAccountRegistry, GenericAttributeStore, HostStores, LocalizationCatalogStore,
    MessageTemplateRegistry, SettingsStore, TaskScheduler, TenantRegistry,
};
use crate::domain::settings::{resolve, SettingsMap};
use anyhow::Result;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;

/// Tenants known to the host
#[derive(Default)]
pub struct InMemoryTenantRegistry {
    tenants: RwLock<Vec<Tenant>>,
}

impl InMemoryTenantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_tenant(&self, tenant: Tenant) {
        self.tenants.write().push(tenant);
    }
}

impl TenantRegistry for InMemoryTenantRegistry {
    fn list_tenants(&self) -> Result<Vec<Tenant>> {
        Ok(self.tenants.read().clone())
    }
}

/// Two-level settings map: scope, then key
#[derive(Default)]
pub struct InMemorySettingsStore {
    values: RwLock<SettingsMap>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a single value, as the admin configuration page would
    pub fn set(&self, scope: SettingScope, key: &str, value: Value) {
        self.values
            .write()
            .entry(scope)
            .or_default()
            .insert(key.to_string(), value);
    }

    /// Value stored exactly under `scope`, without fallback
    pub fn value(&self, scope: SettingScope, key: &str) -> Option<Value> {
        self.values
            .read()
            .get(&scope)
            .and_then(|values| values.get(key))
            .cloned()
    }

    /// Number of stored values across all scopes
    pub fn len(&self) -> usize {
        self.values.read().values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of values whose key starts with `prefix`, across all scopes
    pub fn count_with_prefix(&self, prefix: &str) -> usize {
        self.values
            .read()
            .values()
            .flat_map(|values| values.keys())
            .filter(|key| key.starts_with(prefix))
            .count()
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn save(&self, entries: &[(String, Value)], scope: SettingScope) -> Result<()> {
        let mut values = self.values.write();
        let scoped = values.entry(scope).or_default();
        for (key, value) in entries {
            scoped.insert(key.clone(), value.clone());
        }
        Ok(())
    }

    fn get(
        &self,
        key: &str,
        tenant_id: Option<Uuid>,
        fallback_to_shared: bool,
    ) -> Result<Option<Value>> {
        Ok(resolve(&self.values.read(), key, tenant_id, fallback_to_shared).cloned())
    }

    fn delete_namespace(&self, namespace: &SettingsNamespace) -> Result<usize> {
        let mut values = self.values.write();
        let mut removed = 0;
        for scoped in values.values_mut() {
            for key in &namespace.keys {
                if scoped.remove(key).is_some() {
                    removed += 1;
                }
            }
        }
        values.retain(|_, scoped| !scoped.is_empty());
        Ok(removed)
    }
}

/// Scheduled task table
#[derive(Default)]
pub struct InMemoryTaskScheduler {
    tasks: RwLock<Vec<ScheduledTaskDescriptor>>,
}

impl InMemoryTaskScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> Vec<ScheduledTaskDescriptor> {
        self.tasks.read().clone()
    }
}

impl TaskScheduler for InMemoryTaskScheduler {
    fn find_by_type(&self, type_id: &str) -> Result<Option<ScheduledTaskDescriptor>> {
        Ok(self
            .tasks
            .read()
            .iter()
            .find(|task| task.type_id == type_id)
            .cloned())
    }

    fn insert(&self, task: &ScheduledTaskDescriptor) -> Result<()> {
        self.tasks.write().push(task.clone());
        Ok(())
    }

    fn delete(&self, task: &ScheduledTaskDescriptor) -> Result<()> {
        self.tasks.write().retain(|existing| existing != task);
        Ok(())
    }
}

/// Email accounts by id
#[derive(Default)]
pub struct InMemoryEmailAccountRegistry {
    accounts: RwLock<BTreeMap<i64, EmailAccount>>,
}

impl InMemoryEmailAccountRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_account(&self, account: EmailAccount) {
        self.accounts.write().insert(account.id, account);
    }

    pub fn contains(&self, id: i64) -> bool {
        self.accounts.read().contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.accounts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EmailAccountRegistry for InMemoryEmailAccountRegistry {
    fn get_by_id(&self, id: i64) -> Result<Option<EmailAccount>> {
        Ok(self.accounts.read().get(&id).cloned())
    }

    fn delete(&self, account: &EmailAccount) -> Result<()> {
        self.accounts.write().remove(&account.id);
        Ok(())
    }
}

/// Message templates of every tenant
#[derive(Default)]
pub struct InMemoryMessageTemplateRegistry {
    templates: RwLock<Vec<MessageTemplate>>,
}

impl InMemoryMessageTemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_template(&self, template: MessageTemplate) {
        self.templates.write().push(template);
    }
}

impl MessageTemplateRegistry for InMemoryMessageTemplateRegistry {
    fn list_for_tenant(&self, tenant_id: Uuid) -> Result<Vec<MessageTemplate>> {
        Ok(self
            .templates
            .read()
            .iter()
            .filter(|template| template.tenant_id == tenant_id)
            .cloned()
            .collect())
    }
}

/// Generic attributes of every entity
#[derive(Default)]
pub struct InMemoryGenericAttributeStore {
    attributes: RwLock<Vec<GenericAttribute>>,
}

impl InMemoryGenericAttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an attribute to an entity; returns the new attribute
    pub fn save_attribute(
        &self,
        entity_id: i64,
        key_group: &str,
        key: &str,
        value: &str,
    ) -> GenericAttribute {
        let mut attributes = self.attributes.write();
        let id = attributes.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let attribute = GenericAttribute {
            id,
            entity_id,
            key_group: key_group.to_string(),
            key: key.to_string(),
            value: value.to_string(),
        };
        attributes.push(attribute.clone());
        attribute
    }

    pub fn all(&self) -> Vec<GenericAttribute> {
        self.attributes.read().clone()
    }
}

impl GenericAttributeStore for InMemoryGenericAttributeStore {
    fn get_for_entity(&self, entity_id: i64, key_group: &str) -> Result<Vec<GenericAttribute>> {
        Ok(self
            .attributes
            .read()
            .iter()
            .filter(|a| a.entity_id == entity_id && a.key_group == key_group)
            .cloned()
            .collect())
    }

    fn delete_batch(&self, attributes: &[GenericAttribute]) -> Result<()> {
        self.attributes
            .write()
            .retain(|existing| !attributes.iter().any(|a| a.id == existing.id));
        Ok(())
    }
}

/// Locale resources plus a journal of every upsert
#[derive(Default)]
pub struct InMemoryLocalizationStore {
    resources: RwLock<BTreeMap<String, String>>,
    upserts: RwLock<Vec<String>>,
}

impl InMemoryLocalizationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, key: &str) -> Option<String> {
        self.resources.read().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.resources.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keys in upsert order, one entry per call
    pub fn upsert_journal(&self) -> Vec<String> {
        self.upserts.read().clone()
    }
}

impl LocalizationCatalogStore for InMemoryLocalizationStore {
    fn upsert(&self, key: &str, text: &str) -> Result<()> {
        self.resources
            .write()
            .insert(key.to_string(), text.to_string());
        self.upserts.write().push(key.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.resources.write().remove(key);
        Ok(())
    }
}

/// Every in-memory store, with typed handles for inspection
#[derive(Clone, Default)]
pub struct InMemoryHost {
    pub tenants: Arc<InMemoryTenantRegistry>,
    pub settings: Arc<InMemorySettingsStore>,
    pub scheduler: Arc<InMemoryTaskScheduler>,
    pub email_accounts: Arc<InMemoryEmailAccountRegistry>,
    pub message_templates: Arc<InMemoryMessageTemplateRegistry>,
    pub generic_attributes: Arc<InMemoryGenericAttributeStore>,
    pub localization: Arc<InMemoryLocalizationStore>,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trait-object handles for the orchestrator
    pub fn stores(&self) -> HostStores {
        HostStores {
            tenants: self.tenants.clone(),
            settings: self.settings.clone(),
            scheduler: self.scheduler.clone(),
            email_accounts: self.email_accounts.clone(),
            message_templates: self.message_templates.clone(),
            generic_attributes: self.generic_attributes.clone(),
            localization: self.localization.clone(),
        }
    }
}
