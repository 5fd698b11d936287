//! Host store traits consumed by the plugin
//!
//! These traits define the host-side data access the plugin relies on.
//! In-memory implementations are in infra/storage/memory.rs

use crate::contract::{
    EmailAccount, GenericAttribute, MessageTemplate, ScheduledTaskDescriptor, SettingScope,
    SettingsNamespace, Tenant,
};
use anyhow::Result;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

/// Registry of tenants (stores) managed by the host
pub trait TenantRegistry: Send + Sync {
    /// List every tenant
    fn list_tenants(&self) -> Result<Vec<Tenant>>;
}

/// Host settings store
pub trait SettingsStore: Send + Sync {
    /// Create or overwrite setting values under a scope
    fn save(&self, entries: &[(String, Value)], scope: SettingScope) -> Result<()>;

    /// Read a setting value
    ///
    /// With `fallback_to_shared`, a tenant without an override for `key`
    /// gets the shared value.
    fn get(&self, key: &str, tenant_id: Option<Uuid>, fallback_to_shared: bool)
        -> Result<Option<Value>>;

    /// Delete every enumerated key of a namespace in every scope
    ///
    /// Returns the number of values removed.
    fn delete_namespace(&self, namespace: &SettingsNamespace) -> Result<usize>;
}

/// Host task scheduler
pub trait TaskScheduler: Send + Sync {
    /// Find a task by type identifier
    fn find_by_type(&self, type_id: &str) -> Result<Option<ScheduledTaskDescriptor>>;

    /// Register a task
    fn insert(&self, task: &ScheduledTaskDescriptor) -> Result<()>;

    /// Remove a task
    fn delete(&self, task: &ScheduledTaskDescriptor) -> Result<()>;
}

/// Host email account registry
pub trait EmailAccountRegistry: Send + Sync {
    /// Find an account by id
    fn get_by_id(&self, id: i64) -> Result<Option<EmailAccount>>;

    /// Delete an account
    fn delete(&self, account: &EmailAccount) -> Result<()>;
}

/// Host message template registry
pub trait MessageTemplateRegistry: Send + Sync {
    /// List every template of a tenant
    fn list_for_tenant(&self, tenant_id: Uuid) -> Result<Vec<MessageTemplate>>;
}

/// Host generic attribute store
pub trait GenericAttributeStore: Send + Sync {
    /// All attributes attached to an entity
    fn get_for_entity(&self, entity_id: i64, key_group: &str) -> Result<Vec<GenericAttribute>>;

    /// Delete attributes in one batch
    fn delete_batch(&self, attributes: &[GenericAttribute]) -> Result<()>;
}

/// Host localization store
pub trait LocalizationCatalogStore: Send + Sync {
    /// Create or overwrite a resource
    fn upsert(&self, key: &str, text: &str) -> Result<()>;

    /// Delete a resource; missing keys are ignored
    fn delete(&self, key: &str) -> Result<()>;
}

/// Host stores injected into the plugin
#[derive(Clone)]
pub struct HostStores {
    pub tenants: Arc<dyn TenantRegistry>,
    pub settings: Arc<dyn SettingsStore>,
    pub scheduler: Arc<dyn TaskScheduler>,
    pub email_accounts: Arc<dyn EmailAccountRegistry>,
    pub message_templates: Arc<dyn MessageTemplateRegistry>,
    pub generic_attributes: Arc<dyn GenericAttributeStore>,
    pub localization: Arc<dyn LocalizationCatalogStore>,
}
