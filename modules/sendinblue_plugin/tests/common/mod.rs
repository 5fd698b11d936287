//! Common test utilities: storefront fixture, seeding helpers, failing stores

#![allow(dead_code)]

use parking_lot::{Mutex, RwLock};
use sendinblue_plugin::contract::{
    EmailAccount, GenericAttribute, MessageTemplate, SettingScope, Tenant,
};
use sendinblue_plugin::domain::events::{EventPublisher, LifecycleEvent};
use sendinblue_plugin::domain::repository::{
    EmailAccountRegistry, GenericAttributeStore, TaskScheduler, TenantRegistry,
};
use sendinblue_plugin::domain::{HostStores, LifecycleOrchestrator, NoOpEventPublisher};
use sendinblue_plugin::infra::storage::InMemoryHost;
use sendinblue_plugin::{ScheduledTaskDescriptor, SendInBlueConfig};
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

pub const EMAIL_ACCOUNT_ID_KEY: &str = "SendInBlueSettings.EmailAccountId";

/// Three storefronts managed by one host
#[derive(Debug, Clone)]
pub struct TestStorefronts {
    pub electronics: Tenant,
    pub apparel: Tenant,
    pub outlet: Tenant,
}

impl TestStorefronts {
    /// Create the storefronts with fresh ids and register them with the host
    pub fn register(host: &InMemoryHost) -> Self {
        let storefronts = Self {
            electronics: tenant("Electronics"),
            apparel: tenant("Apparel"),
            outlet: tenant("Outlet"),
        };
        for t in storefronts.all() {
            host.tenants.add_tenant(t);
        }
        storefronts
    }

    pub fn all(&self) -> Vec<Tenant> {
        vec![
            self.electronics.clone(),
            self.apparel.clone(),
            self.outlet.clone(),
        ]
    }
}

pub fn tenant(name: &str) -> Tenant {
    Tenant {
        id: Uuid::new_v4(),
        name: name.to_string(),
    }
}

pub fn orchestrator(host: &InMemoryHost) -> LifecycleOrchestrator {
    orchestrator_with(host.stores(), Arc::new(NoOpEventPublisher))
}

pub fn orchestrator_with(
    stores: HostStores,
    publisher: Arc<dyn EventPublisher>,
) -> LifecycleOrchestrator {
    LifecycleOrchestrator::new(stores, SendInBlueConfig::default(), publisher).unwrap()
}

/// Add an SMTP account and point the scope's settings at it
pub fn configure_email_account(host: &InMemoryHost, scope: SettingScope, account_id: i64) {
    host.email_accounts.add_account(EmailAccount {
        id: account_id,
        email: format!("smtp{}@sendinblue.test", account_id),
        display_name: "SendInBlue SMTP".to_string(),
    });
    host.settings
        .set(scope, EMAIL_ACCOUNT_ID_KEY, serde_json::json!(account_id));
}

pub fn add_template(host: &InMemoryHost, tenant: &Tenant, id: i64, name: &str) -> MessageTemplate {
    let template = MessageTemplate {
        id,
        tenant_id: tenant.id,
        name: name.to_string(),
    };
    host.message_templates.add_template(template.clone());
    template
}

/// Attach an attribute to a message template
pub fn tag_template(host: &InMemoryHost, template: &MessageTemplate, key: &str, value: &str) {
    host.generic_attributes
        .save_attribute(template.id, "MessageTemplate", key, value);
}

/// Attribute keys still attached to a template
pub fn template_keys(host: &InMemoryHost, template: &MessageTemplate) -> Vec<String> {
    let mut keys: Vec<String> = host
        .generic_attributes
        .all()
        .into_iter()
        .filter(|a| a.entity_id == template.id && a.key_group == "MessageTemplate")
        .map(|a| a.key)
        .collect();
    keys.sort();
    keys
}

/// Publisher that keeps every event
#[derive(Default)]
pub struct RecordingPublisher {
    pub events: Mutex<Vec<LifecycleEvent>>,
}

impl EventPublisher for RecordingPublisher {
    fn publish(&self, event: LifecycleEvent) -> anyhow::Result<()> {
        self.events.lock().push(event);
        Ok(())
    }
}

/// Publisher whose sink is always down
pub struct BrokenPublisher;

impl EventPublisher for BrokenPublisher {
    fn publish(&self, _event: LifecycleEvent) -> anyhow::Result<()> {
        anyhow::bail!("event bus unreachable")
    }
}

/// Email account registry that fails lookups for selected ids
pub struct FlakyEmailAccounts {
    inner: Arc<dyn EmailAccountRegistry>,
    failing: RwLock<HashSet<i64>>,
}

impl FlakyEmailAccounts {
    pub fn new(inner: Arc<dyn EmailAccountRegistry>) -> Self {
        Self {
            inner,
            failing: RwLock::new(HashSet::new()),
        }
    }

    pub fn fail_on(&self, id: i64) {
        self.failing.write().insert(id);
    }

    pub fn recover(&self) {
        self.failing.write().clear();
    }
}

impl EmailAccountRegistry for FlakyEmailAccounts {
    fn get_by_id(&self, id: i64) -> anyhow::Result<Option<EmailAccount>> {
        if self.failing.read().contains(&id) {
            anyhow::bail!("email account store timed out reading account {}", id);
        }
        self.inner.get_by_id(id)
    }

    fn delete(&self, account: &EmailAccount) -> anyhow::Result<()> {
        self.inner.delete(account)
    }
}

/// Attribute store that records the size of every delete batch
pub struct CountingAttributes {
    inner: Arc<dyn GenericAttributeStore>,
    pub batches: Mutex<Vec<usize>>,
}

impl CountingAttributes {
    pub fn new(inner: Arc<dyn GenericAttributeStore>) -> Self {
        Self {
            inner,
            batches: Mutex::new(Vec::new()),
        }
    }
}

impl GenericAttributeStore for CountingAttributes {
    fn get_for_entity(&self, entity_id: i64, key_group: &str) -> anyhow::Result<Vec<GenericAttribute>> {
        self.inner.get_for_entity(entity_id, key_group)
    }

    fn delete_batch(&self, attributes: &[GenericAttribute]) -> anyhow::Result<()> {
        self.batches.lock().push(attributes.len());
        self.inner.delete_batch(attributes)
    }
}

/// Tenant registry that cannot be reached
pub struct UnavailableTenants;

impl TenantRegistry for UnavailableTenants {
    fn list_tenants(&self) -> anyhow::Result<Vec<Tenant>> {
        anyhow::bail!("tenant registry connection refused")
    }
}

/// Scheduler that cannot be reached
pub struct UnavailableScheduler;

impl TaskScheduler for UnavailableScheduler {
    fn find_by_type(&self, _type_id: &str) -> anyhow::Result<Option<ScheduledTaskDescriptor>> {
        anyhow::bail!("scheduler connection refused")
    }

    fn insert(&self, _task: &ScheduledTaskDescriptor) -> anyhow::Result<()> {
        anyhow::bail!("scheduler connection refused")
    }

    fn delete(&self, _task: &ScheduledTaskDescriptor) -> anyhow::Result<()> {
        anyhow::bail!("scheduler connection refused")
    }
}
