//! Lifecycle events for the SendInBlue plugin
//!
//! Events are published after each lifecycle milestone so the host can keep
//! an audit trail of admin actions:
//! - `PluginInstalled`: install finished
//! - `TenantCleaned`: one tenant's account and template metadata removed
//! - `PluginUninstalled`: uninstall finished

use crate::contract::UninstallReport;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Domain event types for the plugin lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum LifecycleEvent {
    /// Install completed
    PluginInstalled(PluginInstalledEvent),
    /// A tenant's artifacts were removed
    TenantCleaned(TenantCleanedEvent),
    /// Uninstall completed
    PluginUninstalled(PluginUninstalledEvent),
}

/// Event data for install
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginInstalledEvent {
    /// Whether the synchronization task was newly registered
    pub task_registered: bool,
    /// Locale resources written
    pub locale_resources: usize,
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

/// Event data for a cleaned tenant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenantCleanedEvent {
    /// Tenant ID
    pub tenant_id: Uuid,
    /// Deleted email account, if any
    pub email_account_id: Option<i64>,
    /// Template attributes deleted
    pub template_attributes_deleted: usize,
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

/// Event data for uninstall
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginUninstalledEvent {
    /// Summary of removed state
    pub report: UninstallReport,
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

/// Event publisher trait for lifecycle events
///
/// Publishing is best effort: the orchestrator logs failures and carries on.
pub trait EventPublisher: Send + Sync {
    /// Publish a lifecycle event
    fn publish(&self, event: LifecycleEvent) -> anyhow::Result<()>;
}

/// No-op event publisher for testing or when events are disabled
pub struct NoOpEventPublisher;

impl EventPublisher for NoOpEventPublisher {
    fn publish(&self, _event: LifecycleEvent) -> anyhow::Result<()> {
        Ok(())
    }
}

impl LifecycleEvent {
    /// Create a new PluginInstalled event
    pub fn installed(task_registered: bool, locale_resources: usize) -> Self {
        LifecycleEvent::PluginInstalled(PluginInstalledEvent {
            task_registered,
            locale_resources,
            timestamp: Utc::now(),
        })
    }

    /// Create a new TenantCleaned event
    pub fn tenant_cleaned(
        tenant_id: Uuid,
        email_account_id: Option<i64>,
        template_attributes_deleted: usize,
    ) -> Self {
        LifecycleEvent::TenantCleaned(TenantCleanedEvent {
            tenant_id,
            email_account_id,
            template_attributes_deleted,
            timestamp: Utc::now(),
        })
    }

    /// Create a new PluginUninstalled event
    pub fn uninstalled(report: UninstallReport) -> Self {
        LifecycleEvent::PluginUninstalled(PluginUninstalledEvent {
            report,
            timestamp: Utc::now(),
        })
    }
}
