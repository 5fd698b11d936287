//! Domain service - install/uninstall orchestration

use crate::config::SendInBlueConfig;
use crate::contract::{
    ConfigurationRecord, LifecycleError, Tenant, TenantFailure, UninstallReport,
};
use super::email_accounts::TenantEmailAccountSweeper;
use super::events::{EventPublisher, LifecycleEvent};
use super::locales::LocaleResourceCatalog;
use super::repository::{HostStores, TenantRegistry};
use super::schedule::ScheduledSyncTaskManager;
use super::settings::SettingsProvisioner;
use super::template_attributes::TemplateAttributeCleaner;
use std::sync::Arc;

/// Brings host state into and out of the provisioned configuration
///
/// Holds no state of its own; every side effect goes through the host stores.
pub struct LifecycleOrchestrator {
    config: SendInBlueConfig,
    tenants: Arc<dyn TenantRegistry>,
    settings: SettingsProvisioner,
    tasks: ScheduledSyncTaskManager,
    email_accounts: TenantEmailAccountSweeper,
    template_attributes: TemplateAttributeCleaner,
    locales: LocaleResourceCatalog,
    event_publisher: Arc<dyn EventPublisher>,
}

impl LifecycleOrchestrator {
    /// Create a new orchestrator over the host's stores
    pub fn new(
        stores: HostStores,
        config: SendInBlueConfig,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Result<Self, LifecycleError> {
        config.validate()?;
        let settings = SettingsProvisioner::new(stores.settings);
        Ok(Self {
            config,
            tenants: stores.tenants,
            tasks: ScheduledSyncTaskManager::new(stores.scheduler),
            email_accounts: TenantEmailAccountSweeper::new(settings.clone(), stores.email_accounts),
            template_attributes: TemplateAttributeCleaner::new(
                stores.message_templates,
                stores.generic_attributes,
            ),
            locales: LocaleResourceCatalog::new(stores.localization),
            settings,
            event_publisher,
        })
    }

    pub fn config(&self) -> &SendInBlueConfig {
        &self.config
    }

    /// Settings component, for the admin configuration surface
    pub fn settings(&self) -> &SettingsProvisioner {
        &self.settings
    }

    // ===== Host surface =====

    /// Admin configuration page, relative to the tenant's store location
    pub fn configuration_page_url(&self) -> String {
        self.config.configuration_route.clone()
    }

    /// Render zones the plugin contributes to (the page head only)
    pub fn widget_zones(&self) -> Vec<String> {
        vec![self.config.widget_zone.clone()]
    }

    /// View component rendered in `widget_zone`
    pub fn widget_view_component_name(&self, _widget_zone: &str) -> String {
        self.config.widget_view_component.clone()
    }

    // ===== Lifecycle =====

    /// Provision default settings, the synchronization task and locales
    ///
    /// Safe to repeat: settings and locales are overwritten, the task is only
    /// inserted when no task of its type exists.
    pub fn install(&self) -> Result<(), LifecycleError> {
        let _span = tracing::info_span!("sendinblue_install").entered();

        self.settings.apply_defaults(&ConfigurationRecord::default())?;

        let task_registered = self.tasks.ensure_registered(
            &self.config.synchronization_task_type,
            &self.config.synchronization_task_name,
            self.config.synchronization_interval_seconds(),
        )?;

        let locale_resources = self.locales.upsert_all()?;

        tracing::info!(task_registered, locale_resources, "SendInBlue plugin installed");
        self.publish(LifecycleEvent::installed(task_registered, locale_resources));
        Ok(())
    }

    /// Remove every artifact the plugin created
    ///
    /// Tenants are swept one by one; a failing tenant does not stop the
    /// others. If any tenant failed, settings, task and locales are kept so
    /// a retry can still resolve the tenants' email account ids.
    pub fn uninstall(&self) -> Result<UninstallReport, LifecycleError> {
        let _span = tracing::info_span!("sendinblue_uninstall").entered();

        let tenants = self
            .tenants
            .list_tenants()
            .map_err(|e| LifecycleError::store("tenants", e))?;

        let mut report = UninstallReport::default();
        let mut failures = Vec::new();
        for tenant in &tenants {
            match self.cleanup_tenant(tenant) {
                Ok((email_account_id, attributes_deleted)) => {
                    report.tenants_processed += 1;
                    if email_account_id.is_some() {
                        report.email_accounts_deleted += 1;
                    }
                    report.template_attributes_deleted += attributes_deleted;
                    self.publish(LifecycleEvent::tenant_cleaned(
                        tenant.id,
                        email_account_id,
                        attributes_deleted,
                    ));
                }
                Err(error) => {
                    tracing::warn!(
                        tenant_id = %tenant.id,
                        tenant = %tenant.name,
                        error = %error,
                        "SendInBlue tenant cleanup failed"
                    );
                    failures.push(TenantFailure {
                        tenant_id: tenant.id,
                        error,
                    });
                }
            }
        }

        if !failures.is_empty() {
            tracing::warn!(
                failed = failures.len(),
                total = tenants.len(),
                "SendInBlue uninstall incomplete; global state retained for retry"
            );
            return Err(LifecycleError::TenantCleanup { failures });
        }

        if self.email_accounts.remove_shared()?.is_some() {
            report.email_accounts_deleted += 1;
        }
        report.settings_deleted = self.settings.delete_all()?;
        report.task_removed = self
            .tasks
            .ensure_removed(&self.config.synchronization_task_type)?;
        report.locale_resources_deleted = self.locales.delete_all()?;

        tracing::info!(
            tenants = report.tenants_processed,
            email_accounts = report.email_accounts_deleted,
            template_attributes = report.template_attributes_deleted,
            "SendInBlue plugin uninstalled"
        );
        self.publish(LifecycleEvent::uninstalled(report.clone()));
        Ok(report)
    }

    /// Remove one tenant's email account and template metadata
    ///
    /// Returns the deleted account id and the number of deleted attributes.
    pub fn cleanup_tenant(&self, tenant: &Tenant) -> Result<(Option<i64>, usize), LifecycleError> {
        let _span = tracing::debug_span!("sendinblue_tenant_cleanup", tenant_id = %tenant.id).entered();
        let email_account_id = self.email_accounts.remove(tenant.id)?;
        let attributes_deleted = self.template_attributes.remove_known_keys(tenant.id)?;
        Ok((email_account_id, attributes_deleted))
    }

    fn publish(&self, event: LifecycleEvent) {
        if let Err(e) = self.event_publisher.publish(event) {
            tracing::warn!(error = %e, "Failed to publish SendInBlue lifecycle event");
        }
    }
}
