//! Store failures during install/uninstall: fail fast, collect-and-continue, retry

use sendinblue_plugin::contract::{LifecycleError, SettingScope};
use sendinblue_plugin::domain::{NoOpEventPublisher, LOCALE_RESOURCES};
use sendinblue_plugin::infra::storage::InMemoryHost;
use std::sync::Arc;

mod common;
use common::{
    add_template, configure_email_account, orchestrator, orchestrator_with, tag_template,
    template_keys, BrokenPublisher, FlakyEmailAccounts, TestStorefronts, UnavailableScheduler,
    UnavailableTenants,
};

#[test]
fn test_failing_tenant_does_not_stop_the_others() {
    let host = InMemoryHost::new();
    let stores = TestStorefronts::register(&host);
    let flaky = Arc::new(FlakyEmailAccounts::new(host.email_accounts.clone()));
    let mut host_stores = host.stores();
    host_stores.email_accounts = flaky.clone();
    let plugin = orchestrator_with(host_stores, Arc::new(NoOpEventPublisher));
    plugin.install().unwrap();

    configure_email_account(&host, SettingScope::Tenant(stores.electronics.id), 1);
    configure_email_account(&host, SettingScope::Tenant(stores.apparel.id), 2);
    configure_email_account(&host, SettingScope::Tenant(stores.outlet.id), 3);
    let outlet_template = add_template(&host, &stores.outlet, 30, "Customer.WelcomeMessage");
    tag_template(&host, &outlet_template, "TemplateId", "12");
    flaky.fail_on(2);

    let result = plugin.uninstall();

    match result {
        Err(LifecycleError::TenantCleanup { failures }) => {
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].tenant_id, stores.apparel.id);
            assert!(matches!(
                failures[0].error,
                LifecycleError::StoreUnavailable { store: "email_accounts", .. }
            ));
        }
        other => panic!("Expected TenantCleanup, got {:?}", other),
    }

    // Tenants after the failing one were still processed
    assert!(!host.email_accounts.contains(1));
    assert!(host.email_accounts.contains(2));
    assert!(!host.email_accounts.contains(3));
    assert!(template_keys(&host, &outlet_template).is_empty());

    // Global state is kept so the retry can still find account 2
    assert_eq!(host.scheduler.tasks().len(), 1);
    assert_eq!(host.localization.len(), LOCALE_RESOURCES.len());
    assert!(host
        .settings
        .value(SettingScope::Tenant(stores.apparel.id), "SendInBlueSettings.EmailAccountId")
        .is_some());

    flaky.recover();
    let report = plugin.uninstall().unwrap();

    assert!(!host.email_accounts.contains(2));
    assert_eq!(report.email_accounts_deleted, 1);
    assert!(host.settings.is_empty());
    assert!(host.scheduler.tasks().is_empty());
    assert!(host.localization.is_empty());
}

#[test]
fn test_unreachable_tenant_registry_aborts_uninstall() {
    let host = InMemoryHost::new();
    orchestrator(&host).install().unwrap();
    let mut host_stores = host.stores();
    host_stores.tenants = Arc::new(UnavailableTenants);
    let plugin = orchestrator_with(host_stores, Arc::new(NoOpEventPublisher));

    let result = plugin.uninstall();

    let err = result.unwrap_err();
    assert!(matches!(err, LifecycleError::StoreUnavailable { store: "tenants", .. }));
    assert!(err.is_retriable());
    assert_eq!(host.scheduler.tasks().len(), 1);
    assert_eq!(host.settings.count_with_prefix("SendInBlueSettings."), 12);
}

#[test]
fn test_unreachable_scheduler_fails_install_before_locales() {
    let host = InMemoryHost::new();
    let mut host_stores = host.stores();
    host_stores.scheduler = Arc::new(UnavailableScheduler);
    let plugin = orchestrator_with(host_stores, Arc::new(NoOpEventPublisher));

    let err = plugin.install().unwrap_err();

    assert!(matches!(err, LifecycleError::StoreUnavailable { store: "scheduler", .. }));
    assert!(err.to_string().contains("scheduler connection refused"));
    assert!(host.localization.is_empty());

    // Re-running against a healthy host completes the install
    orchestrator(&host).install().unwrap();
    assert_eq!(host.scheduler.tasks().len(), 1);
    assert_eq!(host.localization.len(), LOCALE_RESOURCES.len());
}

#[test]
fn test_event_publish_failure_does_not_fail_lifecycle() {
    let host = InMemoryHost::new();
    TestStorefronts::register(&host);
    let plugin = orchestrator_with(host.stores(), Arc::new(BrokenPublisher));

    plugin.install().unwrap();
    assert!(plugin.uninstall().is_ok());
    assert!(host.scheduler.tasks().is_empty());
}

#[test]
fn test_invalid_config_is_rejected_at_construction() {
    let host = InMemoryHost::new();
    let config = sendinblue_plugin::SendInBlueConfig {
        synchronization_period_hours: 0,
        ..Default::default()
    };

    let result = sendinblue_plugin::LifecycleOrchestrator::new(
        host.stores(),
        config,
        Arc::new(NoOpEventPublisher),
    );

    assert!(matches!(result, Err(LifecycleError::Config { .. })));
}
