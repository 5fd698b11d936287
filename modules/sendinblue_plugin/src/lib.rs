//! SendInBlue Plugin Module
//!
//! Attaches the SendInBlue marketing-automation integration to a multi-tenant
//! host. Installing the plugin provisions default settings, the contact
//! synchronization task and the locale catalog; uninstalling removes all of
//! that together with every tenant's SMTP account and template attributes.

// Public exports
pub mod contract;
pub use contract::{
    client::SendInBlueApi, error::LifecycleError, ConfigurationRecord, EmailAccount,
    GenericAttribute, HostEntity, LocaleResource, MessageTemplate, ScheduledTaskDescriptor,
    SettingScope, Tenant, UninstallReport,
};

pub mod config;
pub use config::SendInBlueConfig;

pub mod api;
pub use api::native::NativeClient;

pub mod domain;
pub use domain::{HostStores, LifecycleOrchestrator};

pub mod infra;
