//! Contract layer - public API for the host's extension manager
//!
//! This layer contains the host entity models, the plugin's configuration
//! record, the error type and the native client trait.

pub mod client;
pub mod error;
pub mod model;

pub use client::SendInBlueApi;
pub use error::{LifecycleError, TenantFailure};
pub use model::{
    ConfigurationRecord, EmailAccount, GenericAttribute, HostEntity, LocaleResource,
    MessageTemplate, ScheduledTaskDescriptor, SettingScope, SettingsNamespace, Tenant,
    UninstallReport, CUSTOMER_EMAIL_PLACEHOLDER, SETTINGS_NAMESPACE, TRACKING_ID_PLACEHOLDER,
};
